//! Error types for section-size extraction

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting a section-size table
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The dump tool could not be found
    #[error("{tool} not found in PATH")]
    ToolMissing {
        /// Tool name as configured
        tool: String,
    },

    /// The dump tool could not be launched
    #[error("running {tool} on {}", file.display())]
    Spawn {
        /// Tool name as configured
        tool: String,
        /// Input file the tool was run on
        file: PathBuf,
        /// I/O error from spawning the process
        #[source]
        source: std::io::Error,
    },

    /// The dump tool exited unsuccessfully
    #[error("running {tool} on {}: exit status {status}", file.display())]
    CommandFailed {
        /// Tool name as configured
        tool: String,
        /// Input file the tool was run on
        file: PathBuf,
        /// Exit code, or -1 when terminated by a signal
        status: i32,
        /// Captured stderr of the tool
        stderr: String,
    },

    /// A line in the section table did not match the expected columns
    #[error("bad match on sections line {line:?}")]
    MalformedLine {
        /// Offending line
        line: String,
    },

    /// The size column was not valid hexadecimal
    #[error("can't parse sec size {size:?} in line {line:?} in sections table")]
    InvalidSize {
        /// Size token as printed by the tool
        size: String,
        /// Offending line
        line: String,
    },
}
