//! Section-size extraction
//!
//! Runs an external object-dump tool against one input file and turns its
//! section header report into a [`SectionSizeTable`].
//!
//! # Examples
//!
//! ```no_run
//! use exesizecmp::extractor::SectionExtractor;
//! use std::path::Path;
//!
//! let extractor = SectionExtractor::new("llvm-objdump-14");
//! let table = extractor.extract(Path::new("target/release/app"))?;
//!
//! for (name, size) in table.iter() {
//!     println!("{name}: {size} bytes");
//! }
//! # Ok::<(), exesizecmp::extractor::ExtractError>(())
//! ```

pub mod error;
pub mod executor;
pub mod parser;
pub mod table;

pub use error::ExtractError;
pub use parser::parse_section_headers;
pub use table::SectionSizeTable;

use crate::infra::{CommandExecutor, RealCommandExecutor};
use std::path::Path;

/// Extracts per-section sizes by invoking a dump tool
pub struct SectionExtractor<CE: CommandExecutor = RealCommandExecutor> {
    objdump: String,
    cmd_executor: CE,
}

impl SectionExtractor {
    /// Create an extractor that runs `objdump` as a real process
    pub fn new(objdump: impl Into<String>) -> Self {
        Self::with_executor(objdump, RealCommandExecutor)
    }
}

impl<CE: CommandExecutor> SectionExtractor<CE> {
    /// Create an extractor with a custom command executor
    pub fn with_executor(objdump: impl Into<String>, cmd_executor: CE) -> Self {
        Self {
            objdump: objdump.into(),
            cmd_executor,
        }
    }

    /// Name of the dump tool this extractor invokes
    pub fn tool(&self) -> &str {
        &self.objdump
    }

    /// Command executor used to launch the tool
    pub fn executor(&self) -> &CE {
        &self.cmd_executor
    }

    /// Run the dump tool on `file` and parse its section table
    pub fn extract(&self, file: &Path) -> Result<SectionSizeTable, ExtractError> {
        let output = self.run_section_headers(file)?;
        parse_section_headers(&output)
    }
}
