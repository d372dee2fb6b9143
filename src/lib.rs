#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! exesizecmp library
//!
//! Compares the section-size layout of two compiled object or executable
//! files. Section sizes come from an external objdump-compatible tool; this
//! crate never reads the binaries itself.
//!
//! # Example
//!
//! Diffing two section tables:
//!
//! ```
//! use exesizecmp::diff::diff_tables;
//! use exesizecmp::extractor::parse_section_headers;
//! use exesizecmp::report::write_report;
//!
//! let before = parse_section_headers(
//!     "Sections:\nIdx Name Size\n  0 .text 000003e8 0 TEXT\n  1 .data 00000010 0 DATA\n",
//! )?;
//! let after = parse_section_headers(
//!     "Sections:\nIdx Name Size\n  0 .text 0000044c 0 TEXT\n  1 .data 00000010 0 DATA\n",
//! )?;
//!
//! let rows = diff_tables(&before, &after);
//! let mut out = Vec::new();
//! write_report(&rows, &mut out)?;
//!
//! assert_eq!(String::from_utf8(out)?, ".text\t1000\t1100\t100\tp=10.0%\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Comparison driver
pub mod cmd;
/// Run configuration and command-line value parsing
pub mod config;
/// Per-section size differences
pub mod diff;
/// Error types and diagnostic formatting
pub mod error;
/// Section-size extraction via an external dump tool
pub mod extractor;
/// Process execution abstraction
pub mod infra;
/// Aligned report rendering
pub mod report;
