//! Run configuration
//!
//! Built once from the command line and passed by reference to the driver.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// Dump tool invoked when none is given on the command line
pub const DEFAULT_OBJDUMP: &str = "llvm-objdump-14";

/// The two files being compared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPair {
    /// First file; sizes are reported relative to it
    pub baseline: PathBuf,
    /// Second file
    pub candidate: PathBuf,
}

impl InputPair {
    /// Create a pair from a baseline and candidate path
    pub fn new(baseline: impl Into<PathBuf>, candidate: impl Into<PathBuf>) -> Self {
        Self {
            baseline: baseline.into(),
            candidate: candidate.into(),
        }
    }

    /// Baseline path
    pub fn baseline(&self) -> &Path {
        &self.baseline
    }

    /// Candidate path
    pub fn candidate(&self) -> &Path {
        &self.candidate
    }
}

impl fmt::Display for InputPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}",
            self.baseline.display(),
            self.candidate.display()
        )
    }
}

/// Parse the comma-separated `-i` value into exactly two paths.
///
/// Paths are taken byte for byte, so file names that are not valid UTF-8
/// survive. Used as a clap value parser, so the error string ends up in the
/// usage error message.
///
/// # Examples
///
/// ```
/// use exesizecmp::config::parse_input_pair;
///
/// let pair = parse_input_pair("old.o,new.o").unwrap();
/// assert_eq!(pair.baseline.to_str(), Some("old.o"));
/// assert_eq!(pair.candidate.to_str(), Some("new.o"));
///
/// assert!(parse_input_pair("a.o,b.o,c.o").is_err());
/// ```
pub fn parse_input_pair(value: impl AsRef<OsStr>) -> Result<InputPair, String> {
    let value = value.as_ref();
    if value.is_empty() {
        return Err("supply input files with -i option".to_string());
    }

    let paths: Vec<&[u8]> = value.as_encoded_bytes().split(|b| *b == b',').collect();
    match paths.as_slice() {
        [baseline, candidate] if !baseline.is_empty() && !candidate.is_empty() => {
            // SAFETY: both parts come from splitting encoded OsStr bytes on an ASCII comma
            let (baseline, candidate) = unsafe {
                (
                    OsStr::from_encoded_bytes_unchecked(baseline),
                    OsStr::from_encoded_bytes_unchecked(candidate),
                )
            };
            Ok(InputPair::new(baseline, candidate))
        }
        _ => Err("supply exactly two input files with -i option".to_string()),
    }
}

/// Configuration for a comparison run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Files to compare
    pub inputs: InputPair,
    /// Dump tool program name or path
    pub objdump: String,
}

impl Config {
    /// Create a configuration using the default dump tool
    pub fn new(inputs: InputPair) -> Self {
        Self {
            inputs,
            objdump: DEFAULT_OBJDUMP.to_string(),
        }
    }

    /// Override the dump tool
    pub fn with_objdump(mut self, objdump: impl Into<String>) -> Self {
        self.objdump = objdump.into();
        self
    }
}

/// Single-dash long flags accepted for compatibility with Go-style flag syntax
const LONG_FLAGS: &[&str] = &["objdump", "inputs", "help", "version"];

/// Rewrite `-objdump=x` style arguments into `--objdump=x` before clap sees them.
///
/// Short flags (`-i`, `-h`) and anything after `--` are left alone. Arguments
/// are compared as raw bytes, so non-UTF-8 values pass through untouched.
pub fn normalize_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if passthrough {
                return arg;
            }
            if arg.as_os_str() == "--" {
                passthrough = true;
                return arg;
            }
            let is_long_flag = match arg.as_encoded_bytes().strip_prefix(b"-") {
                Some(rest) if !rest.starts_with(b"-") => {
                    let name = rest.split(|b| *b == b'=').next().unwrap_or(rest);
                    LONG_FLAGS.iter().any(|flag| flag.as_bytes() == name)
                }
                _ => false,
            };
            if is_long_flag {
                let mut long = OsString::from("-");
                long.push(&arg);
                long
            } else {
                arg
            }
        })
        .collect()
}
