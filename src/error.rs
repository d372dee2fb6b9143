//! Top-level error types and diagnostic formatting
//!
//! Every runtime failure is fatal: it is propagated up to `main`, rendered
//! once by [`ErrorFormatter`] and turned into exit status 1. Usage errors are
//! reported by the argument parser and never reach this module.

use thiserror::Error;

use crate::extractor::ExtractError;

/// Exit status for runtime failures
pub const EXIT_FAILURE: i32 = 1;

/// Exit status for command-line usage errors
pub const EXIT_USAGE: i32 = 2;

/// exesizecmp errors
#[derive(Error, Debug)]
pub enum SizeCmpError {
    /// Section table extraction failed
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Writing the report failed
    #[error("writing report: {0}")]
    Report(#[source] std::io::Error),
}

impl SizeCmpError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use exesizecmp::error::SizeCmpError;
    /// use exesizecmp::extractor::ExtractError;
    ///
    /// let error = SizeCmpError::from(ExtractError::ToolMissing {
    ///     tool: "llvm-objdump-14".to_string(),
    /// });
    /// assert!(error.suggestion().unwrap().contains("-objdump"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Extract(ExtractError::ToolMissing { tool }) => Some(format!(
                "Install {} or pick another dump tool with -objdump=<name>",
                tool
            )),
            Self::Extract(ExtractError::CommandFailed { stderr, .. }) if !stderr.is_empty() => {
                Some(format!("Tool output:\n  {}", stderr.replace('\n', "\n  ")))
            }
            Self::Extract(ExtractError::MalformedLine { .. } | ExtractError::InvalidSize { .. }) => {
                Some("The dump tool must print a `-h --wide` section header table".to_string())
            }
            _ => None,
        }
    }

    /// Get exit code for this error
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestions
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        // Main error message
        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut indent = 1;
        for cause in error.chain().skip(1) {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                cause
            ));
            indent += 1;
        }

        let suggestion = error
            .chain()
            .find_map(|cause| {
                cause
                    .downcast_ref::<SizeCmpError>()
                    .and_then(SizeCmpError::suggestion)
            });
        if let Some(suggestion) = suggestion {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<SizeCmpError>())
            .map_or(EXIT_FAILURE, SizeCmpError::exit_code)
    }
}
