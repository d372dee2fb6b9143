//! Comparison driver
//!
//! Extracts the baseline table, then the candidate table, then prints the
//! per-section differences. Each step runs to completion before the next.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::diff::{diff_tables, DiffRow};
use crate::error::SizeCmpError;
use crate::extractor::{ExtractError, SectionExtractor};
use crate::infra::CommandExecutor;
use crate::report;

/// Compare the section sizes of the two configured files.
///
/// The report goes to stderr; nothing is printed when no section changed.
///
/// # Examples
///
/// ```no_run
/// use exesizecmp::cmd::cmd_compare;
/// use exesizecmp::config::{Config, InputPair};
///
/// let config = Config::new(InputPair::new("old/app", "new/app")).with_objdump("objdump");
/// cmd_compare(&config)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The dump tool is not installed
/// - The dump tool fails on either file
/// - The dump tool's output is not a section header table
pub fn cmd_compare(config: &Config) -> Result<()> {
    let extractor = SectionExtractor::new(config.objdump.as_str());
    if !extractor.is_installed() {
        let baseline_path = config.inputs.baseline();
        return Err(SizeCmpError::from(ExtractError::ToolMissing {
            tool: extractor.tool().to_string(),
        }))
        .with_context(|| format!("extracting sections from {}", baseline_path.display()));
    }

    cmd_compare_with(config, &extractor)
}

/// Run the comparison with an already constructed extractor
pub fn cmd_compare_with<CE: CommandExecutor>(
    config: &Config,
    extractor: &SectionExtractor<CE>,
) -> Result<()> {
    let rows = compare_tables(config, extractor)?;
    report::print_report(&rows).map_err(SizeCmpError::Report)?;
    Ok(())
}

fn compare_tables<CE: CommandExecutor>(
    config: &Config,
    extractor: &SectionExtractor<CE>,
) -> Result<Vec<DiffRow>> {
    let baseline_path = config.inputs.baseline();
    let candidate_path = config.inputs.candidate();

    let baseline = extractor
        .extract(baseline_path)
        .map_err(SizeCmpError::from)
        .with_context(|| format!("extracting sections from {}", baseline_path.display()))?;
    let candidate = extractor
        .extract(candidate_path)
        .map_err(SizeCmpError::from)
        .with_context(|| format!("extracting sections from {}", candidate_path.display()))?;

    log::debug!(
        "baseline has {} sections, candidate has {}",
        baseline.len(),
        candidate.len()
    );

    Ok(diff_tables(&baseline, &candidate))
}
