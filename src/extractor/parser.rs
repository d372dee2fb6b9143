//! Section header report parsing

use regex::Regex;
use std::sync::OnceLock;

use super::error::ExtractError;
use super::table::SectionSizeTable;

/// Marker line that introduces the section table
pub const SECTIONS_MARKER: &str = "Sections:";

static SECTION_LINE_RE: OnceLock<Regex> = OnceLock::new();

fn section_line_re() -> &'static Regex {
    SECTION_LINE_RE.get_or_init(|| {
        // SAFETY: This regex pattern is compile-time validated and will never fail.
        Regex::new(r"^\s+([0-9]+)\s+(\S+)\s+(\S+)\s+.*").expect("section line regex is valid")
    })
}

/// A single row of the section table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLine<'a> {
    /// Section index as printed by the tool
    pub index: &'a str,
    /// Section name
    pub name: &'a str,
    /// Size in bytes
    pub size: u64,
}

/// Parse one data line of the section table.
///
/// The line must consist of leading whitespace, a decimal index, a name, an
/// unprefixed hexadecimal size no larger than `i64::MAX` and at least one
/// more whitespace-separated column.
///
/// # Examples
///
/// ```
/// use exesizecmp::extractor::parser::parse_section_line;
///
/// let line = "  0 .text         000003e8 0000000000001000 TEXT";
/// let section = parse_section_line(line)?;
/// assert_eq!(section.name, ".text");
/// assert_eq!(section.size, 1000);
/// # Ok::<(), exesizecmp::extractor::ExtractError>(())
/// ```
pub fn parse_section_line(line: &str) -> Result<SectionLine<'_>, ExtractError> {
    let caps = section_line_re()
        .captures(line)
        .ok_or_else(|| ExtractError::MalformedLine {
            line: line.to_string(),
        })?;

    // Groups 1-3 are not optional, so they are present whenever the regex matched
    let (Some(index), Some(name), Some(size)) = (caps.get(1), caps.get(2), caps.get(3)) else {
        return Err(ExtractError::MalformedLine {
            line: line.to_string(),
        });
    };

    let size_str = size.as_str();
    // Sizes above i64::MAX are rejected, matching a signed 64-bit section size
    let size = i64::from_str_radix(size_str, 16)
        .ok()
        .and_then(|size| u64::try_from(size).ok())
        .ok_or_else(|| ExtractError::InvalidSize {
            size: size_str.to_string(),
            line: line.to_string(),
        })?;

    Ok(SectionLine {
        index: index.as_str(),
        name: name.as_str(),
        size,
    })
}

/// Parse a `-h --wide` section header report into a size table.
///
/// Everything before the first `Sections:` line is ignored, as is the column
/// title line right after it. Every line after that must be a section row.
/// Zero-size sections are left out of the table. Output without a marker
/// yields an empty table.
pub fn parse_section_headers(output: &str) -> Result<SectionSizeTable, ExtractError> {
    let mut table = SectionSizeTable::new();
    let mut lines = output.lines();

    if !lines.by_ref().any(|line| line == SECTIONS_MARKER) {
        log::warn!("no {:?} marker in section header output", SECTIONS_MARKER);
        return Ok(table);
    }

    // Column titles
    lines.next();

    let mut dropped = 0usize;
    for line in lines {
        let section = parse_section_line(line)?;
        if section.size == 0 {
            dropped += 1;
            continue;
        }
        log::trace!("section {} {} = {:#x}", section.index, section.name, section.size);
        table.insert(section.name, section.size);
    }

    log::debug!(
        "parsed {} sections ({} zero-size dropped)",
        table.len(),
        dropped
    );

    Ok(table)
}
