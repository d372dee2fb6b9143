//! Section comparison report rendering
//!
//! Rows are written as tab-separated cells through [`TabWriter`], which lines
//! the columns up on tab stops before anything reaches the underlying writer.

use std::io::{self, Write};

use crate::diff::DiffRow;

/// Elastic tab-stop writer.
///
/// Text is buffered until [`flush`](Write::flush). Each line is split into
/// tab-terminated cells; the text after the last tab is not part of any
/// column. A column runs over consecutive lines that all have a cell in it,
/// and is as wide as its widest cell plus padding, rounded up to a whole tab
/// stop. Padding is written as tab characters.
///
/// # Examples
///
/// ```
/// use exesizecmp::report::TabWriter;
/// use std::io::Write;
///
/// let mut out = Vec::new();
/// let mut tw = TabWriter::new(&mut out);
/// writeln!(tw, "a\tb")?;
/// writeln!(tw, "longer_than_eight\tc")?;
/// tw.flush()?;
/// drop(tw);
///
/// assert_eq!(String::from_utf8(out).unwrap(), "a\t\t\tb\nlonger_than_eight\tc\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct TabWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
    minwidth: usize,
    tabwidth: usize,
    padding: usize,
}

impl<W: Write> TabWriter<W> {
    /// Create a writer with minimum cell width 1, tab width 8 and padding 1
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            minwidth: 1,
            tabwidth: 8,
            padding: 1,
        }
    }

    /// Consume the writer and return the underlying one.
    ///
    /// Buffered text that was not flushed is discarded.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn format_block(
        &self,
        lines: &[Vec<&str>],
        widths: &mut Vec<usize>,
        mut line0: usize,
        line1: usize,
        out: &mut String,
    ) {
        let column = widths.len();
        let mut this = line0;

        while this < line1 {
            if column + 1 >= lines[this].len() {
                this += 1;
                continue;
            }

            // A cell exists in this column, so a new column block starts here
            self.write_lines(lines, widths, line0, this, out);
            line0 = this;

            let mut width = self.minwidth;
            while this < line1 && column + 1 < lines[this].len() {
                let cell_width = text_width(lines[this][column]) + self.padding;
                width = width.max(cell_width);
                this += 1;
            }

            widths.push(width);
            self.format_block(lines, widths, line0, this, out);
            widths.pop();
            line0 = this;
        }

        self.write_lines(lines, widths, line0, line1, out);
    }

    fn write_lines(
        &self,
        lines: &[Vec<&str>],
        widths: &[usize],
        line0: usize,
        line1: usize,
        out: &mut String,
    ) {
        for (i, cells) in lines.iter().enumerate().take(line1).skip(line0) {
            for (j, cell) in cells.iter().enumerate() {
                out.push_str(cell);
                if let Some(&width) = widths.get(j) {
                    let used = text_width(cell);
                    let cell_width = width.div_ceil(self.tabwidth) * self.tabwidth;
                    let tabs = (cell_width - used).div_ceil(self.tabwidth);
                    out.extend(std::iter::repeat_n('\t', tabs));
                }
            }

            // The last line is whatever followed the final newline
            if i + 1 < lines.len() {
                out.push('\n');
            }
        }
    }
}

/// Cell width in characters, one per Unicode scalar value
fn text_width(cell: &str) -> usize {
    cell.chars().count()
}

impl<W: Write> Write for TabWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let text = String::from_utf8_lossy(&self.buf).into_owned();
            let lines: Vec<Vec<&str>> = text
                .split('\n')
                .map(|line| line.split('\t').collect())
                .collect();

            let mut out = String::with_capacity(text.len() * 2);
            self.format_block(&lines, &mut Vec::new(), 0, lines.len(), &mut out);

            self.inner.write_all(out.as_bytes())?;
            self.buf.clear();
        }
        self.inner.flush()
    }
}

/// Write the comparison rows as an aligned table and flush once
pub fn write_report<W: Write>(rows: &[DiffRow], out: W) -> io::Result<()> {
    let mut tw = TabWriter::new(out);
    for row in rows {
        writeln!(
            tw,
            "{}\t{}\t{}\t{}\tp={:.1}%",
            row.name, row.baseline, row.candidate, row.delta, row.percent
        )?;
    }
    tw.flush()
}

/// Print the comparison rows to stderr
pub fn print_report(rows: &[DiffRow]) -> io::Result<()> {
    write_report(rows, io::stderr().lock())
}
