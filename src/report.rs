//! Assembly of rendered formulas into a LaTeX document.
//!
//! The renderer produces math-mode strings; this layer splices them
//! verbatim into display equations between a minimal preamble and
//! postamble. Natural-language narration and long-document layout live in
//! external tooling, not here.

use std::io::Write;

use crate::error::Result;
use crate::latex::mask_special_chars;

/// Writes rendered formulas into a LaTeX document on an underlying writer.
///
/// # Examples
///
/// ```
/// use sbmltex::ReportWriter;
///
/// let mut buf = Vec::new();
/// let mut report = ReportWriter::new(&mut buf);
/// report.begin_document("Glycolysis model").unwrap();
/// report.write_equation(Some("rate:v1"), "\\mathtt{k1}\\cdot \\left[\\mathtt{S1}\\right]").unwrap();
/// report.end_document().unwrap();
/// ```
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the document preamble. The title is raw text and is masked
    /// before embedding.
    pub fn begin_document(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer, "\\documentclass{{article}}")?;
        writeln!(self.writer, "\\begin{{document}}")?;
        writeln!(self.writer, "\\section*{{{}}}", mask_special_chars(title, true))?;
        Ok(())
    }

    /// Write one rendered formula as a display equation. The math text is
    /// spliced verbatim; it must already be fully rendered.
    pub fn write_equation(&mut self, label: Option<&str>, math: &str) -> Result<()> {
        writeln!(self.writer, "\\begin{{equation}}")?;
        if let Some(label) = label {
            writeln!(self.writer, "\\label{{{}}}", label)?;
        }
        writeln!(self.writer, "{}", math)?;
        writeln!(self.writer, "\\end{{equation}}")?;
        Ok(())
    }

    /// Close the document.
    pub fn end_document(&mut self) -> Result<()> {
        writeln!(self.writer, "\\end{{document}}")?;
        Ok(())
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
