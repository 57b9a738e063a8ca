//! Plain text output formatter

use super::{OutputFormatter, SegmentRecord};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one segment per line
///
/// Segments are written verbatim, so a segment containing a newline spans
/// several lines. Use the JSON formatter when segment boundaries must be
/// recoverable.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_segment(&mut self, record: &SegmentRecord<'_>) -> Result<()> {
        writeln!(self.writer, "{}", record.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_are_written_verbatim() {
        let mut formatter = TextFormatter::new(Vec::new());
        for (index, text) in [" a ", "", "b"].into_iter().enumerate() {
            let record = SegmentRecord {
                source: "input",
                index,
                offset: 0,
                text,
            };
            formatter.format_segment(&record).unwrap();
        }
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output, " a \n\nb\n");
    }

    #[test]
    fn test_embedded_newlines_are_not_escaped() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter
            .format_segment(&SegmentRecord {
                source: "input",
                index: 0,
                offset: 0,
                text: "tail\nline",
            })
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output, "tail\nline\n");
    }
}
