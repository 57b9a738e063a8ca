//! Markdown output formatter

use super::{OutputFormatter, SegmentRecord};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs segments as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    segment_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            segment_count: 0,
        }
    }

    /// Consume the formatter and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_segment(&mut self, record: &SegmentRecord<'_>) -> Result<()> {
        self.segment_count += 1;
        // Keep multi-line segments inside their list item
        let text = record.text.replace('\n', "\n   ");
        writeln!(self.writer, "{}. {}", self.segment_count, text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total segments: {}*", self.segment_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
