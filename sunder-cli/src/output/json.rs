//! JSON output formatter

use super::{OutputFormatter, SegmentRecord};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs segments as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    segments: Vec<SegmentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SegmentData {
    /// Input the segment came from
    pub file: String,
    /// Position within the input
    pub index: usize,
    /// Byte offset in the original input
    pub offset: usize,
    /// Length of the segment in bytes
    pub length: usize,
    /// The segment text
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            segments: Vec::new(),
        }
    }

    /// Consume the formatter and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_segment(&mut self, record: &SegmentRecord<'_>) -> Result<()> {
        self.segments.push(SegmentData {
            file: record.source.to_string(),
            index: record.index,
            offset: record.offset,
            length: record.text.len(),
            text: record.text.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.segments)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.segments)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array_with_offsets() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .format_segment(&SegmentRecord {
                source: "a.txt",
                index: 1,
                offset: 4,
                text: "東京",
            })
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        let parsed: Vec<SegmentData> = serde_json::from_str(&output).unwrap();
        assert_eq!(
            parsed,
            vec![SegmentData {
                file: "a.txt".to_string(),
                index: 1,
                offset: 4,
                length: 6,
                text: "東京".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output.trim(), "[]");
    }
}
