//! Output formatting module

use crate::config::OutputFormat;
use anyhow::Result;
use std::io::Write;

/// One segment as handed to a formatter
#[derive(Debug, Clone, Copy)]
pub struct SegmentRecord<'a> {
    /// Display name of the input the segment came from
    pub source: &'a str,
    /// Position of the segment within its input (0-based)
    pub index: usize,
    /// Byte offset of the segment within its input
    pub offset: usize,
    /// Segment text
    pub text: &'a str,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single segment
    fn format_segment(&mut self, record: &SegmentRecord<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter<W>(format: OutputFormat, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
