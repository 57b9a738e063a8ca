//! Delimiter parsing and dispatch to the segmentation engine

use crate::error::CliError;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use sunder_core::{split_with_config, AnyOf, Delimiter, Sequence, Single, SplitConfig};

/// How the delimiter argument is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterMode {
    /// Exactly one character
    #[default]
    Single,
    /// A substring that must match contiguously
    Sequence,
    /// Any of the given characters (empty = whitespace)
    Any,
}

impl DelimiterMode {
    /// Lowercase name, as used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            DelimiterMode::Single => "single",
            DelimiterMode::Sequence => "sequence",
            DelimiterMode::Any => "any",
        }
    }
}

/// A parsed delimiter, ready to drive the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelimiterSpec {
    /// Split on one character
    Single(char),
    /// Split on a substring
    Sequence(String),
    /// Split on any member of the set
    AnyOf(SmallVec<[char; 8]>),
}

/// Location of one segment inside its source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset from the start of the source
    pub offset: usize,
    /// Length in bytes
    pub len: usize,
}

impl Span {
    /// The segment text this span covers
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.offset..self.offset + self.len]
    }
}

impl DelimiterSpec {
    /// Parse a raw (possibly escaped) delimiter for the given mode
    pub fn parse(raw: &str, mode: DelimiterMode) -> Result<Self, CliError> {
        let decoded = unescape(raw)?;
        match mode {
            DelimiterMode::Single => {
                let mut chars = decoded.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Ok(DelimiterSpec::Single(ch)),
                    _ => Err(CliError::InvalidDelimiter(format!(
                        "single mode expects exactly one character, got {raw:?}"
                    ))),
                }
            }
            DelimiterMode::Sequence => Ok(DelimiterSpec::Sequence(decoded)),
            DelimiterMode::Any => Ok(DelimiterSpec::AnyOf(decoded.chars().collect())),
        }
    }

    /// Human readable description for logs and validation output
    pub fn describe(&self) -> String {
        match self {
            DelimiterSpec::Single(ch) => format!("single {ch:?}"),
            DelimiterSpec::Sequence(seq) => format!("sequence {seq:?}"),
            DelimiterSpec::AnyOf(set) if set.is_empty() => "any whitespace".to_string(),
            DelimiterSpec::AnyOf(set) => format!("any of {:?}", set.as_slice()),
        }
    }

    /// Split `text` and return the span of every produced segment
    pub fn spans(&self, text: &str, config: &SplitConfig) -> Vec<Span> {
        match self {
            DelimiterSpec::Single(ch) => collect_spans(text, Single(*ch), config),
            DelimiterSpec::Sequence(seq) => collect_spans(text, Sequence(seq.as_str()), config),
            DelimiterSpec::AnyOf(set) => collect_spans(text, AnyOf(set.as_slice()), config),
        }
    }
}

fn collect_spans<D: Delimiter<str>>(text: &str, delimiter: D, config: &SplitConfig) -> Vec<Span> {
    split_with_config(text, delimiter, config)
        .with_offsets()
        .map(|(offset, segment)| Span {
            offset,
            len: segment.len(),
        })
        .collect()
}

/// Decode `\n`, `\t`, `\r`, `\0`, `\s` (space) and `\\` escapes
pub fn unescape(raw: &str) -> Result<String, CliError> {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            decoded.push(ch);
            continue;
        }
        let escaped = match chars.next() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('0') => '\0',
            Some('s') => ' ',
            Some('\\') => '\\',
            Some(other) => {
                return Err(CliError::InvalidDelimiter(format!(
                    "unknown escape sequence \\{other}"
                )))
            }
            None => {
                return Err(CliError::InvalidDelimiter(
                    "trailing backslash in delimiter".to_string(),
                ))
            }
        };
        decoded.push(escaped);
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_sequences() {
        assert_eq!(unescape(r"a\nb\tc\\d\s").unwrap(), "a\nb\tc\\d ");
        assert_eq!(unescape("plain").unwrap(), "plain");
    }

    #[test]
    fn test_unescape_rejects_bad_sequences() {
        assert!(unescape(r"\q").is_err());
        assert!(unescape("abc\\").is_err());
    }

    #[test]
    fn test_parse_single() {
        assert_eq!(
            DelimiterSpec::parse(r"\n", DelimiterMode::Single).unwrap(),
            DelimiterSpec::Single('\n')
        );
        assert!(DelimiterSpec::parse("ab", DelimiterMode::Single).is_err());
        assert!(DelimiterSpec::parse("", DelimiterMode::Single).is_err());
    }

    #[test]
    fn test_parse_sequence_and_any() {
        assert_eq!(
            DelimiterSpec::parse("::", DelimiterMode::Sequence).unwrap(),
            DelimiterSpec::Sequence("::".to_string())
        );
        let spec = DelimiterSpec::parse(",;", DelimiterMode::Any).unwrap();
        assert_eq!(spec, DelimiterSpec::AnyOf(SmallVec::from_slice(&[',', ';'])));
        assert_eq!(
            DelimiterSpec::parse("", DelimiterMode::Any).unwrap().describe(),
            "any whitespace"
        );
    }

    #[test]
    fn test_spans_follow_config() {
        let text = " a ,, b ";
        let config = SplitConfig::builder()
            .trim_entries(true)
            .remove_empty_entries(true)
            .build()
            .unwrap();
        let spans = DelimiterSpec::Single(',').spans(text, &config);
        let segments: Vec<&str> = spans.iter().map(|span| span.slice(text)).collect();
        assert_eq!(segments, vec!["a", "b"]);
        assert_eq!(spans[0], Span { offset: 1, len: 1 });
    }

    #[test]
    fn test_whitespace_spans() {
        let spec = DelimiterSpec::AnyOf(SmallVec::new());
        let text = "x y\u{3000}z";
        let spans = spec.spans(text, &SplitConfig::default());
        let segments: Vec<&str> = spans.iter().map(|span| span.slice(text)).collect();
        assert_eq!(segments, vec!["x", "y", "z"]);
        assert_eq!(
            spans,
            vec![
                Span { offset: 0, len: 1 },
                Span { offset: 2, len: 1 },
                Span { offset: 6, len: 1 },
            ]
        );
    }
}
