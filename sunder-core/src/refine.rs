//! Text refinement: trimming and empty-segment suppression
//!
//! Refinement sits on top of a text [`Split`] cursor. Each raw segment is
//! optionally trimmed, then dropped if empty and empty removal is on; a
//! dropped segment never ends the enumeration, the underlying cursor is
//! simply advanced again. Segment budgets count raw segments.

use crate::cursor::{SegmentCursor, Split, WithOffsets};
use crate::error::Result;
use crate::matcher::Delimiter;
use crate::validate::validate_options;
use std::iter::FusedIterator;

bitflags::bitflags! {
    /// Refinement applied to text segments
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SplitOptions: u32 {
        /// Strip leading and trailing whitespace from every segment
        const TRIM_ENTRIES = 0b01;

        /// Skip segments that are empty (after trimming, if enabled)
        const REMOVE_EMPTY_ENTRIES = 0b10;
    }
}

impl SplitOptions {
    /// Build options from raw bits, rejecting undefined ones
    pub fn from_raw(bits: u32) -> Result<Self> {
        validate_options(Self::from_bits_retain(bits))
    }
}

/// Text cursor with trimming and/or empty-segment suppression
#[derive(Debug)]
pub struct RefinedSplit<'a, D> {
    inner: Split<'a, str, D>,
    options: SplitOptions,
}

impl<'a, D: Delimiter<str>> RefinedSplit<'a, D> {
    pub(crate) fn new(inner: Split<'a, str, D>, options: SplitOptions) -> Self {
        Self { inner, options }
    }

    /// Options in effect
    pub fn options(&self) -> SplitOptions {
        self.options
    }

    /// Unconsumed part of the source, `None` once the cursor is done
    pub fn remainder(&self) -> Option<&'a str> {
        self.inner.remainder()
    }

    /// Yield `(byte_offset, segment)` pairs instead of bare segments
    pub fn with_offsets(self) -> WithOffsets<Self> {
        WithOffsets::new(self)
    }
}

impl<'a, D: Delimiter<str>> SegmentCursor for RefinedSplit<'a, D> {
    type Segment = &'a str;

    fn next_with_offset(&mut self) -> Option<(usize, &'a str)> {
        let trim = self.options.contains(SplitOptions::TRIM_ENTRIES);
        let remove_empty = self.options.contains(SplitOptions::REMOVE_EMPTY_ENTRIES);

        loop {
            let (offset, raw) = self.inner.next_with_offset()?;
            let (offset, segment) = if trim {
                let leading = raw.trim_start();
                (offset + (raw.len() - leading.len()), leading.trim_end())
            } else {
                (offset, raw)
            };

            if remove_empty && segment.is_empty() {
                continue;
            }
            return Some((offset, segment));
        }
    }
}

impl<'a, D: Delimiter<str>> Iterator for RefinedSplit<'a, D> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.next_with_offset().map(|(_, segment)| segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        if self.options.contains(SplitOptions::REMOVE_EMPTY_ENTRIES) {
            (0, upper)
        } else {
            (lower, upper)
        }
    }
}

impl<D: Delimiter<str>> FusedIterator for RefinedSplit<'_, D> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split_text;

    fn collect(source: &str, delimiter: char, options: SplitOptions) -> Vec<&str> {
        split_text(source, delimiter, options).unwrap().collect()
    }

    #[test]
    fn test_no_options_is_transparent() {
        assert_eq!(collect(" a , b ", ',', SplitOptions::empty()), vec![" a ", " b "]);
    }

    #[test]
    fn test_trim_entries() {
        assert_eq!(
            collect(" a ,\tb\n, ", ',', SplitOptions::TRIM_ENTRIES),
            vec!["a", "b", ""]
        );
    }

    #[test]
    fn test_remove_empty_entries() {
        assert_eq!(
            collect(",a,,b,", ',', SplitOptions::REMOVE_EMPTY_ENTRIES),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_remove_empty_is_evaluated_after_trim() {
        assert_eq!(collect("a,  ,b", ',', SplitOptions::REMOVE_EMPTY_ENTRIES), vec!["a", "  ", "b"]);
        assert_eq!(collect("a,  ,b", ',', SplitOptions::all()), vec!["a", "b"]);
    }

    #[test]
    fn test_all_segments_suppressed() {
        assert!(collect(",,,", ',', SplitOptions::REMOVE_EMPTY_ENTRIES).is_empty());
        assert!(collect("", ',', SplitOptions::REMOVE_EMPTY_ENTRIES).is_empty());
    }

    #[test]
    fn test_trimmed_offsets_point_into_source() {
        let source = "  ab , cd";
        let pairs: Vec<_> = split_text(source, ',', SplitOptions::TRIM_ENTRIES)
            .unwrap()
            .with_offsets()
            .collect();
        assert_eq!(pairs, vec![(2, "ab"), (7, "cd")]);
        for (offset, segment) in pairs {
            assert_eq!(&source[offset..offset + segment.len()], segment);
        }
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(SplitOptions::from_raw(0b11), Ok(SplitOptions::all()));
        assert!(SplitOptions::from_raw(0b100).is_err());
    }
}
