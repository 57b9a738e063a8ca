//! Lazy, zero-copy delimiter segmentation
//!
//! This crate splits a borrowed slice or string into segments wherever a
//! delimiter occurs. Segments are borrowed views into the source; nothing is
//! copied and no intermediate collection is built. Cursors are plain stack
//! values advanced through [`Iterator`].
//!
//! # Architecture
//!
//! - **Matcher** ([`matcher`]): single element, sub-sequence and any-of
//!   delimiters behind the [`Delimiter`] trait
//! - **Cursor** ([`cursor`]): the [`Split`] state machine, with an optional
//!   segment budget and [`ExceedBehavior`]
//! - **Refinement** ([`refine`]): trimming and empty-segment removal for text
//! - **Validation** ([`validate`]): argument checks run before a cursor is
//!   handed out
//!
//! # Example
//!
//! ```rust
//! use sunder_core::{split, split_bounded, split_text, ExceedBehavior, SplitOptions};
//!
//! let parts: Vec<&str> = split("abba", 'b').collect();
//! assert_eq!(parts, ["a", "", "a"]);
//!
//! let head: Vec<&str> = split_bounded("aabaa", 'b', 1, ExceedBehavior::CutRemaining)
//!     .unwrap()
//!     .collect();
//! assert_eq!(head, ["aa"]);
//!
//! let words: Vec<&str> = split_text(" a,, b ", ',', SplitOptions::all())
//!     .unwrap()
//!     .collect();
//! assert_eq!(words, ["a", "b"]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod haystack;
pub mod matcher;
pub mod refine;
pub mod validate;

pub use config::{SplitConfig, SplitConfigBuilder};
pub use cursor::{SegmentCursor, Split, WithOffsets};
pub use error::{Result, SplitError};
pub use haystack::Haystack;
pub use matcher::{AnyOf, Delimiter, Match, Sequence, Single};
pub use refine::{RefinedSplit, SplitOptions};
pub use validate::{validate_count, validate_options, ExceedBehavior};

/// Split `source` at every occurrence of `delimiter`
///
/// An empty source yields one empty segment; a source without the delimiter
/// yields itself.
pub fn split<'a, H, D>(source: &'a H, delimiter: D) -> Split<'a, H, D>
where
    H: Haystack + ?Sized,
    D: Delimiter<H>,
{
    Split::new(source, delimiter)
}

/// Split `source` into at most `count` segments
///
/// The first `count - 1` segments are split normally; `behavior` decides
/// what the last one holds. A `count` of zero yields nothing.
///
/// # Errors
///
/// [`SplitError::NegativeCount`] if `count` is negative.
pub fn split_bounded<'a, H, D>(
    source: &'a H,
    delimiter: D,
    count: isize,
    behavior: ExceedBehavior,
) -> Result<Split<'a, H, D>>
where
    H: Haystack + ?Sized,
    D: Delimiter<H>,
{
    let count = validate_count(count)?;
    Ok(Split::bounded(source, delimiter, count, behavior))
}

/// Split text with trimming and/or empty-segment removal
///
/// # Errors
///
/// [`SplitError::InvalidOptions`] if `options` carries undefined bits.
pub fn split_text<'a, D>(
    source: &'a str,
    delimiter: D,
    options: SplitOptions,
) -> Result<RefinedSplit<'a, D>>
where
    D: Delimiter<str>,
{
    let options = validate_options(options)?;
    Ok(RefinedSplit::new(Split::new(source, delimiter), options))
}

/// Split text into at most `count` raw segments, then refine them
///
/// The budget counts raw segments, so removed empty segments still use it up.
///
/// # Errors
///
/// [`SplitError::NegativeCount`] or [`SplitError::InvalidOptions`].
pub fn split_text_bounded<'a, D>(
    source: &'a str,
    delimiter: D,
    count: isize,
    options: SplitOptions,
    behavior: ExceedBehavior,
) -> Result<RefinedSplit<'a, D>>
where
    D: Delimiter<str>,
{
    let count = validate_count(count)?;
    let options = validate_options(options)?;
    Ok(RefinedSplit::new(
        Split::bounded(source, delimiter, count, behavior),
        options,
    ))
}

/// Split text using a prevalidated [`SplitConfig`]
pub fn split_with_config<'a, D>(
    source: &'a str,
    delimiter: D,
    config: &SplitConfig,
) -> RefinedSplit<'a, D>
where
    D: Delimiter<str>,
{
    let inner = match config.count {
        Some(count) => Split::bounded(source, delimiter, count, config.behavior),
        None => Split::new(source, delimiter),
    };
    RefinedSplit::new(inner, config.options)
}
