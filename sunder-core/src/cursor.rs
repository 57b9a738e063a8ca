//! Segmentation cursors
//!
//! [`Split`] is the single state machine behind both the unbounded and the
//! count-bounded entry points. It owns a copy of the delimiter and a
//! shrinking view of the source, and yields one borrowed segment per step.
//!
//! ```text
//! Active --(delimiter found)--> Active   yield remaining[..start]
//! Active --(no delimiter)-----> Done     yield remaining
//! Active --(budget == 1)------> Done     yield remaining (append)
//!                                        or remaining[..start] (cut)
//! ```

use crate::haystack::Haystack;
use crate::matcher::Delimiter;
use crate::validate::ExceedBehavior;
use std::iter::FusedIterator;

/// Cursors that can report where each segment starts in the source
pub trait SegmentCursor {
    /// Borrowed segment type
    type Segment;

    /// Advance one step, returning the segment and its offset from the
    /// start of the source (elements for slices, bytes for text)
    fn next_with_offset(&mut self) -> Option<(usize, Self::Segment)>;
}

/// Lazy, zero-copy splitter over a borrowed view
///
/// Created by [`split`](crate::split) and [`split_bounded`](crate::split_bounded).
/// Forward-only and not restartable; dropping it early needs no cleanup.
#[derive(Debug)]
pub struct Split<'a, H: ?Sized, D> {
    remaining: &'a H,
    delimiter: D,
    /// Segments still allowed; `None` for the unbounded cursor
    budget: Option<usize>,
    behavior: ExceedBehavior,
    /// Offset of `remaining` within the source
    offset: usize,
    finished: bool,
}

impl<'a, H, D> Split<'a, H, D>
where
    H: Haystack + ?Sized,
    D: Delimiter<H>,
{
    pub(crate) fn new(source: &'a H, delimiter: D) -> Self {
        Self {
            remaining: source,
            delimiter,
            budget: None,
            behavior: ExceedBehavior::default(),
            offset: 0,
            finished: false,
        }
    }

    pub(crate) fn bounded(
        source: &'a H,
        delimiter: D,
        count: usize,
        behavior: ExceedBehavior,
    ) -> Self {
        Self {
            remaining: source,
            delimiter,
            budget: Some(count),
            behavior,
            offset: 0,
            finished: count == 0,
        }
    }

    /// Unconsumed part of the source, `None` once the cursor is done
    pub fn remainder(&self) -> Option<&'a H> {
        (!self.finished).then_some(self.remaining)
    }

    /// Segments still allowed by the budget, `None` when unbounded
    pub fn budget(&self) -> Option<usize> {
        self.budget
    }

    /// Yield `(offset, segment)` pairs instead of bare segments
    pub fn with_offsets(self) -> WithOffsets<Self> {
        WithOffsets::new(self)
    }

    fn finish_with(&mut self, segment: &'a H) -> Option<(usize, &'a H)> {
        self.finished = true;
        if let Some(budget) = self.budget.as_mut() {
            *budget = 0;
        }
        Some((self.offset, segment))
    }
}

impl<'a, H, D> SegmentCursor for Split<'a, H, D>
where
    H: Haystack + ?Sized,
    D: Delimiter<H>,
{
    type Segment = &'a H;

    fn next_with_offset(&mut self) -> Option<(usize, &'a H)> {
        if self.finished {
            return None;
        }
        let remaining = self.remaining;

        // Last segment the budget allows
        if self.budget == Some(1) {
            return match self.behavior {
                ExceedBehavior::AppendRemaining => self.finish_with(remaining),
                ExceedBehavior::CutRemaining => {
                    let end = self
                        .delimiter
                        .find_in(remaining)
                        .map_or(remaining.extent(), |found| found.start);
                    self.finish_with(remaining.head(end))
                }
            };
        }

        match self.delimiter.find_in(remaining) {
            Some(found) => {
                let segment = (self.offset, remaining.head(found.start));
                self.remaining = remaining.tail(found.end());
                self.offset += found.end();
                if let Some(budget) = self.budget.as_mut() {
                    *budget -= 1;
                }
                Some(segment)
            }
            None => self.finish_with(remaining),
        }
    }
}

impl<'a, H, D> Iterator for Split<'a, H, D>
where
    H: Haystack + ?Sized,
    D: Delimiter<H>,
{
    type Item = &'a H;

    #[inline]
    fn next(&mut self) -> Option<&'a H> {
        self.next_with_offset().map(|(_, segment)| segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (1, self.budget)
        }
    }
}

impl<H, D> FusedIterator for Split<'_, H, D>
where
    H: Haystack + ?Sized,
    D: Delimiter<H>,
{
}

/// Adapter yielding `(offset, segment)` pairs from a [`SegmentCursor`]
#[derive(Debug)]
pub struct WithOffsets<C> {
    cursor: C,
}

impl<C> WithOffsets<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Self { cursor }
    }
}

impl<C: SegmentCursor> Iterator for WithOffsets<C> {
    type Item = (usize, C::Segment);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_with_offset()
    }
}
