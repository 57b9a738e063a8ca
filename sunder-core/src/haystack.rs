//! Borrowed views the engine can slice
//!
//! Positions are measured in the view's own units: elements for `[T]`,
//! bytes for `str`. Every position handed to these methods comes from a
//! delimiter match inside the same view, so for `str` it always lies on a
//! char boundary.

/// A contiguous, read-only sequence that segments are carved out of
pub trait Haystack {
    /// Number of units in the view
    fn extent(&self) -> usize;

    /// The view up to (not including) `end`
    fn head(&self, end: usize) -> &Self;

    /// The view from `start` to the end
    fn tail(&self, start: usize) -> &Self;
}

impl<T> Haystack for [T] {
    #[inline]
    fn extent(&self) -> usize {
        self.len()
    }

    #[inline]
    fn head(&self, end: usize) -> &Self {
        &self[..end]
    }

    #[inline]
    fn tail(&self, start: usize) -> &Self {
        &self[start..]
    }
}

impl Haystack for str {
    #[inline]
    fn extent(&self) -> usize {
        self.len()
    }

    #[inline]
    fn head(&self, end: usize) -> &Self {
        &self[..end]
    }

    #[inline]
    fn tail(&self, start: usize) -> &Self {
        &self[start..]
    }
}
