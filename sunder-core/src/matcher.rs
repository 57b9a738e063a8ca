//! Delimiter matching
//!
//! A [`Delimiter`] finds the earliest occurrence of itself inside a view and
//! reports where it starts and how many units it covers. Three shapes are
//! provided, each specialized at compile time per view kind:
//!
//! - [`Single`]: one element (one `char` for text)
//! - [`Sequence`]: a contiguous run of elements (a substring for text)
//! - [`AnyOf`]: any member of a set; for text an empty set means whitespace
//!
//! Plain `char`, `&str`, `&[char]` and `[char; N]` also work as text
//! delimiters and map onto the shapes above.

use memchr::{memchr, memchr2, memchr3, memmem};
use std::fmt;

/// Location of a delimiter occurrence inside a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Offset of the first delimiter unit
    pub start: usize,
    /// Number of units the delimiter occupies
    pub len: usize,
}

impl Match {
    /// Create a new match
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Offset just past the delimiter
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Finds the next delimiter occurrence in a view of type `H`
pub trait Delimiter<H: ?Sized> {
    /// Earliest occurrence in `haystack`, or `None` when the rest of the view
    /// is the final segment
    fn find_in(&self, haystack: &H) -> Option<Match>;
}

/// A single-element delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Single<T>(pub T);

/// A sub-sequence delimiter that must match contiguously
///
/// An empty sequence never matches, so splitting on it yields the whole
/// source as one segment.
pub struct Sequence<'d, S: ?Sized>(pub &'d S);

/// An any-of delimiter: each member terminates a segment on its own
pub struct AnyOf<'d, T>(pub &'d [T]);

impl<S: ?Sized> Clone for Sequence<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Sequence<'_, S> {}

impl<S: ?Sized + fmt::Debug> fmt::Debug for Sequence<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sequence").field(&self.0).finish()
    }
}

impl<T> Clone for AnyOf<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AnyOf<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for AnyOf<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyOf").field(&self.0).finish()
    }
}

// Generic element views

impl<T: PartialEq> Delimiter<[T]> for Single<T> {
    #[inline]
    fn find_in(&self, haystack: &[T]) -> Option<Match> {
        haystack
            .iter()
            .position(|element| *element == self.0)
            .map(|start| Match::new(start, 1))
    }
}

impl<T: PartialEq> Delimiter<[T]> for Sequence<'_, [T]> {
    fn find_in(&self, haystack: &[T]) -> Option<Match> {
        let needle = self.0;
        if needle.is_empty() || needle.len() > haystack.len() {
            return None;
        }
        haystack
            .windows(needle.len())
            .position(|window| window == needle)
            .map(|start| Match::new(start, needle.len()))
    }
}

impl<T: PartialEq> Delimiter<[T]> for AnyOf<'_, T> {
    #[inline]
    fn find_in(&self, haystack: &[T]) -> Option<Match> {
        if self.0.is_empty() {
            return None;
        }
        haystack
            .iter()
            .position(|element| self.0.contains(element))
            .map(|start| Match::new(start, 1))
    }
}

// Text views (byte offsets, always on char boundaries)

impl Delimiter<str> for Single<char> {
    fn find_in(&self, haystack: &str) -> Option<Match> {
        let ch = self.0;
        if ch.is_ascii() {
            return memchr(ch as u8, haystack.as_bytes()).map(|start| Match::new(start, 1));
        }
        let mut buf = [0u8; 4];
        let needle = ch.encode_utf8(&mut buf).as_bytes();
        memmem::find(haystack.as_bytes(), needle).map(|start| Match::new(start, needle.len()))
    }
}

impl Delimiter<str> for Sequence<'_, str> {
    fn find_in(&self, haystack: &str) -> Option<Match> {
        let needle = self.0.as_bytes();
        if needle.is_empty() {
            return None;
        }
        memmem::find(haystack.as_bytes(), needle).map(|start| Match::new(start, needle.len()))
    }
}

impl Delimiter<str> for AnyOf<'_, char> {
    fn find_in(&self, haystack: &str) -> Option<Match> {
        match self.0 {
            [] => find_char(haystack, char::is_whitespace),
            [ch] => Single(*ch).find_in(haystack),
            set if set.len() <= 3 && set.iter().all(char::is_ascii) => {
                let bytes = haystack.as_bytes();
                let found = match *set {
                    [a, b] => memchr2(a as u8, b as u8, bytes),
                    [a, b, c] => memchr3(a as u8, b as u8, c as u8, bytes),
                    _ => unreachable!("set length checked above"),
                };
                found.map(|start| Match::new(start, 1))
            }
            set => find_char(haystack, |ch| set.contains(&ch)),
        }
    }
}

impl Delimiter<str> for char {
    #[inline]
    fn find_in(&self, haystack: &str) -> Option<Match> {
        Single(*self).find_in(haystack)
    }
}

impl Delimiter<str> for &str {
    #[inline]
    fn find_in(&self, haystack: &str) -> Option<Match> {
        Sequence(*self).find_in(haystack)
    }
}

impl Delimiter<str> for &[char] {
    #[inline]
    fn find_in(&self, haystack: &str) -> Option<Match> {
        AnyOf(*self).find_in(haystack)
    }
}

impl<const N: usize> Delimiter<str> for [char; N] {
    #[inline]
    fn find_in(&self, haystack: &str) -> Option<Match> {
        AnyOf(&self[..]).find_in(haystack)
    }
}

fn find_char(haystack: &str, mut predicate: impl FnMut(char) -> bool) -> Option<Match> {
    haystack
        .char_indices()
        .find(|&(_, ch)| predicate(ch))
        .map(|(start, ch)| Match::new(start, ch.len_utf8()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_element() {
        let data = [1, 2, 3, 2];
        assert_eq!(Single(2).find_in(&data[..]), Some(Match::new(1, 1)));
        assert_eq!(Single(9).find_in(&data[..]), None);
    }

    #[test]
    fn test_single_char_multibyte() {
        let text = "ab→cd";
        assert_eq!(Single('→').find_in(text), Some(Match::new(2, 3)));
        assert_eq!('c'.find_in(text), Some(Match::new(5, 1)));
    }

    #[test]
    fn test_sequence_earliest_match() {
        let data = [0, 1, 2, 1, 2];
        assert_eq!(Sequence(&[1, 2][..]).find_in(&data[..]), Some(Match::new(1, 2)));
        assert_eq!(Sequence("::").find_in("a::b::c"), Some(Match::new(1, 2)));
    }

    #[test]
    fn test_empty_sequence_never_matches() {
        let empty: &[u8] = &[];
        assert_eq!(Sequence(empty).find_in(&b"abc"[..]), None);
        assert_eq!(Sequence("").find_in("abc"), None);
        assert_eq!("".find_in(""), None);
    }

    #[test]
    fn test_sequence_longer_than_haystack() {
        assert_eq!(Sequence(&[1, 2, 3][..]).find_in(&[1, 2][..]), None);
        assert_eq!(Sequence("abcd").find_in("abc"), None);
    }

    #[test]
    fn test_any_of_elements() {
        let data = [5, 6, 7];
        assert_eq!(AnyOf(&[7, 6]).find_in(&data[..]), Some(Match::new(1, 1)));
    }

    #[test]
    fn test_empty_any_of_for_elements_never_matches() {
        let empty: &[char] = &[];
        let chars = [' ', 'a'];
        assert_eq!(AnyOf(empty).find_in(&chars[..]), None);
    }

    #[test]
    fn test_empty_any_of_for_text_is_whitespace() {
        let empty: &[char] = &[];
        assert_eq!(AnyOf(empty).find_in("ab\tc"), Some(Match::new(2, 1)));
        // U+3000 IDEOGRAPHIC SPACE is three bytes
        assert_eq!(AnyOf(empty).find_in("あ\u{3000}い"), Some(Match::new(3, 3)));
        assert_eq!(AnyOf(empty).find_in("abc"), None);
    }

    #[test]
    fn test_any_of_text_strategies_agree() {
        let text = "xx;yy,zz|ww";
        assert_eq!(AnyOf(&[',', ';']).find_in(text), Some(Match::new(2, 1)));
        assert_eq!(AnyOf(&['|', ',', ';']).find_in(text), Some(Match::new(2, 1)));
        assert_eq!(AnyOf(&['|', ',', ';', '#']).find_in(text), Some(Match::new(2, 1)));
        assert_eq!(['|', 'é'].find_in("aé|"), Some(Match::new(1, 2)));
    }

    #[test]
    fn test_match_end() {
        assert_eq!(Match::new(3, 2).end(), 5);
    }
}
