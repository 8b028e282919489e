//! Caret-adjacent bracket search.
//!
//! The character just before the caret decides the scan: an opener searches forward for its
//! closer, a closer searches backward for its opener. Each direction runs the quick scan first
//! and falls back to the full, lexically-aware scan only when the quick scan is inconclusive.

use std::ops::Range;
use std::sync::LazyLock;

use crate::full::{scan_backward, scan_forward};
use crate::pairs::{BracketPair, BracketPairTable, ScanDirection};
use crate::quick::{QuickScan, quick_scan_backward, quick_scan_forward};
use crate::text_source::TextSource;
use tracing::trace;

static DEFAULT_MATCHER: LazyLock<BracketMatcher> = LazyLock::new(BracketMatcher::default);

/// A matched bracket pair, expressed as character offsets.
///
/// `opening_offset < closing_offset` always holds, whichever side the search started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BracketSearchResult {
    /// Offset of the opening bracket.
    pub opening_offset: usize,
    /// Length of the opening bracket in characters.
    pub opening_length: usize,
    /// Offset of the closing bracket.
    pub closing_offset: usize,
    /// Length of the closing bracket in characters.
    pub closing_length: usize,
}

impl BracketSearchResult {
    /// Create a new result.
    pub fn new(
        opening_offset: usize,
        opening_length: usize,
        closing_offset: usize,
        closing_length: usize,
    ) -> Self {
        Self {
            opening_offset,
            opening_length,
            closing_offset,
            closing_length,
        }
    }

    /// Half-open character range of the opening bracket.
    pub fn opening_range(&self) -> Range<usize> {
        self.opening_offset..self.opening_offset + self.opening_length
    }

    /// Half-open character range of the closing bracket.
    pub fn closing_range(&self) -> Range<usize> {
        self.closing_offset..self.closing_offset + self.closing_length
    }
}

/// Bracket matcher over a configurable [`BracketPairTable`].
#[derive(Debug, Clone, Default)]
pub struct BracketMatcher {
    pairs: BracketPairTable,
}

impl BracketMatcher {
    /// Create a matcher for the given pair table.
    pub fn new(pairs: BracketPairTable) -> Self {
        Self { pairs }
    }

    /// The pair table this matcher recognizes.
    pub fn pairs(&self) -> &BracketPairTable {
        &self.pairs
    }

    /// Find the partner of the bracket immediately before `offset`.
    ///
    /// Returns `None` if `offset` is `0` or past the end of `text`, if the preceding character
    /// is not a bracket, or if no partner can be found. Never panics for any `offset`.
    #[tracing::instrument(level = "trace", skip(self, text))]
    pub fn search<T: TextSource + ?Sized>(
        &self,
        text: &T,
        offset: usize,
    ) -> Option<BracketSearchResult> {
        if offset == 0 || offset > text.len() {
            return None;
        }

        let bracket = offset - 1;
        let (direction, pair) = self.pairs.lookup(text.char_at(bracket))?;
        let other = match direction {
            ScanDirection::Forward => find_closer(text, offset, pair),
            ScanDirection::Backward => find_opener(text, bracket.checked_sub(1)?, pair),
        }?;

        Some(BracketSearchResult::new(
            bracket.min(other),
            1,
            bracket.max(other),
            1,
        ))
    }
}

fn find_closer<T: TextSource + ?Sized>(text: &T, from: usize, pair: BracketPair) -> Option<usize> {
    match quick_scan_forward(text, from, pair) {
        QuickScan::Found(offset) => Some(offset),
        QuickScan::NotFound => None,
        QuickScan::Inconclusive => {
            trace!(from, "quick forward scan inconclusive, running full scan");
            scan_forward(text, from, pair)
        }
    }
}

fn find_opener<T: TextSource + ?Sized>(text: &T, from: usize, pair: BracketPair) -> Option<usize> {
    match quick_scan_backward(text, from, pair) {
        QuickScan::Found(offset) => Some(offset),
        QuickScan::NotFound => None,
        QuickScan::Inconclusive => {
            trace!(from, "quick backward scan inconclusive, running full scan");
            scan_backward(text, from, pair)
        }
    }
}

/// Find the partner of the bracket immediately before `offset`, using the default
/// `<([{` / `>)]}` table.
///
/// # Example
///
/// ```rust
/// use editor_brackets::{BracketSearchResult, CharBuffer, search_bracket};
///
/// let text = CharBuffer::from("f(\")\", g[0])");
/// assert_eq!(
///     search_bracket(&text, 2),
///     Some(BracketSearchResult::new(1, 1, 11, 1))
/// );
/// assert_eq!(search_bracket(&text, 0), None);
/// ```
pub fn search_bracket<T: TextSource + ?Sized>(
    text: &T,
    offset: usize,
) -> Option<BracketSearchResult> {
    DEFAULT_MATCHER.search(text, offset)
}
