//! Caret-driven bracket highlight state.
//!
//! Hosts call [`BracketHighlighter::update`] on every caret move. The result is cached by
//! `(caret offset, document version)`, so repeated events on an unchanged document do not
//! rescan. The UI/theme layer maps `style_id` to actual colors.

use crate::search::{BracketMatcher, BracketSearchResult};
use crate::text_source::TextSource;

/// Style identifier, compatible with `editor-core` style ids.
pub type StyleId = u32;

/// Default style id for matched bracket highlights.
pub const BRACKET_MATCH_STYLE_ID: StyleId = 0x0300_0001;

/// A half-open character-offset range (`start..end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightRange {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl HighlightRange {
    /// Create a new range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Two ranges to paint for a matched bracket pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketHighlight {
    /// The opening bracket.
    pub opening: HighlightRange,
    /// The closing bracket.
    pub closing: HighlightRange,
    /// Style to apply to both ranges.
    pub style_id: StyleId,
}

impl BracketHighlight {
    /// Build a highlight from a search result.
    pub fn from_result(result: BracketSearchResult, style_id: StyleId) -> Self {
        let opening = result.opening_range();
        let closing = result.closing_range();
        Self {
            opening: HighlightRange::new(opening.start, opening.end),
            closing: HighlightRange::new(closing.start, closing.end),
            style_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CaretKey {
    offset: usize,
    version: u64,
}

/// Tracks the bracket highlight for the current caret.
#[derive(Debug, Clone)]
pub struct BracketHighlighter {
    matcher: BracketMatcher,
    style_id: StyleId,
    key: Option<CaretKey>,
    current: Option<BracketHighlight>,
}

impl BracketHighlighter {
    /// Create a highlighter using `matcher` and [`BRACKET_MATCH_STYLE_ID`].
    pub fn new(matcher: BracketMatcher) -> Self {
        Self {
            matcher,
            style_id: BRACKET_MATCH_STYLE_ID,
            key: None,
            current: None,
        }
    }

    /// Use a different style id for produced highlights.
    pub fn with_style_id(mut self, style_id: StyleId) -> Self {
        self.style_id = style_id;
        self
    }

    /// Style id applied to produced highlights.
    pub fn style_id(&self) -> StyleId {
        self.style_id
    }

    /// The underlying matcher.
    pub fn matcher(&self) -> &BracketMatcher {
        &self.matcher
    }

    /// Recompute the highlight for a caret at `offset` in document `version`.
    ///
    /// `version` must change whenever the document text changes; the previous result is reused
    /// when neither the caret nor the version moved.
    pub fn update<T: TextSource + ?Sized>(
        &mut self,
        text: &T,
        offset: usize,
        version: u64,
    ) -> Option<BracketHighlight> {
        let key = CaretKey { offset, version };
        if self.key == Some(key) {
            return self.current;
        }

        self.current = self
            .matcher
            .search(text, offset)
            .map(|result| BracketHighlight::from_result(result, self.style_id));
        self.key = Some(key);
        self.current
    }

    /// The highlight computed by the last [`update`](Self::update).
    pub fn current(&self) -> Option<BracketHighlight> {
        self.current
    }

    /// Drop the cached result; the next update always rescans.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.current = None;
    }
}

impl Default for BracketHighlighter {
    fn default() -> Self {
        Self::new(BracketMatcher::default())
    }
}
