#![warn(missing_docs)]
//! `editor-brackets` - lexically-aware bracket matching for headless editors.
//!
//! Given a text buffer and a caret offset, finds the bracket just before the caret and locates
//! its partner, ignoring bracket characters inside string literals, character literals and
//! comments.
//!
//! # Scan Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  search_bracket / BracketMatcher            │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Quick scan (depth counter, aborts on       │  ← Common case
//! │  quotes and comment markers)                │
//! ├─────────────────────────────────────────────┤
//! │  Start-of-scan classifier + full scan       │  ← Lexically aware
//! │  (backward = forward replay with a stack)   │
//! ├─────────────────────────────────────────────┤
//! │  TextSource (CharBuffer, Rope, [char])      │  ← Read-only text
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use editor_brackets::{CharBuffer, search_bracket};
//!
//! let text = CharBuffer::from("call(\"(\", x) // )");
//! let result = search_bracket(&text, 5).unwrap();
//! assert_eq!((result.opening_offset, result.closing_offset), (4, 11));
//! ```
//!
//! # Module Description
//!
//! - [`text_source`] - read-only character sources (`CharBuffer`, `ropey::Rope`, `[char]`)
//! - [`pairs`] - bracket pair tables (default `<([{` / `>)]}`)
//! - [`lexical`] - lexical state, line-start locator and start-of-scan classifier
//! - [`quick`] - optimistic quick scans
//! - [`full`] - lexically-aware full scans
//! - [`search`] - the caret-adjacent search entry point
//! - [`highlight`] - cached highlight state for renderers
//!
//! # Limitations
//!
//! Block comments and verbatim strings that start on an earlier line are not seen by the
//! start-of-scan classifier. A scan starting inside (or just after the end of) such a block
//! comment reports no match. When a backward scan has to look at earlier lines, it widens its
//! replay past any line that turns out to start inside one of them.
//!
//! Brackets inside the same comment or literal pair up with each other when nothing lexical
//! separates them, since the quick scans never look at what precedes the bracket.

pub mod error;
pub mod full;
pub mod highlight;
pub mod lexical;
pub mod pairs;
pub mod quick;
pub mod search;
pub mod text_source;

pub use error::BracketTableError;
pub use highlight::{
    BRACKET_MATCH_STYLE_ID, BracketHighlight, BracketHighlighter, HighlightRange, StyleId,
};
pub use lexical::{LexicalState, StartClass};
pub use pairs::{BracketPair, BracketPairTable, DEFAULT_CLOSERS, DEFAULT_OPENERS, ScanDirection};
pub use quick::QuickScan;
pub use search::{BracketMatcher, BracketSearchResult, search_bracket};
pub use text_source::{CharBuffer, TextSource};
