//! Read-only character sources the scanners run over.
//!
//! All offsets are **character offsets** (Unicode scalar values), matching the rest of the
//! editor kernel. Scanners only ever read; the host owns the buffer and must not mutate it while
//! a search is running.

use ropey::{Rope, RopeSlice};

/// A read-only, random-access sequence of characters with a known length.
pub trait TextSource {
    /// Number of characters in the source.
    fn len(&self) -> usize;

    /// Character at `offset`.
    ///
    /// Callers guarantee `offset < self.len()`.
    fn char_at(&self, offset: usize) -> char;

    /// Returns `true` if the source holds no characters.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounds-checked read, used for look-ahead/look-behind.
    fn get(&self, offset: usize) -> Option<char> {
        (offset < self.len()).then(|| self.char_at(offset))
    }
}

impl TextSource for [char] {
    fn len(&self) -> usize {
        <[char]>::len(self)
    }

    fn char_at(&self, offset: usize) -> char {
        self[offset]
    }
}

impl TextSource for Vec<char> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn char_at(&self, offset: usize) -> char {
        self[offset]
    }
}

impl TextSource for Rope {
    fn len(&self) -> usize {
        self.len_chars()
    }

    fn char_at(&self, offset: usize) -> char {
        self.char(offset)
    }
}

impl TextSource for RopeSlice<'_> {
    fn len(&self) -> usize {
        self.len_chars()
    }

    fn char_at(&self, offset: usize) -> char {
        self.char(offset)
    }
}

/// Owned text with O(1) character-offset access.
///
/// `&str` cannot be indexed by character offset without a linear walk, so hosts that keep plain
/// strings can convert once and run any number of searches over the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharBuffer {
    chars: Vec<char>,
}

impl CharBuffer {
    /// Build a buffer from text.
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// The buffered characters.
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for CharBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for CharBuffer {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl std::fmt::Display for CharBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}

impl TextSource for CharBuffer {
    fn len(&self) -> usize {
        self.chars.len()
    }

    fn char_at(&self, offset: usize) -> char {
        self.chars[offset]
    }
}
