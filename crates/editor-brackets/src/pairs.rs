//! Bracket pair tables.
//!
//! A table is two index-aligned character sequences: `openers[i]` pairs with `closers[i]`.
//! The default table is `<([{` / `>)]}`.

use crate::error::BracketTableError;

/// Default opening brackets.
pub const DEFAULT_OPENERS: &str = "<([{";
/// Default closing brackets, index-paired with [`DEFAULT_OPENERS`].
pub const DEFAULT_CLOSERS: &str = ">)]}";

/// Characters the lexical scanner reacts to; none of them may be a bracket.
const RESERVED: &[char] = &['"', '\'', '\\', '/', '*', '@', '\n', '\r'];

/// Which way a scan walks from the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanDirection {
    /// From an opening bracket towards its closer.
    Forward,
    /// From a closing bracket back towards its opener.
    Backward,
}

/// A single opener/closer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BracketPair {
    /// Opening bracket character.
    pub open: char,
    /// Closing bracket character.
    pub close: char,
}

impl BracketPair {
    /// Create a new pair.
    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }

    /// Returns `true` if `ch` is this pair's opener or closer.
    pub fn contains(&self, ch: char) -> bool {
        ch == self.open || ch == self.close
    }
}

/// The set of bracket pairs a matcher recognizes.
///
/// Indices are stable for the lifetime of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketPairTable {
    openers: Vec<char>,
    closers: Vec<char>,
}

impl BracketPairTable {
    /// Build a table from index-paired opener and closer strings.
    pub fn new(openers: &str, closers: &str) -> Result<Self, BracketTableError> {
        let openers: Vec<char> = openers.chars().collect();
        let closers: Vec<char> = closers.chars().collect();

        if openers.len() != closers.len() {
            return Err(BracketTableError::LengthMismatch {
                openers: openers.len(),
                closers: closers.len(),
            });
        }
        if openers.is_empty() {
            return Err(BracketTableError::Empty);
        }

        let mut seen: Vec<char> = Vec::with_capacity(openers.len() * 2);
        for &ch in openers.iter().chain(closers.iter()) {
            if RESERVED.contains(&ch) {
                return Err(BracketTableError::ReservedCharacter(ch));
            }
            if seen.contains(&ch) {
                return Err(BracketTableError::DuplicateCharacter(ch));
            }
            seen.push(ch);
        }

        Ok(Self { openers, closers })
    }

    /// Number of pairs in the table.
    pub fn len(&self) -> usize {
        self.openers.len()
    }

    /// Returns `true` if the table holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.openers.is_empty()
    }

    /// The pair at `index`, if any.
    pub fn pair(&self, index: usize) -> Option<BracketPair> {
        Some(BracketPair::new(
            *self.openers.get(index)?,
            *self.closers.get(index)?,
        ))
    }

    /// Iterate over all pairs in table order.
    pub fn pairs(&self) -> impl Iterator<Item = BracketPair> + '_ {
        self.openers
            .iter()
            .zip(self.closers.iter())
            .map(|(&open, &close)| BracketPair::new(open, close))
    }

    /// Resolve the character before the caret into a scan direction and the pair to match.
    ///
    /// Returns `None` if `ch` is not a bracket in this table.
    pub fn lookup(&self, ch: char) -> Option<(ScanDirection, BracketPair)> {
        if let Some(index) = self.openers.iter().position(|&c| c == ch) {
            return Some((ScanDirection::Forward, self.pair(index)?));
        }
        let index = self.closers.iter().position(|&c| c == ch)?;
        Some((ScanDirection::Backward, self.pair(index)?))
    }
}

impl Default for BracketPairTable {
    fn default() -> Self {
        Self {
            openers: DEFAULT_OPENERS.chars().collect(),
            closers: DEFAULT_CLOSERS.chars().collect(),
        }
    }
}
