//! Lexical classification for bracket scans.
//!
//! The scanners only need to know whether a position is code, inside a string/char literal, or
//! inside a comment. The rules are C-family:
//!
//! - `"..."` strings, where `\` escapes the next character
//! - `@"..."` verbatim strings, where only `""` is an escape (a literal quote)
//! - `'...'` char literals, where `\` escapes the next character
//! - `//` line comments and `/* ... */` block comments (no nesting)
//!
//! A line break ends line comments, char literals and regular strings. Verbatim strings and
//! block comments may span lines, and so may a regular string whose line break is escaped
//! (`"a\` followed by a newline): the `\` consumes the break as its escaped character.
//!
//! Scans that replay from a line start assume plain code there. Any construct that carries
//! state across a line break (block comments, verbatim strings, escaped line breaks) can make
//! that assumption wrong.

use crate::text_source::TextSource;

/// Lexical state at a scan position.
///
/// `in_string` and `in_char` are never both set, and `in_verbatim_string` implies `in_string`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexicalState {
    /// Inside a string literal (regular or verbatim).
    pub in_string: bool,
    /// Inside a character literal.
    pub in_char: bool,
    /// Inside a verbatim (`@"..."`) string literal.
    pub in_verbatim_string: bool,
    /// Inside a `//` comment.
    pub in_line_comment: bool,
    /// Inside a `/* */` comment.
    pub in_block_comment: bool,
}

impl LexicalState {
    /// Plain code: no literal, no comment.
    pub const CODE: Self = Self {
        in_string: false,
        in_char: false,
        in_verbatim_string: false,
        in_line_comment: false,
        in_block_comment: false,
    };

    /// Returns `true` if brackets at this position are real syntax.
    pub fn is_code(&self) -> bool {
        !(self.in_literal() || self.in_comment())
    }

    /// Returns `true` inside a string or char literal.
    pub fn in_literal(&self) -> bool {
        self.in_string || self.in_char
    }

    /// Returns `true` inside a line or block comment.
    pub fn in_comment(&self) -> bool {
        self.in_line_comment || self.in_block_comment
    }

    /// Apply the transition for the character at `offset`.
    ///
    /// Returns the state after the transition and how many characters it consumed: two for
    /// comment markers (`//`, `/*`, `*/`), escape sequences and doubled verbatim quotes, one
    /// otherwise. Bracket characters never change the state.
    pub fn step<T: TextSource + ?Sized>(self, text: &T, offset: usize) -> (Self, usize) {
        let mut next = self;
        let peek = text.get(offset + 1);

        match text.char_at(offset) {
            '\r' | '\n' => {
                next.in_line_comment = false;
                next.in_char = false;
                if !self.in_verbatim_string {
                    next.in_string = false;
                }
            }
            '/' if !(self.in_literal() || self.in_comment()) => match peek {
                Some('/') => {
                    next.in_line_comment = true;
                    return (next, 2);
                }
                Some('*') => {
                    next.in_block_comment = true;
                    return (next, 2);
                }
                _ => {}
            },
            '*' if self.in_block_comment && peek == Some('/') => {
                next.in_block_comment = false;
                return (next, 2);
            }
            '"' if !(self.in_char || self.in_comment()) => {
                if self.in_verbatim_string {
                    if peek == Some('"') {
                        return (next, 2);
                    }
                    next.in_string = false;
                    next.in_verbatim_string = false;
                } else if self.in_string {
                    next.in_string = false;
                } else {
                    next.in_string = true;
                    next.in_verbatim_string = offset > 0 && text.get(offset - 1) == Some('@');
                }
            }
            '\'' if !(self.in_string || self.in_comment()) => {
                next.in_char = !self.in_char;
            }
            '\\' if (self.in_string && !self.in_verbatim_string) || self.in_char => {
                return (next, 2);
            }
            _ => {}
        }

        (next, 1)
    }
}

/// Lexical classification of a scan's starting offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartClass {
    /// Plain code.
    Code,
    /// Inside a `//` comment.
    LineComment,
    /// Inside a string or char literal; carries the state to seed the scan with.
    StringOrChar(LexicalState),
    /// A block comment is involved (open at the target, or closed by a `*/` whose opener lies
    /// before the line start). Block comments are not resolved across lines.
    Unsupported,
}

/// Start of the line containing `offset`: the position just after the nearest `\n` strictly
/// before `offset`, or `0`.
pub fn line_start<T: TextSource + ?Sized>(text: &T, offset: usize) -> usize {
    (0..offset.min(text.len()))
        .rev()
        .find(|&i| text.char_at(i) == '\n')
        .map_or(0, |i| i + 1)
}

/// Walk back `lines` more lines from a line start.
///
/// `start` must itself be a line start. Stops at `0`.
pub fn previous_line_start<T: TextSource + ?Sized>(text: &T, start: usize, lines: usize) -> usize {
    let mut start = start;
    for _ in 0..lines {
        if start == 0 {
            break;
        }
        start = line_start(text, start - 1);
    }
    start
}

/// Classify `offset` by replaying lexical transitions from `line_start`.
///
/// The replay assumes `line_start` is plain code, so state carried in from earlier lines
/// (verbatim strings, block comments) is not seen.
pub fn classify_start<T: TextSource + ?Sized>(
    text: &T,
    line_start: usize,
    offset: usize,
) -> StartClass {
    let mut state = LexicalState::CODE;
    let mut i = line_start;
    while i < offset {
        if state.is_code() && text.char_at(i) == '*' && text.get(i + 1) == Some('/') {
            return StartClass::Unsupported;
        }
        let (next, consumed) = state.step(text, i);
        state = next;
        i += consumed;
    }

    if state.in_block_comment {
        StartClass::Unsupported
    } else if state.in_line_comment {
        StartClass::LineComment
    } else if state.in_literal() {
        StartClass::StringOrChar(state)
    } else {
        StartClass::Code
    }
}
