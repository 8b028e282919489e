//! Full, lexically-aware bracket scans.
//!
//! Brackets inside strings, char literals and comments are skipped. Lexical state can only be
//! computed left to right, so the backward scan is a forward replay that records opener
//! positions on a stack (see [`scan_backward_via_forward_replay`]).

use crate::lexical::{LexicalState, StartClass, classify_start, line_start, previous_line_start};
use crate::pairs::BracketPair;
use crate::text_source::TextSource;
use tracing::trace;

/// Which brackets a scan counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Brackets in plain code only.
    Code,
    /// Brackets inside the string or char literal the scan started in.
    Literal,
}

impl ScanMode {
    fn counts(self, state: &LexicalState) -> bool {
        match self {
            Self::Code => state.is_code(),
            Self::Literal => state.in_literal(),
        }
    }

    /// Mode and seed state for a classified start offset; `None` if the scan must not run.
    fn for_start(class: StartClass) -> Option<(Self, LexicalState)> {
        match class {
            StartClass::Code => Some((Self::Code, LexicalState::CODE)),
            StartClass::StringOrChar(state) => Some((Self::Literal, state)),
            StartClass::LineComment | StartClass::Unsupported => None,
        }
    }
}

/// Outcome of one backward replay window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replay {
    /// The innermost unmatched opener before the closer.
    Matched(usize),
    /// Every opener in the window was closed before the closer.
    Unmatched,
    /// Seen from this window, the closer is not in the scan's lexical context.
    Desynchronized,
    /// The window start is not plain code: a `*/` was met in code, or a line break cut off a
    /// regular string or char literal. A block comment or verbatim string from an earlier line
    /// runs into the window, so only a wider window can decide.
    Misaligned,
}

/// Scan forward from `from` for the closer of an opener at `from - 1`.
pub fn scan_forward<T: TextSource + ?Sized>(
    text: &T,
    from: usize,
    pair: BracketPair,
) -> Option<usize> {
    if from >= text.len() {
        return None;
    }

    let class = classify_start(text, line_start(text, from), from);
    let Some((mode, mut state)) = ScanMode::for_start(class) else {
        trace!(from, ?class, "forward scan starts in a comment");
        return None;
    };

    let mut depth = 1usize;
    let mut i = from;
    while i < text.len() {
        let ch = text.char_at(i);
        if pair.contains(ch) && mode.counts(&state) {
            if ch == pair.open {
                depth += 1;
            } else {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            i += 1;
            continue;
        }

        let (next, consumed) = state.step(text, i);
        if mode == ScanMode::Literal && !next.in_literal() {
            // Left the literal the opener lives in.
            return None;
        }
        state = next;
        i += consumed;
    }
    None
}

/// Scan backward from `from` (inclusive) for the opener of a closer at `from + 1`.
pub fn scan_backward<T: TextSource + ?Sized>(
    text: &T,
    from: usize,
    pair: BracketPair,
) -> Option<usize> {
    let closer = from + 1;
    if closer >= text.len() {
        return None;
    }

    let window_start = line_start(text, closer);
    let class = classify_start(text, window_start, closer);
    match ScanMode::for_start(class) {
        Some((ScanMode::Code, _)) => scan_backward_in_code(text, window_start, from, pair),
        Some((ScanMode::Literal, _)) => {
            match scan_backward_via_forward_replay(text, window_start, from, pair, ScanMode::Literal)
            {
                Replay::Matched(offset) => Some(offset),
                Replay::Unmatched | Replay::Desynchronized | Replay::Misaligned => None,
            }
        }
        None => {
            trace!(from, ?class, "backward scan starts in a comment");
            None
        }
    }
}

/// Replay windows for a closer in code.
///
/// The first window starts at the closer's line. While the stack ends up empty the opener must
/// lie further back, so the window grows by a doubling number of lines until it reaches the
/// start of the text. A misaligned window is never trusted; it is widened the same way.
fn scan_backward_in_code<T: TextSource + ?Sized>(
    text: &T,
    window_start: usize,
    from: usize,
    pair: BracketPair,
) -> Option<usize> {
    let mut window_start = window_start;
    let mut lines = 1usize;
    loop {
        match scan_backward_via_forward_replay(text, window_start, from, pair, ScanMode::Code) {
            Replay::Matched(offset) => return Some(offset),
            Replay::Desynchronized => {
                trace!(
                    window_start,
                    from,
                    "closer is not code, or a stray block comment end precedes it"
                );
                return None;
            }
            Replay::Unmatched | Replay::Misaligned if window_start == 0 => return None,
            Replay::Unmatched | Replay::Misaligned => {
                window_start = previous_line_start(text, window_start, lines);
                lines = lines.saturating_mul(2);
                trace!(window_start, from, "widening backward replay window");
            }
        }
    }
}

/// Replay lexical state forward over `window_start..=from`, pushing every counted opener and
/// popping on every counted closer. The top of the stack at the end is the match.
///
/// `window_start` must be a line start; the replay assumes plain code there. When the window
/// contradicts that assumption the result is [`Replay::Misaligned`]. At offset `0` the
/// assumption always holds: a stray `*/` there is [`Replay::Desynchronized`] and a literal cut
/// off by a line break is ordinary text. In [`ScanMode::Literal`] the stack is reset whenever a
/// new literal opens, so only brackets of the literal containing `from` survive.
pub fn scan_backward_via_forward_replay<T: TextSource + ?Sized>(
    text: &T,
    window_start: usize,
    from: usize,
    pair: BracketPair,
    mode: ScanMode,
) -> Replay {
    let mut stack: Vec<usize> = Vec::new();
    let mut state = LexicalState::CODE;
    let mut i = window_start;
    while i <= from {
        let ch = text.char_at(i);
        if pair.contains(ch) && mode.counts(&state) {
            if ch == pair.open {
                stack.push(i);
            } else {
                stack.pop();
            }
            i += 1;
            continue;
        }

        if state.is_code() && ch == '*' && text.get(i + 1) == Some('/') {
            return if window_start == 0 {
                Replay::Desynchronized
            } else {
                Replay::Misaligned
            };
        }

        let (next, consumed) = state.step(text, i);
        let cut_off = matches!(ch, '\r' | '\n')
            && (state.in_char || (state.in_string && !state.in_verbatim_string));
        if cut_off && window_start > 0 {
            return Replay::Misaligned;
        }
        if mode == ScanMode::Literal && next.in_literal() && !state.in_literal() {
            stack.clear();
        }
        state = next;
        i += consumed;
    }

    // The closer itself was swallowed by an escape, or sits in another lexical context.
    if i > from + 1 || !mode.counts(&state) {
        return Replay::Desynchronized;
    }

    match stack.last() {
        Some(&offset) => Replay::Matched(offset),
        None => Replay::Unmatched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_source::CharBuffer;

    const PARENS: BracketPair = BracketPair::new('(', ')');
    const BRACES: BracketPair = BracketPair::new('{', '}');

    #[test]
    fn test_forward_skips_strings_chars_and_comments() {
        let text = CharBuffer::from("( \")\" ')' // )\n /* ) */ )");
        assert_eq!(scan_forward(&text, 1, PARENS), Some(24));
    }

    #[test]
    fn test_forward_escaped_quote_keeps_string_open() {
        let text = CharBuffer::from(r#"("\")")"#);
        assert_eq!(scan_forward(&text, 1, PARENS), Some(6));
    }

    #[test]
    fn test_forward_verbatim_string() {
        // Backslash is literal in a verbatim string; `""` is an escaped quote.
        let text = CharBuffer::from(r#"(@"\"")")"#);
        assert_eq!(scan_forward(&text, 1, PARENS), Some(8));
    }

    #[test]
    fn test_forward_unbalanced() {
        let text = CharBuffer::from("( \"x\" ( )");
        assert_eq!(scan_forward(&text, 1, PARENS), None);
    }

    #[test]
    fn test_forward_from_comment_or_block_comment() {
        let comment = CharBuffer::from("// ( \"\" )");
        assert_eq!(scan_forward(&comment, 4, PARENS), None);

        let block = CharBuffer::from("/* ( */ )");
        assert_eq!(scan_forward(&block, 4, PARENS), None);
    }

    #[test]
    fn test_forward_inside_literal_stays_in_literal() {
        let text = CharBuffer::from(r#"x("a(b\"c)d" )"#);
        assert_eq!(scan_forward(&text, 5, PARENS), Some(9));

        let escapes_literal = CharBuffer::from(r#"x("a(b" )"#);
        assert_eq!(scan_forward(&escapes_literal, 5, PARENS), None);
    }

    #[test]
    fn test_forward_past_end() {
        let text = CharBuffer::from("(");
        assert_eq!(scan_forward(&text, 1, PARENS), None);
        assert_eq!(scan_forward(&text, 5, PARENS), None);
    }

    #[test]
    fn test_backward_replay_window() {
        let text = CharBuffer::from("{ \"}\" { } }");
        assert_eq!(
            scan_backward_via_forward_replay(&text, 0, 9, BRACES, ScanMode::Code),
            Replay::Matched(0)
        );
        assert_eq!(
            scan_backward_via_forward_replay(&text, 0, 7, BRACES, ScanMode::Code),
            Replay::Matched(6)
        );
    }

    #[test]
    fn test_backward_replay_desynchronized() {
        // From the start of the text, the final `}` is inside a string.
        let text = CharBuffer::from("{ \" }");
        assert_eq!(
            scan_backward_via_forward_replay(&text, 0, 3, BRACES, ScanMode::Code),
            Replay::Desynchronized
        );
    }

    #[test]
    fn test_backward_replay_misaligned_inside_block_comment() {
        let text = CharBuffer::from("/*\n( */\n)");
        assert_eq!(
            scan_backward_via_forward_replay(&text, 3, 7, PARENS, ScanMode::Code),
            Replay::Misaligned
        );
        assert_eq!(
            scan_backward_via_forward_replay(&text, 0, 7, PARENS, ScanMode::Code),
            Replay::Unmatched
        );
        assert_eq!(scan_backward(&text, 7, PARENS), None);
    }

    #[test]
    fn test_backward_replay_misaligned_inside_verbatim_string() {
        let text = CharBuffer::from("@\"\n( \"\n)");
        assert_eq!(
            scan_backward_via_forward_replay(&text, 3, 6, PARENS, ScanMode::Code),
            Replay::Misaligned
        );
        assert_eq!(
            scan_backward_via_forward_replay(&text, 0, 6, PARENS, ScanMode::Code),
            Replay::Unmatched
        );
        assert_eq!(scan_backward(&text, 6, PARENS), None);
    }

    #[test]
    fn test_backward_replay_stray_block_comment_end() {
        let text = CharBuffer::from("x */ (\n)");
        assert_eq!(
            scan_backward_via_forward_replay(&text, 0, 6, PARENS, ScanMode::Code),
            Replay::Desynchronized
        );
        assert_eq!(scan_backward(&text, 6, PARENS), None);
    }

    #[test]
    fn test_backward_widens_past_block_comment() {
        let text = CharBuffer::from("(\n/* (\n */\n)");
        assert_eq!(scan_backward(&text, 10, PARENS), Some(0));
    }

    #[test]
    fn test_backward_widens_across_lines() {
        let text = CharBuffer::from("(\n\"x\"\n\n')'\n)");
        assert_eq!(scan_backward(&text, 10, PARENS), Some(0));
    }

    #[test]
    fn test_backward_skips_line_comment_on_previous_line() {
        let text = CharBuffer::from("( // (\n)");
        assert_eq!(scan_backward(&text, 6, PARENS), Some(0));
    }

    #[test]
    fn test_backward_from_comment() {
        let text = CharBuffer::from("( \"\" // )");
        assert_eq!(scan_backward(&text, 7, PARENS), None);
    }

    #[test]
    fn test_backward_inside_literal() {
        let text = CharBuffer::from(r#"("(" + "a(b)" )"#);
        assert_eq!(scan_backward(&text, 10, PARENS), Some(9));
    }

    #[test]
    fn test_backward_unmatched() {
        let text = CharBuffer::from("\"(\" )");
        assert_eq!(scan_backward(&text, 3, PARENS), None);
    }
}
