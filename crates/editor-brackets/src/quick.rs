//! Quick bracket scans.
//!
//! Most bracket pairs have no string or comment between them, so a plain depth counter finds
//! the partner without any lexical bookkeeping. The quick scans give up as soon as they see
//! anything that could change lexical state; the caller then runs a full scan.

use crate::lexical::line_start;
use crate::pairs::BracketPair;
use crate::text_source::TextSource;

/// Outcome of a quick scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickScan {
    /// The partner bracket is at this offset.
    Found(usize),
    /// The scan reached the end of the text without a partner and without meeting any quote
    /// or comment marker: the bracket is genuinely unmatched.
    NotFound,
    /// A quote or comment marker was met; only a full scan can decide.
    Inconclusive,
}

/// Returns `true` if a quote or comment marker starts at `offset`.
fn marker_at<T: TextSource + ?Sized>(text: &T, offset: usize) -> bool {
    match text.char_at(offset) {
        '"' | '\'' => true,
        '/' => matches!(text.get(offset + 1), Some('/' | '*')),
        '*' => text.get(offset + 1) == Some('/'),
        _ => false,
    }
}

/// Scan forward from `from` for the closer of an opener that sits just before `from`.
pub fn quick_scan_forward<T: TextSource + ?Sized>(
    text: &T,
    from: usize,
    pair: BracketPair,
) -> QuickScan {
    let mut depth = 1usize;
    for i in from..text.len() {
        let ch = text.char_at(i);
        if ch == pair.open {
            depth += 1;
        } else if ch == pair.close {
            depth -= 1;
            if depth == 0 {
                return QuickScan::Found(i);
            }
        } else if marker_at(text, i) {
            return QuickScan::Inconclusive;
        }
    }
    QuickScan::NotFound
}

/// Scan backward from `from` (inclusive) for the opener of a closer at `from + 1`.
///
/// A comment or literal earlier on a line hides brackets to its right, and a backward walk only
/// reaches the marker after passing those brackets. Crossing into a previous line therefore
/// checks that whole line for markers first.
///
/// Only markers between the two brackets are seen. Two brackets inside the same comment or
/// literal with nothing lexical between them (`// ( )`) still pair up, in either direction.
pub fn quick_scan_backward<T: TextSource + ?Sized>(
    text: &T,
    from: usize,
    pair: BracketPair,
) -> QuickScan {
    if from >= text.len() {
        return QuickScan::NotFound;
    }

    let mut pending = 1usize;
    for i in (0..=from).rev() {
        let ch = text.char_at(i);
        if ch == pair.close {
            pending += 1;
        } else if ch == pair.open {
            pending -= 1;
            if pending == 0 {
                return QuickScan::Found(i);
            }
        } else if ch == '\n' {
            if (line_start(text, i)..i).any(|j| marker_at(text, j)) {
                return QuickScan::Inconclusive;
            }
        } else if marker_at(text, i) || (i > 0 && marker_at(text, i - 1)) {
            return QuickScan::Inconclusive;
        }
    }
    QuickScan::NotFound
}
