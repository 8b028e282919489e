//! Prints the matched bracket pair for every caret position in a small C#-like snippet.
//!
//! Run with `RUST_LOG=editor_brackets=trace` to see the quick/full scan decisions.

use editor_brackets::{BracketHighlighter, CharBuffer, search_bracket};
use tracing_subscriber::EnvFilter;

const SNIPPET: &str = r#"void Main() {
    var path = @"C:\dir\(x)";
    Log("}", ')'); // }
    if (ok) { Run(); }
}"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let text = CharBuffer::from(SNIPPET);
    let chars = text.as_chars();

    println!("{SNIPPET}\n");
    for offset in 1..=chars.len() {
        if let Some(result) = search_bracket(&text, offset) {
            println!(
                "caret {offset:>3} after {:?}: {:?} at {} <-> {:?} at {}",
                chars[offset - 1],
                chars[result.opening_offset],
                result.opening_offset,
                chars[result.closing_offset],
                result.closing_offset,
            );
        }
    }

    let mut highlighter = BracketHighlighter::default();
    let caret = SNIPPET.find('{').map_or(0, |byte| SNIPPET[..byte].chars().count() + 1);
    if let Some(highlight) = highlighter.update(&text, caret, 1) {
        println!("\nhighlight for caret {caret}: {highlight:?}");
    }
}
