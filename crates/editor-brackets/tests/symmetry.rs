use editor_brackets::{BracketSearchResult, CharBuffer, search_bracket};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PAIRS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

/// Tokens that never change lexical state once complete. Brackets inside them are not code.
/// Tokens spanning lines end with a line break, so code never shares a line with their tail.
const FILLERS: &[&str] = &[
    "foo",
    "x1;",
    "a + b",
    "\"(\"",
    "\")]\"",
    "\"a\\\"(\"",
    "'('",
    "')'",
    "'\\''",
    "'\"'",
    "// ) ( \" '\n",
    "/* ( ] \" */",
    "\n",
    "@\"\\\"\")\"",
    "@\"(\"\"}\"",
    "/* ( \n ] \" \n */\n",
    "@\"(\n] \"\" {\n\"\n",
];

/// Emit a random sequence of fillers and nested code bracket pairs, recording the offsets of
/// every code pair.
fn emit_group(
    rng: &mut StdRng,
    out: &mut Vec<char>,
    pairs: &mut Vec<(usize, usize)>,
    depth: usize,
) {
    let count = rng.gen_range(0..4);
    for _ in 0..count {
        out.push(' ');
        if depth < 4 && rng.gen_bool(0.45) {
            let (open, close) = PAIRS[rng.gen_range(0..PAIRS.len())];
            let start = out.len();
            out.push(open);
            emit_group(rng, out, pairs, depth + 1);
            pairs.push((start, out.len()));
            out.push(close);
        } else {
            out.extend(FILLERS[rng.gen_range(0..FILLERS.len())].chars());
        }
    }
}

#[test]
fn test_search_is_symmetric_for_code_pairs() {
    let mut rng = StdRng::seed_from_u64(0x5eed_b4ac);
    let mut checked = 0usize;

    for _ in 0..300 {
        let mut chars = Vec::new();
        let mut pairs = Vec::new();
        emit_group(&mut rng, &mut chars, &mut pairs, 0);

        let text = CharBuffer::from(chars.iter().collect::<String>());
        for &(open, close) in &pairs {
            let expected = Some(BracketSearchResult::new(open, 1, close, 1));
            assert_eq!(
                search_bracket(&text, open + 1),
                expected,
                "forward from {open} in {text:?}"
            );
            assert_eq!(
                search_bracket(&text, close + 1),
                expected,
                "backward from {close} in {text:?}"
            );
            checked += 1;
        }
    }

    assert!(checked > 0);
}

#[test]
fn test_search_never_panics_on_random_text() {
    const ALPHABET: &[char] = &[
        '(', ')', '[', ']', '{', '}', '<', '>', '"', '\'', '/', '*', '\\', '@', '\n', '\r', ' ',
        'a',
    ];
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let len = rng.gen_range(0..64);
        let chars: Vec<char> = (0..len)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
            .collect();

        for offset in 0..=chars.len() + 1 {
            if let Some(result) = search_bracket(&chars, offset) {
                assert!(result.opening_offset < result.closing_offset);
                assert!(result.closing_offset < chars.len());
            }
        }
    }
}
