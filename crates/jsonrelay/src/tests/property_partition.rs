use alloc::{string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen, QuickCheck};

use super::recorder::{Event, Recorder};
use crate::{Parser, ParserOptions};

/// Characters for generated keys and string values. The closing quote is
/// the one character that is structural inside a token, so everything else
/// is fair game: whitespace, brackets, raw backslashes, line feeds and
/// multi-byte code points.
const TEXT_ALPHABET: &[char] = &[
    'a', 'b', 'z', 'A', '0', ' ', '\t', '\n', '\\', '{', '}', '[', ']', ':', ',', '\u{e9}',
    '\u{2603}',
];

/// A randomly generated document. Numbers are outside the grammar, so the
/// generator draws only from the value kinds the parser accepts.
#[derive(Debug, Clone)]
enum Node {
    Null,
    Bool(bool),
    Text(String),
    Array(Vec<Node>),
    Object(Vec<(String, Node)>),
}

impl Node {
    fn render_into(&self, out: &mut String) {
        match self {
            Node::Null => out.push_str("null"),
            Node::Bool(true) => out.push_str("true"),
            Node::Bool(false) => out.push_str("false"),
            Node::Text(text) => {
                out.push('"');
                out.push_str(text);
                out.push('"');
            }
            Node::Array(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.render_into(out);
                }
                out.push(']');
            }
            Node::Object(pairs) => {
                out.push('{');
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push('"');
                    out.push_str(key);
                    out.push_str("\":");
                    value.render_into(out);
                }
                out.push('}');
            }
        }
    }

    /// The event sequence a correct parse of this node must produce.
    fn expected_events(&self, out: &mut Vec<Event>) {
        match self {
            Node::Null => out.push(Event::Null),
            Node::Bool(value) => out.push(Event::Bool(*value)),
            Node::Text(text) => out.push(Event::Str(text.clone())),
            Node::Array(items) => {
                out.push(Event::ArrayStart);
                for item in items {
                    item.expected_events(out);
                }
                out.push(Event::ArrayEnd);
            }
            Node::Object(pairs) => {
                out.push(Event::ObjectStart);
                for (key, value) in pairs {
                    out.push(Event::Key(key.clone()));
                    value.expected_events(out);
                }
                out.push(Event::ObjectEnd);
            }
        }
    }
}

fn arbitrary_text(g: &mut Gen) -> String {
    let len = usize::arbitrary(g) % 8;
    (0..len)
        .map(|_| *g.choose(TEXT_ALPHABET).unwrap())
        .collect()
}

fn arbitrary_node(g: &mut Gen, depth: usize) -> Node {
    let choices = if depth == 0 { 3 } else { 5 };
    match u8::arbitrary(g) % choices {
        0 => Node::Null,
        1 => Node::Bool(bool::arbitrary(g)),
        2 => Node::Text(arbitrary_text(g)),
        3 => {
            let len = usize::arbitrary(g) % 4;
            Node::Array((0..len).map(|_| arbitrary_node(g, depth - 1)).collect())
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            Node::Object(
                (0..len)
                    .map(|_| (arbitrary_text(g), arbitrary_node(g, depth - 1)))
                    .collect(),
            )
        }
    }
}

/// A document whose root is always an object, as the grammar requires.
#[derive(Debug, Clone)]
struct RootDocument(Node);

impl Arbitrary for RootDocument {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 5;
        RootDocument(Node::Object(
            (0..len)
                .map(|_| (arbitrary_text(g), arbitrary_node(g, 3)))
                .collect(),
        ))
    }
}

/// Property: feeding a document in arbitrary char-boundary chunks must
/// produce exactly the event sequence of a single-chunk feed, and both must
/// match the sequence derived from the generated tree.
#[test]
fn partition_invariance_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(doc: RootDocument, splits: Vec<usize>) -> bool {
        let mut src = String::new();
        doc.0.render_into(&mut src);

        let mut expected = Vec::new();
        doc.0.expected_events(&mut expected);

        let mut parser = Parser::new(ParserOptions::default());
        let mut whole = Recorder::default();
        parser.feed(&src, &mut whole).unwrap();
        parser.finish().unwrap();

        // Feed the same text in arbitrarily sized chunks derived from
        // `splits`, never splitting a code point.
        let chars: Vec<char> = src.chars().collect();
        let mut parser = Parser::new(ParserOptions::default());
        let mut split = Recorder::default();
        let mut idx = 0;
        let mut remaining = chars.len();
        for s in splits {
            if remaining == 0 {
                break;
            }
            let size = 1 + (s % remaining);
            let end = idx + size;
            let chunk: String = chars[idx..end].iter().collect();
            parser.feed(&chunk, &mut split).unwrap();
            idx = end;
            remaining -= size;
        }
        if remaining > 0 {
            let chunk: String = chars[idx..].iter().collect();
            parser.feed(&chunk, &mut split).unwrap();
        }
        parser.finish().unwrap();

        whole.events == expected && split.events == expected
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(RootDocument, Vec<usize>) -> bool);
}
