//! Property-based tests over generated documents.
//!
//! Documents are built from a small tree of nodes and rendered to text, so
//! every generated input sits inside the accepted subset. serde_json decodes
//! the same text as the reference.

use objson::{decode, decode_with_options, DecodeOptions, ErrorKind, Value, Whitespace};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Node {
    Literal(&'static str),
    Number(String),
    Str(String),
    Array(Vec<Node>),
    Object(Vec<(String, Node)>),
}

fn render(node: &Node, sep: &str, out: &mut String) {
    match node {
        Node::Literal(text) => out.push_str(text),
        Node::Number(text) => out.push_str(text),
        Node::Str(text) => {
            out.push('"');
            out.push_str(text);
            out.push('"');
        }
        Node::Array(elements) => {
            out.push('[');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                    out.push_str(sep);
                }
                render(element, sep, out);
            }
            out.push(']');
        }
        Node::Object(members) => {
            out.push('{');
            for (i, (key, value)) in members.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                    out.push_str(sep);
                }
                out.push('"');
                out.push_str(key);
                out.push_str("\":");
                out.push_str(sep);
                render(value, sep, out);
            }
            out.push('}');
        }
    }
}

fn document(root: &Node, sep: &str) -> String {
    let mut out = String::new();
    render(root, sep, &mut out);
    out
}

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _]{0,8}"
}

fn leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        prop::sample::select(vec!["true", "false", "null"]).prop_map(Node::Literal),
        "-?(0|[1-9][0-9]{0,8})(\\.[0-9]{1,6})?".prop_map(Node::Number),
        text().prop_map(Node::Str),
    ]
}

fn node() -> impl Strategy<Value = Node> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Node::Array),
            prop::collection::vec((text(), inner), 0..6).prop_map(Node::Object),
        ]
    })
}

fn root() -> impl Strategy<Value = Node> {
    prop::collection::vec((text(), node()), 0..6).prop_map(Node::Object)
}

fn structural_bytes() -> impl Strategy<Value = Vec<u8>> {
    let alphabet = b"{}[]\":, -.0123456789truefalsnl\\\n\t".to_vec();
    prop::collection::vec(prop::sample::select(alphabet), 0..48)
}

proptest! {
    #[test]
    fn prop_generated_documents_match_reference(root in root()) {
        let input = document(&root, " ");
        let ours = decode(input.as_bytes()).map(Value::Object);
        let reference = serde_json::from_str::<Value>(&input);

        prop_assert!(reference.is_ok(), "serde_json rejected {:?}", input);
        prop_assert_eq!(ours.ok(), reference.ok());
    }

    #[test]
    fn prop_strict_prefixes_fail(root in root()) {
        let input = document(&root, " ");
        for end in 0..input.len() {
            prop_assert!(
                decode(&input.as_bytes()[..end]).is_err(),
                "prefix {:?} decoded",
                &input[..end]
            );
        }
    }

    #[test]
    fn prop_arbitrary_bytes_fail_consistently(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(decode(&bytes), decode(&bytes));
    }

    #[test]
    fn prop_structural_noise_fails_consistently(bytes in structural_bytes()) {
        let first = decode(&bytes);
        if let Err(err) = &first {
            prop_assert!(err.offset() <= bytes.len());
        }
        prop_assert_eq!(first, decode(&bytes));
    }

    #[test]
    fn prop_json_whitespace_matches_compact_layout(root in root()) {
        let compact = document(&root, " ");
        let spread = document(&root, "\n\t ");
        let options = DecodeOptions::new().with_whitespace(Whitespace::Json);

        let expected = decode(compact.as_bytes());
        prop_assert!(expected.is_ok());
        prop_assert_eq!(decode_with_options(spread.as_bytes(), options), expected);

        if spread.contains('\n') {
            prop_assert!(decode(spread.as_bytes()).is_err());
        }
    }

    #[test]
    fn prop_depth_limit_bounds_recursion(depth in 1usize..5_000, limit in 1usize..64) {
        let input = format!("{{\"k\": {}", "[".repeat(depth));
        let options = DecodeOptions::new().with_max_depth(limit);
        let err = decode_with_options(input.as_bytes(), options).unwrap_err();

        if depth + 1 > limit {
            prop_assert_eq!(err.kind(), ErrorKind::DepthLimitExceeded { limit });
        } else {
            prop_assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfInput);
        }
    }
}
