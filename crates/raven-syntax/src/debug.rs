use std::fmt::Write as _;

use salsa::Database;

use crate::{GreenNode, NodeOrToken};

/// Renders a green tree as an indented kind-per-line listing, with token
/// text trimmed of trivia. The output is stable and used by golden tests
/// and the `dump` command.
pub fn debug_tree(db: &dyn Database, root: GreenNode<'_>) -> String {
    let mut out = String::new();
    render(db, root, 0, &mut out);
    out
}

fn render(db: &dyn Database, node: GreenNode<'_>, depth: usize, out: &mut String) {
    let _ = writeln!(out, "{:indent$}{:?}", "", node.kind(db), indent = depth * 2);

    for &child in node.children(db) {
        match child {
            NodeOrToken::Node(node) => render(db, node, depth + 1, out),
            NodeOrToken::Token(token) => {
                let _ = writeln!(
                    out,
                    "{:indent$}{:?} {:?}",
                    "",
                    token.kind(db),
                    token.text_trimmed(db),
                    indent = (depth + 1) * 2
                );
            }
        }
    }
}
