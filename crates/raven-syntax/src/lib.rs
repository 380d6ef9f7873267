//! Lossless, immutable syntax tree for the Raven language.
//!
//! Green nodes and tokens are interned in the database and carry no
//! position. Red nodes are materialized on demand with parent pointers and
//! absolute offsets, and the typed layer in [`ast`] wraps them with
//! per-production accessors.

use std::fmt;

/// Typed accessor wrappers around the raw syntax tree.
pub mod ast;
mod builder;
mod debug;
mod green;
mod red;
mod syntax_kind;
mod syntax_set;
/// Kind-dispatched tree visitation.
pub mod visitor;

/// Builder turning parser events into an interned green tree.
pub use builder::Builder;
/// Indented textual rendering of a green tree.
pub use debug::debug_tree;
pub use green::{Green, GreenNode, GreenToken, GreenTrivia, TriviaPiece, TriviaPieceKind};
pub use red::{Red, RedNode, RedToken};
/// Token and node kinds used throughout the tree.
pub use syntax_kind::SyntaxKind;
/// Compact set for grouping `SyntaxKind` values.
pub use syntax_set::SyntaxSet;

/// Node-or-token wrapper used by both tree layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeOrToken<N, T> {
    Node(N),
    Token(T),
}

impl<N, T> NodeOrToken<N, T> {
    /// Converts into the node variant, if any.
    pub fn into_node(self) -> Option<N> {
        match self {
            NodeOrToken::Node(node) => Some(node),
            NodeOrToken::Token(_) => None,
        }
    }

    /// Converts into the token variant, if any.
    pub fn into_token(self) -> Option<T> {
        match self {
            NodeOrToken::Node(_) => None,
            NodeOrToken::Token(token) => Some(token),
        }
    }
}

impl<N: fmt::Display, T: fmt::Display> fmt::Display for NodeOrToken<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeOrToken::Node(node) => fmt::Display::fmt(node, f),
            NodeOrToken::Token(token) => fmt::Display::fmt(token, f),
        }
    }
}
