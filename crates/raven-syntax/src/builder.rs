use salsa::Database;
use text_size::TextRange;

use crate::{Green, GreenNode, GreenToken, GreenTrivia, NodeOrToken, SyntaxKind};

/// Assembles an interned green tree from parser events.
///
/// Nodes are opened and closed strictly LIFO; tokens land in the innermost
/// open node. `token` receives the range of the token kind itself and
/// extends it over the attached trivia when slicing the source text.
pub struct Builder<'db> {
    db: &'db dyn Database,
    text: &'db str,
    parents: Vec<(SyntaxKind, usize)>,
    children: Vec<Green<'db>>,
}

impl<'db> Builder<'db> {
    pub fn new(db: &'db dyn Database, text: &'db str) -> Self {
        Self { db, text, parents: Vec::new(), children: Vec::new() }
    }

    pub fn start_node(&mut self, kind: SyntaxKind) {
        self.parents.push((kind, self.children.len()));
    }

    pub fn finish_node(&mut self) {
        let (kind, first_child) = self.parents.pop().expect("no started node to finish");
        let children = self.children.drain(first_child..).collect();
        self.children.push(Green::Node(GreenNode::new(self.db, kind, children)));
    }

    pub fn token(
        &mut self,
        leading: GreenTrivia,
        kind: SyntaxKind,
        kind_range: TextRange,
        trailing: GreenTrivia,
    ) {
        let full_range =
            TextRange::new(kind_range.start() - leading.len(), kind_range.end() + trailing.len());
        let text = &self.text[full_range];
        self.children.push(Green::Token(GreenToken::new(self.db, leading, kind, Box::<str>::from(text), trailing)));
    }

    pub fn finish(mut self) -> GreenNode<'db> {
        debug_assert!(self.parents.is_empty(), "unfinished nodes at end of build");

        match self.children.pop() {
            Some(NodeOrToken::Node(root)) if self.children.is_empty() => root,
            _ => unreachable!("build did not produce a single root node"),
        }
    }
}
