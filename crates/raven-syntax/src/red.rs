use salsa::Database;
use text_size::TextSize;

use crate::{GreenNode, GreenToken, NodeOrToken, SyntaxKind};

pub type Red<'db> = NodeOrToken<RedNode<'db>, RedToken<'db>>;

impl<'db> Red<'db> {
    pub fn kind(self, db: &dyn Database) -> SyntaxKind {
        match self {
            NodeOrToken::Node(node) => node.kind(db),
            NodeOrToken::Token(token) => token.kind(db),
        }
    }
}

#[salsa::tracked]
#[derive(Debug)]
pub struct RedNode<'db> {
    pub parent: Option<RedNode<'db>>,
    pub text_offset: TextSize,
    pub green: GreenNode<'db>,
}

impl<'db> RedNode<'db> {
    pub fn new_root(db: &'db dyn Database, root: GreenNode<'db>) -> Self {
        Self::new(db, None, TextSize::new(0), root)
    }

    pub fn kind(self, db: &'db dyn Database) -> SyntaxKind {
        self.green(db).kind(db)
    }

    /// Materializes the immediate children, left to right.
    pub fn children(self, db: &'db dyn Database) -> impl Iterator<Item = Red<'db>> + 'db {
        let mut offset_in_parent = TextSize::new(0);

        self.green(db).children(db).iter().map(move |&green_child| {
            let text_offset = self.text_offset(db) + offset_in_parent;
            offset_in_parent += green_child.text_len(db);

            match green_child {
                NodeOrToken::Node(node) => {
                    Red::Node(RedNode::new(db, self.into(), text_offset, node))
                }
                NodeOrToken::Token(token) => {
                    Red::Token(RedToken::new(db, self.into(), text_offset, token))
                }
            }
        })
    }
}

#[salsa::tracked]
pub struct RedToken<'db> {
    pub parent: Option<RedNode<'db>>,
    pub text_offset: TextSize,
    pub green: GreenToken<'db>,
}

impl<'db> RedToken<'db> {
    pub fn kind(self, db: &'db dyn Database) -> SyntaxKind {
        self.green(db).kind(db)
    }

    /// Token text with attached trivia sliced away.
    pub fn text_trimmed(self, db: &'db dyn Database) -> &'db str {
        self.green(db).text_trimmed(db)
    }
}
