use salsa::Database;

use crate::SyntaxKind::*;
use crate::visitor::Visitor;
use crate::{GreenNode, Red, RedNode, RedToken};

/// Cast protocol shared by all typed wrappers.
///
/// A wrapper is a `Copy` view over exactly one red node; it owns nothing
/// and recomputes every query from the tree on each call.
pub trait Node<'db> {
    fn cast(db: &'db dyn Database, syntax: RedNode<'db>) -> Option<Self>
    where
        Self: Sized;

    fn syntax(self) -> RedNode<'db>;
}

fn first_token_text<'db>(db: &'db dyn Database, node: RedNode<'db>) -> Option<&'db str> {
    node.children(db).filter_map(Red::into_token).next().map(|token| token.text_trimmed(db))
}

fn name_of<'db>(db: &'db dyn Database, node: RedNode<'db>) -> Option<&'db str> {
    node.children(db)
        .filter_map(Red::into_node)
        .find(|child| child.kind(db) == IDENT)
        .and_then(|ident| first_token_text(db, ident))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Module<'db>(RedNode<'db>);

impl<'db> Module<'db> {
    pub fn new(db: &'db dyn Database, root: GreenNode<'db>) -> Self {
        Self(RedNode::new_root(db, root))
    }

    pub fn items(self, db: &'db dyn Database) -> impl Iterator<Item = Item<'db>> + 'db {
        self.0.children(db).filter_map(Red::into_node).filter_map(|syntax| Item::cast(db, syntax))
    }
}

impl<'db> Node<'db> for Module<'db> {
    fn cast(db: &'db dyn Database, syntax: RedNode<'db>) -> Option<Self> {
        (syntax.kind(db) == MODULE).then_some(Self(syntax))
    }

    fn syntax(self) -> RedNode<'db> {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Item<'db> {
    Structure(Structure<'db>),
    Function(Function<'db>),
}

impl<'db> Node<'db> for Item<'db> {
    fn cast(db: &'db dyn Database, syntax: RedNode<'db>) -> Option<Self> {
        match syntax.kind(db) {
            STRUCTURE => Item::Structure(Structure(syntax)).into(),
            FN => Item::Function(Function(syntax)).into(),
            _ => None,
        }
    }

    fn syntax(self) -> RedNode<'db> {
        match self {
            Item::Structure(structure) => structure.0,
            Item::Function(function) => function.0,
        }
    }
}

/// Typed view over a `STRUCTURE` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Structure<'db>(RedNode<'db>);

impl<'db> Structure<'db> {
    /// Immediate `MODIFIER` children, in source order. Recomputed on every
    /// call; empty when the structure carries no modifiers.
    pub fn modifiers(self, db: &'db dyn Database) -> impl Iterator<Item = Modifier<'db>> + 'db {
        self.0.children(db).filter_map(Red::into_node).filter_map(|syntax| Modifier::cast(db, syntax))
    }

    pub fn name(self, db: &'db dyn Database) -> Option<&'db str> {
        name_of(db, self.0)
    }

    pub fn fields(self, db: &'db dyn Database) -> impl Iterator<Item = Field<'db>> + 'db {
        self.0.children(db).filter_map(Red::into_node).filter_map(|syntax| Field::cast(db, syntax))
    }

    pub fn functions(self, db: &'db dyn Database) -> impl Iterator<Item = Function<'db>> + 'db {
        self.0.children(db).filter_map(Red::into_node).filter_map(|syntax| Function::cast(db, syntax))
    }

    /// Invokes the visitor's structure callback with `self`.
    pub fn accept<V: Visitor<'db>>(self, db: &'db dyn Database, visitor: &mut V) {
        visitor.visit_structure(db, self);
    }
}

impl<'db> Node<'db> for Structure<'db> {
    fn cast(db: &'db dyn Database, syntax: RedNode<'db>) -> Option<Self> {
        (syntax.kind(db) == STRUCTURE).then_some(Self(syntax))
    }

    fn syntax(self) -> RedNode<'db> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifier<'db>(RedNode<'db>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    Public,
    Internal,
    Extern,
    Operation,
    Trait,
}

impl<'db> Modifier<'db> {
    pub fn kind(self, db: &'db dyn Database) -> Option<ModifierKind> {
        self.0.children(db).filter_map(Red::into_token).find_map(|token| {
            match token.kind(db) {
                PUBLIC_KW => Some(ModifierKind::Public),
                INTERNAL_KW => Some(ModifierKind::Internal),
                EXTERN_KW => Some(ModifierKind::Extern),
                OPERATION_KW => Some(ModifierKind::Operation),
                TRAIT_KW => Some(ModifierKind::Trait),
                _ => None,
            }
        })
    }

    pub fn text(self, db: &'db dyn Database) -> Option<&'db str> {
        first_token_text(db, self.0)
    }
}

impl<'db> Node<'db> for Modifier<'db> {
    fn cast(db: &'db dyn Database, syntax: RedNode<'db>) -> Option<Self> {
        (syntax.kind(db) == MODIFIER).then_some(Self(syntax))
    }

    fn syntax(self) -> RedNode<'db> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'db>(RedNode<'db>);

impl<'db> Field<'db> {
    pub fn modifiers(self, db: &'db dyn Database) -> impl Iterator<Item = Modifier<'db>> + 'db {
        self.0.children(db).filter_map(Red::into_node).filter_map(|syntax| Modifier::cast(db, syntax))
    }

    pub fn name(self, db: &'db dyn Database) -> Option<&'db str> {
        name_of(db, self.0)
    }

    pub fn ty(self, db: &'db dyn Database) -> Option<PathType<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| PathType::cast(db, syntax))
    }
}

impl<'db> Node<'db> for Field<'db> {
    fn cast(db: &'db dyn Database, syntax: RedNode<'db>) -> Option<Self> {
        (syntax.kind(db) == FIELD).then_some(Self(syntax))
    }

    fn syntax(self) -> RedNode<'db> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Function<'db>(RedNode<'db>);

impl<'db> Function<'db> {
    pub fn modifiers(self, db: &'db dyn Database) -> impl Iterator<Item = Modifier<'db>> + 'db {
        self.0.children(db).filter_map(Red::into_node).filter_map(|syntax| Modifier::cast(db, syntax))
    }

    pub fn name(self, db: &'db dyn Database) -> Option<&'db str> {
        name_of(db, self.0)
    }

    pub fn param_list(self, db: &'db dyn Database) -> Option<ParamList<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| ParamList::cast(db, syntax))
    }

    pub fn return_type(self, db: &'db dyn Database) -> Option<ReturnType<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| ReturnType::cast(db, syntax))
    }

    pub fn body(self, db: &'db dyn Database) -> Option<Block<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| Block::cast(db, syntax))
    }
}

impl<'db> Node<'db> for Function<'db> {
    fn cast(db: &'db dyn Database, syntax: RedNode<'db>) -> Option<Self> {
        (syntax.kind(db) == FN).then_some(Self(syntax))
    }

    fn syntax(self) -> RedNode<'db> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamList<'db>(RedNode<'db>);

impl<'db> ParamList<'db> {
    pub fn params(self, db: &'db dyn Database) -> impl Iterator<Item = Param<'db>> + 'db {
        self.0.children(db).filter_map(Red::into_node).filter_map(|syntax| Param::cast(db, syntax))
    }
}

impl<'db> Node<'db> for ParamList<'db> {
    fn cast(db: &'db dyn Database, syntax: RedNode<'db>) -> Option<Self> {
        (syntax.kind(db) == PARAM_LIST).then_some(Self(syntax))
    }

    fn syntax(self) -> RedNode<'db> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'db>(RedNode<'db>);

impl<'db> Param<'db> {
    pub fn name(self, db: &'db dyn Database) -> Option<&'db str> {
        name_of(db, self.0)
    }

    pub fn ty(self, db: &'db dyn Database) -> Option<PathType<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| PathType::cast(db, syntax))
    }
}

impl<'db> Node<'db> for Param<'db> {
    fn cast(db: &'db dyn Database, syntax: RedNode<'db>) -> Option<Self> {
        (syntax.kind(db) == PARAM).then_some(Self(syntax))
    }

    fn syntax(self) -> RedNode<'db> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnType<'db>(RedNode<'db>);

impl<'db> ReturnType<'db> {
    pub fn ty(self, db: &'db dyn Database) -> Option<PathType<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| PathType::cast(db, syntax))
    }
}

impl<'db> Node<'db> for ReturnType<'db> {
    fn cast(db: &'db dyn Database, syntax: RedNode<'db>) -> Option<Self> {
        (syntax.kind(db) == RETURN_TYPE).then_some(Self(syntax))
    }

    fn syntax(self) -> RedNode<'db> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathType<'db>(RedNode<'db>);

impl<'db> PathType<'db> {
    pub fn text(self, db: &'db dyn Database) -> Option<&'db str> {
        first_token_text(db, self.0)
    }
}

impl<'db> Node<'db> for PathType<'db> {
    fn cast(db: &'db dyn Database, syntax: RedNode<'db>) -> Option<Self> {
        (syntax.kind(db) == PATH_TYPE).then_some(Self(syntax))
    }

    fn syntax(self) -> RedNode<'db> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'db>(RedNode<'db>);

impl<'db> Block<'db> {
    pub fn statements(self, db: &'db dyn Database) -> impl Iterator<Item = Stmt<'db>> + 'db {
        self.0.children(db).filter_map(Red::into_node).filter_map(|syntax| Stmt::cast(db, syntax))
    }
}

impl<'db> Node<'db> for Block<'db> {
    fn cast(db: &'db dyn Database, syntax: RedNode<'db>) -> Option<Self> {
        (syntax.kind(db) == BLOCK).then_some(Self(syntax))
    }

    fn syntax(self) -> RedNode<'db> {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Stmt<'db> {
    Let(LetStmt<'db>),
    Expr(ExprStmt<'db>),
}

impl<'db> Node<'db> for Stmt<'db> {
    fn cast(db: &'db dyn Database, syntax: RedNode<'db>) -> Option<Self> {
        match syntax.kind(db) {
            LET_STMT => Stmt::Let(LetStmt(syntax)).into(),
            EXPR_STMT => Stmt::Expr(ExprStmt(syntax)).into(),
            _ => None,
        }
    }

    fn syntax(self) -> RedNode<'db> {
        match self {
            Stmt::Let(stmt) => stmt.0,
            Stmt::Expr(stmt) => stmt.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetStmt<'db>(RedNode<'db>);

impl<'db> LetStmt<'db> {
    pub fn name(self, db: &'db dyn Database) -> Option<&'db str> {
        name_of(db, self.0)
    }

    pub fn ty(self, db: &'db dyn Database) -> Option<PathType<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| PathType::cast(db, syntax))
    }

    pub fn initializer(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| Expr::cast(db, syntax))
    }
}

impl<'db> Node<'db> for LetStmt<'db> {
    fn cast(db: &'db dyn Database, syntax: RedNode<'db>) -> Option<Self> {
        (syntax.kind(db) == LET_STMT).then_some(Self(syntax))
    }

    fn syntax(self) -> RedNode<'db> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprStmt<'db>(RedNode<'db>);

impl<'db> ExprStmt<'db> {
    pub fn expr(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| Expr::cast(db, syntax))
    }
}

impl<'db> Node<'db> for ExprStmt<'db> {
    fn cast(db: &'db dyn Database, syntax: RedNode<'db>) -> Option<Self> {
        (syntax.kind(db) == EXPR_STMT).then_some(Self(syntax))
    }

    fn syntax(self) -> RedNode<'db> {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Expr<'db> {
    Literal(Literal<'db>),
    Path(Path<'db>),
    Call(Call<'db>),
    Field(FieldExpr<'db>),
    Binary(Binary<'db>),
    Prefix(Prefix<'db>),
    Paren(Paren<'db>),
    If(If<'db>),
    While(While<'db>),
    For(For<'db>),
    Return(Return<'db>),
    Break(Break<'db>),
}

impl<'db> Node<'db> for Expr<'db> {
    fn cast(db: &'db dyn Database, syntax: RedNode<'db>) -> Option<Self> {
        match syntax.kind(db) {
            LITERAL => Expr::Literal(Literal(syntax)).into(),
            PATH_EXPR => Expr::Path(Path(syntax)).into(),
            CALL_EXPR => Expr::Call(Call(syntax)).into(),
            FIELD_EXPR => Expr::Field(FieldExpr(syntax)).into(),
            BINARY_EXPR => Expr::Binary(Binary(syntax)).into(),
            PREFIX_EXPR => Expr::Prefix(Prefix(syntax)).into(),
            PAREN_EXPR => Expr::Paren(Paren(syntax)).into(),
            IF_EXPR => Expr::If(If(syntax)).into(),
            WHILE_EXPR => Expr::While(While(syntax)).into(),
            FOR_EXPR => Expr::For(For(syntax)).into(),
            RETURN_EXPR => Expr::Return(Return(syntax)).into(),
            BREAK_EXPR => Expr::Break(Break(syntax)).into(),
            _ => None,
        }
    }

    fn syntax(self) -> RedNode<'db> {
        match self {
            Expr::Literal(it) => it.0,
            Expr::Path(it) => it.0,
            Expr::Call(it) => it.0,
            Expr::Field(it) => it.0,
            Expr::Binary(it) => it.0,
            Expr::Prefix(it) => it.0,
            Expr::Paren(it) => it.0,
            Expr::If(it) => it.0,
            Expr::While(it) => it.0,
            Expr::For(it) => it.0,
            Expr::Return(it) => it.0,
            Expr::Break(it) => it.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'db>(RedNode<'db>);

pub enum LiteralKind<'db> {
    Int(RedToken<'db>),
    Float(RedToken<'db>),
    String(RedToken<'db>),
}

impl<'db> Literal<'db> {
    pub fn kind(self, db: &'db dyn Database) -> Option<LiteralKind<'db>> {
        self.0.children(db).filter_map(Red::into_token).find_map(|token| match token.kind(db) {
            INT_NUMBER => Some(LiteralKind::Int(token)),
            FLOAT_NUMBER => Some(LiteralKind::Float(token)),
            STRING => Some(LiteralKind::String(token)),
            _ => None,
        })
    }

    pub fn text(self, db: &'db dyn Database) -> Option<&'db str> {
        first_token_text(db, self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Path<'db>(RedNode<'db>);

impl<'db> Path<'db> {
    pub fn text(self, db: &'db dyn Database) -> Option<&'db str> {
        first_token_text(db, self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call<'db>(RedNode<'db>);

impl<'db> Call<'db> {
    pub fn callee(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| Expr::cast(db, syntax))
    }

    pub fn args(self, db: &'db dyn Database) -> Option<ArgList<'db>> {
        self.0
            .children(db)
            .filter_map(Red::into_node)
            .find(|syntax| syntax.kind(db) == ARG_LIST)
            .map(ArgList)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgList<'db>(RedNode<'db>);

impl<'db> ArgList<'db> {
    pub fn args(self, db: &'db dyn Database) -> impl Iterator<Item = Expr<'db>> + 'db {
        self.0.children(db).filter_map(Red::into_node).filter_map(|syntax| Expr::cast(db, syntax))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldExpr<'db>(RedNode<'db>);

impl<'db> FieldExpr<'db> {
    pub fn base(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| Expr::cast(db, syntax))
    }

    pub fn name(self, db: &'db dyn Database) -> Option<&'db str> {
        name_of(db, self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binary<'db>(RedNode<'db>);

impl<'db> Binary<'db> {
    pub fn lhs(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        self.0
            .children(db)
            .filter_map(Red::into_node)
            .next()
            .and_then(|syntax| Expr::cast(db, syntax))
    }

    pub fn op(self, db: &'db dyn Database) -> Option<&'db str> {
        first_token_text(db, self.0)
    }

    pub fn rhs(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        self.0
            .children(db)
            .filter_map(Red::into_node)
            .nth(1)
            .and_then(|syntax| Expr::cast(db, syntax))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix<'db>(RedNode<'db>);

impl<'db> Prefix<'db> {
    pub fn op(self, db: &'db dyn Database) -> Option<&'db str> {
        first_token_text(db, self.0)
    }

    pub fn expr(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| Expr::cast(db, syntax))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paren<'db>(RedNode<'db>);

impl<'db> Paren<'db> {
    pub fn expr(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| Expr::cast(db, syntax))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct If<'db>(RedNode<'db>);

#[derive(Debug, Clone, Copy)]
pub enum ElseBranch<'db> {
    Block(Block<'db>),
    If(If<'db>),
}

impl<'db> If<'db> {
    pub fn condition(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| Expr::cast(db, syntax))
    }

    pub fn then_branch(self, db: &'db dyn Database) -> Option<Block<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| Block::cast(db, syntax))
    }

    pub fn else_branch(self, db: &'db dyn Database) -> Option<ElseBranch<'db>> {
        let mut branches = self
            .0
            .children(db)
            .filter_map(Red::into_node)
            .filter(|syntax| matches!(syntax.kind(db), BLOCK | IF_EXPR));

        branches.next()?;
        match branches.next()? {
            syntax if syntax.kind(db) == BLOCK => Some(ElseBranch::Block(Block(syntax))),
            syntax => Some(ElseBranch::If(If(syntax))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct While<'db>(RedNode<'db>);

impl<'db> While<'db> {
    pub fn condition(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| Expr::cast(db, syntax))
    }

    pub fn body(self, db: &'db dyn Database) -> Option<Block<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| Block::cast(db, syntax))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct For<'db>(RedNode<'db>);

impl<'db> For<'db> {
    pub fn binding(self, db: &'db dyn Database) -> Option<&'db str> {
        name_of(db, self.0)
    }

    pub fn iterable(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| Expr::cast(db, syntax))
    }

    pub fn body(self, db: &'db dyn Database) -> Option<Block<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| Block::cast(db, syntax))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Return<'db>(RedNode<'db>);

impl<'db> Return<'db> {
    pub fn value(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| Expr::cast(db, syntax))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Break<'db>(RedNode<'db>);

impl<'db> Break<'db> {
    pub fn value(self, db: &'db dyn Database) -> Option<Expr<'db>> {
        self.0.children(db).filter_map(Red::into_node).find_map(|syntax| Expr::cast(db, syntax))
    }
}

#[cfg(test)]
mod tests {
    use salsa::{Database, DatabaseImpl};

    use super::*;
    use crate::SyntaxKind::{self, *};
    use crate::{Green, GreenToken, GreenTrivia};

    fn token<'db>(db: &'db dyn Database, kind: SyntaxKind, text: &str) -> Green<'db> {
        Green::Token(GreenToken::new(db, GreenTrivia::empty(), kind, Box::<str>::from(text), GreenTrivia::empty()))
    }

    fn modifier<'db>(db: &'db dyn Database, kind: SyntaxKind, text: &str) -> Green<'db> {
        Green::Node(GreenNode::new(db, MODIFIER, vec![token(db, kind, text)]))
    }

    fn ident<'db>(db: &'db dyn Database, text: &str) -> Green<'db> {
        Green::Node(GreenNode::new(db, IDENT, vec![token(db, NAME, text)]))
    }

    #[salsa::tracked]
    fn modifier_kinds<'db>(db: &'db dyn Database, root: GreenNode<'db>) -> Vec<String> {
        let structure = Structure::cast(db, RedNode::new_root(db, root))
            .expect("test root should be a structure");

        structure
            .modifiers(db)
            .map(|modifier| format!("{:?}", modifier.kind(db)))
            .collect()
    }

    #[salsa::tracked]
    fn modifiers_are_stable<'db>(db: &'db dyn Database, root: GreenNode<'db>) -> bool {
        let structure = Structure::cast(db, RedNode::new_root(db, root))
            .expect("test root should be a structure");

        let first: Vec<_> = structure.modifiers(db).filter_map(|m| m.kind(db)).collect();
        let second: Vec<_> = structure.modifiers(db).filter_map(|m| m.kind(db)).collect();
        first == second
    }

    #[test]
    fn modifiers_keep_source_order_and_skip_other_children() {
        let db = DatabaseImpl::new();
        let root = GreenNode::new(
            &db,
            STRUCTURE,
            vec![
                modifier(&db, PUBLIC_KW, "public"),
                ident(&db, "Point"),
                modifier(&db, EXTERN_KW, "extern"),
                modifier(&db, OPERATION_KW, "operation"),
            ],
        );

        assert_eq!(
            modifier_kinds(&db, root),
            ["Some(Public)", "Some(Extern)", "Some(Operation)"]
        );
    }

    #[test]
    fn modifiers_empty_when_structure_has_none() {
        let db = DatabaseImpl::new();
        let root = GreenNode::new(&db, STRUCTURE, vec![ident(&db, "Bare")]);

        assert_eq!(modifier_kinds(&db, root), Vec::<String>::new());
    }

    #[test]
    fn repeated_modifier_queries_agree() {
        let db = DatabaseImpl::new();
        let root = GreenNode::new(
            &db,
            STRUCTURE,
            vec![modifier(&db, INTERNAL_KW, "internal"), ident(&db, "Queue")],
        );

        assert!(modifiers_are_stable(&db, root));
    }
}
