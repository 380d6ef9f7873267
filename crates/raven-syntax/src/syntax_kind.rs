use crate::SyntaxKind::*;

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntaxKind {
    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACKET,
    RIGHT_BRACKET,
    LEFT_BRACE,
    RIGHT_BRACE,
    COLON,
    SEMICOLON,
    COMMA,
    DOT,
    EQ,

    STRUCT_KW,
    FN_KW,
    LET_KW,
    IF_KW,
    ELSE_KW,
    WHILE_KW,
    FOR_KW,
    IN_KW,
    RETURN_KW,
    BREAK_KW,

    PUBLIC_KW,
    INTERNAL_KW,
    EXTERN_KW,
    OPERATION_KW,
    TRAIT_KW,

    NAME,
    INT_NUMBER,
    FLOAT_NUMBER,
    STRING,
    BINARY_OPERATOR,
    PREFIX_OPERATOR,

    UNKNOWN,
    EOF,

    MODULE,
    STRUCTURE,
    MODIFIER,
    FIELD,
    FN,
    PARAM_LIST,
    PARAM,
    RETURN_TYPE,
    PATH_TYPE,
    TYPE_PARAM,
    IDENT,
    BLOCK,
    LET_STMT,
    EXPR_STMT,
    LITERAL,
    PATH_EXPR,
    CALL_EXPR,
    ARG_LIST,
    FIELD_EXPR,
    BINARY_EXPR,
    PREFIX_EXPR,
    PAREN_EXPR,
    IF_EXPR,
    WHILE_EXPR,
    FOR_EXPR,
    RETURN_EXPR,
    BREAK_EXPR,
    ERROR,
    TOMBSTONE,
}

impl SyntaxKind {
    /// Keywords that form `MODIFIER` nodes in front of items.
    pub fn is_modifier(self) -> bool {
        matches!(self, PUBLIC_KW | INTERNAL_KW | EXTERN_KW | OPERATION_KW | TRAIT_KW)
    }
}
