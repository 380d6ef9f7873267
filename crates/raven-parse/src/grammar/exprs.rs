use raven_syntax::SyntaxKind::*;
use raven_syntax::SyntaxSet;

use super::{name, types};
use crate::parser::{CompletedMarker, Parser};

const EXPR_FIRST: SyntaxSet = SyntaxSet::new([
    INT_NUMBER,
    FLOAT_NUMBER,
    STRING,
    NAME,
    LEFT_PAREN,
    IF_KW,
    WHILE_KW,
    FOR_KW,
    RETURN_KW,
    BREAK_KW,
    PREFIX_OPERATOR,
]);

pub(crate) fn block(p: &mut Parser<'_>) {
    if p.peek_kind() != LEFT_BRACE {
        p.error("expected a block");
        return;
    }

    let m = p.start();
    p.advance();

    while !matches!(p.peek_kind(), RIGHT_BRACE | EOF) {
        stmt(p);
    }

    p.expect(RIGHT_BRACE, "expected `}`");
    m.complete(p, BLOCK);
}

pub(crate) fn stmt(p: &mut Parser) {
    match p.peek_kind() {
        LET_KW => {
            let m = p.start();
            p.advance();

            name(p, &SyntaxSet::new([COLON, EQ, SEMICOLON]));
            if p.at(COLON) {
                types::ascription(p);
            }

            p.expect(EQ, "expected `=`");
            expr(p);
            p.expect(SEMICOLON, "expected `;`");
            m.complete(p, LET_STMT);
        }
        _ => match expr(p) {
            Some(completed) => {
                let m = completed.precede(p);
                p.eat(SEMICOLON);
                m.complete(p, EXPR_STMT);
            }
            None => p.error_and_bump("expected a statement"),
        },
    }
}

pub(crate) fn expr(p: &mut Parser) -> Option<CompletedMarker> {
    let mut lhs = unary_expr(p)?;

    while p.peek_kind() == BINARY_OPERATOR {
        let m = lhs.precede(p);
        p.advance();
        expr(p);
        lhs = m.complete(p, BINARY_EXPR);
    }

    lhs.into()
}

fn unary_expr(p: &mut Parser) -> Option<CompletedMarker> {
    match p.peek_kind() {
        IF_KW => if_(p),
        WHILE_KW => {
            let m = p.start();
            p.advance();
            expr(p);
            block(p);
            m.complete(p, WHILE_EXPR).into()
        }
        FOR_KW => {
            let m = p.start();
            p.advance();
            name(p, &SyntaxSet::new([IN_KW, LEFT_BRACE]));
            p.expect(IN_KW, "expected `in`");
            expr(p);
            block(p);
            m.complete(p, FOR_EXPR).into()
        }
        RETURN_KW => {
            let m = p.start();
            p.advance();
            if EXPR_FIRST.contains(p.peek_kind()) {
                expr(p);
            }
            m.complete(p, RETURN_EXPR).into()
        }
        BREAK_KW => {
            let m = p.start();
            p.advance();
            if EXPR_FIRST.contains(p.peek_kind()) {
                expr(p);
            }
            m.complete(p, BREAK_EXPR).into()
        }
        PREFIX_OPERATOR => {
            let m = p.start();
            p.advance();
            unary_expr(p);
            m.complete(p, PREFIX_EXPR).into()
        }
        _ => postfix_expr(p),
    }
}

fn if_(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    debug_assert_eq!(p.peek_kind(), IF_KW);

    let m = p.start();
    p.advance();
    expr(p);
    block(p);
    if p.at(ELSE_KW) {
        p.advance();
        if p.at(IF_KW) {
            if_(p);
        } else {
            block(p);
        }
    }
    m.complete(p, IF_EXPR).into()
}

fn postfix_expr(p: &mut Parser) -> Option<CompletedMarker> {
    let mut m = primary_expr(p)?;

    loop {
        match p.peek_kind() {
            LEFT_PAREN => {
                let call = m.precede(p);
                arg_list(p);
                m = call.complete(p, CALL_EXPR);
            }
            DOT => {
                let field = m.precede(p);
                p.advance();
                name(p, &SyntaxSet::EMPTY);
                m = field.complete(p, FIELD_EXPR);
            }
            _ => break,
        }
    }

    m.into()
}

fn arg_list(p: &mut Parser) {
    debug_assert_eq!(p.peek_kind(), LEFT_PAREN);

    let m = p.start();
    p.advance();

    while !matches!(p.peek_kind(), RIGHT_PAREN | EOF) {
        if expr(p).is_none() {
            p.error_and_bump("expected an argument");
        }

        if !p.eat(COMMA) {
            if EXPR_FIRST.contains(p.peek_kind()) {
                p.expect(COMMA, "expected `,`");
            } else {
                break;
            }
        }
    }

    p.expect(RIGHT_PAREN, "expected `)`");
    m.complete(p, ARG_LIST);
}

fn primary_expr(p: &mut Parser) -> Option<CompletedMarker> {
    match p.peek_kind() {
        INT_NUMBER | FLOAT_NUMBER | STRING => {
            let m = p.start();
            p.advance();
            m.complete(p, LITERAL).into()
        }
        NAME => {
            let m = p.start();
            p.advance();
            m.complete(p, PATH_EXPR).into()
        }
        LEFT_PAREN => {
            let m = p.start();
            p.advance();
            expr(p);
            p.expect(RIGHT_PAREN, "expected `)`");
            m.complete(p, PAREN_EXPR).into()
        }
        _ => None,
    }
}
