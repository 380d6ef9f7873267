use raven_syntax::SyntaxKind::*;
use raven_syntax::SyntaxSet;

use super::{delimited, exprs, name, types};
use crate::parser::{Marker, Parser};

pub(crate) fn module(p: &mut Parser) {
    let m = p.start();

    while p.peek_kind() != EOF {
        item(p);
    }

    m.complete(p, MODULE);
}

fn item(p: &mut Parser) {
    let m = p.start();
    modifiers(p);

    match p.peek_kind() {
        STRUCT_KW => structure(p, m),
        FN_KW => function(p, m),
        _ => {
            p.error("expected `struct` or `fn`");
            if !p.at(EOF) {
                p.advance();
            }
            m.complete(p, ERROR);
        }
    }
}

/// One MODIFIER node per modifier keyword, completed directly inside the
/// enclosing item marker so they stay immediate children of the item.
fn modifiers(p: &mut Parser) {
    while p.peek_kind().is_modifier() {
        let m = p.start();
        p.advance();
        m.complete(p, MODIFIER);
    }
}

fn structure(p: &mut Parser, m: Marker) {
    p.advance();

    name(p, &SyntaxSet::new([LEFT_BRACE, STRUCT_KW, FN_KW]));
    generic_param_list(p);

    if p.at(LEFT_BRACE) {
        p.advance();

        while !matches!(p.peek_kind(), RIGHT_BRACE | EOF) {
            member(p);
        }

        p.expect(RIGHT_BRACE, "expected `}`");
    } else {
        p.error("expected a structure body");
    }

    m.complete(p, STRUCTURE);
}

fn member(p: &mut Parser) {
    let m = p.start();
    modifiers(p);

    match p.peek_kind() {
        FN_KW => function(p, m),
        NAME => field(p, m),
        _ => {
            p.error("expected a field or a function");
            if !matches!(p.peek_kind(), RIGHT_BRACE | EOF) {
                p.advance();
            }
            m.complete(p, ERROR);
        }
    }
}

fn field(p: &mut Parser, m: Marker) {
    name(p, &SyntaxSet::new([COLON, SEMICOLON, RIGHT_BRACE]));

    if p.at(COLON) {
        types::ascription(p);
    } else {
        p.error("missing type for structure field");
    }

    p.expect(SEMICOLON, "expected `;`");
    m.complete(p, FIELD);
}

fn function(p: &mut Parser, m: Marker) {
    p.advance();

    name(p, &SyntaxSet::new([LEFT_PAREN, LEFT_BRACE, SEMICOLON]));
    generic_param_list(p);

    if p.at(LEFT_PAREN) {
        param_list(p);
    } else {
        p.error("expected function parameters");
    }

    if p.at(COLON) {
        let ret = p.start();
        types::ascription(p);
        ret.complete(p, RETURN_TYPE);
    }

    exprs::block(p);

    m.complete(p, FN);
}

fn generic_param_list(p: &mut Parser) {
    if p.peek_kind() != LEFT_BRACKET {
        return;
    }

    delimited(
        p,
        LEFT_BRACKET,
        RIGHT_BRACKET,
        COMMA,
        "expected generic parameter",
        &SyntaxSet::new([NAME]),
        generic_param,
    );
}

fn generic_param(p: &mut Parser) -> bool {
    match p.peek_kind() {
        NAME => {
            let m = p.start();
            p.advance();
            m.complete(p, TYPE_PARAM);
            true
        }
        _ => false,
    }
}

fn param_list(p: &mut Parser) {
    let m = p.start();
    p.advance();

    while !matches!(p.peek_kind(), RIGHT_PAREN | EOF) {
        if p.peek_kind() != NAME {
            p.error("expected parameter name");
            if p.eat(COMMA) {
                continue;
            }
            break;
        }

        param(p);

        if !p.eat(COMMA) {
            if p.peek_kind() == NAME {
                p.expect(COMMA, "expected `,`");
            } else {
                break;
            }
        }
    }

    p.expect(RIGHT_PAREN, "expected `)`");
    m.complete(p, PARAM_LIST);
}

fn param(p: &mut Parser) {
    let m = p.start();
    name(p, &SyntaxSet::EMPTY);

    if p.at(COLON) {
        types::ascription(p);
    } else {
        p.error("missing type for function parameter");
    }

    m.complete(p, PARAM);
}
