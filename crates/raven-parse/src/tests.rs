use expect_test::expect;
use raven_syntax::ast::{Expr, Item, Module, Stmt};
use raven_syntax::debug_tree;
use salsa::{Database, DatabaseImpl};

#[salsa::input]
struct TestSource {
    #[returns(ref)]
    text: String,
}

fn parse_tree(text: &str) -> String {
    let db = DatabaseImpl::new();
    let parse = crate::module(&db, text);
    assert!(parse.diagnostics().is_empty(), "unexpected parse errors");
    debug_tree(&db, parse.green())
}

#[test]
fn structure_with_modifier_and_field() {
    let tree = parse_tree(
        "
public struct Point {
    x: float;
}
",
    );

    expect![[r#"
        MODULE
          STRUCTURE
            MODIFIER
              PUBLIC_KW "public"
            STRUCT_KW "struct"
            IDENT
              NAME "Point"
            LEFT_BRACE "{"
            FIELD
              IDENT
                NAME "x"
              COLON ":"
              PATH_TYPE
                NAME "float"
              SEMICOLON ";"
            RIGHT_BRACE "}"
    "#]]
    .assert_eq(&tree);
}

#[test]
fn function_with_statements() {
    let tree = parse_tree(
        "
fn main() {
    let x = 1 + 2;
    print(x);
}
",
    );

    expect![[r#"
        MODULE
          FN
            FN_KW "fn"
            IDENT
              NAME "main"
            PARAM_LIST
              LEFT_PAREN "("
              RIGHT_PAREN ")"
            BLOCK
              LEFT_BRACE "{"
              LET_STMT
                LET_KW "let"
                IDENT
                  NAME "x"
                EQ "="
                BINARY_EXPR
                  LITERAL
                    INT_NUMBER "1"
                  BINARY_OPERATOR "+"
                  LITERAL
                    INT_NUMBER "2"
                SEMICOLON ";"
              EXPR_STMT
                CALL_EXPR
                  PATH_EXPR
                    NAME "print"
                  ARG_LIST
                    LEFT_PAREN "("
                    PATH_EXPR
                      NAME "x"
                    RIGHT_PAREN ")"
                SEMICOLON ";"
              RIGHT_BRACE "}"
    "#]]
    .assert_eq(&tree);
}

#[test]
fn control_flow_expressions() {
    let tree = parse_tree(
        "
fn loop_demo() {
    while !done {
        total.add(1);
    }
    for i in items {
        if i == 0 {
            break;
        } else {
            return i;
        }
    }
}
",
    );

    expect![[r#"
        MODULE
          FN
            FN_KW "fn"
            IDENT
              NAME "loop_demo"
            PARAM_LIST
              LEFT_PAREN "("
              RIGHT_PAREN ")"
            BLOCK
              LEFT_BRACE "{"
              EXPR_STMT
                WHILE_EXPR
                  WHILE_KW "while"
                  PREFIX_EXPR
                    PREFIX_OPERATOR "!"
                    PATH_EXPR
                      NAME "done"
                  BLOCK
                    LEFT_BRACE "{"
                    EXPR_STMT
                      CALL_EXPR
                        FIELD_EXPR
                          PATH_EXPR
                            NAME "total"
                          DOT "."
                          IDENT
                            NAME "add"
                        ARG_LIST
                          LEFT_PAREN "("
                          LITERAL
                            INT_NUMBER "1"
                          RIGHT_PAREN ")"
                      SEMICOLON ";"
                    RIGHT_BRACE "}"
              EXPR_STMT
                FOR_EXPR
                  FOR_KW "for"
                  IDENT
                    NAME "i"
                  IN_KW "in"
                  PATH_EXPR
                    NAME "items"
                  BLOCK
                    LEFT_BRACE "{"
                    EXPR_STMT
                      IF_EXPR
                        IF_KW "if"
                        BINARY_EXPR
                          PATH_EXPR
                            NAME "i"
                          BINARY_OPERATOR "=="
                          LITERAL
                            INT_NUMBER "0"
                        BLOCK
                          LEFT_BRACE "{"
                          EXPR_STMT
                            BREAK_EXPR
                              BREAK_KW "break"
                            SEMICOLON ";"
                          RIGHT_BRACE "}"
                        ELSE_KW "else"
                        BLOCK
                          LEFT_BRACE "{"
                          EXPR_STMT
                            RETURN_EXPR
                              RETURN_KW "return"
                              PATH_EXPR
                                NAME "i"
                            SEMICOLON ";"
                          RIGHT_BRACE "}"
                    RIGHT_BRACE "}"
              RIGHT_BRACE "}"
    "#]]
    .assert_eq(&tree);
}

#[test]
fn missing_structure_name_is_reported_and_tree_survives() {
    let db = DatabaseImpl::new();
    let parse = crate::module(&db, "struct {}");

    let messages: Vec<_> = parse.diagnostics().iter().map(|d| d.message().to_owned()).collect();
    assert_eq!(messages, ["expected identifier"]);

    let tree = debug_tree(&db, parse.green());
    assert!(tree.starts_with("MODULE\n"), "malformed input should still parse to a module");
    assert!(tree.contains("STRUCTURE"));
}

#[test]
fn stray_tokens_become_error_nodes() {
    let db = DatabaseImpl::new();
    let parse = crate::module(&db, "; struct Unit {}");

    assert!(!parse.diagnostics().is_empty());
    assert!(debug_tree(&db, parse.green()).contains("ERROR"));
}

#[salsa::tracked]
fn structure_summaries<'db>(db: &'db dyn Database, source: TestSource) -> Vec<String> {
    let parse = crate::module(db, source.text(db));
    let module = Module::new(db, parse.green());
    let mut summaries = Vec::new();

    for item in module.items(db) {
        let Item::Structure(structure) = item else { continue };

        let name = structure.name(db).unwrap_or("?");
        let modifiers: Vec<_> =
            structure.modifiers(db).filter_map(|m| m.text(db)).collect();
        summaries.push(format!("{name} [{}]", modifiers.join(" ")));

        for field in structure.fields(db) {
            let field_name = field.name(db).unwrap_or("?");
            let ty = field.ty(db).and_then(|ty| ty.text(db)).unwrap_or("?");
            summaries.push(format!("  field {field_name}: {ty}"));
        }

        for function in structure.functions(db) {
            let fn_name = function.name(db).unwrap_or("?");
            let modifiers: Vec<_> =
                function.modifiers(db).filter_map(|m| m.text(db)).collect();
            let ret = function
                .return_type(db)
                .and_then(|ret| ret.ty(db))
                .and_then(|ty| ty.text(db))
                .unwrap_or("()");
            summaries.push(format!("  fn {fn_name} [{}]: {ret}", modifiers.join(" ")));
        }
    }

    summaries
}

#[salsa::tracked]
fn first_let_shape<'db>(db: &'db dyn Database, source: TestSource) -> String {
    let parse = crate::module(db, source.text(db));
    let module = Module::new(db, parse.green());

    let function = module
        .items(db)
        .find_map(|item| match item {
            Item::Function(function) => Some(function),
            _ => None,
        })
        .expect("expected a function");

    let body = function.body(db).expect("expected a body");
    let mut statements = body.statements(db);
    let Some(Stmt::Let(let_stmt)) = statements.next() else {
        panic!("expected a let statement");
    };

    let name = let_stmt.name(db).unwrap_or("?");
    let ty = let_stmt.ty(db).and_then(|ty| ty.text(db)).unwrap_or("?");

    let Some(Expr::Binary(binary)) = let_stmt.initializer(db) else {
        panic!("expected a binary initializer");
    };

    let operand = |expr: Option<Expr<'db>>| match expr {
        Some(Expr::Literal(literal)) => literal.text(db).unwrap_or("?"),
        _ => "?",
    };

    format!(
        "let {name}: {ty} = {} {} {}",
        operand(binary.lhs(db)),
        binary.op(db).unwrap_or("?"),
        operand(binary.rhs(db)),
    )
}

#[test]
fn typed_layer_sees_let_bindings() {
    let db = DatabaseImpl::new();
    let source = TestSource::new(&db, "fn main() { let x: int = 1 + 2; }".to_owned());

    assert_eq!(first_let_shape(&db, source), "let x: int = 1 + 2");
}

#[test]
fn typed_layer_sees_parsed_structures() {
    let db = DatabaseImpl::new();
    let source = TestSource::new(
        &db,
        "
public internal struct Vector {
    x: float;
    public fn length(): float {
        return x;
    }
}

struct Empty {}
"
        .to_owned(),
    );

    assert_eq!(
        structure_summaries(&db, source),
        [
            "Vector [public internal]",
            "  field x: float",
            "  fn length [public]: float",
            "Empty []",
        ]
    );
}
