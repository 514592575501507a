use super::*;
use crate::{BinaryOp, Expr, Location, Stmt, TypeLiteral};
use pretty_assertions::assert_eq;

fn leaf(arena: &mut Arena, kind: ExprKind) -> ExprId {
    arena.alloc_expr(Expr::new(kind, Location::DUMMY))
}

fn binary(arena: &mut Arena, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
    leaf(arena, ExprKind::Binary { op, left, right })
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(1000.0), "1000");
    assert_eq!(format_number(0.5), "0.5");
    assert_eq!(format_number(-2.0), "-2");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NAN), "NaN");
}

#[test]
fn test_print_keeps_written_parens() {
    // (1 + 2) * 3
    let mut arena = Arena::new();
    let one = leaf(&mut arena, ExprKind::Number(1.0));
    let two = leaf(&mut arena, ExprKind::Number(2.0));
    let three = leaf(&mut arena, ExprKind::Number(3.0));
    let sum = binary(&mut arena, BinaryOp::Add, one, two);
    let paren = leaf(&mut arena, ExprKind::Paren(sum));
    let product = binary(&mut arena, BinaryOp::Mul, paren, three);

    assert_eq!(print_expr(&arena, product), "(1 + 2) * 3");
    assert_eq!(parenthesize_expr(&arena, product), "(1 + 2) * 3");
}

#[test]
fn test_parenthesize_makes_grouping_explicit() {
    // 1 + 2 * 3 km
    let mut arena = Arena::new();
    let one = leaf(&mut arena, ExprKind::Number(1.0));
    let two = leaf(&mut arena, ExprKind::Number(2.0));
    let three = leaf(&mut arena, ExprKind::Number(3.0));
    let km = leaf(&mut arena, ExprKind::Ident("km".to_string()));
    let asc = leaf(
        &mut arena,
        ExprKind::Ascription {
            value: three,
            unit: km,
        },
    );
    let product = binary(&mut arena, BinaryOp::Mul, two, asc);
    let sum = binary(&mut arena, BinaryOp::Add, one, product);

    assert_eq!(print_expr(&arena, sum), "1 + 2 * 3 km");
    assert_eq!(parenthesize_expr(&arena, sum), "1 + (2 * (3 km))");
}

#[test]
fn test_parenthesize_strips_redundant_parens() {
    // ((x))^2
    let mut arena = Arena::new();
    let x = leaf(&mut arena, ExprKind::Ident("x".to_string()));
    let inner = leaf(&mut arena, ExprKind::Paren(x));
    let outer = leaf(&mut arena, ExprKind::Paren(inner));
    let power = leaf(
        &mut arena,
        ExprKind::Power {
            base: outer,
            exponent: -1.0,
        },
    );

    assert_eq!(print_expr(&arena, power), "((x))^-1");
    assert_eq!(parenthesize_expr(&arena, power), "x^-1");
}

#[test]
fn test_print_statements() {
    let mut arena = Arena::new();
    let boolean = leaf(&mut arena, ExprKind::TypeLiteral(TypeLiteral::Boolean));
    let init = leaf(&mut arena, ExprKind::Bool(true));
    let var = arena.alloc_stmt(Stmt::new(
        StmtKind::Var {
            name: "flag".to_string(),
            annotation: Some(boolean),
            init: Some(init),
        },
        Location::DUMMY,
    ));
    let empty = arena.alloc_stmt(Stmt::new(StmtKind::Empty, Location::DUMMY));
    let block = arena.alloc_stmt(Stmt::new(
        StmtKind::Block(vec![var, empty]),
        Location::DUMMY,
    ));

    assert_eq!(print_stmt(&arena, var), "var flag: boolean = true;");
    assert_eq!(
        print_stmt(&arena, block),
        "{\n  var flag: boolean = true;\n  ;\n}"
    );
}

#[test]
fn test_dump_expr() {
    let mut arena = Arena::new();
    let x = leaf(&mut arena, ExprKind::Ident("x".to_string()));
    let m = leaf(&mut arena, ExprKind::Ident("m".to_string()));
    let conv = leaf(
        &mut arena,
        ExprKind::Conversion {
            value: x,
            target: m,
        },
    );

    assert_eq!(
        dump_expr(&arena, conv),
        "ConversionExpression [0:0 - 0:0]\n  Identifier x [0:0 - 0:0]\n  Identifier m [0:0 - 0:0]\n"
    );
}
