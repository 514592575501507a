//! Type inference tests.
//!
//! - `expr`: expression rules and error locations
//! - `stmt`: bindings, scoping and statement rules

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod expr;

use watt_value::{Context, DimConstructor, Dimensions, Value};

use crate::{TypeChecker, TypeError};

/// `m`, `s` and `km` in the type map.
fn units() -> Context {
    let m = DimConstructor::base("m");
    let km = DimConstructor::derived(Dimensions::from_unit("km"), m.dims.clone(), 1000.0);
    Context::new()
        .add_type("m", Value::DimConstructor(m))
        .add_type("s", Value::DimConstructor(DimConstructor::base("s")))
        .add_type("km", Value::DimConstructor(km))
}

/// Check every statement; the result of the last one.
fn check_in(context: Context, source: &str) -> Result<Option<Value>, TypeError> {
    let program = watt_parse::parse(source).expect("source should parse");
    let mut checker = TypeChecker::new(&program.arena, context);
    let mut last = None;
    for stmt in &program.stmts {
        last = checker.check_stmt(*stmt)?;
    }
    Ok(last)
}

fn check(source: &str) -> Result<Option<Value>, TypeError> {
    check_in(units(), source)
}

/// The rendered type of the last statement.
fn type_of(source: &str) -> String {
    let value = check(source)
        .unwrap_or_else(|err| panic!("`{source}` should check: {err}"))
        .expect("last statement should have a value");
    watt_value::render_type(&value).to_string()
}

fn error_of(source: &str) -> TypeError {
    match check(source) {
        Ok(value) => panic!("`{source}` should fail, got {value:?}"),
        Err(err) => err,
    }
}
