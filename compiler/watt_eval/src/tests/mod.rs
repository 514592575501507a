//! Evaluator tests.
//!
//! - `expr`: operators, conversions and runtime error locations
//! - `stmt`: bindings, scoping, loops and reassignment

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod expr;

use watt_value::{Context, DimConstructor, Dimensions, Value};

use crate::{Evaluator, RuntimeError};

/// `m`, `s`, `km` and `h` in the value map.
fn units() -> Context {
    let m = DimConstructor::base("m");
    let s = DimConstructor::base("s");
    let km = DimConstructor::derived(Dimensions::from_unit("km"), m.dims.clone(), 1000.0);
    let h = DimConstructor::derived(Dimensions::from_unit("h"), s.dims.clone(), 3600.0);
    Context::new()
        .add_value("m", Value::DimConstructor(m))
        .add_value("s", Value::DimConstructor(s))
        .add_value("km", Value::DimConstructor(km))
        .add_value("h", Value::DimConstructor(h))
}

/// Run every statement without a type pass; the value of the last one.
fn run(source: &str) -> Result<Option<Value>, RuntimeError> {
    let program = watt_parse::parse(source).expect("source should parse");
    let mut evaluator = Evaluator::new(&program.arena, units());
    let mut last = None;
    for stmt in &program.stmts {
        last = evaluator.exec_stmt(*stmt)?;
    }
    Ok(last)
}

/// The rendered value of the last statement.
fn value_of(source: &str) -> String {
    run(source)
        .unwrap_or_else(|err| panic!("`{source}` should run: {err}"))
        .expect("last statement should have a value")
        .to_string()
}

fn error_of(source: &str) -> RuntimeError {
    match run(source) {
        Ok(value) => panic!("`{source}` should fail, got {value:?}"),
        Err(err) => err,
    }
}
