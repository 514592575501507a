#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use super::{AssignError, Context};
use crate::Value;

#[test]
fn test_empty_context() {
    let ctx = Context::new();
    assert_eq!(ctx.get_value("x"), None);
    assert_eq!(ctx.get_type("x"), None);
}

#[test]
fn test_maps_are_independent() {
    let ctx = Context::new().add_type("x", Value::BooleanType);
    assert_eq!(ctx.get_type("x"), Some(Value::BooleanType));
    assert_eq!(ctx.get_value("x"), None);
}

#[test]
fn test_shadowing_leaves_snapshot_untouched() {
    let outer = Context::new().add_value("x", Value::number(1.0));
    let inner = outer.add_value("x", Value::number(2.0));
    assert_eq!(inner.get_value("x"), Some(Value::number(2.0)));
    assert_eq!(outer.get_value("x"), Some(Value::number(1.0)));
}

#[test]
fn test_set_value_visible_through_snapshot() {
    let outer = Context::new().add_value("x", Value::number(1.0));
    let inner = outer.add_value("y", Value::Boolean(true));
    inner.set_value("x", Value::number(2.0)).unwrap();
    assert_eq!(outer.get_value("x"), Some(Value::number(2.0)));
}

#[test]
fn test_set_value_hits_innermost_binding() {
    let outer = Context::new().add_value("x", Value::number(1.0));
    let inner = outer.add_value("x", Value::number(5.0));
    inner.set_value("x", Value::number(6.0)).unwrap();
    assert_eq!(inner.get_value("x"), Some(Value::number(6.0)));
    assert_eq!(outer.get_value("x"), Some(Value::number(1.0)));
}

#[test]
fn test_set_value_unbound() {
    let ctx = Context::new().add_type("x", Value::BooleanType);
    assert_eq!(
        ctx.set_value("x", Value::Boolean(true)),
        Err(AssignError::Undefined("x".to_string()))
    );
}

#[test]
fn test_delete_uncovers_previous_binding() {
    let ctx = Context::new()
        .add_value("x", Value::number(1.0))
        .add_value("y", Value::number(9.0))
        .add_value("x", Value::number(2.0));
    let deleted = ctx.delete_value("x");
    assert_eq!(deleted.get_value("x"), Some(Value::number(1.0)));
    assert_eq!(deleted.get_value("y"), Some(Value::number(9.0)));
    assert_eq!(ctx.get_value("x"), Some(Value::number(2.0)));
}

#[test]
fn test_delete_missing_is_noop() {
    let ctx = Context::new().add_type("a", Value::BooleanType);
    let same = ctx.delete_type("b");
    assert_eq!(same.get_type("a"), Some(Value::BooleanType));
}

#[test]
fn test_delete_keeps_cells_shared() {
    let ctx = Context::new()
        .add_value("x", Value::number(1.0))
        .add_value("tmp", Value::number(0.0));
    let trimmed = ctx.delete_value("tmp");
    trimmed.set_value("x", Value::number(3.0)).unwrap();
    assert_eq!(ctx.get_value("x"), Some(Value::number(3.0)));
}

#[test]
fn test_fork_isolates_reassignment() {
    let ctx = Context::new().add_value("x", Value::number(1.0));
    let fork = ctx.fork();
    fork.set_value("x", Value::number(2.0)).unwrap();
    assert_eq!(ctx.get_value("x"), Some(Value::number(1.0)));
    assert_eq!(fork.get_value("x"), Some(Value::number(2.0)));
}

#[test]
fn test_restore_releases_scope_cells() {
    let mut ctx = Context::new().add_value("x", Value::number(0.0));
    for i in 0..10_000 {
        let mark = ctx.enter();
        ctx = ctx.add_value("step", Value::number(1.0));
        ctx.set_value("x", Value::number(f64::from(i))).unwrap();
        ctx = Context::restore(mark);
    }
    assert_eq!(ctx.cells_in_use(), 1);
    assert_eq!(ctx.get_value("x"), Some(Value::number(9999.0)));
    assert_eq!(ctx.get_value("step"), None);
}
