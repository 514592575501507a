use pretty_assertions::assert_eq;

use super::{render_type, render_value};
use crate::{DimConstructor, Dimensions, Value};

fn m() -> DimConstructor {
    DimConstructor::base("m")
}

fn km() -> DimConstructor {
    DimConstructor::derived(Dimensions::from_unit("km"), Dimensions::from_unit("m"), 1000.0)
}

fn velocity() -> DimConstructor {
    m().divide(&DimConstructor::base("s"))
}

#[test]
fn test_plain_number() {
    assert_eq!(render_value(&Value::number(42.0)).to_string(), "42");
    assert_eq!(render_value(&Value::number(1.5)).to_string(), "1.5");
    assert_eq!(render_type(&Value::number(-3.0)).to_string(), "-3");
}

#[test]
fn test_number_with_simple_unit() {
    assert_eq!(render_value(&Value::dim(3.0, km())).to_string(), "3 km");
}

#[test]
fn test_number_with_compound_unit() {
    assert_eq!(
        render_value(&Value::dim(2.0, velocity())).to_string(),
        "2 (m * s^-1)"
    );
    assert_eq!(
        render_value(&Value::dim(4.0, m().power(2.0))).to_string(),
        "4 (m^2)"
    );
}

#[test]
fn test_booleans() {
    assert_eq!(render_value(&Value::Boolean(true)).to_string(), "true");
    assert_eq!(render_value(&Value::BooleanType).to_string(), "boolean");
    assert_eq!(render_value(&Value::BooleanConstructor).to_string(), "boolean");
    assert_eq!(render_type(&Value::BooleanConstructor).to_string(), "type boolean");
}

#[test]
fn test_constructor_forms() {
    let value = Value::DimConstructor(km());
    assert_eq!(render_value(&value).to_string(), "km");
    assert_eq!(render_type(&value).to_string(), "unit km");
    assert_eq!(
        render_value(&Value::DimConstructor(DimConstructor::scalar())).to_string(),
        "scalar"
    );
}

#[test]
fn test_scaled_base_unit_shows_factor() {
    let scaled = Value::DimConstructor(m().with_factor(5.0));
    assert_eq!(render_value(&scaled).to_string(), "5 * m");
}

#[test]
fn test_abstract_number_renders_unit() {
    assert_eq!(render_type(&Value::DimType(km())).to_string(), "km");
    assert_eq!(render_value(&Value::DimType(DimConstructor::scalar())).to_string(), "scalar");
}

#[test]
fn test_hole_forms() {
    let hole = Value::hole("x", Value::DimType(m()));
    assert_eq!(render_value(&hole).to_string(), "x");
    assert_eq!(render_type(&hole).to_string(), "m");
}

#[test]
fn test_value_display_uses_value_form() {
    assert_eq!(Value::dim(1000.0, m()).to_string(), "1000 m");
}
