//! Display trees for values.
//!
//! A value prints in two forms. The value form shows what it currently is (`1000 m`,
//! `true`); the type form shows its static shape (`unit km`, `boolean`). Both produce a
//! [`DisplayExpr`], which renders to text through `Display`.

use std::fmt;

use watt_ir::format_number;

use crate::{DimConstructor, Value};

#[derive(Clone, Debug, PartialEq)]
pub enum DisplayExpr {
    Number(f64),
    Bool(bool),
    /// `boolean`, `scalar`, `unit`, `type`
    Keyword(&'static str),
    Ident(String),
    Power(Box<DisplayExpr>, f64),
    /// Factors joined by `*`.
    Product(Vec<DisplayExpr>),
    /// Juxtaposition.
    Ascription(Box<DisplayExpr>, Box<DisplayExpr>),
    Paren(Box<DisplayExpr>),
}

impl DisplayExpr {
    fn ascription(left: DisplayExpr, right: DisplayExpr) -> Self {
        DisplayExpr::Ascription(Box::new(left), Box::new(right))
    }

    fn is_atomic(&self) -> bool {
        matches!(
            self,
            DisplayExpr::Number(_)
                | DisplayExpr::Bool(_)
                | DisplayExpr::Keyword(_)
                | DisplayExpr::Ident(_)
                | DisplayExpr::Paren(_)
        )
    }
}

impl fmt::Display for DisplayExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayExpr::Number(n) => f.write_str(&format_number(*n)),
            DisplayExpr::Bool(b) => write!(f, "{b}"),
            DisplayExpr::Keyword(word) => f.write_str(word),
            DisplayExpr::Ident(name) => f.write_str(name),
            DisplayExpr::Power(base, exponent) => {
                write!(f, "{base}^{}", format_number(*exponent))
            }
            DisplayExpr::Product(factors) => {
                for (i, factor) in factors.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" * ")?;
                    }
                    write!(f, "{factor}")?;
                }
                Ok(())
            }
            DisplayExpr::Ascription(left, right) => write!(f, "{left} {right}"),
            DisplayExpr::Paren(inner) => write!(f, "({inner})"),
        }
    }
}

/// The value form.
pub fn render_value(value: &Value) -> DisplayExpr {
    match value {
        Value::Boolean(b) => DisplayExpr::Bool(*b),
        Value::Dim(v) => {
            if v.is_scalar() && v.cons.factor == 1.0 {
                return DisplayExpr::Number(v.value);
            }
            let unit = render_unit(&v.cons);
            let unit = if unit.is_atomic() {
                unit
            } else {
                DisplayExpr::Paren(Box::new(unit))
            };
            DisplayExpr::ascription(DisplayExpr::Number(v.value), unit)
        }
        Value::BooleanConstructor => DisplayExpr::Keyword("boolean"),
        Value::DimConstructor(cons) => render_unit(cons),
        Value::Hole(hole) => DisplayExpr::Ident(hole.name.clone()),
        // Abstract types have no concrete shape.
        Value::BooleanType | Value::DimType(_) => render_type(value),
    }
}

/// The type form.
pub fn render_type(value: &Value) -> DisplayExpr {
    match value {
        Value::Boolean(_) | Value::Dim(_) => render_value(value),
        Value::BooleanType => DisplayExpr::Keyword("boolean"),
        Value::BooleanConstructor => {
            DisplayExpr::ascription(DisplayExpr::Keyword("type"), DisplayExpr::Keyword("boolean"))
        }
        Value::DimType(cons) => render_unit(cons),
        Value::DimConstructor(cons) => {
            DisplayExpr::ascription(DisplayExpr::Keyword("unit"), render_unit(cons))
        }
        Value::Hole(hole) => render_type(&hole.ty),
    }
}

/// `km`, `m * s^-1`, `scalar`; prefixed with the factor for scaled base units.
fn render_unit(cons: &DimConstructor) -> DisplayExpr {
    let mut factors: Vec<DisplayExpr> = cons
        .dims
        .iter()
        .map(|(label, exponent)| {
            let ident = DisplayExpr::Ident(label.to_string());
            if exponent == 1.0 {
                ident
            } else {
                DisplayExpr::Power(Box::new(ident), exponent)
            }
        })
        .collect();
    if factors.is_empty() {
        factors.push(DisplayExpr::Keyword("scalar"));
    }
    if cons.dims == cons.base_dims && cons.factor != 1.0 {
        factors.insert(0, DisplayExpr::Number(cons.factor));
    }

    if factors.len() == 1 {
        factors.remove(0)
    } else {
        DisplayExpr::Product(factors)
    }
}

#[cfg(test)]
mod tests;
