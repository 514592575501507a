//! The value domain.
//!
//! Seven variants split into three strata: concrete values (`Boolean`, `Dim`), abstract
//! types whose magnitude or truth is unknown (`BooleanType`, `DimType`), and
//! first-class constructors usable as expressions (`BooleanConstructor`,
//! `DimConstructor`). [`Value::Hole`] stands for a named value of known type and is only
//! ever bound in the type map.
//!
//! Every operation is partial. Combinations that make no sense return
//! [`UndefinedOperation`]; the semantic passes check the interesting preconditions first
//! so they can report a precise error, and fall back to a generic one otherwise.

use std::cmp::Ordering;
use std::fmt;

use watt_ir::BinaryOp;

use crate::render::render_value;
use crate::Dimensions;

/// A value-domain operation was applied to operands it is not defined for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("operation not defined")]
pub struct UndefinedOperation;

type OpResult = Result<Value, UndefinedOperation>;

/// A unit: display dimensions, the base dimensions they reduce to, and the factor that
/// converts one of this unit into base units.
#[derive(Clone, Debug, PartialEq)]
pub struct DimConstructor {
    pub dims: Dimensions,
    pub base_dims: Dimensions,
    pub factor: f64,
}

impl DimConstructor {
    /// A unit that is its own base, with factor 1.
    pub fn new(dims: Dimensions) -> Self {
        DimConstructor {
            base_dims: dims.clone(),
            dims,
            factor: 1.0,
        }
    }

    pub fn derived(dims: Dimensions, base_dims: Dimensions, factor: f64) -> Self {
        DimConstructor {
            dims,
            base_dims,
            factor,
        }
    }

    /// The `scalar` unit.
    pub fn scalar() -> Self {
        DimConstructor::new(Dimensions::scalar())
    }

    /// A fresh base unit named `label`.
    pub fn base(label: &str) -> Self {
        DimConstructor::new(Dimensions::from_unit(label))
    }

    pub fn is_scalar(&self) -> bool {
        self.dims.is_scalar()
    }

    #[must_use]
    pub fn negate(&self) -> Self {
        self.with_factor(-self.factor)
    }

    #[must_use]
    pub fn power(&self, n: f64) -> Self {
        DimConstructor {
            dims: self.dims.power(n),
            base_dims: self.base_dims.power(n),
            factor: self.factor.powf(n),
        }
    }

    #[must_use]
    pub fn times(&self, other: &DimConstructor) -> Self {
        DimConstructor {
            dims: self.dims.times(&other.dims),
            base_dims: self.base_dims.times(&other.base_dims),
            factor: self.factor * other.factor,
        }
    }

    #[must_use]
    pub fn divide(&self, other: &DimConstructor) -> Self {
        DimConstructor {
            dims: self.dims.divide(&other.dims),
            base_dims: self.base_dims.divide(&other.base_dims),
            factor: self.factor / other.factor,
        }
    }

    #[must_use]
    pub fn with_factor(&self, factor: f64) -> Self {
        DimConstructor {
            dims: self.dims.clone(),
            base_dims: self.base_dims.clone(),
            factor,
        }
    }

    /// `n / unit`: inverted dimensions, factor `n / factor`.
    #[must_use]
    pub fn reciprocal_scaled(&self, n: f64) -> Self {
        DimConstructor {
            dims: self.dims.power(-1.0),
            base_dims: self.base_dims.power(-1.0),
            factor: n / self.factor,
        }
    }
}

/// A magnitude tagged with its unit.
#[derive(Clone, Debug, PartialEq)]
pub struct DimValue {
    pub value: f64,
    pub cons: DimConstructor,
}

impl DimValue {
    pub fn new(value: f64, cons: DimConstructor) -> Self {
        DimValue { value, cons }
    }

    /// A plain number.
    pub fn scalar(value: f64) -> Self {
        DimValue::new(value, DimConstructor::scalar())
    }

    pub fn is_scalar(&self) -> bool {
        self.cons.is_scalar()
    }

    /// Whether both operands carry the same display dimensions.
    pub fn same_dims(&self, other: &DimValue) -> bool {
        self.cons.dims == other.cons.dims
    }

    #[must_use]
    pub fn negate(&self) -> Self {
        DimValue::new(-self.value, self.cons.clone())
    }

    #[must_use]
    pub fn power(&self, n: f64) -> Self {
        DimValue::new(self.value.powf(n), self.cons.power(n))
    }

    pub fn plus(&self, other: &DimValue) -> Result<DimValue, UndefinedOperation> {
        self.require_same_dims(other)?;
        Ok(DimValue::new(self.value + other.value, self.cons.clone()))
    }

    pub fn minus(&self, other: &DimValue) -> Result<DimValue, UndefinedOperation> {
        self.require_same_dims(other)?;
        Ok(DimValue::new(self.value - other.value, self.cons.clone()))
    }

    pub fn modulo(&self, other: &DimValue) -> Result<DimValue, UndefinedOperation> {
        self.require_same_dims(other)?;
        Ok(DimValue::new(self.value % other.value, self.cons.clone()))
    }

    #[must_use]
    pub fn times(&self, other: &DimValue) -> Self {
        DimValue::new(self.value * other.value, self.cons.times(&other.cons))
    }

    #[must_use]
    pub fn divide(&self, other: &DimValue) -> Self {
        DimValue::new(self.value / other.value, self.cons.divide(&other.cons))
    }

    pub fn equals(&self, other: &DimValue) -> Result<bool, UndefinedOperation> {
        self.require_same_dims(other)?;
        Ok(self.value == other.value)
    }

    /// `None` when either magnitude is NaN.
    pub fn compare(&self, other: &DimValue) -> Result<Option<Ordering>, UndefinedOperation> {
        self.require_same_dims(other)?;
        Ok(self.value.partial_cmp(&other.value))
    }

    /// Attach a unit to a plain number, keeping the magnitude.
    pub fn ascribe(&self, cons: &DimConstructor) -> Result<DimValue, UndefinedOperation> {
        if !self.is_scalar() {
            return Err(UndefinedOperation);
        }
        Ok(DimValue::new(self.value, cons.clone()))
    }

    /// Express the same quantity in another unit.
    ///
    /// A plain number has no base dimensions to agree with, so converting it into a
    /// unit of a different base acts as ascription.
    pub fn convert(&self, to: &DimConstructor) -> Result<DimValue, UndefinedOperation> {
        if self.cons.base_dims == to.base_dims {
            Ok(DimValue::new(
                (self.value * self.cons.factor) / to.factor,
                to.clone(),
            ))
        } else if self.is_scalar() {
            self.ascribe(to)
        } else {
            Err(UndefinedOperation)
        }
    }

    fn require_same_dims(&self, other: &DimValue) -> Result<(), UndefinedOperation> {
        if self.same_dims(other) {
            Ok(())
        } else {
            Err(UndefinedOperation)
        }
    }
}

/// A name bound only in the type map: "some value of this type".
#[derive(Clone, Debug, PartialEq)]
pub struct Hole {
    pub name: String,
    pub ty: Box<Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// `true` / `false`
    Boolean(bool),
    /// A boolean whose truth is not statically known.
    BooleanType,
    /// The `boolean` type-former.
    BooleanConstructor,
    /// A number with a unit.
    Dim(DimValue),
    /// A quantity whose magnitude is not statically known.
    DimType(DimConstructor),
    /// A unit, usable as an expression.
    DimConstructor(DimConstructor),
    Hole(Hole),
}

impl Value {
    /// A plain number.
    pub fn number(value: f64) -> Value {
        Value::Dim(DimValue::scalar(value))
    }

    pub fn dim(value: f64, cons: DimConstructor) -> Value {
        Value::Dim(DimValue::new(value, cons))
    }

    pub fn hole(name: impl Into<String>, ty: Value) -> Value {
        Value::Hole(Hole {
            name: name.into(),
            ty: Box::new(ty),
        })
    }

    /// Variant name, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "Boolean",
            Value::BooleanType => "BooleanType",
            Value::BooleanConstructor => "BooleanConstructor",
            Value::Dim(_) => "Dim",
            Value::DimType(_) => "DimType",
            Value::DimConstructor(_) => "DimConstructor",
            Value::Hole(_) => "Hole",
        }
    }

    /// Boolean in either its concrete or abstract form.
    pub fn is_boolean(&self) -> bool {
        match self {
            Value::Boolean(_) | Value::BooleanType => true,
            Value::Hole(hole) => hole.ty.is_boolean(),
            _ => false,
        }
    }

    /// Number in either its concrete or abstract form.
    pub fn is_number(&self) -> bool {
        match self {
            Value::Dim(_) | Value::DimType(_) => true,
            Value::Hole(hole) => hole.ty.is_number(),
            _ => false,
        }
    }

    /// The unit a number carries, concrete or abstract.
    pub fn number_cons(&self) -> Option<&DimConstructor> {
        match self {
            Value::Dim(v) => Some(&v.cons),
            Value::DimType(cons) => Some(cons),
            Value::Hole(hole) => hole.ty.number_cons(),
            _ => None,
        }
    }

    pub fn as_constructor(&self) -> Option<&DimConstructor> {
        match self {
            Value::DimConstructor(cons) => Some(cons),
            _ => None,
        }
    }

    /// A `Hole` stands for its type everywhere except when printed by name.
    #[must_use]
    pub fn unwrap_hole(self) -> Value {
        match self {
            Value::Hole(hole) => hole.ty.unwrap_hole(),
            other => other,
        }
    }

    /// Whether a value of this type may be stored where `other` is expected.
    pub fn is_subtype_of(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Hole(hole), _) => hole.ty.is_subtype_of(other),
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Boolean(_) | Value::BooleanType, Value::BooleanType)
            | (Value::BooleanConstructor, Value::BooleanConstructor) => true,
            (Value::Dim(a), Value::Dim(b)) => a == b,
            (Value::Dim(DimValue { cons: a, .. }) | Value::DimType(a), Value::DimType(b))
            | (Value::DimConstructor(a), Value::DimConstructor(b)) => a == b,
            _ => false,
        }
    }

    /// Erase the concrete magnitude or truth value.
    #[must_use]
    pub fn abstract_type(&self) -> Value {
        match self {
            Value::Boolean(_) => Value::BooleanType,
            Value::Dim(v) => Value::DimType(v.cons.clone()),
            Value::Hole(hole) => hole.ty.abstract_type(),
            other => other.clone(),
        }
    }

    /// The type of the instances a constructor builds, `None` for non-constructors.
    pub fn instance_type(&self) -> Option<Value> {
        match self {
            Value::BooleanConstructor => Some(Value::BooleanType),
            Value::DimConstructor(cons) => Some(Value::DimType(cons.clone())),
            Value::Hole(hole) => hole.ty.instance_type(),
            _ => None,
        }
    }

    pub fn not(&self) -> OpResult {
        match self {
            Value::Boolean(b) => Ok(Value::Boolean(!b)),
            Value::BooleanType => Ok(Value::BooleanType),
            _ => Err(UndefinedOperation),
        }
    }

    pub fn negate(&self) -> OpResult {
        match self {
            Value::Dim(v) => Ok(Value::Dim(v.negate())),
            Value::DimType(cons) => Ok(Value::DimType(cons.clone())),
            Value::DimConstructor(cons) => Ok(Value::DimConstructor(cons.negate())),
            _ => Err(UndefinedOperation),
        }
    }

    pub fn power(&self, n: f64) -> OpResult {
        match self {
            Value::Dim(v) => Ok(Value::Dim(v.power(n))),
            Value::DimType(cons) => Ok(Value::DimType(cons.power(n))),
            Value::DimConstructor(cons) => Ok(Value::DimConstructor(cons.power(n))),
            _ => Err(UndefinedOperation),
        }
    }

    pub fn times(&self, other: &Value) -> OpResult {
        match (self, other) {
            (Value::Dim(a), Value::Dim(b)) => Ok(Value::Dim(a.times(b))),
            (Value::Dim(n), Value::DimConstructor(cons)) if n.is_scalar() => {
                Ok(Value::DimConstructor(cons.with_factor(n.value * cons.factor)))
            }
            (Value::DimConstructor(cons), Value::Dim(n)) if n.is_scalar() => {
                Ok(Value::DimConstructor(cons.with_factor(cons.factor * n.value)))
            }
            (Value::DimConstructor(a), Value::DimConstructor(b)) => {
                Ok(Value::DimConstructor(a.times(b)))
            }
            _ => match (abstract_number(self), abstract_number(other)) {
                (Some(a), Some(b)) => Ok(Value::DimType(a.times(b))),
                _ => Err(UndefinedOperation),
            },
        }
    }

    pub fn divide(&self, other: &Value) -> OpResult {
        match (self, other) {
            (Value::Dim(a), Value::Dim(b)) => Ok(Value::Dim(a.divide(b))),
            (Value::Dim(n), Value::DimConstructor(cons)) if n.is_scalar() => {
                Ok(Value::DimConstructor(cons.reciprocal_scaled(n.value)))
            }
            (Value::DimConstructor(cons), Value::Dim(n)) if n.is_scalar() => {
                Ok(Value::DimConstructor(cons.with_factor(cons.factor / n.value)))
            }
            (Value::DimConstructor(a), Value::DimConstructor(b)) => {
                Ok(Value::DimConstructor(a.divide(b)))
            }
            _ => match (abstract_number(self), abstract_number(other)) {
                (Some(a), Some(b)) => Ok(Value::DimType(a.divide(b))),
                _ => Err(UndefinedOperation),
            },
        }
    }

    pub fn plus(&self, other: &Value) -> OpResult {
        self.additive(other, DimValue::plus)
    }

    pub fn minus(&self, other: &Value) -> OpResult {
        self.additive(other, DimValue::minus)
    }

    pub fn modulo(&self, other: &Value) -> OpResult {
        self.additive(other, DimValue::modulo)
    }

    fn additive(
        &self,
        other: &Value,
        op: fn(&DimValue, &DimValue) -> Result<DimValue, UndefinedOperation>,
    ) -> OpResult {
        match (self, other) {
            (Value::Dim(a), Value::Dim(b)) => op(a, b).map(Value::Dim),
            _ => match (abstract_number(self), abstract_number(other)) {
                (Some(a), Some(b)) if a.dims == b.dims => Ok(Value::DimType(a.clone())),
                _ => Err(UndefinedOperation),
            },
        }
    }

    /// `==`, `!=` and the orderings. Booleans support only equality.
    pub fn compare(&self, op: BinaryOp, other: &Value) -> OpResult {
        match (self, other) {
            (Value::Dim(a), Value::Dim(b)) => {
                let holds = match op {
                    BinaryOp::Eq => a.equals(b)?,
                    BinaryOp::NotEq => !a.equals(b)?,
                    BinaryOp::Lt => a.compare(b)? == Some(Ordering::Less),
                    BinaryOp::Gt => a.compare(b)? == Some(Ordering::Greater),
                    BinaryOp::LtEq => matches!(
                        a.compare(b)?,
                        Some(Ordering::Less | Ordering::Equal)
                    ),
                    BinaryOp::GtEq => matches!(
                        a.compare(b)?,
                        Some(Ordering::Greater | Ordering::Equal)
                    ),
                    _ => return Err(UndefinedOperation),
                };
                Ok(Value::Boolean(holds))
            }
            (Value::Boolean(a), Value::Boolean(b)) => match op {
                BinaryOp::Eq => Ok(Value::Boolean(a == b)),
                BinaryOp::NotEq => Ok(Value::Boolean(a != b)),
                _ => Err(UndefinedOperation),
            },
            (Value::Boolean(_) | Value::BooleanType, Value::Boolean(_) | Value::BooleanType) => {
                match op {
                    BinaryOp::Eq | BinaryOp::NotEq => Ok(Value::BooleanType),
                    _ => Err(UndefinedOperation),
                }
            }
            _ => match (abstract_number(self), abstract_number(other)) {
                (Some(a), Some(b)) if a.dims == b.dims && op.is_comparison() => {
                    Ok(Value::BooleanType)
                }
                _ => Err(UndefinedOperation),
            },
        }
    }

    /// Arithmetic and comparison operators.
    pub fn binary(&self, op: BinaryOp, other: &Value) -> OpResult {
        match op {
            BinaryOp::Mul => self.times(other),
            BinaryOp::Div => self.divide(other),
            BinaryOp::Mod => self.modulo(other),
            BinaryOp::Add => self.plus(other),
            BinaryOp::Sub => self.minus(other),
            BinaryOp::Eq
            | BinaryOp::NotEq
            | BinaryOp::LtEq
            | BinaryOp::GtEq
            | BinaryOp::Lt
            | BinaryOp::Gt => self.compare(op, other),
        }
    }

    /// `&&` without short-circuiting. Abstract operands give the abstract boolean.
    pub fn and(&self, other: &Value) -> OpResult {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(*a && *b)),
            _ if self.is_boolean() && other.is_boolean() => Ok(Value::BooleanType),
            _ => Err(UndefinedOperation),
        }
    }

    pub fn or(&self, other: &Value) -> OpResult {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(*a || *b)),
            _ if self.is_boolean() && other.is_boolean() => Ok(Value::BooleanType),
            _ => Err(UndefinedOperation),
        }
    }

    /// Juxtaposition: `3 km`.
    pub fn ascribe(&self, unit: &Value) -> OpResult {
        match (self, unit) {
            (Value::Dim(n), Value::DimConstructor(cons)) => n.ascribe(cons).map(Value::Dim),
            (Value::DimType(ty), Value::DimConstructor(cons)) if ty.is_scalar() => {
                Ok(Value::DimType(cons.clone()))
            }
            _ => Err(UndefinedOperation),
        }
    }

    /// `value as unit`
    pub fn convert(&self, unit: &Value) -> OpResult {
        match (self, unit) {
            (Value::Dim(v), Value::DimConstructor(cons)) => v.convert(cons).map(Value::Dim),
            (Value::DimType(ty), Value::DimConstructor(cons))
                if ty.base_dims == cons.base_dims || ty.is_scalar() =>
            {
                Ok(Value::DimType(cons.clone()))
            }
            _ => Err(UndefinedOperation),
        }
    }
}

/// The unit of a number once its magnitude is forgotten.
fn abstract_number(value: &Value) -> Option<&DimConstructor> {
    match value {
        Value::Dim(v) => Some(&v.cons),
        Value::DimType(cons) => Some(cons),
        _ => None,
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<DimValue> for Value {
    fn from(v: DimValue) -> Self {
        Value::Dim(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_value(self))
    }
}
