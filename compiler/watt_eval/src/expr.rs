//! Expression evaluation.

use watt_ir::{BinaryOp, ExprId, ExprKind, Location, LogicalOp, PrefixOp, TypeLiteral};
use watt_value::{DimConstructor, Value};

use crate::error::Failure;
use crate::{Evaluator, RuntimeError};

impl Evaluator<'_> {
    /// Evaluate an expression to a concrete value.
    pub fn eval_expr(&mut self, id: ExprId) -> Result<Value, RuntimeError> {
        let location = self.arena.expr(id).location;
        self.eval_inner(id).map_err(|failure| failure.at(location))
    }

    fn eval_inner(&mut self, id: ExprId) -> Result<Value, Failure> {
        let arena = self.arena;
        let expr = arena.expr(id);
        let location = expr.location;

        let value = match &expr.kind {
            ExprKind::Number(n) => Value::number(*n),
            ExprKind::Bool(b) => Value::Boolean(*b),
            ExprKind::TypeLiteral(TypeLiteral::Boolean) => Value::BooleanConstructor,
            ExprKind::TypeLiteral(TypeLiteral::Scalar) => {
                Value::DimConstructor(DimConstructor::scalar())
            }
            ExprKind::Ident(name) => self
                .context
                .get_value(name)
                .ok_or_else(|| RuntimeError::name_not_defined(location, name))?,
            ExprKind::Paren(inner) => self.eval_expr(*inner)?,

            ExprKind::Prefix { op, operand } => {
                let at = arena.expr(*operand).location;
                let arg = self.eval_expr(*operand)?;
                match op {
                    PrefixOp::Not => match arg {
                        Value::Boolean(b) => Value::Boolean(!b),
                        other => return Err(RuntimeError::not_a_boolean(at, &other).into()),
                    },
                    PrefixOp::Plus | PrefixOp::Neg if !is_number_or_unit(&arg) => {
                        return Err(RuntimeError::not_a_number_or_unit(at, &arg).into());
                    }
                    PrefixOp::Plus => arg,
                    PrefixOp::Neg => arg.negate()?,
                }
            }

            ExprKind::Power { base, exponent } => {
                let at = arena.expr(*base).location;
                let arg = self.eval_expr(*base)?;
                if !is_number_or_unit(&arg) {
                    return Err(RuntimeError::not_a_number_or_unit(at, &arg).into());
                }
                arg.power(*exponent)?
            }

            ExprKind::Binary { op, left, right } => {
                let lhs = self.eval_expr(*left)?;
                let rhs = self.eval_expr(*right)?;
                check_binary(
                    *op,
                    &lhs,
                    &rhs,
                    location,
                    arena.expr(*left).location,
                    arena.expr(*right).location,
                )?;
                lhs.binary(*op, &rhs).map_err(|_| {
                    RuntimeError::operation_not_defined(location, *op, &lhs, &rhs)
                })?
            }

            ExprKind::Logical { op, left, right } => {
                let lhs = self.eval_expr(*left)?;
                let Value::Boolean(known) = lhs else {
                    let at = arena.expr(*left).location;
                    return Err(RuntimeError::not_a_boolean(at, &lhs).into());
                };
                let decided = match op {
                    LogicalOp::And => !known,
                    LogicalOp::Or => known,
                };
                if decided {
                    tracing::trace!(op = op.as_symbol(), "short-circuit");
                    lhs
                } else {
                    let rhs = self.eval_expr(*right)?;
                    if !matches!(rhs, Value::Boolean(_)) {
                        let at = arena.expr(*right).location;
                        return Err(RuntimeError::not_a_boolean(at, &rhs).into());
                    }
                    rhs
                }
            }

            ExprKind::Ascription { value, unit } => {
                let lhs = self.eval_expr(*value)?;
                let rhs = self.eval_expr(*unit)?;
                if !matches!(&lhs, Value::Dim(v) if v.is_scalar()) {
                    let at = arena.expr(*value).location;
                    return Err(RuntimeError::not_a_scalar(at, &lhs).into());
                }
                if rhs.as_constructor().is_none() {
                    let at = arena.expr(*unit).location;
                    return Err(RuntimeError::not_a_unit(at, &rhs).into());
                }
                lhs.ascribe(&rhs)?
            }

            ExprKind::Conversion { value, target } => {
                let lhs = self.eval_expr(*value)?;
                let rhs = self.eval_expr(*target)?;
                let Value::Dim(source) = &lhs else {
                    let at = arena.expr(*value).location;
                    return Err(RuntimeError::not_a_number(at, &lhs).into());
                };
                let Some(unit) = rhs.as_constructor() else {
                    let at = arena.expr(*target).location;
                    return Err(RuntimeError::not_a_unit(at, &rhs).into());
                };
                if source.cons.base_dims != unit.base_dims && !source.is_scalar() {
                    return Err(
                        RuntimeError::base_dimensions_mismatch(location, &lhs, &rhs).into()
                    );
                }
                lhs.convert(&rhs)?
            }
        };

        Ok(value)
    }
}

fn is_number_or_unit(value: &Value) -> bool {
    matches!(value, Value::Dim(_) | Value::DimConstructor(_))
}

fn check_binary(
    op: BinaryOp,
    lhs: &Value,
    rhs: &Value,
    location: Location,
    left_location: Location,
    right_location: Location,
) -> Result<(), RuntimeError> {
    let scaling = matches!(op, BinaryOp::Mul | BinaryOp::Div);
    match (lhs, rhs) {
        (Value::Dim(a), Value::Dim(b)) if !scaling && !a.same_dims(b) => {
            Err(RuntimeError::type_mismatch(location, lhs, rhs))
        }
        (Value::Dim(a), Value::DimConstructor(_)) if scaling && !a.is_scalar() => {
            Err(RuntimeError::not_a_scalar(left_location, lhs))
        }
        (Value::DimConstructor(_), Value::Dim(b)) if scaling && !b.is_scalar() => {
            Err(RuntimeError::not_a_scalar(right_location, rhs))
        }
        _ => Ok(()),
    }
}
