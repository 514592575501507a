//! Expression inference.

use watt_ir::{BinaryOp, ExprId, ExprKind, LogicalOp, PrefixOp, TypeLiteral};
use watt_value::{DimConstructor, Value};

use crate::error::Failure;
use crate::{TypeChecker, TypeError};

impl TypeChecker<'_> {
    /// Infer the type of an expression.
    ///
    /// Errors raised by child nodes come back unchanged; any other failure in this
    /// frame is reported at this node's location.
    pub fn infer_expr(&mut self, id: ExprId) -> Result<Value, TypeError> {
        let location = self.arena.expr(id).location;
        self.lift(id).map_err(|failure| failure.at(location))
    }

    fn lift(&mut self, id: ExprId) -> Result<Value, Failure> {
        let arena = self.arena;
        let expr = arena.expr(id);
        let location = expr.location;

        let ty = match &expr.kind {
            ExprKind::Number(n) => Value::number(*n),
            ExprKind::Bool(b) => Value::Boolean(*b),
            ExprKind::TypeLiteral(TypeLiteral::Boolean) => Value::BooleanConstructor,
            ExprKind::TypeLiteral(TypeLiteral::Scalar) => {
                Value::DimConstructor(DimConstructor::scalar())
            }
            ExprKind::Ident(name) => self
                .context
                .get_type(name)
                .ok_or_else(|| TypeError::name_not_defined(location, name))?
                .unwrap_hole(),
            ExprKind::Paren(inner) => self.infer_expr(*inner)?,

            ExprKind::Prefix { op, operand } => {
                let operand_location = arena.expr(*operand).location;
                let arg = self.infer_expr(*operand)?;
                match op {
                    PrefixOp::Not => {
                        if !arg.is_boolean() {
                            return Err(TypeError::not_a_boolean(operand_location, &arg).into());
                        }
                        arg.not()?
                    }
                    PrefixOp::Plus | PrefixOp::Neg if !is_number_or_unit(&arg) => {
                        return Err(TypeError::not_a_number_or_unit(operand_location, &arg).into());
                    }
                    PrefixOp::Plus => arg,
                    PrefixOp::Neg => arg.negate()?,
                }
            }

            ExprKind::Power { base, exponent } => {
                let base_location = arena.expr(*base).location;
                let arg = self.infer_expr(*base)?;
                if !is_number_or_unit(&arg) {
                    return Err(TypeError::not_a_number_or_unit(base_location, &arg).into());
                }
                arg.power(*exponent)?
            }

            ExprKind::Binary { op, left, right } => {
                let left_location = arena.expr(*left).location;
                let right_location = arena.expr(*right).location;
                let lhs = self.infer_expr(*left)?;
                let rhs = self.infer_expr(*right)?;
                check_binary(*op, &lhs, &rhs, location, left_location, right_location)?;
                lhs.binary(*op, &rhs)
                    .map_err(|_| TypeError::operation_not_defined(location, *op, &lhs, &rhs))?
            }

            ExprKind::Logical { op, left, right } => {
                let lhs = self.infer_expr(*left)?;
                let rhs = self.infer_expr(*right)?;
                if !lhs.is_boolean() {
                    let at = arena.expr(*left).location;
                    return Err(TypeError::not_a_boolean(at, &lhs).into());
                }
                if !rhs.is_boolean() {
                    let at = arena.expr(*right).location;
                    return Err(TypeError::not_a_boolean(at, &rhs).into());
                }
                match op {
                    LogicalOp::And => lhs.and(&rhs)?,
                    LogicalOp::Or => lhs.or(&rhs)?,
                }
            }

            ExprKind::Ascription { value, unit } => {
                let lhs = self.infer_expr(*value)?;
                let rhs = self.infer_expr(*unit)?;
                if !lhs.number_cons().is_some_and(DimConstructor::is_scalar) {
                    let at = arena.expr(*value).location;
                    return Err(TypeError::not_a_scalar(at, &lhs).into());
                }
                if rhs.as_constructor().is_none() {
                    let at = arena.expr(*unit).location;
                    return Err(TypeError::not_a_unit(at, &rhs).into());
                }
                lhs.ascribe(&rhs)?
            }

            ExprKind::Conversion { value, target } => {
                let lhs = self.infer_expr(*value)?;
                let rhs = self.infer_expr(*target)?;
                let Some(source) = lhs.number_cons() else {
                    let at = arena.expr(*value).location;
                    return Err(TypeError::not_a_number(at, &lhs).into());
                };
                let Some(unit) = rhs.as_constructor() else {
                    let at = arena.expr(*target).location;
                    return Err(TypeError::not_a_unit(at, &rhs).into());
                };
                if source.base_dims != unit.base_dims && !source.is_scalar() {
                    return Err(TypeError::base_dimensions_mismatch(location, &lhs, &rhs).into());
                }
                lhs.convert(&rhs)?
            }
        };

        tracing::trace!(node = expr.kind.name(), ty = ty.kind(), "inferred");
        Ok(ty)
    }
}

fn is_number_or_unit(value: &Value) -> bool {
    value.is_number() || value.as_constructor().is_some()
}

/// Preconditions with a more precise error than "operation not defined".
fn check_binary(
    op: BinaryOp,
    lhs: &Value,
    rhs: &Value,
    location: watt_ir::Location,
    left_location: watt_ir::Location,
    right_location: watt_ir::Location,
) -> Result<(), TypeError> {
    match (lhs.number_cons(), rhs.number_cons()) {
        (Some(a), Some(b)) => {
            let needs_same_dims = !matches!(op, BinaryOp::Mul | BinaryOp::Div);
            if needs_same_dims && a.dims != b.dims {
                return Err(TypeError::type_mismatch(
                    location,
                    &lhs.abstract_type(),
                    &rhs.abstract_type(),
                ));
            }
        }
        (Some(a), None) if rhs.as_constructor().is_some() && is_scaling(op) => {
            if !a.is_scalar() {
                return Err(TypeError::not_a_scalar(left_location, lhs));
            }
        }
        (None, Some(b)) if lhs.as_constructor().is_some() && is_scaling(op) => {
            if !b.is_scalar() {
                return Err(TypeError::not_a_scalar(right_location, rhs));
            }
        }
        _ => {}
    }
    Ok(())
}

fn is_scaling(op: BinaryOp) -> bool {
    matches!(op, BinaryOp::Mul | BinaryOp::Div)
}
