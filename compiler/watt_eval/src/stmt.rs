//! Statement execution.

use watt_ir::{ExprId, Location, StmtId, StmtKind};
use watt_value::{Context, DimConstructor, Dimensions, Value};

use crate::{Evaluator, RuntimeError};

impl Evaluator<'_> {
    /// Execute a statement. `None` for statements without a value.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = self.arena.stmt(id).kind.name()))]
    pub fn exec_stmt(&mut self, id: StmtId) -> Result<Option<Value>, RuntimeError> {
        let arena = self.arena;
        let stmt = arena.stmt(id);
        let location = stmt.location;

        match &stmt.kind {
            StmtKind::Empty => Ok(None),

            StmtKind::Block(body) => {
                self.scoped(|evaluator| {
                    for stmt in body {
                        evaluator.exec_stmt(*stmt)?;
                    }
                    Ok(())
                })?;
                Ok(None)
            }

            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_condition(*cond)? {
                    self.scoped(|evaluator| evaluator.exec_stmt(*then_branch))?;
                } else if let Some(else_branch) = else_branch {
                    self.scoped(|evaluator| evaluator.exec_stmt(*else_branch))?;
                }
                Ok(None)
            }

            StmtKind::While { cond, body } => {
                let mut iterations = 0usize;
                while self.eval_condition(*cond)? {
                    self.scoped(|evaluator| evaluator.exec_stmt(*body))?;
                    iterations += 1;
                }
                tracing::debug!(iterations, "loop finished");
                Ok(None)
            }

            StmtKind::Var {
                name,
                annotation,
                init,
            } => {
                let value = self.exec_var(location, name, *annotation, *init)?;
                self.context = self.context.add_value(name, value.clone());
                Ok(Some(value))
            }

            StmtKind::Unit { name, definition } => {
                let cons = match definition {
                    None => DimConstructor::base(name),
                    Some(definition) => {
                        let base = self.unit_definition(*definition)?;
                        DimConstructor::derived(
                            Dimensions::from_unit(name),
                            base.base_dims,
                            base.factor,
                        )
                    }
                };
                tracing::debug!(unit = %name, factor = cons.factor, "unit declared");
                let value = Value::DimConstructor(cons);
                self.context = self.context.add_value(name, value.clone());
                Ok(Some(value))
            }

            StmtKind::Assign { name, value } => {
                let declared = self
                    .context
                    .get_value(name)
                    .ok_or_else(|| RuntimeError::name_not_defined(location, name))?
                    .abstract_type();
                let new = self.eval_expr(*value)?;
                if !new.is_subtype_of(&declared) {
                    return Err(RuntimeError::type_mismatch(location, &new, &declared));
                }
                tracing::debug!(name = %name, value = %new, "reassign");
                self.context
                    .set_value(name, new.clone())
                    .map_err(|_| RuntimeError::name_not_defined(location, name))?;
                Ok(Some(new))
            }

            StmtKind::Let { name, value } => {
                let value = self.eval_expr(*value)?;
                self.context = self.context.add_value(name, value.clone());
                Ok(Some(value))
            }

            StmtKind::Expr(expr) => self.eval_expr(*expr).map(Some),
        }
    }

    /// Run `f` in a nested scope, unwinding its bindings afterwards.
    fn scoped<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, RuntimeError>,
    ) -> Result<T, RuntimeError> {
        let mark = self.context.enter();
        let result = f(self);
        self.context = Context::restore(mark);
        result
    }

    fn eval_condition(&mut self, cond: ExprId) -> Result<bool, RuntimeError> {
        match self.eval_expr(cond)? {
            Value::Boolean(b) => Ok(b),
            other => Err(RuntimeError::not_a_boolean(
                self.arena.expr(cond).location,
                &other,
            )),
        }
    }

    /// The value a `var` binds. Without an initializer the name holds a placeholder
    /// of the annotated type until it is assigned.
    fn exec_var(
        &mut self,
        location: Location,
        name: &str,
        annotation: Option<ExprId>,
        init: Option<ExprId>,
    ) -> Result<Value, RuntimeError> {
        let declared = match annotation {
            Some(annotation) => {
                let ann = self.eval_expr(annotation)?;
                let Some(declared) = ann.instance_type() else {
                    return Err(RuntimeError::not_a_unit(
                        self.arena.expr(annotation).location,
                        &ann,
                    ));
                };
                Some(declared)
            }
            None => None,
        };
        let init = match init {
            Some(init) => Some(self.eval_expr(init)?),
            None => None,
        };

        match (declared, init) {
            (Some(declared), Some(init)) => {
                if init.is_subtype_of(&declared) {
                    Ok(init)
                } else {
                    Err(RuntimeError::type_mismatch(location, &init, &declared))
                }
            }
            (Some(declared), None) => Ok(Value::hole(name, declared)),
            (None, Some(init)) => Ok(init),
            (None, None) => Err(RuntimeError::var_must_have_type_or_value(location)),
        }
    }

    fn unit_definition(&mut self, definition: ExprId) -> Result<DimConstructor, RuntimeError> {
        match self.eval_expr(definition)? {
            Value::Dim(v) => Ok(v.cons.with_factor(v.value * v.cons.factor)),
            Value::DimConstructor(cons) => Ok(cons),
            other => Err(RuntimeError::not_a_number_or_unit(
                self.arena.expr(definition).location,
                &other,
            )),
        }
    }
}
