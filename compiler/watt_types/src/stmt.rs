//! Statement checking.

use watt_ir::{ExprId, Location, StmtId, StmtKind};
use watt_value::{Context, DimConstructor, Dimensions, Value};

use crate::{TypeChecker, TypeError};

impl TypeChecker<'_> {
    /// Check a statement, extending the context with whatever it binds.
    ///
    /// Returns the type of the statement's value, or `None` for statements that
    /// produce none (empty, block, `if`, `while`).
    #[tracing::instrument(level = "trace", skip_all, fields(kind = self.arena.stmt(id).kind.name()))]
    pub fn check_stmt(&mut self, id: StmtId) -> Result<Option<Value>, TypeError> {
        let arena = self.arena;
        let stmt = arena.stmt(id);
        let location = stmt.location;

        match &stmt.kind {
            StmtKind::Empty => Ok(None),

            StmtKind::Block(body) => {
                self.scoped(|checker| {
                    for stmt in body {
                        checker.check_stmt(*stmt)?;
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
                self.check_condition(*cond)?;
                self.scoped(|checker| checker.check_stmt(*then_branch))?;
                if let Some(else_branch) = else_branch {
                    self.scoped(|checker| checker.check_stmt(*else_branch))?;
                }
                Ok(None)
            }

            StmtKind::While { cond, body } => {
                self.check_condition(*cond)?;
                self.scoped(|checker| checker.check_stmt(*body))?;
                Ok(None)
            }

            StmtKind::Var {
                name,
                annotation,
                init,
            } => {
                let ty = self.check_var(location, *annotation, *init)?;
                self.context = self.context.add_type(name, ty.clone());
                Ok(Some(ty))
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
                let ty = Value::DimConstructor(cons);
                self.context = self.context.add_type(name, ty.clone());
                Ok(Some(ty))
            }

            StmtKind::Assign { name, value } => {
                let declared = self
                    .context
                    .get_type(name)
                    .ok_or_else(|| TypeError::name_not_defined(location, name))?;
                let declared = declared.unwrap_hole();
                let ty = self.infer_expr(*value)?;
                if !ty.is_subtype_of(&declared) {
                    return Err(TypeError::type_mismatch(location, &ty, &declared));
                }
                Ok(Some(ty))
            }

            StmtKind::Let { name, value } => {
                let ty = self.infer_expr(*value)?;
                self.context = self.context.add_type(name, ty.clone());
                Ok(Some(ty))
            }

            StmtKind::Expr(expr) => self.infer_expr(*expr).map(Some),
        }
    }

    /// Run `f` in a nested scope, unwinding its bindings afterwards.
    fn scoped<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, TypeError>,
    ) -> Result<T, TypeError> {
        let mark = self.context.enter();
        let result = f(self);
        self.context = Context::restore(mark);
        result
    }

    fn check_condition(&mut self, cond: ExprId) -> Result<(), TypeError> {
        let ty = self.infer_expr(cond)?;
        if ty.is_boolean() {
            Ok(())
        } else {
            Err(TypeError::not_a_boolean(self.arena.expr(cond).location, &ty))
        }
    }

    /// The type a `var` binds: the annotation's instances, or the initializer's type
    /// with its concrete value erased so later assignments can change it.
    fn check_var(
        &mut self,
        location: Location,
        annotation: Option<ExprId>,
        init: Option<ExprId>,
    ) -> Result<Value, TypeError> {
        let declared = match annotation {
            Some(annotation) => {
                let ann = self.infer_expr(annotation)?;
                let Some(declared) = ann.instance_type() else {
                    return Err(TypeError::not_a_unit(
                        self.arena.expr(annotation).location,
                        &ann,
                    ));
                };
                Some(declared)
            }
            None => None,
        };
        let init = match init {
            Some(init) => Some(self.infer_expr(init)?),
            None => None,
        };

        match (declared, init) {
            (Some(declared), Some(init)) => {
                if init.is_subtype_of(&declared) {
                    Ok(declared)
                } else {
                    Err(TypeError::type_mismatch(location, &init, &declared))
                }
            }
            (Some(declared), None) => Ok(declared),
            (None, Some(init)) => Ok(init.abstract_type()),
            (None, None) => Err(TypeError::var_must_have_type_or_value(location)),
        }
    }

    /// The unit a `unit name = expr;` definition reduces to. A number folds its
    /// magnitude into the factor: `1000 m` gives base `m`, factor 1000. A number whose
    /// magnitude is only known at runtime cannot fix a factor.
    fn unit_definition(&mut self, definition: ExprId) -> Result<DimConstructor, TypeError> {
        let location = self.arena.expr(definition).location;
        match self.infer_expr(definition)? {
            Value::Dim(v) => Ok(v.cons.with_factor(v.value * v.cons.factor)),
            Value::DimConstructor(cons) => Ok(cons),
            abstract_number @ Value::DimType(_) => {
                Err(TypeError::unit_not_static(location, &abstract_number))
            }
            other => Err(TypeError::not_a_number_or_unit(location, &other)),
        }
    }
}
