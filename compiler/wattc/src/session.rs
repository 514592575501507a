//! Sessions: parse, check, evaluate, commit.

use watt_diagnostic::{emitter, Diagnostic};
use watt_eval::{Evaluator, RuntimeError};
use watt_parse::ParseError;
use watt_types::{TypeChecker, TypeError};
use watt_value::{Context, DimConstructor, Dimensions, Value};

/// Any failure while handling one input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WattError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Type(#[from] TypeError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl WattError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            WattError::Parse(err) => err.to_diagnostic(),
            WattError::Type(err) => err.to_diagnostic(),
            WattError::Runtime(err) => err.to_diagnostic(),
        }
    }

    /// Terminal report with a snippet of `source`.
    pub fn render(&self, source: &str, color: bool) -> String {
        emitter::render(source, &self.to_diagnostic(), color)
    }
}

/// Bindings that persist across inputs.
#[derive(Clone, Debug)]
pub struct Session {
    initial: Context,
    context: Context,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    /// A session with no bindings at all.
    pub fn new() -> Self {
        Session::from_context(Context::new())
    }

    /// A session with the base units `m` and `s` and the derived units `km`, `min` and
    /// `h` bound in both maps.
    pub fn with_prelude() -> Self {
        Session::from_context(prelude())
    }

    fn from_context(context: Context) -> Self {
        Session {
            initial: context.clone(),
            context,
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Run `source` through both passes. The bindings it makes are kept only if every
    /// statement succeeds; the result is the value of the last statement.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, source: &str) -> Result<Option<Value>, WattError> {
        let program = watt_parse::parse(source)?;

        let mut checker = TypeChecker::new(&program.arena, self.context.fork());
        for stmt in &program.stmts {
            checker.check_stmt(*stmt)?;
        }

        let mut evaluator = Evaluator::new(&program.arena, checker.into_context());
        let mut last = None;
        for stmt in &program.stmts {
            last = evaluator.exec_stmt(*stmt)?;
        }

        self.context = evaluator.into_context();
        Ok(last)
    }

    /// Type-check `source` without evaluating it or keeping its bindings. The result
    /// is the type of the last statement.
    pub fn check(&self, source: &str) -> Result<Option<Value>, WattError> {
        let program = watt_parse::parse(source)?;
        let mut checker = TypeChecker::new(&program.arena, self.context.fork());
        let mut last = None;
        for stmt in &program.stmts {
            last = checker.check_stmt(*stmt)?;
        }
        Ok(last)
    }

    /// The inferred type of a single expression.
    pub fn type_of(&self, source: &str) -> Result<Value, WattError> {
        let parsed = watt_parse::parse_expression(source)?;
        let mut checker = TypeChecker::new(&parsed.arena, self.context.fork());
        Ok(checker.infer_expr(parsed.root)?)
    }

    /// Forget the value of `name` while keeping its type around as a placeholder.
    ///
    /// Returns `false` if `name` has no type binding.
    pub fn undef(&mut self, name: &str) -> bool {
        let Some(ty) = self.context.get_type(name) else {
            return false;
        };
        let placeholder = Value::hole(name, ty.abstract_type());
        self.context = self
            .context
            .delete_value(name)
            .delete_type(name)
            .add_type(name, placeholder);
        tracing::debug!(name, "undefined");
        true
    }

    /// Drop everything bound since the session started.
    pub fn reset(&mut self) {
        self.context = self.initial.clone();
    }
}

fn prelude() -> Context {
    let m = DimConstructor::base("m");
    let s = DimConstructor::base("s");
    let units = [
        ("m", m.clone()),
        ("s", s.clone()),
        ("km", derived("km", &m, 1000.0)),
        ("min", derived("min", &s, 60.0)),
        ("h", derived("h", &s, 3600.0)),
    ];

    units.into_iter().fold(Context::new(), |context, (name, cons)| {
        let unit = Value::DimConstructor(cons);
        context.add_type(name, unit.clone()).add_value(name, unit)
    })
}

fn derived(name: &str, base: &DimConstructor, factor: f64) -> DimConstructor {
    DimConstructor::derived(Dimensions::from_unit(name), base.base_dims.clone(), factor)
}
