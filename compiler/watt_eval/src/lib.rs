//! Watt evaluator.
//!
//! Walks the same arena as type inference but over concrete values, in the value map
//! of the [`Context`]. It does not rely on the type pass having run: every dimensional
//! rule is checked again and reported as a [`RuntimeError`].
//!
//! `&&` and `||` short-circuit. Blocks and loop bodies run against a snapshot of the
//! context; `:=` writes through to the shared binding cell, so reassignments survive
//! the snapshot being restored while shadowing does not.

mod error;
mod expr;
mod stmt;

use watt_ir::Arena;
use watt_value::Context;

pub use error::RuntimeError;

pub struct Evaluator<'a> {
    arena: &'a Arena,
    context: Context,
}

impl<'a> Evaluator<'a> {
    pub fn new(arena: &'a Arena, context: Context) -> Self {
        Evaluator { arena, context }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn into_context(self) -> Context {
        self.context
    }
}

#[cfg(test)]
mod tests;
