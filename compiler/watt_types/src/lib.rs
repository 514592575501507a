//! Watt type inference.
//!
//! A bottom-up walk over the arena that computes, for every node, the most precise
//! [`Value`] it can: concrete when the operands are known, abstract otherwise. Along
//! the way it enforces the dimensional rules, so a program that passes here only fails
//! at runtime on conditions the static walk cannot see.
//!
//! Bindings live in the type map of the shared [`Context`]. Blocks, branches and loop
//! bodies are checked against a snapshot that is restored afterwards.

mod error;
mod infer;
mod stmt;

use watt_ir::Arena;
use watt_value::Context;

pub use error::TypeError;

/// Walks one parsed program against a context.
pub struct TypeChecker<'a> {
    arena: &'a Arena,
    context: Context,
}

impl<'a> TypeChecker<'a> {
    pub fn new(arena: &'a Arena, context: Context) -> Self {
        TypeChecker { arena, context }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// The context with every binding added so far.
    pub fn into_context(self) -> Context {
        self.context
    }
}

#[cfg(test)]
mod tests;
