//! Watt IR - syntax tree and source locations shared by every phase.
//!
//! The parser allocates [`Expr`] and [`Stmt`] nodes into an [`Arena`] and refers to them
//! by [`ExprId`] / [`StmtId`]. Type inference and evaluation walk the same arena.
//!
//! Every node carries a [`Location`] so both semantic passes can report the innermost
//! node that failed.

mod arena;
mod ast;
mod operators;
pub mod printer;
mod span;

pub use arena::{Arena, ExprId, StmtId};
pub use ast::{Expr, ExprKind, Stmt, StmtKind, TypeLiteral};
pub use operators::{BinaryOp, LogicalOp, PrefixOp};
pub use printer::format_number;
pub use span::{LineIndex, Location, Position};
