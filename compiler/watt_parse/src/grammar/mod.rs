//! Grammar productions.

mod expr;
mod stmt;
