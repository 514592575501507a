//! Rendering syntax trees back to text.
//!
//! Three renderings are provided:
//! - [`print_expr`] / [`print_stmt`]: source text, parentheses kept as written.
//! - [`parenthesize_expr`]: source text where written parentheses are dropped and every
//!   non-atomic operand is wrapped, making the parsed grouping explicit.
//! - [`dump_expr`] / [`dump_stmt`]: an indented tree of node kinds with their locations.

use std::fmt::Write;

use crate::{Arena, ExprId, ExprKind, StmtId, StmtKind};

/// Format a number the way literals are written.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        value.to_string()
    }
}

pub fn print_expr(arena: &Arena, id: ExprId) -> String {
    let mut printer = Printer::new(arena, false);
    printer.expr(id);
    printer.out
}

pub fn parenthesize_expr(arena: &Arena, id: ExprId) -> String {
    let mut printer = Printer::new(arena, true);
    printer.expr(id);
    printer.out
}

pub fn print_stmt(arena: &Arena, id: StmtId) -> String {
    let mut printer = Printer::new(arena, false);
    printer.stmt(id);
    printer.out
}

pub fn dump_expr(arena: &Arena, id: ExprId) -> String {
    let mut out = String::new();
    dump_expr_into(arena, id, 0, &mut out);
    out
}

pub fn dump_stmt(arena: &Arena, id: StmtId) -> String {
    let mut out = String::new();
    dump_stmt_into(arena, id, 0, &mut out);
    out
}

struct Printer<'a> {
    arena: &'a Arena,
    parenthesize: bool,
    out: String,
}

impl<'a> Printer<'a> {
    fn new(arena: &'a Arena, parenthesize: bool) -> Self {
        Printer {
            arena,
            parenthesize,
            out: String::new(),
        }
    }

    fn expr(&mut self, id: ExprId) {
        match &self.arena.expr(id).kind {
            ExprKind::Number(n) => self.out.push_str(&format_number(*n)),
            ExprKind::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            ExprKind::TypeLiteral(lit) => self.out.push_str(lit.as_str()),
            ExprKind::Ident(name) => self.out.push_str(name),
            ExprKind::Paren(inner) => {
                if self.parenthesize {
                    self.expr(*inner);
                } else {
                    self.out.push('(');
                    self.expr(*inner);
                    self.out.push(')');
                }
            }
            ExprKind::Prefix { op, operand } => {
                self.out.push_str(op.as_symbol());
                self.operand(*operand);
            }
            ExprKind::Power { base, exponent } => {
                self.operand(*base);
                self.out.push('^');
                self.out.push_str(&format_number(*exponent));
            }
            ExprKind::Binary { op, left, right } => {
                self.infix(*left, op.as_symbol(), *right);
            }
            ExprKind::Logical { op, left, right } => {
                self.infix(*left, op.as_symbol(), *right);
            }
            ExprKind::Ascription { value, unit } => {
                self.operand(*value);
                self.out.push(' ');
                self.operand(*unit);
            }
            ExprKind::Conversion { value, target } => {
                self.infix(*value, "as", *target);
            }
        }
    }

    fn infix(&mut self, left: ExprId, symbol: &str, right: ExprId) {
        self.operand(left);
        self.out.push(' ');
        self.out.push_str(symbol);
        self.out.push(' ');
        self.operand(right);
    }

    fn operand(&mut self, id: ExprId) {
        if !self.parenthesize {
            self.expr(id);
            return;
        }
        let inner = strip_parens(self.arena, id);
        if self.arena.expr(inner).kind.is_atomic() {
            self.expr(inner);
        } else {
            self.out.push('(');
            self.expr(inner);
            self.out.push(')');
        }
    }

    fn stmt(&mut self, id: StmtId) {
        match &self.arena.stmt(id).kind {
            StmtKind::Empty => self.out.push(';'),
            StmtKind::Block(body) => {
                self.out.push_str("{\n");
                for stmt in body {
                    let text = print_stmt(self.arena, *stmt);
                    for line in text.lines() {
                        self.out.push_str("  ");
                        self.out.push_str(line);
                        self.out.push('\n');
                    }
                }
                self.out.push('}');
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.out.push_str("if (");
                self.expr(*cond);
                self.out.push_str(") ");
                self.stmt(*then_branch);
                if let Some(else_branch) = else_branch {
                    self.out.push_str(" else ");
                    self.stmt(*else_branch);
                }
            }
            StmtKind::While { cond, body } => {
                self.out.push_str("while (");
                self.expr(*cond);
                self.out.push_str(") ");
                self.stmt(*body);
            }
            StmtKind::Var {
                name,
                annotation,
                init,
            } => {
                self.out.push_str("var ");
                self.out.push_str(name);
                if let Some(annotation) = annotation {
                    self.out.push_str(": ");
                    self.expr(*annotation);
                }
                if let Some(init) = init {
                    self.out.push_str(" = ");
                    self.expr(*init);
                }
                self.out.push(';');
            }
            StmtKind::Unit { name, definition } => {
                self.out.push_str("unit ");
                self.out.push_str(name);
                if let Some(definition) = definition {
                    self.out.push_str(" = ");
                    self.expr(*definition);
                }
                self.out.push(';');
            }
            StmtKind::Assign { name, value } => {
                self.out.push_str(name);
                self.out.push_str(" := ");
                self.expr(*value);
                self.out.push(';');
            }
            StmtKind::Let { name, value } => {
                self.out.push_str("let ");
                self.out.push_str(name);
                self.out.push_str(" = ");
                self.expr(*value);
                self.out.push(';');
            }
            StmtKind::Expr(expr) => {
                self.expr(*expr);
                self.out.push(';');
            }
        }
    }
}

fn strip_parens(arena: &Arena, mut id: ExprId) -> ExprId {
    while let ExprKind::Paren(inner) = arena.expr(id).kind {
        id = inner;
    }
    id
}

fn dump_expr_into(arena: &Arena, id: ExprId, depth: usize, out: &mut String) {
    let expr = arena.expr(id);
    let indent = "  ".repeat(depth);
    let detail = match &expr.kind {
        ExprKind::Number(n) => format!(" {}", format_number(*n)),
        ExprKind::Bool(b) => format!(" {b}"),
        ExprKind::TypeLiteral(lit) => format!(" {}", lit.as_str()),
        ExprKind::Ident(name) => format!(" {name}"),
        ExprKind::Prefix { op, .. } => format!(" {op}"),
        ExprKind::Power { exponent, .. } => format!(" ^{}", format_number(*exponent)),
        ExprKind::Binary { op, .. } => format!(" {op}"),
        ExprKind::Logical { op, .. } => format!(" {op}"),
        ExprKind::Paren(_) | ExprKind::Ascription { .. } | ExprKind::Conversion { .. } => {
            String::new()
        }
    };
    let _ = writeln!(out, "{indent}{}{detail} [{}]", expr.kind.name(), expr.location);

    match &expr.kind {
        ExprKind::Number(_) | ExprKind::Bool(_) | ExprKind::TypeLiteral(_) | ExprKind::Ident(_) => {}
        ExprKind::Paren(inner)
        | ExprKind::Prefix { operand: inner, .. }
        | ExprKind::Power { base: inner, .. } => dump_expr_into(arena, *inner, depth + 1, out),
        ExprKind::Binary { left, right, .. }
        | ExprKind::Logical { left, right, .. }
        | ExprKind::Ascription {
            value: left,
            unit: right,
        }
        | ExprKind::Conversion {
            value: left,
            target: right,
        } => {
            dump_expr_into(arena, *left, depth + 1, out);
            dump_expr_into(arena, *right, depth + 1, out);
        }
    }
}

fn dump_stmt_into(arena: &Arena, id: StmtId, depth: usize, out: &mut String) {
    let stmt = arena.stmt(id);
    let indent = "  ".repeat(depth);
    let detail = match &stmt.kind {
        StmtKind::Var { name, .. }
        | StmtKind::Unit { name, .. }
        | StmtKind::Assign { name, .. }
        | StmtKind::Let { name, .. } => format!(" {name}"),
        _ => String::new(),
    };
    let _ = writeln!(out, "{indent}{}{detail} [{}]", stmt.kind.name(), stmt.location);

    match &stmt.kind {
        StmtKind::Empty => {}
        StmtKind::Block(body) => {
            for child in body {
                dump_stmt_into(arena, *child, depth + 1, out);
            }
        }
        StmtKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            dump_expr_into(arena, *cond, depth + 1, out);
            dump_stmt_into(arena, *then_branch, depth + 1, out);
            if let Some(else_branch) = else_branch {
                dump_stmt_into(arena, *else_branch, depth + 1, out);
            }
        }
        StmtKind::While { cond, body } => {
            dump_expr_into(arena, *cond, depth + 1, out);
            dump_stmt_into(arena, *body, depth + 1, out);
        }
        StmtKind::Var {
            annotation, init, ..
        } => {
            for expr in annotation.iter().chain(init.iter()) {
                dump_expr_into(arena, *expr, depth + 1, out);
            }
        }
        StmtKind::Unit { definition, .. } => {
            if let Some(definition) = definition {
                dump_expr_into(arena, *definition, depth + 1, out);
            }
        }
        StmtKind::Assign { value, .. } | StmtKind::Let { value, .. } | StmtKind::Expr(value) => {
            dump_expr_into(arena, *value, depth + 1, out);
        }
    }
}

#[cfg(test)]
mod tests;
