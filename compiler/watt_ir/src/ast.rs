//! Expression and statement nodes.

use crate::operators::{BinaryOp, LogicalOp, PrefixOp};
use crate::{ExprId, Location, StmtId};

/// Expression node.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub location: Location,
}

impl Expr {
    pub fn new(kind: ExprKind, location: Location) -> Self {
        Expr { kind, location }
    }
}

/// Named type-formers usable as expressions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeLiteral {
    /// `boolean`
    Boolean,
    /// `scalar`, the dimensionless unit.
    Scalar,
}

impl TypeLiteral {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeLiteral::Boolean => "boolean",
            TypeLiteral::Scalar => "scalar",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    Number(f64),
    Bool(bool),
    TypeLiteral(TypeLiteral),
    Ident(String),
    /// `(inner)`
    Paren(ExprId),
    /// `!x`, `+x`, `-x`
    Prefix { op: PrefixOp, operand: ExprId },
    /// `base^exponent`, the exponent is a numeric literal.
    Power { base: ExprId, exponent: f64 },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Logical {
        op: LogicalOp,
        left: ExprId,
        right: ExprId,
    },
    /// Juxtaposition: `3 km`.
    Ascription { value: ExprId, unit: ExprId },
    /// `value as target`
    Conversion { value: ExprId, target: ExprId },
}

impl ExprKind {
    /// Node name used by tree dumps.
    pub fn name(&self) -> &'static str {
        match self {
            ExprKind::Number(_) | ExprKind::Bool(_) => "Literal",
            ExprKind::TypeLiteral(_) => "TypeLiteral",
            ExprKind::Ident(_) => "Identifier",
            ExprKind::Paren(_) => "Parentheses",
            ExprKind::Prefix { .. } => "PrefixExpression",
            ExprKind::Power { .. } => "PowerExpression",
            ExprKind::Binary { .. } => "BinaryExpression",
            ExprKind::Logical { .. } => "LogicalExpression",
            ExprKind::Ascription { .. } => "AscriptionExpression",
            ExprKind::Conversion { .. } => "ConversionExpression",
        }
    }

    /// Leaves never need parentheses when printed as an operand.
    pub fn is_atomic(&self) -> bool {
        matches!(
            self,
            ExprKind::Number(_) | ExprKind::Bool(_) | ExprKind::TypeLiteral(_) | ExprKind::Ident(_)
        )
    }
}

/// Statement node.
#[derive(Clone, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub location: Location,
}

impl Stmt {
    pub fn new(kind: StmtKind, location: Location) -> Self {
        Stmt { kind, location }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// `;`
    Empty,
    /// `{ ... }`
    Block(Vec<StmtId>),
    If {
        cond: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },
    While {
        cond: ExprId,
        body: StmtId,
    },
    /// `var name: annotation = init;`, at least one of the two is required.
    Var {
        name: String,
        annotation: Option<ExprId>,
        init: Option<ExprId>,
    },
    /// `unit name;` declares a base unit, `unit name = expr;` a derived one.
    Unit {
        name: String,
        definition: Option<ExprId>,
    },
    /// `name := value;`
    Assign {
        name: String,
        value: ExprId,
    },
    /// `let name = value;`
    Let {
        name: String,
        value: ExprId,
    },
    Expr(ExprId),
}

impl StmtKind {
    pub fn name(&self) -> &'static str {
        match self {
            StmtKind::Empty => "EmptyStatement",
            StmtKind::Block(_) => "BlockStatement",
            StmtKind::If { .. } => "IfStatement",
            StmtKind::While { .. } => "WhileStatement",
            StmtKind::Var { .. } => "VarStatement",
            StmtKind::Unit { .. } => "UnitStatement",
            StmtKind::Assign { .. } => "AssignmentStatement",
            StmtKind::Let { .. } => "LetStatement",
            StmtKind::Expr(_) => "ExpressionStatement",
        }
    }
}
