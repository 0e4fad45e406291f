use std::fmt;

use crate::token::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    BinOp {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Var(String),
}

impl Expression {
    pub fn var(name: impl Into<String>) -> Self {
        Expression::Var(name.into())
    }

    pub fn bin_op(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::BinOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Renders in infix order, e.g. `one sub two`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::BinOp { op, left, right } => write!(f, "{} {} {}", left, op, right),
            Expression::Var(name) => f.write_str(name),
        }
    }
}
