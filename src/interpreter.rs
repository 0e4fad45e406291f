use log::debug;

use crate::ast::Expression;
use crate::environment::Environment;
use crate::error::InterpretError;
use crate::parser::Parser;
use crate::token::Operator;

/// Reduces an expression tree to an integer.
///
/// Arithmetic wraps on overflow. The left operand is evaluated first.
pub fn evaluate(node: &Expression, env: &Environment) -> Result<i32, InterpretError> {
    match node {
        Expression::BinOp { op, left, right } => {
            let left_val = evaluate(left, env)?;
            let right_val = evaluate(right, env)?;
            Ok(match op {
                Operator::Add => left_val.wrapping_add(right_val),
                Operator::Sub => left_val.wrapping_sub(right_val),
            })
        }
        Expression::Var(name) => env
            .get(name)
            .ok_or_else(|| InterpretError::Lookup { name: name.clone() }),
    }
}

/// Evaluates expressions against a borrowed, read-only environment.
pub struct Interpreter<'env> {
    env: &'env Environment,
}

impl<'env> Interpreter<'env> {
    pub fn new(env: &'env Environment) -> Self {
        Interpreter { env }
    }

    pub fn interpret(&self, node: &Expression) -> Result<i32, InterpretError> {
        let result = evaluate(node, self.env)?;
        debug!("{} = {}", node, result);
        Ok(result)
    }

    pub fn run(&self, text: &str) -> Result<i32, InterpretError> {
        let tree = Parser::new(text).expression()?;
        self.interpret(&tree)
    }
}
