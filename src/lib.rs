//! A word-based calculator: `one add two` evaluated against named bindings.
//!
//! A line holds exactly three whitespace-separated tokens. One of them is the
//! operator keyword `add` or `sub`; the other two are variable names, taken
//! as left and right operand in the order they appear.

mod ast;
pub mod config;
mod environment;
mod error;
mod interpreter;
mod lexer;
mod parser;
mod token;

pub use ast::Expression;
pub use environment::Environment;
pub use error::{ErrorKind, InterpretError};
pub use interpreter::{evaluate, Interpreter};
pub use lexer::tokenize;
pub use parser::{build, classify, Classified, Parser};
pub use token::Operator;

pub fn parse(text: &str) -> Result<Expression, InterpretError> {
    Parser::new(text).expression()
}

pub fn parse_and_eval(text: &str, env: &Environment) -> Result<i32, InterpretError> {
    Interpreter::new(env).run(text)
}
