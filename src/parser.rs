use log::debug;

use crate::ast::Expression;
use crate::error::InterpretError;
use crate::lexer::tokenize;
use crate::token::Operator;

const EXPRESSION_LEN: usize = 3;

/// Roles assigned to the three tokens of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified<'a> {
    pub op: Operator,
    pub left: &'a str,
    pub right: &'a str,
}

/// Picks out the operator and the two operand names.
///
/// Operands are assigned by encounter order, not by the operator's position:
/// `sub one two`, `one sub two` and `one two sub` all give `left = one`,
/// `right = two`.
pub fn classify<'a>(tokens: &[&'a str]) -> Result<Classified<'a>, InterpretError> {
    if tokens.len() != EXPRESSION_LEN {
        return Err(InterpretError::Syntax { found: tokens.len() });
    }

    let mut op = None;
    let mut extra_op = None;
    let mut operator_count = 0;
    let mut operands = Vec::with_capacity(2);

    for &token in tokens {
        match Operator::from_keyword(token) {
            Some(found) => {
                operator_count += 1;
                if op.is_none() {
                    op = Some(found);
                } else if extra_op.is_none() {
                    extra_op = Some(token.to_string());
                }
            }
            None => operands.push(token),
        }
    }

    match (op, operands.as_slice()) {
        (Some(op), &[left, right]) if operator_count == 1 => {
            debug!("classified {:?} as {} {} {}", tokens, left, op, right);
            Ok(Classified { op, left, right })
        }
        _ => Err(InterpretError::Operator {
            found: operator_count,
            token: extra_op,
        }),
    }
}

pub fn build(op: Operator, left: &str, right: &str) -> Expression {
    Expression::bin_op(op, Expression::var(left), Expression::var(right))
}

pub struct Parser<'a> {
    text: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str) -> Self {
        Parser { text }
    }

    pub fn expression(&self) -> Result<Expression, InterpretError> {
        let tokens = tokenize(self.text);
        let Classified { op, left, right } = classify(&tokens)?;
        Ok(build(op, left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Expression, InterpretError> {
        Parser::new(text).expression()
    }

    #[test]
    fn test_operand_order_ignores_operator_position() {
        let expected = build(Operator::Sub, "one", "two");
        assert_eq!(parse("sub one two").unwrap(), expected);
        assert_eq!(parse("one sub two").unwrap(), expected);
        assert_eq!(parse("one two sub").unwrap(), expected);
    }

    #[test]
    fn test_classify_roles() {
        let classified = classify(&["b", "a", "add"]).unwrap();
        assert_eq!(classified.op, Operator::Add);
        assert_eq!(classified.left, "b");
        assert_eq!(classified.right, "a");
    }

    #[test]
    fn test_build_shape() {
        match build(Operator::Add, "x", "y") {
            Expression::BinOp { op, left, right } => {
                assert_eq!(op, Operator::Add);
                assert_eq!(*left, Expression::var("x"));
                assert_eq!(*right, Expression::var("y"));
            }
            other => panic!("expected BinOp, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_wrong_token_count() {
        assert_eq!(parse("one add"), Err(InterpretError::Syntax { found: 2 }));
        assert_eq!(parse("one add two three"), Err(InterpretError::Syntax { found: 4 }));
        assert_eq!(parse(""), Err(InterpretError::Syntax { found: 0 }));
    }

    #[test]
    fn test_parse_missing_operator() {
        assert_eq!(
            parse("one two three"),
            Err(InterpretError::Operator { found: 0, token: None })
        );
    }

    #[test]
    fn test_parse_duplicate_operator() {
        assert_eq!(
            parse("add sub one"),
            Err(InterpretError::Operator { found: 2, token: Some("sub".to_string()) })
        );
        assert_eq!(
            parse("add add add"),
            Err(InterpretError::Operator { found: 3, token: Some("add".to_string()) })
        );
    }

    #[test]
    fn test_parse_uppercase_keyword_is_a_name() {
        assert_eq!(
            parse("ADD one two"),
            Err(InterpretError::Operator { found: 0, token: None })
        );
        assert_eq!(parse("Add add two").unwrap(), build(Operator::Add, "Add", "two"));
    }
}
