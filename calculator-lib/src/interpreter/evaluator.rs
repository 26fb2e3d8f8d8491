use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::{factorial, Operator};
use crate::interpreter::token::Token;
use log::trace;

/// Reduces a postfix token sequence to a single number using a value stack.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens ordered in postfix notation, without parentheses.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::evaluator::evaluate_postfix;
/// use calculator::interpreter::token::Token;
///
/// let postfix_tokens = vec![
///     Token::Number(6.0),
///     Token::Number(3.0),
///     "-".parse::<Token>().unwrap(),
/// ];
/// assert_eq!(evaluate_postfix(&postfix_tokens), Ok(3.0));
/// ```
pub fn evaluate_postfix(postfix_tokens: &[Token]) -> Result<f64, EvaluationError> {
    let mut values: Vec<f64> = Vec::with_capacity(postfix_tokens.len());

    for token in postfix_tokens {
        let value = match *token {
            Token::Number(value) => value,
            Token::Function(function) => {
                let argument = pop_operand(&mut values, token)?;
                function.apply(argument)
            }
            Token::Operator(Operator::Negate) => -pop_operand(&mut values, token)?,
            Token::Operator(Operator::Factorial) => {
                let operand = pop_operand(&mut values, token)?;
                factorial(operand).ok_or(EvaluationError::NegativeFactorial(operand))?
            }
            Token::Operator(operator) => {
                if values.len() < 2 {
                    return Err(EvaluationError::MissingOperand(*token));
                }
                let b = pop_operand(&mut values, token)?;
                let a = pop_operand(&mut values, token)?;
                operator
                    .evaluate_binary(a, b)
                    .ok_or(EvaluationError::MissingOperand(*token))?
            }
            // Parentheses never survive conversion to postfix.
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(EvaluationError::InvalidExpression(values.len()))
            }
        };
        trace!("{} -> {}", token, value);
        values.push(value);
    }

    match values.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvaluationError::InvalidExpression(values.len())),
    }
}

fn pop_operand(values: &mut Vec<f64>, token: &Token) -> Result<f64, EvaluationError> {
    values
        .pop()
        .ok_or(EvaluationError::MissingOperand(*token))
}
