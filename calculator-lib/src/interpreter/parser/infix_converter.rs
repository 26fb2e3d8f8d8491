use crate::interpreter::error::SyntaxError;
use crate::interpreter::operator::{Associativity, Operator};
use crate::interpreter::token::Token;
use log::trace;
use std::collections::VecDeque;

/// Reorders infix tokens into postfix order using the shunting-yard algorithm.
///
/// The front of `operators` is the top of the operator stack.
pub(crate) fn infix_to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = Vec::with_capacity(infix_tokens.len());

    for token in infix_tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Function(_) | Token::LeftParentheses => operators.push_front(token),
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, operator)
            }
            Token::RightParentheses => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
        };
        trace!("after {}: operators {:?}, output {:?}", token, operators, output);
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), SyntaxError> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(SyntaxError::MismatchedParentheses);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), SyntaxError> {
    loop {
        match operators.pop_front() {
            None => return Err(SyntaxError::MismatchedParentheses),
            // Discard the open parenthesis.
            Some(Token::LeftParentheses) => break,
            Some(operator) => output.push(operator),
        }
    }

    // A function directly before the group applies to it.
    if let Some(Token::Function(_)) = operators.front() {
        if let Some(function) = operators.pop_front() {
            output.push(function);
        }
    }
    Ok(())
}

fn parse_operator_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    operator: Operator,
) {
    while let Some(Token::Operator(other_operator)) = operators.front() {
        let binds_tighter = other_operator.precedence_gt(&operator)
            || (other_operator.precedence_eq(&operator)
                && operator.associativity() == Associativity::Left);
        if !binds_tighter {
            break;
        }

        if let Some(other_operator_token) = operators.pop_front() {
            output.push(other_operator_token);
        }
    }

    operators.push_front(operator.token());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::function::Function;
    use pretty_assertions::assert_eq;

    fn number(value: f64) -> Token {
        Token::Number(value)
    }

    fn operator(symbol: &str) -> Token {
        symbol.parse().unwrap()
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 1 + 2
        let infix = vec![number(1.0), operator("+"), number(2.0)];
        let postfix = vec![number(1.0), number(2.0), operator("+")];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 1 - (2 + 3)
        let infix = vec![
            number(1.0),
            operator("-"),
            Token::LeftParentheses,
            number(2.0),
            operator("+"),
            number(3.0),
            Token::RightParentheses,
        ];
        let postfix = vec![
            number(1.0),
            number(2.0),
            number(3.0),
            operator("+"),
            operator("-"),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_complex_expression() {
        // 1 + 2 * 3 / (4 - 5)^6^7
        let infix = vec![
            number(1.0),
            operator("+"),
            number(2.0),
            operator("*"),
            number(3.0),
            operator("/"),
            Token::LeftParentheses,
            number(4.0),
            operator("-"),
            number(5.0),
            Token::RightParentheses,
            operator("^"),
            number(6.0),
            operator("^"),
            number(7.0),
        ];
        let postfix = vec![
            number(1.0),
            number(2.0),
            number(3.0),
            operator("*"),
            number(4.0),
            number(5.0),
            operator("-"),
            number(6.0),
            number(7.0),
            operator("^"),
            operator("^"),
            operator("/"),
            operator("+"),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_left_associative_operators_keep_their_order() {
        // 6 - 3 - 2
        let infix = vec![
            number(6.0),
            operator("-"),
            number(3.0),
            operator("-"),
            number(2.0),
        ];
        let postfix = vec![
            number(6.0),
            number(3.0),
            operator("-"),
            number(2.0),
            operator("-"),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // 1 + ((2 + 3) * 4)
        let infix = vec![
            number(1.0),
            operator("+"),
            Token::LeftParentheses,
            Token::LeftParentheses,
            number(2.0),
            operator("+"),
            number(3.0),
            Token::RightParentheses,
            operator("*"),
            number(4.0),
            Token::RightParentheses,
        ];
        let postfix = vec![
            number(1.0),
            number(2.0),
            number(3.0),
            operator("+"),
            number(4.0),
            operator("*"),
            operator("+"),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_function_is_emitted_after_its_group() {
        // sin(1 + 2) * 3
        let infix = vec![
            Token::Function(Function::Sin),
            Token::LeftParentheses,
            number(1.0),
            operator("+"),
            number(2.0),
            Token::RightParentheses,
            operator("*"),
            number(3.0),
        ];
        let postfix = vec![
            number(1.0),
            number(2.0),
            operator("+"),
            Token::Function(Function::Sin),
            number(3.0),
            operator("*"),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_negation_binds_tighter_than_power_operand() {
        // -2 ^ 2
        let infix = vec![operator("u-"), number(2.0), operator("^"), number(2.0)];
        let postfix = vec![number(2.0), operator("u-"), number(2.0), operator("^")];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_factorial_after_negation_applies_first() {
        // -3!
        let infix = vec![operator("u-"), number(3.0), operator("!")];
        let postfix = vec![number(3.0), operator("!"), operator("u-")];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_mismatched_parenthesis_should_return_err() {
        // (1 + 2))
        let infix = vec![
            Token::LeftParentheses,
            number(1.0),
            operator("+"),
            number(2.0),
            Token::RightParentheses,
            Token::RightParentheses,
        ];

        assert_eq!(
            infix_to_postfix(infix),
            Err(SyntaxError::MismatchedParentheses)
        );
    }

    #[test]
    fn infix_to_postfix_unclosed_parenthesis_should_return_err() {
        // (1 + 2
        let infix = vec![
            Token::LeftParentheses,
            number(1.0),
            operator("+"),
            number(2.0),
        ];

        assert_eq!(
            infix_to_postfix(infix),
            Err(SyntaxError::MismatchedParentheses)
        );
    }
}
