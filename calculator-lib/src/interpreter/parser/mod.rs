mod infix_converter;

use crate::interpreter::error::SyntaxError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Parses the given infix tokens into postfix (reverse Polish) order,
/// where every operator follows its operands.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same tokens in postfix order, without parentheses.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), calculator::interpreter::SyntaxError> {
/// use calculator::interpreter::parser::to_postfix;
/// use calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Number(1.0),
///     "+".parse().unwrap(),
///     Token::Number(2.0),
/// ];
/// let postfix_tokens = to_postfix(infix_tokens)?;
/// assert_eq!(postfix_tokens[2], "+".parse::<Token>().unwrap());
/// # Ok(()) }
/// ```
pub fn to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    infix_to_postfix(infix_tokens)
}
