mod error;
pub mod evaluator;
pub mod function;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

pub use error::{EvaluationError, EvaluationFailure, SyntaxError};

use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::syntax::expression_tree::{new_tree, Node};
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::debug;
use string_builder::Builder;

/// Calculates the value of the given expression.
///
/// Tokenizes the text, reorders the tokens into postfix order and reduces them
/// with a value stack. The first failure of any stage is returned unchanged.
/// Nothing is kept between calls.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::evaluate;
///
/// assert_eq!(evaluate("1 + 2 * 3"), Ok(7.0));
/// assert_eq!(evaluate("2^3^2"), Ok(512.0));
/// assert!(evaluate("(1 + 2").unwrap_err().is_syntax_error());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvaluationFailure> {
    let postfix_tokens = convert(expression)?;
    let value = evaluate_postfix(&postfix_tokens)?;
    debug!("{} = {}", expression, value);
    Ok(value)
}

/// Converts the given input string into the equivalent postfix tokens,
/// which can be evaluated with a single stack.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression in postfix order.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::{convert, tokens_to_string};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = convert("1 + 2 * 3")?;
/// assert_eq!(tokens_to_string(&postfix_tokens)?, "1 2 3 * +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Vec<Token>, SyntaxError> {
    let infix_tokens = lexer::tokenize(expression)?;
    debug!("tokens: {:?}", infix_tokens);
    let postfix_tokens = parser::to_postfix(infix_tokens)?;
    debug!("postfix: {:?}", postfix_tokens);
    Ok(postfix_tokens)
}

/// Builds the operator tree of the given expression, for display.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::explain;
///
/// let tree = explain("sqrt(16) + 1").unwrap();
/// print!("{}", tree);
/// ```
pub fn explain(expression: &str) -> Result<Node, EvaluationFailure> {
    let postfix_tokens = convert(expression)?;
    Ok(new_tree(&postfix_tokens)?)
}

/// Prints the given tokens separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::tokens_to_string;
/// use calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::Number(5.0),
///     "u-".parse::<Token>().unwrap(),
///     Token::Number(2.0),
///     "^".parse::<Token>().unwrap(),
/// ];
/// assert_eq!(tokens_to_string(&tokens)?, "5 u- 2 ^");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}
