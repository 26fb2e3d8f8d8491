use crate::interpreter::error::SyntaxError;
use crate::interpreter::function::Function;
use crate::interpreter::operator::Operator;
use crate::interpreter::token::{Token, SYMBOLS};
use std::f64::consts::{E, PI};
use std::iter::Peekable;
use std::vec::IntoIter;

/// Splits an expression into tokens.
///
/// Whitespace separates tokens but is otherwise ignored. The names `pi` and
/// `e` become numbers, any other run of letters must name a function. A `-`
/// becomes a negation when it is the first token or follows an operator or `(`.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression, in infix order.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::lexer::tokenize;
/// use calculator::interpreter::token::Token;
///
/// let tokens = tokenize("2 * pi").unwrap();
/// assert_eq!(tokens[0], Token::Number(2.0));
/// assert_eq!(tokens.len(), 3);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, SyntaxError> {
    let characters: Vec<char> = expression.chars().collect();
    let mut characters = characters.into_iter().peekable();
    let mut tokens: Vec<Token> = Vec::new();

    while let Some(&character) = characters.peek() {
        if character.is_whitespace() {
            characters.next();
            continue;
        }
        let token = if character.is_ascii_digit() || character == '.' {
            read_number(&mut characters)?
        } else if character.is_alphabetic() {
            read_name(&mut characters)?
        } else {
            characters.next();
            read_symbol(character, tokens.last())?
        };
        tokens.push(token);
    }

    Ok(tokens)
}

fn read_number(characters: &mut Peekable<IntoIter<char>>) -> Result<Token, SyntaxError> {
    let text = take_while(characters, |c| c.is_ascii_digit() || c == '.');
    text.parse::<f64>()
        .map(Token::Number)
        .map_err(|_| SyntaxError::InvalidNumber(text))
}

fn read_name(characters: &mut Peekable<IntoIter<char>>) -> Result<Token, SyntaxError> {
    let name = take_while(characters, char::is_alphabetic).to_lowercase();
    match name.as_str() {
        "pi" => Ok(Token::Number(PI)),
        "e" => Ok(Token::Number(E)),
        _ => name
            .parse::<Function>()
            .map(Token::Function)
            .map_err(|_| SyntaxError::UnknownFunction(name)),
    }
}

fn read_symbol(character: char, previous: Option<&Token>) -> Result<Token, SyntaxError> {
    if !SYMBOLS.contains(&character) {
        return Err(SyntaxError::UnexpectedCharacter(character));
    }
    if character == '-' && previous.map_or(true, Token::expects_operand) {
        return Ok(Token::Operator(Operator::Negate));
    }
    character
        .to_string()
        .parse::<Token>()
        .map_err(|_| SyntaxError::UnexpectedCharacter(character))
}

fn take_while(
    characters: &mut Peekable<IntoIter<char>>,
    predicate: impl Fn(char) -> bool,
) -> String {
    let mut text = String::new();
    while let Some(character) = characters.next_if(|&c| predicate(c)) {
        text.push(character);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn operator(symbol: &str) -> Token {
        symbol.parse().unwrap()
    }

    #[test]
    fn simple_expression_returns_tokens() {
        let expected = vec![Token::Number(1.0), operator("+"), Token::Number(2.0)];

        let actual = tokenize("1+2").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn whitespace_is_ignored() {
        let expected = vec![
            Token::Number(12.5),
            operator("*"),
            Token::LeftParentheses,
            Token::Number(3.0),
            Token::RightParentheses,
        ];

        let actual = tokenize("  12.5 *\t( 3 )\n").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn whitespace_separates_numbers() {
        let expected = vec![Token::Number(1.0), Token::Number(2.0)];

        assert_eq!(tokenize("1 2").unwrap(), expected)
    }

    #[test]
    fn constants_are_resolved_case_insensitively() {
        let expected = vec![Token::Number(PI), operator("*"), Token::Number(E)];

        let actual = tokenize("PI * E").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn function_names_are_lower_cased() {
        let expected = vec![
            Token::Function(Function::Sqrt),
            Token::LeftParentheses,
            Token::Number(4.0),
            Token::RightParentheses,
        ];

        let actual = tokenize("SqRt(4)").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn leading_minus_is_negation() {
        let expected = vec![operator("u-"), Token::Number(5.0)];

        assert_eq!(tokenize("-5").unwrap(), expected)
    }

    #[test]
    fn minus_after_operator_or_parenthesis_is_negation() {
        let expected = vec![
            Token::Number(2.0),
            operator("*"),
            Token::LeftParentheses,
            operator("u-"),
            Token::Number(3.0),
            operator("-"),
            operator("u-"),
            Token::Number(1.0),
            Token::RightParentheses,
        ];

        let actual = tokenize("2*(-3--1)").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn minus_separated_by_whitespace_is_still_negation() {
        let expected = vec![operator("u-"), operator("u-"), Token::Number(5.0)];

        assert_eq!(tokenize("- -5").unwrap(), expected)
    }

    #[test]
    fn minus_after_closing_parenthesis_is_subtraction() {
        let expected = vec![
            Token::LeftParentheses,
            Token::Number(1.0),
            Token::RightParentheses,
            operator("-"),
            Token::Number(2.0),
        ];

        assert_eq!(tokenize("(1)-2").unwrap(), expected)
    }

    #[test]
    fn minus_after_factorial_is_negation() {
        let expected = vec![
            Token::Number(3.0),
            operator("!"),
            operator("u-"),
            Token::Number(1.0),
        ];

        assert_eq!(tokenize("3!-1").unwrap(), expected)
    }

    #[test]
    fn leading_and_trailing_dots_are_numbers() {
        let expected = vec![Token::Number(0.5), operator("+"), Token::Number(2.0)];

        assert_eq!(tokenize(".5+2.").unwrap(), expected)
    }

    #[test]
    fn unexpected_character_returns_err() {
        assert_eq!(tokenize("1 % 2"), Err(SyntaxError::UnexpectedCharacter('%')));
    }

    #[test]
    fn malformed_number_returns_err() {
        assert_eq!(
            tokenize("1.2.3"),
            Err(SyntaxError::InvalidNumber("1.2.3".to_string()))
        );
    }

    #[test]
    fn unknown_name_returns_err() {
        assert_eq!(
            tokenize("foo(1)"),
            Err(SyntaxError::UnknownFunction("foo".to_string()))
        );
    }

    #[test]
    fn empty_expression_has_no_tokens() {
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
