use crate::interpreter::function::Function;
use crate::interpreter::operator::Operator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    Function(Function),
    LeftParentheses,
    RightParentheses,
}

pub static SYMBOLS: [char; 8] = ['+', '-', '*', '/', '^', '!', '(', ')'];

impl Token {
    /// Whether a `-` read right after this token is a negation rather than a
    /// subtraction. That holds after any operator, postfix `!` included.
    pub fn expects_operand(&self) -> bool {
        match self {
            Token::Operator(_) | Token::LeftParentheses => true,
            Token::Number(_) | Token::Function(_) | Token::RightParentheses => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::Function(function) => write!(f, "{}", function),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
        }
    }
}

impl str::FromStr for Token {
    type Err = ();

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "+" => Ok(Token::Operator(Operator::Add)),
            "-" => Ok(Token::Operator(Operator::Subtract)),
            "*" => Ok(Token::Operator(Operator::Multiply)),
            "/" => Ok(Token::Operator(Operator::Divide)),
            "^" => Ok(Token::Operator(Operator::Exponentiate)),
            "u-" => Ok(Token::Operator(Operator::Negate)),
            "!" => Ok(Token::Operator(Operator::Factorial)),
            "(" => Ok(Token::LeftParentheses),
            ")" => Ok(Token::RightParentheses),
            input => parse_number_or_function(input),
        }
    }
}

fn parse_number_or_function(text: &str) -> Result<Token, ()> {
    match text.parse::<f64>() {
        Ok(value) => Ok(Token::Number(value)),
        Err(_) => text.parse::<Function>().map(Token::Function),
    }
}
