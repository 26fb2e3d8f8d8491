use crate::interpreter::token::Token;

/// Malformed input, detected while tokenizing or while reordering tokens into postfix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("mismatched parentheses")]
    MismatchedParentheses,
}

/// A postfix sequence that does not reduce to exactly one value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("missing operand for '{0}'")]
    MissingOperand(Token),

    #[error("factorial of negative number {0}")]
    NegativeFactorial(f64),

    #[error("invalid expression ({0} values left after evaluation)")]
    InvalidExpression(usize),
}

/// Any failure of [`evaluate`](crate::interpreter::evaluate).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationFailure {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),
}

impl EvaluationFailure {
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, EvaluationFailure::Syntax(_))
    }

    pub fn is_evaluation_error(&self) -> bool {
        matches!(self, EvaluationFailure::Evaluation(_))
    }
}
