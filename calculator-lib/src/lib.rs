pub mod history;
pub mod interpreter;
pub mod numbers;

pub use interpreter::{evaluate, EvaluationError, EvaluationFailure, SyntaxError};
