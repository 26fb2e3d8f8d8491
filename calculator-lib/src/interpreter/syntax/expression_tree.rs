use crate::interpreter::error::EvaluationError;
use crate::interpreter::function::Function;
use crate::interpreter::operator::{Arity, Operator};
use crate::interpreter::token::Token;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

/// The operator tree implied by a postfix token sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Terminal symbols (leaves)
    Number(f64),
    // Non-terminal symbols (non-leaves)
    UnaryOperation {
        operator: Operator,
        operand: Box<Node>,
    },
    FunctionCall {
        function: Function,
        argument: Box<Node>,
    },
    BinaryOperation {
        operator: Operator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
}

impl Node {
    pub fn new_number(value: f64) -> Node {
        Node::Number(value)
    }

    pub fn new_unary_operation(operator: Operator, operand: Node) -> Node {
        Node::UnaryOperation {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn new_function_call(function: Function, argument: Node) -> Node {
        Node::FunctionCall {
            function,
            argument: Box::new(argument),
        }
    }

    pub fn new_binary_operation(
        operator: Operator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    /// Number of nodes in the tree, this one included.
    pub fn size(&self) -> usize {
        match self {
            Node::Number(_) => 1,
            Node::UnaryOperation { operand, .. } => 1 + operand.size(),
            Node::FunctionCall { argument, .. } => 1 + argument.size(),
            Node::BinaryOperation {
                left_operand,
                right_operand,
                ..
            } => 1 + left_operand.size() + right_operand.size(),
        }
    }

    fn add_to(&self, builder: &mut TreeBuilder) {
        match self {
            Node::Number(value) => {
                builder.add_empty_child(format!("{}", value));
            }
            Node::UnaryOperation { operator, operand } => {
                builder.begin_child(format!("{}", operator));
                operand.add_to(builder);
                builder.end_child();
            }
            Node::FunctionCall { function, argument } => {
                builder.begin_child(format!("{}", function));
                argument.add_to(builder);
                builder.end_child();
            }
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => {
                builder.begin_child(format!("{}", operator));
                left_operand.add_to(builder);
                right_operand.add_to(builder);
                builder.end_child();
            }
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut builder = TreeBuilder::new("expression".into());
        self.add_to(&mut builder);

        let mut buffer: Vec<u8> = Vec::new();
        if write_tree(&builder.build(), &mut buffer).is_err() {
            return Err(fmt::Error);
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

/// Generates an expression tree based off of the given tokens.
///
/// Fails the same way evaluating the tokens would fail, except for a negative
/// factorial, which is a property of the values rather than the shape.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to convert to an expression tree.
///
/// returns: The root of the generated expression tree.
pub fn new_tree(postfix_tokens: &[Token]) -> Result<Node, EvaluationError> {
    let mut operands: Vec<Node> = Vec::new();

    for token in postfix_tokens {
        let node = match *token {
            Token::Number(value) => Node::new_number(value),
            Token::Function(function) => {
                let argument = operands.pop().ok_or(EvaluationError::MissingOperand(*token))?;
                Node::new_function_call(function, argument)
            }
            Token::Operator(operator) => match operator.arity() {
                Arity::Unary => {
                    let operand = operands.pop().ok_or(EvaluationError::MissingOperand(*token))?;
                    Node::new_unary_operation(operator, operand)
                }
                Arity::Binary => {
                    if operands.len() < 2 {
                        return Err(EvaluationError::MissingOperand(*token));
                    }
                    let operand_two = operands
                        .pop()
                        .ok_or(EvaluationError::MissingOperand(*token))?;
                    let operand_one = operands
                        .pop()
                        .ok_or(EvaluationError::MissingOperand(*token))?;
                    Node::new_binary_operation(operator, operand_one, operand_two)
                }
            },
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(EvaluationError::InvalidExpression(operands.len()))
            }
        };
        operands.push(node);
    }

    match operands.len() {
        1 => operands.pop().ok_or(EvaluationError::InvalidExpression(0)),
        remaining => Err(EvaluationError::InvalidExpression(remaining)),
    }
}
