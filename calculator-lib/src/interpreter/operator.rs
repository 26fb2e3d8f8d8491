use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A mathematical operator, either prefix, postfix or infix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
    Negate,
    Factorial,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// How many operands an operator consumes from the value stack.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OperatorProperties {
    pub symbol: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
    pub arity: Arity,
}

/// Indexed by the discriminant of [`Operator`], so the order here must follow the enum.
static OPERATOR_TABLE: [OperatorProperties; 7] = [
    OperatorProperties {
        symbol: "+",
        precedence: 2,
        associativity: Associativity::Left,
        arity: Arity::Binary,
    },
    OperatorProperties {
        symbol: "-",
        precedence: 2,
        associativity: Associativity::Left,
        arity: Arity::Binary,
    },
    OperatorProperties {
        symbol: "*",
        precedence: 3,
        associativity: Associativity::Left,
        arity: Arity::Binary,
    },
    OperatorProperties {
        symbol: "/",
        precedence: 3,
        associativity: Associativity::Left,
        arity: Arity::Binary,
    },
    OperatorProperties {
        symbol: "^",
        precedence: 4,
        associativity: Associativity::Right,
        arity: Arity::Binary,
    },
    OperatorProperties {
        symbol: "u-",
        precedence: 5,
        associativity: Associativity::Right,
        arity: Arity::Unary,
    },
    OperatorProperties {
        symbol: "!",
        precedence: 5,
        associativity: Associativity::Right,
        arity: Arity::Unary,
    },
];

impl Operator {
    pub fn token(&self) -> Token {
        Token::Operator(*self)
    }

    pub fn properties(&self) -> &'static OperatorProperties {
        &OPERATOR_TABLE[*self as usize]
    }

    pub fn symbol(&self) -> &'static str {
        self.properties().symbol
    }

    pub fn precedence(&self) -> u8 {
        self.properties().precedence
    }

    pub fn associativity(&self) -> Associativity {
        self.properties().associativity
    }

    pub fn arity(&self) -> Arity {
        self.properties().arity
    }

    pub(crate) fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence().eq(&other.precedence())
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    /// Applies a binary operator. Division by zero follows IEEE 754 and yields
    /// an infinity or NaN rather than failing.
    pub fn evaluate_binary(&self, a: f64, b: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(a + b),
            Operator::Subtract => Some(a - b),
            Operator::Multiply => Some(a * b),
            Operator::Divide => Some(a / b),
            Operator::Exponentiate => Some(f64::powf(a, b)),
            Operator::Negate | Operator::Factorial => None,
        }
    }
}

/// Factorial of `value` truncated toward zero, or `None` if the truncated
/// value is negative.
///
/// Computed in floating point: anything above `170!` overflows to infinity
/// and NaN stays NaN.
pub fn factorial(value: f64) -> Option<f64> {
    let n = value.trunc();
    if n < 0.0 {
        return None;
    }
    if n.is_nan() {
        return Some(f64::NAN);
    }
    if n > 170.0 {
        return Some(f64::INFINITY);
    }
    Some((2..=n as u64).fold(1.0, |product, i| product * i as f64))
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn operator_table_follows_enum_order() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "*");
        assert_eq!(Operator::Divide.symbol(), "/");
        assert_eq!(Operator::Exponentiate.symbol(), "^");
        assert_eq!(Operator::Negate.symbol(), "u-");
        assert_eq!(Operator::Factorial.symbol(), "!");
    }

    #[test]
    fn operator_equality_correspond_with_precedence() {
        let equal1 = Operator::Multiply;
        let equal2 = Operator::Divide;
        assert!(equal1.precedence_eq(&equal2))
    }

    #[test]
    fn operator_gt_correspond_with_precedence() {
        let greater = Operator::Multiply;
        let lesser = Operator::Add;
        assert!(greater.precedence_gt(&lesser))
    }

    #[test]
    fn unary_operators_bind_tighter_than_exponentiation() {
        assert!(Operator::Negate.precedence_gt(&Operator::Exponentiate));
        assert!(Operator::Factorial.precedence_eq(&Operator::Negate));
    }

    #[test]
    fn only_exponentiation_and_unary_operators_are_right_associative() {
        let right: Vec<Operator> = [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
            Operator::Exponentiate,
            Operator::Negate,
            Operator::Factorial,
        ]
        .into_iter()
        .filter(|operator| operator.associativity() == Associativity::Right)
        .collect();

        assert_eq!(
            right,
            vec![Operator::Exponentiate, Operator::Negate, Operator::Factorial]
        );
    }

    #[test]
    fn division_by_zero_yields_infinity() {
        let quotient = Operator::Divide.evaluate_binary(1.0, 0.0).unwrap();
        assert!(quotient.is_infinite());
    }

    #[test]
    fn unary_operators_do_not_evaluate_as_binary() {
        assert_eq!(Operator::Negate.evaluate_binary(1.0, 2.0), None);
        assert_eq!(Operator::Factorial.evaluate_binary(1.0, 2.0), None);
    }

    #[parameterized(
        value = { 0.0, 1.0, 3.0, 5.0, 3.9, -0.5 },
        expected = { 1.0, 1.0, 6.0, 120.0, 6.0, 1.0 }
    )]
    fn factorial_truncates_toward_zero(value: f64, expected: f64) {
        assert_eq!(factorial(value), Some(expected));
    }

    #[test]
    fn factorial_of_negative_number_is_undefined() {
        assert_eq!(factorial(-3.0), None);
    }

    #[test]
    fn factorial_overflows_to_infinity() {
        assert_eq!(factorial(171.0), Some(f64::INFINITY));
        assert!(factorial(170.0).unwrap().is_finite());
    }
}
