use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A named single-argument function, e.g. `sin(x)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Log,
    Ln,
    Abs,
    Sinh,
    Cosh,
    Tanh,
    Ceil,
    Floor,
}

pub static FUNCTIONS: [Function; 15] = [
    Function::Sin,
    Function::Cos,
    Function::Tan,
    Function::Asin,
    Function::Acos,
    Function::Atan,
    Function::Sqrt,
    Function::Log,
    Function::Ln,
    Function::Abs,
    Function::Sinh,
    Function::Cosh,
    Function::Tanh,
    Function::Ceil,
    Function::Floor,
];

impl Function {
    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Sqrt => "sqrt",
            Function::Log => "log",
            Function::Ln => "ln",
            Function::Abs => "abs",
            Function::Sinh => "sinh",
            Function::Cosh => "cosh",
            Function::Tanh => "tanh",
            Function::Ceil => "ceil",
            Function::Floor => "floor",
        }
    }

    /// Applies the function. Angles are in radians, `log` is base 10 and `ln`
    /// is the natural logarithm. Arguments outside a function's domain give NaN
    /// (or an infinity) instead of an error.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Tan => x.tan(),
            Function::Asin => x.asin(),
            Function::Acos => x.acos(),
            Function::Atan => x.atan(),
            Function::Sqrt => x.sqrt(),
            Function::Log => x.log10(),
            Function::Ln => x.ln(),
            Function::Abs => x.abs(),
            Function::Sinh => x.sinh(),
            Function::Cosh => x.cosh(),
            Function::Tanh => x.tanh(),
            Function::Ceil => x.ceil(),
            Function::Floor => x.floor(),
        }
    }
}

impl str::FromStr for Function {
    type Err = ();

    /// Expects an already lower-cased name.
    fn from_str(name: &str) -> Result<Function, Self::Err> {
        FUNCTIONS
            .iter()
            .find(|function| function.name() == name)
            .copied()
            .ok_or(())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
