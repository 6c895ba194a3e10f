use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Mul,
    Div,
    Plus,
    Minus,
}

pub(crate) type Precedence = u8;

/// Symbol table for every operator the lexer recognises.
const OPERATORS: [(&str, Operator); 4] = [
    ("*", Operator::Mul),
    ("/", Operator::Div),
    ("+", Operator::Plus),
    ("-", Operator::Minus),
];

impl Operator {
    pub fn from_symbol(s: &str) -> Option<Self> {
        OPERATORS
            .iter()
            .find(|(symbol, _)| *symbol == s)
            .map(|(_, op)| *op)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Self::Plus | Self::Minus => 0,
            Self::Mul | Self::Div => 1,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Plus => lhs + rhs,
            Self::Minus => lhs - rhs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token {
    Operand(f64),
    Op(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(v) => write!(f, "{v}"),
            Self::Op(op) => f.write_str(op.symbol()),
        }
    }
}
