use std::fmt::{Display, Formatter};
use crate::interpreter::lexer::Token;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    /// `nil`, `true`, `false` or a number, stored in its canonical text form
    Plain,
    /// Payload of a quoted string; never re-read as a keyword or number
    Quoted,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal {
        value: String,
        kind: LiteralKind,
    },
    Grouping(Box<Expr>),
    Unary {
        operator: Token,
        expr: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn plain(value: impl Into<String>) -> Expr {
        Expr::Literal { value: value.into(), kind: LiteralKind::Plain }
    }

    pub fn quoted(value: impl Into<String>) -> Expr {
        Expr::Literal { value: value.into(), kind: LiteralKind::Quoted }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal { value, .. } => f.write_str(value),
            Expr::Grouping(expr) => write!(f, "(group {})", expr),
            Expr::Unary { operator, expr } => write!(f, "({} {})", operator.source(), expr),
            Expr::Binary { left, operator, right } => write!(f, "({} {} {})", operator.source(), left, right),
        }
    }
}
