use std::fmt::{Display, Formatter};
use crate::interpreter::ast::{Expr, LiteralKind};
use crate::interpreter::lexer::{Token, TokenType};
use crate::interpreter::value::Value;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    OperandMustBeNumber,
    OperandsMustBeNumbers,
    OperandsMustBeNumberOrString,
    DivisionByZero,
    ComparisonRequiresNumbers,
    /// The tree holds an operator the parser never produces
    UnsupportedOperator,
}

impl EvalErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            EvalErrorKind::OperandMustBeNumber => "Operand must be a number.",
            EvalErrorKind::OperandsMustBeNumbers => "Operands must be numbers.",
            EvalErrorKind::OperandsMustBeNumberOrString => "Operands must be two numbers or two strings.",
            EvalErrorKind::DivisionByZero => "Division by zero.",
            EvalErrorKind::ComparisonRequiresNumbers => "Operands must be numbers for comparison.",
            EvalErrorKind::UnsupportedOperator => "Unsupported operator.",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub line: i32,
    pub operator: String,
}

impl EvalError {
    fn at(kind: EvalErrorKind, operator: &Token) -> EvalError {
        EvalError { kind, line: operator.line(), operator: operator.source().to_owned() }
    }
}

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n[line {}]", self.kind.message(), self.line)
    }
}

impl std::error::Error for EvalError {}

pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree. Operands are evaluated left to right before their
/// operator is applied; the first error aborts the whole evaluation.
pub fn evaluate(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, kind } => Ok(evaluate_literal(value, *kind)),
        Expr::Grouping(expr) => evaluate(expr),
        Expr::Unary { operator, expr } => {
            let operand = evaluate(expr)?;
            evaluate_unary(operator, operand)
        },
        Expr::Binary { left, operator, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            evaluate_binary(operator, left, right)
        },
    }
}

fn evaluate_literal(value: &str, kind: LiteralKind) -> Value {
    if kind == LiteralKind::Quoted {
        return Value::String(value.to_owned());
    }

    match value {
        "nil" => Value::Nil,
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        _ => match value.parse::<f64>() {
            Ok(number) => Value::Number(number),
            Err(_) => Value::String(value.to_owned()),
        },
    }
}

fn evaluate_unary(operator: &Token, operand: Value) -> EvalResult<Value> {
    match operator.token_type() {
        TokenType::Minus => match operand {
            Value::Number(value) => Ok(Value::Number(-value)),
            Value::Nil | Value::Boolean(_) | Value::String(_) =>
                Err(EvalError::at(EvalErrorKind::OperandMustBeNumber, operator)),
        },
        TokenType::Not => Ok(Value::Boolean(!operand.is_truthy())),
        _ => Err(EvalError::at(EvalErrorKind::UnsupportedOperator, operator)),
    }
}

fn evaluate_binary(operator: &Token, left: Value, right: Value) -> EvalResult<Value> {
    match operator.token_type() {
        TokenType::Plus => match (left, right) {
            (Value::Number(left), Value::Number(right)) => Ok(Value::Number(left + right)),
            (Value::String(mut left), Value::String(right)) => {
                left.push_str(&right);
                Ok(Value::String(left))
            },
            _ => Err(EvalError::at(EvalErrorKind::OperandsMustBeNumberOrString, operator)),
        },
        TokenType::Minus => {
            let (left, right) = number_operands(operator, left, right, EvalErrorKind::OperandsMustBeNumbers)?;
            Ok(Value::Number(left - right))
        },
        TokenType::Star => {
            let (left, right) = number_operands(operator, left, right, EvalErrorKind::OperandsMustBeNumbers)?;
            Ok(Value::Number(left * right))
        },
        TokenType::Slash => {
            let (left, right) = number_operands(operator, left, right, EvalErrorKind::OperandsMustBeNumbers)?;

            if right == 0.0 {
                return Err(EvalError::at(EvalErrorKind::DivisionByZero, operator));
            }

            Ok(Value::Number(left / right))
        },

        TokenType::Greater => compare(operator, left, right, |left, right| left > right),
        TokenType::GreaterEqual => compare(operator, left, right, |left, right| left >= right),
        TokenType::Less => compare(operator, left, right, |left, right| left < right),
        TokenType::LessEqual => compare(operator, left, right, |left, right| left <= right),

        TokenType::Equal => Ok(Value::Boolean(left.is_equal(&right))),
        TokenType::NotEqual => Ok(Value::Boolean(!left.is_equal(&right))),

        _ => Err(EvalError::at(EvalErrorKind::UnsupportedOperator, operator)),
    }
}

fn compare(operator: &Token, left: Value, right: Value, comparison: impl FnOnce(f64, f64) -> bool) -> EvalResult<Value> {
    let (left, right) = number_operands(operator, left, right, EvalErrorKind::ComparisonRequiresNumbers)?;
    Ok(Value::Boolean(comparison(left, right)))
}

fn number_operands(operator: &Token, left: Value, right: Value, kind: EvalErrorKind) -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => Ok((left, right)),
        _ => Err(EvalError::at(kind, operator)),
    }
}
