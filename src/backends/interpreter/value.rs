//! Runtime values of the host script

use std::fmt;

use super::ast::{BinOp, UnOp};
use crate::backends::{ExecutorError, ExecutorResult};

/// Runtime value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    None,
    Int(i64),
    Str(String),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Int(_) => "int",
            Value::Str(_) => "str",
        }
    }

    /// Apply a binary operator
    pub fn binary(
        &self,
        op: BinOp,
        rhs: &Value,
    ) -> ExecutorResult<Value> {
        match (op, self, rhs) {
            (BinOp::Add, Value::Int(a), Value::Int(b)) => checked(a.checked_add(*b)),
            (BinOp::Add, Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{}{}", a, b))),
            (BinOp::Sub, Value::Int(a), Value::Int(b)) => checked(a.checked_sub(*b)),
            (BinOp::Mul, Value::Int(a), Value::Int(b)) => checked(a.checked_mul(*b)),
            (BinOp::Mul, Value::Str(s), Value::Int(n)) | (BinOp::Mul, Value::Int(n), Value::Str(s)) => {
                Ok(Value::Str(repeat(s, *n)))
            }
            (BinOp::Div, Value::Int(_), Value::Int(0)) => Err(ExecutorError::DivisionByZero),
            (BinOp::Div, Value::Int(a), Value::Int(b)) => floor_div(*a, *b),
            _ => Err(ExecutorError::Type(format!(
                "unsupported operand type(s) for {}: '{}' and '{}'",
                op_symbol(op),
                self.type_name(),
                rhs.type_name()
            ))),
        }
    }

    /// Apply a unary operator
    pub fn unary(
        &self,
        op: UnOp,
    ) -> ExecutorResult<Value> {
        match (op, self) {
            (UnOp::Neg, Value::Int(n)) => checked(n.checked_neg()),
            (UnOp::Pos, Value::Int(n)) => Ok(Value::Int(*n)),
            _ => Err(ExecutorError::Type(format!(
                "bad operand type for unary {}: '{}'",
                if op == UnOp::Neg { "-" } else { "+" },
                self.type_name()
            ))),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => f.write_str(s),
        }
    }
}

fn checked(result: Option<i64>) -> ExecutorResult<Value> {
    result.map(Value::Int).ok_or(ExecutorError::Overflow)
}

fn repeat(
    s: &str,
    n: i64,
) -> String {
    match usize::try_from(n) {
        Ok(n) => s.repeat(n),
        Err(_) => String::new(),
    }
}

/// Integer division rounding toward negative infinity
fn floor_div(
    a: i64,
    b: i64,
) -> ExecutorResult<Value> {
    let q = a.checked_div(b).ok_or(ExecutorError::Overflow)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Ok(Value::Int(q - 1))
    } else {
        Ok(Value::Int(q))
    }
}

fn op_symbol(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
    }
}
