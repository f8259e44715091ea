//! Binary operator evaluation
//!
//! Operands are converted to their common type first, so `char * char`
//! computes (and yields) `int`, and `int + float` computes in `float`.

use crate::ast::{BinOp, Expr};
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::type_system::{bool_to_value, common_type, value_to_bool};
use crate::memory::value::Value;
use crate::memory::CType;

/// Apply a binary operator to two already-evaluated operands
///
/// `&&` and `||` are accepted here on evaluated values; short-circuiting is
/// the caller's concern (see [`Interpreter::evaluate_binary_op`]).
pub fn apply_binary(op: BinOp, left: Value, right: Value) -> Result<Value, RuntimeError> {
    use BinOp::*;

    match op {
        Mul | Div | Mod | Add | Sub => arithmetic(op, left, right),
        Lt | Le | Gt | Ge | Eq | Ne => compare(op, left, right),
        And => Ok(bool_to_value(value_to_bool(left) && value_to_bool(right))),
        Or => Ok(bool_to_value(value_to_bool(left) || value_to_bool(right))),
    }
}

fn arithmetic(op: BinOp, left: Value, right: Value) -> Result<Value, RuntimeError> {
    let ty = common_type(left.ctype(), right.ctype());

    if op == BinOp::Mod && ty.is_floating() {
        return Err(RuntimeError::InvalidOperands {
            op: op.symbol().to_string(),
            lhs: left.ctype(),
            rhs: right.ctype(),
        });
    }

    match (left.convert(ty), right.convert(ty)) {
        (Value::Int(a), Value::Int(b)) => checked_int_op(op, a, b).map(Value::Int),
        // Rounding the double result gives the correctly rounded single result
        (Value::Float(a), Value::Float(b)) => {
            Ok(Value::Double(float_op(op, a as f64, b as f64)).convert(CType::Float))
        }
        (l, r) => Ok(Value::Double(float_op(op, l.to_f64(), r.to_f64()))),
    }
}

#[inline]
fn checked_int_op(op: BinOp, a: i32, b: i32) -> Result<i32, RuntimeError> {
    let operation = || format!("{} {} {}", a, op.symbol(), b);

    if matches!(op, BinOp::Div | BinOp::Mod) && b == 0 {
        return Err(RuntimeError::DivisionByZero {
            operation: operation(),
        });
    }

    let result = match op {
        BinOp::Mul => a.checked_mul(b),
        BinOp::Div => a.checked_div(b),
        BinOp::Mod => a.checked_rem(b),
        BinOp::Add => a.checked_add(b),
        BinOp::Sub => a.checked_sub(b),
        _ => unreachable!("non-arithmetic operator {:?}", op),
    };

    result.ok_or_else(|| RuntimeError::IntegerOverflow {
        operation: operation(),
    })
}

#[inline]
fn float_op(op: BinOp, a: f64, b: f64) -> f64 {
    match op {
        BinOp::Mul => a * b,
        BinOp::Div => a / b,
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
        _ => unreachable!("non-arithmetic operator {:?}", op),
    }
}

fn compare(op: BinOp, left: Value, right: Value) -> Result<Value, RuntimeError> {
    let ty = common_type(left.ctype(), right.ctype());
    // Both sides widen exactly once they share the common type
    let a = left.convert(ty).to_f64();
    let b = right.convert(ty).to_f64();

    let result = match op {
        BinOp::Lt => a < b,
        BinOp::Le => a <= b,
        BinOp::Gt => a > b,
        BinOp::Ge => a >= b,
        BinOp::Eq => a == b,
        BinOp::Ne => a != b,
        _ => unreachable!("non-comparison operator {:?}", op),
    };
    Ok(bool_to_value(result))
}

impl Interpreter {
    pub(crate) fn evaluate_binary_op(
        &mut self,
        op: BinOp,
        left: &Expr,
        right: &Expr,
    ) -> Result<Value, RuntimeError> {
        let left_val = self.evaluate_expr(left)?;

        // Logical operators short-circuit
        match op {
            BinOp::And if !value_to_bool(left_val) => return Ok(bool_to_value(false)),
            BinOp::Or if value_to_bool(left_val) => return Ok(bool_to_value(true)),
            _ => {}
        }

        let right_val = self.evaluate_expr(right)?;
        apply_binary(op, left_val, right_val)
    }
}
