//! Type promotion and conversion rules
//!
//! # Rules
//!
//! - Integer promotion: `char` operands widen to `int` before arithmetic
//! - Usual arithmetic conversions: the common type of two operands is `double`
//!   if either is `double`, else `float` if either is `float`, else `int`
//! - Truthiness: any non-zero scalar is true (NaN included)
//!
//! Value conversion itself lives in [`Value::convert`].

use crate::memory::value::Value;
use crate::memory::CType;

/// Integer promotion
#[inline]
pub fn promote(ty: CType) -> CType {
    match ty {
        CType::Char => CType::Int,
        other => other,
    }
}

/// Common type of a binary arithmetic or comparison expression
#[inline]
pub fn common_type(left: CType, right: CType) -> CType {
    let (left, right) = (promote(left), promote(right));
    if left.rank() >= right.rank() {
        left
    } else {
        right
    }
}

/// Convert a value to a boolean (for `&&`, `||`)
#[inline]
pub fn value_to_bool(val: Value) -> bool {
    match val {
        Value::Char(c) => c != 0,
        Value::Int(n) => n != 0,
        Value::Float(x) => x != 0.0,
        Value::Double(x) => x != 0.0,
    }
}

/// C's `int` result for relational and logical operators
#[inline]
pub fn bool_to_value(b: bool) -> Value {
    Value::Int(if b { 1 } else { 0 })
}
