//! Runtime value representation
//!
//! This module defines the [`Value`] enum, which represents every scalar the
//! demonstration computes with. Unlike C's raw memory model, values are tagged,
//! so each operator can apply the conversion rules for its operand types.
//!
//! # Value Types
//!
//! - [`Value::Char`]: 8-bit signed character
//! - [`Value::Int`]: 32-bit signed integer
//! - [`Value::Float`]: IEEE single precision
//! - [`Value::Double`]: IEEE double precision (floating literals, `%f` arguments)

use super::CType;

/// Runtime values in the interpreter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Char(i8),
    Int(i32),
    Float(f32),
    Double(f64),
}

impl Value {
    /// The C type this value carries
    pub fn ctype(&self) -> CType {
        match self {
            Value::Char(_) => CType::Char,
            Value::Int(_) => CType::Int,
            Value::Float(_) => CType::Float,
            Value::Double(_) => CType::Double,
        }
    }

    /// Zero of the given type
    pub fn zero_of(ty: CType) -> Self {
        match ty {
            CType::Char => Value::Char(0),
            CType::Int => Value::Int(0),
            CType::Float => Value::Float(0.0),
            CType::Double => Value::Double(0.0),
        }
    }

    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the char value, returns None if not a Char
    pub fn as_char(&self) -> Option<i8> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Get the float value, returns None if not a Float
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Get the double value, returns None if not a Double
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(x) => Some(*x),
            _ => None,
        }
    }

    /// Convert to `target` the way a C cast or store would
    ///
    /// Integer narrowing keeps the low bits. Floating to integer truncates
    /// toward zero, saturating at the target range (NaN becomes 0). Integer
    /// and double to float round to nearest.
    pub fn convert(self, target: CType) -> Value {
        match target {
            CType::Char => match self {
                Value::Char(_) => self,
                Value::Int(n) => Value::Char(n as i8),
                Value::Float(x) => Value::Char((x as i32) as i8),
                Value::Double(x) => Value::Char((x as i32) as i8),
            },
            CType::Int => match self {
                Value::Char(c) => Value::Int(c as i32),
                Value::Int(_) => self,
                Value::Float(x) => Value::Int(x as i32),
                Value::Double(x) => Value::Int(x as i32),
            },
            CType::Float => match self {
                Value::Char(c) => Value::Float(c as f32),
                Value::Int(n) => Value::Float(n as f32),
                Value::Float(_) => self,
                Value::Double(x) => Value::Float(x as f32),
            },
            CType::Double => Value::Double(self.to_f64()),
        }
    }

    /// Widen any value to f64 without rounding
    pub(crate) fn to_f64(self) -> f64 {
        match self {
            Value::Char(c) => c as f64,
            Value::Int(n) => n as f64,
            Value::Float(x) => x as f64,
            Value::Double(x) => x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrowing_keeps_low_bits() {
        assert_eq!(Value::Int(10812).convert(CType::Char), Value::Char(60));
        assert_eq!(Value::Int(208).convert(CType::Char), Value::Char(-48));
        assert_eq!(Value::Char(-48).convert(CType::Int), Value::Int(-48));
    }

    #[test]
    fn test_float_to_int_truncates() {
        assert_eq!(Value::Float(9.6).convert(CType::Int), Value::Int(9));
        assert_eq!(Value::Float(-3.2).convert(CType::Int), Value::Int(-3));
        assert_eq!(Value::Double(f64::NAN).convert(CType::Int), Value::Int(0));
        assert_eq!(Value::Double(1e12).convert(CType::Int), Value::Int(i32::MAX));
    }

    #[test]
    fn test_double_literal_rounds_to_float() {
        let v = Value::Double(2.03).convert(CType::Float);
        assert_eq!(v, Value::Float(2.03_f32));
        assert_eq!(v.ctype(), CType::Float);
    }
}
