//! Memory model for the demonstration
//!
//! This module provides the core scalar abstractions:
//! - [`CType`]: the C scalar types the demo touches
//! - [`value`]: tagged runtime values ([`value::Value`])
//! - [`stack`]: the single local frame holding the demo's variables
//!
//! # Type Sizes
//!
//! Sizes are fixed and platform-independent:
//! - `char`: 1 byte, signed
//! - `int`: 4 bytes
//! - `float`: 4 bytes (IEEE single)
//! - `double`: 8 bytes (IEEE double)

pub mod stack;
pub mod value;

use std::fmt;

/// Scalar C types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CType {
    Char,
    Int,
    Float,
    Double,
}

impl CType {
    /// Conversion rank used by the usual arithmetic conversions
    pub fn rank(self) -> u8 {
        match self {
            CType::Char => 0,
            CType::Int => 1,
            CType::Float => 2,
            CType::Double => 3,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, CType::Char | CType::Int)
    }

    pub fn is_floating(self) -> bool {
        matches!(self, CType::Float | CType::Double)
    }

    /// Size of the type in bytes
    pub fn size(self) -> usize {
        match self {
            CType::Char => 1,
            CType::Int | CType::Float => 4,
            CType::Double => 8,
        }
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CType::Char => "char",
            CType::Int => "int",
            CType::Float => "float",
            CType::Double => "double",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        assert!(CType::Char.rank() < CType::Int.rank());
        assert!(CType::Int.rank() < CType::Float.rank());
        assert!(CType::Float.rank() < CType::Double.rank());
    }

    #[test]
    fn test_classification() {
        assert!(CType::Char.is_integer());
        assert!(!CType::Int.is_floating());
        assert!(CType::Float.is_floating());
        assert_eq!(CType::Double.size(), 8);
        assert_eq!(CType::Char.to_string(), "char");
    }
}
