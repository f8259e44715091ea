//! Runtime error types
//!
//! This module defines [`RuntimeError`], covering everything that can go wrong
//! while evaluating operators or formatting output. All runtime errors are
//! fatal: the run stops at the first one.

use crate::memory::CType;
use thiserror::Error;

/// Runtime errors that can occur during execution
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Read of, or store to, a name that was never declared
    #[error("Undefined variable '{name}'")]
    UndefinedVariable { name: String },

    /// Second declaration of the same name
    #[error("Redeclaration of '{name}'")]
    Redeclaration { name: String },

    /// Operator not defined for the operand types (`%` on floating values)
    #[error("Invalid operands to binary {op} (have '{lhs}' and '{rhs}')")]
    InvalidOperands { op: String, lhs: CType, rhs: CType },

    /// Integer division or modulo by zero
    #[error("Division by zero: {operation}")]
    DivisionByZero { operation: String },

    /// Integer overflow in arithmetic operation
    #[error("Integer overflow in operation: {operation}")]
    IntegerOverflow { operation: String },

    /// Invalid printf format string or argument list
    #[error("Invalid printf format: {message}")]
    InvalidPrintfFormat { message: String },
}
