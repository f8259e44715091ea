//! Operator evaluation with C's conversion rules
//!
//! - [`engine`]: the [`engine::Interpreter`] that runs a [`crate::ast::Program`]
//! - [`ops`]: binary, assignment and increment/decrement operators
//! - [`type_system`]: integer promotion and the usual arithmetic conversions
//! - [`builtins`]: `printf` formatting
//! - [`errors`]: [`errors::RuntimeError`]

pub mod builtins;
pub mod engine;
pub mod errors;
pub mod ops;
pub mod type_system;
