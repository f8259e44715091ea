//! # Introduction
//!
//! `promotion-demo` prints what C's arithmetic, relational, logical,
//! assignment and increment/decrement operators produce for a fixed handful of
//! `char`, `int` and `float` operands and their mixed pairings.
//!
//! Rust has no implicit numeric promotion, so every operand is a tagged
//! [`memory::value::Value`] and every operator applies C's conversion rules
//! explicitly before computing.
//!
//! ## Execution pipeline
//!
//! ```text
//! demo::program() → Interpreter → MockTerminal → stdout
//! ```
//!
//! 1. [`demo`]: the fixed statement list, built on [`ast`].
//! 2. [`interpreter`]: runs the statements once, top to bottom, evaluating
//!    operators under integer promotion and the usual arithmetic conversions.
//! 3. [`memory`]: scalar types, tagged values and the single local frame.
//! 4. [`terminal`]: captures `printf` output as raw bytes and renders it.
//!
//! ## Supported C subset
//!
//! Types: `char`, `int`, `float` (and `double` for literals and `%f`).
//! Operators: `* / % + -`, `< <= > >= == !=`, `&& ||`, `= *= /= %= += -=`,
//! prefix and postfix `++ --`.
//! Built-ins: `printf` with `%c`, `%d`, `%f`.

pub mod ast;
pub mod cli;
pub mod demo;
pub mod interpreter;
pub mod logging;
pub mod memory;
pub mod terminal;
