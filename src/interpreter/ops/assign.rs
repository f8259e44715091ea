//! Simple and compound assignment
//!
//! `x op= y` evaluates `x op y` under the binary rules, then the store converts
//! the result back to `x`'s declared type. The expression's value is what was
//! stored, so `a *= f` on an `int a` yields an `int`.

use crate::ast::{AssignOp, Expr};
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::ops::binary::apply_binary;
use crate::memory::value::Value;

impl Interpreter {
    pub(crate) fn evaluate_assign_op(
        &mut self,
        op: AssignOp,
        target: &str,
        value: &Expr,
    ) -> Result<Value, RuntimeError> {
        let right_val = self.evaluate_expr(value)?;

        let result = match op.binary_op() {
            None => right_val,
            Some(bin_op) => {
                let current = self.frame.get(target)?;
                apply_binary(bin_op, current, right_val)?
            }
        };

        let stored = self.frame.set(target, result)?;
        tracing::trace!(target_var = target, ?stored, "assigned");
        Ok(stored)
    }
}
