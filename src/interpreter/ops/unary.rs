//! Increment and decrement

use crate::ast::{BinOp, UnOp};
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::ops::binary::apply_binary;
use crate::memory::value::Value;

impl Interpreter {
    pub(crate) fn evaluate_inc_dec_op(
        &mut self,
        op: UnOp,
        target: &str,
    ) -> Result<Value, RuntimeError> {
        use UnOp::*;
        let current_val = self.frame.get(target)?;
        let one = Value::Int(1);

        let new_val = match op {
            PreInc | PostInc => apply_binary(BinOp::Add, current_val, one)?,
            PreDec | PostDec => apply_binary(BinOp::Sub, current_val, one)?,
        };

        let stored = self.frame.set(target, new_val)?;

        match op {
            PreInc | PreDec => Ok(stored),
            PostInc | PostDec => Ok(current_val),
        }
    }
}
