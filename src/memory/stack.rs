//! The local frame
//!
//! The demonstration runs a single procedure, so there is exactly one frame:
//! - [`Frame`]: named locals in declaration order
//! - [`LocalVar`]: a local with its declared type and current value
//!
//! Every store converts the incoming value to the variable's declared type,
//! which is where C's implicit conversion on assignment happens.

use super::value::Value;
use super::CType;
use crate::interpreter::errors::RuntimeError;
use rustc_hash::FxHashMap;

/// Local variable in the frame
#[derive(Debug, Clone)]
pub struct LocalVar {
    pub value: Value,
    pub var_type: CType,
}

/// The procedure's activation record
#[derive(Debug, Clone, Default)]
pub struct Frame {
    locals: FxHashMap<String, LocalVar>,
    insertion_order: Vec<String>, // Track order of variable declarations
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variable, converting its initializer to the declared type
    pub fn declare(
        &mut self,
        name: &str,
        var_type: CType,
        init: Value,
    ) -> Result<Value, RuntimeError> {
        if self.locals.contains_key(name) {
            return Err(RuntimeError::Redeclaration {
                name: name.to_string(),
            });
        }

        let value = init.convert(var_type);
        self.locals
            .insert(name.to_string(), LocalVar { value, var_type });
        self.insertion_order.push(name.to_string());
        Ok(value)
    }

    /// Read a variable's current value
    pub fn get(&self, name: &str) -> Result<Value, RuntimeError> {
        self.locals
            .get(name)
            .map(|var| var.value)
            .ok_or_else(|| RuntimeError::UndefinedVariable {
                name: name.to_string(),
            })
    }

    /// Store into a variable; returns the value as stored
    pub fn set(&mut self, name: &str, value: Value) -> Result<Value, RuntimeError> {
        let var = self
            .locals
            .get_mut(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable {
                name: name.to_string(),
            })?;
        var.value = value.convert(var.var_type);
        Ok(var.value)
    }

    /// Locals in declaration order
    pub fn vars(&self) -> impl Iterator<Item = (&str, &LocalVar)> {
        self.insertion_order
            .iter()
            .filter_map(|name| self.locals.get(name).map(|var| (name.as_str(), var)))
    }

    pub fn len(&self) -> usize {
        self.insertion_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insertion_order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_converts_to_declared_type() {
        let mut frame = Frame::new();
        frame.declare("a", CType::Int, Value::Int(2)).unwrap();
        let stored = frame.set("a", Value::Float(3.2)).unwrap();
        assert_eq!(stored, Value::Int(3));
        assert_eq!(frame.get("a").unwrap(), Value::Int(3));
    }

    #[test]
    fn test_redeclaration_rejected() {
        let mut frame = Frame::new();
        frame.declare("c", CType::Char, Value::Char(b'j' as i8)).unwrap();
        let err = frame
            .declare("c", CType::Char, Value::Char(0))
            .unwrap_err();
        assert!(matches!(err, RuntimeError::Redeclaration { .. }));
    }

    #[test]
    fn test_undefined_variable() {
        let mut frame = Frame::new();
        assert!(matches!(
            frame.get("x"),
            Err(RuntimeError::UndefinedVariable { .. })
        ));
        assert!(frame.set("x", Value::Int(1)).is_err());
    }

    #[test]
    fn test_declaration_order() {
        let mut frame = Frame::new();
        frame.declare("g", CType::Int, Value::Int(4)).unwrap();
        frame.declare("c", CType::Char, Value::Int(106)).unwrap();
        frame.declare("e", CType::Float, Value::Double(2.03)).unwrap();
        let names: Vec<&str> = frame.vars().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["g", "c", "e"]);
        assert_eq!(frame.len(), 3);
        assert_eq!(frame.get("c").unwrap(), Value::Char(106));
    }
}
