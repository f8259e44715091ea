//! Built-in function implementations
//!
//! # Supported Built-ins
//!
//! - `printf(format, ...)`: formatted output to the captured terminal
//!
//! # Implementation Notes
//!
//! - Format specifiers: `%c`, `%d`, `%f`, `%%`
//! - Output is bytes, not text: `%c` writes the low byte of its argument as-is,
//!   exactly what C's stdio would hand to the terminal
//! - An argument whose type does not match its conversion is converted to the
//!   conversion's type (`int` for `%c`/`%d`, `double` for `%f`)

use crate::ast::Expr;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;
use crate::memory::CType;

impl Interpreter {
    pub(crate) fn builtin_printf(
        &mut self,
        format: &str,
        args: &[Expr],
    ) -> Result<Value, RuntimeError> {
        let mut arg_values = Vec::with_capacity(args.len());
        for arg in args {
            arg_values.push(self.evaluate_expr(arg)?);
        }

        let output = format_printf(format, &arg_values)?;
        let written = output.len();
        self.terminal.print(&output);

        Ok(Value::Int(written as i32))
    }
}

/// Render a printf format string with already-evaluated arguments
pub fn format_printf(format: &str, args: &[Value]) -> Result<Vec<u8>, RuntimeError> {
    let mut output = Vec::with_capacity(format.len() + 16);
    let mut chars = format.chars();
    let mut arg_iter = args.iter();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            let mut buf = [0u8; 4];
            output.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            continue;
        }

        let Some(spec) = chars.next() else {
            return Err(RuntimeError::InvalidPrintfFormat {
                message: "Format string ends with a lone '%'".to_string(),
            });
        };

        if spec == '%' {
            output.push(b'%');
            continue;
        }

        let arg = arg_iter
            .next()
            .ok_or_else(|| RuntimeError::InvalidPrintfFormat {
                message: format!("Not enough arguments for %{}", spec),
            })?;

        match spec {
            'c' => output.push(int_arg(*arg) as u8),
            'd' => output.extend_from_slice(int_arg(*arg).to_string().as_bytes()),
            'f' => output.extend_from_slice(format_fixed(double_arg(*arg)).as_bytes()),
            _ => {
                return Err(RuntimeError::InvalidPrintfFormat {
                    message: format!("Unsupported format specifier: %{}", spec),
                });
            }
        }
    }

    let extra = arg_iter.count();
    if extra > 0 {
        return Err(RuntimeError::InvalidPrintfFormat {
            message: format!("{} argument(s) not consumed by format string", extra),
        });
    }

    Ok(output)
}

#[inline]
fn int_arg(value: Value) -> i32 {
    value.convert(CType::Int).as_int().unwrap_or_default()
}

#[inline]
fn double_arg(value: Value) -> f64 {
    value.convert(CType::Double).as_double().unwrap_or_default()
}

/// `%f`: six decimals, C spellings for the non-finite values
pub fn format_fixed(x: f64) -> String {
    if x.is_nan() {
        if x.is_sign_negative() { "-nan" } else { "nan" }.to_string()
    } else if x.is_infinite() {
        if x < 0.0 { "-inf" } else { "inf" }.to_string()
    } else {
        format!("{:.6}", x)
    }
}
