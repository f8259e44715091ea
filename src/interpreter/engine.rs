//! Linear executor
//!
//! [`Interpreter`] runs a [`Program`] once, top to bottom. There is no control
//! flow: each statement is a declaration, an expression evaluated for its side
//! effects, or a `printf` call whose output lands in a [`MockTerminal`].

use crate::ast::{Expr, Program, Stmt};
use crate::interpreter::errors::RuntimeError;
use crate::memory::stack::Frame;
use crate::memory::value::Value;
use crate::terminal::MockTerminal;
use tracing::{debug, error, info};

#[derive(Debug)]
pub struct Interpreter {
    program: Program,
    pub(crate) frame: Frame,
    pub(crate) terminal: MockTerminal,
    statements_executed: usize,
}

impl Interpreter {
    pub fn new(program: Program) -> Self {
        Interpreter {
            program,
            frame: Frame::new(),
            terminal: MockTerminal::new(),
            statements_executed: 0,
        }
    }

    /// Execute every statement in order, stopping at the first error
    ///
    /// Locals persist after the run, so running the same interpreter twice
    /// fails on the first redeclaration.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        let program = std::mem::take(&mut self.program);
        let result = self.execute_all(&program.statements);
        self.program = program;
        result
    }

    fn execute_all(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        info!(statements = statements.len(), "Executing program");

        for (index, stmt) in statements.iter().enumerate() {
            debug!(index, ?stmt, "Executing statement");
            if let Err(e) = self.execute_statement(stmt) {
                error!(index, error = %e, "Execution halted");
                return Err(e);
            }
            self.statements_executed += 1;
        }

        info!(
            executed = self.statements_executed,
            bytes = self.terminal.len(),
            "Execution completed"
        );
        Ok(())
    }

    pub fn execute_statement(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Declare {
                name,
                var_type,
                init,
            } => {
                let init_val = self.evaluate_expr(init)?;
                let stored = self.frame.declare(name, *var_type, init_val)?;
                debug!(name = name.as_str(), %var_type, ?stored, "Declared");
                Ok(())
            }
            Stmt::Expr(expr) => self.evaluate_expr(expr).map(|_| ()),
            Stmt::Printf { format, args } => self.builtin_printf(format, args).map(|_| ()),
        }
    }

    pub fn evaluate_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::IntLiteral(n) => Ok(Value::Int(*n)),
            // Character constants have type int in C
            Expr::CharLiteral(c) => Ok(Value::Int(*c as i32)),
            Expr::FloatLiteral(x) => Ok(Value::Double(*x)),
            Expr::Variable(name) => self.frame.get(name),
            Expr::BinaryOp { op, left, right } => self.evaluate_binary_op(*op, left, right),
            Expr::Assign { op, target, value } => self.evaluate_assign_op(*op, target, value),
            Expr::UnaryOp { op, target } => self.evaluate_inc_dec_op(*op, target),
        }
    }

    pub fn terminal(&self) -> &MockTerminal {
        &self.terminal
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn statements_executed(&self) -> usize {
        self.statements_executed
    }
}
