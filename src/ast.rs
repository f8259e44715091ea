//! Statement and expression shapes
//!
//! The demonstration is written as a flat list of [`Stmt`]s over named scalar
//! locals. There is no source text and no parser: the list is built in code by
//! [`crate::demo`].

use crate::memory::CType;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    And,
    Or,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::And => "&&",
            BinOp::Or => "||",
        }
    }
}

/// Simple and compound assignment operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    MulAssign,
    DivAssign,
    ModAssign,
    AddAssign,
    SubAssign,
}

impl AssignOp {
    /// The binary operator a compound assignment applies, `None` for plain `=`
    pub fn binary_op(self) -> Option<BinOp> {
        match self {
            AssignOp::Assign => None,
            AssignOp::MulAssign => Some(BinOp::Mul),
            AssignOp::DivAssign => Some(BinOp::Div),
            AssignOp::ModAssign => Some(BinOp::Mod),
            AssignOp::AddAssign => Some(BinOp::Add),
            AssignOp::SubAssign => Some(BinOp::Sub),
        }
    }
}

/// Increment and decrement operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    PreInc,
    PreDec,
    PostInc,
    PostDec,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntLiteral(i32),
    CharLiteral(i8),
    /// Unsuffixed floating literal, which C types as `double`
    FloatLiteral(f64),
    Variable(String),
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Assign {
        op: AssignOp,
        target: String,
        value: Box<Expr>,
    },
    UnaryOp {
        op: UnOp,
        target: String,
    },
}

impl Expr {
    pub fn var(name: &str) -> Self {
        Expr::Variable(name.to_string())
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn assign(op: AssignOp, target: &str, value: Expr) -> Self {
        Expr::Assign {
            op,
            target: target.to_string(),
            value: Box::new(value),
        }
    }

    pub fn unary(op: UnOp, target: &str) -> Self {
        Expr::UnaryOp {
            op,
            target: target.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declare {
        name: String,
        var_type: CType,
        init: Expr,
    },
    Expr(Expr),
    Printf {
        format: String,
        args: Vec<Expr>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
