//! The fixed demonstration sequence
//!
//! Operands are declared up front per block and stay live for the rest of the
//! run, so assignments and `++`/`--` in one block change what later blocks see.
//! Every block is a header line followed by one `LABEL = value` line per
//! operator.
//!
//! `%` and `%=` lines are left out of any block with a floating operand: C
//! rejects those expressions outright.

use rustc_hash::FxHashMap;

use crate::ast::{AssignOp, BinOp, Expr, Program, Stmt, UnOp};
use crate::memory::CType;

pub const BINARY_OPS: [(&str, BinOp); 13] = [
    ("TIMES", BinOp::Mul),
    ("DIVIDE", BinOp::Div),
    ("MOD", BinOp::Mod),
    ("PLUS", BinOp::Add),
    ("MINUS", BinOp::Sub),
    ("LESS_THAN", BinOp::Lt),
    ("LESS_OR_EQUAL", BinOp::Le),
    ("HIGHER_THAN", BinOp::Gt),
    ("HIGHER_OR_EQUAL", BinOp::Ge),
    ("EQ", BinOp::Eq),
    ("DIFF", BinOp::Ne),
    ("AND", BinOp::And),
    ("OR", BinOp::Or),
];

pub const ASSIGN_OPS: [(&str, AssignOp); 6] = [
    ("EQUALS", AssignOp::Assign),
    ("TIMESASSIGN", AssignOp::MulAssign),
    ("DIVIDEASSIGN", AssignOp::DivAssign),
    ("MODASSIGN", AssignOp::ModAssign),
    ("PLUSASSIGN", AssignOp::AddAssign),
    ("MINUSASSIGN", AssignOp::SubAssign),
];

pub const UNARY_OPS: [(&str, UnOp); 4] = [
    ("PLUSPLUS", UnOp::PostInc),
    ("MINUSMINUS", UnOp::PostDec),
    ("PLUSPLUS", UnOp::PreInc),
    ("MINUSMINUS", UnOp::PreDec),
];

/// Header line for a block, e.g. `BINARY` + `INT-CHAR`
pub fn section_header(kind: &str, pairing: &str) -> String {
    format!(
        "---------------- {} {} OPERATIONS ----------------\n",
        kind, pairing
    )
}

#[derive(Default)]
struct DemoBuilder {
    statements: Vec<Stmt>,
    types: FxHashMap<&'static str, CType>,
}

impl DemoBuilder {
    fn declare(&mut self, name: &'static str, var_type: CType, init: Expr) -> &mut Self {
        self.types.insert(name, var_type);
        self.statements.push(Stmt::Declare {
            name: name.to_string(),
            var_type,
            init,
        });
        self
    }

    fn header(&mut self, kind: &str, pairing: &str) -> &mut Self {
        self.statements.push(Stmt::Printf {
            format: section_header(kind, pairing),
            args: Vec::new(),
        });
        self
    }

    fn show(&mut self, label: &str, conversion: char, expr: Expr) {
        self.statements.push(Stmt::Printf {
            format: format!("{} = %{}\n", label, conversion),
            args: vec![expr],
        });
    }

    fn has_floating(&self, names: &[&str]) -> bool {
        names
            .iter()
            .any(|name| self.types.get(*name).is_some_and(|ty| ty.is_floating()))
    }

    fn binary_block(&mut self, pairing: &str, conversion: char, lhs: &str, rhs: &str) -> &mut Self {
        self.header("BINARY", pairing);
        let skip_mod = self.has_floating(&[lhs, rhs]);

        for (label, op) in BINARY_OPS {
            if op == BinOp::Mod && skip_mod {
                continue;
            }
            self.show(label, conversion, Expr::binary(op, Expr::var(lhs), Expr::var(rhs)));
        }
        self
    }

    fn assign_block(&mut self, pairing: &str, conversion: char, target: &str, source: &str) -> &mut Self {
        self.header("ASSIGN", pairing);
        let skip_mod = self.has_floating(&[target, source]);

        for (label, op) in ASSIGN_OPS {
            if op == AssignOp::ModAssign && skip_mod {
                continue;
            }
            self.show(label, conversion, Expr::assign(op, target, Expr::var(source)));
        }
        self
    }

    fn unary_block(&mut self, kind: &str, conversion: char, target: &str) -> &mut Self {
        self.header("UNARY", kind);
        for (label, op) in UNARY_OPS {
            self.show(label, conversion, Expr::unary(op, target));
        }
        self
    }

    fn build(self) -> Program {
        Program::new(self.statements)
    }
}

/// The complete demonstration
pub fn program() -> Program {
    let mut demo = DemoBuilder::default();

    demo.declare("g", CType::Int, Expr::IntLiteral(4))
        .declare("c", CType::Char, Expr::CharLiteral(b'j' as i8))
        .declare("d", CType::Char, Expr::CharLiteral(b'f' as i8))
        .binary_block("CHAR-CHAR", 'c', "c", "d")
        // Assigning here would clobber `c` before the unary block; the block stays empty
        .header("ASSIGN", "CHAR-CHAR")
        .unary_block("CHAR", 'c', "c");

    demo.declare("a", CType::Int, Expr::IntLiteral(2))
        .declare("b", CType::Int, Expr::IntLiteral(3))
        .binary_block("INT-INT", 'd', "a", "b")
        .assign_block("INT-INT", 'd', "a", "b")
        .unary_block("INT", 'd', "a");

    demo.declare("e", CType::Float, Expr::FloatLiteral(2.03))
        .declare("f", CType::Float, Expr::FloatLiteral(3.2))
        .binary_block("FLOAT-FLOAT", 'f', "e", "f")
        .assign_block("FLOAT-FLOAT", 'f', "e", "f")
        .unary_block("FLOAT", 'f', "e");

    let a_times_e = || Expr::binary(BinOp::Mul, Expr::var("a"), Expr::var("e"));
    demo.declare("aux1", CType::Int, a_times_e())
        .declare("aux2", CType::Float, a_times_e())
        .binary_block("INT-FLOAT", 'd', "a", "e")
        .assign_block("INT-FLOAT", 'f', "a", "f");

    demo.binary_block("INT-CHAR", 'd', "a", "c")
        .assign_block("INT-CHAR", 'd', "a", "c");

    demo.binary_block("FLOAT-CHAR", 'f', "e", "c")
        .assign_block("FLOAT-CHAR", 'f', "e", "c");

    demo.build()
}
