use promotion_demo::ast::{AssignOp, BinOp, Expr, Program, Stmt, UnOp};
use promotion_demo::interpreter::engine::Interpreter;
use promotion_demo::interpreter::errors::RuntimeError;
use promotion_demo::memory::value::Value;
use promotion_demo::memory::CType;

fn declare(name: &str, var_type: CType, init: Expr) -> Stmt {
    Stmt::Declare {
        name: name.to_string(),
        var_type,
        init,
    }
}

fn printf(format: &str, args: Vec<Expr>) -> Stmt {
    Stmt::Printf {
        format: format.to_string(),
        args,
    }
}

fn run(statements: Vec<Stmt>) -> Result<Interpreter, (Interpreter, RuntimeError)> {
    let mut interpreter = Interpreter::new(Program::new(statements));
    match interpreter.run() {
        Ok(()) => Ok(interpreter),
        Err(e) => Err((interpreter, e)),
    }
}

fn output_of(statements: Vec<Stmt>) -> String {
    let interpreter = run(statements).expect("Execution failed");
    interpreter.terminal().get_output().join("\n")
}

#[test]
fn test_postfix_and_prefix_char() {
    let output = output_of(vec![
        declare("c", CType::Char, Expr::CharLiteral(b'j' as i8)),
        printf("%c", vec![Expr::unary(UnOp::PostInc, "c")]),
        printf("%c", vec![Expr::unary(UnOp::PostDec, "c")]),
        printf("%c", vec![Expr::unary(UnOp::PreInc, "c")]),
        printf("%c\n", vec![Expr::unary(UnOp::PreDec, "c")]),
    ]);
    assert_eq!(output, "jkkj");
}

#[test]
fn test_char_increment_wraps() {
    let interpreter = run(vec![
        declare("c", CType::Char, Expr::IntLiteral(127)),
        Stmt::Expr(Expr::unary(UnOp::PreInc, "c")),
    ])
    .expect("Execution failed");
    assert_eq!(interpreter.frame().get("c").unwrap(), Value::Char(-128));
}

#[test]
fn test_float_increment_stays_float() {
    let interpreter = run(vec![
        declare("e", CType::Float, Expr::FloatLiteral(3.5)),
        printf("%f\n", vec![Expr::unary(UnOp::PostInc, "e")]),
    ])
    .expect("Execution failed");
    assert_eq!(interpreter.terminal().get_output(), vec!["3.500000"]);
    assert_eq!(interpreter.frame().get("e").unwrap(), Value::Float(4.5));
}

#[test]
fn test_compound_assignment_truncates_into_int() {
    let output = output_of(vec![
        declare("a", CType::Int, Expr::IntLiteral(3)),
        declare("f", CType::Float, Expr::FloatLiteral(3.2)),
        printf(
            "%d %d\n",
            vec![
                Expr::assign(AssignOp::MulAssign, "a", Expr::var("f")),
                Expr::assign(AssignOp::DivAssign, "a", Expr::var("f")),
            ],
        ),
    ]);
    // 3 * 3.2f = 9.6 -> 9, then 9 / 3.2f = 2.8125 -> 2
    assert_eq!(output, "9 2");
}

#[test]
fn test_assignment_yields_target_type() {
    let interpreter = run(vec![
        declare("e", CType::Float, Expr::FloatLiteral(0.0)),
        declare("c", CType::Char, Expr::CharLiteral(b'j' as i8)),
        Stmt::Expr(Expr::assign(AssignOp::Assign, "e", Expr::var("c"))),
    ])
    .expect("Execution failed");
    assert_eq!(interpreter.frame().get("e").unwrap(), Value::Float(106.0));
}

#[test]
fn test_logical_and_short_circuits() {
    let interpreter = run(vec![
        declare("a", CType::Int, Expr::IntLiteral(0)),
        declare("b", CType::Int, Expr::IntLiteral(5)),
        printf(
            "%d\n",
            vec![Expr::binary(
                BinOp::And,
                Expr::var("a"),
                Expr::unary(UnOp::PreInc, "b"),
            )],
        ),
    ])
    .expect("Execution failed");
    assert_eq!(interpreter.terminal().get_output(), vec!["0"]);
    assert_eq!(interpreter.frame().get("b").unwrap(), Value::Int(5));
}

#[test]
fn test_logical_or_short_circuits() {
    let interpreter = run(vec![
        declare("a", CType::Int, Expr::IntLiteral(2)),
        declare("b", CType::Int, Expr::IntLiteral(5)),
        printf(
            "%d\n",
            vec![Expr::binary(
                BinOp::Or,
                Expr::var("a"),
                Expr::unary(UnOp::PreInc, "b"),
            )],
        ),
    ])
    .expect("Execution failed");
    assert_eq!(interpreter.terminal().get_output(), vec!["1"]);
    assert_eq!(interpreter.frame().get("b").unwrap(), Value::Int(5));
}

#[test]
fn test_floating_modulo_is_rejected() {
    let (interpreter, err) = run(vec![
        declare("e", CType::Float, Expr::FloatLiteral(2.03)),
        declare("c", CType::Char, Expr::CharLiteral(b'j' as i8)),
        printf("before\n", vec![]),
        printf(
            "%f\n",
            vec![Expr::binary(BinOp::Mod, Expr::var("e"), Expr::var("c"))],
        ),
    ])
    .err()
    .expect("Expected a runtime error");

    assert_eq!(
        err.to_string(),
        "Invalid operands to binary % (have 'float' and 'char')"
    );
    // Output printed before the failure is kept
    assert_eq!(interpreter.terminal().get_output(), vec!["before"]);
    assert_eq!(interpreter.statements_executed(), 3);
}

#[test]
fn test_modulo_assign_by_zero_is_rejected() {
    let (_, err) = run(vec![
        declare("a", CType::Int, Expr::IntLiteral(7)),
        declare("z", CType::Char, Expr::IntLiteral(0)),
        Stmt::Expr(Expr::assign(AssignOp::ModAssign, "a", Expr::var("z"))),
    ])
    .err()
    .expect("Expected a runtime error");
    assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
}

#[test]
fn test_undefined_variable() {
    let (_, err) = run(vec![printf("%d\n", vec![Expr::var("missing")])])
        .err()
        .expect("Expected a runtime error");
    assert_eq!(err.to_string(), "Undefined variable 'missing'");
}

#[test]
fn test_character_constant_is_int() {
    let mut interpreter = Interpreter::new(Program::default());
    let value = interpreter
        .evaluate_expr(&Expr::CharLiteral(b'f' as i8))
        .unwrap();
    assert_eq!(value, Value::Int(102));
}
