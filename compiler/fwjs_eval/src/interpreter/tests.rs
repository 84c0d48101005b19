use super::*;
use crate::print_handler::buffer_handler;
use crate::{EvalError, EvalErrorKind};
use fwjs_ir::{ExprBuilder, SharedInterner};
use pretty_assertions::assert_eq;

const NO_ARGS: [ExprId; 0] = [];

#[test]
fn print_writes_display_form_and_returns_operand() {
    let interner = SharedInterner::default();
    let mut b = ExprBuilder::new(&interner);
    let seven = b.int(7);
    let print = b.print(seven);
    let arena = b.finish();

    let handler = buffer_handler();
    let mut interpreter = InterpreterBuilder::new(&interner, arena)
        .print_handler(handler.clone())
        .build();

    assert_eq!(interpreter.eval(print), Ok(Value::int(7)));
    assert_eq!(interpreter.get_print_output(), "7\n");
    assert_eq!(handler.lines(), vec!["7"]);

    interpreter.clear_print_output();
    assert_eq!(interpreter.get_print_output(), "");
}

#[test]
fn default_handler_is_stdout() {
    let interner = SharedInterner::default();
    let arena = ExprBuilder::new(&interner).finish();
    let interpreter = Interpreter::new(&interner, arena);

    // Stdout captures nothing
    assert_eq!(interpreter.get_print_output(), "");
    assert_eq!(interpreter.max_call_depth(), Some(DEFAULT_MAX_CALL_DEPTH));
    assert_eq!(interpreter.call_depth(), 0);
    assert!(interpreter.env().is_global());
}

#[test]
fn empty_program_is_null() {
    let interner = SharedInterner::default();
    let arena = ExprBuilder::new(&interner).finish();
    let mut interpreter = Interpreter::new(&interner, arena);

    assert_eq!(interpreter.run(None), Ok(Value::Null));
    assert_eq!(interpreter.eval(ExprId::INVALID), Ok(Value::Null));
}

#[test]
fn builder_env_is_shared_with_caller() {
    let interner = SharedInterner::default();
    let mut b = ExprBuilder::new(&interner);
    let one = b.int(1);
    let decl = b.var_decl("x", one);
    let arena = b.finish();

    let globals = Environment::global();
    let mut interpreter = Interpreter::builder(&interner, arena)
        .env(globals.clone())
        .build();

    assert_eq!(interpreter.run(Some(decl)), Ok(Value::int(1)));
    assert_eq!(globals.resolve(interner.intern("x")), Some(Value::int(1)));
}

#[test]
fn block_scope_is_restored_after_error() {
    let interner = SharedInterner::default();
    let mut b = ExprBuilder::new(&interner);
    let one = b.int(1);
    let decl = b.var_decl("y", one);
    let bad = b.call(one, NO_ARGS);
    let block = b.scoped_block([Some(decl), Some(bad)]);
    let arena = b.finish();

    let mut interpreter = Interpreter::new(&interner, arena);
    let before = interpreter.env().clone();

    let result = interpreter.run(block);
    assert_eq!(
        result.map_err(EvalError::into_kind),
        Err(EvalErrorKind::NotCallable { type_name: "int" })
    );
    assert!(Environment::ptr_eq(interpreter.env(), &before));
    assert!(!before.binds_locally(interner.intern("y")));
}

#[test]
fn call_value_applies_closure() {
    let interner = SharedInterner::default();
    let mut b = ExprBuilder::new(&interner);
    let x = b.ident("x");
    let y = b.ident("y");
    let sum = b.binary(fwjs_ir::BinaryOp::Add, x, y);
    let func = b.function(&["x", "y"], sum);
    let arena = b.finish();

    let mut interpreter = Interpreter::new(&interner, arena);
    let closure = interpreter.eval(func).unwrap();

    assert_eq!(
        interpreter.call_value(&closure, vec![Value::int(2), Value::int(3)]),
        Ok(Value::int(5))
    );
    assert_eq!(
        interpreter
            .call_value(&closure, vec![Value::int(2)])
            .map_err(EvalError::into_kind),
        Err(EvalErrorKind::ArityMismatch {
            expected: 2,
            got: 1
        })
    );
    assert_eq!(
        interpreter
            .call_value(&Value::Null, Vec::new())
            .map_err(EvalError::into_kind),
        Err(EvalErrorKind::NotCallable { type_name: "null" })
    );
}

#[test]
fn call_depth_limit_is_configurable() {
    let interner = SharedInterner::default();
    let mut b = ExprBuilder::new(&interner);
    // var f = function () { f() }; f()
    let f_ref = b.ident("f");
    let recurse = b.call(f_ref, NO_ARGS);
    let func = b.function(&[], recurse);
    let decl = b.var_decl("f", func);
    let f_ref2 = b.ident("f");
    let call = b.call(f_ref2, NO_ARGS);
    let program = b.program([Some(decl), Some(call)]);
    let arena = b.finish();

    let mut interpreter = Interpreter::builder(&interner, arena)
        .max_call_depth(Some(16))
        .print_handler(buffer_handler())
        .build();

    assert_eq!(
        interpreter.run(program).map_err(EvalError::into_kind),
        Err(EvalErrorKind::StackOverflow { depth: 16 })
    );
}

#[test]
fn closure_body_uses_its_own_arena() {
    let interner = SharedInterner::default();

    // First arena defines the function
    let mut first = ExprBuilder::new(&interner);
    let n = first.ident("n");
    let ten = first.int(10);
    let body = first.binary(fwjs_ir::BinaryOp::Mul, n, ten);
    let func = first.function(&["n"], body);
    let first = first.finish();

    let globals = Environment::global();
    let mut interpreter = Interpreter::builder(&interner, first).env(globals.clone()).build();
    let closure = interpreter.eval(func).unwrap();
    assert_eq!(globals.declare(interner.intern("g"), closure), Ok(()));

    // Second arena calls it; its node ids do not line up with the first
    let mut second = ExprBuilder::new(&interner);
    let pad = second.null();
    let g = second.ident("g");
    let four = second.int(4);
    let call = second.call(g, [four]);
    let program = second.program([Some(pad), Some(call)]);
    let second = second.finish();

    let mut interpreter = Interpreter::builder(&interner, second).env(globals).build();
    assert_eq!(interpreter.run(program), Ok(Value::int(40)));
}
