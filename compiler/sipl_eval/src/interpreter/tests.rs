//! End-to-end evaluation tests: source text through lexer and parser.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use sipl_ir::StringInterner;

use crate::{evaluate, Bindings, EvalConfig, EvalError, EvalErrorKind, Value};

fn run_with(source: &str, config: &EvalConfig) -> Result<Bindings, EvalError> {
    let interner = StringInterner::new();
    let lexed = sipl_lexer::lex(source, &interner);
    assert!(!lexed.has_errors(), "lex errors: {:?}", lexed.errors);
    let parsed = sipl_parse::parse(&lexed.tokens, &interner);
    assert!(!parsed.has_errors(), "parse errors: {:?}", parsed.errors);
    let program = parsed.program.expect("program");
    evaluate(&program, &parsed.arena, &interner, config)
}

fn run(source: &str) -> Result<Bindings, EvalError> {
    run_with(source, &EvalConfig::default())
}

fn output(source: &str) -> String {
    match run(source) {
        Ok(bindings) => bindings.to_string(),
        Err(error) => panic!("runtime error: {error}"),
    }
}

fn runtime_error(source: &str) -> EvalError {
    match run(source) {
        Ok(bindings) => panic!("expected runtime error, got {bindings}"),
        Err(error) => error,
    }
}

#[test]
fn test_precedence() {
    assert_eq!(output("program begin x := 2 + 3 * 4 end"), "{x: 14}");
}

#[test]
fn test_division_is_right_associative() {
    assert_eq!(output("program begin x := 100 / 10 / 2 end"), "{x: 20}");
}

#[test]
fn test_function_call_with_boolean_argument() {
    assert_eq!(
        output("program func f(n) = if n then 1 else 0; begin x := f(true) end"),
        "{x: 1}"
    );
}

#[test]
fn test_arbitrary_precision() {
    let source = "program begin\n\
                  x := 1;\n\
                  i := 0;\n\
                  while i < 100 do begin x := x * 2; i := i + 1 end\n\
                  end";
    let bindings = run(source).unwrap();
    assert_eq!(
        bindings.get("x").map(ToString::to_string).as_deref(),
        Some("1267650600228229401496703205376")
    );
}

#[test]
fn test_or_short_circuits_on_right() {
    // The left operand would fail, but is never evaluated.
    assert_eq!(output("program begin x := undefined_var or true end"), "{x: true}");
    assert_eq!(output("program begin x := (1 / 0 = 1) or true end"), "{x: true}");
}

#[test]
fn test_and_short_circuits_on_right() {
    assert_eq!(output("program begin x := nope and false end"), "{x: false}");
}

#[test]
fn test_logical_falls_back_to_left() {
    assert_eq!(output("program begin x := true or false end"), "{x: true}");
    assert_eq!(output("program begin x := false or false end"), "{x: false}");
    assert_eq!(output("program begin x := false and true end"), "{x: false}");
    assert_eq!(output("program begin x := true and true end"), "{x: true}");
}

#[test]
fn test_right_operand_evaluated_first() {
    let error = runtime_error("program begin x := a or b end");
    assert_eq!(
        error.kind,
        EvalErrorKind::UndefinedVariable {
            name: "b".to_string()
        }
    );
}

#[test]
fn test_logical_requires_booleans() {
    let error = runtime_error("program begin x := true or 1 end");
    assert_eq!(error.message, "type mismatch in 'or': expected boolean, found integer");
    let error = runtime_error("program begin x := 1 and true end");
    assert_eq!(error.message, "type mismatch in 'and': expected boolean, found integer");
}

#[test]
fn test_division_by_zero_value() {
    let error = runtime_error("program begin z := 5 - 5; x := 1 / z end");
    assert_eq!(error.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(error.line, Some(1));
    let error = runtime_error("program begin x := true / 0 end");
    assert_eq!(error.kind, EvalErrorKind::DivisionByZero);
}

#[test]
fn test_block_scoping() {
    let source = "program begin\n\
                  x := 1;\n\
                  if true then begin x := 2; y := 3 end\n\
                  end";
    assert_eq!(output(source), "{x: 2}");
}

#[test]
fn test_while_body_scope_is_fresh_each_iteration() {
    // `seen` is created inside the body each time and never escapes it.
    let source = "program begin\n\
                  i := 0;\n\
                  while i < 3 do begin i := i + 1; seen := true end\n\
                  end";
    assert_eq!(output(source), "{i: 3}");
}

#[test]
fn test_if_statement_without_else_is_noop() {
    assert_eq!(
        output("program begin x := 1; if x > 5 then begin x := 0 end end"),
        "{x: 1}"
    );
    assert_eq!(
        output("program begin x := 1; if x > 5 then begin x := 0 end else begin x := 9 end end"),
        "{x: 9}"
    );
}

#[test]
fn test_conditions_must_be_boolean() {
    let error = runtime_error("program begin if 1 then begin x := 1 end end");
    assert_eq!(
        error.message,
        "type mismatch in condition of 'if': expected boolean, found integer"
    );
    let error = runtime_error("program begin while 0 do begin x := 1 end end");
    assert_eq!(
        error.message,
        "type mismatch in condition of 'while': expected boolean, found integer"
    );
}

#[test]
fn test_condition_error_reported_at_keyword_line() {
    let error = runtime_error("program begin\nif\n1\nthen begin x := 1 end end");
    assert_eq!(error.line, Some(2));
    let error = runtime_error("program begin\nwhile (1\n+ 1) do begin x := 1 end end");
    assert_eq!(error.line, Some(2));
    let error = runtime_error("program begin\nx := if\n0 then 1 else 2 end");
    assert_eq!(error.line, Some(2));
    // Errors raised inside the condition keep their own line.
    let error = runtime_error("program begin\nif\nundefined then begin x := 1 end end");
    assert_eq!(error.line, Some(3));
}

#[test]
fn test_if_expression_without_else() {
    assert_eq!(output("program begin x := if true then 1 end"), "{x: 1}");
    let error = runtime_error("program begin x := if false then 1 end");
    assert_eq!(error.kind, EvalErrorKind::MissingElseBranch);
}

#[test]
fn test_functions_do_not_see_globals() {
    let error = runtime_error("program func f() = g begin g := 1; x := f() end");
    assert_eq!(
        error.kind,
        EvalErrorKind::UndefinedVariable {
            name: "g".to_string()
        }
    );
}

#[test]
fn test_functions_do_not_see_caller_locals() {
    let source = "program\n\
                  func f() = local\n\
                  begin\n\
                  if true then begin local := 1; x := f() end\n\
                  end";
    let error = runtime_error(source);
    assert_eq!(error.line, Some(2));
    let backtrace = error.backtrace.expect("backtrace");
    assert_eq!(backtrace.frames()[0].name, "f");
    assert_eq!(backtrace.frames()[0].line, 4);
}

#[test]
fn test_caller_scope_restored_after_call() {
    let source = "program func sq(n) = n * n; begin n := 3; x := sq(n + 1); y := n end";
    assert_eq!(output(source), "{n: 3, x: 16, y: 3}");
}

#[test]
fn test_forward_and_mutual_recursion() {
    let source = "program\n\
                  func even(n) = if n = 0 then true else odd(n - 1);\n\
                  func odd(n) = if n = 0 then false else even(n - 1)\n\
                  begin a := even(10); b := odd(7) end";
    assert_eq!(output(source), "{a: true, b: true}");
}

#[test]
fn test_recursive_factorial() {
    let source = "program\n\
                  func fact(n) = if n <= 1 then 1 else n * fact(n - 1)\n\
                  begin x := fact(25) end";
    assert_eq!(output(source), "{x: 15511210043330985984000000}");
}

#[test]
fn test_undefined_function() {
    let error = runtime_error("program begin x := nope(1) end");
    assert_eq!(error.message, "undefined function 'nope'");
}

#[test]
fn test_undefined_function_reported_before_arguments() {
    let error = runtime_error("program begin x := nope(missing) end");
    assert_eq!(
        error.kind,
        EvalErrorKind::UndefinedFunction {
            name: "nope".to_string()
        }
    );
}

#[test]
fn test_arity_mismatch() {
    let error = runtime_error("program func f(a, b) = a + b begin x := f(1) end");
    assert_eq!(
        error.kind,
        EvalErrorKind::ArityMismatch {
            name: "f".to_string(),
            expected: 2,
            got: 1
        }
    );
    let error = runtime_error("program func f() = 1 begin x := f(2) end");
    assert_eq!(error.message, "function 'f' expects 0 arguments, got 1");
}

#[test]
fn test_arguments_evaluated_before_arity_check() {
    let error = runtime_error("program func f() = 1 begin x := f(1 / 0) end");
    assert_eq!(error.kind, EvalErrorKind::DivisionByZero);
}

#[test]
fn test_last_declaration_is_called() {
    assert_eq!(
        output("program func f() = 1; func f() = 2 begin x := f() end"),
        "{x: 2}"
    );
}

#[test]
fn test_call_depth_limit() {
    let source = "program func loop(n) = loop(n + 1) begin x := loop(0) end";
    let config = EvalConfig::default().with_max_call_depth(Some(50));
    let Err(error) = run_with(source, &config) else {
        panic!("unbounded recursion must fail");
    };
    assert_eq!(error.kind, EvalErrorKind::StackOverflow { limit: 50 });
    assert_eq!(error.backtrace.map(|b| b.len()), Some(50));
}

#[test]
fn test_deep_recursion_within_default_limit() {
    let source = "program\n\
                  func count(n) = if n = 0 then 0 else 1 + count(n - 1)\n\
                  begin x := count(5000) end";
    assert_eq!(output(source), "{x: 5000}");
}

#[test]
fn test_unary_operators() {
    assert_eq!(
        output("program begin a := -5; b := --5; c := not true; d := - a * 2 end"),
        "{a: -5, b: 5, c: false, d: 10}"
    );
}

#[test]
fn test_comparison_results() {
    assert_eq!(
        output("program begin a := 1 <> 2; b := 2 >= 3; c := 3 = 3 end"),
        "{a: true, b: false, c: true}"
    );
}

#[test]
fn test_error_line_is_innermost_node() {
    let source = "program begin\n\
                  x := 1;\n\
                  y := x +\n\
                  true\n\
                  end";
    let error = runtime_error(source);
    assert_eq!(error.line, Some(3));
    assert_eq!(error.message, "type mismatch in '+': expected integer, found boolean");
}

#[test]
fn test_first_runtime_error_aborts() {
    let error = runtime_error("program begin x := a; y := 1 / 0 end");
    assert_eq!(
        error.kind,
        EvalErrorKind::UndefinedVariable {
            name: "a".to_string()
        }
    );
}

#[test]
fn test_reassignment_changes_type() {
    assert_eq!(output("program begin x := 1; x := x = 1 end"), "{x: true}");
}

#[test]
fn test_values_compare_structurally() {
    let bindings = run("program begin x := 3 end").unwrap();
    assert_eq!(bindings.get("x"), Some(&Value::int(3)));
}
