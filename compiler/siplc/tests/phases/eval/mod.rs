//! Evaluator phase tests: end-to-end runs and runtime diagnostics.

use pretty_assertions::assert_eq;
use sipl_eval::EvalConfig;
use siplc::pipeline::{EXIT_OK, EXIT_RUNTIME_ERROR};
use siplc::{run_source, RunOutcome};

use crate::common::{bindings, run, runtime_error};

#[test]
fn test_reference_programs() {
    assert_eq!(bindings("program begin x := 2 + 3 * 4 end"), "{x: 14}");
    assert_eq!(
        bindings("program func f(n) = if n then 1 else 0; begin x := f(true) end"),
        "{x: 1}"
    );
    assert_eq!(bindings("program begin x := 100 / 10 / 2 end"), "{x: 20}");
}

#[test]
fn test_bindings_are_sorted() {
    assert_eq!(
        bindings("program begin zeta := 1; alpha := false; mid := 0 - 5 end"),
        "{alpha: false, mid: -5, zeta: 1}"
    );
}

#[test]
fn test_or_ignores_failing_left_operand() {
    assert_eq!(bindings("program begin x := false or true end"), "{x: true}");
    assert_eq!(bindings("program begin x := (1 / 0 = 0) or true end"), "{x: true}");
}

#[test]
fn test_block_scoping() {
    let source = "program begin\n\
                  x := 1;\n\
                  if true then begin x := 2; tmp := 3 end\n\
                  end";
    assert_eq!(bindings(source), "{x: 2}");
}

#[test]
fn test_while_loop() {
    let source = "program begin\n\
                  i := 0; total := 0;\n\
                  while i < 10 do begin i := i + 1; total := total + i end\n\
                  end";
    assert_eq!(bindings(source), "{i: 10, total: 55}");
}

#[test]
fn test_big_integers() {
    let source = "program\n\
                  func pow(b, e) = if e = 0 then 1 else b * pow(b, e - 1)\n\
                  begin x := pow(2, 100) end";
    assert_eq!(bindings(source), "{x: 1267650600228229401496703205376}");
}

#[test]
fn test_division_by_zero() {
    let diag = runtime_error("program begin\nx := 0;\ny := 10 / x\nend");
    assert_eq!(diag.headline(), "[line 3] error[E6002]: division by zero");
    assert_eq!(run("program begin y := 1 / 0 end").exit_code(), EXIT_RUNTIME_ERROR);
}

#[test]
fn test_functions_cannot_see_globals() {
    let source = "program\n\
                  func f() = g\n\
                  begin g := 1; x := f() end";
    let diag = runtime_error(source);
    assert_eq!(diag.headline(), "[line 2] error[E6003]: undefined variable 'g'");
    assert!(diag.notes.iter().any(|n| n.starts_with("call stack:")));
}

#[test]
fn test_runtime_codes() {
    let cases = [
        ("program begin x := 1 + true end", "E6001"),
        ("program begin x := nope(1) end", "E6004"),
        ("program func f(a) = a; begin x := f(1, 2) end", "E6005"),
        ("program begin x := if false then 1 end", "E6006"),
    ];
    for (source, code) in cases {
        assert_eq!(runtime_error(source).code.as_str(), code, "{source}");
    }
}

#[test]
fn test_only_first_runtime_error_reported() {
    let outcome = run("program begin x := 1 / 0; y := nope end");
    assert_eq!(outcome.diagnostics().len(), 1);
    assert_eq!(outcome.diagnostics()[0].code.as_str(), "E6002");
}

#[test]
fn test_call_depth_limit() {
    let source = "program\n\
                  func f(n) = f(n + 1)\n\
                  begin x := f(0) end";
    let config = EvalConfig::default().with_max_call_depth(Some(100));
    let RunOutcome::RuntimeError(diag) = run_source(source, &config) else {
        panic!("expected stack overflow");
    };
    assert_eq!(diag.code.as_str(), "E6007");
    assert_eq!(
        diag.message,
        "maximum call depth exceeded (limit: 100)"
    );
    let stack = diag.notes.last().unwrap();
    assert!(stack.ends_with("... 92 more"), "{stack}");
}

#[test]
fn test_success_exit_code() {
    assert_eq!(run("program begin x := true end").exit_code(), EXIT_OK);
}
