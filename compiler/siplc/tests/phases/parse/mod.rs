//! Parser phase tests: syntax diagnostics, recovery, and the exit class.

use pretty_assertions::assert_eq;
use siplc::pipeline::EXIT_COMPILE_ERROR;

use crate::common::{compile_errors, headlines, run};

#[test]
fn test_unclosed_begin() {
    let outcome = run("program begin x := 1");
    assert_eq!(outcome.exit_code(), EXIT_COMPILE_ERROR);
    assert!(outcome.bindings().is_none());
    assert_eq!(
        headlines("program begin x := 1"),
        vec!["[line 1] error[E1001] at end: expected 'end' after block".to_string()]
    );
}

#[test]
fn test_expected_expression_at_token() {
    assert_eq!(
        headlines("program begin x := ; y := 1 end"),
        vec!["[line 1] error[E1002] at ';': expected expression".to_string()]
    );
}

#[test]
fn test_multiple_errors_reported_in_order() {
    let source = "program begin\n\
                  x := ;\n\
                  y := 2;\n\
                  3 := z;\n\
                  w := 4\n\
                  end";
    let errors = compile_errors(source);
    let summary: Vec<_> = errors
        .iter()
        .map(|d| (d.code.as_str(), d.line))
        .collect();
    assert_eq!(summary, vec![("E1002", Some(2)), ("E1003", Some(4))]);
}

#[test]
fn test_errors_prevent_evaluation() {
    // The division by zero would be a runtime error if evaluation ran.
    let errors = compile_errors("program begin x := 1 / 0; y := end");
    assert!(errors.iter().all(|d| d.code.is_compile_time()));
}

#[test]
fn test_bad_parameter_list() {
    let errors = compile_errors("program func f(a, 1) = a; begin x := 1 end");
    assert_eq!(errors[0].code.as_str(), "E1004");
    assert_eq!(
        errors[0].headline(),
        "[line 1] error[E1004] at '1': expected parameter name after ','"
    );
}

#[test]
fn test_trailing_input() {
    assert_eq!(
        headlines("program begin x := 1 end extra"),
        vec!["[line 1] error[E1005] at 'extra': expected end of input after program".to_string()]
    );
}

#[test]
fn test_missing_program_keyword() {
    let errors = compile_errors("begin x := 1 end");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code.as_str(), "E1001");
}

#[test]
fn test_lexical_and_syntax_errors_together() {
    let errors = compile_errors("program begin x := 1 @; y := end");
    let codes: Vec<_> = errors.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec!["E0001", "E1002"]);
}
