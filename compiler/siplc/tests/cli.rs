// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Tests that drive the `sipl` binary end to end.

use std::io::Write;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

/// Write `source` to a temporary `.sipl` file.
fn script(source: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".sipl")
        .tempfile()
        .expect("create temp file");
    file.write_all(source.as_bytes()).expect("write temp file");
    file
}

fn sipl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sipl"))
        .args(args)
        .env_remove("SIPL_LOG")
        .output()
        .expect("run sipl")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn path(file: &NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}

#[test]
fn test_run_prints_bindings() {
    let file = script("program begin x := 2 + 3 * 4 end");
    let output = sipl(&["run", path(&file)]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "{x: 14}\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_bare_path_runs() {
    let file = script("program func f(n) = if n then 1 else 0; begin x := f(true) end");
    let output = sipl(&[path(&file)]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "{x: 1}\n");
}

#[test]
fn test_syntax_error_exit_code() {
    let file = script("program begin x := 1");
    let output = sipl(&["run", path(&file), "--color=never"]);
    assert_eq!(output.status.code(), Some(65));
    assert_eq!(stdout(&output), "");
    assert_eq!(
        stderr(&output),
        "[line 1] error[E1001] at end: expected 'end' after block\n"
    );
}

#[test]
fn test_runtime_error_exit_code() {
    let file = script("program begin\nx := 1 / 0\nend");
    let output = sipl(&["run", "--color=never", path(&file)]);
    assert_eq!(output.status.code(), Some(70));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "[line 2] error[E6002]: division by zero\n");
}

#[test]
fn test_max_depth_flag() {
    let file = script("program func f(n) = if n = 0 then 0 else f(n - 1) begin x := f(30) end");
    let limited = sipl(&["run", path(&file), "--max-depth=10", "--color=never"]);
    assert_eq!(limited.status.code(), Some(70));
    assert!(stderr(&limited).contains("error[E6007]"));

    let roomy = sipl(&["run", path(&file), "--max-depth=100"]);
    assert_eq!(roomy.status.code(), Some(0));
    assert_eq!(stdout(&roomy), "{x: 0}\n");

    let unbounded = sipl(&["run", path(&file), "--max-depth=none"]);
    assert_eq!(unbounded.status.code(), Some(64));
}

#[test]
fn test_runtime_error_is_one_line() {
    let file = script("program func f(n) = f(n + 1) begin x := f(0) end");
    let output = sipl(&["run", path(&file), "--max-depth=20", "--color=never"]);
    assert_eq!(output.status.code(), Some(70));
    let text = stderr(&output);
    assert_eq!(text.lines().count(), 1, "{text}");
    assert!(text.starts_with("[line 1] error[E6007]"), "{text}");

    let verbose = sipl(&["run", path(&file), "--max-depth=20", "--color=never", "--notes"]);
    assert!(stderr(&verbose).contains("call stack:"));
}

#[test]
fn test_json_output() {
    let ok = script("program begin b := true; a := 7 end");
    let output = sipl(&["run", path(&ok), "--format=json"]);
    assert_eq!(stdout(&output), "{\"a\": 7, \"b\": true}\n");

    let bad = script("program begin a := undefined end");
    let output = sipl(&["run", path(&bad), "--format=json"]);
    assert_eq!(output.status.code(), Some(70));
    let json = stdout(&output);
    assert!(json.contains("\"code\": \"E6003\""), "{json}");
    assert!(json.contains("\"line\": 1"), "{json}");
}

#[test]
fn test_missing_file() {
    let output = sipl(&["run", "/nonexistent/dir/prog.sipl"]);
    assert_eq!(output.status.code(), Some(66));
    assert!(stderr(&output).starts_with("error: cannot read '/nonexistent/dir/prog.sipl'"));
}

#[test]
fn test_usage_errors() {
    assert_eq!(sipl(&[]).status.code(), Some(64));
    assert_eq!(sipl(&["frobnicate"]).status.code(), Some(64));
    assert_eq!(sipl(&["run"]).status.code(), Some(64));
    assert_eq!(sipl(&["run", "a.sipl", "--format=xml"]).status.code(), Some(64));
    assert_eq!(sipl(&["explain", "E4242"]).status.code(), Some(64));
}

#[test]
fn test_check() {
    let good = script("program begin x := 1 / 0 end");
    let output = sipl(&["check", path(&good)]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).ends_with(": no errors\n"));

    let bad = script("program begin x := @ end");
    let output = sipl(&["check", path(&bad), "--color=never"]);
    assert_eq!(output.status.code(), Some(65));
    assert!(stderr(&output).starts_with("[line 1] error[E0001] at '@': unexpected character\n"));
}

#[test]
fn test_lex() {
    let file = script("program\nbegin x := 10 end");
    let output = sipl(&["lex", path(&file)]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Program 'program' 1\n\
         Begin 'begin' 2\n\
         Ident 'x' 2\n\
         Assign ':=' 2\n\
         Number '10' 2\n\
         End 'end' 2\n\
         Eof '' 2\n"
    );
}

#[test]
fn test_parse_tree() {
    let file = script("program func f(a) = -a begin if f(1) < 0 then begin y := true end end");
    let output = sipl(&["parse", path(&file)]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "program\n\
         \x20 func f(a) [line 1]\n\
         \x20   -\n\
         \x20     var a\n\
         \x20 block\n\
         \x20   if [line 1]\n\
         \x20     <\n\
         \x20       call f\n\
         \x20         1\n\
         \x20       0\n\
         \x20     block\n\
         \x20       assign y [line 1]\n\
         \x20         true\n"
    );
}

#[test]
fn test_fmt() {
    let file = script("program begin x:=(1+2)*3; while x>0 do begin x:=x-1 end end");
    let output = sipl(&["fmt", path(&file)]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "program\n\
         begin\n\
         \x20   x := (1 + 2) * 3;\n\
         \x20   while x > 0 do begin\n\
         \x20       x := x - 1\n\
         \x20   end\n\
         end\n"
    );
}

#[test]
fn test_explain() {
    let output = sipl(&["explain", "e6002"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("# E6002"));
}

#[test]
fn test_version() {
    let output = sipl(&["--version"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("sipl "));
}
