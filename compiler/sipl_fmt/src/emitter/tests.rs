use super::*;

#[test]
fn test_string_emitter_basic() {
    let mut emitter = StringEmitter::new();
    emitter.emit("x");
    emitter.emit_space();
    emitter.emit(":=");
    emitter.emit_space();
    emitter.emit("1");
    assert_eq!(emitter.as_str(), "x := 1");
}

#[test]
fn test_string_emitter_indent_and_newline() {
    let mut emitter = StringEmitter::with_capacity(32);
    emitter.emit("begin");
    emitter.emit_newline();
    emitter.emit_indent(4);
    emitter.emit("x := 1");
    emitter.ensure_trailing_newline();
    emitter.ensure_trailing_newline();
    assert_eq!(emitter.output(), "begin\n    x := 1\n");
}
