use std::{io::Cursor, rc::Rc};

use crate::{
    environment::prelude::Variable,
    lexer::prelude::LexicalWarning,
    utils::prelude::{Error, VectorWarningEmitterIO, Warning, WarningEmitter}
};

use super::prelude::{format_binary, Control, ErrorStyle, Session};

fn run(input: &str) -> Result<(Session, String), Error> {
    let mut session = Session::new(WarningEmitter::null());
    let mut out = vec![];

    session.run(Cursor::new(input), &mut out, None)?;

    Ok((session, String::from_utf8(out).expect("utf8 output")))
}

#[test]
fn test_print_commands() -> Result<(), Error> {
    let (session, out) = run("0b1010 | 0x5;\n:\n")?;

    assert_eq!(out, "= 15\n= 1111\n");
    assert_eq!(session.last_value(), 15);

    Ok(())
}

#[test]
fn test_initial_value() -> Result<(), Error> {
    let (_, out) = run(";\n")?;
    assert_eq!(out, "= 0\n");

    // The binary form of zero has no digits.
    let (_, out) = run(":\n")?;
    assert_eq!(out, "= \n");

    Ok(())
}

#[test]
fn test_error_recovery() -> Result<(), Error> {
    let (session, out) = run("1+2\n1|2;\n")?;

    assert_eq!(out, "error: unrecognized token\n= 3\n");
    assert_eq!(session.last_value(), 3);

    Ok(())
}

#[test]
fn test_failed_statement_keeps_last_value() -> Result<(), Error> {
    let (_, out) = run("6\n(1|2\n;\nset nope 1\n;\n")?;

    assert_eq!(out, "error: ')' expected\n= 6\nerror: undefined variable `nope`\n= 6\n");

    Ok(())
}

#[test]
fn test_rest_of_line_is_dropped_after_error() -> Result<(), Error> {
    let (_, out) = run("5 ) 7;\n;\n")?;

    assert_eq!(out, "error: primary expected\n= 5\n");

    Ok(())
}

#[test]
fn test_variables() -> Result<(), Error> {
    let input = r#"
        let x 5
        x;
        const y = 3
        set y 1
        let x 2
        set x 0b11 x & y :
    "#;

    let (session, out) = run(input)?;

    assert_eq!(out, "= 5\nerror: can't set const variable `y`\nerror: variable `x` is already defined\n= 11\n");
    assert_eq!(session.environment().get("x"), Some(&Variable::mutable(3)));
    assert_eq!(session.environment().get("y"), Some(&Variable::immutable(3)));

    Ok(())
}

#[test]
fn test_declaration_resets_last_value() -> Result<(), Error> {
    let (_, out) = run("7\nlet a 1;\n")?;

    assert_eq!(out, "= 0\n");

    Ok(())
}

#[test]
fn test_quit() -> Result<(), Error> {
    let (session, out) = run("1; q 2;\n3;\n")?;

    assert_eq!(out, "= 1\n");
    assert_eq!(session.last_value(), 1);

    Ok(())
}

#[test]
fn test_undecodable_line_is_a_statement_error() -> Result<(), Error> {
    let mut session = Session::new(WarningEmitter::null());
    let mut out = vec![];

    session.run(Cursor::new(&b"5;\n\xff\n1|2;\n"[..]), &mut out, None)?;

    assert_eq!(
        String::from_utf8(out).expect("utf8 output"),
        "= 5\nerror: unrecognized token\n= 3\n"
    );
    assert_eq!(session.last_value(), 3);

    Ok(())
}

#[test]
fn test_crlf_and_prompt() -> Result<(), Error> {
    let mut session = Session::new(WarningEmitter::null());
    let mut out = vec![];

    session.run(Cursor::new("0xF;\r\n"), &mut out, Some(">> "))?;

    assert_eq!(String::from_utf8(out).expect("utf8 output"), ">> = 15\n>> ");

    Ok(())
}

#[test]
fn test_execute_line_control() -> Result<(), Error> {
    let mut session = Session::new(WarningEmitter::null());
    let mut out = vec![];

    assert_eq!(session.execute_line("let a 4 a|1", &mut out)?, Control::Continue);
    assert_eq!(session.execute_line("  q  ", &mut out)?, Control::Quit);
    assert_eq!(session.last_value(), 5);
    assert!(out.is_empty());

    Ok(())
}

#[test]
fn test_pretty_errors() -> Result<(), Error> {
    let mut session = Session::new(WarningEmitter::null())
        .with_path("calc.bit")
        .with_style(ErrorStyle::Pretty);
    let mut out = vec![];

    session.execute_line("1 | 2", &mut out)?;
    session.execute_line("const y 3 set y 4", &mut out)?;

    let out = String::from_utf8(out).expect("utf8 output");

    assert!(out.contains("Name error"), "{out}");
    assert!(out.contains("calc.bit:2"), "{out}");
    assert!(out.contains("can't set const variable"), "{out}");
    assert!(out.contains("declare `y` with `let`"), "{out}");

    Ok(())
}

#[test]
fn test_truncation_warning() -> Result<(), Error> {
    let emitter = Rc::new(VectorWarningEmitterIO::new());
    let mut session = Session::new(WarningEmitter::new(emitter.clone()));
    let mut out = vec![];

    session.run(Cursor::new("1\n0x1_0000_0001;\n"), &mut out, None)?;

    assert_eq!(String::from_utf8(out).expect("utf8 output"), "= 1\n");
    assert_eq!(session.warning_count(), 1);

    let warning = emitter.pop().expect("one warning");
    assert!(emitter.take().is_empty());

    let Warning::Lexical { line, warning, .. } = &warning;
    assert_eq!(*line, 2);
    assert!(matches!(warning, LexicalWarning::LiteralTruncated { literal: 0x1_0000_0001, value: 1, .. }));

    Ok(())
}

#[test]
fn test_format_binary() {
    assert_eq!(format_binary(0), "");
    assert_eq!(format_binary(1), "1");
    assert_eq!(format_binary(6), "110");
    assert_eq!(format_binary(u32::MAX), "1".repeat(32));
}
