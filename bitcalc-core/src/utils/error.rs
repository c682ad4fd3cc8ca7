use std::path::PathBuf;

use termcolor::Buffer;
use thiserror::Error;

use crate::{
    lexer::prelude::Token,
    parser::prelude::{ErrorKind, ParseError, ParseErrorType},
};
use super::diagnostic::{Diagnostic, Label, Level, Location};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("{}", .error.message())]
    Statement {
        path: PathBuf,
        line: usize,
        src: String,
        error: ParseError
    },
    #[error("IO operation failed: {err}")]
    StdIo {
        err: std::io::ErrorKind
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::StdIo { err: err.kind() }
    }
}

impl Error {
    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8(nocolor.into_inner()).expect("Error printing produced invalid utf8")
    }

    pub fn pretty(&self, buf: &mut Buffer) {
        for diagnostic in self.to_diagnostics() {
            diagnostic.write(buf);
        }
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Statement { path, line, src, error } => {
                let (label, extra) = error.details();

                let title = match error.kind() {
                    ErrorKind::Lex => "Lexical error",
                    ErrorKind::Syntax => "Syntax error",
                    ErrorKind::Name => "Name error",
                    ErrorKind::StreamState => "Token stream error",
                };

                let hint = match &error.error {
                    ParseErrorType::ImmutableVariable { name } => {
                        Some(format!("declare `{name}` with `let` to allow `set`"))
                    },
                    ParseErrorType::UndefinedVariable { name } => {
                        Some(format!("declare it first: `let {name} 0`"))
                    },
                    ParseErrorType::PrimaryExpected { found: Token::Eof } => {
                        Some("the statement ended before an operand".into())
                    },
                    _ => None
                };

                vec![Diagnostic {
                    title: title.into(),
                    text: extra.join("\n"),
                    hint,
                    level: Level::Error,
                    location: Some(Location {
                        src,
                        name: format!("{}:{}", path.display(), line),
                        label: Label {
                            text: Some(label.to_string()),
                            span: error.span,
                        },
                        extra_labels: vec![],
                    }),
                }]
            },
            Error::StdIo { err } => {
                vec![Diagnostic {
                    title: "Standard IO error".into(),
                    text: format!("{err}"),
                    hint: None,
                    level: Level::Error,
                    location: None,
                }]
            }
        }
    }
}
