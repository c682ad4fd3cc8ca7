use crate::{
    environment::prelude::EnvironmentError,
    lexer::prelude::{LexicalError, StreamError, Token},
    utils::prelude::SrcSpan
};

/// Broad class of a statement failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Syntax,
    Name,
    StreamState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    PrimaryExpected { found: Token },
    RightParenExpected { found: Token },
    VariableExpected { found: Token },
    ValueExpected { found: Token },
    UndefinedVariable { name: String },
    VariableAlreadyDefined { name: String },
    ImmutableVariable { name: String },
    LexError { error: LexicalError },
    StreamState { error: StreamError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match &self.error {
            ParseErrorType::LexError { .. } => ErrorKind::Lex,
            ParseErrorType::PrimaryExpected { .. }
            | ParseErrorType::RightParenExpected { .. }
            | ParseErrorType::VariableExpected { .. }
            | ParseErrorType::ValueExpected { .. } => ErrorKind::Syntax,
            ParseErrorType::UndefinedVariable { .. }
            | ParseErrorType::VariableAlreadyDefined { .. }
            | ParseErrorType::ImmutableVariable { .. } => ErrorKind::Name,
            ParseErrorType::StreamState { .. } => ErrorKind::StreamState,
        }
    }

    /// One line summary shown by the session.
    pub fn message(&self) -> String {
        match &self.error {
            ParseErrorType::UndefinedVariable { name } => format!("undefined variable `{name}`"),
            ParseErrorType::VariableAlreadyDefined { name } => format!("variable `{name}` is already defined"),
            ParseErrorType::ImmutableVariable { name } => format!("can't set const variable `{name}`"),
            _ => self.details().0.to_string()
        }
    }

    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::PrimaryExpected { found } => {
                ("primary expected", vec![
                    format!("Found {}, expected an Integer, a Name, `~`, `!` or `(`", found.describe())
                ])
            },
            ParseErrorType::RightParenExpected { found } => {
                ("')' expected", vec![format!("Found {}", found.describe())])
            },
            ParseErrorType::VariableExpected { found } => {
                ("name of variable expected", vec![format!("Found {}", found.describe())])
            },
            ParseErrorType::ValueExpected { found } => {
                ("value of variable expected", vec![
                    format!("Found {}, expected an Integer literal", found.describe())
                ])
            },
            ParseErrorType::UndefinedVariable { .. } => ("undefined variable", vec![]),
            ParseErrorType::VariableAlreadyDefined { .. } => ("variable is already defined", vec![]),
            ParseErrorType::ImmutableVariable { .. } => ("can't set const variable", vec![]),
            ParseErrorType::LexError { error } => error.details(),
            ParseErrorType::StreamState { error } => error.details(),
        }
    }
}

impl From<LexicalError> for ParseError {
    fn from(error: LexicalError) -> Self {
        Self {
            span: error.location,
            error: ParseErrorType::LexError { error }
        }
    }
}

impl From<StreamError> for ParseError {
    fn from(error: StreamError) -> Self {
        Self {
            span: error.location,
            error: ParseErrorType::StreamState { error }
        }
    }
}

impl From<EnvironmentError> for ParseErrorType {
    fn from(error: EnvironmentError) -> Self {
        match error {
            EnvironmentError::UndefinedVariable { name } => ParseErrorType::UndefinedVariable { name },
            EnvironmentError::VariableAlreadyDefined { name } => ParseErrorType::VariableAlreadyDefined { name },
            EnvironmentError::ImmutableVariable { name } => ParseErrorType::ImmutableVariable { name },
        }
    }
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
