use crate::utils::prelude::SrcSpan;

use super::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorType {
    UnrecognizedToken { tok: char },
    InvalidIdentifier,
    MissingDigits { radix: u32 },
    DigitOutOfRadix { radix: u32 },
    IntegerTooLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexicalErrorType::UnrecognizedToken { tok } => {
                ("unrecognized token", vec![format!("Don't know what to do with `{tok}`")])
            },
            LexicalErrorType::InvalidIdentifier => {
                ("invalid identifier", vec![
                    "Names may contain only letters, digits and `_`".to_string()
                ])
            },
            LexicalErrorType::MissingDigits { radix } => {
                ("missing digits after radix prefix", vec![
                    format!("Expected at least one base {radix} digit")
                ])
            },
            LexicalErrorType::DigitOutOfRadix { radix } => {
                ("digit out of radix", vec![
                    format!("The literal contains a digit that is not valid in base {radix}")
                ])
            },
            LexicalErrorType::IntegerTooLarge => {
                ("integer literal is too large", vec![])
            }
        }
    }
}

/// Misuse of the single token pushback buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamError {
    pub buffered: Token,
    pub location: SrcSpan
}

impl StreamError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        ("buffer not empty", vec![
            format!("Token {} is still waiting to be read", self.buffered.describe())
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalWarning {
    /// Literal does not fit in 32 bits and only its low bits were kept.
    LiteralTruncated {
        location: SrcSpan,
        literal: u64,
        value: u32,
    },
}

impl LexicalWarning {
    pub fn location(&self) -> SrcSpan {
        match self {
            LexicalWarning::LiteralTruncated { location, .. } => *location,
        }
    }
}
