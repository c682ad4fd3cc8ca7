use crate::{
    environment::prelude::{Environment, Mutability, Variable},
    lexer::prelude::{lex_line, Lexer, Spanned, Token},
    utils::prelude::SrcSpan
};
use super::error::{parse_error, ParseError, ParseErrorType};

/// Recursive-descent evaluator. Every precedence level folds its operands
/// left to right:
///
/// ```text
/// Expression := Term    ( '|' Term )*
/// Term       := Subterm ( '^' Subterm )*
/// Subterm    := Primary ( '&' Primary )*
/// Primary    := Integer | Name | '~' Primary | '!' Primary | '(' Expression ')'
/// ```
pub struct Parser<'a, T: Iterator<Item = (u32, char)>> {
    lexer: &'a mut Lexer<T>,
    environment: &'a mut Environment,
}

impl<'a, T: Iterator<Item = (u32, char)>> Parser<'a, T> {
    pub fn new(lexer: &'a mut Lexer<T>, environment: &'a mut Environment) -> Self {
        Self {
            lexer,
            environment,
        }
    }

    fn next_token(&mut self) -> Result<Spanned, ParseError> {
        Ok(self.lexer.get()?)
    }

    fn putback(&mut self, token: Spanned) -> Result<(), ParseError> {
        Ok(self.lexer.putback(token)?)
    }

    /// Runs one statement. Declarations and assignments evaluate to 0.
    pub fn parse(&mut self) -> Result<u32, ParseError> {
        let token = self.next_token()?;

        match token.1 {
            Token::Let | Token::Const => {
                self.putback(token)?;
                self.define_variable()?;

                Ok(0)
            },
            Token::Set => {
                self.set_variable()?;

                Ok(0)
            },
            _ => {
                self.putback(token)?;

                self.expression()
            }
        }
    }

    pub fn expression(&mut self) -> Result<u32, ParseError> {
        let mut left = self.term()?;

        loop {
            let token = self.next_token()?;

            match token.1 {
                Token::BitwiseOr => left |= self.term()?,
                _ => {
                    self.putback(token)?;

                    return Ok(left);
                }
            }
        }
    }

    pub fn term(&mut self) -> Result<u32, ParseError> {
        let mut left = self.subterm()?;

        loop {
            let token = self.next_token()?;

            match token.1 {
                Token::BitwiseXor => left ^= self.subterm()?,
                _ => {
                    self.putback(token)?;

                    return Ok(left);
                }
            }
        }
    }

    pub fn subterm(&mut self) -> Result<u32, ParseError> {
        let mut left = self.primary()?;

        loop {
            let token = self.next_token()?;

            match token.1 {
                Token::BitwiseAnd => left &= self.primary()?,
                _ => {
                    self.putback(token)?;

                    return Ok(left);
                }
            }
        }
    }

    pub fn primary(&mut self) -> Result<u32, ParseError> {
        let (start, token, end) = self.next_token()?;

        match token {
            Token::Integer(value) => Ok(value),
            Token::Name(name) => self.environment.lookup(&name)
                .map_err(|err| ParseError {
                    error: err.into(),
                    span: SrcSpan::from(start, end)
                }),
            Token::BitwiseNot => Ok(!self.primary()?),
            Token::LogicalNot => Ok(u32::from(self.primary()? == 0)),
            Token::LeftParen => {
                let value = self.expression()?;

                match self.next_token()? {
                    (_, Token::RightParen, _) => Ok(value),
                    (found_start, found, found_end) => parse_error(
                        ParseErrorType::RightParenExpected { found },
                        SrcSpan::from(start, end).to(SrcSpan::from(found_start, found_end))
                    )
                }
            },
            found => parse_error(
                ParseErrorType::PrimaryExpected { found },
                SrcSpan::from(start, end)
            )
        }
    }

    fn define_variable(&mut self) -> Result<(), ParseError> {
        let (_, keyword, _) = self.next_token()?;

        let mutability = match keyword {
            Token::Let => Mutability::Mutable,
            _ => Mutability::Immutable,
        };

        let (name, span) = self.expect_name()?;

        if self.environment.contains(&name) {
            return parse_error(ParseErrorType::VariableAlreadyDefined { name }, span);
        }

        let value = self.expect_value()?;

        self.environment.declare(name, Variable { mutability, value })
            .map_err(|err| ParseError { error: err.into(), span })
    }

    fn set_variable(&mut self) -> Result<(), ParseError> {
        let (name, span) = self.expect_name()?;

        if !self.environment.contains(&name) {
            return parse_error(ParseErrorType::UndefinedVariable { name }, span);
        }

        let value = self.expect_value()?;

        self.environment.set(&name, value)
            .map_err(|err| ParseError { error: err.into(), span })
    }

    fn expect_name(&mut self) -> Result<(String, SrcSpan), ParseError> {
        match self.next_token()? {
            (start, Token::Name(name), end) => Ok((name, SrcSpan::from(start, end))),
            (start, found, end) => parse_error(
                ParseErrorType::VariableExpected { found },
                SrcSpan::from(start, end)
            )
        }
    }

    /// Integer literal of a declaration, optionally preceded by `=`.
    fn expect_value(&mut self) -> Result<u32, ParseError> {
        let token = match self.next_token()? {
            (_, Token::Assign, _) => self.next_token()?,
            token => token
        };

        match token {
            (_, Token::Integer(value), _) => Ok(value),
            (start, found, end) => parse_error(
                ParseErrorType::ValueExpected { found },
                SrcSpan::from(start, end)
            )
        }
    }
}

/// Evaluates every statement of `src` and returns the value of the last one.
pub fn evaluate(src: &str, environment: &mut Environment) -> Result<u32, ParseError> {
    let mut lexer = lex_line(src);
    let mut value = 0;

    loop {
        let token = lexer.get()?;

        if token.1 == Token::Eof {
            return Ok(value);
        }

        lexer.putback(token)?;
        value = Parser::new(&mut lexer, environment).parse()?;
    }
}
