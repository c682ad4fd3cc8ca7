use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::{
    environment::prelude::Environment,
    lexer::prelude::{lex_line, Lexer, Token},
    parser::prelude::{ParseError, Parser},
    utils::prelude::{Error, Warning, WarningEmitter}
};

pub const PROMPT: &str = ">> ";

/// How statement errors are written to the output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStyle {
    /// `error: <message>` on a single line.
    #[default]
    Plain,
    /// Source annotated diagnostic.
    Pretty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

enum Step {
    EndOfLine,
    Quit,
    Print(String),
    Evaluated(u32),
}

/// State of one calculator run: the variable table and the last computed value.
pub struct Session {
    environment: Environment,
    last_value: u32,
    warnings: WarningEmitter,
    path: PathBuf,
    line: usize,
    style: ErrorStyle,
}

impl Session {
    pub fn new(warnings: WarningEmitter) -> Self {
        Self {
            environment: Environment::new(),
            last_value: 0,
            warnings,
            path: PathBuf::from("<stdin>"),
            line: 0,
            style: ErrorStyle::default(),
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_style(mut self, style: ErrorStyle) -> Self {
        self.style = style;
        self
    }

    pub fn last_value(&self) -> u32 {
        self.last_value
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.count()
    }

    /// Reads `input` line by line until `q` or the end of input.
    ///
    /// Statement errors are written to `out` and never end the loop; only a
    /// failure to read the input or write the output is returned.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut out: W,
        prompt: Option<&str>
    ) -> Result<(), Error> {
        let mut bytes = Vec::new();

        loop {
            if let Some(prompt) = prompt {
                write!(out, "{prompt}")?;
                out.flush()?;
            }

            bytes.clear();

            if input.read_until(b'\n', &mut bytes)? == 0 {
                out.flush()?;

                return Ok(());
            }

            // Undecodable bytes become U+FFFD and fail as a statement.
            let text = String::from_utf8_lossy(&bytes).into_owned();
            let line = text.strip_suffix('\n').unwrap_or(&text);
            let line = line.strip_suffix('\r').unwrap_or(line);

            if self.execute_line(line, &mut out)? == Control::Quit {
                out.flush()?;

                return Ok(());
            }
        }
    }

    /// Runs every command and statement of one line. The first failing
    /// statement is reported and the rest of the line is dropped.
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Control, Error> {
        self.line += 1;

        let mut lexer = lex_line(line);

        loop {
            let step = self.step(&mut lexer);

            for warning in lexer.take_warnings() {
                self.warnings.emit(Warning::Lexical {
                    path: self.path.clone(),
                    line: self.line,
                    src: line.to_string(),
                    warning
                });
            }

            match step {
                Ok(Step::EndOfLine) => return Ok(Control::Continue),
                Ok(Step::Quit) => return Ok(Control::Quit),
                Ok(Step::Print(text)) => writeln!(out, "= {text}")?,
                Ok(Step::Evaluated(value)) => self.last_value = value,
                Err(error) => {
                    self.report(error, line, out)?;

                    return Ok(Control::Continue);
                }
            }
        }
    }

    fn step<T: Iterator<Item = (u32, char)>>(&mut self, lexer: &mut Lexer<T>) -> Result<Step, ParseError> {
        let token = lexer.get()?;

        Ok(match token.1 {
            Token::Eof => Step::EndOfLine,
            Token::Quit => Step::Quit,
            Token::Print => Step::Print(self.last_value.to_string()),
            Token::BinaryPrint => Step::Print(format_binary(self.last_value)),
            _ => {
                lexer.putback(token)?;

                Step::Evaluated(Parser::new(lexer, &mut self.environment).parse()?)
            }
        })
    }

    fn report<W: Write>(&self, error: ParseError, line: &str, out: &mut W) -> Result<(), Error> {
        let error = Error::Statement {
            path: self.path.clone(),
            line: self.line,
            src: line.to_string(),
            error
        };

        match self.style {
            ErrorStyle::Plain => writeln!(out, "error: {error}")?,
            ErrorStyle::Pretty => write!(out, "{}", error.pretty_string())?,
        }

        Ok(())
    }
}

/// Binary digits without leading zeros. Zero has no digits and prints as an
/// empty string.
pub fn format_binary(mut value: u32) -> String {
    let mut digits = String::new();

    while value > 0 {
        digits.insert(0, if value % 2 == 1 { '1' } else { '0' });
        value /= 2;
    }

    digits
}
