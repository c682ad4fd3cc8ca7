use super::error::{LexicalError, LexicalErrorType, LexicalWarning, StreamError};
use super::token::Token;
use std::fmt::Display;
use std::num::IntErrorKind;
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

pub fn str_to_keyword(word: &str) -> Option<Token> {
	Some(match word {
		"let" => Token::Let,
		"const" => Token::Const,
		"set" => Token::Set,
		"q" => Token::Quit,

		_ => return None
	})
}

pub fn is_word_char(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || ch == '_'
}

fn is_word_start(ch: char) -> bool {
	ch.is_ascii_alphabetic() || ch == '_'
}

/// Token stream over one source of characters with a single slot of pushback.
#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	ch: Option<char>,
	input: T,
	exhausted: bool,

	buffer: Option<Spanned>,
	warnings: Vec<LexicalWarning>,
}

impl<T: Iterator<Item = (u32, char)>> Display for Lexer<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f,
			"Lexer {{\n\tposition: {},\n\tch: {:?},\n\tbuffer: {:?}\n}}",
			self.position, self.ch, self.buffer
		)
	}
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
		let mut lexer = Self {
			position: 0,
			ch: None,
			input,
			exhausted: false,

			buffer: None,
			warnings: vec![],
		};

		lexer.next_char();

		lexer
	}

	/// Returns the buffered token if there is one, otherwise scans the input.
	pub fn get(&mut self) -> LexResult {
		match self.buffer.take() {
			Some(token) => Ok(token),
			None => self.next_token()
		}
	}

	pub fn putback(&mut self, token: Spanned) -> Result<(), StreamError> {
		if let Some((start, buffered, end)) = &self.buffer {
			return Err(StreamError {
				buffered: buffered.clone(),
				location: SrcSpan::from(*start, *end)
			});
		}

		self.buffer = Some(token);

		Ok(())
	}

	pub fn take_warnings(&mut self) -> Vec<LexicalWarning> {
		std::mem::take(&mut self.warnings)
	}

	pub fn next_token(&mut self) -> LexResult {
		while matches!(self.ch, Some(ch) if ch.is_whitespace()) {
			self.next_char();
		}

		let span = match self.ch {
			Some(ch) => match ch {
				';' => self.eat_one_char(Token::Print),
				':' => self.eat_one_char(Token::BinaryPrint),
				'&' => self.eat_one_char(Token::BitwiseAnd),
				'|' => self.eat_one_char(Token::BitwiseOr),
				'^' => self.eat_one_char(Token::BitwiseXor),
				'~' => self.eat_one_char(Token::BitwiseNot),
				'!' => self.eat_one_char(Token::LogicalNot),
				'(' => self.eat_one_char(Token::LeftParen),
				')' => self.eat_one_char(Token::RightParen),
				'=' => self.eat_one_char(Token::Assign),
				'0'..='9' => {
					return self.lex_numeral();
				},
				c if is_word_start(c) => {
					return self.lex_word();
				},
				c => {
					let start_pos = self.position;
					self.next_char();

					return Err(LexicalError {
						error: LexicalErrorType::UnrecognizedToken { tok: c },
						location: SrcSpan::from(start_pos, self.position),
					});
				}
			},
			None => (self.position, Token::Eof, self.position)
		};

		Ok(span)
	}

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		match self.input.next() {
			Some((pos, next)) => {
				self.position = pos;
				self.ch = Some(next);
			},
			None => {
				if let Some(last) = ch {
					self.position += last.len_utf8() as u32;
				}

				self.ch = None;
			}
		}

		ch
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn lex_word(&mut self) -> LexResult {
		let start_pos = self.position;
		let mut word = String::new();

		while let Some(ch) = self.ch {
			if !is_word_char(ch) {
				break;
			}

			word.push(ch);
			self.next_char();
		}

		let end_pos = self.position;

		if let Some(tok) = str_to_keyword(&word) {
			return Ok((start_pos, tok, end_pos));
		}

		if !word.chars().all(is_word_char) {
			return Err(LexicalError {
				error: LexicalErrorType::InvalidIdentifier,
				location: SrcSpan::from(start_pos, end_pos)
			});
		}

		Ok((start_pos, Token::Name(word), end_pos))
	}

	fn lex_numeral(&mut self) -> LexResult {
		let start_pos = self.position;
		let mut value = String::new();

		while let Some(ch) = self.ch {
			match ch {
				'_' => {},
				ch if ch.is_ascii_alphanumeric() => value.push(ch),
				_ => break
			}

			self.next_char();
		}

		let end_pos = self.position;
		let location = SrcSpan::from(start_pos, end_pos);

		let (radix, digits) = match value.get(..2) {
			Some("0b") => (2, &value[2..]),
			Some("0x") => (16, &value[2..]),
			_ => (10, value.as_str())
		};

		if digits.is_empty() {
			return Err(LexicalError {
				error: LexicalErrorType::MissingDigits { radix },
				location
			});
		}

		let literal = match u64::from_str_radix(digits, radix) {
			Ok(literal) => literal,
			Err(err) => return Err(LexicalError {
				error: match err.kind() {
					IntErrorKind::PosOverflow => LexicalErrorType::IntegerTooLarge,
					_ => LexicalErrorType::DigitOutOfRadix { radix }
				},
				location
			})
		};

		// Only the low 32 bits are kept.
		let integer = literal as u32;

		if u64::from(integer) != literal {
			self.warnings.push(LexicalWarning::LiteralTruncated {
				location,
				literal,
				value: integer
			});
		}

		Ok((start_pos, Token::Integer(integer), end_pos))
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		if self.exhausted {
			return None;
		}

		match self.get() {
			Ok((_, Token::Eof, _)) => {
				self.exhausted = true;

				None
			},
			token => Some(token)
		}
	}
}

pub fn lex_line(line: &str) -> Lexer<impl Iterator<Item = (u32, char)> + '_> {
	Lexer::new(line.char_indices().map(|(i, c)| (i as u32, c)))
}
