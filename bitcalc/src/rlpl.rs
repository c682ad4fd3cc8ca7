use std::io::{BufRead, IsTerminal, Write};

use bitcalc_core::{lexer::prelude::{lex_line, Token}, session::prelude::PROMPT};

/// Read Lex Print Loop: shows the tokens of every line until `.exit` or EOF.
pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();
	let interactive = stdin.is_terminal();
	let mut stdin = stdin.lock();

	let mut bytes = Vec::new();

	loop {
		if interactive {
			print!("{}", PROMPT);
			std::io::stdout().flush()?;
		}

		bytes.clear();

		if stdin.read_until(b'\n', &mut bytes)? == 0 {
			return Ok(());
		}

		let mut input = String::from_utf8_lossy(&bytes).into_owned();

		if let Some('\n') = input.chars().next_back() {
			input.pop();
		}
		if let Some('\r') = input.chars().next_back() {
			input.pop();
		}

		match input.as_str() {
			"" => {},
			".exit" => return Ok(()),
			_ => {
				let mut lexer = lex_line(&input);

				loop {
					match lexer.get() {
						Ok((_, Token::Eof, _)) => break,
						Ok((start, token, end)) => {
							println!("{start}..{end} {:?}", token);
						},
						Err(err) => {
							let details = err.details();
							println!("[at {}] Lexical Error: {}", err.location.start, details.0);
							if !details.1.is_empty() {
								println!("{}", details.1.join("\n"));
							}
							break;
						}
					}
				}

				for warning in lexer.take_warnings() {
					println!("[at {}] Warning: literal truncated to 32 bits", warning.location().start);
				}
			}
		}
	}
}
