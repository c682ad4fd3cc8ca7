use super::prelude::{lex_line, LexicalError, LexicalErrorType, LexicalWarning, Token};

#[test]
fn test_numbers() -> std::result::Result<(), LexicalError> {
    let input = r#"
        10
        1_000
        0xFF
        0x1f
        0b110
        0b1111_0000
        0
        4294967295
    "#;

    let mut lexer = lex_line(input);

    let tokens = vec![
        Token::Integer(10),
        Token::Integer(1000),
        Token::Integer(255),
        Token::Integer(31),
        Token::Integer(6),
        Token::Integer(240),
        Token::Integer(0),
        Token::Integer(u32::MAX),
    ];

    for (idx, token) in tokens.iter().enumerate() {
        let (_, next_token, _) = match lexer.get() {
            Ok(next_token) => next_token,
            Err(err) => {
                println!("stopped at {token:?} ({idx})");
                panic!("{err:?}")
            }
        };

        assert_eq!(
            *token, next_token,
            "Next token does not match expected token ({:?}, {:?}) at {}",
            next_token, token, idx
        );
    }

    assert!(lexer.take_warnings().is_empty());

    Ok(())
}

#[test]
fn test_invalid_numbers() {
    let input = r#"
        0b102
        0x
        12abc
        0xfg
        99999999999999999999999
    "#;

    let mut lexer = lex_line(input);

    let fails = vec![
        LexicalErrorType::DigitOutOfRadix { radix: 2 },
        LexicalErrorType::MissingDigits { radix: 16 },
        LexicalErrorType::DigitOutOfRadix { radix: 10 },
        LexicalErrorType::DigitOutOfRadix { radix: 16 },
        LexicalErrorType::IntegerTooLarge,
    ];

    for (idx, fail) in fails.iter().enumerate() {
        let err = match lexer.get() {
            Err(err) => err,
            Ok(value) => {
                panic!("Stopped at {fail:?} ({idx}). Expected Err but got Ok({value:?})");
            }
        };

        assert_eq!(
            *fail, err.error,
            "Next error does not match expected error ({:?}, {:?}) at {}",
            fail, err.error, idx
        );
    }

    assert_eq!(lexer.get(), Ok((input.len() as u32, Token::Eof, input.len() as u32)));
}

#[test]
fn test_truncated_literal() -> std::result::Result<(), LexicalError> {
    let mut lexer = lex_line("0x1_0000_0005");

    let (start, token, end) = lexer.get()?;

    assert_eq!(token, Token::Integer(5));
    assert_eq!((start, end), (0, 13));
    assert_eq!(lexer.take_warnings(), vec![LexicalWarning::LiteralTruncated {
        location: crate::utils::prelude::SrcSpan::from(0, 13),
        literal: 0x1_0000_0005,
        value: 5,
    }]);
    assert!(lexer.take_warnings().is_empty());

    Ok(())
}

#[test]
fn test_statement() -> std::result::Result<(), LexicalError> {
    let input = "let mask = 0xF0; const _Two 2 set mask 1 : ~(mask & !_Two) ^ x1 | q";

    let tokens = lex_line(input)
        .map(|res| res.map(|(_, token, _)| token))
        .collect::<Result<Vec<Token>, LexicalError>>()?;

    assert_eq!(tokens, vec![
        Token::Let,
        Token::Name("mask".into()),
        Token::Assign,
        Token::Integer(0xF0),
        Token::Print,
        Token::Const,
        Token::Name("_Two".into()),
        Token::Integer(2),
        Token::Set,
        Token::Name("mask".into()),
        Token::Integer(1),
        Token::BinaryPrint,
        Token::BitwiseNot,
        Token::LeftParen,
        Token::Name("mask".into()),
        Token::BitwiseAnd,
        Token::LogicalNot,
        Token::Name("_Two".into()),
        Token::RightParen,
        Token::BitwiseXor,
        Token::Name("x1".into()),
        Token::BitwiseOr,
        Token::Quit,
    ]);

    Ok(())
}

#[test]
fn test_quit_is_a_whole_word() -> std::result::Result<(), LexicalError> {
    let mut lexer = lex_line("quux q;");

    assert_eq!(lexer.get()?.1, Token::Name("quux".into()));
    assert_eq!(lexer.get()?.1, Token::Quit);
    assert_eq!(lexer.get()?.1, Token::Print);
    assert_eq!(lexer.get()?.1, Token::Eof);

    Ok(())
}

#[test]
fn test_unrecognized_token() {
    let mut lexer = lex_line("1 + 2");

    assert_eq!(lexer.get().map(|(_, token, _)| token), Ok(Token::Integer(1)));

    let err = lexer.get().unwrap_err();
    assert_eq!(err.error, LexicalErrorType::UnrecognizedToken { tok: '+' });
    assert_eq!((err.location.start, err.location.end), (2, 3));
    assert_eq!(err.details().0, "unrecognized token");

    assert_eq!(lexer.get().map(|(_, token, _)| token), Ok(Token::Integer(2)));
}

#[test]
fn test_pushback() -> std::result::Result<(), LexicalError> {
    let mut lexer = lex_line("a b");

    let first = lexer.get()?;
    assert_eq!(first, (0, Token::Name("a".into()), 1));

    lexer.putback(first.clone()).expect("empty buffer accepts a token");

    let err = lexer.putback((2, Token::Name("b".into()), 3)).unwrap_err();
    assert_eq!(err.buffered, Token::Name("a".into()));
    assert_eq!(err.details().0, "buffer not empty");

    assert_eq!(lexer.get()?, first);
    assert_eq!(lexer.get()?, (2, Token::Name("b".into()), 3));
    assert_eq!(lexer.get()?, (3, Token::Eof, 3));

    Ok(())
}

#[test]
fn test_iterator_stops_at_eof() {
    let mut lexer = lex_line("   ");

    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn test_token_literals() {
    assert_eq!(Token::BitwiseXor.to_string(), "^");
    assert_eq!(Token::Integer(7).describe(), "an Integer");
    assert_eq!(Token::Const.describe(), "the keyword `const`");
    assert_eq!(Token::Print.describe(), "the command `;`");
    assert_eq!(Token::RightParen.describe(), "`)`");
}
