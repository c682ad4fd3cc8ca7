use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Команды
    Quit, // q
    Print, // ;
    BinaryPrint, // :

    // Ключевые слова
    Let, // let
    Const, // const
    Set, // set

    // [a-zA-Z_]{[a-zA-Z0-9_]}
    Name(String),
    // СС 10: <цифра>{<цифра>|_}
    // СС 2: 0b{0|1|_}
    // СС 16: 0x{<цифра>|a..f|A..F|_}
    Integer(u32),

    // Бинарные операции
    BitwiseAnd, // &
    BitwiseOr, // |
    BitwiseXor, // ^

    // Унарные операции
    BitwiseNot, // ~
    LogicalNot, // !

    Assign, // =
    LeftParen, // (
    RightParen, // )

    Eof,
}

impl Token {
    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::Let | Token::Const | Token::Set)
    }

    pub fn is_command(&self) -> bool {
        matches!(self, Token::Quit | Token::Print | Token::BinaryPrint)
    }

    pub fn as_literal(&self) -> String {
        match self {
            Token::Name(value) => value.clone(),
            Token::Integer(value) => format!("{}", value),

            Token::Quit => "q".to_string(),
            Token::Print => ";".to_string(),
            Token::BinaryPrint => ":".to_string(),
            Token::Let => "let".to_string(),
            Token::Const => "const".to_string(),
            Token::Set => "set".to_string(),
            Token::BitwiseAnd => "&".to_string(),
            Token::BitwiseOr => "|".to_string(),
            Token::BitwiseXor => "^".to_string(),
            Token::BitwiseNot => "~".to_string(),
            Token::LogicalNot => "!".to_string(),
            Token::Assign => "=".to_string(),
            Token::LeftParen => "(".to_string(),
            Token::RightParen => ")".to_string(),

            Token::Eof => "end of line".to_string(),
        }
    }

    /// Human readable description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Integer(_) => "an Integer".to_string(),
            Token::Name(_) => "a Name".to_string(),
            Token::Eof => "the end of line".to_string(),
            _ if self.is_keyword() => format!("the keyword `{}`", self.as_literal()),
            _ if self.is_command() => format!("the command `{}`", self.as_literal()),
            _ => format!("`{}`", self.as_literal()),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_literal())
    }
}
