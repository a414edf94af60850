use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Token> = {
        let mut map = HashMap::new();
        map.insert("def", Token::Def);
        map.insert("extern", Token::Extern);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Def,
    Extern,
    Identifier,
    Number,
    Other,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A lexical token.
///
/// `Other` carries the raw input byte for anything the lexer does not
/// classify: operators, parentheses, commas, semicolons.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Eof,
    Def,
    Extern,
    Identifier(String),
    Number(f64),
    Other(u8),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Eof => TokenKind::Eof,
            Token::Def => TokenKind::Def,
            Token::Extern => TokenKind::Extern,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Number(_) => TokenKind::Number,
            Token::Other(_) => TokenKind::Other,
        }
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind())
    }
}

/// Quotes Latin-1 text for display.
///
/// Printable characters pass through. The usual backslash escapes cover quote,
/// backslash and the named C0 controls. Other C0 controls and DEL become
/// `\xNN`; C1 controls, no-break space and soft hyphen become `\u00NN`.
pub fn quote(text: &str) -> String {
    let mut out = String::from("\"");
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0b}' => out.push_str("\\v"),
            '\u{00}'..='\u{1f}' | '\u{7f}' => out.push_str(&format!("\\x{:02x}", ch as u32)),
            '\u{80}'..='\u{a0}' | '\u{ad}' => out.push_str(&format!("\\u{:04x}", ch as u32)),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Eof | Token::Def | Token::Extern => write!(f, "{}", self.kind()),
            Token::Identifier(text) => write!(f, "Identifier{{ {} }}", quote(text)),
            Token::Number(value) => write!(f, "Number{{ {:.6} }}", value),
            Token::Other(byte) => write!(f, "Other{{ {} }}", quote(&char::from(*byte).to_string())),
        }
    }
}

/// Renders tokens the way the command line prints them: every token followed
/// by a single space, then a newline.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push(' ');
    }
    out.push('\n');
    out
}
