use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::tokens::{Token, RESERVED_LOOKUP};

pub type PatternHandler = fn(&mut Lexer, &str);

pub struct Pattern {
    regex: Regex,
    handler: PatternHandler,
}

lazy_static! {
    // Tried in order. Every pattern is anchored at the cursor.
    static ref PATTERNS: Vec<Pattern> = vec![
        Pattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        Pattern { regex: Regex::new(r"^\p{Alphabetic}[\p{Alphabetic}\p{N}]*").unwrap(), handler: symbol_handler },
        Pattern { regex: Regex::new(r"^[0-9.]+").unwrap(), handler: number_handler },
        Pattern { regex: Regex::new(r"^#[^\n\r]*").unwrap(), handler: skip_handler },
    ];
}

/// Scanner state for a single pass over one input.
///
/// The input is viewed as Latin-1: every byte becomes the `char` with the same
/// value, so character classes are Unicode-aware while each byte still maps to
/// exactly one character. `pos` indexes that decoded view, `offset` indexes
/// the original bytes.
pub struct Lexer<'a> {
    input: &'a [u8],
    source: String,
    pos: usize,
    offset: usize,
    tokens: Vec<Token>,
    diagnostics: Vec<Error>,
    file: Rc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8], file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            input,
            source: input.iter().map(|byte| char::from(*byte)).collect(),
            pos: 0,
            offset: 0,
            tokens: vec![],
            diagnostics: vec![],
            file: file_name,
        }
    }

    pub fn advance(&mut self, consumed: &str) {
        self.pos += consumed.len();
        self.offset += consumed.chars().count();
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    pub fn position(&self) -> Position {
        Position(self.offset as u32, Rc::clone(&self.file))
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance(matched);
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    if let Some(keyword) = RESERVED_LOOKUP.get(matched) {
        lexer.push(keyword.clone());
    } else {
        lexer.push(Token::Identifier(String::from(matched)));
    }

    lexer.advance(matched);
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    // Overflowing literals parse as infinity; treat them as invalid too.
    let value = match matched.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!(literal = matched, offset = lexer.offset, file = %lexer.file, "invalid number literal, substituting 0");
            let error = Error::new(
                ErrorImpl::NumberParseError {
                    token: String::from(matched),
                },
                lexer.position(),
            );
            lexer.diagnostics.push(error);
            0.0
        }
    };

    lexer.push(Token::Number(value));
    lexer.advance(matched);
}

fn other_handler(lexer: &mut Lexer, ch: char) {
    lexer.push(Token::Other(lexer.input[lexer.offset]));
    lexer.pos += ch.len_utf8();
    lexer.offset += 1;
}

/// Scans `input` into tokens, also returning the diagnostics recorded along
/// the way. Never fails: the last token is always the single `Eof`.
pub fn tokenize_with_diagnostics(input: &[u8], file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(input, file);

    while !lex.at_eof() {
        let mut matched = None;

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(lex.remainder()) {
                matched = Some((pattern.handler, found.as_str().to_string()));
                break;
            }
        }

        match matched {
            Some((handler, text)) => handler(&mut lex, &text),
            None => {
                let Some(ch) = lex.at() else {
                    break;
                };
                other_handler(&mut lex, ch);
            }
        }
    }

    lex.push(Token::Eof);

    debug!(
        file = %lex.file,
        bytes = input.len(),
        tokens = lex.tokens.len(),
        diagnostics = lex.diagnostics.len(),
        "tokenized"
    );

    (lex.tokens, lex.diagnostics)
}

pub fn tokenize(input: &[u8]) -> Vec<Token> {
    let (tokens, _) = tokenize_with_diagnostics(input, None);
    tokens
}
