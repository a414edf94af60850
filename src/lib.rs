#![allow(clippy::module_inception)]

use std::{fs, path::Path, rc::Rc};

use tracing::{debug, info};

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    lexer::{lexer::tokenize_with_diagnostics, tokens::render_tokens},
};

pub mod ast;
pub mod errors;
pub mod lexer;

extern crate regex;

/// Byte offset into a source plus the name of that source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

/// Result of running the front end over one file.
#[derive(Debug)]
pub struct Output {
    /// The token line, newline-terminated.
    pub rendered: String,
    /// Diagnostics recorded while lexing, already formatted for display.
    pub diagnostics: Vec<String>,
}

/// Finds the line containing byte `position`.
///
/// Returns the 1-based line number, the line text (including its line
/// terminator, if any) and the column within it, counted in characters of the
/// decoded line. `None` when `position` is past the end of `content`.
pub fn get_line_at_position(content: &[u8], position: usize) -> Option<(usize, String, usize)> {
    if position >= content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive(|byte| *byte == b'\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_text = String::from_utf8_lossy(line).into_owned();
            let column = String::from_utf8_lossy(&line[..position - start]).chars().count();
            return Some((line_number, line_text, column));
        }

        start = end;
        line_number += 1;
    }

    None
}

/// Formats a diagnostic against the source it was recorded for.
///
/// ```text
/// Error: NumberParseError (Invalid number: `1.2.3`, ...)
/// -> test.ks
///   |
/// 3 | def f(x) x * 1.2.3
///   | -------------^
/// ```
pub fn render_error(error: &Error, content: &[u8]) -> String {
    let mut out = String::new();
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(content, position.0 as usize)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    let removed = string.len() - trimmed.len();

    (trimmed, removed)
}

/// Library entry point for the command line.
///
/// `args` follows `std::env::args`: the program name first, then the source
/// file path. Extra arguments are ignored.
pub fn run<I: IntoIterator<Item = String>>(args: I) -> Result<Output, Error> {
    let Some(file_path) = args.into_iter().nth(1) else {
        return Err(Error::new(
            ErrorImpl::MissingArgument {
                name: String::from("filename"),
            },
            Position::null(),
        ));
    };

    let contents = fs::read(&file_path).map_err(|err| {
        Error::new(
            ErrorImpl::FileReadError {
                path: file_path.clone(),
                message: err.to_string(),
            },
            Position::null(),
        )
    })?;
    info!(path = %file_path, bytes = contents.len(), "read source");

    let file_name = Path::new(&file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.clone());

    let (tokens, diagnostics) = tokenize_with_diagnostics(&contents, Some(file_name));
    debug!(tokens = tokens.len(), "rendering tokens");

    Ok(Output {
        rendered: render_tokens(&tokens),
        diagnostics: diagnostics
            .iter()
            .map(|error| render_error(error, &contents))
            .collect(),
    })
}
