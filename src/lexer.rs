//! The grammar tokenizer (§4.3).
//!
//! Scans left to right with a rolling start cursor `s` and current cursor
//! `c`, accumulating a pending lexeme between the four event characters
//! `:`, `;`, `|`, `{`.

use crate::error::{Error, Result};
use crate::token::{Token, TokenKind};

pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut s = 0usize;
    let mut c = 0usize;

    while c < bytes.len() {
        match bytes[c] {
            b':' => {
                tokens.push(Token::new(TokenKind::LeftSide, source[s..c].trim()));
                tokens.push(Token::new(TokenKind::Colon, ":"));
                c += 1;
                s = c;
            }
            b'{' => {
                tokens.push(Token::new(TokenKind::RightSide, source[s..c].trim()));
                let (interior, next) = extract_block(source, c)?;
                tokens.push(Token::new(TokenKind::Return, interior));
                c = next;
                s = c;
            }
            b';' => {
                if s != c {
                    tokens.push(Token::new(TokenKind::RightSide, source[s..c].trim()));
                }
                tokens.push(Token::new(TokenKind::Semicolon, ";"));
                c += 1;
                s = c;
            }
            b'|' => {
                if s != c {
                    tokens.push(Token::new(TokenKind::RightSide, source[s..c].trim()));
                }
                c += 1;
                s = c;
            }
            _ => {
                c += 1;
            }
        }
    }

    tokens.retain(|t| !t.lexeme.is_empty());
    Ok(tokens)
}

/// `start` points at the opening `{`. Returns the trimmed interior of the
/// outermost braces (braces tracked by depth, so nested `{...}` inside an
/// action block survive) and the index just past the matching `}`.
fn extract_block(source: &str, start: usize) -> Result<(String, usize)> {
    let bytes = source.as_bytes();
    let mut depth = 1usize;
    let mut c = start + 1;

    while depth != 0 {
        if c >= bytes.len() {
            return Err(Error::UnbalancedActionBlock { offset: start });
        }
        match bytes[c] {
            b'{' => depth += 1,
            b'}' => depth -= 1,
            _ => {}
        }
        c += 1;
    }

    Ok((source[start + 1..c - 1].trim().to_string(), c))
}
