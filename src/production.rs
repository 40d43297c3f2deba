//! The production builder (§4.4).
//!
//! Consumes the tokenizer's stream and validates the structural shape
//! `LEFT_SIDE COLON (RIGHT_SIDE RETURN?)+ SEMICOLON`, repeated until the
//! token stream is exhausted. Quoted rhs symbols are classified (terminal
//! or the epsilon literal) on the spot; bare rhs symbols are recorded as
//! unresolved references — whether each one names a non-terminal or a
//! declared lexical token can only be decided once every `LEFT_SIDE` has
//! been seen, which happens in `crate::grammar`.

use indexmap::IndexSet;

use crate::error::{Error, Result};
use crate::symbol::{Symbol, EPSILON_LEXEME};
use crate::token::{Token, TokenKind};

/// A single rhs element before non-terminal/lexical resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSymbol {
    /// Already-classified quoted form: either a terminal or the epsilon
    /// literal, distinguished by comparing against `EPSILON_LEXEME`.
    Quoted(String),
    /// An unquoted identifier; resolved later against the non-terminal and
    /// lexical-name sets.
    Bare(String),
}

impl RawSymbol {
    pub fn resolve(&self, non_terminals: &IndexSet<String>, lexicals: &IndexSet<String>) -> Option<Symbol> {
        match self {
            RawSymbol::Quoted(text) if text == EPSILON_LEXEME => Some(Symbol::epsilon()),
            RawSymbol::Quoted(text) => Some(Symbol::terminal(text.clone())),
            RawSymbol::Bare(name) if non_terminals.contains(name) => {
                Some(Symbol::non_terminal(name.clone()))
            }
            RawSymbol::Bare(name) if lexicals.contains(name) => Some(Symbol::lexical(name.clone())),
            RawSymbol::Bare(_) => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            RawSymbol::Quoted(t) | RawSymbol::Bare(t) => t,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RawProduction {
    pub lhs: String,
    pub rhs: Vec<RawSymbol>,
    pub action: Option<String>,
}

pub struct BuildResult {
    pub productions: Vec<RawProduction>,
    pub terminals: IndexSet<String>,
    pub non_terminals: IndexSet<String>,
    pub start: String,
}

pub fn build(tokens: &[Token]) -> Result<BuildResult> {
    let mut productions = Vec::new();
    let mut terminals = IndexSet::new();
    let mut non_terminals = IndexSet::new();
    let mut start: Option<String> = None;

    let last = tokens.last().ok_or(Error::MissingGrammarSection)?;
    if last.kind != TokenKind::Semicolon {
        let lhs = tokens
            .iter()
            .rev()
            .find(|t| t.kind == TokenKind::LeftSide)
            .map(|t| t.lexeme.clone())
            .unwrap_or_default();
        return Err(Error::MissingProductionTerminator { lhs });
    }

    let mut cursor = 0usize;
    while cursor < tokens.len() {
        let lhs_token = expect(tokens, cursor, TokenKind::LeftSide)?;
        let lhs = lhs_token.lexeme.clone();
        if start.is_none() {
            start = Some(lhs.clone());
        }
        non_terminals.insert(lhs.clone());
        cursor += 1;

        expect(tokens, cursor, TokenKind::Colon)?;
        cursor += 1;

        loop {
            let rhs_token = expect(tokens, cursor, TokenKind::RightSide)?;
            let rhs = split_symbols(&rhs_token.lexeme, &mut terminals);
            cursor += 1;

            let action = if tokens.get(cursor).map(|t| t.kind) == Some(TokenKind::Return) {
                let text = tokens[cursor].lexeme.clone();
                cursor += 1;
                Some(text)
            } else {
                None
            };

            productions.push(RawProduction {
                lhs: lhs.clone(),
                rhs,
                action,
            });

            match tokens.get(cursor).map(|t| t.kind) {
                Some(TokenKind::RightSide) => continue,
                Some(TokenKind::Semicolon) => {
                    cursor += 1;
                    break;
                }
                other => {
                    return Err(Error::UnexpectedToken {
                        expected: "RIGHT_SIDE or SEMICOLON",
                        found: other.map(|k| k.as_str().to_string()).unwrap_or_else(|| "end of input".to_string()),
                    })
                }
            }
        }
    }

    Ok(BuildResult {
        productions,
        terminals,
        non_terminals,
        start: start.ok_or(Error::MissingGrammarSection)?,
    })
}

fn expect(tokens: &[Token], index: usize, kind: TokenKind) -> Result<&Token> {
    match tokens.get(index) {
        Some(t) if t.kind == kind => Ok(t),
        other => Err(Error::UnexpectedToken {
            expected: kind.as_str(),
            found: other
                .map(|t| format!("{} {:?}", t.kind.as_str(), t.lexeme))
                .unwrap_or_else(|| "end of input".to_string()),
        }),
    }
}

fn split_symbols(rhs_lexeme: &str, terminals: &mut IndexSet<String>) -> Vec<RawSymbol> {
    rhs_lexeme
        .split(' ')
        .map(str::trim)
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            if Symbol::is_quoted_literal(tok) {
                if tok != EPSILON_LEXEME {
                    terminals.insert(tok.to_string());
                }
                RawSymbol::Quoted(tok.to_string())
            } else {
                RawSymbol::Bare(tok.to_string())
            }
        })
        .collect()
}
