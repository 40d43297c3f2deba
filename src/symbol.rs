//! Canonical grammar symbols.
//!
//! Terminals are stored in their quoted form (`"a"`, including the quotes)
//! so that a terminal named `a` and a non-terminal named `a` never collide
//! as map keys. This is load-bearing: FIRST, FOLLOW, and the parsing table
//! are all keyed by `Symbol`.

use std::fmt;

pub const EPSILON_LEXEME: &str = "\"\"";
pub const END_MARKER_LEXEME: &str = "$";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SymbolKind {
    Terminal,
    NonTerminal,
    Lexical,
    Epsilon,
    EndMarker,
}

/// A symbol, identified by its canonical textual form (quoted for
/// terminals and the epsilon marker, bare otherwise) plus a kind tag used
/// to distinguish, e.g., a declared lexical name from an identically
/// spelled non-terminal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    text: String,
    kind: SymbolKind,
}

impl Symbol {
    pub fn terminal(quoted: impl Into<String>) -> Self {
        Self {
            text: quoted.into(),
            kind: SymbolKind::Terminal,
        }
    }

    pub fn non_terminal(name: impl Into<String>) -> Self {
        Self {
            text: name.into(),
            kind: SymbolKind::NonTerminal,
        }
    }

    pub fn lexical(name: impl Into<String>) -> Self {
        Self {
            text: name.into(),
            kind: SymbolKind::Lexical,
        }
    }

    pub fn epsilon() -> Self {
        Self {
            text: EPSILON_LEXEME.to_string(),
            kind: SymbolKind::Epsilon,
        }
    }

    pub fn end_marker() -> Self {
        Self {
            text: END_MARKER_LEXEME.to_string(),
            kind: SymbolKind::EndMarker,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &SymbolKind {
        &self.kind
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self.kind, SymbolKind::Epsilon)
    }

    pub fn is_end_marker(&self) -> bool {
        matches!(self.kind, SymbolKind::EndMarker)
    }

    pub fn is_terminal_like(&self) -> bool {
        matches!(
            self.kind,
            SymbolKind::Terminal | SymbolKind::Lexical | SymbolKind::EndMarker
        )
    }

    /// True for a bare `"..."` form, strict equality only (never a substring
    /// match against a multi-character symbol — see spec open question).
    pub fn is_quoted_literal(text: &str) -> bool {
        text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
