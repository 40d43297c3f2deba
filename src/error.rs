//! The error taxonomy for grammar construction.
//!
//! `Grammar::parse` never returns a partial `Grammar`: every fatal condition
//! below aborts construction immediately with enough data to name the
//! offending lexeme or symbol.

use crate::index::ProdIndex;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no /start-gramma ... /end-gramma section found in grammar source")]
    MissingGrammarSection,

    #[error("malformed definition line in {section} section (missing ':'): {line:?}")]
    MalformedDefinitionLine { section: &'static str, line: String },

    #[error("production for '{lhs}' was not terminated by ';'")]
    MissingProductionTerminator { lhs: String },

    #[error("unbalanced '{{' in action block starting at byte offset {offset}")]
    UnbalancedActionBlock { offset: usize },

    #[error("unexpected token while parsing productions: expected {expected}, found {found}")]
    UnexpectedToken { expected: &'static str, found: String },

    #[error("symbol '{symbol}' used in production for '{lhs}' is not a declared non-terminal, lexical name, quoted terminal, or the empty literal")]
    UndefinedSymbol { lhs: String, symbol: String },

    #[error("LL(1) table conflict for non-terminal '{nonterminal}' on lookahead '{lookahead}': productions {first} and {second} both apply")]
    TableConflict {
        nonterminal: String,
        lookahead: String,
        first: ProdIndex,
        second: ProdIndex,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
