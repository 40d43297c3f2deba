//! The `Grammar` value: the analytical phase (§4) wired together.
//!
//! Construction is a pure function from a source string to an immutable
//! `Grammar`. All five artifacts (terminals, non-terminals, productions,
//! FIRST, FOLLOW, table) are materialized eagerly; there is no lazy or
//! partially built state observable from outside this module.

use indexmap::{IndexMap, IndexSet};

use crate::debug;
use crate::error::{Error, Result};
use crate::index::{ProdIndex, ProdVec};
use crate::lexer;
use crate::preprocess;
use crate::production;
use crate::section;
use crate::sets::{self, SetTable};
use crate::settings::Settings;
use crate::symbol::Symbol;
use crate::table::{self, Table};

/// A left-hand non-terminal, its right-hand symbol sequence, and its
/// optional opaque semantic-action text, indexed by the position at which
/// it was recorded — that index is the value stored in the parsing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub lhs: Symbol,
    pub rhs: Vec<Symbol>,
    pub action: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Grammar {
    terminals: IndexSet<Symbol>,
    non_terminals: IndexSet<Symbol>,
    productions: ProdVec<Production>,
    start: Symbol,
    lexicals: IndexMap<String, String>,
    first: SetTable,
    follow: SetTable,
    table: Table,
}

impl Grammar {
    pub fn parse(source: &str) -> Result<Self> {
        Self::parse_with_settings(source, &Settings::default())
    }

    pub fn parse_with_settings(source: &str, settings: &Settings) -> Result<Self> {
        let lexma_defs = match section::extract(source, "lexma") {
            Some(body) => preprocess::parse_definitions(&body, "lexma")?,
            None => IndexMap::new(),
        };
        let macros = match section::extract(source, "macro") {
            Some(body) => preprocess::parse_definitions(&body, "macro")?,
            None => IndexMap::new(),
        };
        let gramma_body = section::extract(source, "gramma").ok_or(Error::MissingGrammarSection)?;
        let expanded = preprocess::expand_macros(&gramma_body, &macros);

        let tokens = lexer::tokenize(&expanded)?;
        let built = production::build(&tokens)?;

        let lexical_names: IndexSet<String> = lexma_defs.keys().cloned().collect();

        let mut productions = ProdVec::new();
        for raw in &built.productions {
            let mut rhs = Vec::with_capacity(raw.rhs.len());
            for raw_symbol in &raw.rhs {
                let resolved = raw_symbol
                    .resolve(&built.non_terminals, &lexical_names)
                    .ok_or_else(|| Error::UndefinedSymbol {
                        lhs: raw.lhs.clone(),
                        symbol: raw_symbol.text().to_string(),
                    })?;
                rhs.push(resolved);
            }
            productions.push(Production {
                lhs: Symbol::non_terminal(raw.lhs.clone()),
                rhs,
                action: raw.action.clone(),
            });
        }

        let terminals: IndexSet<Symbol> = built
            .terminals
            .iter()
            .map(|t| Symbol::terminal(t.clone()))
            .collect();
        let non_terminals: IndexSet<Symbol> = built
            .non_terminals
            .iter()
            .map(|nt| Symbol::non_terminal(nt.clone()))
            .collect();
        let start = Symbol::non_terminal(built.start.clone());

        debug::trace(format_args!(
            "parsed {} productions over {} non-terminals",
            productions.len(),
            non_terminals.len()
        ));

        let first = sets::first_sets(&productions, &non_terminals);
        if settings.trace_fixpoints {
            for nt in &non_terminals {
                debug::trace(format_args!("FIRST({nt}) = {:?}", first.get(nt)));
            }
        }

        let follow = sets::follow_sets(&productions, &non_terminals, &first, &start);
        if settings.trace_fixpoints {
            for nt in &non_terminals {
                debug::trace(format_args!("FOLLOW({nt}) = {:?}", follow.get(nt)));
            }
        }

        let table = table::build_table(&productions, &first, &follow)?;

        Ok(Grammar {
            terminals,
            non_terminals,
            productions,
            start,
            lexicals: lexma_defs,
            first,
            follow,
            table,
        })
    }

    pub fn terminals(&self) -> &IndexSet<Symbol> {
        &self.terminals
    }

    pub fn non_terminals(&self) -> &IndexSet<Symbol> {
        &self.non_terminals
    }

    pub fn lexicals(&self) -> &IndexMap<String, String> {
        &self.lexicals
    }

    pub fn productions(&self) -> impl Iterator<Item = (ProdIndex, &Production)> {
        self.productions
            .iter()
            .enumerate()
            .map(|(i, p)| (ProdIndex(i), p))
    }

    pub fn production(&self, index: ProdIndex) -> Option<&Production> {
        self.productions.get(index)
    }

    pub fn start(&self) -> &Symbol {
        &self.start
    }

    pub fn first(&self, symbol: &Symbol) -> Option<&IndexSet<Symbol>> {
        self.first.get(symbol)
    }

    pub fn follow(&self, symbol: &Symbol) -> Option<&IndexSet<Symbol>> {
        self.follow.get(symbol)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}
