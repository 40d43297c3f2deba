//! The LL(1) parsing table builder (§4.7).

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::grammar::Production;
use crate::index::{ProdIndex, ProdVec};
use crate::sets::SetTable;
use crate::symbol::Symbol;

/// Rows keyed by non-terminal, columns keyed by lookahead symbol (a
/// terminal, a declared lexical name, or the end marker). An absent column
/// entry is an empty slot, distinguishable from a populated index 0.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: IndexMap<Symbol, IndexMap<Symbol, ProdIndex>>,
}

impl Table {
    pub fn get(&self, nonterminal: &Symbol, lookahead: &Symbol) -> Option<ProdIndex> {
        self.rows.get(nonterminal)?.get(lookahead).copied()
    }

    pub fn row(&self, nonterminal: &Symbol) -> Option<&IndexMap<Symbol, ProdIndex>> {
        self.rows.get(nonterminal)
    }

    fn set(&mut self, nonterminal: &Symbol, lookahead: &Symbol, index: ProdIndex) -> Result<()> {
        let row = self.rows.entry(nonterminal.clone()).or_default();
        match row.get(lookahead) {
            Some(existing) if *existing != index => Err(Error::TableConflict {
                nonterminal: nonterminal.text().to_string(),
                lookahead: lookahead.text().to_string(),
                first: *existing,
                second: index,
            }),
            _ => {
                row.insert(lookahead.clone(), index);
                Ok(())
            }
        }
    }
}

pub fn build_table(
    productions: &ProdVec<Production>,
    first: &SetTable,
    follow: &SetTable,
) -> Result<Table> {
    let mut table = Table::default();

    for (index, production) in productions.iter().enumerate() {
        let index = ProdIndex(index);
        let rhs_first = crate::sets::first_of_sequence(&production.rhs, first);

        for lookahead in rhs_first.iter().filter(|s| !s.is_epsilon()) {
            table.set(&production.lhs, lookahead, index)?;
        }

        if rhs_first.iter().any(Symbol::is_epsilon) {
            let follow_a = follow.get(&production.lhs).cloned().unwrap_or_default();
            for lookahead in &follow_a {
                table.set(&production.lhs, lookahead, index)?;
            }
        }
    }

    Ok(table)
}
