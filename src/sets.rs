//! FIRST (§4.5) and FOLLOW (§4.6) fixpoint computation.
//!
//! Both are plain iterate-to-fixpoint algorithms (Dragon book, ch. 4) over a
//! finite, monotone lattice of symbol sets — no recursion, no memoization,
//! no stack-depth surprises on self-recursive productions.

use indexmap::{IndexMap, IndexSet};

use crate::grammar::Production;
use crate::index::ProdVec;
use crate::symbol::Symbol;

pub type SymbolSet = IndexSet<Symbol>;
pub type SetTable = IndexMap<Symbol, SymbolSet>;

/// FIRST of a single symbol: itself for anything terminal-like, epsilon, or
/// the end marker; the symbol's own (possibly still-converging) FIRST set
/// for a non-terminal.
fn first_of_symbol(symbol: &Symbol, first: &SetTable) -> SymbolSet {
    match first.get(symbol) {
        Some(set) => set.clone(),
        None => SymbolSet::from([symbol.clone()]),
    }
}

/// FIRST of a sequence Y1 Y2 ... Yn, per §4.5: FIRST(Y1) minus epsilon, and
/// so on through the sequence while every prefix is nullable; epsilon is
/// added only if the whole sequence is nullable.
pub fn first_of_sequence(seq: &[Symbol], first: &SetTable) -> SymbolSet {
    let mut result = SymbolSet::new();
    let mut all_nullable = true;

    for symbol in seq {
        let symbol_first = first_of_symbol(symbol, first);
        result.extend(symbol_first.iter().filter(|s| !s.is_epsilon()).cloned());
        if !symbol_first.iter().any(Symbol::is_epsilon) {
            all_nullable = false;
            break;
        }
    }

    if all_nullable {
        result.insert(Symbol::epsilon());
    }
    result
}

pub fn first_sets(productions: &ProdVec<Production>, non_terminals: &IndexSet<Symbol>) -> SetTable {
    let mut first: SetTable = non_terminals
        .iter()
        .map(|nt| (nt.clone(), SymbolSet::new()))
        .collect();

    let mut changed = true;
    while changed {
        changed = false;
        for production in productions {
            let rhs_first = first_of_sequence(&production.rhs, &first);
            let entry = first.get_mut(&production.lhs).expect("lhs is a declared non-terminal");
            let before = entry.len();
            entry.extend(rhs_first);
            if entry.len() > before {
                changed = true;
            }
        }
    }

    first
}

/// FOLLOW per §4.6: FOLLOW(start) is seeded with `$`; for every production
/// `B -> alpha A beta`, FIRST(beta) minus epsilon is added to FOLLOW(A),
/// and if beta is empty or nullable, FOLLOW(B) is added to FOLLOW(A) too.
pub fn follow_sets(
    productions: &ProdVec<Production>,
    non_terminals: &IndexSet<Symbol>,
    first: &SetTable,
    start: &Symbol,
) -> SetTable {
    let mut follow: SetTable = non_terminals
        .iter()
        .map(|nt| (nt.clone(), SymbolSet::new()))
        .collect();

    follow
        .get_mut(start)
        .expect("start symbol is a declared non-terminal")
        .insert(Symbol::end_marker());

    let mut changed = true;
    while changed {
        changed = false;
        for production in productions {
            for (i, symbol) in production.rhs.iter().enumerate() {
                if !non_terminals.contains(symbol) {
                    continue;
                }
                let beta = &production.rhs[i + 1..];
                let beta_first = first_of_sequence(beta, first);
                let nullable_beta = beta.is_empty() || beta_first.iter().any(Symbol::is_epsilon);

                let mut additions: SymbolSet =
                    beta_first.into_iter().filter(|s| !s.is_epsilon()).collect();
                if nullable_beta {
                    if let Some(lhs_follow) = follow.get(&production.lhs) {
                        additions.extend(lhs_follow.iter().cloned());
                    }
                }

                let entry = follow.get_mut(symbol).expect("rhs non-terminal is declared");
                let before = entry.len();
                entry.extend(additions);
                if entry.len() > before {
                    changed = true;
                }
            }
        }
    }

    follow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;

    #[test]
    fn epsilon_and_alternatives() {
        let g = Grammar::parse(
            r#"/start-gramma
            S: "b" A | "acc" ;
            A: "" | "a" ;
            /end-gramma"#,
        )
        .unwrap();

        let first_a = g.first(&Symbol::non_terminal("A")).unwrap();
        assert!(first_a.contains(&Symbol::epsilon()));
        assert!(first_a.contains(&Symbol::terminal("\"a\"")));

        let follow_a = g.follow(&Symbol::non_terminal("A")).unwrap();
        assert_eq!(follow_a, &SymbolSet::from([Symbol::end_marker()]));
        assert!(!follow_a.contains(&Symbol::epsilon()));
    }

    #[test]
    fn follow_of_start_contains_end_marker() {
        let g = Grammar::parse(r#"/start-gramma S: "a" "b" ; /end-gramma"#).unwrap();
        let follow_s = g.follow(&Symbol::non_terminal("S")).unwrap();
        assert!(follow_s.contains(&Symbol::end_marker()));
    }
}
