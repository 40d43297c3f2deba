use llgram::symbol::Symbol;
use llgram::Grammar;
use pretty_assertions::assert_eq;

fn set(items: &[Symbol]) -> Vec<Symbol> {
    let mut v: Vec<_> = items.to_vec();
    v.sort();
    v
}

fn sorted_first(g: &Grammar, name: &str) -> Vec<Symbol> {
    let mut v: Vec<_> = g.first(&Symbol::non_terminal(name)).unwrap().iter().cloned().collect();
    v.sort();
    v
}

fn sorted_follow(g: &Grammar, name: &str) -> Vec<Symbol> {
    let mut v: Vec<_> = g.follow(&Symbol::non_terminal(name)).unwrap().iter().cloned().collect();
    v.sort();
    v
}

#[test]
fn epsilon_production_in_first_set() {
    let g = Grammar::parse(
        r#"/start-gramma
        S: "b" A | "acc" ;
        A: "" | "a" ;
        /end-gramma"#,
    )
    .unwrap();

    assert_eq!(
        sorted_first(&g, "A"),
        set(&[Symbol::epsilon(), Symbol::terminal("\"a\"")])
    );
    assert_eq!(
        sorted_first(&g, "S"),
        set(&[Symbol::terminal("\"b\""), Symbol::terminal("\"acc\"")])
    );
    assert_eq!(sorted_follow(&g, "A"), set(&[Symbol::end_marker()]));

    for nt in g.non_terminals() {
        assert!(!g.follow(nt).unwrap().contains(&Symbol::epsilon()));
    }
}

#[test]
fn classic_expression_grammar_with_lexical_token() {
    let src = r#"
    /start-lexma
    number: /[0-9]+/
    /end-lexma

    /start-gramma
    E: T E';

    E': "+" T E'
        | ""
        ;

    T: F T';

    T': "*" F T'
        | ""
        ;

    F: "(" E ")"
        | number
        ;
    /end-gramma
    "#;

    let g = Grammar::parse(src).unwrap();

    let lparen = Symbol::terminal("\"(\"");
    let rparen = Symbol::terminal("\")\"");
    let plus = Symbol::terminal("\"+\"");
    let star = Symbol::terminal("\"*\"");
    let number = Symbol::lexical("number");

    assert_eq!(sorted_first(&g, "F"), set(&[lparen.clone(), number.clone()]));
    assert_eq!(sorted_first(&g, "T"), set(&[lparen.clone(), number.clone()]));
    assert_eq!(sorted_first(&g, "E"), set(&[lparen.clone(), number.clone()]));
    assert_eq!(sorted_first(&g, "E'"), set(&[plus.clone(), Symbol::epsilon()]));
    assert_eq!(sorted_first(&g, "T'"), set(&[star.clone(), Symbol::epsilon()]));

    assert_eq!(sorted_follow(&g, "E"), set(&[rparen.clone(), Symbol::end_marker()]));
    assert_eq!(sorted_follow(&g, "E'"), set(&[rparen.clone(), Symbol::end_marker()]));
    assert_eq!(
        sorted_follow(&g, "T"),
        set(&[plus.clone(), rparen.clone(), Symbol::end_marker()])
    );
    assert_eq!(
        sorted_follow(&g, "T'"),
        set(&[plus.clone(), rparen.clone(), Symbol::end_marker()])
    );
    assert_eq!(
        sorted_follow(&g, "F"),
        set(&[star.clone(), plus.clone(), rparen.clone(), Symbol::end_marker()])
    );

    // `number` participates as a terminal-like column, the same as a quoted
    // literal, in both FIRST and the table.
    let f_number_row = g.table().get(&Symbol::non_terminal("F"), &number);
    assert!(f_number_row.is_some());
}
