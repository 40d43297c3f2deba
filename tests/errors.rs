use llgram::Error;
use llgram::Grammar;

#[test]
fn malformed_definition_line_is_fatal() {
    let src = "/start-lexma\nnumber\n/end-lexma\n/start-gramma S: \"a\" ; /end-gramma";
    let err = Grammar::parse(src).unwrap_err();
    assert!(matches!(err, Error::MalformedDefinitionLine { .. }));
}

#[test]
fn unbalanced_action_block_is_fatal() {
    let src = r#"/start-gramma S: "a" { $$ = 1; ; /end-gramma"#;
    let err = Grammar::parse(src).unwrap_err();
    assert!(matches!(err, Error::UnbalancedActionBlock { .. }));
}

#[test]
fn missing_production_terminator_is_fatal() {
    let src = r#"/start-gramma S: "a" /end-gramma"#;
    let err = Grammar::parse(src).unwrap_err();
    assert!(matches!(err, Error::MissingProductionTerminator { .. }));
}

#[test]
fn nested_action_braces_survive_roundtrip() {
    let g = Grammar::parse(
        r#"/start-gramma S: "a" { if (x) { $$ = 1; } } ; /end-gramma"#,
    )
    .unwrap();
    let (_, production) = g.productions().next().unwrap();
    assert_eq!(production.action.as_deref(), Some("if (x) { $$ = 1; }"));
}

#[test]
fn error_messages_name_the_offending_symbol() {
    let err = Grammar::parse(r#"/start-gramma S: Undeclared "b" ; /end-gramma"#).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Undeclared"), "message was: {message}");
}
