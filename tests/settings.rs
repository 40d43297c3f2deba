use llgram::{Grammar, Settings};

#[test]
fn tracing_does_not_change_the_result() {
    let _ = env_logger::builder().is_test(true).try_init();

    let src = r#"/start-gramma S: "a" "b" ; /end-gramma"#;

    let untraced = Grammar::parse(src).unwrap();
    let traced =
        Grammar::parse_with_settings(src, &Settings::new().with_trace_fixpoints(true)).unwrap();

    assert_eq!(untraced.terminals(), traced.terminals());
    assert_eq!(untraced.start(), traced.start());
}
