//! Splits a grammar source blob into its `lexma`/`macro`/`gramma` sections.

/// Returns the trimmed substring between `/start-<name>` and the following
/// `/end-<name>`, or `None` if either marker is absent.
pub fn extract(source: &str, name: &str) -> Option<String> {
    let start_marker = format!("/start-{name}");
    let end_marker = format!("/end-{name}");

    let after_start = source.split_once(&start_marker)?.1;
    let before_end = after_start.split_once(&end_marker)?.0;
    Some(before_end.trim().to_string())
}
