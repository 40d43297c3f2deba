//! Parses the `lexma`/`macro` sections into name -> value maps and applies
//! macro substitution to the grammar section text (§4.2).

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Parses a `name : value` per non-blank line body. `section` names the
/// owning section, used only to label a `MalformedDefinitionLine` error.
pub fn parse_definitions(body: &str, section: &'static str) -> Result<IndexMap<String, String>> {
    let mut out = IndexMap::new();
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (name, value) = line.split_once(':').ok_or_else(|| Error::MalformedDefinitionLine {
            section,
            line: line.to_string(),
        })?;
        out.insert(name.trim().to_string(), value.trim().to_string());
    }
    Ok(out)
}

/// Applies every macro substitution to `text`, in insertion order, each as a
/// plain textual replace. Each replace sees the result of the ones before
/// it — a macro whose name happens to appear in an earlier macro's
/// replacement value will still catch it — but there is no final fixpoint
/// pass over the fully expanded text, so a macro introduced only by the
/// last substitution in the list is never expanded.
pub fn expand_macros(text: &str, macros: &IndexMap<String, String>) -> String {
    let mut expanded = text.to_string();
    for (name, value) in macros {
        expanded = expanded.replace(name.as_str(), value.as_str());
    }
    expanded
}
