//! Non-functional knobs threaded through `Grammar::parse_with_settings`.
//!
//! Grounded in the teacher's `Settings` struct (passed into
//! `generate_parser`/`LRTable::new`): a small, programmatically constructed
//! config object, never read from argv or the environment — the core stays
//! a pure function of its source string plus this value.

#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Emit a `log::trace!` record for every computed FIRST/FOLLOW set.
    /// Off by default; the fixpoint fires once per production per pass, so
    /// tracing a large grammar is noisy.
    pub trace_fixpoints: bool,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trace_fixpoints(mut self, trace: bool) -> Self {
        self.trace_fixpoints = trace;
        self
    }
}
