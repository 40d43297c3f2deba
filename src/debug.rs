//! Thin tracing helpers, grounded in `rustemo::debug::{log, logn}` but built
//! on the `log` facade rather than a hand-rolled macro, so any `log`-
//! compatible subscriber (e.g. `env_logger` in a consumer's own `main`)
//! picks these records up for free.

pub(crate) fn trace(args: std::fmt::Arguments<'_>) {
    log::trace!("{args}");
}
