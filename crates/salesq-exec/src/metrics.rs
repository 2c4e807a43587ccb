//! Metrics/tracing hooks.
//!
//! Events go out as trace-level `tracing` events; wire a subscriber in the
//! binary layer to see them.

pub fn emit_span(event: &str, key_values: &[(&str, String)]) {
    let span = tracing::span!(tracing::Level::TRACE, "salesq", event);
    let _enter = span.enter();
    for (k, v) in key_values {
        tracing::trace!(%event, %k, %v, "metric");
    }
}
