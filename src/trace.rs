//! Trace/log sink.
//!
//! Emits one `tracing::debug!` event per INIT/GUESS/UNITPROP/BACKTRACK,
//! each carrying the trail rendered as a sequence of `v k: b` tokens.
//! Purely an observer: nothing here can influence search semantics.

/// Renders a sequence of `(variable, kind letter, value)` trail entries,
/// e.g. `[1 d: T; 2 f: F]`.
pub(crate) fn render_trail<I>(entries: I) -> String
where
    I: IntoIterator<Item = (u32, char, bool)>,
{
    let rendered: Vec<String> = entries
        .into_iter()
        .map(|(var, kind, value)| format!("{var} {kind}: {}", if value { 'T' } else { 'F' }))
        .collect();
    format!("[{}]", rendered.join("; "))
}

pub(crate) fn emit_init(trail: &str) {
    tracing::debug!(event = "INIT", "INIT     : {trail}");
}

pub(crate) fn emit_guess(trail: &str) {
    tracing::debug!(event = "GUESS", "GUESS    : {trail}");
}

pub(crate) fn emit_unitprop(trail: &str) {
    tracing::debug!(event = "UNITPROP", "UNITPROP : {trail}");
}

pub(crate) fn emit_backtrack(trail: &str) {
    tracing::debug!(event = "BACKTRACK", "BACKTRACK: {trail}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_mixed_trail() {
        let rendered = render_trail([(1, 'd', true), (2, 'f', false)]);
        assert_eq!(rendered, "[1 d: T; 2 f: F]");
    }

    #[test]
    fn renders_empty_trail() {
        assert_eq!(render_trail(std::iter::empty()), "[]");
    }
}
