//! Error types returned by the union container and the printer.

/// Errors raised by [`UnionValue`](crate::UnionValue) accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnionError {
    /// A read accessor asked for an alternative that is not the one stored.
    ///
    /// `selected` is the active index, or the alternative count when the
    /// container is empty.
    #[error("alternative {requested} ({requested_type}) is not active, selected alternative is {selected}")]
    InactiveAlternative {
        requested: usize,
        requested_type: &'static str,
        selected: usize,
    },
}

/// Errors raised while rendering into a
/// [`RenderContext`](crate::printer::RenderContext).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// `branch_end` was called at depth zero outside inline mode.
    #[error("unbalanced branch end `{close}` at depth 0")]
    UnbalancedClose { close: char },

    /// A `Display` implementation written through the context failed.
    #[error("formatting failed")]
    Fmt(#[from] core::fmt::Error),
}
