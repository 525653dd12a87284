#![forbid(unsafe_code)]

//! Errors reported by the observable store.
//!
//! Derived bindings never fail: every combinator resolves its edge cases to
//! a defined value or a no-op. The only recoverable failure in the host
//! layer is touching an [`Observable`](crate::Observable) while its value is
//! already borrowed, which happens when a write is issued from inside
//! [`Observable::with`](crate::Observable::with).

/// Errors from store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// The store value is currently borrowed (re-entrant access).
    #[error("observable value is already borrowed; re-entrant write rejected")]
    Borrowed,
}

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, BindingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_reentrancy() {
        let msg = BindingError::Borrowed.to_string();
        assert!(msg.contains("re-entrant"));
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&BindingError::Borrowed);
    }
}
