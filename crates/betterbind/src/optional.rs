#![forbid(unsafe_code)]

//! Uniform view over nullable values.
//!
//! Combinators that work on "a binding of something that may be absent"
//! are written against [`OptionalLike`] rather than `Option<T>` directly,
//! so a host can plug in its own nullable wrapper.

/// A value that is either absent or wraps a `Self::Wrapped`.
pub trait OptionalLike: Sized {
    type Wrapped;

    /// The absent value.
    fn absent() -> Self;

    fn is_absent(&self) -> bool;

    /// The wrapped value, or `default` when absent.
    fn fallback(self, default: Self::Wrapped) -> Self::Wrapped;

    fn wrap(value: Self::Wrapped) -> Self;
}

impl<T> OptionalLike for Option<T> {
    type Wrapped = T;

    #[inline]
    fn absent() -> Self {
        None
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn fallback(self, default: T) -> T {
        self.unwrap_or(default)
    }

    #[inline]
    fn wrap(value: T) -> Self {
        Some(value)
    }
}
