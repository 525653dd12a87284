#![forbid(unsafe_code)]

//! Optional adapters: moving between `Binding<T>` and `Binding<Option<T>>`.
//!
//! | Combinator        | Source           | Result            | Absent side               |
//! |-------------------|------------------|-------------------|---------------------------|
//! | `as_optional(d)`  | `Binding<T>`     | `Binding<Option>` | writing `None` stores `d` |
//! | `with_default(d)` | `Binding<Option>`| `Binding<T>`      | reading `None` yields `d` |
//! | `has_value_or(d)` | `Binding<Option>`| `Binding<bool>`   | `true` on `None` stores `d` |
//! | `has_value()`     | `Binding<Option>`| `Binding<bool>`   | `true` on `None` is a no-op |
//!
//! # Invariants
//!
//! 1. `as_optional` never reads as `None`.
//! 2. `with_default` always writes a wrapped value, even when it equals the
//!    default; it never writes "absent".
//! 3. `has_value*` only writes when the requested state differs from the
//!    current one. Re-asserting the current state never writes.

use betterbind_core::Binding;

use crate::optional::OptionalLike;

/// Lift a plain binding into an optional one.
pub trait AsOptionalExt {
    type Value;

    /// `Some(current)` on read; writing `None` stores `default`.
    fn as_optional(&self, default: Self::Value) -> Binding<Option<Self::Value>>;
}

impl<T: Clone + 'static> AsOptionalExt for Binding<T> {
    type Value = T;

    fn as_optional(&self, default: T) -> Binding<Option<T>> {
        let read = self.clone();
        let write = self.clone();
        Binding::new(
            move || Some(read.get()),
            move |value: Option<T>| write.set(value.unwrap_or_else(|| default.clone())),
        )
    }
}

/// Adapters over a binding of an [`OptionalLike`] value.
pub trait OptionalBindingExt {
    type Wrapped;

    /// Unwrap with a fallback. Writes are always stored wrapped.
    fn with_default(&self, default: Self::Wrapped) -> Binding<Self::Wrapped>;

    /// Whether a value is present. Setting `true` while absent stores
    /// `default`; setting `false` while present clears it.
    fn has_value_or(&self, default: Self::Wrapped) -> Binding<bool>;

    /// Whether a value is present. Setting `false` while present clears it;
    /// setting `true` while absent does nothing, since there is no value to
    /// store.
    fn has_value(&self) -> Binding<bool>;
}

impl<V> OptionalBindingExt for Binding<V>
where
    V: OptionalLike + 'static,
    V::Wrapped: Clone + 'static,
{
    type Wrapped = V::Wrapped;

    fn with_default(&self, default: V::Wrapped) -> Binding<V::Wrapped> {
        let read = self.clone();
        let write = self.clone();
        Binding::new(
            move || read.get().fallback(default.clone()),
            move |value| write.set(V::wrap(value)),
        )
    }

    fn has_value_or(&self, default: V::Wrapped) -> Binding<bool> {
        let read = self.clone();
        let write = self.clone();
        Binding::new(
            move || !read.get().is_absent(),
            move |present: bool| match (present, write.get().is_absent()) {
                (true, true) => write.set(V::wrap(default.clone())),
                (false, false) => write.set(V::absent()),
                _ => {}
            },
        )
    }

    fn has_value(&self) -> Binding<bool> {
        let read = self.clone();
        let write = self.clone();
        Binding::new(
            move || !read.get().is_absent(),
            move |present: bool| match (present, write.get().is_absent()) {
                (false, false) => write.set(V::absent()),
                (true, true) => {
                    tracing::trace!("has_value: no default to store, write ignored");
                }
                _ => {}
            },
        )
    }
}
