#![forbid(unsafe_code)]

//! [`EquatableBinding<T>`]: a binding that compares by its current value.
//!
//! Change detection decides whether to redraw by comparing old and new
//! inputs. A plain [`Binding`] holds accessors, which have no meaningful
//! equality. `EquatableBinding` compares the values the two bindings
//! currently read, so two wrappers over different stores are equal whenever
//! their stores hold equal values.
//!
//! # Invariants
//!
//! 1. `a == b` iff `a.get() == b.get()` at the time of comparison.
//! 2. `get`/`set` delegate unchanged to the wrapped binding.
//! 3. [`EquatableBinding::project`] composes the same way as
//!    [`Binding::project`] and stays equatable.

use betterbind_core::Binding;

use crate::element::Identifiable;

/// A [`Binding`] wrapper whose equality is the equality of current values.
pub struct EquatableBinding<T> {
    binding: Binding<T>,
}

impl<T> Clone for EquatableBinding<T> {
    fn clone(&self) -> Self {
        Self {
            binding: self.binding.clone(),
        }
    }
}

impl<T: std::fmt::Debug + 'static> std::fmt::Debug for EquatableBinding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EquatableBinding")
            .field("value", &self.binding.get())
            .finish()
    }
}

impl<T: PartialEq + 'static> EquatableBinding<T> {
    #[must_use]
    pub fn new(binding: Binding<T>) -> Self {
        Self { binding }
    }

    /// An equatable binding that always reads `value` and ignores writes.
    #[must_use]
    pub fn constant(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(Binding::constant(value))
    }

    #[must_use]
    pub fn get(&self) -> T {
        self.binding.get()
    }

    pub fn set(&self, value: T) {
        self.binding.set(value)
    }

    /// The wrapped binding.
    #[must_use]
    pub fn binding(&self) -> &Binding<T> {
        &self.binding
    }

    #[must_use]
    pub fn into_binding(self) -> Binding<T> {
        self.binding
    }

    /// Two-way projection onto a comparable part of `T`.
    pub fn project<F: PartialEq + 'static>(
        &self,
        get: impl Fn(&T) -> F + 'static,
        set: impl Fn(&mut T, F) + 'static,
    ) -> EquatableBinding<F> {
        EquatableBinding::new(self.binding.project(get, set))
    }
}

impl<T: PartialEq + 'static> PartialEq for EquatableBinding<T> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq + 'static> Eq for EquatableBinding<T> {}

impl<T: PartialEq + 'static> From<Binding<T>> for EquatableBinding<T> {
    fn from(binding: Binding<T>) -> Self {
        Self::new(binding)
    }
}

impl<T: PartialEq + 'static> From<EquatableBinding<T>> for Binding<T> {
    fn from(binding: EquatableBinding<T>) -> Self {
        binding.into_binding()
    }
}

impl<T: Identifiable + PartialEq + 'static> Identifiable for EquatableBinding<T> {
    type Id = T::Id;

    fn id(&self) -> T::Id {
        self.binding.id()
    }
}

#[cfg(feature = "state-persistence")]
impl<T: serde::Serialize + PartialEq + 'static> serde::Serialize for EquatableBinding<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

/// Conversion from [`Binding`].
pub trait EquatableExt {
    type Value;

    fn equatable(&self) -> EquatableBinding<Self::Value>;
}

impl<T: PartialEq + 'static> EquatableExt for Binding<T> {
    type Value = T;

    fn equatable(&self) -> EquatableBinding<T> {
        EquatableBinding::new(self.clone())
    }
}

/// Project an [`EquatableBinding`] onto one of its fields.
///
/// ```
/// use betterbind::prelude::*;
/// use betterbind::equatable_field;
/// use betterbind_core::{Observable, bind};
///
/// #[derive(Clone, PartialEq)]
/// struct Profile { name: String, age: u8 }
///
/// let a = Observable::new(Profile { name: "x".into(), age: 30 });
/// let b = Observable::new(Profile { name: "y".into(), age: 30 });
/// let age_a = equatable_field!(bind!(a).equatable(), age);
/// let age_b = equatable_field!(bind!(b).equatable(), age);
/// assert!(age_a == age_b);
/// ```
#[macro_export]
macro_rules! equatable_field {
    ($binding:expr, $field:ident) => {
        $binding.project(
            |whole| ::core::clone::Clone::clone(&whole.$field),
            |whole, part| whole.$field = part,
        )
    };
}
