#![forbid(unsafe_code)]

//! Two-way [`Binding<T>`]: a read/write capability over externally owned state.
//!
//! A binding is a pair of accessors, `get` and `set`, that close over some
//! backing store. It never owns the store. Derived bindings are built by
//! wrapping a source binding and expressing the new accessors in terms of
//! the source's; nothing is cached, so every `get()` reads through.
//!
//! # Usage
//!
//! ```
//! use betterbind_core::{Binding, Observable, bind};
//!
//! let count = Observable::new(0);
//! let b = bind!(count);
//! b.set(5);
//! assert_eq!(count.get(), 5);
//!
//! let doubled = b.project(|v| v * 2, |v, d| *v = d / 2);
//! doubled.set(10);
//! assert_eq!(count.get(), 5);
//! assert_eq!(doubled.get(), 10);
//! ```
//!
//! # Invariants
//!
//! 1. `get()` always returns the current (not stale) value.
//! 2. `set(v)` followed by `get()` observes `v`, modulo any normalization a
//!    derived binding applies.
//! 3. Clones share accessors; both see and write the same store.
//!
//! # Failure Modes
//!
//! - Accessor panic: propagates to the caller of `get()`/`set()`.
//! - Store dropped while binding alive: cannot happen for
//!   [`Binding::from_observable`] (the `Rc` keeps the store alive).

use std::rc::Rc;

use crate::observable::Observable;

/// A two-way accessor over a value of type `T`.
pub struct Binding<T> {
    getter: Rc<dyn Fn() -> T>,
    setter: Rc<dyn Fn(T)>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            getter: Rc::clone(&self.getter),
            setter: Rc::clone(&self.setter),
        }
    }
}

impl<T: std::fmt::Debug + 'static> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("value", &self.get())
            .finish()
    }
}

impl<T: 'static> Binding<T> {
    /// Create a binding from a getter and a setter.
    pub fn new(get: impl Fn() -> T + 'static, set: impl Fn(T) + 'static) -> Self {
        Self {
            getter: Rc::new(get),
            setter: Rc::new(set),
        }
    }

    /// A binding that always reads `value` and ignores writes.
    pub fn constant(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move || value.clone(), |_| {})
    }

    /// Read the current value.
    #[must_use]
    pub fn get(&self) -> T {
        (self.getter)()
    }

    /// Write a new value through to the backing store.
    pub fn set(&self, value: T) {
        (self.setter)(value)
    }

    /// Read, mutate a copy, and write it back.
    ///
    /// Always writes, even when `f` leaves the value unchanged.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut value = self.get();
        f(&mut value);
        self.set(value);
    }

    /// Two-way projection onto a part of `T`.
    ///
    /// `get` extracts the part; `set` writes a new part into a copy of the
    /// current whole, which is then written back to this binding.
    pub fn project<F: 'static>(
        &self,
        get: impl Fn(&T) -> F + 'static,
        set: impl Fn(&mut T, F) + 'static,
    ) -> Binding<F> {
        let read = self.clone();
        let write = self.clone();
        Binding::new(
            move || get(&read.get()),
            move |part| {
                let mut whole = write.get();
                set(&mut whole, part);
                write.set(whole);
            },
        )
    }
}

impl<T: Clone + PartialEq + 'static> Binding<T> {
    /// Bind directly to an observable store.
    pub fn from_observable(source: &Observable<T>) -> Self {
        let read = source.clone();
        let write = source.clone();
        Self::new(move || read.get(), move |value| write.set(value))
    }
}

impl<T: Clone + PartialEq + 'static> From<&Observable<T>> for Binding<T> {
    fn from(source: &Observable<T>) -> Self {
        Self::from_observable(source)
    }
}

/// Create a [`Binding`] to an observable.
///
/// ```
/// use betterbind_core::{Observable, bind};
///
/// let name = Observable::new(String::from("a"));
/// let b = bind!(name);
/// assert_eq!(b.get(), "a");
/// ```
#[macro_export]
macro_rules! bind {
    ($obs:expr) => {
        $crate::Binding::from_observable(&$obs)
    };
}

/// Project a [`Binding`] of a struct onto one of its fields.
///
/// ```
/// use betterbind_core::{Binding, Observable, bind, bind_field};
///
/// #[derive(Clone, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// let p = Observable::new(Point { x: 1, y: 2 });
/// let x = bind_field!(bind!(p), x);
/// x.set(7);
/// assert_eq!(p.get().x, 7);
/// assert_eq!(p.get().y, 2);
/// ```
#[macro_export]
macro_rules! bind_field {
    ($binding:expr, $field:ident) => {
        $binding.project(
            |whole| ::core::clone::Clone::clone(&whole.$field),
            |whole, part| whole.$field = part,
        )
    };
}
