#![forbid(unsafe_code)]

//! Host-side binding primitives for betterbind.
//!
//! - [`Observable`]: a shared, version-tracked value store with change
//!   notification via subscriber callbacks.
//! - [`Subscription`]: RAII guard that unsubscribes on drop.
//! - [`Binding`]: a two-way accessor (`get`/`set`) over state owned
//!   elsewhere, usually an `Observable`.
//!
//! # Architecture
//!
//! Everything is single-threaded: stores use `Rc<RefCell<..>>` and bindings
//! hold `Rc` accessors, so neither is `Send`. Combinators that derive new
//! bindings live in the `betterbind` crate; this crate only supplies the
//! primitive they wrap.

pub mod binding;
pub mod error;
pub mod observable;
#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use binding::Binding;
pub use error::{BindingError, Result};
pub use observable::{Observable, Subscription};
