#![forbid(unsafe_code)]

//! Composable derived bindings.
//!
//! Every combinator here takes a source [`Binding`] and returns a new one
//! whose `get`/`set` are written in terms of the source's. Nothing is
//! cached and no state is owned: the derived binding is a view that stays
//! in sync with whatever store backs the source.
//!
//! - [`adapters`]: `as_optional`, `with_default`, `has_value`, `has_value_or`
//! - [`predicates`]: `equals`, `contains`, `is_empty`
//! - [`gate`]: `when` (optional) and `and` (boolean)
//! - [`element`]: `element(id)` lookup by [`Identifiable`] identity
//! - [`will_set`]: `on_will_set` hooks described by [`HashableClosure`]
//! - [`equatable`]: [`EquatableBinding`], compared by current value
//!
//! Combinators are extension traits on [`Binding`]; import them all with
//! [`prelude`].
//!
//! ```
//! use betterbind::prelude::*;
//! use betterbind_core::{Observable, bind};
//!
//! #[derive(Clone, PartialEq)]
//! struct Todo { id: u32, title: String }
//!
//! impl Identifiable for Todo {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.id }
//! }
//!
//! let todos = Observable::new(vec![Todo { id: 1, title: "a".into() }]);
//! let second = bind!(todos)
//!     .element(2)
//!     .with_default(Todo { id: 2, title: String::new() });
//!
//! assert_eq!(second.get().title, "");
//! second.set(Todo { id: 2, title: "b".into() });
//! assert_eq!(todos.get().len(), 2);
//! ```
//!
//! # Concurrency
//!
//! Single-threaded. Bindings hold `Rc` accessors and run synchronously on
//! the caller's thread. Synchronizing the backing store is the host's job.

pub mod adapters;
pub mod collection;
pub mod element;
pub mod equatable;
pub mod gate;
pub mod optional;
pub mod predicates;
pub mod will_set;

pub use betterbind_core::Binding;

pub use adapters::{AsOptionalExt, OptionalBindingExt};
pub use collection::{Collection, Sequence, SetLike};
pub use element::{ElementExt, Identifiable};
pub use equatable::{EquatableBinding, EquatableExt};
pub use gate::{AndExt, WhenExt};
pub use optional::OptionalLike;
pub use predicates::{ContainsExt, EqualsExt, IsEmptyExt};
pub use will_set::{HashableClosure, WillSetExt};

/// Everything needed to build derived bindings.
pub mod prelude {
    pub use crate::adapters::{AsOptionalExt, OptionalBindingExt};
    pub use crate::element::{ElementExt, Identifiable};
    pub use crate::equatable::{EquatableBinding, EquatableExt};
    pub use crate::gate::{AndExt, WhenExt};
    pub use crate::optional::OptionalLike;
    pub use crate::predicates::{ContainsExt, EqualsExt, IsEmptyExt};
    pub use crate::will_set::{HashableClosure, WillSetExt};
    pub use betterbind_core::Binding;
}
