#![forbid(unsafe_code)]

//! Predicate combinators: a `bool` binding that answers a question about the
//! source value, plus a rule for what toggling the answer writes back.
//!
//! Every predicate resolves "set to what get already reports" as a no-op,
//! so a control re-asserting its state never produces a write.
//!
//! | Combinator            | `true` writes                   | `false` writes                  |
//! |-----------------------|---------------------------------|---------------------------------|
//! | `equals(value, d)`    | `value`, unless already equal   | `d`, only if currently `value`  |
//! | `contains(item)`      | inserts `item` if missing       | removes `item` if present       |
//! | `is_empty(d)`         | clears, unless already empty    | `d`, only if currently empty    |

use betterbind_core::Binding;

use crate::collection::{Collection, SetLike};

/// Equality against a target value.
pub trait EqualsExt {
    type Value;

    /// `true` while the source equals `value`. Setting `true` stores
    /// `value`; setting `false` while equal stores `default`.
    fn equals(&self, value: Self::Value, default: Self::Value) -> Binding<bool>;
}

impl<T: Clone + PartialEq + 'static> EqualsExt for Binding<T> {
    type Value = T;

    fn equals(&self, value: T, default: T) -> Binding<bool> {
        let read = self.clone();
        let write = self.clone();
        let target = value.clone();
        Binding::new(
            move || read.get() == target,
            move |selected: bool| {
                let matches = write.get() == value;
                match (selected, matches) {
                    (true, false) => write.set(value.clone()),
                    (false, true) => write.set(default.clone()),
                    _ => tracing::trace!(selected, "equals: already resolved, write skipped"),
                }
            },
        )
    }
}

/// Membership in a set.
pub trait ContainsExt {
    type Item;

    /// `true` while the set holds `item`. Setting inserts or removes it.
    fn contains(&self, item: Self::Item) -> Binding<bool>;
}

impl<S> ContainsExt for Binding<S>
where
    S: SetLike + 'static,
    S::Item: Clone + 'static,
{
    type Item = S::Item;

    fn contains(&self, item: S::Item) -> Binding<bool> {
        let read = self.clone();
        let write = self.clone();
        let probe = item.clone();
        Binding::new(
            move || read.get().contains_item(&probe),
            move |member: bool| {
                let mut set = write.get();
                let changed = if member {
                    set.insert_item(item.clone())
                } else {
                    set.remove_item(&item)
                };
                if changed {
                    write.set(set);
                }
            },
        )
    }
}

/// Emptiness of a collection.
pub trait IsEmptyExt {
    type Value;

    /// `true` while the collection is empty. Setting `true` clears it;
    /// setting `false` while empty stores `default`.
    fn is_empty(&self, default: Self::Value) -> Binding<bool>;
}

impl<C> IsEmptyExt for Binding<C>
where
    C: Collection + Clone + 'static,
{
    type Value = C;

    fn is_empty(&self, default: C) -> Binding<bool> {
        let read = self.clone();
        let write = self.clone();
        Binding::new(
            move || Collection::is_empty(&read.get()),
            move |empty: bool| {
                let mut current = write.get();
                match (empty, Collection::is_empty(&current)) {
                    (true, false) => {
                        current.clear();
                        write.set(current);
                    }
                    (false, true) => write.set(default.clone()),
                    _ => {}
                }
            },
        )
    }
}
