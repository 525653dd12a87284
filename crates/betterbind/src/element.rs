#![forbid(unsafe_code)]

//! Element lookup by identity in an ordered collection.
//!
//! `items.element(id)` is a `Binding<Option<E>>` onto the element whose
//! [`Identifiable::id`] equals `id`:
//!
//! - read: the first match, or `None`.
//! - write `Some(e)`: replace the first match in place, or append `e`.
//! - write `None`: remove every match.
//!
//! Identity is expected to be unique. When it is not, reads see the first
//! duplicate and removal drops all of them.

use std::rc::Rc;

use betterbind_core::Binding;

use crate::collection::Sequence;

/// A value with a stable identity, independent of its other fields.
pub trait Identifiable {
    type Id: PartialEq;

    fn id(&self) -> Self::Id;
}

impl<T: Identifiable + 'static> Identifiable for Binding<T> {
    type Id = T::Id;

    fn id(&self) -> T::Id {
        self.get().id()
    }
}

/// Identity lookup on a binding of a [`Sequence`].
pub trait ElementExt {
    type Element: Identifiable;

    fn element(&self, id: <Self::Element as Identifiable>::Id) -> Binding<Option<Self::Element>>;
}

impl<C> ElementExt for Binding<C>
where
    C: Sequence + 'static,
    C::Element: Identifiable + Clone + 'static,
    <C::Element as Identifiable>::Id: 'static,
{
    type Element = C::Element;

    fn element(&self, id: <C::Element as Identifiable>::Id) -> Binding<Option<C::Element>> {
        let id = Rc::new(id);
        let read = self.clone();
        let write = self.clone();
        let read_id = Rc::clone(&id);
        Binding::new(
            move || read.get().elements().find(|e| e.id() == *read_id).cloned(),
            move |value: Option<C::Element>| {
                let mut items = write.get();
                match value {
                    Some(element) => {
                        let position = items.elements().position(|e| e.id() == *id);
                        match position {
                            Some(index) => {
                                tracing::trace!(index, "element: replace in place");
                                items.replace_at(index, element);
                            }
                            None => {
                                tracing::trace!("element: append");
                                items.push_back(element);
                            }
                        }
                    }
                    None => {
                        items.retain_elements(|e| e.id() != *id);
                        tracing::trace!("element: remove");
                    }
                }
                write.set(items);
            },
        )
    }
}
