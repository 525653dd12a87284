#![forbid(unsafe_code)]

//! Collection capabilities needed by the predicate and element combinators.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// A collection that can report and reach emptiness.
pub trait Collection {
    fn is_empty(&self) -> bool;

    /// Remove every element.
    fn clear(&mut self);
}

/// A set with membership, insertion and removal.
pub trait SetLike {
    type Item;

    fn contains_item(&self, item: &Self::Item) -> bool;

    /// Returns `true` if the item was not present.
    fn insert_item(&mut self, item: Self::Item) -> bool;

    /// Returns `true` if the item was present.
    fn remove_item(&mut self, item: &Self::Item) -> bool;
}

/// An ordered sequence that supports in-place replacement and appending.
pub trait Sequence {
    type Element;

    fn elements(&self) -> impl Iterator<Item = &Self::Element>;

    fn replace_at(&mut self, index: usize, element: Self::Element);

    fn push_back(&mut self, element: Self::Element);

    fn retain_elements(&mut self, keep: impl FnMut(&Self::Element) -> bool);
}

macro_rules! impl_collection {
    ($($ty:ident<$($param:ident),+>),+ $(,)?) => {
        $(
            impl<$($param),+> Collection for $ty<$($param),+> {
                #[inline]
                fn is_empty(&self) -> bool {
                    $ty::is_empty(self)
                }

                #[inline]
                fn clear(&mut self) {
                    $ty::clear(self)
                }
            }
        )+
    };
}

impl_collection!(
    Vec<T>,
    VecDeque<T>,
    BTreeSet<T>,
    BTreeMap<K, V>,
    HashSet<T, S>,
    HashMap<K, V, S>,
);

impl Collection for String {
    #[inline]
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }

    #[inline]
    fn clear(&mut self) {
        String::clear(self)
    }
}

impl<T: Eq + Hash, S: BuildHasher> SetLike for HashSet<T, S> {
    type Item = T;

    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn insert_item(&mut self, item: T) -> bool {
        self.insert(item)
    }

    fn remove_item(&mut self, item: &T) -> bool {
        self.remove(item)
    }
}

impl<T: Ord> SetLike for BTreeSet<T> {
    type Item = T;

    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn insert_item(&mut self, item: T) -> bool {
        self.insert(item)
    }

    fn remove_item(&mut self, item: &T) -> bool {
        self.remove(item)
    }
}

impl<E> Sequence for Vec<E> {
    type Element = E;

    fn elements(&self) -> impl Iterator<Item = &E> {
        self.iter()
    }

    fn replace_at(&mut self, index: usize, element: E) {
        self[index] = element;
    }

    fn push_back(&mut self, element: E) {
        self.push(element);
    }

    fn retain_elements(&mut self, keep: impl FnMut(&E) -> bool) {
        self.retain(keep);
    }
}

impl<E> Sequence for VecDeque<E> {
    type Element = E;

    fn elements(&self) -> impl Iterator<Item = &E> {
        self.iter()
    }

    fn replace_at(&mut self, index: usize, element: E) {
        self[index] = element;
    }

    fn push_back(&mut self, element: E) {
        VecDeque::push_back(self, element);
    }

    fn retain_elements(&mut self, keep: impl FnMut(&E) -> bool) {
        self.retain(keep);
    }
}
