#![forbid(unsafe_code)]

//! Change hooks that run immediately before a value changes.
//!
//! Closures cannot be compared, but change detection needs bindings (and
//! anything they carry) to be comparable. A [`HashableClosure`] therefore
//! describes a callback as data: a comparable `subject` plus a plain `fn`
//! that receives the subject along with the old and new values. Two
//! descriptors with equal subjects are equal, and calling either must have
//! the same effect. That last part is a usage contract: the `fn` must not
//! depend on anything outside the subject, and nothing checks it.
//!
//! ```
//! use betterbind::prelude::*;
//! use betterbind_core::{Observable, bind};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! #[derive(Clone)]
//! struct Journal(Rc<RefCell<Vec<(i32, i32)>>>);
//!
//! fn record(journal: &Journal, old: &i32, new: &i32) {
//!     journal.0.borrow_mut().push((*old, *new));
//! }
//!
//! let journal = Journal(Rc::default());
//! let value = Observable::new(5);
//! let hooked = bind!(value).on_will_set(HashableClosure::new(journal.clone(), record));
//!
//! hooked.set(5);
//! hooked.set(6);
//! assert_eq!(*journal.0.borrow(), vec![(5, 6)]);
//! ```
//!
//! # Re-entrancy
//!
//! Writing through the same hooked binding from inside its own callback is
//! not supported. Debug builds panic when it happens.

use std::cell::Cell;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use betterbind_core::Binding;

/// A callback described as `(subject, fn)`, compared by subject.
pub struct HashableClosure<S, V> {
    subject: S,
    call: fn(&S, &V, &V),
}

impl<S, V> HashableClosure<S, V> {
    pub fn new(subject: S, call: fn(&S, &V, &V)) -> Self {
        Self { subject, call }
    }

    #[must_use]
    pub fn subject(&self) -> &S {
        &self.subject
    }

    /// Invoke the callback with the old and new values.
    pub fn call(&self, old: &V, new: &V) {
        (self.call)(&self.subject, old, new)
    }
}

impl<S: Clone, V> Clone for HashableClosure<S, V> {
    fn clone(&self) -> Self {
        Self {
            subject: self.subject.clone(),
            call: self.call,
        }
    }
}

impl<S: PartialEq, V> PartialEq for HashableClosure<S, V> {
    fn eq(&self, other: &Self) -> bool {
        self.subject == other.subject
    }
}

impl<S: Eq, V> Eq for HashableClosure<S, V> {}

impl<S: Hash, V> Hash for HashableClosure<S, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.subject.hash(state);
    }
}

impl<S: std::fmt::Debug, V> std::fmt::Debug for HashableClosure<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashableClosure")
            .field("subject", &self.subject)
            .finish_non_exhaustive()
    }
}

/// Marks a will-set callback as running; clears the mark on drop, unwinding
/// included.
struct NotifyGuard<'a>(&'a Cell<bool>);

impl<'a> NotifyGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for NotifyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Attach a [`HashableClosure`] that fires before each real change.
pub trait WillSetExt {
    type Value;

    /// Writes equal to the current value are dropped entirely: no callback
    /// and no write. Otherwise the callback sees `(old, new)` first, then the
    /// value is written.
    fn on_will_set<S: 'static>(&self, closure: HashableClosure<S, Self::Value>) -> Self;
}

impl<T: PartialEq + 'static> WillSetExt for Binding<T> {
    type Value = T;

    fn on_will_set<S: 'static>(&self, closure: HashableClosure<S, T>) -> Self {
        let read = self.clone();
        let write = self.clone();
        let notifying = Rc::new(Cell::new(false));
        Binding::new(
            move || read.get(),
            move |new: T| {
                let old = write.get();
                if old == new {
                    tracing::trace!("on_will_set: unchanged, write suppressed");
                    return;
                }
                debug_assert!(
                    !notifying.get(),
                    "on_will_set: re-entrant write from inside the will-set callback"
                );
                {
                    let _guard = NotifyGuard::enter(&notifying);
                    closure.call(&old, &new);
                }
                tracing::trace!("on_will_set: notified, writing");
                write.set(new);
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use betterbind_core::testing::WriteLog;
    use betterbind_core::{Observable, bind};
    use std::cell::RefCell;
    use std::collections::HashSet;

    type Calls = Rc<RefCell<Vec<(i32, i32)>>>;

    #[derive(Clone)]
    struct Recorder {
        calls: Calls,
    }

    fn push(recorder: &Recorder, old: &i32, new: &i32) {
        recorder.calls.borrow_mut().push((*old, *new));
    }

    fn recorder() -> (Calls, HashableClosure<Recorder, i32>) {
        let calls: Calls = Rc::default();
        let closure = HashableClosure::new(
            Recorder {
                calls: Rc::clone(&calls),
            },
            push,
        );
        (calls, closure)
    }

    #[test]
    fn equal_write_is_fully_suppressed() {
        let log = WriteLog::new(5);
        let (calls, closure) = recorder();
        let hooked = log.binding().on_will_set(closure);

        hooked.set(5);
        assert!(calls.borrow().is_empty());
        assert_eq!(log.writes(), 0);
    }

    #[test]
    fn change_notifies_then_writes() {
        let log = WriteLog::new(5);
        let (calls, closure) = recorder();
        let hooked = log.binding().on_will_set(closure);

        hooked.set(6);
        assert_eq!(*calls.borrow(), vec![(5, 6)]);
        assert_eq!(log.value(), 6);
        assert_eq!(log.writes(), 1);
    }

    #[derive(Clone)]
    struct Snapshot {
        store: Observable<i32>,
        seen: Rc<Cell<i32>>,
    }

    fn snapshot(subject: &Snapshot, _old: &i32, _new: &i32) {
        subject.seen.set(subject.store.get());
    }

    #[test]
    fn callback_runs_before_write() {
        let store = Observable::new(1);
        let seen = Rc::new(Cell::new(-1));
        let subject = Snapshot {
            store: store.clone(),
            seen: Rc::clone(&seen),
        };
        let hooked = bind!(store).on_will_set(HashableClosure::new(subject, snapshot));

        hooked.set(2);
        assert_eq!(seen.get(), 1, "callback must observe the old stored value");
        assert_eq!(store.get(), 2);
    }

    #[test]
    fn get_passes_through() {
        let obs = Observable::new(3);
        let (_calls, closure) = recorder();
        let hooked = bind!(obs).on_will_set(closure);
        obs.set(4);
        assert_eq!(hooked.get(), 4);
    }

    fn noop(_: &&str, _: &i32, _: &i32) {}

    fn other_noop(_: &&str, _: &i32, _: &i32) {}

    #[test]
    fn descriptors_compare_by_subject() {
        let a: HashableClosure<&str, i32> = HashableClosure::new("prefix", noop);
        let b: HashableClosure<&str, i32> = HashableClosure::new("prefix", other_noop);
        let c: HashableClosure<&str, i32> = HashableClosure::new("other", noop);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a.clone(), b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(*a.subject(), "prefix");
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn panicking_callback_propagates() {
        fn boom(_: &(), _: &i32, _: &i32) {
            panic!("boom");
        }
        let obs = Observable::new(0);
        bind!(obs).on_will_set(HashableClosure::new((), boom)).set(1);
    }

    fn reject_two(_: &(), _: &i32, new: &i32) {
        if *new == 2 {
            panic!("two rejected");
        }
    }

    #[test]
    fn caught_callback_panic_leaves_binding_usable() {
        let obs = Observable::new(0);
        let hooked = bind!(obs).on_will_set(HashableClosure::new((), reject_two));

        let attempt = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| hooked.set(2)));
        assert!(attempt.is_err());
        assert_eq!(obs.get(), 0);

        hooked.set(3);
        assert_eq!(obs.get(), 3);
    }

    #[derive(Clone)]
    struct Loopback(Rc<RefCell<Option<Binding<i32>>>>);

    fn write_again(subject: &Loopback, _old: &i32, new: &i32) {
        if let Some(binding) = subject.0.borrow().as_ref() {
            binding.set(new + 1);
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "re-entrant")]
    fn reentrant_write_is_rejected_in_debug() {
        let slot = Loopback(Rc::default());
        let obs = Observable::new(0);
        let hooked = bind!(obs).on_will_set(HashableClosure::new(slot.clone(), write_again));
        *slot.0.borrow_mut() = Some(hooked.clone());
        hooked.set(1);
    }

    #[tracing_test::traced_test]
    #[test]
    fn logs_suppression() {
        let obs = Observable::new(1);
        let (_calls, closure) = recorder();
        bind!(obs).on_will_set(closure).set(1);
        assert!(logs_contain("unchanged, write suppressed"));
    }
}
