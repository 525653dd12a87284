#![forbid(unsafe_code)]

//! Observable value store with change notification and version tracking.
//!
//! # Design
//!
//! [`Observable<T>`] wraps a value of type `T` in shared, reference-counted
//! storage (`Rc<RefCell<..>>`). It is the backing store that a
//! [`Binding`](crate::Binding) reads from and writes to; the binding layer
//! never owns state itself. When the value changes (determined by
//! `PartialEq`), all live subscribers are notified in registration order.
//!
//! # Performance
//!
//! | Operation     | Complexity                 |
//! |---------------|----------------------------|
//! | `get()`       | O(1) + clone of `T`        |
//! | `set()`       | O(S) where S = subscribers |
//! | `subscribe()` | O(1) amortized             |
//!
//! # Failure Modes
//!
//! - **Write during `with()`**: `set()`/`update()` panic (RefCell borrow
//!   rules). Use [`Observable::try_set`] / [`Observable::try_update`] to get
//!   [`BindingError::Borrowed`] instead.
//! - **Subscriber leak**: If `Subscription` guards are stored indefinitely
//!   without being dropped, callbacks accumulate. Dead weak references are
//!   cleaned lazily during `notify()`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::BindingError;

type Listener<T> = Rc<dyn Fn(&T)>;

struct ObservableInner<T> {
    value: T,
    version: u64,
    /// Dead entries are pruned on notify.
    subscribers: Vec<Weak<dyn Fn(&T)>>,
}

/// A shared, version-tracked value with change notification.
///
/// Cloning an `Observable` creates a new handle to the **same** inner state:
/// both handles see the same value and share subscribers.
///
/// # Invariants
///
/// 1. `version` increments by exactly 1 on each value-changing mutation.
/// 2. `set(v)` where `v == current` is a no-op.
/// 3. Subscribers are notified in registration order.
/// 4. Dead subscribers (dropped [`Subscription`] guards) are pruned lazily.
pub struct Observable<T> {
    inner: Rc<RefCell<ObservableInner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Default + Clone + PartialEq + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Create a new observable with the given initial value.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservableInner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Get a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Access the current value by reference without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Set a new value, notifying subscribers if it differs from the current one.
    ///
    /// # Panics
    ///
    /// Panics if the value is borrowed (e.g. called from inside [`with`](Self::with)).
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
    }

    /// Non-panicking [`set`](Self::set).
    ///
    /// Returns `Ok(true)` when the value changed, `Ok(false)` when the new
    /// value was equal to the current one.
    pub fn try_set(&self, value: T) -> Result<bool, BindingError> {
        {
            let mut inner = self.inner.try_borrow_mut().map_err(|_| {
                tracing::debug!("observable try_set rejected: value borrowed");
                BindingError::Borrowed
            })?;
            if inner.value == value {
                return Ok(false);
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
        Ok(true)
    }

    /// Modify the value in place. Subscribers are notified only if the value
    /// changed (compared against a snapshot).
    ///
    /// # Panics
    ///
    /// Panics if the value is borrowed.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            Self::apply(&mut inner, f)
        };
        if changed {
            self.notify();
        }
    }

    /// Non-panicking [`update`](Self::update).
    pub fn try_update(&self, f: impl FnOnce(&mut T)) -> Result<bool, BindingError> {
        let changed = {
            let mut inner = self.inner.try_borrow_mut().map_err(|_| {
                tracing::debug!("observable try_update rejected: value borrowed");
                BindingError::Borrowed
            })?;
            Self::apply(&mut inner, f)
        };
        if changed {
            self.notify();
        }
        Ok(changed)
    }

    fn apply(inner: &mut ObservableInner<T>, f: impl FnOnce(&mut T)) -> bool {
        let old = inner.value.clone();
        f(&mut inner.value);
        if inner.value != old {
            inner.version += 1;
            true
        } else {
            false
        }
    }

    /// Register `listener` to run after every value-changing write.
    ///
    /// The listener stays registered while the returned [`Subscription`] is
    /// alive. Listeners run after the store is released, so they may read the
    /// store or write to it again.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription<T> {
        let listener: Listener<T> = Rc::new(listener);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&listener));
        Subscription { listener }
    }

    /// Number of value-changing writes since construction.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Registered listeners, counting dropped ones until the next change
    /// prunes them.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn notify(&self) {
        let (value, version, live) = {
            let mut inner = self.inner.borrow_mut();
            let mut live = Vec::with_capacity(inner.subscribers.len());
            inner.subscribers.retain(|weak| match weak.upgrade() {
                Some(listener) => {
                    live.push(listener);
                    true
                }
                None => false,
            });
            (inner.value.clone(), inner.version, live)
        };
        tracing::trace!(version, listeners = live.len(), "observable: changed");
        for listener in live {
            listener(&value);
        }
    }
}

#[cfg(feature = "state-persistence")]
impl<T> serde::Serialize for Observable<T>
where
    T: serde::Serialize + Clone + PartialEq + 'static,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.with(|value| value.serialize(serializer))
    }
}

#[cfg(feature = "state-persistence")]
impl<'de, T> serde::Deserialize<'de> for Observable<T>
where
    T: serde::Deserialize<'de> + Clone + PartialEq + 'static,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

/// Keeps a listener registered; dropping it unregisters the listener.
#[must_use = "dropping a Subscription unregisters its listener"]
pub struct Subscription<T> {
    listener: Listener<T>,
}

impl<T> std::fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("holders", &Rc::strong_count(&self.listener))
            .finish()
    }
}
