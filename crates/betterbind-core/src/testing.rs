#![forbid(unsafe_code)]

//! Recording binding sources for tests.
//!
//! [`WriteLog<T>`] is a plain backing store that records every write it
//! receives, including writes of a value equal to the current one. This is
//! what lets tests assert that a derived binding resolved a toggle as a
//! no-op instead of issuing a redundant write.

use std::cell::RefCell;
use std::rc::Rc;

use crate::binding::Binding;

struct LogInner<T> {
    value: T,
    history: Vec<T>,
}

/// A backing store that records writes.
pub struct WriteLog<T> {
    inner: Rc<RefCell<LogInner<T>>>,
}

impl<T> Clone for WriteLog<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for WriteLog<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("WriteLog")
            .field("value", &inner.value)
            .field("writes", &inner.history.len())
            .finish()
    }
}

impl<T: Clone + 'static> WriteLog<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LogInner {
                value,
                history: Vec::new(),
            })),
        }
    }

    /// A binding whose writes are recorded by this log.
    #[must_use]
    pub fn binding(&self) -> Binding<T> {
        let read = Rc::clone(&self.inner);
        let write = Rc::clone(&self.inner);
        Binding::new(
            move || read.borrow().value.clone(),
            move |value: T| {
                let mut inner = write.borrow_mut();
                inner.history.push(value.clone());
                inner.value = value;
            },
        )
    }

    /// Current stored value.
    #[must_use]
    pub fn value(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Number of writes received so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.inner.borrow().history.len()
    }

    /// Every written value, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<T> {
        self.inner.borrow().history.clone()
    }

    /// Forget recorded writes, keeping the current value.
    pub fn reset(&self) {
        self.inner.borrow_mut().history.clear();
    }
}
