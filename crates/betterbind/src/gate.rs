#![forbid(unsafe_code)]

//! Gates: hide a binding's value behind a condition without changing writes.
//!
//! Both forms apply the condition on read only. Writes always reach the
//! source unchanged, so a gated control can still be edited while its
//! displayed value is suppressed. For the boolean form this means reading
//! back after a write may not return what was written:
//!
//! ```
//! use betterbind::prelude::*;
//! use betterbind_core::{Observable, bind};
//!
//! let enabled = Observable::new(false);
//! let shown = bind!(enabled).and(false);
//! shown.set(true);
//! assert!(enabled.get());
//! assert!(!shown.get());
//! ```

use betterbind_core::Binding;

use crate::optional::OptionalLike;

/// Gate for optional bindings.
pub trait WhenExt {
    /// Reads as absent unless `condition` holds. Writes pass through.
    fn when(&self, condition: bool) -> Self;
}

impl<V: OptionalLike + 'static> WhenExt for Binding<V> {
    fn when(&self, condition: bool) -> Self {
        let read = self.clone();
        let write = self.clone();
        Binding::new(
            move || {
                if condition {
                    read.get()
                } else {
                    V::absent()
                }
            },
            move |value| write.set(value),
        )
    }
}

/// Gate for boolean bindings.
pub trait AndExt {
    /// Reads as `source && condition`. Writes store the raw value.
    fn and(&self, condition: bool) -> Self;
}

impl AndExt for Binding<bool> {
    fn and(&self, condition: bool) -> Self {
        let read = self.clone();
        let write = self.clone();
        Binding::new(move || read.get() && condition, move |value| write.set(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use betterbind_core::testing::WriteLog;
    use betterbind_core::{Observable, bind};

    #[test]
    fn when_true_passes_value() {
        let obs = Observable::new(Some(3));
        assert_eq!(bind!(obs).when(true).get(), Some(3));
    }

    #[test]
    fn when_false_reads_absent() {
        let obs = Observable::new(Some(3));
        assert_eq!(bind!(obs).when(false).get(), None);
        assert_eq!(obs.get(), Some(3), "reading must not touch the source");
    }

    #[test]
    fn when_false_still_writes() {
        let log = WriteLog::new(Some(1));
        let gated = log.binding().when(false);
        gated.set(Some(9));
        assert_eq!(log.value(), Some(9));
        gated.set(None);
        assert_eq!(log.value(), None);
        assert_eq!(log.writes(), 2);
    }

    #[test]
    fn and_reads_conjunction() {
        let obs = Observable::new(true);
        assert!(bind!(obs).and(true).get());
        assert!(!bind!(obs).and(false).get());
        obs.set(false);
        assert!(!bind!(obs).and(true).get());
    }

    #[test]
    fn and_writes_raw_value_ignoring_condition() {
        let log = WriteLog::new(true);
        let gated = log.binding().and(false);
        gated.set(false);
        assert!(!log.value());
        gated.set(true);
        assert!(log.value());
        assert!(!gated.get());
        assert_eq!(log.history(), vec![false, true]);
    }
}
