//! Observer protocol for observable entities
//!
//! Listeners are registered on a [`Listeners`] registry and notified
//! synchronously, in attachment order, whenever a tracked field of the
//! owning entity changes. Dispatch is capability-checked: the notification
//! payload is a `&dyn Observable`, and a listener asks the payload for the
//! capabilities it cares about (today, [`SnapshotSource`]) instead of
//! matching on a concrete type. That keeps recorders reusable across
//! observable kinds.
//!
//! Observers are shared via `Rc<RefCell<_>>` on a single logical thread and
//! fan-out is a direct, blocking loop. A listener error aborts the remaining
//! fan-out and propagates to the caller of the triggering mutator; there is
//! no isolation between listeners.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::DomainError;
use crate::snapshot::SnapshotSource;

/// Shared handle to a listener. Identity (for detach) is the `Rc` allocation.
pub type SharedObserver = Rc<RefCell<dyn Observer>>;

/// A listener notified when an observable entity mutates a tracked field.
pub trait Observer {
    /// React to a state change on `subject`.
    ///
    /// Called after the mutation has been applied, so queries against the
    /// subject observe the new value.
    fn update(&mut self, subject: &dyn Observable) -> Result<(), DomainError>;
}

/// Notification payload handed to listeners.
pub trait Observable {
    /// Expose the snapshot capability, if this entity supports it.
    fn as_snapshot_source(&self) -> Option<&dyn SnapshotSource> {
        None
    }
}

/// Ordered registry of attached listeners.
///
/// Duplicates are allowed: attaching the same listener twice yields two
/// notifications per qualifying change. Detach removes the first match.
#[derive(Default)]
pub struct Listeners {
    items: Vec<SharedObserver>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener to the registry. No dedup.
    pub fn attach(&mut self, observer: SharedObserver) {
        self.items.push(observer);
    }

    /// Remove the first registry entry pointing at the same listener.
    ///
    /// Fails with [`DomainError::ListenerNotFound`] when the listener is not
    /// attached; the registry is left unchanged in that case.
    pub fn detach(&mut self, observer: &SharedObserver) -> Result<(), DomainError> {
        let position = self
            .items
            .iter()
            .position(|attached| Rc::ptr_eq(attached, observer))
            .ok_or(DomainError::ListenerNotFound)?;
        self.items.remove(position);
        Ok(())
    }

    /// Notify every attached listener, synchronously, in attachment order.
    ///
    /// The first listener error aborts the remaining fan-out and propagates.
    pub fn notify_all(&self, subject: &dyn Observable) -> Result<(), DomainError> {
        for observer in &self.items {
            observer.borrow_mut().update(subject)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.items.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Observer that counts notifications, optionally failing after a limit.
    struct CountingObserver {
        seen: u32,
        fail_after: Option<u32>,
    }

    impl CountingObserver {
        fn new() -> Self {
            Self {
                seen: 0,
                fail_after: None,
            }
        }

        fn failing_after(limit: u32) -> Self {
            Self {
                seen: 0,
                fail_after: Some(limit),
            }
        }
    }

    impl Observer for CountingObserver {
        fn update(&mut self, _subject: &dyn Observable) -> Result<(), DomainError> {
            if let Some(limit) = self.fail_after {
                if self.seen >= limit {
                    return Err(DomainError::validation("observer refused update"));
                }
            }
            self.seen += 1;
            Ok(())
        }
    }

    struct BareSubject;

    impl Observable for BareSubject {}

    /// Observer that appends its tag to a shared log on every update.
    struct TaggedObserver {
        tag: u32,
        log: Rc<RefCell<Vec<u32>>>,
    }

    impl Observer for TaggedObserver {
        fn update(&mut self, _subject: &dyn Observable) -> Result<(), DomainError> {
            self.log.borrow_mut().push(self.tag);
            Ok(())
        }
    }

    #[test]
    fn test_notify_all_in_attachment_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let first: SharedObserver = Rc::new(RefCell::new(TaggedObserver {
            tag: 1,
            log: log.clone(),
        }));
        let second: SharedObserver = Rc::new(RefCell::new(TaggedObserver {
            tag: 2,
            log: log.clone(),
        }));

        let mut listeners = Listeners::new();
        listeners.attach(first);
        listeners.attach(second);

        listeners.notify_all(&BareSubject).expect("fan-out succeeds");
        assert_eq!(*log.borrow(), [1, 2]);
    }

    #[test]
    fn test_duplicate_attach_notifies_twice() {
        let observer = Rc::new(RefCell::new(CountingObserver::new()));
        let shared: SharedObserver = observer.clone();

        let mut listeners = Listeners::new();
        listeners.attach(shared.clone());
        listeners.attach(shared);

        listeners.notify_all(&BareSubject).expect("fan-out succeeds");
        assert_eq!(observer.borrow().seen, 2);
    }

    #[test]
    fn test_detach_removes_one_entry() {
        let observer = Rc::new(RefCell::new(CountingObserver::new()));
        let shared: SharedObserver = observer.clone();

        let mut listeners = Listeners::new();
        listeners.attach(shared.clone());
        listeners.attach(shared.clone());
        listeners.detach(&shared).expect("listener is attached");

        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn test_detach_missing_listener_fails() {
        let attached: SharedObserver = Rc::new(RefCell::new(CountingObserver::new()));
        let stranger: SharedObserver = Rc::new(RefCell::new(CountingObserver::new()));

        let mut listeners = Listeners::new();
        listeners.attach(attached);

        let err = listeners.detach(&stranger).expect_err("not attached");
        assert_eq!(err, DomainError::ListenerNotFound);
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn test_failing_listener_aborts_remaining_fanout() {
        let failing: SharedObserver = Rc::new(RefCell::new(CountingObserver::failing_after(0)));
        let downstream = Rc::new(RefCell::new(CountingObserver::new()));
        let downstream_shared: SharedObserver = downstream.clone();

        let mut listeners = Listeners::new();
        listeners.attach(failing);
        listeners.attach(downstream_shared);

        assert!(listeners.notify_all(&BareSubject).is_err());
        assert_eq!(downstream.borrow().seen, 0);
    }
}
