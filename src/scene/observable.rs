//! Callback registration with opaque unsubscribe handles.
//!
//! An [`Observable`] is a single event channel. Observers are invoked in
//! registration order. Adding or removing observers from inside a callback
//! is allowed; the change takes effect on the next notification.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback<E> = Rc<RefCell<dyn FnMut(&mut E)>>;

/// Opaque token returned by [`Observable::add`].
///
/// Pass it back to [`Observable::remove`] to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

/// Event channel delivering `&mut E` to every registered observer.
pub struct Observable<E> {
    next_id: Cell<u64>,
    observers: RefCell<Vec<(ObserverHandle, Callback<E>)>>,
}

impl<E> Default for Observable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Observable<E> {
    /// Create a channel with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Register `callback` and return its unsubscribe handle.
    pub fn add(&self, callback: impl FnMut(&mut E) + 'static) -> ObserverHandle {
        let handle = ObserverHandle(self.next_id.get());
        self.next_id.set(handle.0 + 1);
        let callback: Callback<E> = Rc::new(RefCell::new(callback));
        self.observers.borrow_mut().push((handle, callback));
        handle
    }

    /// Unregister the observer behind `handle`.
    ///
    /// Returns `false` when the handle was already removed.
    pub fn remove(&self, handle: ObserverHandle) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(h, _)| *h != handle);
        observers.len() != before
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Whether no observer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }

    /// Deliver `event` to every observer registered at call time.
    ///
    /// An observer must not notify the channel it is being called from.
    pub fn notify(&self, event: &mut E) {
        let snapshot: Vec<Callback<E>> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in snapshot {
            let mut callback = callback.borrow_mut();
            (&mut *callback)(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observers_run_in_registration_order() {
        let channel: Observable<Vec<u32>> = Observable::new();
        let _ = channel.add(|log: &mut Vec<u32>| log.push(1));
        let _ = channel.add(|log: &mut Vec<u32>| log.push(2));

        let mut log = Vec::new();
        channel.notify(&mut log);
        assert_eq!(log, vec![1, 2]);
    }

    #[test]
    fn removed_observer_is_not_called() {
        let channel: Observable<u32> = Observable::new();
        let first = channel.add(|n: &mut u32| *n += 1);
        let _ = channel.add(|n: &mut u32| *n += 10);

        assert!(channel.remove(first));
        let mut n = 0;
        channel.notify(&mut n);
        assert_eq!(n, 10);
        assert_eq!(channel.len(), 1);
    }

    #[test]
    fn double_remove_reports_false() {
        let channel: Observable<u32> = Observable::new();
        let handle = channel.add(|_| {});
        assert!(channel.remove(handle));
        assert!(!channel.remove(handle));
        assert!(channel.is_empty());
    }

    #[test]
    fn observer_can_unsubscribe_itself() {
        let channel: Rc<Observable<u32>> = Rc::new(Observable::new());
        let slot: Rc<Cell<Option<ObserverHandle>>> = Rc::new(Cell::new(None));

        let weak = Rc::downgrade(&channel);
        let slot_in = Rc::clone(&slot);
        let handle = channel.add(move |n: &mut u32| {
            *n += 1;
            if let (Some(channel), Some(handle)) = (weak.upgrade(), slot_in.get())
            {
                let _ = channel.remove(handle);
            }
        });
        slot.set(Some(handle));

        let mut n = 0;
        channel.notify(&mut n);
        channel.notify(&mut n);
        assert_eq!(n, 1);
    }
}
