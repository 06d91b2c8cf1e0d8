use std::{cell::RefCell, rc::Rc};

use log::trace;

pub trait Observer {
    fn update(&self);
}

pub trait Subject<O: Observer + ?Sized = dyn Observer> {
    fn register_observer(&self, observer: Rc<O>);
    fn notify_observers(&self);
}

pub type SharedObservers<O = dyn Observer> = Vec<Rc<O>>;

/// Holds a single piece of state and notifies every registered observer each
/// time it is set.
///
/// Observers are expected to pull the new value through [`ObservableState::state`]
/// from within their `update`, which always returns the value of the
/// `set_state` call that triggered the pass.
pub struct ObservableState<T, O: ?Sized = dyn Observer> {
    observers: RefCell<SharedObservers<O>>,
    state: RefCell<Option<T>>,
}

pub type StateSubject = ObservableState<String>;

impl<T, O: ?Sized> Default for ObservableState<T, O> {
    fn default() -> Self {
        Self {
            observers: RefCell::new(vec![]),
            state: RefCell::new(None),
        }
    }
}

impl<T, O> Subject<O> for ObservableState<T, O>
where
    O: Observer + ?Sized,
{
    fn register_observer(&self, observer: Rc<O>) {
        let mut observers = self.observers.borrow_mut();
        observers.push(observer);
        trace!("Observer registered ({} total)", observers.len());
    }

    fn notify_observers(&self) {
        // Snapshot so that observers may register others or set the state
        // again while the pass is running.
        let observers = self.observers.borrow().clone();
        trace!("Notifying {} observers", observers.len());
        for obs in &observers {
            obs.update();
        }
    }
}

impl<T, O> ObservableState<T, O>
where
    T: Clone,
    O: Observer + ?Sized,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<T> {
        self.state.borrow().clone()
    }

    pub fn set_state(&self, state: T) {
        *self.state.borrow_mut() = Some(state);
        self.notify_observers();
    }

    /// Number of registrations, duplicates included.
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }
}
