//! Change Listeners
//!
//! Plain callback lists used by the stateful containers to tell the view
//! layer that a new snapshot is available.

use std::cell::RefCell;
use std::rc::Rc;

type Listener<S> = Rc<dyn Fn(&S)>;

pub(crate) struct Listeners<S> {
    callbacks: RefCell<Vec<Listener<S>>>,
}

impl<S> Default for Listeners<S> {
    fn default() -> Self {
        Self {
            callbacks: RefCell::new(Vec::new()),
        }
    }
}

impl<S> Listeners<S> {
    pub fn add(&self, callback: impl Fn(&S) + 'static) {
        self.callbacks.borrow_mut().push(Rc::new(callback));
    }

    /// Call every listener with `snapshot`. Listeners may subscribe more
    /// callbacks while being notified; those only see later emits.
    pub fn emit(&self, snapshot: &S) {
        let callbacks = self.callbacks.borrow().clone();
        for callback in callbacks {
            callback(snapshot);
        }
    }
}
