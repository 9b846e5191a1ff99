//! State Handles
//!
//! A cell holding a page's state record. Controllers only touch state
//! through short closures, so no borrow is ever held across an `await`.

use std::cell::RefCell;

pub trait StateHandle<S> {
    fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R;

    fn modify(&self, f: impl FnOnce(&mut S));

    fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.with_state(S::clone)
    }
}

impl<S> StateHandle<S> for RefCell<S> {
    fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.borrow())
    }

    fn modify(&self, f: impl FnOnce(&mut S)) {
        f(&mut self.borrow_mut())
    }
}
