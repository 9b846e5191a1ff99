//! Page State Store
//!
//! Page state records live in a signal; controllers reach them through
//! the core `StateHandle` trait.

use leptos::prelude::*;
use taskboard_core::pages::StateHandle;

/// A page state record held in an `RwSignal`
pub struct SignalState<S: Send + Sync + 'static>(RwSignal<S>);

impl<S: Send + Sync + 'static> SignalState<S> {
    pub fn new(initial: S) -> Self {
        Self(RwSignal::new(initial))
    }

    /// Reactive read for views
    pub fn select<T: PartialEq + Send + Sync + 'static>(&self, f: impl Fn(&S) -> T + Send + Sync + 'static) -> Memo<T> {
        let signal = self.0;
        Memo::new(move |_| signal.with(|s| f(s)))
    }
}

impl<S: Send + Sync + 'static> Clone for SignalState<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Send + Sync + 'static> Copy for SignalState<S> {}

impl<S: Send + Sync + 'static> StateHandle<S> for SignalState<S> {
    fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn modify(&self, f: impl FnOnce(&mut S)) {
        self.0.update(f);
    }
}
