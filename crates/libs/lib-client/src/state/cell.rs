//! Read/write access to view state that may outlive its view.

use std::cell::RefCell;
use std::rc::Rc;

/// A handle over a piece of view state.
///
/// Both methods return `None` when the state is gone (the view that owned it was
/// unmounted) or currently borrowed. Async drivers treat `None` like a superseded
/// result and drop whatever they were about to apply.
pub trait StateCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateCell<T> for RefCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_borrow().ok().map(|value| f(&value))
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut value| f(&mut value))
    }
}

impl<T, C: StateCell<T>> StateCell<T> for Rc<C> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        (**self).read(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        (**self).write(f)
    }
}
