//! Events.

use core::fmt;
use parking_lot::Mutex;
use std::sync::Arc;

/// Types of pointing devices or mechanisms.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDevice {
    /// Touch input from a finger or something of the sort; is expected to be imprecise.
    Touch = 0,

    /// Any indirect input mechanism.
    Cursor = 1,

    /// Keyboard activation of the focused target.
    Keyboard = 2,
}

impl PointerDevice {
    /// If true, the input mechanism is precise and can hit small targets.
    pub fn is_precise(&self) -> bool {
        match self {
            PointerDevice::Touch => false,
            PointerDevice::Cursor | PointerDevice::Keyboard => true,
        }
    }
}

/// An activation of a target: a tap, a click, or a keyboard confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activate {
    pub device: PointerDevice,
}

impl Activate {
    pub fn tap() -> Activate {
        Activate {
            device: PointerDevice::Touch,
        }
    }
}

impl Default for Activate {
    fn default() -> Self {
        Activate::tap()
    }
}

/// A shareable event callback.
pub struct EventHandler<Type>(Arc<Mutex<dyn FnMut(Type) + Send>>);

impl<T> Clone for EventHandler<T> {
    fn clone(&self) -> Self {
        EventHandler(Arc::clone(&self.0))
    }
}

impl<T> EventHandler<T> {
    pub fn new<F: 'static + FnMut(T) + Send>(handler: F) -> Self {
        EventHandler(Arc::new(Mutex::new(handler)))
    }

    /// Calls the handler.
    ///
    /// Handlers are not reentrant; firing a handler from inside itself deadlocks.
    pub fn fire(&self, event: T) {
        let mut handler = self.0.lock();
        (*handler)(event)
    }

    /// Returns true if both handlers share the same callback.
    pub fn ptr_eq(&self, other: &EventHandler<T>) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> fmt::Debug for EventHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EventHandler<{}>", std::any::type_name::<T>())
    }
}

#[test]
fn test_handler_clones_share_state() {
    let count = Arc::new(Mutex::new(0));
    let handler = {
        let count = Arc::clone(&count);
        EventHandler::new(move |_: Activate| *count.lock() += 1)
    };
    let clone = handler.clone();
    handler.fire(Activate::tap());
    clone.fire(Activate::default());
    assert_eq!(*count.lock(), 2);
    assert!(handler.ptr_eq(&clone));
}
