use std::rc::Rc;

use crate::document::NodeId;

/// Events delivered to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click, delivered to the listeners of the clicked element.
    Click { target: NodeId },
    /// Key press, delivered to document-level listeners.
    KeyDown { key: Key },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Click { .. } => EventKind::Click,
            Event::KeyDown { .. } => EventKind::KeyDown,
        }
    }
}

/// The kind of event a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    KeyDown,
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

/// A subscribed event handler.
///
/// Listeners are compared by pointer identity: registering the same listener
/// twice is a no-op, and only the exact `Rc` that was added can remove it.
pub type Listener = Rc<dyn Fn(&Event)>;

/// Wrap a closure as a [`Listener`].
pub fn listener(f: impl Fn(&Event) + 'static) -> Listener {
    Rc::new(f)
}

pub(crate) fn same_listener(a: &Listener, b: &Listener) -> bool {
    Rc::ptr_eq(a, b)
}

/// Listener storage shared by elements and the document root.
#[derive(Default)]
pub(crate) struct Listeners {
    entries: Vec<(EventKind, Listener)>,
}

impl Listeners {
    /// Returns false when this exact listener is already registered for `kind`.
    pub(crate) fn add(&mut self, kind: EventKind, listener: &Listener) -> bool {
        if self
            .entries
            .iter()
            .any(|(k, l)| *k == kind && same_listener(l, listener))
        {
            return false;
        }
        self.entries.push((kind, Rc::clone(listener)));
        true
    }

    /// Returns false when nothing was removed.
    pub(crate) fn remove(&mut self, kind: EventKind, listener: &Listener) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|(k, l)| !(*k == kind && same_listener(l, listener)));
        self.entries.len() != before
    }

    pub(crate) fn count(&self, kind: EventKind) -> usize {
        self.entries.iter().filter(|(k, _)| *k == kind).count()
    }

    /// Clone out the listeners for `kind` so they can run without a borrow held.
    pub(crate) fn snapshot(&self, kind: EventKind) -> Vec<Listener> {
        self.entries
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, l)| Rc::clone(l))
            .collect()
    }
}
