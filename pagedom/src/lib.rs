//! A minimal in-memory page model: elements with attributes, class lists and
//! click listeners under a `body` node, plus document-level key listeners.
//!
//! Everything is single-threaded and synchronous. Listener dispatch clones the
//! listener list before running it, so listeners are free to mutate the
//! document (add or remove classes, attach or detach elements, remove
//! themselves).

pub mod document;
pub mod element;
pub mod event;

pub use document::{Document, NodeId};
pub use element::Element;
pub use event::{listener, Event, EventKind, Key, Listener};
