use std::fmt;

use crate::document::{Document, Node, NodeId};
use crate::event::{Event, EventKind, Listener};

/// Handle to one node of a [`Document`].
///
/// Handles are cheap to clone and compare equal when they point at the same
/// node of the same document.
#[derive(Clone, PartialEq, Eq)]
pub struct Element {
    doc: Document,
    node: NodeId,
}

impl Element {
    pub(crate) fn new(doc: Document, node: NodeId) -> Self {
        Self { doc, node }
    }

    fn with_node<R>(&self, f: impl FnOnce(&Node) -> R) -> Option<R> {
        self.doc.tree.borrow().nodes.get(&self.node).map(f)
    }

    fn with_node_mut<R>(&self, f: impl FnOnce(&mut Node) -> R) -> Option<R> {
        self.doc.tree.borrow_mut().nodes.get_mut(&self.node).map(f)
    }

    pub fn node_id(&self) -> NodeId {
        self.node
    }

    pub fn owner_document(&self) -> &Document {
        &self.doc
    }

    pub fn tag(&self) -> String {
        self.with_node(|n| n.tag.clone()).unwrap_or_default()
    }

    /// The `id` attribute, or an empty string when unset.
    pub fn id(&self) -> String {
        self.get_attribute("id").unwrap_or_default()
    }

    /// Builder-style `id` setter.
    pub fn with_id(self, id: &str) -> Self {
        self.set_attribute("id", id);
        self
    }

    // Attributes

    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.with_node(|n| n.attribute(name).map(str::to_string))
            .flatten()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.with_node(|n| n.attribute(name).is_some())
            .unwrap_or(false)
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.with_node_mut(|n| {
            match n.attributes.iter_mut().find(|(k, _)| k == name) {
                Some((_, v)) => *v = value.to_string(),
                None => n.attributes.push((name.to_string(), value.to_string())),
            }
        });
    }

    pub fn remove_attribute(&self, name: &str) {
        self.with_node_mut(|n| n.attributes.retain(|(k, _)| k != name));
    }

    // Classes

    /// Add a class token. Adding a token already present is a no-op.
    pub fn add_class(&self, class: &str) {
        if class.is_empty() {
            return;
        }
        self.with_node_mut(|n| {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        });
    }

    pub fn remove_class(&self, class: &str) {
        self.with_node_mut(|n| n.classes.retain(|c| c != class));
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.with_node(|n| n.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Class tokens in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.with_node(|n| n.classes.clone()).unwrap_or_default()
    }

    // Tree

    /// Append `child` as the last child, moving it if it already has a parent.
    pub fn append_child(&self, child: &Element) {
        if child.doc != self.doc || child.node == self.node {
            return;
        }
        let mut tree = self.doc.tree.borrow_mut();
        // Refuse to move an ancestor below its own descendant.
        let mut current = Some(self.node);
        while let Some(id) = current {
            if id == child.node {
                return;
            }
            current = tree.nodes.get(&id).and_then(|n| n.parent);
        }
        tree.detach(child.node);
        if let Some(node) = tree.nodes.get_mut(&child.node) {
            node.parent = Some(self.node);
        }
        if let Some(parent) = tree.nodes.get_mut(&self.node) {
            parent.children.push(child.node);
        }
    }

    /// Detach this element (and its subtree) from the document.
    pub fn remove(&self) {
        self.doc.tree.borrow_mut().detach(self.node);
    }

    pub fn is_connected(&self) -> bool {
        self.doc.tree.borrow().is_connected(self.node)
    }

    pub fn children(&self) -> Vec<Element> {
        self.with_node(|n| n.children.clone())
            .unwrap_or_default()
            .into_iter()
            .map(|id| Element::new(self.doc.clone(), id))
            .collect()
    }

    // Events

    /// Returns false if this exact listener was already registered for `kind`.
    pub fn add_event_listener(&self, kind: EventKind, listener: &Listener) -> bool {
        self.with_node_mut(|n| n.listeners.add(kind, listener))
            .unwrap_or(false)
    }

    /// Returns false if the listener was not registered on this element.
    pub fn remove_event_listener(&self, kind: EventKind, listener: &Listener) -> bool {
        self.with_node_mut(|n| n.listeners.remove(kind, listener))
            .unwrap_or(false)
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.with_node(|n| n.listeners.count(kind)).unwrap_or(0)
    }

    /// Simulate a click: runs this element's click listeners in registration
    /// order. Events do not bubble.
    pub fn click(&self) {
        let listeners = self
            .with_node(|n| n.listeners.snapshot(EventKind::Click))
            .unwrap_or_default();
        log::trace!("[dom] click {} -> {} listener(s)", self.node, listeners.len());
        let event = Event::Click { target: self.node };
        for listener in listeners {
            listener(&event);
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (tag, id, classes) = self
            .with_node(|n| {
                (
                    n.tag.clone(),
                    n.attribute("id").map(str::to_string),
                    n.classes.join(" "),
                )
            })
            .unwrap_or_default();
        f.debug_struct("Element")
            .field("node", &self.node)
            .field("tag", &tag)
            .field("id", &id)
            .field("class", &classes)
            .finish()
    }
}
