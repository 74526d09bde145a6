use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::element::Element;
use crate::event::{Event, EventKind, Key, Listener, Listeners};

/// Identifier of a node inside one [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

pub(crate) struct Node {
    pub(crate) tag: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) attributes: Vec<(String, String)>,
    /// Ordered class list without duplicates.
    pub(crate) classes: Vec<String>,
    pub(crate) listeners: Listeners,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            parent: None,
            children: Vec::new(),
            attributes: Vec::new(),
            classes: Vec::new(),
            listeners: Listeners::default(),
        }
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

pub(crate) struct Tree {
    // Nodes are never freed; a removed element is only detached.
    pub(crate) nodes: HashMap<NodeId, Node>,
    pub(crate) body: NodeId,
    listeners: Listeners,
    next_id: u64,
}

impl Tree {
    fn alloc(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(tag));
        id
    }

    /// Connected nodes below body, in document order (body excluded).
    fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.nodes.get(&self.body) {
            Some(body) => body.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(node) = self.nodes.get(&id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    pub(crate) fn is_connected(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == self.body {
                return true;
            }
            current = self.nodes.get(&node_id).and_then(|n| n.parent);
        }
        false
    }

    pub(crate) fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.nodes.get_mut(&id).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(parent) = self.nodes.get_mut(&parent) {
            parent.children.retain(|c| *c != id);
        }
    }
}

/// An in-memory page: a tree of elements under a `body` node plus
/// document-level event listeners.
///
/// `Document` is a cheap handle; clones share the same tree.
#[derive(Clone)]
pub struct Document {
    pub(crate) tree: Rc<RefCell<Tree>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut tree = Tree {
            nodes: HashMap::new(),
            body: NodeId(0),
            listeners: Listeners::default(),
            next_id: 0,
        };
        tree.body = tree.alloc("body");
        Self {
            tree: Rc::new(RefCell::new(tree)),
        }
    }

    pub fn body(&self) -> Element {
        let body = self.tree.borrow().body;
        Element::new(self.clone(), body)
    }

    /// Create a detached element. Append it somewhere to make it queryable.
    pub fn create_element(&self, tag: &str) -> Element {
        let id = self.tree.borrow_mut().alloc(tag);
        Element::new(self.clone(), id)
    }

    /// First connected element whose `id` attribute equals `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        let found = {
            let tree = self.tree.borrow();
            tree.walk().into_iter().find(|node_id| {
                tree.nodes
                    .get(node_id)
                    .and_then(|n| n.attribute("id"))
                    .is_some_and(|v| v == id)
            })
        };
        found.map(|node_id| Element::new(self.clone(), node_id))
    }

    /// All connected elements carrying attribute `name`, in document order.
    pub fn query_all_by_attribute(&self, name: &str) -> Vec<Element> {
        let ids: Vec<NodeId> = {
            let tree = self.tree.borrow();
            tree.walk()
                .into_iter()
                .filter(|node_id| {
                    tree.nodes
                        .get(node_id)
                        .is_some_and(|n| n.attribute(name).is_some())
                })
                .collect()
        };
        ids.into_iter()
            .map(|node_id| Element::new(self.clone(), node_id))
            .collect()
    }

    /// Number of elements currently attached below body.
    pub fn connected_len(&self) -> usize {
        self.tree.borrow().walk().len()
    }

    /// Subscribe a document-level listener. Returns false if this exact
    /// listener was already registered for `kind`.
    pub fn add_event_listener(&self, kind: EventKind, listener: &Listener) -> bool {
        self.tree.borrow_mut().listeners.add(kind, listener)
    }

    /// Unsubscribe the exact listener previously added. Returns false if it
    /// was not registered.
    pub fn remove_event_listener(&self, kind: EventKind, listener: &Listener) -> bool {
        self.tree.borrow_mut().listeners.remove(kind, listener)
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.tree.borrow().listeners.count(kind)
    }

    /// Deliver a key press to every document-level key listener.
    pub fn dispatch_key(&self, key: Key) {
        let listeners = self.tree.borrow().listeners.snapshot(EventKind::KeyDown);
        log::trace!("[dom] keydown {:?} -> {} listener(s)", key, listeners.len());
        let event = Event::KeyDown { key };
        for listener in listeners {
            listener(&event);
        }
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree.borrow();
        f.debug_struct("Document")
            .field("nodes", &tree.nodes.len())
            .field("listeners", &tree.listeners.count(EventKind::KeyDown))
            .finish()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree)
    }
}

impl Eq for Document {}
