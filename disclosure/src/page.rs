//! Page-level controller owning the document and its widget registry.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use pagedom::{Document, NodeId};

use crate::registry::{Registry, WidgetKind};

/// What a bound trigger does to its widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TriggerAction {
    Toggle,
    Show,
    Hide,
}

/// A document together with the registry of widgets living on it.
///
/// Create one per page and run discovery ([`Page::init_all`]) after the
/// markup is in place. Scanning again later is safe: widgets and trigger
/// bindings that already exist are left alone.
#[derive(Debug, Clone, Default)]
pub struct Page {
    document: Document,
    registry: Registry,
    bound: Rc<RefCell<HashSet<(NodeId, WidgetKind, TriggerAction)>>>,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            registry: Registry::new(),
            bound: Rc::default(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Record a trigger binding. Returns false if it was already bound.
    pub(crate) fn mark_bound(
        &self,
        trigger: NodeId,
        kind: WidgetKind,
        action: TriggerAction,
    ) -> bool {
        self.bound.borrow_mut().insert((trigger, kind, action))
    }
}
