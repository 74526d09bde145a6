//! Instance registry for looking up widgets by target element id.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::collapse::Collapse;
use crate::drawer::Drawer;
use crate::widget::Disclosure;

/// The kind of widget an entry belongs to. Part of the registry key, so a
/// collapse and a drawer may share a target id without clashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Collapse,
    Drawer,
}

impl WidgetKind {
    pub fn name(self) -> &'static str {
        match self {
            WidgetKind::Collapse => "Collapse",
            WidgetKind::Drawer => "Drawer",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A registered widget handle.
#[derive(Debug, Clone, PartialEq)]
pub enum Instance {
    Collapse(Collapse),
    Drawer(Drawer),
}

impl Instance {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Instance::Collapse(_) => WidgetKind::Collapse,
            Instance::Drawer(_) => WidgetKind::Drawer,
        }
    }

    /// The shared lifecycle surface of the wrapped widget.
    pub fn widget(&self) -> &dyn Disclosure {
        match self {
            Instance::Collapse(collapse) => collapse as &dyn Disclosure,
            Instance::Drawer(drawer) => drawer as &dyn Disclosure,
        }
    }

    pub fn as_collapse(&self) -> Option<&Collapse> {
        match self {
            Instance::Collapse(collapse) => Some(collapse),
            Instance::Drawer(_) => None,
        }
    }

    pub fn as_drawer(&self) -> Option<&Drawer> {
        match self {
            Instance::Drawer(drawer) => Some(drawer),
            Instance::Collapse(_) => None,
        }
    }
}

impl From<Collapse> for Instance {
    fn from(collapse: Collapse) -> Self {
        Instance::Collapse(collapse)
    }
}

impl From<Drawer> for Instance {
    fn from(drawer: Drawer) -> Self {
        Instance::Drawer(drawer)
    }
}

type Entries = RefCell<HashMap<(WidgetKind, String), Instance>>;

/// Registry mapping `(kind, target id)` to a widget instance.
///
/// The registry is a cheap handle; clones share the same entries. It is
/// owned by whatever drives the page (see [`Page`](crate::Page)) and widgets
/// only keep a weak reference back to it. No borrow is held while control is
/// outside the registry, so widget callbacks may query or mutate it freely.
#[derive(Clone, Default)]
pub struct Registry {
    entries: Rc<Entries>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `instance` under `(instance.kind(), id)`.
    ///
    /// When an entry already exists and `override_existing` is false the
    /// existing entry is kept and false is returned. Re-scanning a page hits
    /// this path routinely, so it is not an error.
    pub fn add(&self, instance: impl Into<Instance>, id: &str, override_existing: bool) -> bool {
        let instance = instance.into();
        let key = (instance.kind(), id.to_string());
        let replaced = {
            let mut entries = self.entries.borrow_mut();
            if entries.contains_key(&key) && !override_existing {
                log::debug!("[registry] {} '{}' already registered, keeping it", key.0, id);
                return false;
            }
            entries.insert(key, instance)
        };
        // Dropped outside the borrow.
        drop(replaced);
        true
    }

    pub fn get(&self, kind: WidgetKind, id: &str) -> Option<Instance> {
        self.entries
            .borrow()
            .get(&(kind, id.to_string()))
            .cloned()
    }

    pub fn collapse(&self, id: &str) -> Option<Collapse> {
        self.get(WidgetKind::Collapse, id)
            .and_then(|i| i.as_collapse().cloned())
    }

    pub fn drawer(&self, id: &str) -> Option<Drawer> {
        self.get(WidgetKind::Drawer, id)
            .and_then(|i| i.as_drawer().cloned())
    }

    /// Remove the entry if present. Returns true if something was removed.
    pub fn remove(&self, kind: WidgetKind, id: &str) -> bool {
        let removed = self.entries.borrow_mut().remove(&(kind, id.to_string()));
        removed.is_some()
    }

    pub fn exists(&self, kind: WidgetKind, id: &str) -> bool {
        self.entries
            .borrow()
            .contains_key(&(kind, id.to_string()))
    }

    /// Registered ids of one kind, sorted.
    pub fn ids(&self, kind: WidgetKind) -> Vec<String> {
        let mut ids: Vec<String> = self
            .entries
            .borrow()
            .keys()
            .filter(|(k, _)| *k == kind)
            .map(|(_, id)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub(crate) fn downgrade(&self) -> WeakRegistry {
        WeakRegistry(Rc::downgrade(&self.entries))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("collapses", &self.ids(WidgetKind::Collapse))
            .field("drawers", &self.ids(WidgetKind::Drawer))
            .finish()
    }
}

/// Back-reference held by widgets so that registry → widget stays the only
/// strong edge.
#[derive(Clone, Default)]
pub(crate) struct WeakRegistry(Weak<Entries>);

impl WeakRegistry {
    pub(crate) fn upgrade(&self) -> Option<Registry> {
        self.0.upgrade().map(|entries| Registry { entries })
    }
}
