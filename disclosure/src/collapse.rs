//! Collapse widget - shows and hides a target element from a trigger button.
//!
//! The target is hidden with the [`HIDDEN_CLASS`] class and the trigger
//! mirrors the state in `aria-expanded`. A collapse rendered already open by
//! the surrounding markup starts out visible instead of flickering closed:
//! the initial state is read from the trigger's `aria-expanded` attribute, or
//! from the target's class list when the trigger has none.
//!
//! # Example
//!
//! ```
//! use disclosure::{Collapse, CollapseOptions, Disclosure, Registry};
//! use pagedom::Document;
//!
//! let doc = Document::new();
//! let trigger = doc.create_element("button").with_id("toggle");
//! let target = doc.create_element("div").with_id("details");
//! target.add_class("hidden");
//! doc.body().append_child(&trigger);
//! doc.body().append_child(&target);
//!
//! let registry = Registry::new();
//! let collapse = Collapse::new(&registry, target.clone(), Some(trigger.clone()), CollapseOptions::default());
//! assert!(collapse.is_hidden());
//!
//! trigger.click();
//! assert!(collapse.is_visible());
//! assert!(!target.has_class("hidden"));
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use log::debug;
use pagedom::{listener, Element, EventKind, Listener};

use crate::registry::{Registry, WeakRegistry, WidgetKind};
use crate::widget::{Callback, Disclosure};

/// Class that hides a collapsed target.
pub const HIDDEN_CLASS: &str = "hidden";

/// Hooks for a [`Collapse`]. All default to no-ops.
#[derive(Debug, Clone, Default)]
pub struct CollapseOptions {
    pub on_collapse: Callback<Collapse>,
    pub on_expand: Callback<Collapse>,
    pub on_toggle: Callback<Collapse>,
}

impl CollapseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_collapse(mut self, f: impl Fn(&Collapse) + 'static) -> Self {
        self.on_collapse = Callback::new(f);
        self
    }

    pub fn on_expand(mut self, f: impl Fn(&Collapse) + 'static) -> Self {
        self.on_expand = Callback::new(f);
        self
    }

    pub fn on_toggle(mut self, f: impl Fn(&Collapse) + 'static) -> Self {
        self.on_toggle = Callback::new(f);
        self
    }
}

struct CollapseState {
    target: Element,
    trigger: Option<Element>,
    options: CollapseOptions,
    registry: WeakRegistry,
    visible: Cell<bool>,
    initialized: Cell<bool>,
    /// The listener bound by `init`, kept so `destroy` removes exactly it.
    click_handler: RefCell<Option<Listener>>,
}

/// Handle to a collapse widget. Clones refer to the same widget.
#[derive(Clone)]
pub struct Collapse {
    inner: Rc<CollapseState>,
}

impl Collapse {
    /// Create, initialize and register a collapse for `target`.
    ///
    /// Registration replaces any collapse already registered under the
    /// target's id.
    pub fn new(
        registry: &Registry,
        target: Element,
        trigger: Option<Element>,
        options: CollapseOptions,
    ) -> Self {
        let collapse = Self {
            inner: Rc::new(CollapseState {
                target,
                trigger,
                options,
                registry: registry.downgrade(),
                visible: Cell::new(false),
                initialized: Cell::new(false),
                click_handler: RefCell::new(None),
            }),
        };
        collapse.init();
        registry.add(collapse.clone(), &collapse.inner.target.id(), true);
        collapse
    }

    pub fn trigger(&self) -> Option<&Element> {
        self.inner.trigger.as_ref()
    }

    pub fn options(&self) -> &CollapseOptions {
        &self.inner.options
    }

    /// Hide the target. The `on_collapse` hook runs even if it was already
    /// hidden.
    pub fn collapse(&self) {
        let inner = &self.inner;
        inner.target.add_class(HIDDEN_CLASS);
        if let Some(trigger) = &inner.trigger {
            trigger.set_attribute("aria-expanded", "false");
        }
        inner.visible.set(false);
        debug!("[collapse] '{}' collapsed", inner.target.id());

        inner.options.on_collapse.call(self);
    }

    /// Show the target. The `on_expand` hook runs even if it was already
    /// visible.
    pub fn expand(&self) {
        let inner = &self.inner;
        inner.target.remove_class(HIDDEN_CLASS);
        if let Some(trigger) = &inner.trigger {
            trigger.set_attribute("aria-expanded", "true");
        }
        inner.visible.set(true);
        debug!("[collapse] '{}' expanded", inner.target.id());

        inner.options.on_expand.call(self);
    }

    fn initial_visibility(&self, trigger: &Element) -> bool {
        match trigger.get_attribute("aria-expanded") {
            Some(expanded) => expanded == "true",
            // Markup without aria-expanded: trust the class list.
            None => !self.inner.target.has_class(HIDDEN_CLASS),
        }
    }
}

impl Disclosure for Collapse {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Collapse
    }

    fn target(&self) -> &Element {
        &self.inner.target
    }

    fn init(&self) {
        let inner = &self.inner;
        if inner.initialized.get() {
            return;
        }
        let Some(trigger) = &inner.trigger else {
            return;
        };

        inner.visible.set(self.initial_visibility(trigger));

        // The listener owns the widget until `destroy` takes it back.
        let collapse = self.clone();
        let handler = listener(move |_| collapse.toggle());
        trigger.add_event_listener(EventKind::Click, &handler);
        *inner.click_handler.borrow_mut() = Some(handler);
        inner.initialized.set(true);

        debug!(
            "[collapse] init '{}' visible={}",
            inner.target.id(),
            inner.visible.get()
        );
    }

    fn destroy(&self) {
        let inner = &self.inner;
        if !inner.initialized.get() {
            return;
        }
        let Some(trigger) = &inner.trigger else {
            return;
        };

        let handler = inner.click_handler.borrow_mut().take();
        if let Some(handler) = handler {
            trigger.remove_event_listener(EventKind::Click, &handler);
        }
        inner.initialized.set(false);
        debug!("[collapse] destroyed '{}'", inner.target.id());
    }

    fn is_initialized(&self) -> bool {
        self.inner.initialized.get()
    }

    fn toggle(&self) {
        if self.inner.visible.get() {
            self.collapse();
        } else {
            self.expand();
        }

        self.inner.options.on_toggle.call(self);
    }

    fn is_visible(&self) -> bool {
        self.inner.visible.get()
    }

    fn remove_instance(&self) {
        if let Some(registry) = self.inner.registry.upgrade() {
            registry.remove(WidgetKind::Collapse, &self.inner.target.id());
        }
    }
}

impl PartialEq for Collapse {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Collapse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collapse")
            .field("target", &self.inner.target.id())
            .field("visible", &self.inner.visible.get())
            .field("initialized", &self.inner.initialized.get())
            .finish()
    }
}
