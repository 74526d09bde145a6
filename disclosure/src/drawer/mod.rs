//! Drawer widget - an off-canvas panel that slides in from a viewport edge.
//!
//! A drawer always starts hidden. While open it is marked up as a modal
//! dialog, optionally locks page scrolling and shows a backdrop that closes
//! it on click. Pressing Escape anywhere on the page closes an open drawer.
//!
//! Positioning is purely class based: see [`crate::placement`] for the
//! tokens each placement uses.

mod backdrop;
mod options;

pub use backdrop::BACKDROP_ATTRIBUTE;
pub use options::{DEFAULT_BACKDROP_CLASSES, DEFAULT_EDGE_OFFSET, DrawerOptions, DrawerSettings};

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use log::debug;
use pagedom::{Document, Element, Event, EventKind, Key, Listener, listener};

use crate::placement::PlacementClasses;
use crate::registry::{Registry, WeakRegistry, WidgetKind};
use crate::widget::Disclosure;
use backdrop::Backdrop;

/// Class added to the drawer so placement changes animate.
pub const TRANSITION_CLASS: &str = "transition-transform";

/// Class added to body to stop page scrolling behind an open drawer.
pub const SCROLL_LOCK_CLASS: &str = "overflow-hidden";

struct DrawerState {
    target: Element,
    options: DrawerOptions,
    registry: WeakRegistry,
    visible: Cell<bool>,
    initialized: Cell<bool>,
    /// The key listener bound by `init`, kept so `destroy` removes exactly it.
    escape_handler: RefCell<Option<Listener>>,
    backdrop: RefCell<Option<Backdrop>>,
}

/// Handle to a drawer widget. Clones refer to the same widget.
#[derive(Clone)]
pub struct Drawer {
    inner: Rc<DrawerState>,
}

impl Drawer {
    /// Create, initialize and register a drawer for `target`.
    ///
    /// Registration replaces any drawer already registered under the
    /// target's id.
    pub fn new(registry: &Registry, target: Element, options: DrawerOptions) -> Self {
        let drawer = Self {
            inner: Rc::new(DrawerState {
                target,
                options,
                registry: registry.downgrade(),
                visible: Cell::new(false),
                initialized: Cell::new(false),
                escape_handler: RefCell::new(None),
                backdrop: RefCell::new(None),
            }),
        };
        drawer.init();
        registry.add(drawer.clone(), &drawer.inner.target.id(), true);
        drawer
    }

    pub fn options(&self) -> &DrawerOptions {
        &self.inner.options
    }

    fn document(&self) -> &Document {
        self.inner.target.owner_document()
    }

    /// Classes swapped by show/hide, honoring edge mode.
    fn transition_classes(&self) -> PlacementClasses {
        let options = &self.inner.options;
        let placement = if options.edge {
            options.placement.edge()
        } else {
            options.placement
        };
        options.placements.resolve(placement, &options.edge_offset)
    }

    /// Open the drawer.
    pub fn show(&self) {
        let inner = &self.inner;
        let target = &inner.target;

        let classes = self.transition_classes();
        for class in &classes.active {
            target.add_class(class);
        }
        for class in &classes.inactive {
            target.remove_class(class);
        }

        target.set_attribute("aria-modal", "true");
        target.set_attribute("role", "dialog");
        target.remove_attribute("aria-hidden");

        if !inner.options.body_scrolling {
            self.document().body().add_class(SCROLL_LOCK_CLASS);
        }

        if inner.options.backdrop {
            self.create_backdrop();
        }

        inner.visible.set(true);
        debug!("[drawer] '{}' shown", target.id());

        inner.options.on_show.call(self);
    }

    /// Close the drawer.
    ///
    /// Closing an already hidden drawer re-applies the hidden state and still
    /// runs `on_hide`, so callers can treat this as "ensure hidden".
    pub fn hide(&self) {
        let inner = &self.inner;
        let target = &inner.target;

        let classes = self.transition_classes();
        for class in &classes.active {
            target.remove_class(class);
        }
        for class in &classes.inactive {
            target.add_class(class);
        }

        target.set_attribute("aria-hidden", "true");
        target.remove_attribute("aria-modal");
        target.remove_attribute("role");

        if !inner.options.body_scrolling {
            self.document().body().remove_class(SCROLL_LOCK_CLASS);
        }

        if inner.options.backdrop {
            self.destroy_backdrop();
        }

        inner.visible.set(false);
        debug!("[drawer] '{}' hidden", target.id());

        inner.options.on_hide.call(self);
    }

    /// The backdrop element currently shown for this drawer, if any.
    pub fn backdrop(&self) -> Option<Element> {
        self.inner
            .backdrop
            .borrow()
            .as_ref()
            .map(|b| b.element.clone())
    }
}

impl Disclosure for Drawer {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Drawer
    }

    fn target(&self) -> &Element {
        &self.inner.target
    }

    fn init(&self) {
        let inner = &self.inner;
        if inner.initialized.get() {
            return;
        }
        let target = &inner.target;
        let options = &inner.options;

        target.set_attribute("aria-hidden", "true");
        target.add_class(TRANSITION_CLASS);
        for class in options
            .placements
            .resolve(options.placement, &options.edge_offset)
            .base
        {
            target.add_class(&class);
        }

        // The listener owns the widget until `destroy` takes it back.
        let drawer = self.clone();
        let handler = listener(move |event| {
            if matches!(event, Event::KeyDown { key: Key::Escape }) && drawer.is_visible() {
                drawer.hide();
            }
        });
        self.document()
            .add_event_listener(EventKind::KeyDown, &handler);
        *inner.escape_handler.borrow_mut() = Some(handler);
        inner.initialized.set(true);

        debug!(
            "[drawer] init '{}' placement={} edge={}",
            target.id(),
            options.placement,
            options.edge
        );
    }

    fn destroy(&self) {
        let inner = &self.inner;
        if !inner.initialized.get() {
            return;
        }

        // Revert backdrop and scroll lock before unbinding.
        self.hide();

        let handler = inner.escape_handler.borrow_mut().take();
        if let Some(handler) = handler {
            self.document()
                .remove_event_listener(EventKind::KeyDown, &handler);
        }
        inner.initialized.set(false);
        debug!("[drawer] destroyed '{}'", inner.target.id());
    }

    fn is_initialized(&self) -> bool {
        self.inner.initialized.get()
    }

    fn toggle(&self) {
        if self.inner.visible.get() {
            self.hide();
        } else {
            self.show();
        }

        self.inner.options.on_toggle.call(self);
    }

    fn is_visible(&self) -> bool {
        self.inner.visible.get()
    }

    fn remove_instance(&self) {
        if let Some(registry) = self.inner.registry.upgrade() {
            registry.remove(WidgetKind::Drawer, &self.inner.target.id());
        }
    }
}

impl PartialEq for Drawer {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Drawer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drawer")
            .field("target", &self.inner.target.id())
            .field("placement", &self.inner.options.placement)
            .field("visible", &self.inner.visible.get())
            .field("initialized", &self.inner.initialized.get())
            .finish()
    }
}
