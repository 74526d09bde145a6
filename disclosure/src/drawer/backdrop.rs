//! Backdrop overlay shown behind an open drawer.

use pagedom::{Element, EventKind, Listener, listener};

use super::Drawer;
use crate::widget::Disclosure;

/// Attribute marking backdrop elements. Its value is the owning drawer's id.
pub const BACKDROP_ATTRIBUTE: &str = "drawer-backdrop";

pub(super) struct Backdrop {
    pub(super) element: Element,
    on_click: Listener,
}

impl Drawer {
    /// Runs inside `show` before the visible flag flips, so an open drawer
    /// never gets a second backdrop.
    pub(super) fn create_backdrop(&self) {
        if self.is_visible() {
            return;
        }

        let document = self.document();
        let element = document.create_element("div");
        element.set_attribute(BACKDROP_ATTRIBUTE, &self.target().id());
        for class in self.options().backdrop_classes.split_whitespace() {
            element.add_class(class);
        }
        document.body().append_child(&element);

        // Owns the drawer until `detach` drops the listener on hide.
        let drawer = self.clone();
        let on_click = listener(move |_| drawer.hide());
        element.add_event_listener(EventKind::Click, &on_click);

        let stale = self
            .inner
            .backdrop
            .replace(Some(Backdrop { element, on_click }));
        if let Some(stale) = stale {
            stale.detach();
        }
    }

    /// Runs inside `hide` before the visible flag flips; a hidden drawer has
    /// no backdrop to remove.
    pub(super) fn destroy_backdrop(&self) {
        if !self.is_visible() {
            return;
        }

        let backdrop = self.inner.backdrop.take();
        if let Some(backdrop) = backdrop {
            backdrop.detach();
        }
    }
}

impl Backdrop {
    fn detach(self) {
        self.element
            .remove_event_listener(EventKind::Click, &self.on_click);
        self.element.remove();
    }
}
