//! Lifecycle surface shared by all disclosure widgets.

use std::fmt;
use std::rc::Rc;

use pagedom::Element;

use crate::registry::WidgetKind;

/// Common lifecycle of collapses and drawers.
///
/// Every method is a guarded no-op when it has nothing to do; none of them
/// fail.
pub trait Disclosure {
    fn kind(&self) -> WidgetKind;

    /// The element whose visibility this widget controls.
    fn target(&self) -> &Element;

    /// Bind the interaction listener. No-op if already initialized or if a
    /// required element is missing.
    fn init(&self);

    /// Unbind the interaction listener. No-op if not initialized.
    fn destroy(&self);

    fn is_initialized(&self) -> bool;

    fn toggle(&self);

    fn is_visible(&self) -> bool;

    fn is_hidden(&self) -> bool {
        !self.is_visible()
    }

    /// Drop this widget's registry entry. Listeners stay attached.
    fn remove_instance(&self);

    fn destroy_and_remove_instance(&self) {
        self.destroy();
        self.remove_instance();
    }
}

/// A user hook invoked with the widget after a state change.
///
/// Defaults to a no-op, so call sites never check for a missing hook.
pub struct Callback<W>(Rc<dyn Fn(&W)>);

impl<W: 'static> Callback<W> {
    pub fn new(f: impl Fn(&W) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn noop() -> Self {
        Self::new(|_: &W| {})
    }
}

impl<W> Callback<W> {
    pub(crate) fn call(&self, widget: &W) {
        (self.0)(widget)
    }
}

impl<W: 'static> Default for Callback<W> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<W> Clone for Callback<W> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<W> fmt::Debug for Callback<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}
