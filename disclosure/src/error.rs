//! Errors reported while scanning a page for widget markup.

use thiserror::Error;

use crate::registry::WidgetKind;

/// A trigger that could not be wired up. Discovery logs these and moves on
/// to the next trigger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
    /// The id named by a collapse trigger does not resolve to an element.
    #[error(
        "The target element with id \"{id}\" does not exist. Please check the {attribute} attribute."
    )]
    TargetNotFound {
        /// The attribute holding the id.
        attribute: &'static str,
        /// The id that failed to resolve.
        id: String,
    },

    /// A drawer trigger names an id that does not resolve to an element.
    #[error(
        "Drawer with id {id} not found. Are you sure that the data-drawer-target attribute points to the correct drawer id?"
    )]
    DrawerNotFound {
        /// The attribute holding the id.
        attribute: &'static str,
        /// The id that failed to resolve.
        id: String,
    },

    /// The target exists but no widget of this kind was created for it.
    #[error(
        "{kind} with id {id} has not been initialized. Please initialize it using the data-drawer-target attribute."
    )]
    NotInitialized {
        /// The kind of widget the trigger expects.
        kind: WidgetKind,
        /// The target id.
        id: String,
    },
}
