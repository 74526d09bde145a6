//! Disclosure widgets for [`pagedom`] pages: collapsible panels and
//! off-canvas drawers.
//!
//! Both widgets are small state machines over a target element. They track
//! whether the target is shown, keep its classes and ARIA attributes in step,
//! bind exactly one interaction listener while initialized, and register
//! themselves in a [`Registry`] keyed by widget kind and target id, so that
//! triggers found elsewhere on the page can look them up.
//!
//! All operations are synchronous and infallible: anything that does not
//! apply in the current state is a no-op. Widget state is updated before any
//! user hook runs, so hooks may freely read widgets or the registry.
//!
//! ```
//! use disclosure::prelude::*;
//! use pagedom::Document;
//!
//! let doc = Document::new();
//! let menu = doc.create_element("nav").with_id("menu");
//! let open = doc.create_element("button");
//! open.set_attribute("data-drawer-target", "menu");
//! open.set_attribute("data-drawer-toggle", "menu");
//! doc.body().append_child(&menu);
//! doc.body().append_child(&open);
//!
//! let page = Page::new(doc.clone());
//! let report = page.init_all();
//! assert!(report.is_clean());
//!
//! open.click();
//! let drawer = page.registry().drawer("menu").unwrap();
//! assert!(drawer.is_visible());
//! ```

pub mod collapse;
pub mod discovery;
pub mod drawer;
pub mod error;
pub mod page;
pub mod placement;
pub mod registry;
pub mod widget;

pub use collapse::{Collapse, CollapseOptions};
pub use discovery::DiscoveryReport;
pub use drawer::{Drawer, DrawerOptions, DrawerSettings};
pub use error::DiscoveryError;
pub use page::Page;
pub use placement::{DefaultPlacements, Placement, PlacementClasses, PlacementResolver};
pub use registry::{Instance, Registry, WidgetKind};
pub use widget::{Callback, Disclosure};

pub mod prelude {
    pub use crate::collapse::{Collapse, CollapseOptions};
    pub use crate::discovery::DiscoveryReport;
    pub use crate::drawer::{Drawer, DrawerOptions, DrawerSettings};
    pub use crate::error::DiscoveryError;
    pub use crate::page::Page;
    pub use crate::placement::{Placement, PlacementClasses, PlacementResolver};
    pub use crate::registry::{Instance, Registry, WidgetKind};
    pub use crate::widget::{Callback, Disclosure};
}
