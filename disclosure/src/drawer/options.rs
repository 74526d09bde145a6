//! Drawer configuration.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::Drawer;
use crate::placement::{DefaultPlacements, Placement, PlacementResolver};
use crate::widget::Callback;

/// Offset that keeps an edge drawer's handle on screen while hidden.
pub const DEFAULT_EDGE_OFFSET: &str = "bottom-[60px]";

/// Classes of the overlay shown behind an open drawer.
pub const DEFAULT_BACKDROP_CLASSES: &str =
    "bg-gray-900 bg-opacity-50 dark:bg-opacity-80 fixed inset-0 z-30";

/// Full drawer configuration: plain settings, class table and hooks.
#[derive(Clone)]
pub struct DrawerOptions {
    pub placement: Placement,
    /// Keep the page scrollable while the drawer is open.
    pub body_scrolling: bool,
    /// Show a click-to-dismiss overlay while open.
    pub backdrop: bool,
    /// Leave a strip of the drawer visible while hidden.
    pub edge: bool,
    pub edge_offset: String,
    /// Whitespace-separated class tokens for the backdrop.
    pub backdrop_classes: String,
    pub placements: Rc<dyn PlacementResolver>,
    pub on_show: Callback<Drawer>,
    pub on_hide: Callback<Drawer>,
    pub on_toggle: Callback<Drawer>,
}

impl Default for DrawerOptions {
    fn default() -> Self {
        DrawerSettings::default().into()
    }
}

impl DrawerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placement(mut self, placement: impl Into<Placement>) -> Self {
        self.placement = placement.into();
        self
    }

    pub fn body_scrolling(mut self, enabled: bool) -> Self {
        self.body_scrolling = enabled;
        self
    }

    pub fn backdrop(mut self, enabled: bool) -> Self {
        self.backdrop = enabled;
        self
    }

    pub fn edge(mut self, enabled: bool) -> Self {
        self.edge = enabled;
        self
    }

    pub fn edge_offset(mut self, token: impl Into<String>) -> Self {
        self.edge_offset = token.into();
        self
    }

    pub fn backdrop_classes(mut self, classes: impl Into<String>) -> Self {
        self.backdrop_classes = classes.into();
        self
    }

    /// Use a different class vocabulary for placements.
    pub fn placements(mut self, resolver: impl PlacementResolver + 'static) -> Self {
        self.placements = Rc::new(resolver);
        self
    }

    pub fn on_show(mut self, f: impl Fn(&Drawer) + 'static) -> Self {
        self.on_show = Callback::new(f);
        self
    }

    pub fn on_hide(mut self, f: impl Fn(&Drawer) + 'static) -> Self {
        self.on_hide = Callback::new(f);
        self
    }

    pub fn on_toggle(mut self, f: impl Fn(&Drawer) + 'static) -> Self {
        self.on_toggle = Callback::new(f);
        self
    }

    /// The plain-data part of these options.
    pub fn settings(&self) -> DrawerSettings {
        DrawerSettings {
            placement: self.placement,
            body_scrolling: self.body_scrolling,
            backdrop: self.backdrop,
            edge: self.edge,
            edge_offset: self.edge_offset.clone(),
            backdrop_classes: self.backdrop_classes.clone(),
        }
    }
}

impl fmt::Debug for DrawerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawerOptions")
            .field("settings", &self.settings())
            .finish_non_exhaustive()
    }
}

/// Serializable drawer settings, e.g. loaded from a config file.
///
/// Missing fields take their defaults; an unknown placement name reads as
/// `left`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerSettings {
    pub placement: Placement,
    pub body_scrolling: bool,
    pub backdrop: bool,
    pub edge: bool,
    pub edge_offset: String,
    pub backdrop_classes: String,
}

impl Default for DrawerSettings {
    fn default() -> Self {
        Self {
            placement: Placement::Left,
            body_scrolling: false,
            backdrop: true,
            edge: false,
            edge_offset: DEFAULT_EDGE_OFFSET.to_string(),
            backdrop_classes: DEFAULT_BACKDROP_CLASSES.to_string(),
        }
    }
}

impl From<DrawerSettings> for DrawerOptions {
    fn from(settings: DrawerSettings) -> Self {
        Self {
            placement: settings.placement,
            body_scrolling: settings.body_scrolling,
            backdrop: settings.backdrop,
            edge: settings.edge,
            edge_offset: settings.edge_offset,
            backdrop_classes: settings.backdrop_classes,
            placements: Rc::new(DefaultPlacements),
            on_show: Callback::noop(),
            on_hide: Callback::noop(),
            on_toggle: Callback::noop(),
        }
    }
}
