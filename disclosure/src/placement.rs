//! Drawer placement and the class tokens that position a drawer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Edge of the viewport a drawer slides in from.
///
/// Unrecognized names resolve to [`Placement::Left`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Placement {
    Top,
    Right,
    Bottom,
    #[default]
    Left,
    /// Bottom drawer that keeps a strip visible while hidden.
    BottomEdge,
}

impl Placement {
    pub fn parse(name: &str) -> Self {
        match name {
            "top" => Placement::Top,
            "right" => Placement::Right,
            "bottom" => Placement::Bottom,
            "left" => Placement::Left,
            "bottom-edge" => Placement::BottomEdge,
            _ => Placement::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Right => "right",
            Placement::Bottom => "bottom",
            Placement::Left => "left",
            Placement::BottomEdge => "bottom-edge",
        }
    }

    /// The placement consulted in edge mode: `"<name>-edge"`.
    ///
    /// Only `bottom` has an edge row, every other placement falls back to
    /// `left` like any unknown name.
    pub fn edge(self) -> Self {
        Placement::parse(&format!("{}-edge", self.as_str()))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Placement {
    fn from(name: &str) -> Self {
        Placement::parse(name)
    }
}

impl From<String> for Placement {
    fn from(name: String) -> Self {
        Placement::parse(&name)
    }
}

impl From<Placement> for String {
    fn from(placement: Placement) -> Self {
        placement.as_str().to_string()
    }
}

/// Class tokens for one placement.
///
/// `base` is applied once at init and never touched again. Showing removes
/// `inactive` and adds `active`; hiding does the reverse. `active` and
/// `inactive` never share a token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlacementClasses {
    pub base: Vec<String>,
    pub active: Vec<String>,
    pub inactive: Vec<String>,
}

impl PlacementClasses {
    fn new(base: &[&str], active: &[&str], inactive: &[&str]) -> Self {
        let owned =
            |tokens: &[&str]| -> Vec<String> { tokens.iter().map(|t| t.to_string()).collect() };
        Self {
            base: owned(base),
            active: owned(active),
            inactive: owned(inactive),
        }
    }
}

/// The built-in class table.
///
/// `edge_offset` is folded into the hidden classes of
/// [`Placement::BottomEdge`] and ignored otherwise.
pub fn classes_for(placement: Placement, edge_offset: &str) -> PlacementClasses {
    match placement {
        Placement::Top => PlacementClasses::new(
            &["top-0", "left-0", "right-0"],
            &["transform-none"],
            &["-translate-y-full"],
        ),
        Placement::Right => PlacementClasses::new(
            &["right-0", "top-0"],
            &["transform-none"],
            &["translate-x-full"],
        ),
        Placement::Bottom => PlacementClasses::new(
            &["bottom-0", "left-0", "right-0"],
            &["transform-none"],
            &["translate-y-full"],
        ),
        Placement::Left => PlacementClasses::new(
            &["left-0", "top-0"],
            &["transform-none"],
            &["-translate-x-full"],
        ),
        Placement::BottomEdge => PlacementClasses::new(
            &["left-0", "top-0"],
            &["transform-none"],
            &["translate-y-full", edge_offset],
        ),
    }
}

/// Source of placement class tokens. Swap it to use a different CSS vocabulary.
pub trait PlacementResolver {
    fn resolve(&self, placement: Placement, edge_offset: &str) -> PlacementClasses;
}

/// Resolver backed by [`classes_for`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPlacements;

impl PlacementResolver for DefaultPlacements {
    fn resolve(&self, placement: Placement, edge_offset: &str) -> PlacementClasses {
        classes_for(placement, edge_offset)
    }
}
