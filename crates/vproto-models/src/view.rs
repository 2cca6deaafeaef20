//! Canonical camera-view taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight fixed camera positions rendered for every object.
///
/// The declaration order is a protocol-level contract: it defines the
/// presentation order of views everywhere downstream (selection,
/// collection, request content). Do not reorder variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalView {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
    IsoTopLeft,
    IsoTopRight,
}

impl CanonicalView {
    /// All canonical views in protocol order.
    pub const ALL: [CanonicalView; 8] = [
        CanonicalView::Front,
        CanonicalView::Back,
        CanonicalView::Left,
        CanonicalView::Right,
        CanonicalView::Top,
        CanonicalView::Bottom,
        CanonicalView::IsoTopLeft,
        CanonicalView::IsoTopRight,
    ];

    /// The manifest name for this view.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalView::Front => "front",
            CanonicalView::Back => "back",
            CanonicalView::Left => "left",
            CanonicalView::Right => "right",
            CanonicalView::Top => "top",
            CanonicalView::Bottom => "bottom",
            CanonicalView::IsoTopLeft => "iso_top_left",
            CanonicalView::IsoTopRight => "iso_top_right",
        }
    }

    /// Parse a manifest view name. Unknown names yield `None`; callers
    /// drop such entries rather than erroring.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "front" => Some(CanonicalView::Front),
            "back" => Some(CanonicalView::Back),
            "left" => Some(CanonicalView::Left),
            "right" => Some(CanonicalView::Right),
            "top" => Some(CanonicalView::Top),
            "bottom" => Some(CanonicalView::Bottom),
            "iso_top_left" => Some(CanonicalView::IsoTopLeft),
            "iso_top_right" => Some(CanonicalView::IsoTopRight),
            _ => None,
        }
    }
}

impl fmt::Display for CanonicalView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
