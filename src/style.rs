//! Style catalog: how each slot and panel role is painted.
//!
//! A role never affects geometry. It only selects a fixed sequence of
//! [`StyleOp`]s applied relative to the role's rectangle, in paint order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Error;
use crate::geometry::Rect;
use crate::surface::DrawingSurface;

// ============================================================================
// Roles
// ============================================================================

/// The semantic role of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotKind {
    /// The slot holding the spawn source (egg). Framed in gold.
    SpawnSource,
    /// An upgrade module slot.
    Module,
    /// A player inventory or hotbar slot.
    Inventory,
    /// A slot that exists but cannot be used yet.
    Disabled,
}

/// The semantic role of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelKind {
    /// The outer frame of a screen.
    Main,
    /// A translucent grouping region behind related slots.
    Section,
    /// A well behind a control button.
    Button,
    /// A title bar or recessed control area.
    Inset,
}

impl SlotKind {
    pub const ALL: [SlotKind; 4] = [Self::SpawnSource, Self::Module, Self::Inventory, Self::Disabled];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SpawnSource => "spawn-source",
            Self::Module => "module",
            Self::Inventory => "inventory",
            Self::Disabled => "disabled",
        }
    }
}

impl PanelKind {
    pub const ALL: [PanelKind; 4] = [Self::Main, Self::Section, Self::Button, Self::Inset];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Section => "section",
            Self::Button => "button",
            Self::Inset => "inset",
        }
    }
}

// ============================================================================
// Theme
// ============================================================================

/// A complete style catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Beveled panels and per-role slot frames.
    #[default]
    Final,
    /// Flat background with black slot outlines, for quick mock-ups.
    Placeholder,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Final => "final",
            Self::Placeholder => "placeholder",
        }
    }

    /// The canvas color behind a GUI screen when the catalog sets none.
    pub fn default_background(self) -> Color {
        match self {
            Self::Final => colors::LIGHT_GRAY,
            Self::Placeholder => colors::PLACEHOLDER_GRAY,
        }
    }

    /// Returns the paint operations for a slot role.
    pub fn slot_ops(self, kind: SlotKind) -> &'static [StyleOp] {
        match (self, kind) {
            (Self::Final, SlotKind::SpawnSource) => &SPAWN_SOURCE_SLOT,
            (Self::Final, SlotKind::Module) => &MODULE_SLOT,
            (Self::Final, SlotKind::Inventory) => &INVENTORY_SLOT,
            (Self::Final, SlotKind::Disabled) => &DISABLED_SLOT,
            (Self::Placeholder, SlotKind::SpawnSource) => &PLACEHOLDER_SPAWN_SOURCE_SLOT,
            (Self::Placeholder, SlotKind::Module | SlotKind::Disabled) => &MODULE_SLOT,
            (Self::Placeholder, SlotKind::Inventory) => &INVENTORY_SLOT,
        }
    }

    /// Returns the paint operations for a panel role.
    pub fn panel_ops(self, kind: PanelKind) -> &'static [StyleOp] {
        match (self, kind) {
            (Self::Final, PanelKind::Main) => &MAIN_PANEL,
            (Self::Final, PanelKind::Section) => &SECTION_PANEL,
            (Self::Final, PanelKind::Button) => &BUTTON_PANEL,
            (Self::Final, PanelKind::Inset) => &INSET_PANEL,
            (Self::Placeholder, PanelKind::Main) => &PLACEHOLDER_MAIN_PANEL,
            (Self::Placeholder, PanelKind::Section | PanelKind::Button | PanelKind::Inset) => &[],
        }
    }

    pub fn render_slot<S: DrawingSurface + ?Sized>(self, surface: &mut S, rect: Rect, kind: SlotKind) {
        apply(surface, rect, self.slot_ops(kind));
    }

    pub fn render_panel<S: DrawingSurface + ?Sized>(self, surface: &mut S, rect: Rect, kind: PanelKind) {
        apply(surface, rect, self.panel_ops(kind));
    }
}

// ============================================================================
// Operations
// ============================================================================

/// One paint step, positioned relative to the styled rectangle.
///
/// `inset` moves every edge inward; negative values draw outside the
/// rectangle (a slot's frame sits one or two pixels around its cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleOp {
    Outline { inset: i32, width: u32, color: Color },
    Fill { inset: i32, color: Color },
}

fn apply<S: DrawingSurface + ?Sized>(surface: &mut S, rect: Rect, ops: &[StyleOp]) {
    for op in ops {
        match *op {
            StyleOp::Outline { inset, width, color } => {
                surface.draw_rect_outline(rect.inset(inset), color, width)
            }
            StyleOp::Fill { inset, color } => surface.draw_rect_fill(rect.inset(inset), color),
        }
    }
}

pub mod colors {
    //! Named colors used by the built-in themes.

    use crate::color::Color;

    pub const GOLD: Color = Color::rgb(255, 215, 0);
    pub const BLACK: Color = Color::BLACK;
    pub const DARK_GRAY: Color = Color::rgb(64, 64, 64);
    pub const MID_GRAY: Color = Color::rgb(128, 128, 128);
    pub const PLACEHOLDER_GRAY: Color = Color::rgb(139, 139, 139);
    pub const LIGHT_GRAY: Color = Color::rgb(198, 198, 198);
    pub const BUTTON_GRAY: Color = Color::rgb(220, 220, 220);
    pub const NEAR_WHITE: Color = Color::rgb(240, 240, 240);

    pub const SPAWN_HIGHLIGHT: Color = Color::rgba(255, 255, 255, 64);
    pub const PANEL_HIGHLIGHT: Color = Color::rgba(255, 255, 255, 128);
    pub const MODULE_INNER: Color = Color::rgba(128, 128, 128, 128);
    pub const DISABLED_FILL: Color = Color::rgba(32, 32, 32, 128);
    pub const SECTION_FILL: Color = Color::rgba(220, 220, 220, 128);
}

use self::colors::*;

const SPAWN_SOURCE_SLOT: [StyleOp; 3] = [
    StyleOp::Outline { inset: -2, width: 2, color: GOLD },
    StyleOp::Outline { inset: -1, width: 1, color: BLACK },
    StyleOp::Outline { inset: 0, width: 1, color: SPAWN_HIGHLIGHT },
];

const MODULE_SLOT: [StyleOp; 2] = [
    StyleOp::Outline { inset: -1, width: 1, color: BLACK },
    StyleOp::Outline { inset: 0, width: 1, color: MODULE_INNER },
];

const INVENTORY_SLOT: [StyleOp; 1] = [StyleOp::Outline { inset: -1, width: 1, color: BLACK }];

const DISABLED_SLOT: [StyleOp; 2] = [
    StyleOp::Outline { inset: -1, width: 1, color: DARK_GRAY },
    StyleOp::Fill { inset: 0, color: DISABLED_FILL },
];

// The fill lands last and covers the inner frame ring and the highlight,
// leaving a 1px black border.
const MAIN_PANEL: [StyleOp; 3] = [
    StyleOp::Outline { inset: 0, width: 2, color: BLACK },
    StyleOp::Outline { inset: 2, width: 1, color: PANEL_HIGHLIGHT },
    StyleOp::Fill { inset: 1, color: LIGHT_GRAY },
];

const SECTION_PANEL: [StyleOp; 2] = [
    StyleOp::Outline { inset: 0, width: 1, color: MID_GRAY },
    StyleOp::Fill { inset: 1, color: SECTION_FILL },
];

const BUTTON_PANEL: [StyleOp; 2] = [
    StyleOp::Outline { inset: 0, width: 1, color: MID_GRAY },
    StyleOp::Fill { inset: 1, color: BUTTON_GRAY },
];

const INSET_PANEL: [StyleOp; 2] = [
    StyleOp::Outline { inset: 0, width: 1, color: MID_GRAY },
    StyleOp::Fill { inset: 1, color: NEAR_WHITE },
];

const PLACEHOLDER_SPAWN_SOURCE_SLOT: [StyleOp; 1] =
    [StyleOp::Outline { inset: -1, width: 2, color: BLACK }];

const PLACEHOLDER_MAIN_PANEL: [StyleOp; 2] = [
    StyleOp::Outline { inset: 0, width: 2, color: BLACK },
    StyleOp::Outline { inset: 2, width: 1, color: PANEL_HIGHLIGHT },
];

// ============================================================================
// Parsing
// ============================================================================

macro_rules! impl_name {
    ($ty:ty, $what:literal, $all:expr) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $all.into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| Error::UnknownName {
                        what: $what,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_name!(SlotKind, "slot kind", SlotKind::ALL);
impl_name!(PanelKind, "panel kind", PanelKind::ALL);
impl_name!(Theme, "theme", [Theme::Final, Theme::Placeholder]);

// ============================================================================
// Tests
// ============================================================================
