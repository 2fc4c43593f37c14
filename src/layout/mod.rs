//! Layout engine: fixed slot and panel geometry for GUI screens.
//!
//! A [`LayoutDescriptor`] is the single source of truth for where a screen's
//! slots and panels are. The texture composer paints from it, and it can be
//! exported as JSON for anything that overlays the screen at runtime (slot
//! highlights, hit regions) and must agree on coordinates.
//!
//! # Invariants
//!
//! [`LayoutDescriptor::validate`] checks, for every descriptor:
//! - every panel and slot has a non-empty rectangle inside the canvas,
//! - every slot lies inside the panel that owns it,
//! - no two slots share any pixel area.
//!
//! [`layout_for`] validates before returning, so a broken descriptor can
//! never reach the renderer.

mod screens;

pub use screens::{Screen, layout_for};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Rect, SizePx};
use crate::style::{PanelKind, SlotKind};

/// Side length of a slot cell in pixels.
pub const SLOT_SIZE: u32 = 18;

// ============================================================================
// Specs
// ============================================================================

/// A slot cell and the role it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSpec {
    pub kind: SlotKind,
    pub rect: Rect,
}

impl SlotSpec {
    /// A standard 18x18 slot with its top-left corner at (x, y).
    pub const fn new(kind: SlotKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            rect: Rect::square(x, y, SLOT_SIZE),
        }
    }
}

/// A regular grid of identical slots, expanded row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGrid {
    pub kind: SlotKind,
    pub origin: (i32, i32),
    pub columns: u32,
    pub rows: u32,
    /// Distance between the top-left corners of neighbouring cells.
    pub pitch: u32,
}

impl SlotGrid {
    /// A grid of edge-adjacent cells.
    pub const fn new(kind: SlotKind, x: i32, y: i32, columns: u32, rows: u32) -> Self {
        Self {
            kind,
            origin: (x, y),
            columns,
            rows,
            pitch: SLOT_SIZE,
        }
    }

    pub fn len(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn slots(&self) -> impl Iterator<Item = SlotSpec> + use<> {
        let Self {
            kind,
            origin: (x, y),
            columns,
            rows,
            pitch,
        } = *self;
        (0..rows).flat_map(move |row| {
            (0..columns).map(move |col| {
                SlotSpec::new(kind, x + (col * pitch) as i32, y + (row * pitch) as i32)
            })
        })
    }
}

/// A background region and the slots it groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub kind: PanelKind,
    pub rect: Rect,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<SlotSpec>,
}

impl PanelSpec {
    pub fn new(kind: PanelKind, rect: Rect) -> Self {
        Self {
            kind,
            rect,
            slots: Vec::new(),
        }
    }

    pub fn with_slot(mut self, slot: SlotSpec) -> Self {
        self.slots.push(slot);
        self
    }

    pub fn with_grid(mut self, grid: SlotGrid) -> Self {
        self.slots.extend(grid.slots());
        self
    }
}

// ============================================================================
// LayoutDescriptor
// ============================================================================

/// The complete, versioned geometry of one GUI screen.
///
/// Panels are listed in paint order. Each panel owns the slots drawn on top
/// of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDescriptor {
    pub name: String,
    pub version: u32,
    pub size: SizePx,
    pub panels: Vec<PanelSpec>,
}

impl LayoutDescriptor {
    pub fn new(name: impl Into<String>, version: u32, size: SizePx) -> Self {
        Self {
            name: name.into(),
            version,
            size,
            panels: Vec::new(),
        }
    }

    pub fn with_panel(mut self, panel: PanelSpec) -> Self {
        self.panels.push(panel);
        self
    }

    /// Iterates every slot across all panels, in paint order.
    pub fn slots(&self) -> impl Iterator<Item = &SlotSpec> {
        self.panels.iter().flat_map(|panel| panel.slots.iter())
    }

    /// Counts the slots drawn with the given role.
    pub fn count(&self, kind: SlotKind) -> usize {
        self.slots().filter(|slot| slot.kind == kind).count()
    }

    /// Checks the geometry invariants listed in the module docs.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let screen = || self.name.clone();

        for (index, panel) in self.panels.iter().enumerate() {
            if panel.rect.is_empty() {
                return Err(LayoutError::EmptyRect {
                    screen: screen(),
                    rect: panel.rect,
                });
            }
            if !panel.rect.fits_within(self.size) {
                return Err(LayoutError::PanelOutOfBounds {
                    screen: screen(),
                    index,
                    rect: panel.rect,
                    size: self.size,
                });
            }
        }

        let owned = self
            .panels
            .iter()
            .flat_map(|panel| panel.slots.iter().map(move |slot| (panel, slot)));

        for (index, (panel, slot)) in owned.enumerate() {
            if slot.rect.is_empty() {
                return Err(LayoutError::EmptyRect {
                    screen: screen(),
                    rect: slot.rect,
                });
            }
            if !slot.rect.fits_within(self.size) {
                return Err(LayoutError::SlotOutOfBounds {
                    screen: screen(),
                    index,
                    rect: slot.rect,
                    size: self.size,
                });
            }
            if !panel.rect.contains(&slot.rect) {
                return Err(LayoutError::SlotOutsidePanel {
                    screen: screen(),
                    index,
                    slot: slot.rect,
                    panel: panel.rect,
                });
            }
        }

        let slots: Vec<_> = self.slots().collect();
        for (first, a) in slots.iter().enumerate() {
            for (offset, b) in slots[first + 1..].iter().enumerate() {
                if a.rect.intersects(&b.rect) {
                    return Err(LayoutError::SlotOverlap {
                        screen: screen(),
                        first,
                        second: first + 1 + offset,
                    });
                }
            }
        }

        Ok(())
    }

    /// Serializes the descriptor to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// ============================================================================
// LayoutError
// ============================================================================

/// A violated geometry invariant. Always a defect in the descriptor itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("{screen}: empty rectangle {rect:?}")]
    EmptyRect { screen: String, rect: Rect },

    #[error("{screen}: panel {index} at {rect:?} exceeds the {size} canvas")]
    PanelOutOfBounds {
        screen: String,
        index: usize,
        rect: Rect,
        size: SizePx,
    },

    #[error("{screen}: slot {index} at {rect:?} exceeds the {size} canvas")]
    SlotOutOfBounds {
        screen: String,
        index: usize,
        rect: Rect,
        size: SizePx,
    },

    #[error("{screen}: slot {index} at {slot:?} is not inside its panel {panel:?}")]
    SlotOutsidePanel {
        screen: String,
        index: usize,
        slot: Rect,
        panel: Rect,
    },

    #[error("{screen}: slots {first} and {second} overlap")]
    SlotOverlap {
        screen: String,
        first: usize,
        second: usize,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> LayoutDescriptor {
        LayoutDescriptor::new("test", 1, SizePx::new(100, 60))
            .with_panel(PanelSpec::new(PanelKind::Main, Rect::new(0, 0, 100, 60)))
    }

    #[test]
    fn grid_expands_row_major() {
        let grid = SlotGrid::new(SlotKind::Module, 8, 45, 4, 2);
        let slots: Vec<_> = grid.slots().collect();

        assert_eq!(grid.len(), 8);
        assert_eq!(slots.len(), 8);
        assert_eq!(slots[0].rect, Rect::square(8, 45, 18));
        assert_eq!(slots[3].rect, Rect::square(62, 45, 18));
        assert_eq!(slots[4].rect, Rect::square(8, 63, 18));
        assert!(slots.iter().all(|s| s.kind == SlotKind::Module));
    }

    #[test]
    fn valid_layout_passes() {
        let layout = descriptor().with_panel(
            PanelSpec::new(PanelKind::Section, Rect::new(4, 4, 44, 26))
                .with_grid(SlotGrid::new(SlotKind::Inventory, 7, 8, 2, 1)),
        );
        assert_eq!(layout.validate(), Ok(()));
        assert_eq!(layout.count(SlotKind::Inventory), 2);
    }

    #[test]
    fn overlapping_slots_are_rejected() {
        let layout = descriptor().with_panel(
            PanelSpec::new(PanelKind::Section, Rect::new(0, 0, 100, 60))
                .with_slot(SlotSpec::new(SlotKind::SpawnSource, 10, 10))
                .with_slot(SlotSpec::new(SlotKind::Disabled, 20, 20)),
        );
        assert_eq!(
            layout.validate(),
            Err(LayoutError::SlotOverlap {
                screen: "test".into(),
                first: 0,
                second: 1,
            })
        );
    }

    #[test]
    fn slots_in_different_panels_are_checked_for_overlap() {
        let layout = descriptor()
            .with_panel(
                PanelSpec::new(PanelKind::Section, Rect::new(0, 0, 40, 40))
                    .with_slot(SlotSpec::new(SlotKind::Module, 10, 10)),
            )
            .with_panel(
                PanelSpec::new(PanelKind::Section, Rect::new(20, 0, 40, 40))
                    .with_slot(SlotSpec::new(SlotKind::Module, 21, 12)),
            );
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::SlotOverlap { first: 0, second: 1, .. })
        ));
    }

    #[test]
    fn slot_outside_canvas_is_rejected() {
        let layout = descriptor().with_panel(
            PanelSpec::new(PanelKind::Section, Rect::new(0, 0, 100, 60))
                .with_slot(SlotSpec::new(SlotKind::Inventory, 90, 10)),
        );
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::SlotOutOfBounds { index: 0, .. })
        ));
    }

    #[test]
    fn slot_outside_its_panel_is_rejected() {
        let layout = descriptor().with_panel(
            PanelSpec::new(PanelKind::Section, Rect::new(4, 4, 30, 30))
                .with_slot(SlotSpec::new(SlotKind::Module, 20, 20)),
        );
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::SlotOutsidePanel { index: 0, .. })
        ));
    }

    #[test]
    fn panel_outside_canvas_is_rejected() {
        let layout = descriptor().with_panel(PanelSpec::new(PanelKind::Button, Rect::new(90, 50, 20, 20)));
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::PanelOutOfBounds { index: 1, .. })
        ));
    }

    #[test]
    fn empty_panel_is_rejected() {
        let layout = descriptor().with_panel(PanelSpec::new(PanelKind::Inset, Rect::new(4, 4, 0, 10)));
        assert!(matches!(layout.validate(), Err(LayoutError::EmptyRect { .. })));
    }
}
