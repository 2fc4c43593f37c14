//! The built-in GUI screens.
//!
//! Each screen is a constant grid definition. Adding a screen means adding
//! a variant and its descriptor here; the composer and style catalog need no
//! changes.

use crate::error::{Error, Result};
use crate::geometry::{Rect, SizePx};
use crate::style::{PanelKind, SlotKind};

use super::{LayoutDescriptor, PanelSpec, SlotGrid, SlotSpec};

/// A GUI screen with a fixed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The full interactive screen with the player inventory.
    SpawnEggMobSpawner,
    /// The compact debug screen without inventory.
    MobSpawner,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Self::SpawnEggMobSpawner, Self::MobSpawner];

    /// The asset name the screen's texture is generated under.
    pub fn name(self) -> &'static str {
        match self {
            Self::SpawnEggMobSpawner => "spawn_egg_mob_spawner",
            Self::MobSpawner => "mob_spawner",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|screen| screen.name() == name)
    }

    /// Canvas size of the screen's texture.
    pub fn size(self) -> SizePx {
        match self {
            Self::SpawnEggMobSpawner => SizePx::new(176, 212),
            Self::MobSpawner => SizePx::new(176, 166),
        }
    }

    /// Builds the screen's descriptor. Does not validate it.
    pub fn layout(self) -> LayoutDescriptor {
        match self {
            Self::SpawnEggMobSpawner => spawn_egg_mob_spawner(),
            Self::MobSpawner => mob_spawner(),
        }
    }
}

/// Returns the validated layout for a screen name.
///
/// # Errors
///
/// [`Error::UnknownScreen`] if no screen has that name, or [`Error::Layout`]
/// if its geometry breaks an invariant.
pub fn layout_for(name: &str) -> Result<LayoutDescriptor> {
    let screen = Screen::from_name(name).ok_or_else(|| Error::UnknownScreen(name.to_string()))?;
    let layout = screen.layout();
    layout.validate()?;
    Ok(layout)
}

fn spawn_egg_mob_spawner() -> LayoutDescriptor {
    let screen = Screen::SpawnEggMobSpawner;
    let size = screen.size();

    LayoutDescriptor::new(screen.name(), 1, size)
        .with_panel(PanelSpec::new(PanelKind::Main, Rect::from_size(size)))
        .with_panel(
            PanelSpec::new(PanelKind::Section, Rect::new(70, 8, 36, 36))
                .with_slot(SlotSpec::new(SlotKind::SpawnSource, 79, 17)),
        )
        .with_panel(
            PanelSpec::new(PanelKind::Section, Rect::new(6, 50, 164, 50))
                .with_grid(SlotGrid::new(SlotKind::Module, 12, 56, 4, 2))
                .with_slot(SlotSpec::new(SlotKind::Disabled, 100, 56))
                .with_slot(SlotSpec::new(SlotKind::Disabled, 120, 76)),
        )
        .with_panel(PanelSpec::new(PanelKind::Button, Rect::new(8, 106, 43, 15)))
        .with_panel(PanelSpec::new(PanelKind::Button, Rect::new(55, 106, 66, 15)))
        .with_panel(PanelSpec::new(PanelKind::Button, Rect::new(125, 106, 44, 15)))
        .with_panel(
            PanelSpec::new(PanelKind::Section, Rect::new(4, 125, 168, 84))
                .with_grid(SlotGrid::new(SlotKind::Inventory, 8, 130, 9, 3))
                // hotbar
                .with_grid(SlotGrid::new(SlotKind::Inventory, 8, 188, 9, 1)),
        )
}

fn mob_spawner() -> LayoutDescriptor {
    let screen = Screen::MobSpawner;
    let size = screen.size();

    LayoutDescriptor::new(screen.name(), 1, size)
        .with_panel(PanelSpec::new(PanelKind::Main, Rect::from_size(size)))
        .with_panel(PanelSpec::new(PanelKind::Inset, Rect::new(4, 4, 168, 17)))
        .with_panel(
            PanelSpec::new(PanelKind::Section, Rect::new(70, 26, 36, 36))
                .with_slot(SlotSpec::new(SlotKind::SpawnSource, 79, 35)),
        )
        .with_panel(
            PanelSpec::new(PanelKind::Section, Rect::new(4, 56, 62, 44))
                .with_grid(SlotGrid::new(SlotKind::Module, 8, 60, 3, 2)),
        )
        .with_panel(PanelSpec::new(PanelKind::Inset, Rect::new(4, 100, 168, 61)))
}
