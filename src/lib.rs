//! placeholder-forge: placeholder textures and item descriptors for resource packs
//!
//! This crate generates the stand-in art a mod needs before real assets
//! exist: labelled icon swatches for items and blocks, GUI screen backgrounds
//! drawn from fixed slot layouts, and the item descriptor JSON that points
//! each item at its model.
//!
//! # Example
//!
//! ```
//! use placeholder_forge::{AssetEntry, Color, TextureComposer, Theme, layout_for};
//!
//! let composer = TextureComposer::new(Theme::Final);
//!
//! // Icons are 32x32 by default, labelled with the first two letters
//! let icon = composer
//!     .compose(&AssetEntry::item("ruby").with_color(Color::rgb(224, 17, 95)))
//!     .unwrap();
//! assert_eq!(icon.image.dimensions(), (32, 32));
//!
//! // GUI screens are rendered from their layout descriptor
//! let layout = layout_for("spawn_egg_mob_spawner").unwrap();
//! assert_eq!(layout.slots().count(), 47);
//! let gui = composer.compose(&AssetEntry::gui("spawn_egg_mob_spawner")).unwrap();
//! assert_eq!(gui.image.dimensions(), (176, 212));
//! ```
//!
//! # Writing a resource pack
//!
//! [`Generator`] runs a whole [`AssetCatalog`] into a sink. Textures are
//! overwritten on every run; descriptors are only created when missing.
//!
//! ```no_run
//! use placeholder_forge::{AssetCatalog, Generator, ResourcePackDir, Theme};
//!
//! let catalog = AssetCatalog::builtin();
//! let mut pack = ResourcePackDir::new("src/main/resources", &catalog.namespace);
//! let report = Generator::new(&catalog, Theme::Final).run(&mut pack)?;
//! println!("{} descriptors already existed", report.descriptors.skipped.len());
//! # Ok::<(), placeholder_forge::Error>(())
//! ```

mod catalog;
mod color;
mod composer;
mod descriptor;
mod error;
mod font;
mod generator;
mod geometry;
mod layout;
mod sink;
mod style;
mod surface;

pub use catalog::{
    AssetCatalog, AssetEntry, AssetKind, DEFAULT_ICON_SIZE, DescriptorEntry, GeneratorKind,
};
pub use color::{Color, color_for, hue_for};
pub use composer::{Texture, TextureComposer};
pub use descriptor::{DescriptorEmitter, ItemDescriptor, MODEL_TYPE, ModelDescriptor};
pub use error::{Error, Result};
pub use generator::{DescriptorReport, GenerationReport, Generator};
pub use geometry::{Rect, SizePx};
pub use layout::{
    LayoutDescriptor, LayoutError, PanelSpec, SLOT_SIZE, Screen, SlotGrid, SlotSpec, layout_for,
};
pub use sink::{DescriptorSink, ResourcePackDir, TextureSink, WriteOutcome};
pub use style::{PanelKind, SlotKind, StyleOp, Theme, colors};
pub use surface::{Canvas, DrawingSurface};
