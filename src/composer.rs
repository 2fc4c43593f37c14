//! Texture composition: turns catalog entries into finished pixel buffers.

use image::RgbaImage;
use tracing::debug;

use crate::catalog::{AssetEntry, AssetKind, GeneratorKind};
use crate::color::{Color, color_for};
use crate::error::{Error, Result};
use crate::geometry::SizePx;
use crate::layout::{LayoutDescriptor, layout_for};
use crate::style::Theme;
use crate::surface::{Canvas, DrawingSurface};

/// A rendered texture, ready to be handed to a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub name: String,
    pub kind: AssetKind,
    pub image: RgbaImage,
}

impl Texture {
    pub fn size(&self) -> SizePx {
        SizePx::new(self.image.width(), self.image.height())
    }
}

/// Renders icons and GUI screens with one theme.
///
/// Composition is pure: the same entry and theme always give the same pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextureComposer {
    theme: Theme,
}

impl TextureComposer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Renders one catalog entry with the generator its kind selects.
    ///
    /// # Errors
    ///
    /// Icons fail with [`Error::InvalidIconSize`] for an empty or non-square
    /// size. GUI entries fail with [`Error::UnknownScreen`] when no layout has
    /// their name, and with [`Error::CanvasSizeMismatch`] when an explicit size
    /// disagrees with the screen.
    pub fn compose(&self, entry: &AssetEntry) -> Result<Texture> {
        let image = match entry.generator() {
            GeneratorKind::Icon => self.compose_icon(entry)?,
            GeneratorKind::Panel => self.compose_panel(entry)?,
        };
        debug!(
            name = %entry.name,
            kind = %entry.kind,
            width = image.width(),
            height = image.height(),
            "composed texture"
        );
        Ok(Texture {
            name: entry.name.clone(),
            kind: entry.kind,
            image,
        })
    }

    /// A square swatch in the entry's color with its label centered on top.
    pub fn compose_icon(&self, entry: &AssetEntry) -> Result<RgbaImage> {
        let size = entry.icon_size()?;
        let background = entry.color.unwrap_or_else(|| color_for(&entry.name));

        let mut canvas = Canvas::new(size.width, size.height, background);
        canvas.draw_centered_text(&entry.display_label(), Color::WHITE, Color::BLACK);
        Ok(canvas.into_image())
    }

    fn compose_panel(&self, entry: &AssetEntry) -> Result<RgbaImage> {
        let layout = layout_for(&entry.name)?;
        match entry.size {
            Some(requested) if requested != layout.size => {
                return Err(Error::CanvasSizeMismatch {
                    screen: layout.name,
                    expected: layout.size,
                    requested,
                });
            }
            _ => {}
        }

        let background = match self.theme {
            Theme::Final => self.theme.default_background(),
            Theme::Placeholder => entry.color.unwrap_or(self.theme.default_background()),
        };
        Ok(self.compose_layout(&layout, background))
    }

    /// Paints a layout onto a fresh canvas.
    ///
    /// Every panel is painted before any slot, so a panel fill never covers
    /// a slot frame.
    pub fn compose_layout(&self, layout: &LayoutDescriptor, background: Color) -> RgbaImage {
        let mut canvas = Canvas::new(layout.size.width, layout.size.height, background);
        for panel in &layout.panels {
            self.theme.render_panel(&mut canvas, panel.rect, panel.kind);
        }
        for slot in layout.slots() {
            self.theme.render_slot(&mut canvas, slot.rect, slot.kind);
        }
        canvas.into_image()
    }
}

// ============================================================================
// Tests
// ============================================================================
