//! Colors and deterministic name-derived color assignment.

use image::Rgba;
use palette::{Hsv, IntoColor, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================================================
// Color
// ============================================================================

/// An 8-bit straight-alpha RGBA color.
///
/// In configuration files a color is written as `[r, g, b]` or
/// `[r, g, b, a]`; alpha defaults to fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(p: Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Self { r, g, b, a }
    }
}

impl TryFrom<Vec<u8>> for Color {
    type Error = Error;

    fn try_from(channels: Vec<u8>) -> Result<Self, Self::Error> {
        match channels[..] {
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            [r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
            _ => Err(Error::InvalidColor(channels.len())),
        }
    }
}

impl From<Color> for Vec<u8> {
    fn from(c: Color) -> Self {
        if c.is_opaque() {
            vec![c.r, c.g, c.b]
        } else {
            vec![c.r, c.g, c.b, c.a]
        }
    }
}

// ============================================================================
// Name-derived colors
// ============================================================================

const SATURATION: f32 = 0.7;
const VALUE: f32 = 0.8;

/// Returns the hue bucket (0-359 degrees) assigned to `name`.
///
/// Names in different buckets are considered visually distinct.
pub fn hue_for(name: &str) -> u16 {
    (fnv1a_32(name.as_bytes()) % 360) as u16
}

/// Derives a stable, saturated color for an asset name.
///
/// The name is hashed with 32-bit FNV-1a, reduced to a hue angle, and
/// converted from HSV with fixed saturation 0.7 and value 0.8. The result is
/// identical across runs and platforms.
pub fn color_for(name: &str) -> Color {
    from_hue(hue_for(name) as f32)
}

pub(crate) fn from_hue(degrees: f32) -> Color {
    let hsv = Hsv::new(degrees, SATURATION, VALUE);
    let rgb: Srgb = hsv.into_color();

    // Truncate rather than round, matching an integer cast of `c * 255`.
    Color::rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// 32-bit FNV-1a.
fn fnv1a_32(bytes: &[u8]) -> u32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;

    bytes.iter().fold(OFFSET_BASIS, |hash, &byte| {
        (hash ^ byte as u32).wrapping_mul(PRIME)
    })
}

// ============================================================================
// Tests
// ============================================================================
