//! Drawing surface capability and its `image`-backed implementation.
//!
//! Rectangles are drawn with inclusive corners: an outline of width `n` covers
//! the outermost `n` rings of pixels inside the rectangle. Every draw call
//! composites source-over onto the buffer with straight alpha, and anything
//! that falls outside the canvas is clipped.

use image::{Rgba, RgbaImage};

use crate::color::Color;
use crate::font;
use crate::geometry::{Rect, SizePx};

// ============================================================================
// DrawingSurface
// ============================================================================

/// The minimal raster vocabulary the style catalog and composer draw with.
pub trait DrawingSurface {
    /// Returns the canvas dimensions.
    fn size(&self) -> SizePx;

    /// Draws a rectangular frame `line_width` pixels thick inside `rect`.
    fn draw_rect_outline(&mut self, rect: Rect, color: Color, line_width: u32);

    /// Fills every pixel of `rect`.
    fn draw_rect_fill(&mut self, rect: Rect, color: Color);

    /// Draws `text` centered on the whole surface, surrounded by a one pixel
    /// halo in `outline` so it stays readable on any background.
    fn draw_centered_text(&mut self, text: &str, color: Color, outline: Color);
}

// ============================================================================
// Canvas
// ============================================================================

/// An RGBA8 pixel buffer implementing [`DrawingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

/// The 8 neighbours of a pixel, drawn under text as its outline.
const HALO: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Canvas {
    /// Creates a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background.into()),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Returns the pixel at (x, y), or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.in_bounds(x, y)
            .then(|| (*self.image.get_pixel(x as u32, y as u32)).into())
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height()
    }

    /// Composites a single pixel, ignoring coordinates outside the canvas.
    fn blend(&mut self, x: i32, y: i32, color: Color) {
        if !self.in_bounds(x, y) {
            return;
        }
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        *dst = alpha_blend(color.into(), *dst);
    }

    /// Visits every on-canvas pixel of `rect` exactly once.
    fn clipped_pixels(&self, rect: Rect) -> impl Iterator<Item = (i32, i32)> + use<> {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(self.image.width() as i32);
        let y1 = rect.bottom().min(self.image.height() as i32);
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| (x, y)))
    }
}

impl DrawingSurface for Canvas {
    fn size(&self) -> SizePx {
        SizePx::new(self.image.width(), self.image.height())
    }

    fn draw_rect_outline(&mut self, rect: Rect, color: Color, line_width: u32) {
        if line_width == 0 {
            return;
        }
        let inner = rect.inset(line_width as i32);
        // Each ring pixel is blended once, so translucent corners don't darken.
        for (x, y) in self.clipped_pixels(rect) {
            if !inner.contains_point(x, y) {
                self.blend(x, y, color);
            }
        }
    }

    fn draw_rect_fill(&mut self, rect: Rect, color: Color) {
        for (x, y) in self.clipped_pixels(rect) {
            self.blend(x, y, color);
        }
    }

    fn draw_centered_text(&mut self, text: &str, color: Color, outline: Color) {
        let size = self.size();
        let (text_width, text_height) = font::measure(text);
        let left = (size.width as i32 - text_width as i32).div_euclid(2);
        let top = (size.height as i32 - text_height as i32).div_euclid(2);

        for (dx, dy) in HALO {
            for (x, y) in font::ink(text) {
                self.blend(left + x + dx, top + y + dy, outline);
            }
        }
        for (x, y) in font::ink(text) {
            self.blend(left + x, top + y, color);
        }
    }
}

// ============================================================================
// Compositing
// ============================================================================

/// Alpha blends two RGBA pixels (source over destination).
fn alpha_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    match src[3] {
        255 => return src,
        0 => return dst,
        _ => {}
    }

    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;

    let out_a = sa + da * (1.0 - sa);

    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |s: u8, d: u8| -> u8 {
        let sf = s as f32 / 255.0;
        let df = d as f32 / 255.0;
        let out = (sf * sa + df * da * (1.0 - sa)) / out_a;
        (out * 255.0).round() as u8
    };

    Rgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: Color = Color::rgb(198, 198, 198);
    const RED: Color = Color::rgb(255, 0, 0);

    fn count(canvas: &Canvas, color: Color) -> usize {
        let target: Rgba<u8> = color.into();
        canvas.image().pixels().filter(|p| **p == target).count()
    }

    #[test]
    fn new_canvas_is_filled() {
        let canvas = Canvas::new(4, 3, GRAY);
        assert_eq!(canvas.size(), SizePx::new(4, 3));
        assert_eq!(count(&canvas, GRAY), 12);
        assert_eq!(canvas.pixel(4, 0), None);
        assert_eq!(canvas.pixel(-1, 0), None);
    }

    #[test]
    fn outline_uses_inclusive_corners() {
        let mut canvas = Canvas::new(10, 10, GRAY);
        canvas.draw_rect_outline(Rect::new(1, 1, 5, 4), RED, 1);

        // 5x4 frame: 2 * 5 + 2 * 2
        assert_eq!(count(&canvas, RED), 14);
        assert_eq!(canvas.pixel(1, 1), Some(RED));
        assert_eq!(canvas.pixel(5, 4), Some(RED));
        assert_eq!(canvas.pixel(6, 4), Some(GRAY));
        assert_eq!(canvas.pixel(3, 2), Some(GRAY));
    }

    #[test]
    fn thick_outline_grows_inward() {
        let mut canvas = Canvas::new(10, 10, GRAY);
        canvas.draw_rect_outline(Rect::new(0, 0, 10, 10), RED, 2);

        assert_eq!(count(&canvas, RED), 100 - 36);
        assert_eq!(canvas.pixel(1, 1), Some(RED));
        assert_eq!(canvas.pixel(2, 2), Some(GRAY));
    }

    #[test]
    fn translucent_outline_blends_each_pixel_once() {
        let mut canvas = Canvas::new(6, 6, Color::BLACK);
        canvas.draw_rect_outline(Rect::new(0, 0, 6, 6), Color::rgba(255, 255, 255, 128), 1);

        let corner = canvas.pixel(0, 0).unwrap();
        let edge = canvas.pixel(3, 0).unwrap();
        assert_eq!(corner, edge);
        assert_eq!(corner.a, 255);
        assert!((127..=129).contains(&corner.r));
    }

    #[test]
    fn drawing_is_clipped_to_canvas() {
        let mut canvas = Canvas::new(4, 4, GRAY);
        canvas.draw_rect_fill(Rect::new(-2, -2, 4, 4), RED);
        canvas.draw_rect_outline(Rect::new(2, 2, 10, 10), RED, 1);

        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(1, 1), Some(RED));
        assert_eq!(canvas.pixel(2, 2), Some(RED));
        assert_eq!(canvas.pixel(3, 3), Some(GRAY));
    }

    #[test]
    fn centered_text_has_halo_and_fill() {
        let mut canvas = Canvas::new(32, 32, GRAY);
        canvas.draw_centered_text("EX", Color::WHITE, Color::BLACK);

        assert!(count(&canvas, Color::WHITE) > 0);
        assert!(count(&canvas, Color::BLACK) > 0);
        // 'E' top-left ink: left = (32 - 12) / 2, top = (32 - 11) / 2 + 2
        assert_eq!(canvas.pixel(10, 12), Some(Color::WHITE));
        assert_eq!(canvas.pixel(9, 12), Some(Color::BLACK));
        // corners are untouched
        assert_eq!(canvas.pixel(0, 0), Some(GRAY));
        assert_eq!(canvas.pixel(31, 31), Some(GRAY));
    }

    #[test]
    fn oversized_text_is_clipped() {
        let mut canvas = Canvas::new(8, 8, GRAY);
        canvas.draw_centered_text("WWWWWW", Color::WHITE, Color::BLACK);
        assert!(count(&canvas, Color::WHITE) > 0);
    }

    #[test]
    fn blend_over_opaque_stays_opaque() {
        let out = alpha_blend(Rgba([0, 0, 255, 128]), Rgba([255, 0, 0, 255]));
        assert_eq!(out[3], 255);
        assert!(out[0] > 0, "Should have some red");
        assert!(out[2] > 0, "Should have some blue");
    }
}
