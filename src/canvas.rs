use crate::colour::{colours, Colour};
use crate::font::Font;
use crate::layout::width_of_text;
use crate::rect::Rect;
use crate::units::Px;
use crate::OgError;
use image::RgbaImage;
use std::io::Cursor;

/// A raster drawing surface for one rendering pass.
///
/// The canvas carries the ambient drawing state the measurement and draw
/// calls consume: the current font size and the current fill colour. That
/// state is scoped to this one canvas, so concurrent requests each build
/// their own canvas and never interfere with each other; the shared [Font]
/// behind it is read-only.
///
/// Coordinates are y-down with the origin at the top-left. Text is positioned
/// by the top of its em box; the canvas applies the font's ascent internally
/// to find the baseline.
pub struct Canvas<'f> {
    font: &'f Font,
    font_size: Px,
    fill: Colour,
    pixels: RgbaImage,
}

impl<'f> Canvas<'f> {
    /// Create a canvas of the given dimensions, initially transparent black,
    /// drawing with the given font
    pub fn new(width: u32, height: u32, font: &'f Font) -> Canvas<'f> {
        Canvas {
            font,
            font_size: Px(16.0),
            fill: colours::BLACK,
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Set the font size used by subsequent [measure_text](Canvas::measure_text)
    /// and [fill_text](Canvas::fill_text) calls
    pub fn set_font_size(&mut self, size: Px) {
        self.font_size = size;
    }

    /// Set the colour used by subsequent fill and text calls
    pub fn set_fill(&mut self, colour: Colour) {
        self.fill = colour;
    }

    /// The rendered width of `text` at the current font size
    pub fn measure_text(&self, text: &str) -> Px {
        width_of_text(text, self.font, self.font_size)
    }

    /// Fill a rectangle with the current fill colour
    pub fn fill_rect(&mut self, rect: Rect) {
        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend_pixel(x, y, self.fill);
            }
        }
    }

    /// Fill a rectangle with a linear gradient running from `start` at `from`
    /// to `end` at `to`. Pixels are projected onto the gradient axis and the
    /// two colours interpolated; the axis endpoints need not lie inside the
    /// rectangle
    pub fn fill_linear_gradient(
        &mut self,
        rect: Rect,
        from: (Px, Px),
        to: (Px, Px),
        start: Colour,
        end: Colour,
    ) {
        let (x0, y0, x1, y1) = self.clip(rect);
        let (fx, fy) = (from.0 .0, from.1 .0);
        let dx = to.0 .0 - fx;
        let dy = to.1 .0 - fy;
        let len2 = dx * dx + dy * dy;

        for y in y0..y1 {
            for x in x0..x1 {
                let t = if len2 > 0.0 {
                    let px = x as f32 + 0.5 - fx;
                    let py = y as f32 + 0.5 - fy;
                    (px * dx + py * dy) / len2
                } else {
                    0.0
                };
                self.blend_pixel(x, y, start.lerp(end, t));
            }
        }
    }

    /// Fill a rectangle with a radial gradient centred at `centre`: `start`
    /// inside radius `r0`, `end` at and beyond radius `r1`
    pub fn fill_radial_gradient(
        &mut self,
        rect: Rect,
        centre: (Px, Px),
        r0: Px,
        r1: Px,
        start: Colour,
        end: Colour,
    ) {
        let (x0, y0, x1, y1) = self.clip(rect);
        let span = (r1.0 - r0.0).max(f32::EPSILON);

        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - centre.0 .0;
                let dy = y as f32 + 0.5 - centre.1 .0;
                let dist = (dx * dx + dy * dy).sqrt();
                let t = (dist - r0.0) / span;
                self.blend_pixel(x, y, start.lerp(end, t));
            }
        }
    }

    /// Draw a single line of text with its top-left corner at (`x`, `y`),
    /// using the current font size and fill colour. Characters the font
    /// cannot map (after falling back to U+FFFD and then `?`) are skipped
    pub fn fill_text(&mut self, text: &str, x: Px, y: Px) {
        let baseline = y + self.font.ascent(self.font_size);
        let mut pen = x;

        for ch in text.chars() {
            let Some(glyph) = self.font.glyph_or_replacement(ch) else {
                continue;
            };

            if let Some(raster) = self.font.rasterize(glyph, self.font_size) {
                let left = pen.0.round() as i64 + raster.placement.left as i64;
                let top = baseline.0.round() as i64 - raster.placement.top as i64;
                let width = raster.placement.width as i64;

                for (i, &coverage) in raster.coverage.iter().enumerate() {
                    if coverage == 0 {
                        continue;
                    }
                    let gx = left + (i as i64 % width);
                    let gy = top + (i as i64 / width);
                    let alpha = self.fill.a * coverage as f32 / 255.0;
                    self.blend_pixel_signed(gx, gy, self.fill.with_alpha(alpha));
                }
            }

            pen += self.font.advance(glyph, self.font_size);
        }
    }

    /// Encode the canvas contents as a PNG byte buffer
    pub fn encode_png(&self) -> Result<Vec<u8>, OgError> {
        let mut out = Cursor::new(Vec::new());
        self.pixels
            .write_to(&mut out, image::ImageOutputFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Clamp a rectangle to the canvas, returning integer pixel bounds
    fn clip(&self, rect: Rect) -> (u32, u32, u32, u32) {
        let x0 = (rect.x1.0.floor().max(0.0) as u32).min(self.width());
        let y0 = (rect.y1.0.floor().max(0.0) as u32).min(self.height());
        let x1 = (rect.x2.0.ceil().max(0.0) as u32).min(self.width());
        let y1 = (rect.y2.0.ceil().max(0.0) as u32).min(self.height());
        (x0, y0, x1.max(x0), y1.max(y0))
    }

    fn blend_pixel_signed(&mut self, x: i64, y: i64, colour: Colour) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        self.blend_pixel(x as u32, y as u32, colour);
    }

    /// Source-over composite of a straight-alpha colour onto one pixel
    fn blend_pixel(&mut self, x: u32, y: u32, colour: Colour) {
        let sa = colour.a.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }

        let pixel = self.pixels.get_pixel_mut(x, y);
        let [dr, dg, db, da] = pixel.0.map(|c| c as f32 / 255.0);

        let out_a = sa + da * (1.0 - sa);
        let blend = |s: f32, d: f32| (s * sa + d * da * (1.0 - sa)) / out_a;
        pixel.0 = [
            (blend(colour.r, dr).clamp(0.0, 1.0) * 255.0).round() as u8,
            (blend(colour.g, dg).clamp(0.0, 1.0) * 255.0).round() as u8,
            (blend(colour.b, db).clamp(0.0, 1.0) * 255.0).round() as u8,
            (out_a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ];
    }
}
