use crate::{OgError, Px};
use owned_ttf_parser::{AsFaceRef, GlyphId, OutlineBuilder, OwnedFace};
use zeno::{Command, Mask, Origin, Placement, Vector};

/// A parsed font object. Fonts can be TTF or OTF fonts. The crate assumes a
/// single fixed family and weight per card: load the font once at process
/// start and share it freely, the face is never mutated after parsing.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, OgError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Obtain the full name of the font, if the font carries one
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().line_gap() as f32
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text. Card
    /// rendering uses a fixed line-height multiplier instead, but this is the font's own idea
    /// of comfortable spacing.
    pub fn line_height(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        let leading: Px = scaling * self.face.as_face_ref().line_gap() as f32;
        let ascent: Px = scaling * self.face.as_face_ref().ascender() as f32;
        let descent: Px = scaling * self.face.as_face_ref().descender() as f32;
        leading + ascent - descent
    }

    /// Obtain the weight of the font. Numerical values generally map as follows:
    ///
    /// * 100: Thin (Hairline)
    /// * 400: Normal
    /// * 700: Bold
    /// * 900: Black (Heavy)
    pub fn weight(&self) -> u16 {
        self.face.as_face_ref().weight().to_number()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// Resolve a character to a glyph, falling back to U+FFFD and then to a
    /// question mark when the face has no mapping for it
    pub(crate) fn glyph_or_replacement(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }

    /// The horizontal advance of a single glyph at the given size
    pub(crate) fn advance(&self, glyph: GlyphId, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling
            * self
                .face
                .as_face_ref()
                .glyph_hor_advance(glyph)
                .unwrap_or_default() as f32
    }

    /// Rasterize one glyph outline to an 8-bit coverage mask at the given size.
    /// Returns [None] for glyphs without an outline (e.g. spaces)
    pub(crate) fn rasterize(&self, glyph: GlyphId, size: Px) -> Option<RasterGlyph> {
        let face = self.face.as_face_ref();
        let scale = size.0 / face.units_per_em() as f32;

        let mut path = OutlinePath::new(scale);
        face.outline_glyph(glyph, &mut path)?;
        if path.commands.is_empty() {
            return None;
        }

        let mut mask = Mask::new(path.commands.as_slice());
        mask.origin(Origin::BottomLeft);
        let (coverage, placement) = mask.render();
        if placement.width == 0 || placement.height == 0 {
            return None;
        }

        Some(RasterGlyph {
            coverage,
            placement,
        })
    }
}

/// An anti-aliased glyph bitmap. `placement` positions the bitmap relative to
/// the pen: `left` offsets from the pen x, `top` is the distance from the
/// baseline up to the bitmap's top row
pub(crate) struct RasterGlyph {
    pub coverage: Vec<u8>,
    pub placement: Placement,
}

/// Collects a glyph outline as [zeno] path commands, scaled from font units
/// to pixels as it goes
struct OutlinePath {
    scale: f32,
    commands: Vec<Command>,
}

impl OutlinePath {
    fn new(scale: f32) -> OutlinePath {
        OutlinePath {
            scale,
            commands: Vec::new(),
        }
    }

    fn point(&self, x: f32, y: f32) -> Vector {
        Vector::new(x * self.scale, y * self.scale)
    }
}

impl OutlineBuilder for OutlinePath {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.commands.push(Command::MoveTo(p));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.commands.push(Command::LineTo(p));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let c = self.point(x1, y1);
        let p = self.point(x, y);
        self.commands.push(Command::QuadTo(c, p));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let c1 = self.point(x1, y1);
        let c2 = self.point(x2, y2);
        let p = self.point(x, y);
        self.commands.push(Command::CurveTo(c1, c2, p));
    }

    fn close(&mut self) {
        self.commands.push(Command::Close);
    }
}
