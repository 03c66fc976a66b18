use crate::canvas::Canvas;
use crate::cardsize::{CardSize, OPEN_GRAPH};
use crate::colour::Colour;
use crate::font::Font;
use crate::layout::{layout_title, normalize_title, TitleOptions};
use crate::rect::Rect;
use crate::units::Px;
use crate::OgError;
use log::debug;

/// Horizontal padding between the card edge and its text content
pub const PADDING_X: Px = Px(96.0);
/// Vertical distance between title lines, as a multiple of the font size
pub const TITLE_LINE_HEIGHT: f32 = 1.25;

const META_SIZE: Px = Px(26.0);
const SITE_Y: Px = Px(96.0);
const TITLE_Y: Px = Px(190.0);
const FOOTER_INSET: Px = Px(70.0);

/// Colours for the card: a two-stop background gradient, a translucent glow
/// in the top-right corner, a vertical accent bar beside the text, and the
/// meta/title text colours. The default is a dark slate palette with a teal
/// accent
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub background: (Colour, Colour),
    pub glow: Colour,
    pub accent: (Colour, Colour),
    pub meta: Colour,
    pub title: Colour,
}

impl Default for CardStyle {
    fn default() -> CardStyle {
        CardStyle {
            background: (
                Colour::new_rgb_bytes(0x0b, 0x11, 0x20),
                Colour::new_rgb_bytes(0x0f, 0x17, 0x2a),
            ),
            glow: Colour::new_rgba_bytes(45, 212, 191, 89),
            accent: (
                Colour::new_rgb_bytes(0x22, 0xd3, 0xee),
                Colour::new_rgb_bytes(0x38, 0xbd, 0xf8),
            ),
            meta: Colour::new_rgb_bytes(0x94, 0xa3, 0xb8),
            title: Colour::new_rgb_bytes(0xf8, 0xfa, 0xfc),
        }
    }
}

/// One social preview card: the title to lay out, the site name shown above
/// it, and an optional pre-formatted publication date shown below. Build one
/// per request, call [Card::render], and discard it; nothing is shared
/// between renders except the font.
#[derive(Debug, Clone)]
pub struct Card {
    pub title: String,
    pub site: String,
    pub published: Option<String>,
    pub size: CardSize,
    pub style: CardStyle,
    pub title_options: TitleOptions,
}

impl Card {
    /// Create a card with the default size, style, and title fitting options
    pub fn new<S: Into<String>>(title: S, site: S) -> Card {
        Card {
            title: title.into(),
            site: site.into(),
            published: None,
            size: OPEN_GRAPH,
            style: CardStyle::default(),
            title_options: TitleOptions::default(),
        }
    }

    /// Render the card to an encoded PNG byte buffer. A fresh [Canvas] is
    /// created per call, so a shared [Font] can serve many concurrent renders
    pub fn render(&self, font: &Font) -> Result<Vec<u8>, OgError> {
        let (width, height) = self.size;
        let mut canvas = Canvas::new(width, height, font);

        self.draw_background(&mut canvas);
        self.draw_meta(&mut canvas);
        self.draw_title(&mut canvas, font);

        canvas.encode_png()
    }

    fn draw_background(&self, canvas: &mut Canvas) {
        let w = canvas.width() as f32;
        let h = canvas.height() as f32;
        let full = Rect::from_xywh(Px(0.0), Px(0.0), Px(w), Px(h));

        canvas.fill_linear_gradient(
            full,
            (Px(0.0), Px(0.0)),
            (Px(w), Px(h)),
            self.style.background.0,
            self.style.background.1,
        );

        canvas.fill_radial_gradient(
            full,
            (Px(w * 0.85), Px(-h * 0.2)),
            Px(20.0),
            Px(w * 0.75),
            self.style.glow,
            self.style.glow.with_alpha(0.0),
        );

        let bar = Rect::from_xywh(PADDING_X - Px(20.0), Px(120.0), Px(6.0), Px(h - 230.0));
        canvas.fill_linear_gradient(
            bar,
            (bar.x1, bar.y1),
            (bar.x1, bar.y2),
            self.style.accent.0,
            self.style.accent.1,
        );
    }

    fn draw_meta(&self, canvas: &mut Canvas) {
        canvas.set_font_size(META_SIZE);
        canvas.set_fill(self.style.meta);
        canvas.fill_text(&self.site, PADDING_X, SITE_Y);

        if let Some(published) = &self.published {
            let y = Px(canvas.height() as f32) - FOOTER_INSET;
            canvas.fill_text(published, PADDING_X, y);
        }
    }

    fn draw_title(&self, canvas: &mut Canvas, font: &Font) {
        // an empty or all-whitespace title falls back to the site name
        let normalized = normalize_title(&self.title);
        let title = if normalized.is_empty() {
            self.site.as_str()
        } else {
            normalized.as_str()
        };

        let max_width = Px(canvas.width() as f32) - PADDING_X * 2.0;
        let layout = layout_title(font, title, max_width, &self.title_options);
        debug!(
            "card title {:?}: {} line(s) at {}px",
            title,
            layout.lines.len(),
            layout.size
        );

        canvas.set_font_size(layout.size);
        canvas.set_fill(self.style.title);
        let line_height = Px((layout.size * TITLE_LINE_HEIGHT).0.round());
        for (index, line) in layout.lines.iter().enumerate() {
            let y = TITLE_Y + Px(line_height.0 * index as f32);
            canvas.fill_text(line, PADDING_X, y);
        }
    }
}
