//! Automatic title layout for fixed-size cards.
//!
//! Given a title of any length and a pixel-width budget, the layout engine
//! picks a font size from a descending candidate range and wraps the title
//! into a bounded number of lines, truncating with an ellipsis when even the
//! smallest candidate overflows.
//!
//! The pipeline, leaf-first:
//!
//! - [`split_tokens`](crate::layout::split_tokens) - normalizes the title and
//!   splits it into wrap units (words, or individual characters for scripts
//!   without word boundaries)
//! - [`break_token`](crate::layout::break_token) - character-level fallback
//!   for a single unit too wide to fit any line (e.g. a long URL)
//! - [`build_lines`](crate::layout::build_lines) - greedy packing of tokens
//!   into width-bounded lines
//! - [`layout_title`](crate::layout::layout_title) - drives the packer across
//!   descending font sizes and clamps with [`clamp_lines`](crate::layout::clamp_lines)
//!   as a last resort
//!
//! All widths come from a [`TextMeasure`] oracle, so the engine itself never
//! touches a drawing surface and has no failure modes: every input, including
//! an empty title, produces a valid layout.
//!
//! # Example
//!
//! ```
//! use og_card::layout::{layout_title, TextMeasure, TitleOptions};
//! use og_card::Px;
//!
//! /// Pretend every character is 0.6em wide.
//! struct FixedAdvance;
//!
//! impl TextMeasure for FixedAdvance {
//!     fn width_of(&self, text: &str, size: Px) -> Px {
//!         Px(text.chars().count() as f32 * 0.6 * size.0)
//!     }
//! }
//!
//! let layout = layout_title(
//!     &FixedAdvance,
//!     "A normal short title",
//!     Px(1008.0),
//!     &TitleOptions::default(),
//! );
//! assert_eq!(layout.lines, vec!["A normal short title".to_string()]);
//! assert_eq!(layout.size, Px(72.0));
//! ```

mod lines;
mod tokens;

pub use lines::*;
pub use tokens::*;

use crate::font::Font;
use crate::units::Px;

/// The measurement oracle the layout engine wraps text against.
///
/// Implementations must be monotonic: a prefix of `text` never measures wider
/// than `text` itself at the same size. [Font] satisfies this by summing
/// glyph advances; tests substitute synthetic advances.
pub trait TextMeasure {
    /// The rendered width of `text` at the given font size
    fn width_of(&self, text: &str, size: Px) -> Px;
}

impl TextMeasure for Font {
    fn width_of(&self, text: &str, size: Px) -> Px {
        width_of_text(text, self, size)
    }
}

/// Calculate the width of a given string of text given the font and font size
pub fn width_of_text(text: &str, font: &Font, size: Px) -> Px {
    use owned_ttf_parser::AsFaceRef;

    let scaling = size / font.face.as_face_ref().units_per_em() as f32;
    text.chars()
        .filter_map(|ch| font.glyph_id(ch))
        .map(|gid| {
            scaling
                * font
                    .face
                    .as_face_ref()
                    .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                    .unwrap_or_default() as f32
        })
        .sum()
}
