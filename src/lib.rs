mod canvas;
pub use canvas::*;

mod card;
pub use card::*;

pub mod cardsize;

mod colour;
pub use colour::*;

mod font;
pub use font::*;

/// Automatic title layout: font-size fitting, line wrapping, and clamping
pub mod layout;

mod rect;
pub use rect::*;

mod units;
pub use units::*;

mod error;
pub use error::*;
