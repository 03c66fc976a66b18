//! Pre-defined card dimensions for common preview targets.
//!
//! All sizes are (width, height) in whole pixels.

/// Card dimensions as (width, height) in pixels.
pub type CardSize = (u32, u32);

/// The de-facto standard Open Graph preview size used by most link unfurlers
pub const OPEN_GRAPH: CardSize = (1200, 630);
/// Twitter/X `summary_large_image` cards (2:1)
pub const TWITTER_LARGE: CardSize = (1200, 600);
/// Square crop used by some aggregators and chat clients
pub const SQUARE: CardSize = (1080, 1080);
