use og_card::layout::TextMeasure;
use og_card::Px;

/// Every character measures the same fraction of an em. Matches how a
/// monospaced face behaves and keeps expected line counts easy to compute.
pub struct FixedAdvance(pub f32);

impl FixedAdvance {
    pub fn half() -> FixedAdvance {
        FixedAdvance(0.5)
    }
}

impl TextMeasure for FixedAdvance {
    fn width_of(&self, text: &str, size: Px) -> Px {
        Px(text.chars().count() as f32 * self.0 * size.0)
    }
}

/// Wide uppercase, narrow everything else. Still monotonic in prefixes,
/// which is all the layout engine is allowed to assume.
#[allow(dead_code)]
pub struct MixedAdvance;

#[allow(dead_code)]
impl TextMeasure for MixedAdvance {
    fn width_of(&self, text: &str, size: Px) -> Px {
        let ems: f32 = text
            .chars()
            .map(|ch| if ch.is_uppercase() { 0.9 } else { 0.45 })
            .sum();
        Px(ems * size.0)
    }
}
