use derive_more::{Add, AddAssign, Display, From, Into, Sub, Sum};

/// A measurement in physical pixels on the raster canvas. Fractional values
/// are kept throughout layout and measurement; conversion to whole pixel
/// coordinates happens only when blitting.
#[derive(
    Add, AddAssign, Sub, Sum, Display, From, Into, Debug, Default, Copy, Clone, PartialEq,
    PartialOrd,
)]
pub struct Px(pub f32);

impl std::ops::Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}
