/// Floating-point rectangle handed to renderers, expressed by its edges.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RectF {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RectF {
    #[inline]
    pub const fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    #[inline]
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_edges(x, y, x + width, y + height)
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Swaps edges so that `left <= right` and `top <= bottom`.
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }
}
