/// Axis-aligned rectangle in GUI pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment: `[x, x + width) × [y, y + height)`.
    #[inline]
    pub const fn contains(self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    #[inline]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// The top strip of this rectangle, `height` pixels tall.
    #[inline]
    pub const fn top_strip(self, height: i32) -> Self {
        Self::new(self.x, self.y, self.width, height)
    }
}
