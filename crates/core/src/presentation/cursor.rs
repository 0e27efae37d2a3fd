#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Custom cursor: a dot pinned to the pointer and a ring easing toward it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorFollower {
    pointer: Point,
    ring: Point,
}

impl CursorFollower {
    /// Fraction of the remaining distance the ring covers per frame.
    pub const EASING: f64 = 0.1;
    pub const DOT_RADIUS: f64 = 6.0;
    pub const RING_RADIUS: f64 = 20.0;
    /// Narrower viewports keep the native cursor.
    pub const MIN_VIEWPORT_WIDTH: f64 = 1024.0;
    const SETTLE_EPSILON: f64 = 0.05;

    #[must_use]
    pub fn enabled_for_width(width: f64) -> bool {
        width >= Self::MIN_VIEWPORT_WIDTH
    }

    pub fn track(&mut self, x: f64, y: f64) {
        self.pointer = Point { x, y };
    }

    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    #[must_use]
    pub fn ring(&self) -> Point {
        self.ring
    }

    /// True once the ring is close enough to the pointer that a frame would
    /// not visibly move it.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.pointer.x - self.ring.x).abs() < Self::SETTLE_EPSILON
            && (self.pointer.y - self.ring.y).abs() < Self::SETTLE_EPSILON
    }

    /// Advance the ring by one animation frame.
    pub fn step(&mut self) {
        self.ring.x += (self.pointer.x - self.ring.x) * Self::EASING;
        self.ring.y += (self.pointer.y - self.ring.y) * Self::EASING;
    }

    #[must_use]
    pub fn dot_transform(&self) -> String {
        translate(self.pointer, Self::DOT_RADIUS)
    }

    #[must_use]
    pub fn ring_transform(&self) -> String {
        translate(self.ring, Self::RING_RADIUS)
    }
}

fn translate(at: Point, radius: f64) -> String {
    format!("translate({:.2}px, {:.2}px)", at.x - radius, at.y - radius)
}
