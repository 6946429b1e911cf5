/// An integer point or velocity on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Add a delta in place
    pub fn add(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}
