use glam::Vec2;

/// Axis-aligned rectangle in playfield pixels.
///
/// `pos` is the top-left corner; y grows downward like the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size * 0.5,
            size,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Move so the top edge sits at `top`, keeping the height
    pub fn set_top(&mut self, top: f32) {
        self.pos.y = top;
    }

    /// Move so the bottom edge sits at `bottom`, keeping the height
    pub fn set_bottom(&mut self, bottom: f32) {
        self.pos.y = bottom - self.size.y;
    }

    pub fn set_center_y(&mut self, y: f32) {
        self.pos.y = y - self.size.y * 0.5;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Strict overlap test. Rectangles that only share an edge do not collide,
    /// and a rectangle with no area never collides with anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.size.x <= 0.0 || self.size.y <= 0.0 || other.size.x <= 0.0 || other.size.y <= 0.0
        {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
