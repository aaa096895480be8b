//! Integer screen geometry shared by the simulation and the view.

use serde::{Deserialize, Serialize};

/// A point on the simulation screen, in pixels.
///
/// The origin is the top-left corner; `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this position by the given deltas.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Multiply both coordinates by `factor`.
    #[must_use]
    pub const fn scale(self, factor: i32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_scale() {
        let p = Position::new(3, 4);
        assert_eq!(p.offset(1, -2), Position::new(4, 2));
        assert_eq!(p.scale(2), Position::new(6, 8));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(-1, 7)), "(-1, 7)");
    }

    #[test]
    fn test_from_tuple() {
        let p: Position = (10, 20).into();
        assert_eq!(p, Position::new(10, 20));
    }
}
