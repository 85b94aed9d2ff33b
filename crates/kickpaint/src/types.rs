//! Core geometric types.

/// A point in canvas space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The pixel containing this point.
    #[inline]
    pub fn to_pixel(self) -> PixelCoord {
        PixelCoord::new(self.x.floor() as i32, self.y.floor() as i32)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Integer pixel coordinates. May lie outside any buffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelCoord {
    pub x: i32,
    pub y: i32,
}

impl PixelCoord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four edge-adjacent neighbors: right, left, down, up.
    #[inline]
    pub fn neighbors(self) -> [PixelCoord; 4] {
        let Self { x, y } = self;
        [
            PixelCoord::new(x.saturating_add(1), y),
            PixelCoord::new(x.saturating_sub(1), y),
            PixelCoord::new(x, y.saturating_add(1)),
            PixelCoord::new(x, y.saturating_sub(1)),
        ]
    }
}

impl From<(i32, i32)> for PixelCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_pixel_points_floor_to_their_pixel() {
        assert_eq!(Point::new(80.5, 50.5).to_pixel(), PixelCoord::new(80, 50));
        assert_eq!(Point::new(-0.5, 0.0).to_pixel(), PixelCoord::new(-1, 0));
    }

    #[test]
    fn neighbors_are_four_connected() {
        let n = PixelCoord::new(5, 5).neighbors();
        assert!(n.contains(&PixelCoord::new(6, 5)));
        assert!(n.contains(&PixelCoord::new(4, 5)));
        assert!(n.contains(&PixelCoord::new(5, 6)));
        assert!(n.contains(&PixelCoord::new(5, 4)));
        assert!(!n.contains(&PixelCoord::new(6, 6)));
    }
}
