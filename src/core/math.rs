// Math utilities and helper shapes

use glam::IVec2;

/// Integer circle in screen space, used for cheap overlap checks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

impl Circle {
    /// Circle at the origin with a radius of 0
    pub const EMPTY: Circle = Circle {
        x: 0,
        y: 0,
        radius: 0,
    };

    pub fn new(x: i32, y: i32, radius: i32) -> Self {
        Self { x, y, radius }
    }

    pub fn from_location(location: IVec2, radius: i32) -> Self {
        Self::new(location.x, location.y, radius)
    }

    /// Center of the circle
    pub fn location(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    pub fn top(&self) -> i32 {
        self.y - self.radius
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.radius
    }

    pub fn left(&self) -> i32 {
        self.x - self.radius
    }

    pub fn right(&self) -> i32 {
        self.x + self.radius
    }

    /// Check if two circles overlap (touching edges don't count)
    /// Any i32 coordinates and radii are valid; the math is done in i128
    pub fn intersects(&self, other: &Circle) -> bool {
        let radii = self.radius as i128 + other.radius as i128;
        let dx = self.x as i128 - other.x as i128;
        let dy = self.y as i128 - other.y as i128;
        dx * dx + dy * dy < radii * radii
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_circles() {
        let a = Circle::new(0, 0, 10);
        let b = Circle::new(15, 0, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_circles_do_not_intersect() {
        let a = Circle::new(0, 0, 5);
        let b = Circle::new(6, 8, 5); // distance 10 == radius sum
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_distant_circles() {
        let a = Circle::from_location(IVec2::new(-20, -20), 3);
        let b = Circle::new(20, 20, 3);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_huge_values_do_not_overflow() {
        let a = Circle::new(0, 0, i32::MAX);
        let b = Circle::new(10, 10, i32::MAX);
        assert!(a.intersects(&b));

        let far_left = Circle::new(i32::MIN, i32::MIN, 1);
        let far_right = Circle::new(i32::MAX, i32::MAX, 1);
        assert!(!far_left.intersects(&far_right));
    }

    #[test]
    fn test_edges() {
        let circle = Circle::new(10, 20, 5);
        assert_eq!(circle.top(), 15);
        assert_eq!(circle.bottom(), 25);
        assert_eq!(circle.left(), 5);
        assert_eq!(circle.right(), 15);
        assert_eq!(circle.location(), IVec2::new(10, 20));
    }

    #[test]
    fn test_empty() {
        assert!(Circle::EMPTY.is_empty());
        assert!(Circle::default().is_empty());
        assert!(!Circle::new(0, 0, 1).is_empty());
    }
}
