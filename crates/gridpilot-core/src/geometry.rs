#![forbid(unsafe_code)]

//! Geometric primitives.

/// A cell coordinate on the glyph grid.
///
/// Uses grid coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`, returning `None` if either axis leaves `u16`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Point> {
        let x = u16::try_from(i32::from(self.x) + dx).ok()?;
        let y = u16::try_from(i32::from(self.y) + dy).ok()?;
        Some(Point::new(x, y))
    }

    /// The four orthogonal neighbors that exist in `u16` space
    /// (east, west, south, north).
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Point> {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(u16, u16)> for Point {
    fn from((x, y): (u16, u16)) -> Self {
        Self::new(x, y)
    }
}

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Number of cells.
    #[inline]
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if the size has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point lies inside `[0, width) x [0, height)`.
    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Size};

    #[test]
    fn point_offset_in_range() {
        assert_eq!(Point::new(3, 4).offset(2, -1), Some(Point::new(5, 3)));
    }

    #[test]
    fn point_offset_below_zero_is_none() {
        assert_eq!(Point::new(0, 4).offset(-1, 0), None);
        assert_eq!(Point::new(4, 0).offset(0, -1), None);
    }

    #[test]
    fn point_offset_past_max_is_none() {
        assert_eq!(Point::new(u16::MAX, 0).offset(1, 0), None);
    }

    #[test]
    fn neighbors_of_origin_skip_negative() {
        let n: Vec<_> = Point::new(0, 0).orthogonal_neighbors().collect();
        assert_eq!(n, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn neighbors_interior() {
        let n: Vec<_> = Point::new(5, 5).orthogonal_neighbors().collect();
        assert_eq!(n.len(), 4);
        assert!(n.contains(&Point::new(4, 5)));
        assert!(n.contains(&Point::new(5, 4)));
    }

    #[test]
    fn size_contains_edges() {
        let s = Size::new(4, 3);
        assert!(s.contains(Point::new(0, 0)));
        assert!(s.contains(Point::new(3, 2)));
        assert!(!s.contains(Point::new(4, 0)));
        assert!(!s.contains(Point::new(0, 3)));
    }

    #[test]
    fn size_area_and_empty() {
        assert_eq!(Size::new(10, 20).area(), 200);
        assert!(Size::new(0, 5).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn point_from_tuple() {
        assert_eq!(Point::from((7, 9)), Point::new(7, 9));
    }
}
