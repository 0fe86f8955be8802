//! Axis-aligned integer rectangles for room bounds
//!
//! Rectangles are half-open: a rectangle covers `x..x + width` and
//! `y..y + height`. Overlap tests, margin expansion and perimeter sampling for
//! rooms are all done on these.

use serde::{Deserialize, Serialize};

/// Euclidean distance between two cells
pub fn distance(a: (i32, i32), b: (i32, i32)) -> f64 {
    (distance_sq(a, b) as f64).sqrt()
}

/// Squared Euclidean distance between two cells
pub fn distance_sq(a: (i32, i32), b: (i32, i32)) -> i64 {
    let dx = (a.0 - b.0) as i64;
    let dy = (a.1 - b.1) as i64;
    dx * dx + dy * dy
}

/// A rectangle of grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check if the rectangle has positive area
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Geometric center
    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }

    /// Center rounded to the nearest cell
    pub fn center_cell(&self) -> (i32, i32) {
        let (cx, cy) = self.center();
        (cx.round() as i32, cy.round() as i32)
    }

    /// Euclidean distance between the centers of two rectangles
    pub fn center_distance(&self, other: &Rect) -> f64 {
        let (ax, ay) = self.center();
        let (bx, by) = other.center();
        ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
    }

    /// Check if a cell lies inside this rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this rectangle lies entirely inside another
    pub fn is_inside(&self, other: &Rect) -> bool {
        self.x >= other.x
            && self.y >= other.y
            && self.right() <= other.right()
            && self.bottom() <= other.bottom()
    }

    /// Check if this rectangle shares at least one cell with another
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Grow by `margin` cells on all four sides
    pub fn expanded(&self, margin: i32) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2,
            self.height + margin * 2,
        )
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }

    /// All cells in the rectangle, row-major
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| (x, y)))
    }

    /// Distinct cells on the rectangle's edge
    ///
    /// Top and bottom rows first, then the left and right columns without
    /// their corners.
    pub fn perimeter(&self) -> Vec<(i32, i32)> {
        if !self.is_valid() {
            return Vec::new();
        }
        let (x0, y0) = (self.x, self.y);
        let (x1, y1) = (self.right() - 1, self.bottom() - 1);
        let mut points = Vec::with_capacity((self.width + self.height) as usize * 2);

        for x in x0..=x1 {
            points.push((x, y0));
            if y1 != y0 {
                points.push((x, y1));
            }
        }
        for y in y0 + 1..y1 {
            points.push((x0, y));
            if x1 != x0 {
                points.push((x1, y));
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10, 20, 6, 4);
        assert_eq!(r.right(), 16);
        assert_eq!(r.bottom(), 24);
        assert!(r.contains(15, 23));
        assert!(!r.contains(16, 23));
    }

    #[test]
    fn test_rect_intersects_is_half_open() {
        let r1 = Rect::new(0, 0, 10, 10);
        let r2 = Rect::new(5, 5, 10, 10);
        let touching = Rect::new(10, 0, 5, 5);
        let far = Rect::new(20, 20, 3, 3);

        assert!(r1.intersects(&r2));
        assert!(r2.intersects(&r1));
        assert!(!r1.intersects(&touching));
        assert!(!r1.intersects(&far));
    }

    #[test]
    fn test_expanded_margin() {
        let a = Rect::new(5, 5, 4, 4);
        let b = Rect::new(11, 5, 4, 4);
        assert!(!a.intersects(&b));
        assert!(!a.expanded(1).intersects(&b.expanded(1)));
        assert!(a.expanded(2).intersects(&b.expanded(2)));
        assert_eq!(a.expanded(3), Rect::new(2, 2, 10, 10));
    }

    #[test]
    fn test_union() {
        let a = Rect::new(2, 2, 3, 8);
        let b = Rect::new(2, 7, 9, 3);
        assert_eq!(a.union(&b), Rect::new(2, 2, 9, 8));
    }

    #[test]
    fn test_centers() {
        let r = Rect::new(0, 0, 5, 4);
        assert_eq!(r.center(), (2.5, 2.0));
        assert_eq!(r.center_cell(), (3, 2));
        let s = Rect::new(3, 4, 5, 4);
        assert!((r.center_distance(&s) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_perimeter_distinct() {
        let r = Rect::new(1, 1, 4, 3);
        let p = r.perimeter();
        assert_eq!(p.len(), 10);
        for (i, a) in p.iter().enumerate() {
            assert!(!p[i + 1..].contains(a), "duplicate {a:?}");
            assert!(a.0 == 1 || a.0 == 4 || a.1 == 1 || a.1 == 3);
        }
    }

    #[test]
    fn test_perimeter_degenerate() {
        assert_eq!(Rect::new(0, 0, 1, 1).perimeter(), vec![(0, 0)]);
        assert_eq!(Rect::new(0, 0, 3, 1).perimeter().len(), 3);
        assert!(Rect::new(0, 0, 0, 4).perimeter().is_empty());
    }

    #[test]
    fn test_cells_and_inside() {
        let r = Rect::new(1, 2, 2, 2);
        let cells: Vec<_> = r.cells().collect();
        assert_eq!(cells, vec![(1, 2), (2, 2), (1, 3), (2, 3)]);
        assert!(r.is_inside(&Rect::new(0, 0, 5, 5)));
        assert!(!r.is_inside(&Rect::new(0, 0, 2, 5)));
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance_sq((0, 0), (3, 4)), 25);
        assert!((distance((0, 0), (3, 4)) - 5.0).abs() < 1e-9);
    }
}
