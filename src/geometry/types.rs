//! Core types for the geometry engine

use std::cmp::Ordering;

/// Top-left corner of one label on the page, in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

impl Origin {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Page reading order: top to bottom, then left to right
    pub fn reading_order(&self, other: &Origin) -> Ordering {
        self.y
            .total_cmp(&other.y)
            .then_with(|| self.x.total_cmp(&other.x))
    }
}

/// Bounding size of one label, in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameSize {
    pub width: f64,
    pub height: f64,
}

impl FrameSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Equal width and height
    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_order_rows_first() {
        let upper_right = Origin::new(200.0, 10.0);
        let lower_left = Origin::new(0.0, 20.0);
        assert_eq!(upper_right.reading_order(&lower_left), Ordering::Less);
        assert_eq!(lower_left.reading_order(&upper_right), Ordering::Greater);
    }

    #[test]
    fn test_reading_order_same_row() {
        let a = Origin::new(10.0, 50.0);
        let b = Origin::new(110.0, 50.0);
        assert_eq!(a.reading_order(&b), Ordering::Less);
        assert_eq!(a.reading_order(&a), Ordering::Equal);
    }

    #[test]
    fn test_square_size() {
        assert_eq!(FrameSize::square(30.0), FrameSize::new(30.0, 30.0));
    }
}
