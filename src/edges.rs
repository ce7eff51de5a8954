//! Edge insets.

use bdui_core::Inset;
use cgmath::Vector2;
use std::ops;

/// Insets on the four edges of a box, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Edges {
    pub const ZERO: Edges = Edges::new(0., 0., 0., 0.);

    /// Creates new edge insets.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Edges {
        Edges {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns the total horizontal and vertical extent taken up by these insets.
    pub fn extent(&self) -> Vector2<f64> {
        Vector2::new(self.left + self.right, self.top + self.bottom)
    }

    pub fn is_zero(&self) -> bool {
        *self == Edges::ZERO
    }
}

impl From<Inset> for Edges {
    fn from(inset: Inset) -> Edges {
        Edges::new(
            f64::from(inset.left),
            f64::from(inset.top),
            f64::from(inset.right),
            f64::from(inset.bottom),
        )
    }
}

impl ops::Add for Edges {
    type Output = Edges;
    fn add(self, other: Edges) -> Edges {
        Edges::new(
            self.left + other.left,
            self.top + other.top,
            self.right + other.right,
            self.bottom + other.bottom,
        )
    }
}

#[test]
fn test_edges_extent() {
    let edges = Edges::from(Inset::new(16, 0, 8, 4));
    assert_eq!(edges.extent(), Vector2::new(24., 4.));
    assert_eq!((edges + Edges::ZERO), edges);
    assert!(Edges::from(Inset::ZERO).is_zero());
}
