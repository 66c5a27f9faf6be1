use serde::{Deserialize, Serialize};

use crate::error::VisibilityError;

/// Axis-aligned rectangle given by its top-left `(x1, y1)` and bottom-right
/// `(x2, y2)` corners.
///
/// Callers are expected to keep `x2 >= x1` and `y2 >= y1`; this is not checked.
/// Zero-area boxes are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x1: f64,
    /// Top edge.
    pub y1: f64,
    /// Right edge.
    pub x2: f64,
    /// Bottom edge.
    pub y2: f64,
}

impl BoundingBox {
    /// Create a box from its corner coordinates.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Horizontal extent, `x2 - x1`.
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Vertical extent, `y2 - y1`.
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Area of the box. Not clamped: inverted boxes give a non-positive area.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Area shared with `other`. Disjoint or edge-touching boxes share zero area.
    pub fn intersection_area(&self, other: &BoundingBox) -> f64 {
        let x1 = self.x1.max(other.x1);
        let y1 = self.y1.max(other.y1);
        let x2 = self.x2.min(other.x2);
        let y2 = self.y2.min(other.y2);

        (x2 - x1).max(0.0) * (y2 - y1).max(0.0)
    }

    /// Fraction of `self` covered by `other`. See [`bounding_box_overlap`].
    pub fn overlap(&self, other: &BoundingBox) -> f64 {
        bounding_box_overlap(self, other)
    }
}

/// Fraction of `a`'s area that lies inside `b`.
///
/// The ratio is relative to `a` only, so it is asymmetric:
/// `bounding_box_overlap(a, b)` answers "how much of `a` does `b` cover",
/// which is not intersection-over-union.
///
/// The result is not clamped. If `a` has zero area the result is `NaN`, so
/// reference boxes must have positive width and height.
///
/// ```
/// use cropvis::{bounding_box_overlap, BoundingBox};
///
/// let a = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
/// let b = BoundingBox::new(50.0, 0.0, 150.0, 100.0);
/// assert_eq!(bounding_box_overlap(&a, &b), 0.5);
/// ```
pub fn bounding_box_overlap(a: &BoundingBox, b: &BoundingBox) -> f64 {
    a.intersection_area(b) / a.area()
}

/// Pixel size of the image that output coordinates are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageDimensions {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl ImageDimensions {
    /// Create dimensions without validation.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create dimensions, rejecting zero, negative or non-finite sizes.
    pub fn try_new(width: f64, height: f64) -> Result<Self, VisibilityError> {
        let dims = Self::new(width, height);
        dims.validate()?;
        Ok(dims)
    }

    pub(crate) fn validate(&self) -> Result<(), VisibilityError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(VisibilityError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> BoundingBox {
        BoundingBox::new(x, y, x + size, y + size)
    }

    #[test]
    fn identical_boxes_overlap_fully() {
        let b = square(0.0, 0.0, 100.0);
        assert_eq!(bounding_box_overlap(&b, &b), 1.0);
    }

    #[test]
    fn disjoint_boxes_do_not_overlap() {
        let a = square(0.0, 0.0, 100.0);
        let b = square(200.0, 200.0, 100.0);
        assert_eq!(bounding_box_overlap(&a, &b), 0.0);
    }

    #[test]
    fn half_overlap_horizontal() {
        let a = square(0.0, 0.0, 100.0);
        let b = BoundingBox::new(50.0, 0.0, 150.0, 100.0);
        assert_eq!(bounding_box_overlap(&a, &b), 0.5);
    }

    #[test]
    fn half_overlap_vertical() {
        let a = square(0.0, 0.0, 100.0);
        let b = BoundingBox::new(0.0, 50.0, 100.0, 150.0);
        assert_eq!(bounding_box_overlap(&a, &b), 0.5);
    }

    #[test]
    fn quarter_overlap_on_corner() {
        let a = square(0.0, 0.0, 100.0);
        let b = square(50.0, 50.0, 100.0);
        assert_eq!(bounding_box_overlap(&a, &b), 0.25);
    }

    #[test]
    fn contained_box_is_fully_covered() {
        let inner = square(25.0, 25.0, 50.0);
        let outer = square(0.0, 0.0, 100.0);
        assert_eq!(bounding_box_overlap(&inner, &outer), 1.0);
    }

    #[test]
    fn ratio_is_relative_to_first_box() {
        // outer covers 50x50 of its own 100x100
        let outer = square(0.0, 0.0, 100.0);
        let inner = square(25.0, 25.0, 50.0);
        assert_eq!(bounding_box_overlap(&outer, &inner), 0.25);
        assert_eq!(outer.overlap(&inner), inner.area() / outer.area());
    }

    #[test]
    fn edge_touching_boxes_do_not_overlap() {
        let a = square(0.0, 0.0, 100.0);
        let b = BoundingBox::new(100.0, 0.0, 200.0, 100.0);
        assert_eq!(bounding_box_overlap(&a, &b), 0.0);
        assert_eq!(a.intersection_area(&b), 0.0);
    }

    #[test]
    fn zero_area_reference_is_nan() {
        let flat = BoundingBox::new(10.0, 10.0, 10.0, 50.0);
        let other = square(0.0, 0.0, 100.0);
        assert!(bounding_box_overlap(&flat, &other).is_nan());
    }

    #[test]
    fn zero_area_other_gives_zero() {
        let a = square(0.0, 0.0, 100.0);
        let point = BoundingBox::new(50.0, 50.0, 50.0, 50.0);
        assert_eq!(bounding_box_overlap(&a, &point), 0.0);
    }

    #[test]
    fn box_accessors() {
        let b = BoundingBox::new(10.0, 20.0, 40.0, 80.0);
        assert_eq!(b.width(), 30.0);
        assert_eq!(b.height(), 60.0);
        assert_eq!(b.area(), 1800.0);
    }

    #[test]
    fn dimensions_validation() {
        assert!(ImageDimensions::try_new(1000.0, 750.0).is_ok());
        assert_eq!(
            ImageDimensions::try_new(0.0, 750.0),
            Err(VisibilityError::InvalidDimensions {
                width: 0.0,
                height: 750.0
            })
        );
        assert!(ImageDimensions::try_new(100.0, -1.0).is_err());
        assert!(ImageDimensions::try_new(f64::INFINITY, 10.0).is_err());
        assert!(ImageDimensions::try_new(f64::NAN, 10.0).is_err());
    }
}
