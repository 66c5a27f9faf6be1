use serde::{Deserialize, Serialize};

use crate::edit::CropParameters;
use crate::geometry::{BoundingBox, ImageDimensions};
use crate::visibility::{self, Region, Visibility, DEFAULT_VISIBILITY_THRESHOLD};

/// A recognized text region on an asset.
///
/// Corners are stored as fractions (0.0–1.0) of the asset's full width and
/// height, in detector order. They usually describe a rotated or skewed
/// quadrilateral rather than an axis-aligned box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrRecord {
    /// Region id.
    pub id: String,
    /// Asset the region belongs to.
    pub asset_id: String,
    /// First corner, x.
    pub x1: f64,
    /// First corner, y.
    pub y1: f64,
    /// Second corner, x.
    pub x2: f64,
    /// Second corner, y.
    pub y2: f64,
    /// Third corner, x.
    pub x3: f64,
    /// Third corner, y.
    pub y3: f64,
    /// Fourth corner, x.
    pub x4: f64,
    /// Fourth corner, y.
    pub y4: f64,
    /// Detection confidence of the polygon.
    pub box_score: f64,
    /// Recognition confidence of the text.
    pub text_score: f64,
    /// Recognized text.
    pub text: String,
}

impl OcrRecord {
    /// The four corners in `dims` pixel space.
    pub fn polygon(&self, dims: ImageDimensions) -> [(f64, f64); 4] {
        [
            (self.x1, self.y1),
            (self.x2, self.y2),
            (self.x3, self.y3),
            (self.x4, self.y4),
        ]
        .map(|(x, y)| (x * dims.width, y * dims.height))
    }

    /// Axis-aligned box enclosing the polygon in `dims` pixel space.
    ///
    /// This over-approximates rotated text: the box covers the corners of the
    /// quadrilateral, not the quadrilateral itself. A `NaN` corner makes the
    /// whole box `NaN`, so the region can never pass a visibility threshold.
    pub fn scaled_bounding_box(&self, dims: ImageDimensions) -> BoundingBox {
        let polygon = self.polygon(dims);
        let (mut x1, mut y1) = polygon[0];
        let (mut x2, mut y2) = polygon[0];
        for &(x, y) in &polygon[1..] {
            x1 = nan_min(x1, x);
            y1 = nan_min(y1, y);
            x2 = nan_max(x2, x);
            y2 = nan_max(y2, y);
        }
        BoundingBox::new(x1, y1, x2, y2)
    }
}

// `f64::min`/`max` ignore a NaN operand; these keep it.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

impl Region for OcrRecord {
    fn bounding_box(&self, dims: ImageDimensions) -> BoundingBox {
        self.scaled_bounding_box(dims)
    }
}

/// Split OCR `regions` into those still visible after `crop` and those hidden.
///
/// A region is visible when at least half of the axis-aligned box around its
/// polygon lies inside the crop. With no crop every region is visible.
pub fn check_ocr_visibility<'a>(
    regions: &'a [OcrRecord],
    asset_dimensions: ImageDimensions,
    crop: Option<&CropParameters>,
) -> Visibility<'a, OcrRecord> {
    visibility::partition(regions, asset_dimensions, crop, DEFAULT_VISIBILITY_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ocr(corners: [f64; 8]) -> OcrRecord {
        let [x1, y1, x2, y2, x3, y3, x4, y4] = corners;
        OcrRecord {
            id: "ocr-id".to_string(),
            asset_id: "asset-id".to_string(),
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
            x4,
            y4,
            box_score: 0.9,
            text_score: 0.9,
            text: "Sample Text".to_string(),
        }
    }

    #[test]
    fn polygon_scales_each_axis() {
        let r = ocr([0.1, 0.2, 0.5, 0.2, 0.5, 0.4, 0.1, 0.4]);
        let poly = r.polygon(ImageDimensions::new(1000.0, 500.0));
        assert_eq!(poly[0], (100.0, 100.0));
        assert_eq!(poly[2], (500.0, 200.0));
    }

    #[test]
    fn diamond_reduces_to_enclosing_box() {
        // top, right, bottom, left
        let r = ocr([0.15, 0.1, 0.2, 0.15, 0.15, 0.2, 0.1, 0.15]);
        let bbox = r.scaled_bounding_box(ImageDimensions::new(1000.0, 1000.0));
        assert_eq!(bbox, BoundingBox::new(100.0, 100.0, 200.0, 200.0));
    }

    #[test]
    fn corner_order_does_not_matter() {
        let a = ocr([0.1, 0.1, 0.2, 0.1, 0.2, 0.2, 0.1, 0.2]);
        let b = ocr([0.2, 0.2, 0.1, 0.2, 0.1, 0.1, 0.2, 0.1]);
        let dims = ImageDimensions::new(640.0, 480.0);
        assert_eq!(a.scaled_bounding_box(dims), b.scaled_bounding_box(dims));
    }

    #[test]
    fn nan_corner_poisons_bounding_box() {
        let r = ocr([f64::NAN, 0.1, 0.2, 0.1, 0.2, 0.2, 0.1, 0.2]);
        let bbox = r.scaled_bounding_box(ImageDimensions::new(1000.0, 1000.0));
        assert!(bbox.x1.is_nan());
        assert!(bbox.x2.is_nan());
        assert_eq!(bbox.y1, 100.0);
    }

    #[test]
    fn region_with_nan_corner_is_hidden() {
        let regions = vec![
            ocr([f64::NAN, 0.1, 0.2, 0.1, 0.2, 0.2, 0.1, 0.2]),
            ocr([0.1, 0.1, 0.2, 0.1, 0.2, f64::NAN, 0.1, 0.2]),
        ];
        let crop = CropParameters::new(0.0, 0.0, 500.0, 500.0);
        let result =
            check_ocr_visibility(&regions, ImageDimensions::new(1000.0, 1000.0), Some(&crop));
        assert!(result.visible.is_empty());
        assert_eq!(result.hidden.len(), 2);
    }

    #[test]
    fn region_forty_percent_inside_is_hidden() {
        let regions = vec![ocr([0.1, 0.1, 0.2, 0.1, 0.2, 0.2, 0.1, 0.2])];
        let crop = CropParameters::new(160.0, 100.0, 500.0, 500.0);
        let result =
            check_ocr_visibility(&regions, ImageDimensions::new(1000.0, 1000.0), Some(&crop));
        assert!(result.visible.is_empty());
        assert_eq!(result.hidden.len(), 1);
    }

    #[test]
    fn region_half_inside_is_visible() {
        let regions = vec![ocr([0.1, 0.1, 0.2, 0.1, 0.2, 0.2, 0.1, 0.2])];
        let crop = CropParameters::new(150.0, 100.0, 500.0, 500.0);
        let result =
            check_ocr_visibility(&regions, ImageDimensions::new(1000.0, 1000.0), Some(&crop));
        assert_eq!(result.visible.len(), 1);
    }
}
