//! Crop visibility: decide which detected faces and OCR text regions remain
//! visible after a crop edit.
//!
//! A region counts as visible when at least half of its area (by default)
//! lies inside the crop rectangle. Face boxes are rescaled from the frame they
//! were detected on; OCR polygons are stored as fractions of the full image and
//! are reduced to their axis-aligned bounding box before comparison.
//!
//! # Example
//!
//! ```
//! use cropvis::{check_face_visibility, CropParameters, FaceRecord, ImageDimensions, SourceType};
//!
//! let face = FaceRecord {
//!     id: "face-1".into(),
//!     asset_id: "asset-1".into(),
//!     bounding_box_x1: 100.0,
//!     bounding_box_y1: 100.0,
//!     bounding_box_x2: 200.0,
//!     bounding_box_y2: 200.0,
//!     image_width: 1000.0,
//!     image_height: 1000.0,
//!     person_id: None,
//!     source_type: SourceType::MachineLearning,
//!     is_visible: true,
//! };
//! let faces = [face];
//! let crop = CropParameters::new(0.0, 0.0, 500.0, 500.0);
//! let result = check_face_visibility(&faces, ImageDimensions::new(1000.0, 1000.0), Some(&crop));
//! assert_eq!(result.visible.len(), 1);
//! ```
#![warn(missing_docs)]

mod edit;
mod error;
mod face;
mod geometry;
mod ocr;
mod visibility;

/// Edit actions and the crop descriptor.
pub use edit::{find_crop, CropParameters, EditAction, MirrorAxis};
/// Error type returned by validating constructors and the builder.
pub use error::VisibilityError;
/// Face records and the face classifier.
pub use face::{check_face_visibility, FaceRecord, SourceType};
/// Rectangles, image sizes and the overlap ratio.
pub use geometry::{bounding_box_overlap, BoundingBox, ImageDimensions};
/// OCR records and the OCR classifier.
pub use ocr::{check_ocr_visibility, OcrRecord};
/// Classification result and region trait.
pub use visibility::{Region, Visibility, DEFAULT_VISIBILITY_THRESHOLD};

/// Builder for classifying regions with non-default settings.
///
/// ```
/// use cropvis::{EditAction, CropParameters, ImageDimensions, OcrRecord, VisibilityChecker};
///
/// let edits = vec![EditAction::Crop(CropParameters::new(0.0, 0.0, 500.0, 500.0))];
/// let regions: Vec<OcrRecord> = Vec::new();
/// let result = VisibilityChecker::new()
///     .threshold(0.75)
///     .crop_from_actions(&edits)
///     .ocr(&regions, ImageDimensions::new(1000.0, 1000.0))
///     .unwrap();
/// assert!(result.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct VisibilityChecker {
    threshold: f64,
    crop: Option<CropParameters>,
}

impl Default for VisibilityChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityChecker {
    /// Create a checker with the default threshold and no crop.
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
            crop: None,
        }
    }

    /// Set the fraction (0.0–1.0, inclusive) of a region that must remain
    /// inside the crop. Default: 0.5.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the crop to check against. `None` leaves every region visible.
    ///
    /// The crop is checked when classifying: its origin must be non-negative
    /// and its size positive, all finite.
    pub fn crop(mut self, crop: Option<CropParameters>) -> Self {
        self.crop = crop;
        self
    }

    /// Take the crop from an edit list (last crop wins).
    pub fn crop_from_actions(mut self, actions: &[EditAction]) -> Self {
        self.crop = find_crop(actions).copied();
        self
    }

    /// Classify faces against the configured crop.
    pub fn faces<'a>(
        &self,
        faces: &'a [FaceRecord],
        asset_dimensions: ImageDimensions,
    ) -> Result<Visibility<'a, FaceRecord>, VisibilityError> {
        self.classify(faces, asset_dimensions)
    }

    /// Classify OCR regions against the configured crop.
    pub fn ocr<'a>(
        &self,
        regions: &'a [OcrRecord],
        asset_dimensions: ImageDimensions,
    ) -> Result<Visibility<'a, OcrRecord>, VisibilityError> {
        self.classify(regions, asset_dimensions)
    }

    /// Classify any [`Region`] implementor against the configured crop.
    pub fn classify<'a, T: Region>(
        &self,
        items: &'a [T],
        asset_dimensions: ImageDimensions,
    ) -> Result<Visibility<'a, T>, VisibilityError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(VisibilityError::InvalidThreshold(self.threshold));
        }
        asset_dimensions.validate()?;
        if let Some(crop) = &self.crop {
            crop.validate()?;
        }

        Ok(visibility::partition(
            items,
            asset_dimensions,
            self.crop.as_ref(),
            self.threshold,
        ))
    }
}
