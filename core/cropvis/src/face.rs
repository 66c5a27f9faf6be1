use serde::{Deserialize, Serialize};

use crate::edit::CropParameters;
use crate::geometry::{BoundingBox, ImageDimensions};
use crate::visibility::{self, Region, Visibility, DEFAULT_VISIBILITY_THRESHOLD};

/// Where a face record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceType {
    /// Found by the face detection model.
    #[default]
    MachineLearning,
    /// Read from embedded image metadata.
    Exif,
    /// Drawn by a user.
    Manual,
}

/// A detected face on an asset.
///
/// The bounding box is stored in the pixel space of `image_width` ×
/// `image_height`, which is the frame the detector ran on and may differ from
/// the asset's current size (a preview or thumbnail, for instance). Person,
/// source and visibility fields are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceRecord {
    /// Face id.
    pub id: String,
    /// Asset the face belongs to.
    pub asset_id: String,
    /// Left edge in the reference frame.
    pub bounding_box_x1: f64,
    /// Top edge in the reference frame.
    pub bounding_box_y1: f64,
    /// Right edge in the reference frame.
    pub bounding_box_x2: f64,
    /// Bottom edge in the reference frame.
    pub bounding_box_y2: f64,
    /// Reference frame width.
    pub image_width: f64,
    /// Reference frame height.
    pub image_height: f64,
    /// Person the face is assigned to, if any.
    #[serde(default)]
    pub person_id: Option<String>,
    /// Origin of the record.
    #[serde(default)]
    pub source_type: SourceType,
    /// Stored visibility flag.
    #[serde(default = "default_true")]
    pub is_visible: bool,
}

fn default_true() -> bool {
    true
}

impl FaceRecord {
    /// The stored box, in its own reference frame.
    pub fn stored_bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.bounding_box_x1,
            self.bounding_box_y1,
            self.bounding_box_x2,
            self.bounding_box_y2,
        )
    }

    /// The stored box rescaled from the reference frame into `dims`.
    ///
    /// `image_width` and `image_height` must be non-zero.
    pub fn scaled_bounding_box(&self, dims: ImageDimensions) -> BoundingBox {
        let x = |v: f64| v / self.image_width * dims.width;
        let y = |v: f64| v / self.image_height * dims.height;
        BoundingBox::new(
            x(self.bounding_box_x1),
            y(self.bounding_box_y1),
            x(self.bounding_box_x2),
            y(self.bounding_box_y2),
        )
    }
}

impl Region for FaceRecord {
    fn bounding_box(&self, dims: ImageDimensions) -> BoundingBox {
        self.scaled_bounding_box(dims)
    }
}

/// Split `faces` into those still visible after `crop` and those hidden by it.
///
/// A face is visible when at least half of its box, rescaled to
/// `asset_dimensions`, lies inside the crop. With no crop every face is visible.
pub fn check_face_visibility<'a>(
    faces: &'a [FaceRecord],
    asset_dimensions: ImageDimensions,
    crop: Option<&CropParameters>,
) -> Visibility<'a, FaceRecord> {
    visibility::partition(faces, asset_dimensions, crop, DEFAULT_VISIBILITY_THRESHOLD)
}
