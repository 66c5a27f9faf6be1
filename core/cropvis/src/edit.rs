use serde::{Deserialize, Serialize};

use crate::error::VisibilityError;
use crate::geometry::BoundingBox;

/// Crop region within the asset, in the asset's current pixel space.
///
/// Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropParameters {
    /// Left edge of the crop.
    pub x: f64,
    /// Top edge of the crop.
    pub y: f64,
    /// Width of the crop.
    pub width: f64,
    /// Height of the crop.
    pub height: f64,
}

impl CropParameters {
    /// Create crop parameters from origin and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The retained area as a corner-based box.
    pub fn rect(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub(crate) fn validate(&self) -> Result<(), VisibilityError> {
        let origin_ok = |v: f64| v.is_finite() && v >= 0.0;
        let size_ok = |v: f64| v.is_finite() && v > 0.0;
        if origin_ok(self.x) && origin_ok(self.y) && size_ok(self.width) && size_ok(self.height) {
            Ok(())
        } else {
            Err(VisibilityError::InvalidCrop {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Axis a mirror edit flips across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MirrorAxis {
    /// Flip left to right.
    Horizontal,
    /// Flip top to bottom.
    Vertical,
}

/// One step of an asset's edit history, as produced by the editing pipeline.
///
/// Serialized as `{"action": "crop", "parameters": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "parameters", rename_all = "lowercase")]
pub enum EditAction {
    /// Keep only the given region.
    Crop(CropParameters),
    /// Rotate by `angle` degrees.
    Rotate {
        /// Rotation in degrees.
        angle: f64,
    },
    /// Mirror across an axis.
    Mirror {
        /// Axis to mirror across.
        axis: MirrorAxis,
    },
}

impl EditAction {
    /// The crop parameters, if this is a crop action.
    pub fn as_crop(&self) -> Option<&CropParameters> {
        match self {
            EditAction::Crop(params) => Some(params),
            _ => None,
        }
    }
}

/// Find the crop that applies to an edit list.
///
/// When several crops are present the last one wins, since each crop replaces
/// the previous crop window.
pub fn find_crop(actions: &[EditAction]) -> Option<&CropParameters> {
    actions.iter().rev().find_map(EditAction::as_crop)
}
