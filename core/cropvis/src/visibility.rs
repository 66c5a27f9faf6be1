use tracing::{debug, trace, warn};

use crate::edit::CropParameters;
use crate::geometry::{BoundingBox, ImageDimensions};

/// Default fraction of a region that must stay inside the crop for it to count
/// as visible. The comparison is inclusive.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Something with a location on an asset that a crop can hide.
///
/// Each implementor owns its coordinate convention and maps itself into the
/// pixel space of the asset's current dimensions.
pub trait Region {
    /// Axis-aligned box of this region in `dims` pixel space.
    fn bounding_box(&self, dims: ImageDimensions) -> BoundingBox;
}

/// Partition of entities into those that survive a crop and those that do not.
///
/// Both lists borrow from the caller's slice and keep its order.
#[derive(Debug)]
pub struct Visibility<'a, T> {
    /// Entities with at least the threshold fraction inside the crop.
    pub visible: Vec<&'a T>,
    /// Everything else.
    pub hidden: Vec<&'a T>,
}

impl<'a, T> Visibility<'a, T> {
    /// Every entity visible, nothing hidden.
    pub fn all_visible(items: &'a [T]) -> Self {
        Self {
            visible: items.iter().collect(),
            hidden: Vec::new(),
        }
    }

    /// Total number of classified entities.
    pub fn len(&self) -> usize {
        self.visible.len() + self.hidden.len()
    }

    /// `true` when nothing was classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` when no entity is hidden.
    pub fn is_fully_visible(&self) -> bool {
        self.hidden.is_empty()
    }

    /// Split into `(visible, hidden)`.
    pub fn into_parts(self) -> (Vec<&'a T>, Vec<&'a T>) {
        (self.visible, self.hidden)
    }
}

impl<T> Clone for Visibility<'_, T> {
    fn clone(&self) -> Self {
        Self {
            visible: self.visible.clone(),
            hidden: self.hidden.clone(),
        }
    }
}

/// Whether a region whose overlap ratio is `ratio` passes `threshold`.
///
/// The ratio is clamped to `[0, 1]` first so rounding noise at the edges cannot
/// flip the result. `NaN` (zero-area region) never passes.
pub(crate) fn passes_threshold(ratio: f64, threshold: f64) -> bool {
    ratio.clamp(0.0, 1.0) >= threshold
}

/// Classify `items` against `crop`.
///
/// Without a crop every item is visible. Otherwise each item's box is mapped
/// into `dims` and compared against the crop rectangle. Runs in one pass.
pub(crate) fn partition<'a, T: Region>(
    items: &'a [T],
    dims: ImageDimensions,
    crop: Option<&CropParameters>,
    threshold: f64,
) -> Visibility<'a, T> {
    let Some(crop) = crop else {
        return Visibility::all_visible(items);
    };

    let crop_rect = crop.rect();
    let mut result = Visibility {
        visible: Vec::with_capacity(items.len()),
        hidden: Vec::new(),
    };

    for (index, item) in items.iter().enumerate() {
        let region = item.bounding_box(dims);
        let ratio = region.overlap(&crop_rect);
        if ratio.is_nan() {
            warn!(index, ?region, "region has zero area, treating as hidden");
        }
        trace!(index, ?region, ratio, "overlap with crop");

        if passes_threshold(ratio, threshold) {
            result.visible.push(item);
        } else {
            result.hidden.push(item);
        }
    }

    debug!(
        visible = result.visible.len(),
        hidden = result.hidden.len(),
        ?crop_rect,
        threshold,
        "classified regions against crop"
    );
    result
}
