//! Coordinate to index mapping for drag interactions.
//!
//! The list is treated as a uniform grid: every row is assumed to be as long
//! as the row currently being dragged, plus one fixed separator. Lists with
//! heterogeneous row sizes drift; that simplification is intentional.

use crate::types::{LayoutMeasurement, Orientation};

/// Inputs needed to resolve an along-axis coordinate to a row index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryContext {
    pub list_len: usize,
    pub scroll_offset: f32,
    pub row_length: f32,
    pub separator_length: f32,
}

impl GeometryContext {
    #[inline]
    pub fn new(list_len: usize, scroll_offset: f32, row_length: f32, separator_length: f32) -> Self {
        Self {
            list_len,
            scroll_offset,
            row_length,
            separator_length,
        }
    }

    /// Index of the row under `coordinate`, see [`coordinate_to_index`].
    #[inline]
    pub fn index_at(&self, coordinate: f32) -> Option<usize> {
        coordinate_to_index(
            coordinate,
            self.list_len,
            self.scroll_offset,
            self.row_length,
            self.separator_length,
        )
    }
}

/// `floor((coordinate + scroll_offset) / (row_length + separator_length))`,
/// clamped to `[0, list_len - 1]`.
///
/// Returns `None` only when no index can exist yet: an empty list, or a
/// stride that is not a positive finite number (rows not measured).
pub fn coordinate_to_index(
    coordinate: f32,
    list_len: usize,
    scroll_offset: f32,
    row_length: f32,
    separator_length: f32,
) -> Option<usize> {
    let stride = row_length + separator_length;
    if list_len == 0 || !stride.is_finite() || stride <= 0.0 {
        return None;
    }

    let raw = ((coordinate + scroll_offset) / stride).floor();
    let last = (list_len - 1) as f32;
    // NaN coordinates fall through `max` to 0.0
    Some(raw.max(0.0).min(last) as usize)
}

/// True when the center of a row dragged to `coordinate` stays inside the
/// visible scrollable band.
///
/// The leading bound is half a row plus `margin`; the trailing bound is the
/// viewport length minus half a row, also shifted by `margin`. Values are
/// rounded to whole pixels before comparison.
pub fn is_within_reorderable_bounds(
    coordinate: f32,
    measurement: &LayoutMeasurement,
    orientation: Orientation,
    viewport_length: f32,
    margin: f32,
) -> bool {
    let coordinate = coordinate.round();
    let half = (measurement.length(orientation) / 2.0).round();

    coordinate > half + margin && coordinate < viewport_length - half + margin
}
