//! Geographic coordinate ranges shared by peaks and bounding boxes.

use std::ops::RangeInclusive;

use super::validation::{FieldViolation, check_finite};

/// Valid latitude range in decimal degrees.
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
/// Valid longitude range in decimal degrees.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Which axis a coordinate value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// North/south position.
    Latitude,
    /// East/west position.
    Longitude,
}

impl Axis {
    /// Inclusive range of accepted values for this axis.
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Self::Latitude => LATITUDE_RANGE,
            Self::Longitude => LONGITUDE_RANGE,
        }
    }
}

/// Check `value` against `axis`, naming `field` on failure.
///
/// `field` is the payload field carrying the value, so the same check
/// reports `latitude` on a peak and `min_lat` on a bounding box.
pub(crate) fn check_coordinate(
    value: f64,
    axis: Axis,
    field: &'static str,
) -> Result<f64, FieldViolation> {
    let value = check_finite(value, field)?;
    let range = axis.range();
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(FieldViolation::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
