//! Latitude/longitude rectangle used to search for peaks.

use super::coordinates::{Axis, check_coordinate};
use super::validation::{ValidationErrors, Validator};

/// Inclusive latitude/longitude rectangle.
///
/// Each bound is range checked on its own. The pairs are not required to be
/// ordered: a box with `min_lat > max_lat` is valid and matches nothing.
///
/// # Examples
/// ```
/// use peak_service::domain::BoundingBox;
///
/// let bbox = BoundingBox::new(28.0, 29.0, 86.0, 87.0)?;
/// assert!(bbox.contains(28.0942, 86.6608));
/// assert!(!bbox.contains(28.6975, 83.4872));
/// # Ok::<(), peak_service::domain::ValidationErrors>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl BoundingBox {
    /// Validate the four bounds, reporting every offending one.
    pub fn new(
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Result<Self, ValidationErrors> {
        let mut validator = Validator::new("bounding box");
        let min_lat = validator.check(check_coordinate(min_lat, Axis::Latitude, "min_lat"));
        let max_lat = validator.check(check_coordinate(max_lat, Axis::Latitude, "max_lat"));
        let min_lon = validator.check(check_coordinate(min_lon, Axis::Longitude, "min_lon"));
        let max_lon = validator.check(check_coordinate(max_lon, Axis::Longitude, "max_lon"));
        validator.finish(|| {
            Some(Self {
                min_lat: min_lat?,
                max_lat: max_lat?,
                min_lon: min_lon?,
                max_lon: max_lon?,
            })
        })
    }

    /// Southern edge.
    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    /// Northern edge.
    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    /// Western edge.
    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    /// Eastern edge.
    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    /// True when the point lies inside the box or on its edge.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&latitude)
            && (self.min_lon..=self.max_lon).contains(&longitude)
    }
}
