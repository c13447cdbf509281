//! Mountain peak records and the value objects used to create and change them.

use super::coordinates::{Axis, check_coordinate};
use super::validation::{ValidationErrors, Validator, check_finite, check_not_empty};

/// Store-assigned identifier of a peak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeakId(i32);

impl PeakId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for PeakId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated peak that has not been stored yet.
///
/// ## Invariants
/// - `name` is not empty; whitespace is kept as given.
/// - `latitude` is within [-90, 90] and `longitude` within [-180, 180].
/// - every number is finite.
///
/// # Examples
/// ```
/// use peak_service::domain::PeakDraft;
///
/// let draft = PeakDraft::new("Mount Everest", 27.9881, 86.925, 8848.0)?;
/// assert_eq!(draft.name(), "Mount Everest");
/// assert!(PeakDraft::new("Nowhere", 91.0, 0.0, 0.0).is_err());
/// # Ok::<(), peak_service::domain::ValidationErrors>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PeakDraft {
    name: String,
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

impl PeakDraft {
    /// Validate every field, reporting all violations together.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        altitude: f64,
    ) -> Result<Self, ValidationErrors> {
        let mut validator = Validator::new("peak");
        let name = validator.check(check_not_empty(name.into(), "name"));
        let latitude = validator.check(check_coordinate(latitude, Axis::Latitude, "latitude"));
        let longitude = validator.check(check_coordinate(longitude, Axis::Longitude, "longitude"));
        let altitude = validator.check(check_finite(altitude, "altitude"));
        validator.finish(|| {
            Some(Self {
                name: name?,
                latitude: latitude?,
                longitude: longitude?,
                altitude: altitude?,
            })
        })
    }

    /// Peak name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Altitude in metres.
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Attach a store-assigned identifier.
    #[must_use]
    pub fn into_peak(self, id: PeakId) -> Peak {
        Peak {
            id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude,
        }
    }
}

/// A stored mountain peak.
#[derive(Debug, Clone, PartialEq)]
pub struct Peak {
    id: PeakId,
    name: String,
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

impl Peak {
    /// Rebuild a peak from trusted storage.
    ///
    /// Adapters use this when mapping rows back into the domain; the store
    /// enforces the coordinate ranges with `CHECK` constraints.
    #[must_use]
    pub fn from_parts(
        id: PeakId,
        name: String,
        latitude: f64,
        longitude: f64,
        altitude: f64,
    ) -> Self {
        Self {
            id,
            name,
            latitude,
            longitude,
            altitude,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> PeakId {
        self.id
    }

    /// Peak name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Altitude in metres.
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Overwrite the fields carried by `patch`, keeping the rest.
    pub fn apply(&mut self, patch: &PeakPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(latitude) = patch.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            self.longitude = longitude;
        }
        if let Some(altitude) = patch.altitude {
            self.altitude = altitude;
        }
    }
}

/// The fields an update actually changes.
///
/// Clients always submit a whole record on update, but a field holding its
/// type's zero value (an empty name, or `0` / `-0.0` for a number) means "keep
/// the stored value". A peak therefore cannot be moved onto the equator or the
/// prime meridian, nor given an altitude of zero, through an update.
///
/// # Examples
/// ```
/// use peak_service::domain::PeakPatch;
///
/// let patch = PeakPatch::from_submitted("", 27.96, 86.93, 8516.0)?;
/// assert_eq!(patch.name(), None);
/// assert_eq!(patch.altitude(), Some(8516.0));
///
/// let untouched = PeakPatch::from_submitted("", 0.0, 0.0, 0.0)?;
/// assert!(untouched.is_empty());
/// # Ok::<(), peak_service::domain::ValidationErrors>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeakPatch {
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    altitude: Option<f64>,
}

impl PeakPatch {
    /// Validate a submitted record, then drop its zero-valued fields.
    ///
    /// Coordinates are range checked and every number must be finite even
    /// when the value is later dropped. The name may be empty.
    pub fn from_submitted(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        altitude: f64,
    ) -> Result<Self, ValidationErrors> {
        let name = name.into();
        let mut validator = Validator::new("peak");
        let latitude = validator.check(check_coordinate(latitude, Axis::Latitude, "latitude"));
        let longitude = validator.check(check_coordinate(longitude, Axis::Longitude, "longitude"));
        let altitude = validator.check(check_finite(altitude, "altitude"));
        validator.finish(|| {
            Some(Self {
                name: (!name.is_empty()).then_some(name),
                latitude: non_zero(latitude?),
                longitude: non_zero(longitude?),
                altitude: non_zero(altitude?),
            })
        })
    }

    /// New name, if supplied.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// New latitude, if supplied.
    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    /// New longitude, if supplied.
    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    /// New altitude, if supplied.
    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.altitude.is_none()
    }
}

fn non_zero(value: f64) -> Option<f64> {
    (value != 0.0).then_some(value)
}
