//! Diesel table definitions.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Mountain peaks.
    ///
    /// `latitude` and `longitude` carry `CHECK` constraints mirroring the
    /// domain ranges.
    peaks (id) {
        /// Serial primary key.
        id -> Int4,
        /// Peak name.
        name -> Varchar,
        /// Latitude in decimal degrees, [-90, 90].
        latitude -> Float8,
        /// Longitude in decimal degrees, [-180, 180].
        longitude -> Float8,
        /// Altitude in metres.
        altitude -> Float8,
    }
}
