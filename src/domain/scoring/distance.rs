//! Great-circle distance.

use crate::domain::value_objects::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres.
///
/// Symmetric in its arguments and zero for identical points. NaN coordinates yield NaN;
/// validating input is the caller's job.
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).abs().to_radians();
    let d_lng = (b.lng - a.lng).abs().to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // rounding can push antipodal points just past 1
    let h = if h > 1.0 { 1.0 } else { h };

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
