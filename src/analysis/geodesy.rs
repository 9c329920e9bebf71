use geo::{HaversineDistance, point};

use crate::analysis::types::{Coordinate, TrackPoint};

/// Great-circle distance in meters between two coordinates.
///
/// Haversine on a spherical Earth model, which stays within a few meters of
/// ellipsoidal results over track-scale distances. Coordinates outside the
/// valid degree ranges are the caller's responsibility.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let from = point!(x: a.longitude, y: a.latitude);
    let to = point!(x: b.longitude, y: b.latitude);
    from.haversine_distance(&to)
}

/// Whether a track starts and finishes within `tolerance_m` meters.
///
/// A single-point track trivially closes on itself; an empty slice does not.
pub fn is_loop(points: &[TrackPoint], tolerance_m: f64) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => {
            distance(first.coordinate(), last.coordinate()) <= tolerance_m
        }
        _ => false,
    }
}

/// Running distance in meters from the first point to each point.
///
/// The first entry is always 0; the last equals the total path length.
pub fn cumulative_distances(points: &[TrackPoint]) -> Vec<f64> {
    let mut distances = Vec::with_capacity(points.len());
    if !points.is_empty() {
        distances.push(0.0);
    }

    let mut total = 0.0;
    for pair in points.windows(2) {
        total += distance(pair[0].coordinate(), pair[1].coordinate());
        distances.push(total);
    }

    distances
}
