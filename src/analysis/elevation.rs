use crate::analysis::types::{ElevationGain, TrackPoint};

/// Dead-band filtered elevation gain over a track.
///
/// Raw point-to-point elevation deltas are dominated by GPS and barometric
/// noise, so an elevation is only retained once it moves at least
/// `threshold_m` meters away from the last retained one. Summing the
/// positive deltas of that reduced series yields the net ascent, rounded to
/// the nearest meter. A threshold of 0 retains every sample and degenerates
/// to the naive positive-delta sum.
///
/// Elevation presence is judged from the first point only; a track whose
/// first point lacks elevation reports [`ElevationGain::NoData`] regardless
/// of the rest. Later points without elevation are skipped, though such
/// mixed tracks are outside the input contract.
pub fn smoothed_gain(points: &[TrackPoint], threshold_m: f64) -> ElevationGain {
    let Some(retained) = retained_elevations(points, threshold_m) else {
        return ElevationGain::NoData;
    };

    let gain: f64 = retained
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).max(0.0))
        .sum();

    ElevationGain::Meters(gain.round() as i64)
}

/// Collapse a track's elevations to the samples that clear the dead-band.
///
/// Returns `None` when the first point carries no elevation.
fn retained_elevations(points: &[TrackPoint], threshold_m: f64) -> Option<Vec<f64>> {
    let first = points.first()?.elevation?;

    let mut retained = vec![first];
    let mut last_retained = first;

    for point in &points[1..] {
        let Some(elevation) = point.elevation else {
            continue;
        };
        if (elevation - last_retained).abs() >= threshold_m {
            last_retained = elevation;
            retained.push(elevation);
        }
    }

    Some(retained)
}
