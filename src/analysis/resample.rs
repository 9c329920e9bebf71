use chrono::Duration;

use crate::analysis::geodesy;
use crate::analysis::types::{TrackError, TrackPoint};

/// Resample a track at a fixed cumulative-distance interval.
///
/// The first output point equals the first input point. Every later output
/// point sits at a whole multiple of `interval_m` along the original
/// polyline, linearly interpolated between the two bracketing input points
/// proportional to the fraction of that segment consumed. A trailing stretch
/// shorter than one interval produces no extra point.
///
/// Latitude and longitude are interpolated directly in degree space, which
/// is adequate at typical interval scales. Elevation, and best-effort the
/// timestamp, ride along with the same interpolation when both bracketing
/// points carry them.
pub fn interpolate_by_distance(
    points: &[TrackPoint],
    interval_m: f64,
) -> Result<Vec<TrackPoint>, TrackError> {
    if !interval_m.is_finite() || interval_m <= 0.0 {
        return Err(TrackError::InvalidInterval(interval_m));
    }
    let Some(first) = points.first() else {
        return Err(TrackError::EmptyTrack);
    };

    let mut resampled = vec![*first];
    let mut traversed = 0.0;
    let mut next_checkpoint = interval_m;

    for pair in points.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let segment = geodesy::distance(from.coordinate(), to.coordinate());

        // `next_checkpoint` always lies strictly ahead of `traversed`, so a
        // zero-length segment never enters the loop.
        while traversed + segment >= next_checkpoint {
            let fraction = (next_checkpoint - traversed) / segment;
            resampled.push(lerp_point(from, to, fraction));
            next_checkpoint += interval_m;
        }

        traversed += segment;
    }

    Ok(resampled)
}

fn lerp_point(from: &TrackPoint, to: &TrackPoint, fraction: f64) -> TrackPoint {
    let elevation = match (from.elevation, to.elevation) {
        (Some(a), Some(b)) => Some(a + (b - a) * fraction),
        _ => None,
    };

    let time = match (from.time, to.time) {
        (Some(a), Some(b)) => {
            let span_ms = (b - a).num_milliseconds() as f64;
            Some(a + Duration::milliseconds((span_ms * fraction).round() as i64))
        }
        _ => None,
    };

    TrackPoint {
        latitude: from.latitude + (to.latitude - from.latitude) * fraction,
        longitude: from.longitude + (to.longitude - from.longitude) * fraction,
        elevation,
        time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::geodesy::cumulative_distances;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    /// Points along the equator, ~111.19m per 0.001 degree of longitude.
    fn equator_track(count: usize) -> Vec<TrackPoint> {
        (0..count)
            .map(|i| TrackPoint::new(0.0, i as f64 * 0.001))
            .collect()
    }

    #[test]
    fn first_output_point_equals_first_input_point() {
        let points = equator_track(4);
        let resampled =
            interpolate_by_distance(&points, 50.0).expect("resampling should succeed");

        assert_eq!(resampled[0].latitude, points[0].latitude);
        assert_eq!(resampled[0].longitude, points[0].longitude);
    }

    #[test]
    fn outputs_are_spaced_at_the_requested_interval() {
        let points = equator_track(10);
        let resampled =
            interpolate_by_distance(&points, 50.0).expect("resampling should succeed");

        let distances = cumulative_distances(&resampled);
        assert_eq!(distances[0], 0.0);
        for pair in distances.windows(2) {
            let step = pair[1] - pair[0];
            assert!(step > 0.0, "cumulative distance must strictly increase");
            assert_relative_eq!(step, 50.0, epsilon = 0.5);
        }
    }

    #[test]
    fn trailing_partial_interval_is_dropped() {
        // Three segments of ~111.19m each, total ~333.6m. With a 100m
        // interval the outputs sit at 0/100/200/300; the 33m tail gets none.
        let points = equator_track(4);
        let resampled =
            interpolate_by_distance(&points, 100.0).expect("resampling should succeed");

        assert_eq!(resampled.len(), 4);
        let distances = cumulative_distances(&resampled);
        assert_relative_eq!(*distances.last().unwrap(), 300.0, epsilon = 1.0);
    }

    #[test]
    fn elevation_is_interpolated_between_bracketing_points() {
        let points = vec![
            TrackPoint::new(0.0, 0.0).with_elevation(100.0),
            TrackPoint::new(0.0, 0.001).with_elevation(200.0),
        ];
        let segment = geodesy::distance(points[0].coordinate(), points[1].coordinate());

        let resampled =
            interpolate_by_distance(&points, segment / 2.0).expect("resampling should succeed");

        assert_eq!(resampled.len(), 3);
        assert_relative_eq!(
            resampled[1].elevation.expect("interpolated elevation"),
            150.0,
            epsilon = 0.01
        );
        assert_relative_eq!(
            resampled[2].elevation.expect("interpolated elevation"),
            200.0,
            epsilon = 0.01
        );
    }

    #[test]
    fn elevation_is_absent_when_inputs_lack_it() {
        let points = equator_track(4);
        let resampled =
            interpolate_by_distance(&points, 50.0).expect("resampling should succeed");

        assert!(resampled.iter().all(|p| p.elevation.is_none()));
    }

    #[test]
    fn time_is_interpolated_best_effort() {
        let start = Utc.with_ymd_and_hms(2021, 6, 1, 8, 0, 0).unwrap();
        let finish = start + Duration::seconds(100);
        let points = vec![
            TrackPoint::new(0.0, 0.0).with_time(start),
            TrackPoint::new(0.0, 0.001).with_time(finish),
        ];
        let segment = geodesy::distance(points[0].coordinate(), points[1].coordinate());

        let resampled =
            interpolate_by_distance(&points, segment / 2.0).expect("resampling should succeed");

        let midpoint = resampled[1].time.expect("interpolated time");
        let offset = (midpoint - start).num_seconds();
        assert!((49..=51).contains(&offset), "midpoint offset was {offset}s");
    }

    #[test]
    fn duplicate_consecutive_points_are_traversed_safely() {
        let mut points = equator_track(3);
        let duplicate = points[0];
        points.insert(1, duplicate);

        let resampled =
            interpolate_by_distance(&points, 50.0).expect("resampling should succeed");
        let distances = cumulative_distances(&resampled);
        assert!(distances.windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let points = equator_track(3);
        assert_eq!(
            interpolate_by_distance(&points, 0.0),
            Err(TrackError::InvalidInterval(0.0))
        );
    }

    #[test]
    fn negative_interval_is_rejected() {
        let points = equator_track(3);
        assert_eq!(
            interpolate_by_distance(&points, -25.0),
            Err(TrackError::InvalidInterval(-25.0))
        );
    }

    #[test]
    fn empty_track_is_rejected() {
        assert_eq!(
            interpolate_by_distance(&[], 50.0),
            Err(TrackError::EmptyTrack)
        );
    }

    #[test]
    fn track_shorter_than_one_interval_yields_only_the_first_point() {
        let points = equator_track(2);
        let resampled =
            interpolate_by_distance(&points, 500.0).expect("resampling should succeed");
        assert_eq!(resampled.len(), 1);
    }
}
