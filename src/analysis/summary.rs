use crate::analysis::types::{AnalysisOptions, TrackError, TrackPoint, TrackStatistics};
use crate::analysis::{elevation, geodesy};

/// Derive the full statistics bundle for a recorded track.
///
/// Timing fields are judged from the first point only: when it carries no
/// timestamp every time-derived field reports "no data". The minimum
/// interval needs at least two timed points and is otherwise absent. Total
/// distance is summed over the unresampled sequence.
pub fn compute_statistics(
    points: &[TrackPoint],
    options: &AnalysisOptions,
) -> Result<TrackStatistics, TrackError> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(TrackError::EmptyTrack);
    };

    let (start_time, finish_time, elapsed_seconds, min_interval_seconds) = match first.time {
        None => (None, None, None, None),
        Some(start) => {
            let finish = last.time;
            let elapsed = finish.map(|f| (f - start).num_seconds());
            let min_interval = points
                .windows(2)
                .filter_map(|pair| match (pair[0].time, pair[1].time) {
                    (Some(a), Some(b)) => Some((b - a).num_seconds()),
                    _ => None,
                })
                .min();
            (Some(start), finish, elapsed, min_interval)
        }
    };

    let total_distance_m = points
        .windows(2)
        .map(|pair| geodesy::distance(pair[0].coordinate(), pair[1].coordinate()))
        .sum();

    Ok(TrackStatistics {
        start_time,
        finish_time,
        elapsed_seconds,
        min_interval_seconds,
        total_distance_m,
        fine_elevation_gain: elevation::smoothed_gain(points, options.fine_gain_threshold_m),
        coarse_elevation_gain: elevation::smoothed_gain(points, options.coarse_gain_threshold_m),
        is_loop: geodesy::is_loop(points, options.loop_tolerance_m),
        start: first.coordinate(),
    })
}
