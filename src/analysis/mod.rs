pub mod display;
pub mod elevation;
pub mod geodesy;
pub mod resample;
pub mod summary;
pub mod types;

use tracing::debug;

pub use types::{
    AnalysisOptions, Coordinate, ElevationGain, SeriesPoint, TrackAnalysis, TrackError,
    TrackPoint, TrackStatistics,
};

/// Run the full analysis pipeline over a recorded track.
///
/// The function performs three stages:
/// 1. [`summary::compute_statistics`] derives the statistics bundle from the
///    unresampled sequence.
/// 2. [`resample::interpolate_by_distance`] produces points evenly spaced at
///    `options.resample_interval_m` along the path.
/// 3. [`distance_series`] attaches position indices and running distances to
///    the resampled points for the map renderer.
pub fn analyze_track(
    points: &[TrackPoint],
    options: &AnalysisOptions,
) -> Result<TrackAnalysis, TrackError> {
    let statistics = summary::compute_statistics(points, options)?;
    let resampled = resample::interpolate_by_distance(points, options.resample_interval_m)?;
    let series = distance_series(&resampled);

    debug!(
        input_points = points.len(),
        series_points = series.len(),
        total_distance_m = statistics.total_distance_m,
        "track analysis complete"
    );

    Ok(TrackAnalysis { statistics, series })
}

/// Pair each point with its position index and running distance from the start.
pub fn distance_series(points: &[TrackPoint]) -> Vec<SeriesPoint> {
    geodesy::cumulative_distances(points)
        .into_iter()
        .zip(points)
        .enumerate()
        .map(|(index, (cumulative_distance_m, point))| SeriesPoint {
            index,
            latitude: point.latitude,
            longitude: point.longitude,
            cumulative_distance_m,
            elevation: point.elevation,
            time: point.time,
        })
        .collect()
}
