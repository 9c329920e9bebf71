use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic coordinate in decimal degrees, WGS-84.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single recorded point along a track, as supplied by the upstream parser.
///
/// Within one track either every point carries elevation or none does, and
/// the same holds for timestamps; the engine checks the first point only.
/// Tracks mixing present and absent fields are outside the input contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Elevation in meters, `None` when the track has no elevation data.
    pub elevation: Option<f64>,
    /// Recording instant, `None` when the track has no timing data.
    pub time: Option<DateTime<Utc>>,
}

impl TrackPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: None,
            time: None,
        }
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Denoised elevation gain, or a marker that the track carries no elevation.
///
/// Absence is a distinct state rather than zero so that a flat track and a
/// track without elevation data stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElevationGain {
    /// Total ascent in meters, rounded to the nearest meter.
    Meters(i64),
    NoData,
}

impl ElevationGain {
    pub fn meters(&self) -> Option<i64> {
        match self {
            ElevationGain::Meters(m) => Some(*m),
            ElevationGain::NoData => None,
        }
    }
}

impl fmt::Display for ElevationGain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElevationGain::Meters(m) => write!(f, "{m}m"),
            ElevationGain::NoData => write!(f, "No data"),
        }
    }
}

/// Tunable parameters for track analysis.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Fine dead-band threshold in meters for elevation smoothing.
    pub fine_gain_threshold_m: f64,
    /// Coarse dead-band threshold in meters for elevation smoothing.
    pub coarse_gain_threshold_m: f64,
    /// Maximum start/finish separation in meters for a track to count as a loop.
    pub loop_tolerance_m: f64,
    /// Spacing in meters between resampled points.
    pub resample_interval_m: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            fine_gain_threshold_m: 2.0,
            coarse_gain_threshold_m: 10.0,
            loop_tolerance_m: 100.0,
            resample_interval_m: 50.0,
        }
    }
}

/// Summary metrics derived from a recorded track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackStatistics {
    pub start_time: Option<DateTime<Utc>>,
    pub finish_time: Option<DateTime<Utc>>,
    pub elapsed_seconds: Option<i64>,
    /// Smallest gap between consecutive timestamps, in whole seconds.
    pub min_interval_seconds: Option<i64>,
    /// Total path length in meters over the unresampled sequence.
    pub total_distance_m: f64,
    pub fine_elevation_gain: ElevationGain,
    pub coarse_elevation_gain: ElevationGain,
    pub is_loop: bool,
    pub start: Coordinate,
}

/// One row of the cumulative-distance series handed to the map renderer.
///
/// `index` is the position along the resampled track so the renderer can
/// apply position-based styling without recomputing order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub index: usize,
    pub latitude: f64,
    pub longitude: f64,
    pub cumulative_distance_m: f64,
    pub elevation: Option<f64>,
    pub time: Option<DateTime<Utc>>,
}

/// Full analysis output returned to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct TrackAnalysis {
    pub statistics: TrackStatistics,
    /// Evenly resampled track with running distances, ordered from the start.
    pub series: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackError {
    /// The input sequence contained no points.
    EmptyTrack,
    /// The resampling interval was zero, negative, or not finite.
    InvalidInterval(f64),
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackError::EmptyTrack => write!(f, "track contains no points"),
            TrackError::InvalidInterval(interval) => {
                write!(f, "resampling interval must be positive, got {interval}")
            }
        }
    }
}

impl std::error::Error for TrackError {}
