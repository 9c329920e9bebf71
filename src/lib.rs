//! Geometry and metrics engine for recorded GPS tracks.
//!
//! Takes an ordered sequence of [`TrackPoint`]s from an upstream parser and
//! derives summary statistics (distance, denoised elevation gain, timing,
//! loop detection) plus an evenly resampled cumulative-distance series for
//! map rendering. Pure computation: no I/O, no shared state.
//!
//! ```rust
//! use trackstats::{AnalysisOptions, TrackPoint, analyze_track};
//!
//! let points = vec![
//!     TrackPoint::new(0.0, 0.0).with_elevation(100.0),
//!     TrackPoint::new(0.0, 0.001).with_elevation(105.0),
//!     TrackPoint::new(0.0, 0.002).with_elevation(95.0),
//! ];
//!
//! let analysis = analyze_track(&points, &AnalysisOptions::default()).unwrap();
//! assert!(analysis.statistics.total_distance_m > 200.0);
//! assert!(!analysis.statistics.is_loop);
//! ```

pub mod analysis;

pub use analysis::{
    AnalysisOptions, Coordinate, ElevationGain, SeriesPoint, TrackAnalysis, TrackError,
    TrackPoint, TrackStatistics, analyze_track, distance_series,
};
