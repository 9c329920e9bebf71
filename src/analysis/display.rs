use chrono::{DateTime, Utc};

use crate::analysis::types::ElevationGain;

/// Literal rendering for absent fields, shown to the user as-is.
pub const NO_DATA: &str = "No data";

const METERS_PER_MILE: f64 = 1609.34;

/// Kilometer rendering of a distance in meters, e.g. `"12.61km"`.
pub fn format_distance_km(meters: f64) -> String {
    format!("{:.2}km", meters / 1000.0)
}

/// Mile rendering of a distance in meters, e.g. `"7.84mi"`.
pub fn format_distance_mi(meters: f64) -> String {
    format!("{:.2}mi", meters / METERS_PER_MILE)
}

/// Paired gain rendering, e.g. `"312m/287m (2m/10m threshold)"`.
pub fn format_gain_pair(
    fine: ElevationGain,
    coarse: ElevationGain,
    fine_threshold_m: f64,
    coarse_threshold_m: f64,
) -> String {
    format!(
        "{fine}/{coarse} ({fine_threshold_m:.0}m/{coarse_threshold_m:.0}m threshold)"
    )
}

/// Elapsed time as `H:MM:SS`, or the no-data literal.
pub fn format_elapsed(seconds: Option<i64>) -> String {
    match seconds {
        Some(total) => {
            let hours = total / 3600;
            let minutes = (total % 3600) / 60;
            let secs = total % 60;
            format!("{hours}:{minutes:02}:{secs:02}")
        }
        None => NO_DATA.to_string(),
    }
}

/// Minimum recording interval as `"{n} sec"`, or the no-data literal.
pub fn format_min_interval(seconds: Option<i64>) -> String {
    match seconds {
        Some(secs) => format!("{secs} sec"),
        None => NO_DATA.to_string(),
    }
}

/// RFC 3339 rendering of an instant, or the no-data literal.
pub fn format_time(time: Option<DateTime<Utc>>) -> String {
    match time {
        Some(t) => t.to_rfc3339(),
        None => NO_DATA.to_string(),
    }
}
