//! Site configuration: the static, per-observatory parameters a schedule run
//! is computed against.
//!
//! A [`Site`] wraps a geodetic [`Location`] with the scheduling-specific
//! parameters spec'd fields of §3 name: altitude limits, an optional
//! declination-dependent exclusion function, a zenith-avoidance angle for
//! alt-az mounts, and per-instrument fields of view. It is plain,
//! `serde`-serializable configuration data — constructed once by the caller
//! and never mutated by the scheduling engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::location::Location;

/// A declination-dependent exclusion rule for mounts that cannot track
/// through certain parts of the sky.
///
/// - `None` imposes no declination-based restriction.
/// - `Altitude` gives a minimum allowed altitude as a function of
///   declination (typical of dome/horizon obstructions).
/// - `HourAngle` gives an allowed hour-angle window `[min_ha, max_ha]` in
///   hours as a function of declination (typical of polar-axis mount
///   limits); `over_axis` marks mounts that can flip to continue tracking
///   past the pole rather than stopping at the limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DeclinationLimit {
    /// No declination-dependent restriction.
    None,
    /// Minimum allowed altitude (degrees) as a function of declination (degrees).
    Altitude {
        /// `(declination_deg, min_altitude_deg)` breakpoints, sorted by declination.
        breakpoints: Vec<(f64, f64)>,
    },
    /// Allowed hour-angle window as a function of declination, for
    /// equatorial mounts with a meridian/polar limit.
    HourAngle {
        /// `(declination_deg, min_ha_hours, max_ha_hours)` breakpoints, sorted by declination.
        breakpoints: Vec<(f64, f64, f64)>,
        /// Whether the mount can continue tracking past the limit by
        /// flipping to the other side of the pole (over-the-axis mode).
        over_axis: bool,
    },
}

impl Default for DeclinationLimit {
    fn default() -> Self {
        DeclinationLimit::None
    }
}

impl DeclinationLimit {
    /// Evaluates the minimum allowed altitude at a given declination, for
    /// the `Altitude` variant. Returns `-90.0` (no restriction) otherwise.
    pub fn min_altitude_deg(&self, dec_deg: f64) -> f64 {
        match self {
            DeclinationLimit::Altitude { breakpoints } => interpolate(breakpoints, dec_deg),
            _ => -90.0,
        }
    }

    /// Evaluates the allowed hour-angle window `(min_ha, max_ha)` in hours
    /// at a given declination, for the `HourAngle` variant. Returns
    /// `(-12.0, 12.0)` (no restriction) otherwise.
    pub fn hour_angle_window(&self, dec_deg: f64) -> (f64, f64) {
        match self {
            DeclinationLimit::HourAngle { breakpoints, .. } => {
                let min_ha = interpolate(
                    &breakpoints.iter().map(|(d, lo, _)| (*d, *lo)).collect::<Vec<_>>(),
                    dec_deg,
                );
                let max_ha = interpolate(
                    &breakpoints.iter().map(|(d, _, hi)| (*d, *hi)).collect::<Vec<_>>(),
                    dec_deg,
                );
                (min_ha, max_ha)
            }
            _ => (-12.0, 12.0),
        }
    }

    /// True for the `HourAngle` variant with `over_axis = true`.
    pub fn allows_over_axis(&self) -> bool {
        matches!(self, DeclinationLimit::HourAngle { over_axis: true, .. })
    }
}

/// Piecewise-linear interpolation over sorted `(x, y)` breakpoints, clamped
/// at the ends. Returns the value at the boundary when `x` falls outside
/// the breakpoint range.
fn interpolate(breakpoints: &[(f64, f64)], x: f64) -> f64 {
    if breakpoints.is_empty() {
        return -90.0;
    }
    if x <= breakpoints[0].0 {
        return breakpoints[0].1;
    }
    if x >= breakpoints[breakpoints.len() - 1].0 {
        return breakpoints[breakpoints.len() - 1].1;
    }
    for window in breakpoints.windows(2) {
        let (x0, y0) = window[0];
        let (x1, y1) = window[1];
        if x >= x0 && x <= x1 {
            let t = (x - x0) / (x1 - x0);
            return y0 + t * (y1 - y0);
        }
    }
    breakpoints[breakpoints.len() - 1].1
}

/// Static, per-observatory configuration a schedule run is computed against.
///
/// Constructed once by the caller (typically deserialized from a
/// configuration file); never mutated by `Night`, `Target`, or `Scheduler`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    /// Geodetic location (latitude, longitude, altitude).
    pub location: Location,
    /// Timezone offset from UTC, in hours (for display/input purposes only;
    /// all internal arithmetic uses UTC/MJD).
    pub timezone_offset_hours: f64,
    /// Lowest allowed altitude for any target, in degrees.
    pub min_altitude_deg: f64,
    /// Highest allowed altitude, in degrees, if the mount cannot point near
    /// zenith (e.g. fork-mount RA/Dec singularity).
    pub max_altitude_deg: Option<f64>,
    /// Vignette / lower-hatch limit, in degrees, if the dome or tube
    /// assembly vignettes the aperture below some altitude.
    pub vignette_limit_deg: Option<f64>,
    /// Zenith-avoidance angle, in degrees, for alt-az mounts that cannot
    /// track through the zenith singularity.
    pub zenith_avoidance_deg: Option<f64>,
    /// Declination-dependent exclusion function.
    #[serde(default)]
    pub declination_limit: DeclinationLimit,
    /// Field of view, in arcminutes, keyed by instrument name.
    #[serde(default)]
    pub instrument_fov_arcmin: HashMap<String, f64>,
}

impl Site {
    /// Convenience constructor for a site with no declination limit, no
    /// vignetting, and no zenith avoidance — the common case for an
    /// equatorial mount on an open platform.
    pub fn new(location: Location, timezone_offset_hours: f64, min_altitude_deg: f64) -> Self {
        Site {
            location,
            timezone_offset_hours,
            min_altitude_deg,
            max_altitude_deg: None,
            vignette_limit_deg: None,
            zenith_avoidance_deg: None,
            declination_limit: DeclinationLimit::None,
            instrument_fov_arcmin: HashMap::new(),
        }
    }

    /// Field of view for a named instrument, in arcminutes, if configured.
    pub fn fov_arcmin(&self, instrument: &str) -> Option<f64> {
        self.instrument_fov_arcmin.get(instrument).copied()
    }
}
