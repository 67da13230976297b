//! Observability predicate: the pure function that decides, for a single
//! target at a single grid point, whether it may be scheduled there and in
//! which mount mode.
//!
//! Kept deliberately side-effect-free: it consumes explicit inputs (the
//! target's restriction fields, the site's mount-mode rules, the grid
//! point's time and altitude) and returns a small enum, the way the rest of
//! this crate's astrometric primitives do.

use serde::{Deserialize, Serialize};

use crate::site::{DeclinationLimit, Site};

/// Result of evaluating a target's observability at one grid point.
///
/// The over-axis variants only arise for equatorial mounts with
/// [`DeclinationLimit::HourAngle`] and `over_axis = true`; everywhere else
/// only `NotObservable` and `Ok` occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Observable {
    /// Not observable at this grid point under any mount mode.
    NotObservable,
    /// Observable (single-mode mount, or within the normal pointing range).
    Ok,
    /// Observable only with the tube on the east side of the pier.
    TubeEastOnly,
    /// Observable only with the tube on the west side of the pier.
    TubeWestOnly,
    /// Observable in either mount mode (the over-axis interval overlaps the
    /// normal-pointing interval).
    BothModes,
}

impl Observable {
    /// True for any variant that permits scheduling (i.e. not `NotObservable`).
    pub fn is_schedulable(self) -> bool {
        self != Observable::NotObservable
    }
}

/// The subset of a target's fields the Constraint Evaluator needs. Kept
/// separate from [`crate::target::Target`] so the evaluator stays a pure
/// function of explicit inputs rather than reaching into a larger struct.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintInputs {
    /// Earliest allowed UTC time, MJD (converted from any LST window at
    /// `Target` construction).
    pub restriction_min_ut: f64,
    /// Latest allowed UTC time, MJD.
    pub restriction_max_ut: f64,
    /// Maximum airmass the target may be observed at.
    pub max_airmass: f64,
    /// Target declination, J2000 degrees (site mount-mode rules are
    /// evaluated against this fixed value, not the apparent declination,
    /// matching the slow drift of declination over a single night).
    pub dec_j2000_deg: f64,
    /// Time of maximum altitude (`zenithTime`), MJD — used for hour-angle
    /// mount-mode evaluation.
    pub zenith_time: f64,
}

/// Wraps an hour-angle-like value into `[-12, 12)` hours.
fn wrap_hours(h: f64) -> f64 {
    let mut w = h % 24.0;
    if w < -12.0 {
        w += 24.0;
    } else if w >= 12.0 {
        w -= 24.0;
    }
    w
}

/// Evaluates observability of a target at one grid point.
///
/// # Arguments
/// * `inputs` - the target's restriction fields (see [`ConstraintInputs`])
/// * `site` - the observing site (altitude/zenith/declination limits)
/// * `t_mjd` - the grid point's time, MJD
/// * `alt_deg` - the target's refracted altitude at this grid point, degrees
/// * `offline_intervals` - site-wide offline windows (dome closed, etc.), `[(start, end)]` MJD
pub fn can_observe(
    inputs: &ConstraintInputs,
    site: &Site,
    t_mjd: f64,
    alt_deg: f64,
    offline_intervals: &[(f64, f64)],
) -> Observable {
    // 1. Time window.
    if t_mjd < inputs.restriction_min_ut || t_mjd > inputs.restriction_max_ut {
        return Observable::NotObservable;
    }

    // 2. Altitude band.
    let min_alt = crate::airmass::altitude_for_airmass_hardie(inputs.max_airmass).unwrap_or(0.0);
    let max_alt = match site.zenith_avoidance_deg {
        Some(zenith_limit) => 90.0 - zenith_limit,
        None => 90.0,
    };
    if alt_deg < min_alt || alt_deg > max_alt {
        return Observable::NotObservable;
    }

    // 3. Offline intervals.
    if offline_intervals.iter().any(|&(start, end)| t_mjd >= start && t_mjd <= end) {
        return Observable::NotObservable;
    }

    // 4. Declination / mount limits.
    match &site.declination_limit {
        DeclinationLimit::None => Observable::Ok,
        DeclinationLimit::Altitude { .. } => {
            let min_alt_for_dec = site.declination_limit.min_altitude_deg(inputs.dec_j2000_deg);
            if alt_deg >= min_alt_for_dec {
                Observable::Ok
            } else {
                Observable::NotObservable
            }
        }
        DeclinationLimit::HourAngle { over_axis, .. } => {
            let ha_hours = (t_mjd - inputs.zenith_time) * 24.0;
            let (min_ha, max_ha) = site.declination_limit.hour_angle_window(inputs.dec_j2000_deg);
            let in_normal = ha_hours >= min_ha && ha_hours <= max_ha;

            if !*over_axis {
                return if in_normal { Observable::Ok } else { Observable::NotObservable };
            }

            // Over-axis mounts can also track with the tube flipped to the
            // other side of the pier; the flipped interval is the normal
            // window's hour angle shifted by half a sidereal day (12h).
            let flipped_ha = wrap_hours(ha_hours - 12.0);
            let in_axis_crossed = flipped_ha >= min_ha && flipped_ha <= max_ha;

            match (in_normal, in_axis_crossed) {
                (true, true) => Observable::BothModes,
                (true, false) => Observable::TubeEastOnly,
                (false, true) => Observable::TubeWestOnly,
                (false, false) => Observable::NotObservable,
            }
        }
    }
}
