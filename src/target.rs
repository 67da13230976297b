//! A single observing target: catalogue data, scheduling constraints, and
//! the per-night visibility curve computed by [`Target::pre_compute`].

use serde::{Deserialize, Serialize};

use chrono::{TimeZone, Utc};

use crate::constraint::{can_observe, ConstraintInputs, Observable};
use crate::error::ScheduleResult;
use crate::night::Night;
use crate::proper_motion::{apply_proper_motion, pm_ra_cosdec_to_pm_ra};
use crate::refraction::true_to_apparent_altitude;
use crate::site::Site;
use crate::time::mjd_to_datetime;

/// How a target's observing window is constrained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConstraintMode {
    /// Limited only by a maximum airmass, over the whole night.
    Airmass { max_airmass: f64 },
    /// A fixed UTC window, given as hours-of-day (`UT[hh:mm-hh:mm]` in the
    /// canonical input grammar); anchored to the night's calendar date and
    /// converted to a UTC MJD window at `Target` construction (see
    /// [`Target::restriction_window`]), the same way an LST window is.
    UtcWindow { start_hours: f64, end_hours: f64 },
    /// A fixed local-sidereal-time window, in hours; converted to a UTC
    /// window at `Target` construction (see [`Target::restriction_window`]).
    LstWindow { start_hours: f64, end_hours: f64 },
}

/// Extra descriptive fields that ride along with a target but never affect
/// scheduling decisions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraInfo {
    /// Instrument name.
    pub instrument: String,
    /// Observing mode (imaging, spectroscopy, ...).
    pub mode: String,
    /// Group/program this target belongs to.
    pub group: String,
    /// Free-form observing block notes.
    pub block: String,
}

/// A single observing target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    /// Catalogue name.
    pub name: String,
    /// Right ascension as given in the input line (for round-trip display).
    pub input_ra: String,
    /// Declination as given in the input line (for round-trip display).
    pub input_dec: String,
    /// Catalogue epoch: 1950 or 2000.
    pub epoch: u32,
    /// Right ascension, J2000, degrees.
    pub ra_j2000_deg: f64,
    /// Declination, J2000, degrees.
    pub dec_j2000_deg: f64,
    /// Proper motion in RA, catalogue units (arcsec/year), with cos δ applied.
    pub pm_ra_cosdec_arcsec_per_year: f64,
    /// Proper motion in declination, arcsec/year.
    pub pm_dec_arcsec_per_year: f64,
    /// Proper motion in RA with the cos δ factor removed, radians/year —
    /// the internal representation spec'd for precession-free propagation.
    pub pm_ra_rad_per_year: f64,
    /// Exposure time as requested, seconds.
    pub exposure_seconds: f64,
    /// Exposure time rounded down to a grid multiple of `night.xstep`.
    pub exposure_grid: f64,
    /// Project/program identifier, for the per-project statistics.
    pub project: String,
    /// Observation type (free-form, e.g. "photometry", "spectroscopy").
    pub observation_type: String,
    /// How this target's window is constrained.
    pub constraint: ConstraintMode,
    /// Must occupy the entire constraint window (constraint must be a window, not airmass).
    pub fill_slot: bool,
    /// Descriptive metadata that does not affect scheduling.
    pub extra_info: ExtraInfo,

    /// Refracted altitude, degrees, at each night grid point. Populated by `pre_compute`.
    #[serde(default)]
    pub graph: Vec<f64>,
    /// Observability at each grid point. Populated by `pre_compute`.
    #[serde(default)]
    pub observable: Vec<Observable>,
    /// Grid time of maximum altitude, MJD.
    #[serde(default)]
    pub zenith_time: f64,
    /// Minimum angular separation from the Moon over the night, degrees.
    #[serde(default)]
    pub min_moon_distance: f64,
    /// Time of minimum Moon separation, MJD.
    #[serde(default)]
    pub min_moon_distance_time: f64,
    /// Earliest time this target could start, MJD. `None` if never observable.
    #[serde(default)]
    pub first_possible_time: Option<f64>,
    /// Latest time this target's exposure could still fit, MJD.
    #[serde(default)]
    pub last_possible_time: Option<f64>,
    /// Whether this target has any usable observing window tonight.
    #[serde(default)]
    pub observable_tonight: bool,
    /// Contiguous `[begin, end)` allowed intervals, MJD, derived from `observable[]`.
    #[serde(default)]
    pub allowed_intervals: Vec<(f64, f64)>,

    /// Converted UTC window, MJD, used by the Constraint Evaluator — derived
    /// once at construction from `constraint` (LST windows wrap across the
    /// night boundary and are clipped to `[Sunset, Sunrise]`).
    #[serde(default)]
    pub restriction_min_ut: f64,
    #[serde(default)]
    pub restriction_max_ut: f64,

    /// Set by the Scheduler.
    #[serde(default)]
    pub scheduled: bool,
    #[serde(default)]
    pub scheduled_start: f64,
    #[serde(default)]
    pub scheduled_end: f64,
    #[serde(default)]
    pub scheduled_mid: f64,
    /// Set by user feedback: this target has actually been observed and its
    /// slot is pinned.
    #[serde(default)]
    pub observed: bool,
    #[serde(default)]
    pub observed_start: f64,
    #[serde(default)]
    pub observed_end: f64,
    #[serde(default)]
    pub observer_comments: String,
}

/// Sidereal seconds per sidereal day, used to convert an LST window width
/// into an equivalent UTC duration.
const SIDEREAL_SECONDS_PER_DAY: f64 = 86164.0905;

/// Standard-atmosphere pressure (hPa) used to refract the visibility curve
/// when the site does not carry its own weather data.
const STANDARD_PRESSURE_HPA: f64 = 1013.25;
/// Standard-atmosphere temperature (°C), paired with [`STANDARD_PRESSURE_HPA`].
const STANDARD_TEMPERATURE_C: f64 = 10.0;

impl Target {
    /// Converts a target's `constraint` field into the `[restriction_min_ut,
    /// restriction_max_ut]` UTC window (MJD) the Constraint Evaluator
    /// consumes, clipping to `[night.sunset, night.sunrise]`.
    ///
    /// For an LST window, the window is anchored using the night's sidereal
    /// time at sunset (`night.stl_sunset`): the offset between the window's
    /// start LST and `stl_sunset`, converted to a UT duration via the
    /// sidereal/solar day ratio, locates the window within the night,
    /// wrapping once across the 24h sidereal boundary if necessary.
    pub fn restriction_window(constraint: &ConstraintMode, night: &Night) -> (f64, f64) {
        match *constraint {
            ConstraintMode::Airmass { .. } => (night.sunset, night.sunrise),
            ConstraintMode::UtcWindow { start_hours, end_hours } => {
                let start_mjd = anchor_utc_hour_to_night(start_hours, night);
                let mut end_mjd = anchor_utc_hour_to_night(end_hours, night);
                if end_mjd < start_mjd {
                    end_mjd += 1.0;
                }
                (start_mjd.max(night.sunset), end_mjd.min(night.sunrise))
            }
            ConstraintMode::LstWindow { start_hours, end_hours } => {
                let mut delta_lst_start = start_hours - night.stl_sunset;
                while delta_lst_start < 0.0 {
                    delta_lst_start += 24.0;
                }
                let mut width_hours = end_hours - start_hours;
                while width_hours < 0.0 {
                    width_hours += 24.0;
                }

                let delta_ut_start = delta_lst_start * SIDEREAL_SECONDS_PER_DAY / 86400.0 / 24.0;
                let width_ut = width_hours * SIDEREAL_SECONDS_PER_DAY / 86400.0 / 24.0;

                let start_mjd = night.sunset + delta_ut_start;
                let end_mjd = start_mjd + width_ut;
                (start_mjd.max(night.sunset), end_mjd.min(night.sunrise))
            }
        }
    }

    /// Internal representation of proper motion with the cos δ factor
    /// removed, per the spec'd internal units (radians/year).
    pub fn pm_ra_rad_per_year_from_cosdec(pm_ra_cosdec_arcsec_per_year: f64, dec_deg: f64) -> f64 {
        let pm_ra_cosdec_mas = pm_ra_cosdec_arcsec_per_year * 1000.0;
        let pm_ra_mas = pm_ra_cosdec_to_pm_ra(pm_ra_cosdec_mas, dec_deg);
        (pm_ra_mas / 1000.0 / 3600.0).to_radians()
    }

    /// Precomputes this target's visibility curve for one night.
    ///
    /// Must be called once per (target, night) pair before scheduling.
    /// Logs a warning if the target has no allowed time at all, and a
    /// different warning if it has allowed time but none of it is wide
    /// enough to fit the exposure.
    pub fn pre_compute(&mut self, night: &Night, site: &Site, offline_intervals: &[(f64, f64)]) -> ScheduleResult<()> {
        let (min_ut, max_ut) = Self::restriction_window(&self.constraint, night);
        self.restriction_min_ut = min_ut;
        self.restriction_max_ut = max_ut;

        if self.fill_slot {
            self.exposure_seconds = (max_ut - min_ut) * 86400.0;
            self.exposure_grid = self.exposure_seconds;
        } else {
            let xstep_seconds = night.xstep * 86400.0;
            self.exposure_grid = (self.exposure_seconds / xstep_seconds).floor() * xstep_seconds;
        }

        let max_airmass = match self.constraint {
            ConstraintMode::Airmass { max_airmass } => max_airmass,
            _ => 36.0, // effectively unrestricted for window-constrained targets
        };

        let nx = night.nx();
        self.graph = Vec::with_capacity(nx);
        self.observable = Vec::with_capacity(nx);

        let mut min_moon_dist = f64::INFINITY;
        let mut min_moon_dist_time = night.sunset;
        let mut best_alt = f64::NEG_INFINITY;
        let mut best_alt_time = night.sunset;

        for i in 0..nx {
            let t = night.xaxis[i];
            let dt = mjd_to_datetime(t);
            let (ra, dec) = apply_proper_motion(
                self.ra_j2000_deg,
                self.dec_j2000_deg,
                self.pm_ra_cosdec_arcsec_per_year * 1000.0,
                self.pm_dec_arcsec_per_year * 1000.0,
                dt,
            )
            .unwrap_or((self.ra_j2000_deg, self.dec_j2000_deg));

            let true_alt = night
                .geometric_altitude_deg(i, ra, dec, site.location.latitude_deg)
                .clamp(-90.0, 90.0);
            let alt = true_to_apparent_altitude(true_alt, STANDARD_PRESSURE_HPA, STANDARD_TEMPERATURE_C)?;
            self.graph.push(alt);

            if alt > best_alt {
                best_alt = alt;
                best_alt_time = t;
            }

            let moon_dist = angular_separation_deg(ra, dec, night.ra_moon[i], night.dec_moon[i]);
            if moon_dist < min_moon_dist {
                min_moon_dist = moon_dist;
                min_moon_dist_time = t;
            }
        }

        self.zenith_time = best_alt_time;
        self.min_moon_distance = min_moon_dist;
        self.min_moon_distance_time = min_moon_dist_time;

        let inputs = ConstraintInputs {
            restriction_min_ut: self.restriction_min_ut,
            restriction_max_ut: self.restriction_max_ut,
            max_airmass,
            dec_j2000_deg: self.dec_j2000_deg,
            zenith_time: self.zenith_time,
        };

        for i in 0..nx {
            self.observable.push(can_observe(&inputs, site, night.xaxis[i], self.graph[i], offline_intervals));
        }

        self.collapse_allowed_intervals(night);
        self.derive_possible_times(night);

        if self.first_possible_time.is_none() {
            log::warn!("target {} has no observable time tonight", self.name);
            self.observable_tonight = false;
        } else if self.last_possible_time.is_none() {
            log::warn!(
                "target {} has observable time tonight but no window fits its exposure ({}s)",
                self.name,
                self.exposure_grid
            );
            self.observable_tonight = false;
        } else {
            self.observable_tonight = true;
        }

        Ok(())
    }

    fn collapse_allowed_intervals(&mut self, night: &Night) {
        self.allowed_intervals.clear();
        let mut run_start: Option<usize> = None;
        for i in 0..self.observable.len() {
            let allowed = self.observable[i].is_schedulable();
            match (allowed, run_start) {
                (true, None) => run_start = Some(i),
                (false, Some(s)) => {
                    self.allowed_intervals.push((night.xaxis[s], night.xaxis[i]));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = run_start {
            self.allowed_intervals.push((night.xaxis[s], *night.xaxis.last().unwrap()));
        }
    }

    fn derive_possible_times(&mut self, _night: &Night) {
        self.first_possible_time = self.allowed_intervals.first().map(|&(begin, _)| begin);

        let exposure_days = self.exposure_grid / 86400.0;
        self.last_possible_time = self
            .allowed_intervals
            .iter()
            .filter(|&&(begin, end)| end - begin >= exposure_days)
            .map(|&(_, end)| end - exposure_days)
            .max_by(|a, b| a.partial_cmp(b).unwrap());
    }

    /// Applies a re-parsed input record onto an existing target in place
    /// (the "Updated" case of incremental re-plan classification): catalogue
    /// position, proper motion, exposure, project, constraint, and metadata
    /// are all replaced. Scheduling/observed state is left untouched — the
    /// caller re-runs `pre_compute` and the Scheduler afterward.
    pub fn apply_update(&mut self, record: crate::input::TargetRecord) -> ScheduleResult<()> {
        let (ra_j2000_deg, dec_j2000_deg) = if record.epoch == 1950 {
            crate::fk4::fk4_b1950_to_fk5_j2000(record.ra_deg, record.dec_deg)?
        } else {
            (record.ra_deg, record.dec_deg)
        };

        self.input_ra = record.input_ra;
        self.input_dec = record.input_dec;
        self.epoch = record.epoch;
        self.ra_j2000_deg = ra_j2000_deg;
        self.dec_j2000_deg = dec_j2000_deg;
        self.pm_ra_cosdec_arcsec_per_year = record.pm_ra_cosdec_arcsec_per_year;
        self.pm_dec_arcsec_per_year = record.pm_dec_arcsec_per_year;
        self.pm_ra_rad_per_year = Self::pm_ra_rad_per_year_from_cosdec(record.pm_ra_cosdec_arcsec_per_year, dec_j2000_deg);
        self.exposure_seconds = record.exposure_seconds;
        self.project = record.project;
        self.observation_type = record.observation_type;
        self.constraint = record.constraint;
        self.fill_slot = record.fill_slot;
        self.extra_info = record.extra_info;
        Ok(())
    }

    /// Records that this target was actually observed, pinning its slot so
    /// a later re-plan keeps it in place (the "Reinserting" case).
    pub fn mark_observed(&mut self, start: f64, end: f64, comments: impl Into<String>) {
        self.observed = true;
        self.observed_start = start;
        self.observed_end = end;
        self.observer_comments = comments.into();
    }

    /// Reconstructs the canonical input line this target would have been
    /// parsed from, used by incremental re-plan to detect "Unchanged"
    /// targets by exact match against freshly parsed input.
    pub fn reconstructed_input(&self) -> String {
        let exptime_field = if self.fill_slot { "*".to_string() } else { crate::input::format_number(self.exposure_seconds) };
        let constraint_field = match self.constraint {
            ConstraintMode::Airmass { max_airmass } => crate::input::format_number(max_airmass),
            ConstraintMode::UtcWindow { start_hours, end_hours } => {
                format!("UT[{}-{}]", crate::input::hours_to_hm(start_hours), crate::input::hours_to_hm(end_hours))
            }
            ConstraintMode::LstWindow { start_hours, end_hours } => {
                format!("LST[{}-{}]", crate::input::hours_to_hm(start_hours), crate::input::hours_to_hm(end_hours))
            }
        };
        let obinfo = format!(
            "{}/{}/{}/{}",
            self.extra_info.instrument, self.extra_info.mode, self.extra_info.group, self.extra_info.block
        );
        format!(
            "{} {} {} {} {} {} {} {} {}",
            self.name, self.input_ra, self.input_dec, self.epoch, exptime_field, self.project, constraint_field, self.observation_type, obinfo
        )
    }

    /// Identity key used to match a target against a freshly parsed record
    /// before deciding whether it is unchanged, updated, or absent: catalogue
    /// name, input coordinates, and epoch. Proper motion, exposure, and
    /// constraint are not part of identity — they are what "Updated" means.
    pub fn identity_key(&self) -> (String, String, String, u32) {
        (self.name.clone(), self.input_ra.clone(), self.input_dec.clone(), self.epoch)
    }
}

/// Anchors an hour-of-day UTC value (as given in a `UT[hh:mm-hh:mm]` input
/// window) to an absolute MJD within or near the observing night, by picking
/// whichever of "that hour on `night.date`" or "that hour on the following
/// calendar day" lands closer to the night's midpoint. This resolves the
/// midnight wrap without requiring the caller to know in advance whether an
/// hour belongs to the evening or the small-hours half of the night.
pub(crate) fn anchor_utc_hour_to_night(hour: f64, night: &Night) -> f64 {
    let date_start = Utc.from_utc_datetime(&night.date.and_hms_opt(0, 0, 0).expect("valid midnight"));
    let date_start_mjd = crate::time::mjd(date_start);
    let mid = 0.5 * (night.sunset + night.sunrise);

    let candidate_same_day = date_start_mjd + hour / 24.0;
    let candidate_next_day = candidate_same_day + 1.0;

    if (candidate_same_day - mid).abs() <= (candidate_next_day - mid).abs() {
        candidate_same_day
    } else {
        candidate_next_day
    }
}

/// Angular separation between two points on the sky (degrees in, degrees out).
fn angular_separation_deg(ra1_deg: f64, dec1_deg: f64, ra2_deg: f64, dec2_deg: f64) -> f64 {
    let ra1 = ra1_deg.to_radians();
    let dec1 = dec1_deg.to_radians();
    let ra2 = ra2_deg.to_radians();
    let dec2 = dec2_deg.to_radians();
    let cos_sep = dec1.sin() * dec2.sin() + dec1.cos() * dec2.cos() * (ra1 - ra2).cos();
    cos_sep.clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use chrono::NaiveDate;

    fn kitt_peak_site() -> Site {
        Site::new(Location { latitude_deg: 31.9583, longitude_deg: -111.6, altitude_m: 2120.0 }, -7.0, 20.0)
    }

    fn bare_target(name: &str, ra: f64, dec: f64) -> Target {
        Target {
            name: name.to_string(),
            input_ra: String::new(),
            input_dec: String::new(),
            epoch: 2000,
            ra_j2000_deg: ra,
            dec_j2000_deg: dec,
            pm_ra_cosdec_arcsec_per_year: 0.0,
            pm_dec_arcsec_per_year: 0.0,
            pm_ra_rad_per_year: 0.0,
            exposure_seconds: 600.0,
            exposure_grid: 600.0,
            project: "test".to_string(),
            observation_type: "imaging".to_string(),
            constraint: ConstraintMode::Airmass { max_airmass: 2.0 },
            fill_slot: false,
            extra_info: ExtraInfo::default(),
            graph: Vec::new(),
            observable: Vec::new(),
            zenith_time: 0.0,
            min_moon_distance: 0.0,
            min_moon_distance_time: 0.0,
            first_possible_time: None,
            last_possible_time: None,
            observable_tonight: false,
            allowed_intervals: Vec::new(),
            restriction_min_ut: 0.0,
            restriction_max_ut: 0.0,
            scheduled: false,
            scheduled_start: 0.0,
            scheduled_end: 0.0,
            scheduled_mid: 0.0,
            observed: false,
            observed_start: 0.0,
            observed_end: 0.0,
            observer_comments: String::new(),
        }
    }

    #[test]
    fn test_pre_compute_finds_zenith_transit_target() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let site = kitt_peak_site();
        let night = Night::new(date, &site, 2.0).unwrap();

        // Target near the site's zenith at local midnight-ish RA.
        let mid_mjd = 0.5 * (night.sunset + night.sunrise);
        let dt = mjd_to_datetime(mid_mjd);
        let lst = crate::sidereal::apparent_sidereal_time(crate::time::julian_date(dt), site.location.longitude_deg);
        let ra_overhead = (lst * 15.0).rem_euclid(360.0);

        let mut target = bare_target("zenith-test", ra_overhead, site.location.latitude_deg);
        target.pre_compute(&night, &site, &[]).unwrap();

        assert!(target.observable_tonight);
        assert!(target.graph.iter().cloned().fold(f64::MIN, f64::max) > 70.0);
    }

    #[test]
    fn test_pre_compute_marks_unobservable_never_up_target() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let site = kitt_peak_site();
        let night = Night::new(date, &site, 2.0).unwrap();

        // A target near the south celestial pole never clears 20 degrees
        // altitude from a +32 degree latitude site.
        let mut target = bare_target("never-up", 180.0, -85.0);
        target.pre_compute(&night, &site, &[]).unwrap();

        assert!(!target.observable_tonight);
        assert!(target.first_possible_time.is_none());
    }

    #[test]
    fn test_allowed_intervals_collapse_matches_observable() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let site = kitt_peak_site();
        let night = Night::new(date, &site, 2.0).unwrap();

        let mut target = bare_target("equinox-target", 30.0, 10.0);
        target.pre_compute(&night, &site, &[]).unwrap();

        for &(begin, end) in &target.allowed_intervals {
            assert!(begin < end);
            assert!(begin >= night.sunset && end <= night.sunrise);
        }
    }
}
