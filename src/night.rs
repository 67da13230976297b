//! Per-night ephemeris state: sunset/sunrise, twilight bounds, the
//! observation grid, and cached sun/moon ephemerides.
//!
//! A [`Night`] is constructed once from a [`Site`] and a calendar date and
//! never mutated afterward — every `Target` reads it through a shared
//! reference. Construction uses a coarse altitude-grid scan followed by a
//! bisection refinement to bracket each sunset/sunrise/twilight/moonrise/
//! moonset crossing, the technique used throughout this corpus for rise/set
//! search, rather than a closed-form transcendental solve.

use chrono::{Duration, NaiveDate, TimeZone, Utc};

use crate::error::{ScheduleError, ScheduleResult};
use crate::moon::{moon_equatorial, moon_illumination};
use crate::sidereal::apparent_sidereal_time;
use crate::site::Site;
use crate::sun::sun_ra_dec;
use crate::time::{julian_date, mjd, mjd_to_datetime};
use crate::transforms::ra_dec_to_alt_az;

/// Altitude (degrees) at which the Sun's disc center is considered to mark
/// sunset/sunrise: standard refraction (−34′) plus solar semi-diameter (16′).
pub const SUN_RISE_SET_ALTITUDE_DEG: f64 = -0.8333;
/// Nautical twilight boundary: Sun 12° below the horizon.
pub const NAUTICAL_TWILIGHT_ALTITUDE_DEG: f64 = -12.0;
/// Astronomical twilight boundary: Sun 18° below the horizon.
pub const ASTRONOMICAL_TWILIGHT_ALTITUDE_DEG: f64 = -18.0;
/// Altitude at which the Moon's disc center is considered to mark
/// moonrise/moonset (refraction only; the Moon's own semi-diameter is
/// comparable to its horizontal parallax and the two nearly cancel).
pub const MOON_RISE_SET_ALTITUDE_DEG: f64 = -0.5667;

const SCAN_RESOLUTION_MINUTES: i64 = 2;
const BISECTION_ITERATIONS: u32 = 40;

#[derive(Debug, Clone, Copy)]
struct AltitudeSample {
    mjd: f64,
    altitude_deg: f64,
}

fn altitude_grid<F>(start_mjd: f64, hours: f64, resolution_minutes: i64, mut alt_fn: F) -> Vec<AltitudeSample>
where
    F: FnMut(f64) -> f64,
{
    let step = resolution_minutes as f64 / 1440.0;
    let n = (hours * 60.0 / resolution_minutes as f64).ceil() as usize + 1;
    (0..n)
        .map(|i| {
            let t = start_mjd + i as f64 * step;
            AltitudeSample { mjd: t, altitude_deg: alt_fn(t) }
        })
        .collect()
}

fn find_nadir(samples: &[AltitudeSample]) -> AltitudeSample {
    *samples
        .iter()
        .min_by(|a, b| a.altitude_deg.partial_cmp(&b.altitude_deg).unwrap())
        .expect("altitude grid must not be empty")
}

/// Linear-interpolation bracket search, mirroring the teacher corpus's
/// `find_crossing` idiom, followed by bisection refinement against the
/// actual altitude function (the coarse grid only has to bracket the
/// crossing, not resolve it).
fn find_crossing<F>(samples: &[AltitudeSample], target: f64, ascending: bool, mut alt_fn: F) -> Option<f64>
where
    F: FnMut(f64) -> f64,
{
    for window in samples.windows(2) {
        let (a, b) = (window[0], window[1]);
        let crosses = if ascending {
            a.altitude_deg <= target && b.altitude_deg > target
        } else {
            a.altitude_deg >= target && b.altitude_deg < target
        };
        if crosses {
            let mut lo = a.mjd;
            let mut hi = b.mjd;
            let lo_below = a.altitude_deg < target;
            for _ in 0..BISECTION_ITERATIONS {
                let mid = 0.5 * (lo + hi);
                let mid_alt = alt_fn(mid);
                let mid_below = mid_alt < target;
                if mid_below == lo_below {
                    lo = mid;
                } else {
                    hi = mid;
                }
            }
            return Some(0.5 * (lo + hi));
        }
    }
    None
}

fn sun_altitude_deg(t_mjd: f64, site: &Site) -> f64 {
    let dt = mjd_to_datetime(t_mjd);
    let (ra, dec) = sun_ra_dec(dt);
    ra_dec_to_alt_az(ra, dec, dt, &site.location)
        .map(|(alt, _)| alt)
        .unwrap_or(f64::NEG_INFINITY)
}

fn moon_altitude_deg(t_mjd: f64, site: &Site) -> f64 {
    let dt = mjd_to_datetime(t_mjd);
    let (ra, dec) = moon_equatorial(dt);
    ra_dec_to_alt_az(ra, dec, dt, &site.location)
        .map(|(alt, _)| alt)
        .unwrap_or(f64::NEG_INFINITY)
}

/// Per-night ephemeris state, built once and never mutated.
///
/// `xaxis` is the uniform observation grid from `sunset` to `sunrise`, in
/// MJD. `lst_hours[i]` and `bpn_matrix[i]` are the star-independent
/// parameter blocks cached at each grid point (the apparent-sidereal-time
/// and bias-precession-nutation analogs of the classic mean-to-apparent/
/// apparent-to-observed parameter blocks); [`Night::geometric_altitude_deg`]
/// consumes both so `Target::pre_compute` never recomputes the frame
/// transform or the sidereal time itself for every target at every grid
/// point.
#[derive(Debug, Clone)]
pub struct Night {
    /// Civil date (at the site) the night starts on.
    pub date: NaiveDate,
    /// Sunset, MJD.
    pub sunset: f64,
    /// Sunrise, MJD.
    pub sunrise: f64,
    /// Evening astronomical twilight (Sun at −18°), MJD.
    pub e_ast_twilight: f64,
    /// Morning astronomical twilight (Sun at −18°), MJD.
    pub m_ast_twilight: f64,
    /// Evening nautical twilight (Sun at −12°), MJD.
    pub e_nau_twilight: f64,
    /// Morning nautical twilight (Sun at −12°), MJD.
    pub m_nau_twilight: f64,
    /// Grid resolution, in MJD days.
    pub xstep: f64,
    /// Uniformly spaced timestamps from `sunset` to `sunrise`, in MJD.
    pub xaxis: Vec<f64>,
    /// `sunrise - sunset`, in days.
    pub wnight: f64,
    /// Local apparent sidereal time, in hours, at each grid point.
    pub lst_hours: Vec<f64>,
    /// Bias-precession-nutation matrix at each grid point.
    pub bpn_matrix: Vec<[[f64; 3]; 3]>,
    /// Apparent Moon right ascension, in degrees, at each grid point.
    pub ra_moon: Vec<f64>,
    /// Apparent Moon declination, in degrees, at each grid point.
    pub dec_moon: Vec<f64>,
    /// Refracted Moon altitude, in degrees, at each grid point.
    pub y_moon: Vec<f64>,
    /// Moon illuminated fraction [0, 1] at sunset.
    pub moon_illumination_start: f64,
    /// Moon illuminated fraction [0, 1] at sunrise.
    pub moon_illumination_end: f64,
    /// Moon illuminated fraction [0, 1] at local midnight, representative of the night.
    pub moon_illumination_mid: f64,
    /// Moonrise, MJD, if the Moon rises during the scan window.
    pub moonrise: Option<f64>,
    /// Moonset, MJD, if the Moon sets during the scan window.
    pub moonset: Option<f64>,
    /// Local apparent sidereal time at sunset, in hours.
    pub stl_sunset: f64,
}

impl Night {
    /// Builds the ephemeris state for the night starting on the evening of
    /// `date` (civil, at `site`'s timezone), with a grid resolution of
    /// `xstep_minutes`.
    ///
    /// Degenerate case: if the Sun never crosses the rise/set altitude
    /// during the scan window at all (polar day or polar night), this
    /// returns a degenerate `Night` with `sunset = sunrise` (and all
    /// twilights collapsed to that same instant) and a single-point grid —
    /// never an error — so the scheduler can still run and simply find no
    /// observing time. The more common high-latitude-summer case, where the
    /// Sun sets and rises but never reaches the nautical/astronomical
    /// twilight altitudes, collapses only the affected twilight times to
    /// sunset/sunrise.
    ///
    /// # Errors
    /// Returns [`ScheduleError::EphemerisError`] if the site's geodetic
    /// latitude is out of range (`|lat| > 90°`) — the only way construction
    /// can fail, per the site-parameter-sanity contract.
    pub fn new(date: NaiveDate, site: &Site, xstep_minutes: f64) -> ScheduleResult<Night> {
        if site.location.latitude_deg.abs() > 90.0 {
            return Err(ScheduleError::EphemerisError {
                reason: format!("site latitude {} is out of range [-90, 90]", site.location.latitude_deg),
            });
        }

        let local_noon_utc_hour = 12.0 - site.timezone_offset_hours;
        let midnight_utc = Utc
            .from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("valid midnight"));
        let scan_start = midnight_utc + Duration::minutes((local_noon_utc_hour * 60.0) as i64);
        let scan_start_mjd = mjd(scan_start);

        let sun_samples = altitude_grid(scan_start_mjd, 24.0, SCAN_RESOLUTION_MINUTES, |t| {
            sun_altitude_deg(t, site)
        });

        let nadir = find_nadir(&sun_samples);
        let (evening, morning) = split_at_mjd(&sun_samples, nadir.mjd);

        let sunset_crossing = find_crossing(evening, SUN_RISE_SET_ALTITUDE_DEG, false, |t| sun_altitude_deg(t, site));
        let sunrise_crossing = find_crossing(morning, SUN_RISE_SET_ALTITUDE_DEG, true, |t| sun_altitude_deg(t, site));

        let (sunset, sunrise) = match (sunset_crossing, sunrise_crossing) {
            (Some(s), Some(r)) => (s, r),
            _ => return Ok(Self::degenerate(date, site, &sun_samples, nadir.mjd, xstep_minutes)),
        };

        let e_nau_twilight =
            find_crossing(evening, NAUTICAL_TWILIGHT_ALTITUDE_DEG, false, |t| sun_altitude_deg(t, site))
                .unwrap_or(sunset);
        let m_nau_twilight =
            find_crossing(morning, NAUTICAL_TWILIGHT_ALTITUDE_DEG, true, |t| sun_altitude_deg(t, site))
                .unwrap_or(sunrise);
        let e_ast_twilight =
            find_crossing(evening, ASTRONOMICAL_TWILIGHT_ALTITUDE_DEG, false, |t| sun_altitude_deg(t, site))
                .unwrap_or(e_nau_twilight);
        let m_ast_twilight =
            find_crossing(morning, ASTRONOMICAL_TWILIGHT_ALTITUDE_DEG, true, |t| sun_altitude_deg(t, site))
                .unwrap_or(m_nau_twilight);

        let xstep = xstep_minutes / 1440.0;
        let wnight = sunrise - sunset;
        let nx = (wnight / xstep).round() as usize + 1;
        let xaxis: Vec<f64> = (0..nx).map(|i| sunset + i as f64 * xstep).collect();

        let mut lst_hours = Vec::with_capacity(nx);
        let mut bpn_matrix = Vec::with_capacity(nx);
        let mut ra_moon = Vec::with_capacity(nx);
        let mut dec_moon = Vec::with_capacity(nx);
        let mut y_moon = Vec::with_capacity(nx);

        for &t in &xaxis {
            let dt = mjd_to_datetime(t);
            let jd = julian_date(dt);
            lst_hours.push(apparent_sidereal_time(jd, site.location.longitude_deg));
            bpn_matrix.push(crate::erfa::bias_precession_nutation_matrix(jd, 0.0));

            let (ra, dec) = moon_equatorial(dt);
            ra_moon.push(ra);
            dec_moon.push(dec);
            let alt = ra_dec_to_alt_az(ra, dec, dt, &site.location).map(|(a, _)| a).unwrap_or(f64::NAN);
            y_moon.push(alt);
        }

        let moon_illumination_start = moon_illumination(mjd_to_datetime(sunset));
        let moon_illumination_end = moon_illumination(mjd_to_datetime(sunrise));
        let moon_illumination_mid = moon_illumination(mjd_to_datetime(0.5 * (sunset + sunrise)));

        let moonrise = find_crossing(&sun_samples, MOON_RISE_SET_ALTITUDE_DEG, true, |t| moon_altitude_deg(t, site));
        let moonset = find_crossing(&sun_samples, MOON_RISE_SET_ALTITUDE_DEG, false, |t| moon_altitude_deg(t, site));

        let stl_sunset = apparent_sidereal_time(julian_date(mjd_to_datetime(sunset)), site.location.longitude_deg);

        Ok(Night {
            date,
            sunset,
            sunrise,
            e_ast_twilight,
            m_ast_twilight,
            e_nau_twilight,
            m_nau_twilight,
            xstep,
            xaxis,
            wnight,
            lst_hours,
            bpn_matrix,
            ra_moon,
            dec_moon,
            y_moon,
            moon_illumination_start,
            moon_illumination_end,
            moon_illumination_mid,
            moonrise,
            moonset,
            stl_sunset,
        })
    }

    /// Builds a degenerate, zero-length `Night` (`wnight = 0`, a single grid
    /// point, all twilights collapsed to the same instant) for polar
    /// day/night, per the invariant that the scheduler must still function
    /// with "no observing time" rather than an error (spec'd boundary
    /// behavior). `anchor_mjd` is the scan window's solar nadir, used as the
    /// single representative grid point.
    fn degenerate(date: NaiveDate, site: &Site, sun_samples: &[AltitudeSample], anchor_mjd: f64, xstep_minutes: f64) -> Night {
        let dt = mjd_to_datetime(anchor_mjd);
        let jd = julian_date(dt);
        let lst = apparent_sidereal_time(jd, site.location.longitude_deg);
        let bpn = crate::erfa::bias_precession_nutation_matrix(jd, 0.0);

        let (ra_moon, dec_moon) = moon_equatorial(dt);
        let y_moon = ra_dec_to_alt_az(ra_moon, dec_moon, dt, &site.location).map(|(a, _)| a).unwrap_or(f64::NAN);
        let moon_illumination = moon_illumination(dt);

        let moonrise = find_crossing(sun_samples, MOON_RISE_SET_ALTITUDE_DEG, true, |t| moon_altitude_deg(t, site));
        let moonset = find_crossing(sun_samples, MOON_RISE_SET_ALTITUDE_DEG, false, |t| moon_altitude_deg(t, site));

        Night {
            date,
            sunset: anchor_mjd,
            sunrise: anchor_mjd,
            e_ast_twilight: anchor_mjd,
            m_ast_twilight: anchor_mjd,
            e_nau_twilight: anchor_mjd,
            m_nau_twilight: anchor_mjd,
            xstep: xstep_minutes / 1440.0,
            xaxis: vec![anchor_mjd],
            wnight: 0.0,
            lst_hours: vec![lst],
            bpn_matrix: vec![bpn],
            ra_moon: vec![ra_moon],
            dec_moon: vec![dec_moon],
            y_moon: vec![y_moon],
            moon_illumination_start: moon_illumination,
            moon_illumination_end: moon_illumination,
            moon_illumination_mid: moon_illumination,
            moonrise,
            moonset,
            stl_sunset: lst,
        }
    }

    /// Rotates a J2000 mean-equatorial direction into the apparent
    /// (bias-precession-nutation-corrected, of-date) frame using grid
    /// point `i`'s cached `bpn_matrix`, the same Cartesian-rotation idiom
    /// `precession::precess_from_j2000` uses for ERFA's `Pmat06` output.
    pub fn apparent_ra_dec_deg(&self, i: usize, ra_j2000_deg: f64, dec_j2000_deg: f64) -> (f64, f64) {
        let ra_rad = ra_j2000_deg.to_radians();
        let dec_rad = dec_j2000_deg.to_radians();
        let p = [dec_rad.cos() * ra_rad.cos(), dec_rad.cos() * ra_rad.sin(), dec_rad.sin()];

        let m = &self.bpn_matrix[i];
        let p_new = [
            m[0][0] * p[0] + m[0][1] * p[1] + m[0][2] * p[2],
            m[1][0] * p[0] + m[1][1] * p[1] + m[1][2] * p[2],
            m[2][0] * p[0] + m[2][1] * p[1] + m[2][2] * p[2],
        ];

        let mut ra_deg = p_new[1].atan2(p_new[0]).to_degrees();
        if ra_deg < 0.0 {
            ra_deg += 360.0;
        }
        (ra_deg, p_new[2].asin().to_degrees())
    }

    /// Geometric (unrefracted) altitude of a J2000 mean position at grid
    /// point `i`, precessed/nutated via `apparent_ra_dec_deg` and combined
    /// with the cached local apparent sidereal time (`lst_hours[i]`) through
    /// the same hour-angle altitude formula `transforms::ra_dec_to_alt_az`
    /// uses — without recomputing the frame transform or the sidereal time
    /// from scratch for every target at every grid point.
    pub fn geometric_altitude_deg(&self, i: usize, ra_j2000_deg: f64, dec_j2000_deg: f64, latitude_deg: f64) -> f64 {
        let (ra_deg, dec_deg) = self.apparent_ra_dec_deg(i, ra_j2000_deg, dec_j2000_deg);

        let ha_rad = (self.lst_hours[i] * 15.0 - ra_deg).to_radians();
        let dec_rad = dec_deg.to_radians();
        let lat_rad = latitude_deg.to_radians();

        let sin_alt = dec_rad.sin() * lat_rad.sin() + dec_rad.cos() * lat_rad.cos() * ha_rad.cos();
        sin_alt.clamp(-1.0, 1.0).asin().to_degrees()
    }

    /// Number of grid points (`xaxis.len()`).
    pub fn nx(&self) -> usize {
        self.xaxis.len()
    }

    /// Night length in seconds, sunset to sunrise.
    pub fn night_length_sec(&self) -> f64 {
        self.wnight * 86400.0
    }

    /// Dark (astronomical-twilight-bounded) time in seconds.
    pub fn dark_time_sec(&self) -> f64 {
        (self.m_ast_twilight - self.e_ast_twilight) * 86400.0
    }

    /// Finds the grid index nearest a given MJD time, clamped to the grid bounds.
    pub fn nearest_index(&self, t_mjd: f64) -> usize {
        if t_mjd <= self.sunset {
            return 0;
        }
        if t_mjd >= self.sunrise {
            return self.nx() - 1;
        }
        ((t_mjd - self.sunset) / self.xstep).round() as usize
    }
}

fn split_at_mjd(samples: &[AltitudeSample], split_mjd: f64) -> (&[AltitudeSample], &[AltitudeSample]) {
    let idx = samples
        .iter()
        .position(|s| s.mjd >= split_mjd)
        .unwrap_or(samples.len());
    samples.split_at(idx)
}
