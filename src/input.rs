//! Canonical line-oriented grammar for observing-target input (§4.7): the
//! thin normalization layer between free-form target text and a structured
//! [`TargetRecord`] a [`crate::target::Target`] can be built from.
//!
//! A canonical line has 13 whitespace-separated fields:
//! `name rah ram ras[/pmra] decsign+degd decm decs[/pmdec] epoch exptime
//! project constraints type obinfo`. `type` and `obinfo` may be omitted and
//! are filled from [`InputDefaults`]. A line whose first field is `Offline`
//! or `BadWolf` (optionally `#`-prefixed) encodes a site-wide offline
//! interval instead of a target; any other `#`-prefixed line is a comment.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ScheduleError;
use crate::target::{ConstraintMode, ExtraInfo};

lazy_static! {
    static ref AIRMASS_RE: Regex = Regex::new(r"^\d+(\.\d+)?$").unwrap();
    static ref UT_WINDOW_RE: Regex =
        Regex::new(r"(?i)^UT\[\s*(\d{1,2}):(\d{2})\s*-\s*(\d{1,2}):(\d{2})\s*\]$").unwrap();
    static ref LST_WINDOW_RE: Regex =
        Regex::new(r"(?i)^LST\[\s*(\d{1,2}):(\d{2})\s*-\s*(\d{1,2}):(\d{2})\s*\]$").unwrap();
    static ref OFFLINE_WINDOW_RE: Regex =
        Regex::new(r"(?i)^(?:UT)?\[?\s*(\d{1,2}):(\d{2})\s*-\s*(\d{1,2}):(\d{2})\s*\]?$").unwrap();
}

/// Defaults used to fill fields a shorter input line omits (`type`,
/// `obinfo`), and the fallback values used when a field is present but the
/// line supplies fewer than the full 13.
#[derive(Debug, Clone)]
pub struct InputDefaults {
    /// Catalogue epoch assumed when not stated (spec allows only 1950/2000,
    /// this only matters for the omitted-field case).
    pub epoch: u32,
    /// Project identifier used when the line omits `project`... never
    /// actually omitted per the grammar (project is a required field), kept
    /// here for symmetry with the other defaultable fields.
    pub project: String,
    /// Observation type used when the line omits the `type` field.
    pub observation_type: String,
    /// Extra-info (instrument/mode/group/block) used when the line omits
    /// the `obinfo` field, or omits trailing sub-fields of it.
    pub extra_info: ExtraInfo,
}

impl Default for InputDefaults {
    fn default() -> Self {
        InputDefaults {
            epoch: 2000,
            project: "default".to_string(),
            observation_type: "default".to_string(),
            extra_info: ExtraInfo::default(),
        }
    }
}

/// A canonicalized target line, ready to become a `Target` once a `Night`
/// exists to anchor any window constraint (see
/// [`crate::target::Target::restriction_window`]).
#[derive(Debug, Clone)]
pub struct TargetRecord {
    pub name: String,
    pub input_ra: String,
    pub input_dec: String,
    pub epoch: u32,
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub pm_ra_cosdec_arcsec_per_year: f64,
    pub pm_dec_arcsec_per_year: f64,
    /// Requested exposure, seconds. Meaningless (`0.0`) for a fill-slot
    /// target: its true exposure is the width of its constraint window,
    /// resolved once a `Night` exists.
    pub exposure_seconds: f64,
    pub project: String,
    pub constraint: ConstraintMode,
    pub fill_slot: bool,
    pub observation_type: String,
    pub extra_info: ExtraInfo,
}

/// A site-wide offline interval (`Offline`/`BadWolf` line): a UT hours-of-day
/// window during which no target may be scheduled, anchored to a `Night` the
/// same way a target's `UT[...]` constraint window is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OfflineSpec {
    pub start_hours: f64,
    pub end_hours: f64,
}

/// One successfully parsed, non-comment input line.
#[derive(Debug, Clone)]
pub enum ParsedLine {
    Target(TargetRecord),
    Offline(OfflineSpec),
}

/// Parses canonical target input text into records. Each line is validated
/// independently (per spec.md §7, a malformed line is local: it is reported
/// and the remaining lines still parse); malformed lines are returned
/// alongside the lines that did parse, never abort the whole input.
pub fn parse_lines(text: &str, defaults: &InputDefaults) -> (Vec<ParsedLine>, Vec<ScheduleError>) {
    let mut parsed = Vec::new();
    let mut errors = Vec::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_number = idx + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (hash_prefixed, content) =
            if let Some(rest) = trimmed.strip_prefix('#') { (true, rest.trim()) } else { (false, trimmed) };
        if content.is_empty() {
            continue;
        }

        let first_field = content.split_whitespace().next().unwrap_or("");
        if first_field.eq_ignore_ascii_case("Offline") || first_field.eq_ignore_ascii_case("BadWolf") {
            match parse_offline_line(content, line_number) {
                Ok(spec) => parsed.push(ParsedLine::Offline(spec)),
                Err(e) => errors.push(e),
            }
            continue;
        }

        if hash_prefixed {
            continue; // a genuine comment line
        }

        match parse_target_line(content, line_number, defaults) {
            Ok(record) => parsed.push(ParsedLine::Target(record)),
            Err(e) => errors.push(e),
        }
    }

    (parsed, errors)
}

fn input_error(line: usize, kind: &str, detail: impl Into<String>) -> ScheduleError {
    ScheduleError::InputError { line, kind: kind.to_string(), detail: detail.into() }
}

fn parse_offline_line(content: &str, line: usize) -> Result<OfflineSpec, ScheduleError> {
    let mut fields = content.split_whitespace();
    let _sentinel = fields.next();
    let rest: String = fields.collect::<Vec<_>>().join(" ");
    if rest.is_empty() {
        return Err(input_error(line, "offline-window", "missing UT window after Offline/BadWolf"));
    }

    let caps = OFFLINE_WINDOW_RE
        .captures(&rest)
        .ok_or_else(|| input_error(line, "offline-window", format!("cannot parse UT window '{rest}'")))?;
    let start_hours = hms_fields_to_hours(&caps[1], &caps[2], "0", line)?;
    let end_hours = hms_fields_to_hours(&caps[3], &caps[4], "0", line)?;
    Ok(OfflineSpec { start_hours, end_hours })
}

fn hms_fields_to_hours(h: &str, m: &str, s: &str, line: usize) -> Result<f64, ScheduleError> {
    let h: f64 = h.parse().map_err(|_| input_error(line, "time", format!("bad hour '{h}'")))?;
    let m: f64 = m.parse().map_err(|_| input_error(line, "time", format!("bad minute '{m}'")))?;
    let s: f64 = s.parse().map_err(|_| input_error(line, "time", format!("bad second '{s}'")))?;
    Ok(h + m / 60.0 + s / 3600.0)
}

/// Splits a field on `/`, returning `(value_part, optional_suffix_part)`.
fn split_slash(field: &str) -> (&str, Option<&str>) {
    match field.split_once('/') {
        Some((a, b)) => (a, Some(b)),
        None => (field, None),
    }
}

fn parse_target_line(content: &str, line: usize, defaults: &InputDefaults) -> Result<TargetRecord, ScheduleError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    if fields.len() < 11 || fields.len() > 13 {
        return Err(input_error(
            line,
            "field-count",
            format!("expected 11-13 fields, found {} in '{}'", fields.len(), content),
        ));
    }

    let name = fields[0].to_string();
    let (ra_deg, pm_ra_cosdec) = parse_ra(fields[1], fields[2], fields[3], line)?;
    let (dec_deg, pm_dec) = parse_dec(fields[4], fields[5], fields[6], line)?;

    let epoch: u32 =
        fields[7].parse().map_err(|_| input_error(line, "epoch", format!("not an integer: '{}'", fields[7])))?;
    if epoch != 1950 && epoch != 2000 {
        return Err(input_error(line, "epoch", format!("must be 1950 or 2000, got {epoch}")));
    }

    let fill_slot = fields[8] == "*";
    let exposure_seconds = if fill_slot {
        0.0
    } else {
        fields[8].parse().map_err(|_| input_error(line, "exptime", format!("not a number: '{}'", fields[8])))?
    };

    let project = fields[9].to_string();
    let constraint = parse_constraint(fields[10], line)?;

    if fill_slot && matches!(constraint, ConstraintMode::Airmass { .. }) {
        return Err(input_error(line, "fill-slot", "exptime '*' requires a UT[...] or LST[...] window constraint"));
    }

    let observation_type = fields.get(11).map(|s| s.to_string()).unwrap_or_else(|| defaults.observation_type.clone());
    let extra_info = fields.get(12).map(|s| parse_obinfo(s, &defaults.extra_info)).unwrap_or_else(|| defaults.extra_info.clone());

    Ok(TargetRecord {
        name,
        input_ra: format!("{} {} {}", fields[1], fields[2], fields[3]),
        input_dec: format!("{} {} {}", fields[4], fields[5], fields[6]),
        epoch,
        ra_deg,
        dec_deg,
        pm_ra_cosdec_arcsec_per_year: pm_ra_cosdec,
        pm_dec_arcsec_per_year: pm_dec,
        exposure_seconds,
        project,
        constraint,
        fill_slot,
        observation_type,
        extra_info,
    })
}

/// Parses `rah ram ras[/pmra]` into (RA degrees, pmRA arcsec/yr, cos δ applied).
fn parse_ra(rah: &str, ram: &str, ras_field: &str, line: usize) -> Result<(f64, f64), ScheduleError> {
    let (ras_str, pm_str) = split_slash(ras_field);
    let h: f64 = rah.parse().map_err(|_| input_error(line, "ra", format!("bad hours '{rah}'")))?;
    let m: f64 = ram.parse().map_err(|_| input_error(line, "ra", format!("bad minutes '{ram}'")))?;
    let s: f64 = ras_str.parse().map_err(|_| input_error(line, "ra", format!("bad seconds '{ras_str}'")))?;
    if !(0.0..24.0).contains(&h) || !(0.0..60.0).contains(&m) || !(0.0..60.0).contains(&s) {
        return Err(input_error(line, "ra", format!("out of range: {rah}:{ram}:{ras_str}")));
    }
    let ra_deg = (h + m / 60.0 + s / 3600.0) * 15.0;
    let pm = match pm_str {
        Some(p) => p.parse().map_err(|_| input_error(line, "pmra", format!("bad proper motion '{p}'")))?,
        None => 0.0,
    };
    Ok((ra_deg, pm))
}

/// Parses `decsign+degd decm decs[/pmdec]` into (Dec degrees, pmDec arcsec/yr).
fn parse_dec(dsign_deg: &str, dm: &str, ds_field: &str, line: usize) -> Result<(f64, f64), ScheduleError> {
    let (ds_str, pm_str) = split_slash(ds_field);
    let negative = dsign_deg.starts_with('-');
    let deg_abs_str = dsign_deg.trim_start_matches(['+', '-']);
    let deg: f64 = deg_abs_str.parse().map_err(|_| input_error(line, "dec", format!("bad degrees '{dsign_deg}'")))?;
    let m: f64 = dm.parse().map_err(|_| input_error(line, "dec", format!("bad arcminutes '{dm}'")))?;
    let s: f64 = ds_str.parse().map_err(|_| input_error(line, "dec", format!("bad arcseconds '{ds_str}'")))?;
    if !(0.0..=90.0).contains(&deg) || !(0.0..60.0).contains(&m) || !(0.0..60.0).contains(&s) {
        return Err(input_error(line, "dec", format!("out of range: {dsign_deg}:{dm}:{ds_str}")));
    }
    let magnitude = deg + m / 60.0 + s / 3600.0;
    let dec_deg = if negative { -magnitude } else { magnitude };
    let pm = match pm_str {
        Some(p) => p.parse().map_err(|_| input_error(line, "pmdec", format!("bad proper motion '{p}'")))?,
        None => 0.0,
    };
    Ok((dec_deg, pm))
}

fn parse_constraint(field: &str, line: usize) -> Result<ConstraintMode, ScheduleError> {
    if AIRMASS_RE.is_match(field) {
        let max_airmass: f64 = field.parse().expect("regex-validated float");
        return Ok(ConstraintMode::Airmass { max_airmass });
    }
    if let Some(caps) = UT_WINDOW_RE.captures(field) {
        let start_hours = hms_fields_to_hours(&caps[1], &caps[2], "0", line)?;
        let end_hours = hms_fields_to_hours(&caps[3], &caps[4], "0", line)?;
        return Ok(ConstraintMode::UtcWindow { start_hours, end_hours });
    }
    if let Some(caps) = LST_WINDOW_RE.captures(field) {
        let start_hours = hms_fields_to_hours(&caps[1], &caps[2], "0", line)?;
        let end_hours = hms_fields_to_hours(&caps[3], &caps[4], "0", line)?;
        return Ok(ConstraintMode::LstWindow { start_hours, end_hours });
    }
    Err(input_error(
        line,
        "constraints",
        format!("'{field}' is neither a max-airmass float nor UT[hh:mm-hh:mm] nor LST[hh:mm-hh:mm]"),
    ))
}

/// Parses the `obinfo` field (`instrument/mode/group/block`, any trailing
/// sub-fields omitted) against defaults for the parts left unsaid.
fn parse_obinfo(field: &str, default: &ExtraInfo) -> ExtraInfo {
    let parts: Vec<&str> = field.split('/').collect();
    ExtraInfo {
        instrument: parts.first().map(|s| s.to_string()).unwrap_or_else(|| default.instrument.clone()),
        mode: parts.get(1).map(|s| s.to_string()).unwrap_or_else(|| default.mode.clone()),
        group: parts.get(2).map(|s| s.to_string()).unwrap_or_else(|| default.group.clone()),
        block: parts.get(3).map(|s| s.to_string()).unwrap_or_else(|| default.block.clone()),
    }
}

/// Formats a float the way it would appear as a canonical-grammar field:
/// no trailing zeros, no decimal point for whole numbers.
pub(crate) fn format_number(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.6}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Formats an hour-of-day as `HH:MM`, wrapping into `[0, 24)` first, the way
/// a `UT[...]`/`LST[...]` window field is written.
pub(crate) fn hours_to_hm(hour: f64) -> String {
    let wrapped = hour.rem_euclid(24.0);
    let total_minutes = (wrapped * 60.0).round() as i64;
    let hh = (total_minutes / 60) % 24;
    let mm = total_minutes % 60;
    format!("{hh:02}:{mm:02}")
}

impl TargetRecord {
    /// Reconstructs the canonical input line this record corresponds to,
    /// in the same form as [`crate::target::Target::reconstructed_input`] —
    /// the two must agree exactly for incremental re-plan's "Unchanged"
    /// detection to work.
    pub fn reconstructed_input(&self) -> String {
        let exptime_field = if self.fill_slot { "*".to_string() } else { format_number(self.exposure_seconds) };
        let constraint_field = match self.constraint {
            ConstraintMode::Airmass { max_airmass } => format_number(max_airmass),
            ConstraintMode::UtcWindow { start_hours, end_hours } => {
                format!("UT[{}-{}]", hours_to_hm(start_hours), hours_to_hm(end_hours))
            }
            ConstraintMode::LstWindow { start_hours, end_hours } => {
                format!("LST[{}-{}]", hours_to_hm(start_hours), hours_to_hm(end_hours))
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_simple_airmass_target() {
        let (parsed, errors) =
            parse_lines("M13 16:41:42 +36:27:37 2000 1800 54-199 2.0 Staff default", &InputDefaults::default());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(parsed.len(), 1);
        match &parsed[0] {
            ParsedLine::Target(t) => {
                assert_eq!(t.name, "M13");
                assert!((t.ra_deg - 250.425).abs() < 1e-2);
                assert!((t.dec_deg - 36.460_278).abs() < 1e-2);
                assert_eq!(t.epoch, 2000);
                assert_eq!(t.exposure_seconds, 1800.0);
                assert_eq!(t.project, "54-199");
                assert!(matches!(t.constraint, ConstraintMode::Airmass { max_airmass } if (max_airmass - 2.0).abs() < 1e-9));
                assert!(!t.fill_slot);
            }
            ParsedLine::Offline(_) => panic!("expected a target"),
        }
    }

    #[test]
    fn test_fill_slot_requires_window_constraint() {
        let (parsed, errors) =
            parse_lines("MON1 20:00:00 -20:00:00 2000 * 54-100 UT[22:00-23:00] Monitor default", &InputDefaults::default());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        match &parsed[0] {
            ParsedLine::Target(t) => {
                assert!(t.fill_slot);
                assert!(matches!(t.constraint, ConstraintMode::UtcWindow { start_hours, end_hours }
                    if (start_hours - 22.0).abs() < 1e-9 && (end_hours - 23.0).abs() < 1e-9));
            }
            _ => panic!("expected a target"),
        }

        let (_, errors) =
            parse_lines("BAD 20:00:00 -20:00:00 2000 * 54-100 2.0 Monitor default", &InputDefaults::default());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_lst_window_parses() {
        let (parsed, errors) =
            parse_lines("TGT2 00:30:00 +10:00:00 2000 900 54-100 LST[23:00-01:00] Staff default", &InputDefaults::default());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        match &parsed[0] {
            ParsedLine::Target(t) => {
                assert!(matches!(t.constraint, ConstraintMode::LstWindow { start_hours, end_hours }
                    if (start_hours - 23.0).abs() < 1e-9 && (end_hours - 1.0).abs() < 1e-9));
            }
            _ => panic!("expected a target"),
        }
    }

    #[test]
    fn test_comment_lines_skipped() {
        let (parsed, errors) = parse_lines("# just a remark\n\n  \n", &InputDefaults::default());
        assert!(parsed.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_offline_line_with_and_without_hash() {
        let (parsed, errors) = parse_lines("Offline UT[01:00-02:30]\n#BadWolf 03:00-03:15", &InputDefaults::default());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(parsed.len(), 2);
        for p in &parsed {
            assert!(matches!(p, ParsedLine::Offline(_)));
        }
        if let ParsedLine::Offline(spec) = &parsed[0] {
            assert!((spec.start_hours - 1.0).abs() < 1e-9);
            assert!((spec.end_hours - 2.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_malformed_line_is_local_and_does_not_abort_remaining_lines() {
        let text = "BADLINE only three fields\nM13 16:41:42 +36:27:37 2000 1800 54-199 2.0 Staff default";
        let (parsed, errors) = parse_lines(text, &InputDefaults::default());
        assert_eq!(errors.len(), 1);
        assert_eq!(parsed.len(), 1);
        assert!(matches!(&parsed[0], ParsedLine::Target(t) if t.name == "M13"));
    }

    #[test]
    fn test_bad_constraint_field_reports_input_error() {
        let text = "T1 01:00:00 +10:00:00 2000 600 proj garbage Staff default";
        let (_, errors) = parse_lines(text, &InputDefaults::default());
        assert_eq!(errors.len(), 1);
        match &errors[0] {
            ScheduleError::InputError { kind, .. } => assert_eq!(kind, "constraints"),
            e => panic!("expected InputError, got {e:?}"),
        }
    }

    #[test]
    fn test_proper_motion_suffix_parses() {
        let text = "PM1 01:00:00.5/0.012 +10:00:00/0.034 2000 600 proj 2.0 Staff default";
        let (parsed, errors) = parse_lines(text, &InputDefaults::default());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        match &parsed[0] {
            ParsedLine::Target(t) => {
                assert!((t.pm_ra_cosdec_arcsec_per_year - 0.012).abs() < 1e-9);
                assert!((t.pm_dec_arcsec_per_year - 0.034).abs() < 1e-9);
            }
            _ => panic!("expected a target"),
        }
    }
}
