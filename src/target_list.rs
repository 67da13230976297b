//! Target set management (§4.6): constructs and precomputes `Target`s from
//! parsed input, runs that precomputation in parallel across targets the
//! way this crate's `location_optimized`/`transforms` batch helpers use
//! Rayon, and classifies an incoming line set against the currently held
//! targets for incremental re-plan.

use rayon::prelude::*;

use crate::error::ScheduleResult;
use crate::fk4::fk4_b1950_to_fk5_j2000;
use crate::input::{OfflineSpec, TargetRecord};
use crate::night::Night;
use crate::site::Site;
use crate::target::{anchor_utc_hour_to_night, ExtraInfo, Target};

/// What `prepare_schedule_for_update` says the caller should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplanAction {
    /// Nothing changed: the existing schedule is still valid as-is.
    Unchanged,
    /// At least one observed (pinned) target survived; replan from now,
    /// leaving pinned targets where they are.
    MidnightReplan,
    /// Targets were updated or removed with nothing pinned: replan the
    /// whole night from scratch.
    FullReplan,
    /// Only additions, nothing updated or removed: the new targets need
    /// precomputation, then a full replan.
    AddedOnly,
}

/// Owns the targets built against one `Night`, plus the site-wide offline
/// intervals (converted to absolute MJD) that its constraint evaluation
/// uses.
#[derive(Debug, Clone, Default)]
pub struct TargetList {
    pub targets: Vec<Target>,
    offline_intervals: Vec<(f64, f64)>,
}

impl TargetList {
    pub fn new() -> Self {
        TargetList { targets: Vec::new(), offline_intervals: Vec::new() }
    }

    /// Anchors site-wide offline windows to this night's calendar date and
    /// clips them to `[sunset, sunrise]`, the same way a target's `UT[...]`
    /// window is anchored. Call before `set_targets`/`add_targets`/
    /// `prepare_schedule_for_update` so precomputation sees the windows.
    pub fn set_offline_intervals(&mut self, specs: &[OfflineSpec], night: &Night) {
        self.offline_intervals = specs
            .iter()
            .map(|spec| {
                let start = anchor_utc_hour_to_night(spec.start_hours, night);
                let mut end = anchor_utc_hour_to_night(spec.end_hours, night);
                if end < start {
                    end += 1.0;
                }
                (start.max(night.sunset), end.min(night.sunrise))
            })
            .collect();
    }

    pub fn offline_intervals(&self) -> &[(f64, f64)] {
        &self.offline_intervals
    }

    /// Replaces the whole target set: constructs and precomputes each
    /// target from scratch. Altitude-curve precomputation runs in parallel
    /// across targets (Rayon `par_iter_mut`), mirroring
    /// [`crate::transforms::ra_dec_to_alt_az_batch_parallel`]; the Scheduler
    /// pass that follows this stays single-threaded.
    pub fn set_targets(&mut self, records: Vec<TargetRecord>, night: &Night, site: &Site) -> ScheduleResult<()> {
        let mut targets = build_targets(records)?;
        precompute_all(&mut targets, night, site, &self.offline_intervals)?;
        self.targets = targets;
        Ok(())
    }

    /// Appends new targets, precomputed in parallel, without disturbing
    /// the existing ones.
    pub fn add_targets(&mut self, records: Vec<TargetRecord>, night: &Night, site: &Site) -> ScheduleResult<()> {
        let mut new_targets = build_targets(records)?;
        precompute_all(&mut new_targets, night, site, &self.offline_intervals)?;
        self.targets.extend(new_targets);
        Ok(())
    }

    /// Classifies `new_records` against the currently held targets (§4.6)
    /// and updates `self.targets` in place:
    ///
    /// - **Unchanged**: a target's [`Target::reconstructed_input`] exactly
    ///   matches a new record's [`TargetRecord::reconstructed_input`] — left
    ///   untouched.
    /// - **Updated**: same identity (name/coordinates/epoch) as a new
    ///   record, but other fields differ — `Target::apply_update` is
    ///   applied and the target is re-precomputed.
    /// - **Reinserting**: an observed (pinned) target has no matching new
    ///   record — kept as-is, since its slot is already history.
    /// - **Deleting**: a non-observed target has no matching new record —
    ///   dropped.
    /// - **Adding**: a new record matches no existing target — constructed
    ///   and precomputed.
    ///
    /// Returns the re-plan action the caller should take. A target list
    /// with any reinserting (pinned, already-observed) target implies the
    /// night is already underway, so that case always yields
    /// `MidnightReplan` even if other targets were also updated or removed.
    pub fn prepare_schedule_for_update(
        &mut self,
        new_records: Vec<TargetRecord>,
        night: &Night,
        site: &Site,
    ) -> ScheduleResult<ReplanAction> {
        let mut pool: Vec<Option<TargetRecord>> = new_records.into_iter().map(Some).collect();

        let mut any_updated = false;
        let mut any_added = false;
        let mut any_deleted = false;
        let mut any_reinserting = false;

        let mut kept = Vec::with_capacity(self.targets.len());

        for mut existing in self.targets.drain(..) {
            let full_key = existing.reconstructed_input();
            let identity = existing.identity_key();

            if let Some(idx) =
                pool.iter().position(|slot| slot.as_ref().map(|r| r.reconstructed_input()) == Some(full_key.clone()))
            {
                pool[idx] = None;
                kept.push(existing);
                continue;
            }

            let same_identity = |r: &TargetRecord| (r.name.clone(), r.input_ra.clone(), r.input_dec.clone(), r.epoch) == identity;
            if let Some(idx) = pool.iter().position(|slot| slot.as_ref().map(same_identity).unwrap_or(false)) {
                let record = pool[idx].take().unwrap();
                existing.apply_update(record)?;
                existing.pre_compute(night, site, &self.offline_intervals)?;
                any_updated = true;
                kept.push(existing);
                continue;
            }

            if existing.observed {
                any_reinserting = true;
                kept.push(existing);
            } else {
                any_deleted = true;
            }
        }

        let mut added = build_targets(pool.into_iter().flatten().collect())?;
        if !added.is_empty() {
            any_added = true;
            precompute_all(&mut added, night, site, &self.offline_intervals)?;
        }

        self.targets = kept;
        self.targets.extend(added);

        if !any_updated && !any_added && !any_deleted && !any_reinserting {
            return Ok(ReplanAction::Unchanged);
        }
        if any_reinserting {
            return Ok(ReplanAction::MidnightReplan);
        }
        if any_added && !any_updated && !any_deleted {
            return Ok(ReplanAction::AddedOnly);
        }
        Ok(ReplanAction::FullReplan)
    }
}

/// Builds uninitialized `Target`s from parsed records, applying FK4
/// (B1950.0) → FK5 (J2000.0) conversion for `epoch == 1950` catalogue
/// positions. Does not precompute — call [`precompute_all`] (or
/// `Target::pre_compute`) once a `Night` exists.
fn build_targets(records: Vec<TargetRecord>) -> ScheduleResult<Vec<Target>> {
    records.into_iter().map(build_target).collect()
}

fn build_target(record: TargetRecord) -> ScheduleResult<Target> {
    let (ra_j2000_deg, dec_j2000_deg) =
        if record.epoch == 1950 { fk4_b1950_to_fk5_j2000(record.ra_deg, record.dec_deg)? } else { (record.ra_deg, record.dec_deg) };

    let pm_ra_rad_per_year = Target::pm_ra_rad_per_year_from_cosdec(record.pm_ra_cosdec_arcsec_per_year, dec_j2000_deg);

    Ok(Target {
        name: record.name,
        input_ra: record.input_ra,
        input_dec: record.input_dec,
        epoch: record.epoch,
        ra_j2000_deg,
        dec_j2000_deg,
        pm_ra_cosdec_arcsec_per_year: record.pm_ra_cosdec_arcsec_per_year,
        pm_dec_arcsec_per_year: record.pm_dec_arcsec_per_year,
        pm_ra_rad_per_year,
        exposure_seconds: record.exposure_seconds,
        exposure_grid: record.exposure_seconds,
        project: record.project,
        observation_type: record.observation_type,
        constraint: record.constraint,
        fill_slot: record.fill_slot,
        extra_info: record.extra_info,
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
    })
}

fn precompute_all(targets: &mut [Target], night: &Night, site: &Site, offline_intervals: &[(f64, f64)]) -> ScheduleResult<()> {
    targets.par_iter_mut().try_for_each(|t| t.pre_compute(night, site, offline_intervals))
}
