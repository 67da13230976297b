//! Greedy placement and local-search optimization of a night's observing
//! schedule.
//!
//! A schedule is a set of `(target, start, end)` triples maintained as
//! `scheduled`/`scheduled_start`/`scheduled_end` fields directly on each
//! [`Target`](crate::target::Target). The ordering strategies and local
//! search passes below are independent, composable steps over a
//! `&mut [Target]` slice, in the spirit of this corpus's trait-based
//! constraint-checking greedy selectors, adapted here to contiguous-interval
//! placement rather than unordered subset selection.

use serde::{Deserialize, Serialize};

use crate::night::Night;
use crate::target::Target;

/// Ordering strategy for `plan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderingStrategy {
    /// Preserve the user-supplied order of schedulable targets.
    InOriginalOrder,
    /// Sort by ascending `last_possible_time`, then apply neighbor
    /// interchange (opt-B) after placement.
    InOrderOfSetting,
}

/// Per-schedule-run statistics (§6 of the governing design).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScheduleStatistics {
    /// Sunset to sunrise, seconds.
    pub night_length_sec: f64,
    /// Evening astronomical twilight to morning astronomical twilight, seconds.
    pub dark_time_sec: f64,
    /// Total seconds occupied by scheduled targets.
    pub scheduled_sec: f64,
    /// Seconds lost to offline intervals, clipped to [evening nautical, morning nautical] twilight.
    pub offline_lost_sec: f64,
    /// Remaining free seconds in the night.
    pub free_sec: f64,
}

fn exposure_days(target: &Target) -> f64 {
    target.exposure_grid / 86400.0
}

/// `canSchedule(target, t)`: true iff placing `target` at `t` neither
/// overlaps any other currently-scheduled target nor falls outside every
/// allowed interval of `target` itself.
pub fn can_schedule(targets: &[Target], index: usize, t: f64) -> bool {
    let target = &targets[index];
    let t_end = t + exposure_days(target);

    for (i, other) in targets.iter().enumerate() {
        if i == index || !other.scheduled {
            continue;
        }
        let overlap = t < other.scheduled_end && t_end > other.scheduled_start;
        if overlap {
            return false;
        }
    }

    target
        .allowed_intervals
        .iter()
        .any(|&(begin, end)| begin <= t && t_end <= end)
}

fn place(target: &mut Target, _night: &Night, start: f64) {
    target.scheduled = true;
    target.scheduled_start = start;
    target.scheduled_end = start + exposure_days(target);
    target.scheduled_mid = 0.5 * (target.scheduled_start + target.scheduled_end);
}

/// Clears `scheduled` on every non-observed target, preserving pinned
/// (`observed = true`) targets' recorded slots (S4).
fn reset_unobserved(targets: &mut [Target]) {
    for t in targets.iter_mut() {
        if !t.observed {
            t.scheduled = false;
        } else {
            t.scheduled = true;
            t.scheduled_start = t.observed_start;
            t.scheduled_end = t.observed_end;
            t.scheduled_mid = 0.5 * (t.observed_start + t.observed_end);
        }
    }
}

fn place_fill_slots(targets: &mut [Target], night: &Night) {
    for t in targets.iter_mut() {
        if t.fill_slot && !t.observed {
            let start = t.restriction_min_ut;
            place(t, night, start);
        }
    }
}

fn ordering_indices(targets: &[Target], strategy: OrderingStrategy) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..targets.len())
        .filter(|&i| !targets[i].fill_slot && !targets[i].observed && targets[i].observable_tonight)
        .collect();

    if strategy == OrderingStrategy::InOrderOfSetting {
        indices.sort_by(|&a, &b| {
            let la = targets[a].last_possible_time.unwrap_or(f64::INFINITY);
            let lb = targets[b].last_possible_time.unwrap_or(f64::INFINITY);
            la.partial_cmp(&lb).unwrap()
        });
    }
    indices
}

/// Greedy placement pass shared by `plan`, `update_schedule`, and
/// `schedule_and_optimize_given_order`: advance a cursor, try each unplaced
/// target in `order` at the cursor, place the first that fits, and advance
/// the cursor by the exposure of whichever target was just placed (or one
/// grid step when nothing fits).
fn greedy_pass(targets: &mut [Target], night: &Night, order: &[usize], starting_at: f64) {
    let max_last = order
        .iter()
        .filter_map(|&i| targets[i].last_possible_time)
        .fold(f64::NEG_INFINITY, f64::max);

    let min_first = order
        .iter()
        .filter_map(|&i| targets[i].first_possible_time)
        .fold(f64::INFINITY, f64::min);

    let mut t = if min_first.is_finite() { starting_at.max(min_first) } else { starting_at };

    let mut remaining: Vec<usize> = order.to_vec();

    while t < max_last && !remaining.is_empty() {
        let mut placed_exposure: Option<f64> = None;
        remaining.retain(|&i| {
            if targets[i].scheduled {
                return false;
            }
            if placed_exposure.is_none() && can_schedule(targets, i, t) {
                place(&mut targets[i], night, t);
                placed_exposure = Some(exposure_days(&targets[i]));
                return false;
            }
            true
        });

        match placed_exposure {
            Some(exposure) => t += exposure,
            None => t += night.xstep,
        }
    }
}

/// `plan(starting_at)`: schedule from scratch.
pub fn plan(targets: &mut Vec<Target>, night: &Night, strategy: OrderingStrategy, starting_at: f64) {
    reset_unobserved(targets);
    place_fill_slots(targets, night);

    let order = ordering_indices(targets, strategy);
    greedy_pass(targets, night, &order, starting_at.max(night.sunset));

    opt_a(targets, night);
    if strategy == OrderingStrategy::InOrderOfSetting {
        opt_b(targets, night);
    }

    reorder_display(targets);
}

/// `updateSchedule(starting_at)`: in-night partial replan. Keeps observed
/// targets pinned, re-greedy-places the rest from `starting_at`, and skips
/// the optimization passes (in-night updates preserve user intent).
pub fn update_schedule(targets: &mut Vec<Target>, night: &Night, strategy: OrderingStrategy, starting_at: f64) {
    for t in targets.iter_mut() {
        if !t.observed {
            t.scheduled = false;
        }
    }
    place_fill_slots(targets, night);

    let order = ordering_indices(targets, strategy);
    let clipped_start = starting_at.clamp(night.sunset, night.sunrise);
    greedy_pass(targets, night, &order, clipped_start);

    reorder_display(targets);
}

/// `scheduleAndOptimize_givenOrder(user_order)`: drag-drop reorder. Places
/// each target in `user_order` at the earliest feasible time at or after the
/// advancing cursor, then applies only opt-A (no cross-target swaps).
pub fn schedule_and_optimize_given_order(targets: &mut Vec<Target>, night: &Night, user_order: &[usize]) {
    reset_unobserved(targets);
    place_fill_slots(targets, night);

    let mut cursor = night.sunset;
    for &i in user_order {
        if targets[i].fill_slot || targets[i].observed || !targets[i].observable_tonight {
            continue;
        }
        let mut t = cursor;
        let last = targets[i].last_possible_time.unwrap_or(night.sunrise);
        while t < last {
            if can_schedule(targets, i, t) {
                place(&mut targets[i], night, t);
                cursor = targets[i].scheduled_end;
                break;
            }
            t += night.xstep;
        }
    }

    opt_a(targets, night);
    reorder_display(targets);
}

/// opt-A: rightward shift for rising targets. For each scheduled,
/// non-pinned target still rising at its scheduled start (`zenith_time >
/// scheduled_start`), search later candidate start times — bounded by the
/// next neighbor's start, sunrise, `last_possible_time`, and the point past
/// which the target would be setting rather than rising at mid-exposure —
/// and move to whichever feasible candidate yields the highest mid-exposure
/// altitude. Altitude never decreases as a result.
fn opt_a(targets: &mut [Target], night: &Night) {
    let mut order: Vec<usize> = (0..targets.len()).filter(|&i| targets[i].scheduled).collect();
    order.sort_by(|&a, &b| targets[a].scheduled_start.partial_cmp(&targets[b].scheduled_start).unwrap());

    for pos in (0..order.len()).rev() {
        let i = order[pos];
        if targets[i].observed || targets[i].fill_slot {
            continue;
        }
        if targets[i].zenith_time <= targets[i].scheduled_start {
            continue;
        }

        let next_neighbor_start = order.get(pos + 1).map(|&j| targets[j].scheduled_start).unwrap_or(night.sunrise);
        let last_possible = targets[i].last_possible_time.unwrap_or(night.sunrise);
        let symmetric_limit = night.sunset
            + (night.xstep
                * ((2.0 * targets[i].zenith_time - targets[i].scheduled_mid - night.sunset) / night.xstep).floor());

        let upper_bound = next_neighbor_start.min(night.sunrise).min(last_possible).min(symmetric_limit);
        let current_start = targets[i].scheduled_start;

        if upper_bound <= current_start {
            continue;
        }

        let mut best_start = current_start;
        let mut best_alt = mid_exposure_altitude(&targets[i], night, current_start);

        let mut candidate = upper_bound;
        while candidate > current_start {
            if can_schedule(targets, i, candidate) {
                let alt = mid_exposure_altitude(&targets[i], night, candidate);
                if alt >= best_alt {
                    best_alt = alt;
                    best_start = candidate;
                    break; // descending search: first feasible candidate is the highest-altitude one
                }
            }
            candidate -= night.xstep;
        }

        if best_start != current_start {
            place(&mut targets[i], night, best_start);
        }
    }
}

/// Interpolates a target's `graph[]` altitude at the mid-exposure time that
/// would result from starting at `start`.
fn mid_exposure_altitude(target: &Target, night: &Night, start: f64) -> f64 {
    let mid = start + 0.5 * exposure_days(target);
    interpolate_graph(target, night, mid)
}

/// Looks up a target's `graph[]` altitude at time `t` via the night's own
/// grid indexing, the same index space `graph[]` was populated against.
fn interpolate_graph(target: &Target, night: &Night, t: f64) -> f64 {
    if target.graph.is_empty() {
        return f64::NEG_INFINITY;
    }
    target.graph[night.nearest_index(t)]
}

/// opt-B: single-pass adjacent interchange. For each consecutive pair of
/// non-pinned scheduled targets, swaps them if doing so strictly raises the
/// weaker (lower mid-exposure altitude) of the two, and both resulting
/// placements remain feasible.
fn opt_b(targets: &mut [Target], night: &Night) {
    let mut order: Vec<usize> = (0..targets.len()).filter(|&i| targets[i].scheduled).collect();
    order.sort_by(|&a, &b| targets[a].scheduled_start.partial_cmp(&targets[b].scheduled_start).unwrap());

    for w in 0..order.len().saturating_sub(1) {
        let a = order[w];
        let b = order[w + 1];
        if targets[a].observed || targets[a].fill_slot || targets[b].observed || targets[b].fill_slot {
            continue;
        }

        let am_a = mid_exposure_altitude(&targets[a], night, targets[a].scheduled_start);
        let am_b = mid_exposure_altitude(&targets[b], night, targets[b].scheduled_start);

        let a_start = targets[a].scheduled_start;
        let b_exposure = exposure_days(&targets[b]);
        let a_exposure = exposure_days(&targets[a]);

        let hypothetical_a_start = a_start + b_exposure;
        let hypothetical_b_start = a_start;

        let am_a_prime = interpolate_graph(&targets[a], night, hypothetical_a_start + 0.5 * a_exposure);
        let am_b_prime = interpolate_graph(&targets[b], night, hypothetical_b_start + 0.5 * b_exposure);

        let current_min = am_a.min(am_b);
        let swapped_min = am_a_prime.min(am_b_prime);

        if swapped_min > current_min {
            // Tentatively swap and verify feasibility of both new placements.
            let (old_a_start, old_a_end) = (targets[a].scheduled_start, targets[a].scheduled_end);
            let (old_b_start, old_b_end) = (targets[b].scheduled_start, targets[b].scheduled_end);

            targets[b].scheduled_start = hypothetical_b_start;
            targets[b].scheduled_end = hypothetical_b_start + b_exposure;
            targets[a].scheduled_start = hypothetical_a_start;
            targets[a].scheduled_end = hypothetical_a_start + a_exposure;

            let a_ok = targets[a]
                .allowed_intervals
                .iter()
                .any(|&(begin, end)| begin <= targets[a].scheduled_start && targets[a].scheduled_end <= end);
            let b_ok = targets[b]
                .allowed_intervals
                .iter()
                .any(|&(begin, end)| begin <= targets[b].scheduled_start && targets[b].scheduled_end <= end);

            if a_ok && b_ok {
                targets[a].scheduled_mid = 0.5 * (targets[a].scheduled_start + targets[a].scheduled_end);
                targets[b].scheduled_mid = 0.5 * (targets[b].scheduled_start + targets[b].scheduled_end);
            } else {
                targets[a].scheduled_start = old_a_start;
                targets[a].scheduled_end = old_a_end;
                targets[b].scheduled_start = old_b_start;
                targets[b].scheduled_end = old_b_end;
            }
        }
    }
}

/// Recomputes display order: ascending by `scheduled_start` for scheduled
/// targets; unscheduled targets keep their relative original order,
/// appended after.
fn reorder_display(targets: &mut Vec<Target>) {
    let mut indexed: Vec<(usize, Target)> = targets.drain(..).enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| match (a.scheduled, b.scheduled) {
        (true, true) => a.scheduled_start.partial_cmp(&b.scheduled_start).unwrap(),
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        (false, false) => ia.cmp(ib),
    });
    targets.extend(indexed.into_iter().map(|(_, t)| t));
}

/// Computes night/schedule statistics (§6): night length, dark time,
/// scheduled seconds, offline-lost seconds (clipped to the nautical
/// twilight bounds), and free seconds.
pub fn compute_statistics(targets: &[Target], night: &Night, offline_intervals: &[(f64, f64)]) -> ScheduleStatistics {
    let scheduled_sec: f64 = targets
        .iter()
        .filter(|t| t.scheduled)
        .map(|t| (t.scheduled_end - t.scheduled_start) * 86400.0)
        .sum();

    let offline_lost_sec: f64 = offline_intervals
        .iter()
        .map(|&(s, e)| {
            let clipped_start = s.max(night.e_nau_twilight);
            let clipped_end = e.min(night.m_nau_twilight);
            (clipped_end - clipped_start).max(0.0) * 86400.0
        })
        .sum();

    let night_length_sec = night.night_length_sec();
    let dark_time_sec = night.dark_time_sec();
    let free_sec = (night_length_sec - scheduled_sec - offline_lost_sec).max(0.0);

    ScheduleStatistics { night_length_sec, dark_time_sec, scheduled_sec, offline_lost_sec, free_sec }
}

/// Per-project scheduled seconds, sorted ascending by total time.
pub fn per_project_seconds(targets: &[Target]) -> Vec<(String, f64)> {
    use std::collections::BTreeMap;
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for t in targets.iter().filter(|t| t.scheduled) {
        *totals.entry(t.project.clone()).or_insert(0.0) += (t.scheduled_end - t.scheduled_start) * 86400.0;
    }
    let mut v: Vec<(String, f64)> = totals.into_iter().collect();
    v.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
    v
}
