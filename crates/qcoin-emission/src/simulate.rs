//! The supply simulator: a bounded epoch loop accumulating yearly issuance.

use chrono::{Duration, NaiveDate};
use tracing::{debug, warn};

use crate::constants::{DAYS_PER_YEAR_X100, FINAL_POINT_GAP_DAYS};
use crate::curve::{SamplePoint, SupplyCurve};
use crate::error::ParameterError;
use crate::params::SimulationParams;
use crate::schedule::years_per_epoch;

/// Date of the `index`-th yearly sample: `start + trunc(index * 365.25)`
/// whole days. Truncation applies to the cumulative offset, so gaps between
/// consecutive samples alternate between 365 and 366 days.
fn sample_date(start: NaiveDate, index: u64) -> NaiveDate {
    let days = index.saturating_mul(DAYS_PER_YEAR_X100) / 100;
    start + Duration::days(days as i64)
}

/// Run the supply simulation.
///
/// Pure and deterministic: identical parameters always produce identical
/// curves. Fails only on invalid parameters; nothing can fail mid-run.
///
/// The outer loop walks halving epochs; the inner loop emits one sample per
/// simulated year. An epoch ends either when its year budget is spent or as
/// soon as the running block count crosses a halving boundary, whichever
/// comes first. Supply is clamped to the cap at every sample, and the
/// returned curve always terminates exactly at the cap.
pub fn simulate(params: &SimulationParams) -> Result<SupplyCurve, ParameterError> {
    params.validate()?;

    let mut total: u64 = 0;
    let mut reward = params.initial_reward;
    let mut blocks: u64 = 0;
    let mut points: Vec<SamplePoint> = Vec::new();
    let mut truncated = false;

    // The reward is integer base units halved by truncating division, so it
    // reaches exact zero after a bounded number of epochs. No float underflow
    // is involved in the exit condition.
    'epochs: while reward > 0 {
        let years = years_per_epoch(params.halving_interval, params.blocks_per_year);

        for _ in 0..years {
            // Safety bound on the horizon. Firing here means the reward
            // decays too slowly to exhaust within the configured window.
            if points.len() as u64 > params.max_years {
                truncated = true;
                break 'epochs;
            }

            let date = sample_date(params.start_date, points.len() as u64);
            let issued = params.blocks_per_year.saturating_mul(reward);
            total = total.saturating_add(issued).min(params.supply_cap);
            points.push(SamplePoint { date, supply: total });

            let crossed = blocks / params.halving_interval;
            blocks = blocks.saturating_add(params.blocks_per_year);
            // End the epoch as soon as a halving boundary was crossed this
            // step, even with year budget left; the next sample must use the
            // halved reward.
            if blocks / params.halving_interval > crossed {
                break;
            }
        }

        reward /= 2;
    }

    if truncated {
        warn!(
            samples = points.len(),
            max_years = params.max_years,
            "simulation truncated before the reward schedule was exhausted"
        );
    }

    // Close the series with one synthetic sample pinned at the cap so the
    // curve always terminates there, whether the schedule exhausted just
    // below it (integer truncation leaves a remainder) or the run was cut
    // short by the safety bound.
    if let Some(last) = points.last().copied() {
        if last.supply < params.supply_cap {
            points.push(SamplePoint {
                date: last.date + Duration::days(FINAL_POINT_GAP_DAYS),
                supply: params.supply_cap,
            });
        }
    }

    debug!(
        samples = points.len(),
        truncated,
        "supply simulation complete"
    );

    Ok(SupplyCurve { points, truncated })
}
