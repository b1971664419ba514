//! Simulation output: yearly supply samples.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::COIN;

/// One yearly sample of the cumulative supply, in base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub date: NaiveDate,
    pub supply: u64,
}

/// The finished, immutable output of a simulation run.
///
/// Points are ordered by increasing date, `supply` is non-decreasing across
/// the sequence, and the final point equals the configured cap exactly.
/// `truncated` is set when the safety bound on the horizon fired before the
/// reward schedule was exhausted; the series then ends with the synthetic
/// cap sample but the simulated portion is deliberately incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyCurve {
    pub points: Vec<SamplePoint>,
    pub truncated: bool,
}

impl SupplyCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Supply reported by the final sample, in base units.
    pub fn final_supply(&self) -> Option<u64> {
        self.points.last().map(|p| p.supply)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }
}

/// Convert base units to whole coins for display.
pub fn supply_to_coins(base_units: u64) -> f64 {
    base_units as f64 / COIN as f64
}
