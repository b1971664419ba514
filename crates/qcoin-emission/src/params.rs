//! Simulation parameters.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{
    BLOCKS_PER_YEAR, DAYS_PER_YEAR_X100, DEFAULT_MAX_YEARS, FINAL_POINT_GAP_DAYS,
    HALVING_INTERVAL, INITIAL_REWARD, SUPPLY_CAP,
};
use crate::error::ParameterError;

/// Immutable inputs to a simulation run. Monetary fields are in base units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Per-block reward at genesis.
    pub initial_reward: u64,
    /// Blocks between reward halvings.
    pub halving_interval: u64,
    /// Fixed issuance rate converting block counts to calendar time.
    pub blocks_per_year: u64,
    /// Epoch of the simulation; date of the first sample.
    pub start_date: NaiveDate,
    /// Maximum total supply ever reported.
    pub supply_cap: u64,
    /// Hard stop on the simulated horizon, in yearly samples.
    pub max_years: u64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            initial_reward: INITIAL_REWARD,
            halving_interval: HALVING_INTERVAL,
            blocks_per_year: BLOCKS_PER_YEAR,
            start_date: genesis_date(),
            supply_cap: SUPPLY_CAP,
            max_years: DEFAULT_MAX_YEARS,
        }
    }
}

impl SimulationParams {
    /// Fail fast before any simulation begins: all numeric parameters must
    /// be positive and every date the run could emit (through the horizon
    /// plus the synthetic closing sample) must be representable. Nothing can
    /// fail mid-run once this passes.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.initial_reward == 0 {
            return Err(ParameterError::ZeroInitialReward);
        }
        if self.halving_interval == 0 {
            return Err(ParameterError::ZeroHalvingInterval);
        }
        if self.blocks_per_year == 0 {
            return Err(ParameterError::ZeroBlocksPerYear);
        }
        if self.supply_cap == 0 {
            return Err(ParameterError::ZeroSupplyCap);
        }
        if self.max_years == 0 {
            return Err(ParameterError::ZeroMaxYears);
        }
        if self.final_possible_date().is_none() {
            return Err(ParameterError::HorizonOutOfRange);
        }
        Ok(())
    }

    /// The latest date the simulation can ever emit: the horizon's last
    /// yearly sample plus the synthetic closing sample's offset. `None` when
    /// that date is not representable, in which case a run could not be
    /// completed without overflowing the calendar.
    fn final_possible_date(&self) -> Option<NaiveDate> {
        let horizon_days = self
            .max_years
            .saturating_add(1)
            .saturating_mul(DAYS_PER_YEAR_X100)
            / 100;
        let days = i64::try_from(horizon_days)
            .ok()?
            .checked_add(FINAL_POINT_GAP_DAYS)?;
        self.start_date.checked_add_signed(Duration::days(days))
    }
}

/// 2009-01-03, the genesis date of the reference scenario.
pub fn genesis_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2009, 1, 3).expect("hardcoded date is valid")
}
