//! Emission constants. All monetary values in base units (1 QC = 10^8 base units).

pub const COIN: u64 = 100_000_000;

/// Maximum cumulative supply the simulator ever reports.
pub const SUPPLY_CAP: u64 = 21_000_000 * COIN;

pub const INITIAL_REWARD: u64 = 50 * COIN;
pub const HALVING_INTERVAL: u64 = 210_000;

/// Fixed issuance rate used to convert block counts to calendar time:
/// 6 blocks/hour * 24 hours * 365 days.
pub const BLOCKS_PER_YEAR: u64 = 52_560;

/// Default hard stop on the simulated horizon, in yearly samples.
pub const DEFAULT_MAX_YEARS: u64 = 200;

/// Model year length in hundredths of a day (365.25 days). Sample dates are
/// `start + samples * DAYS_PER_YEAR_X100 / 100` whole days, so truncation
/// applies to the cumulative offset rather than per step.
pub const DAYS_PER_YEAR_X100: u64 = 36_525;

/// Offset of the synthetic closing sample pinned at the cap: four 365-day
/// years past the last simulated sample.
pub const FINAL_POINT_GAP_DAYS: i64 = 4 * 365;

/// Shift-overflow guard: rewards at or past this many halvings are zero.
pub const MAX_HALVING_EPOCHS: u64 = 64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_zero_emission() {
        assert_eq!(INITIAL_REWARD * HALVING_INTERVAL, 10_500_000 * COIN);
    }

    #[test]
    fn blocks_per_year_is_six_per_hour() {
        assert_eq!(BLOCKS_PER_YEAR, 6 * 24 * 365);
    }

    #[test]
    fn model_year_is_365_25_days() {
        assert_eq!(DAYS_PER_YEAR_X100, 36_525);
        assert_eq!(DAYS_PER_YEAR_X100 / 100, 365);
    }
}
