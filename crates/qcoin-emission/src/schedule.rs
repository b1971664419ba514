//! Halving schedule helpers.
//!
//! The per-block reward starts at the configured initial value and halves
//! every `halving_interval` blocks. Rewards are integer base units halved by
//! truncating division, so the schedule reaches exact zero after a bounded
//! number of epochs. With the reference parameters (50 QC initial):
//!
//! - Epoch 0 (heights 0–209,999): 50 QC per block
//! - Epoch 1 (heights 210,000–419,999): 25 QC per block
//! - …
//! - Epoch 32: 1 base unit per block
//! - Epoch 33+: 0 (schedule exhausted)
//!
//! The total scheduled emission is slightly less than twice the epoch-zero
//! emission due to integer truncation in the halving arithmetic.

use crate::constants::MAX_HALVING_EPOCHS;

/// The per-block reward (in base units) for a given halving epoch.
///
/// `epoch_reward(r, 0) == r`, `epoch_reward(r, 1) == r / 2`, etc. Returns 0
/// once truncation yields zero or the epoch hits the shift-overflow guard.
pub fn epoch_reward(initial_reward: u64, epoch: u64) -> u64 {
    if epoch >= MAX_HALVING_EPOCHS {
        return 0;
    }
    initial_reward >> epoch
}

/// Which halving epoch a block height falls in.
///
/// Epoch 0 spans heights `[0, interval)`, epoch 1 spans
/// `[interval, 2 * interval)`, etc.
pub fn halving_epoch(height: u64, interval: u64) -> u64 {
    height / interval
}

/// The first block height of a given halving epoch.
pub fn epoch_start_height(epoch: u64, interval: u64) -> u64 {
    epoch.saturating_mul(interval)
}

/// The height at which the next halving occurs after `height`.
///
/// Returns `None` if the reward at `height` is already zero.
pub fn next_halving_height(initial_reward: u64, interval: u64, height: u64) -> Option<u64> {
    let epoch = halving_epoch(height, interval);
    if epoch_reward(initial_reward, epoch) == 0 {
        return None;
    }
    Some(epoch_start_height(epoch + 1, interval))
}

/// The last halving epoch with a non-zero reward.
pub fn last_reward_epoch(initial_reward: u64) -> u64 {
    for epoch in (0..MAX_HALVING_EPOCHS).rev() {
        if epoch_reward(initial_reward, epoch) > 0 {
            return epoch;
        }
    }
    0
}

/// Number of yearly samples needed to cross one halving interval at the
/// given issuance rate.
pub fn years_per_epoch(interval: u64, blocks_per_year: u64) -> u64 {
    interval.div_ceil(blocks_per_year)
}

/// Total scheduled emission across all epochs, ignoring any cap.
pub fn total_emission(initial_reward: u64, interval: u64) -> u64 {
    let mut total: u64 = 0;
    for epoch in 0..MAX_HALVING_EPOCHS {
        let reward = epoch_reward(initial_reward, epoch);
        if reward == 0 {
            break;
        }
        total = total.saturating_add(reward.saturating_mul(interval));
    }
    total
}
