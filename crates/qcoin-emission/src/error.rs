//! Error types for the emission simulator.
use thiserror::Error;

/// Parameter validation failures. The simulator refuses to start on any of
/// these; once parameters validate, a run cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    #[error("initial reward must be positive")] ZeroInitialReward,
    #[error("halving interval must be positive")] ZeroHalvingInterval,
    #[error("blocks per year must be positive")] ZeroBlocksPerYear,
    #[error("supply cap must be positive")] ZeroSupplyCap,
    #[error("max years must be positive")] ZeroMaxYears,
    #[error("simulated horizon ends past the representable date range")] HorizonOutOfRange,
}
