//! # qcoin-emission
//! Supply simulation core for the QCoin emission schedule.

pub mod constants;
pub mod curve;
pub mod error;
pub mod params;
pub mod schedule;
pub mod simulate;

pub use curve::{SamplePoint, SupplyCurve, supply_to_coins};
pub use error::ParameterError;
pub use params::SimulationParams;
pub use simulate::simulate;
