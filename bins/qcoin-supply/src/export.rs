//! Series export: JSON and CSV writers over a finished curve.

use std::fmt::Write as _;

use anyhow::Result;
use clap::ValueEnum;
use qcoin_emission::{SupplyCurve, supply_to_coins};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
}

/// Render the curve in the requested format.
pub fn render(curve: &SupplyCurve, format: Format) -> Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(curve)?),
        Format::Csv => Ok(to_csv(curve)),
    }
}

fn to_csv(curve: &SupplyCurve) -> String {
    let mut out = String::from("date,supply_qc\n");
    for p in &curve.points {
        let _ = writeln!(out, "{},{:.8}", p.date, supply_to_coins(p.supply));
    }
    out
}
