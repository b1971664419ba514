//! Chart model: pure scaling of a supply curve into plottable series.
//!
//! Axis bounds, year labels, millions scaling, and the cap reference line
//! are computed here, independent of any terminal, so the renderer itself
//! stays a thin widget wrapper.

use chrono::{Datelike, NaiveDate};
use qcoin_emission::{SupplyCurve, supply_to_coins};

/// Everything the terminal renderer needs to draw the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    /// Supply series as (fractional year, millions of QC).
    pub series: Vec<(f64, f64)>,
    /// Endpoints of the horizontal cap reference line.
    pub cap_line: [(f64, f64); 2],
    /// The cap in millions of QC.
    pub cap_millions: f64,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
}

/// A calendar date as a fractional year, for x-axis placement.
fn year_fraction(date: NaiveDate) -> f64 {
    date.year() as f64 + date.ordinal0() as f64 / 365.25
}

/// Base units to millions of QC.
fn millions(base_units: u64) -> f64 {
    supply_to_coins(base_units) / 1_000_000.0
}

impl ChartModel {
    /// Scale a finished curve into chart coordinates. Returns `None` for an
    /// empty curve.
    pub fn build(curve: &SupplyCurve, supply_cap: u64) -> Option<ChartModel> {
        let first = curve.first_date()?;
        let last = curve.last_date()?;

        let x0 = year_fraction(first).floor();
        let mut x1 = year_fraction(last).ceil();
        if x1 <= x0 {
            x1 = x0 + 1.0;
        }

        let series: Vec<(f64, f64)> = curve
            .points
            .iter()
            .map(|p| (year_fraction(p.date), millions(p.supply)))
            .collect();

        let cap_millions = millions(supply_cap);
        // Headroom above the cap so the reference line sits inside the frame.
        let y_max = cap_millions * 1.025;

        let x_labels = (0..=4)
            .map(|i| format!("{:.0}", x0 + (x1 - x0) * f64::from(i) / 4.0))
            .collect();
        let y_labels = vec![
            "0".to_string(),
            format!("{:.1}", cap_millions / 2.0),
            format!("{cap_millions:.1}"),
        ];

        Some(ChartModel {
            series,
            cap_line: [(x0, cap_millions), (x1, cap_millions)],
            cap_millions,
            x_bounds: [x0, x1],
            y_bounds: [0.0, y_max],
            x_labels,
            y_labels,
        })
    }
}
