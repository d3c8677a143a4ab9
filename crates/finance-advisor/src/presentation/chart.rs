//! Chart view-models
//!
//! The core computes everything a chart needs (values, colors, tooltips,
//! axis bounds, geometry); the frontend only draws it.

use std::f64::consts::{FRAC_PI_2, TAU};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use super::format;

/// One wedge of the budget pie
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub label: &'static str,
    pub value: Decimal,
    pub color: &'static str,

    /// Whole-number share of the pie total
    pub share_percent: Decimal,

    /// e.g. `Essential: $500 (50%)`
    pub tooltip: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Build slices from `(label, value)` pairs, coloring by position
    pub fn new(entries: &[(&'static str, Decimal)], palette: &[&'static str]) -> Self {
        let total: Decimal = entries.iter().map(|(_, v)| *v).sum();

        let slices = entries
            .iter()
            .enumerate()
            .map(|(i, &(label, value))| {
                let share_percent = if total.is_zero() {
                    Decimal::ZERO
                } else {
                    (value / total * dec!(100))
                        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                };

                PieSlice {
                    label,
                    value,
                    color: palette[i % palette.len()],
                    share_percent,
                    tooltip: format!(
                        "{label}: {} ({}%)",
                        format::currency(value),
                        format::plain(share_percent)
                    ),
                }
            })
            .collect();

        Self { slices }
    }

    pub fn total(&self) -> Decimal {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// SVG path data for each slice of a pie centered at (`radius`, `radius`)
    ///
    /// Slices start at 12 o'clock and run clockwise. A slice covering the
    /// whole pie is drawn as two half arcs.
    pub fn arc_paths(&self, radius: f64) -> Vec<String> {
        let total = self.total().to_f64().unwrap_or(0.0);
        if total <= 0.0 {
            return vec![String::new(); self.slices.len()];
        }

        let mut start = -FRAC_PI_2;
        self.slices
            .iter()
            .map(|slice| {
                let fraction = slice.value.to_f64().unwrap_or(0.0) / total;
                let sweep = fraction * TAU;
                let path = arc_path(radius, start, sweep);
                start += sweep;
                path
            })
            .collect()
    }
}

fn arc_path(radius: f64, start: f64, sweep: f64) -> String {
    let point = |angle: f64| (radius + radius * angle.cos(), radius + radius * angle.sin());

    if sweep <= 0.0 {
        return String::new();
    }

    if sweep >= TAU - f64::EPSILON {
        let (x0, y0) = point(start);
        let (x1, y1) = point(start + TAU / 2.0);
        return format!(
            "M {x0:.3} {y0:.3} A {radius} {radius} 0 1 1 {x1:.3} {y1:.3} A {radius} {radius} 0 1 1 {x0:.3} {y0:.3} Z"
        );
    }

    let (x0, y0) = point(start);
    let (x1, y1) = point(start + sweep);
    let large_arc = u8::from(sweep > TAU / 2.0);
    format!(
        "M {radius} {radius} L {x0:.3} {y0:.3} A {radius} {radius} 0 {large_arc} 1 {x1:.3} {y1:.3} Z"
    )
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: Decimal,
    pub tooltip: String,
}

/// Single-series vertical bar chart, y axis starting at zero
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub series_label: &'static str,
    pub color: &'static str,
    pub bars: Vec<Bar>,

    /// Fixed upper bound for the y axis; derived from the data when `None`
    pub y_max: Option<Decimal>,
}

impl BarChart {
    /// `suffix` is appended to each value in its tooltip (`%` for yields)
    pub fn new(
        title: impl Into<String>,
        series_label: &'static str,
        color: &'static str,
        points: impl IntoIterator<Item = (String, Decimal)>,
        suffix: &str,
    ) -> Self {
        let bars = points
            .into_iter()
            .map(|(label, value)| Bar {
                tooltip: format!("{series_label}: {}{suffix}", format::plain(value)),
                label,
                value,
            })
            .collect();

        Self {
            title: title.into(),
            series_label,
            color,
            bars,
            y_max: None,
        }
    }

    #[must_use]
    pub const fn with_max(mut self, y_max: Decimal) -> Self {
        self.y_max = Some(y_max);
        self
    }

    /// Upper bound of the y axis
    pub fn axis_max(&self) -> Decimal {
        if let Some(max) = self.y_max {
            return max;
        }

        let highest = self
            .bars
            .iter()
            .map(|b| b.value)
            .max()
            .unwrap_or(Decimal::ZERO);

        if highest <= Decimal::ZERO {
            Decimal::ONE
        } else {
            highest.ceil()
        }
    }

    /// Bar height as a fraction of the plot area, clamped to [0, 1]
    pub fn height_fraction(&self, value: Decimal) -> f64 {
        let max = self.axis_max();
        let fraction = (value / max).to_f64().unwrap_or(0.0);
        fraction.clamp(0.0, 1.0)
    }

    /// Evenly spaced y axis tick values from zero to `axis_max`
    pub fn ticks(&self, count: u32) -> Vec<Decimal> {
        let count = count.max(1);
        let step = self.axis_max() / Decimal::from(count);
        (0..=count)
            .map(|i| (step * Decimal::from(i)).round_dp(1).normalize())
            .collect()
    }
}
