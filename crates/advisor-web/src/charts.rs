//! SVG chart widgets
//!
//! Each widget is rebuilt from its view-model on every render; nothing is
//! updated in place.

use finance_advisor::presentation::{BarChart, PieChart, format};
use leptos::prelude::*;

const PIE_RADIUS: f64 = 90.0;

const BAR_WIDTH: f64 = 420.0;
const BAR_HEIGHT: f64 = 260.0;
const PAD_LEFT: f64 = 36.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 48.0;
const TICK_COUNT: u32 = 5;

#[component]
pub fn PieChartView(chart: PieChart) -> impl IntoView {
    let hovered = RwSignal::new(None::<String>);
    let size = format!("0 0 {0} {0}", PIE_RADIUS * 2.0);

    let wedges = chart
        .arc_paths(PIE_RADIUS)
        .into_iter()
        .zip(chart.slices.iter().cloned())
        .map(|(path, slice)| {
            let tooltip = slice.tooltip.clone();
            view! {
                <path
                    d=path
                    fill=slice.color
                    stroke="#ffffff"
                    stroke-width="1"
                    on:mouseenter=move |_| hovered.set(Some(tooltip.clone()))
                    on:mouseleave=move |_| hovered.set(None)
                />
            }
        })
        .collect_view();

    let legend = chart
        .slices
        .into_iter()
        .map(|slice| {
            view! {
                <li>
                    <span class="swatch" style=format!("background-color: {}", slice.color)></span>
                    {slice.label}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="chart pie-chart">
            <svg viewBox=size class="chart-canvas">
                {wedges}
            </svg>
            <ul class="legend">{legend}</ul>
            <p class="tooltip">{move || hovered.get().unwrap_or_default()}</p>
        </div>
    }
}

#[component]
pub fn BarChartView(chart: BarChart) -> impl IntoView {
    let hovered = RwSignal::new(None::<String>);

    let plot_w = BAR_WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_h = BAR_HEIGHT - PAD_TOP - PAD_BOTTOM;
    let baseline = PAD_TOP + plot_h;

    let ticks = chart.ticks(TICK_COUNT);
    let axis_max = chart.axis_max();
    let grid = ticks
        .into_iter()
        .map(|tick| {
            let fraction = chart.height_fraction(tick);
            let y = format!("{:.1}", baseline - fraction * plot_h);
            view! {
                <g class="tick">
                    <line
                        x1=PAD_LEFT.to_string()
                        x2=(BAR_WIDTH - PAD_RIGHT).to_string()
                        y1=y.clone()
                        y2=y.clone()
                        stroke="#e0e0e0"
                    />
                    <text x=(PAD_LEFT - 6.0).to_string() y=y text-anchor="end" font-size="10">
                        {format::plain(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    #[allow(clippy::cast_precision_loss)]
    let slot = plot_w / chart.bars.len().max(1) as f64;
    let bars = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            #[allow(clippy::cast_precision_loss)]
            let x = PAD_LEFT + slot * i as f64;
            let height = chart.height_fraction(bar.value) * plot_h;
            let tooltip = bar.tooltip.clone();
            view! {
                <g class="bar">
                    <rect
                        x=format!("{:.1}", x + slot * 0.15)
                        y=format!("{:.1}", baseline - height)
                        width=format!("{:.1}", slot * 0.7)
                        height=format!("{height:.1}")
                        fill=chart.color
                        on:mouseenter=move |_| hovered.set(Some(tooltip.clone()))
                        on:mouseleave=move |_| hovered.set(None)
                    />
                    <text
                        x=format!("{:.1}", x + slot / 2.0)
                        y=format!("{:.1}", baseline + 16.0)
                        text-anchor="middle"
                        font-size="10"
                    >
                        {bar.label.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart bar-chart" data-axis-max=format::plain(axis_max)>
            <h3>{chart.title.clone()}</h3>
            <svg viewBox=format!("0 0 {BAR_WIDTH} {BAR_HEIGHT}") class="chart-canvas">
                {grid}
                {bars}
            </svg>
            <p class="series-label" style=format!("color: {}", chart.color)>
                {chart.series_label}
            </p>
            <p class="tooltip">{move || hovered.get().unwrap_or_default()}</p>
        </div>
    }
}
