use crime_hotspots_shared::{Axis, ChartData, ChartOptions, LegendPosition};
use leptos::prelude::*;

use crate::colors::{point_fill_css, stroke_css};

const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 320.0;
const PLOT_LEFT: f64 = 56.0;
const PLOT_RIGHT: f64 = VIEW_W - 16.0;
const PLOT_TOP: f64 = 12.0;
const PLOT_BOTTOM: f64 = VIEW_H - 48.0;
const TARGET_TICKS: u32 = 5;

/// Vertical extent of the plot and the spacing of its grid lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct YScale {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl YScale {
    pub fn fit(data: &ChartData, axis: &Axis) -> Self {
        let data_max = data.max_value();
        let data_min = data
            .datasets
            .iter()
            .flat_map(|dataset| dataset.data.iter().copied())
            .min()
            .unwrap_or(0);

        let (min, max, step) = match axis.max {
            Some(max) => {
                let step = nice_step(max);
                // Data sitting above a fixed ceiling still leaves one grid step.
                let min =
                    floor_to(axis_floor(data_min, axis), step).min(max.saturating_sub(step));
                (min, max, step)
            }
            None => {
                let step = nice_step(data_max);
                let min = floor_to(axis_floor(data_min, axis), step);
                (min, ceil_to(data_max, step).max(min + step), step)
            }
        };
        Self { min, max, step }
    }

    pub fn ticks(&self) -> Vec<u32> {
        (self.min..=self.max).step_by(self.step as usize).collect()
    }

    pub fn y_position(&self, value: u32) -> f64 {
        let span = self.max.saturating_sub(self.min).max(1) as f64;
        let offset = value.min(self.max).saturating_sub(self.min);
        PLOT_BOTTOM - offset as f64 / span * (PLOT_BOTTOM - PLOT_TOP)
    }
}

fn axis_floor(data_min: u32, axis: &Axis) -> u32 {
    if axis.begin_at_zero { 0 } else { data_min }
}

/// Grid spacing of 1, 2 or 5 times a power of ten giving about five ticks.
pub(crate) fn nice_step(max: u32) -> u32 {
    if max == 0 {
        return 1;
    }
    let raw = max as f64 / TARGET_TICKS as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    ((nice * magnitude) as u32).max(1)
}

fn ceil_to(value: u32, step: u32) -> u32 {
    value.div_ceil(step) * step
}

fn floor_to(value: u32, step: u32) -> u32 {
    value / step * step
}

/// Category positions run edge to edge across the plot.
pub(crate) fn x_position(index: usize, count: usize) -> f64 {
    let width = PLOT_RIGHT - PLOT_LEFT;
    if count <= 1 {
        return PLOT_LEFT + width / 2.0;
    }
    PLOT_LEFT + index as f64 * width / (count - 1) as f64
}

pub(crate) fn polyline_points(values: &[u32], scale: &YScale) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            format!(
                "{:.1},{:.1}",
                x_position(i, values.len()),
                scale.y_position(*value)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line chart over category labels, drawn as SVG.
#[component]
pub fn LineChart(data: Signal<&'static ChartData>, options: ChartOptions) -> impl IntoView {
    let hovered: RwSignal<Option<(usize, usize)>> = RwSignal::new(None);
    let legend_order = match options.legend_position {
        LegendPosition::Top => "order-first",
        LegendPosition::Bottom => "order-last",
    };
    let width_class = if options.responsive { "w-full h-auto" } else { "" };
    let title = options.title.clone();
    let y_title = options.y.title.clone();
    let x_title = options.x.as_ref().and_then(|x| x.title.clone());
    let y_axis = options.y;

    let legend = move || {
        data.get()
            .datasets
            .iter()
            .map(|dataset| {
                view! {
                    <span class="inline-flex items-center gap-1 text-xs text-gray-600">
                        <span
                            class="inline-block w-8 h-3 border-2"
                            style:border-color=stroke_css(dataset.border_color)
                            style:background-color=point_fill_css(dataset.border_color)
                        ></span>
                        {dataset.label}
                    </span>
                }
            })
            .collect_view()
    };

    let tooltip_axis = y_axis.clone();
    let tooltip = move || {
        let chart = data.get();
        let scale = YScale::fit(chart, &tooltip_axis);
        hovered.get().and_then(|(series, i)| {
            let dataset = chart.datasets.get(series)?;
            let value = *dataset.data.get(i)?;
            let text = format!("{}: {value}", dataset.label);
            let x = x_position(i, dataset.data.len()).min(PLOT_RIGHT - 150.0);
            let y = (scale.y_position(value) - 34.0).max(0.0);
            Some(view! {
                <g pointer-events="none">
                    <rect x=format!("{x:.1}") y=format!("{y:.1}") width="150" height="24" rx="4" fill="rgba(0,0,0,0.8)" />
                    <text x=format!("{:.1}", x + 8.0) y=format!("{:.1}", y + 16.0) font-size="12" fill="#ffffff">
                        {text}
                    </text>
                </g>
            })
        })
    };

    let plot = move || {
        let chart = data.get();
        let scale = YScale::fit(chart, &y_axis);
        let count = chart.labels.len();

        let grid = scale
            .ticks()
            .into_iter()
            .map(|tick| {
                let y = format!("{:.1}", scale.y_position(tick));
                view! {
                    <line x1=PLOT_LEFT.to_string() x2=PLOT_RIGHT.to_string() y1=y.clone() y2=y.clone() stroke="#e5e7eb" stroke-width="1" />
                    <text x=(PLOT_LEFT - 8.0).to_string() y=y text-anchor="end" dominant-baseline="middle" font-size="11" fill="#6b7280">
                        {tick.to_string()}
                    </text>
                }
            })
            .collect_view();

        let categories = chart
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                view! {
                    <text x=format!("{:.1}", x_position(i, count)) y=(PLOT_BOTTOM + 18.0).to_string() text-anchor="middle" font-size="11" fill="#6b7280">
                        {*label}
                    </text>
                }
            })
            .collect_view();

        let lines = chart
            .datasets
            .iter()
            .enumerate()
            .map(|(series, dataset)| {
                let points = dataset
                    .data
                    .iter()
                    .enumerate()
                    .map(|(i, value)| {
                        view! {
                            <circle
                                cx=format!("{:.1}", x_position(i, dataset.data.len()))
                                cy=format!("{:.1}", scale.y_position(*value))
                                r="3.5"
                                fill=point_fill_css(dataset.border_color)
                                stroke=stroke_css(dataset.border_color)
                                stroke-width="1.5"
                                on:mouseenter=move |_| hovered.set(Some((series, i)))
                                on:mouseleave=move |_| hovered.set(None)
                            />
                        }
                    })
                    .collect_view();
                let fill = if dataset.fill {
                    point_fill_css(dataset.border_color)
                } else {
                    "none".to_owned()
                };
                view! {
                    <polyline
                        points=polyline_points(dataset.data, &scale)
                        fill=fill
                        stroke=stroke_css(dataset.border_color)
                        stroke-width="2"
                        stroke-linejoin="round"
                    />
                    {points}
                }
            })
            .collect_view();

        view! {
            {grid}
            <line x1=PLOT_LEFT.to_string() x2=PLOT_LEFT.to_string() y1=PLOT_TOP.to_string() y2=PLOT_BOTTOM.to_string() stroke="#d1d5db" stroke-width="1" />
            {categories}
            {lines}
        }
    };

    view! {
        <figure class="flex flex-col gap-2">
            {title.map(|title| view! {
                <figcaption class="text-center text-sm font-semibold text-gray-700">{title}</figcaption>
            })}
            <div class=format!("flex flex-wrap justify-center gap-4 {legend_order}")>{legend}</div>
            <svg class=width_class viewBox=format!("0 0 {VIEW_W} {VIEW_H}") role="img">
                {plot}
                {tooltip}
                {y_title.map(|title| view! {
                    <text
                        transform=format!("translate(14 {:.1}) rotate(-90)", (PLOT_TOP + PLOT_BOTTOM) / 2.0)
                        text-anchor="middle"
                        font-size="12"
                        fill="#374151"
                    >
                        {title}
                    </text>
                })}
                {x_title.map(|title| view! {
                    <text
                        x=format!("{:.1}", (PLOT_LEFT + PLOT_RIGHT) / 2.0)
                        y=(VIEW_H - 8.0).to_string()
                        text-anchor="middle"
                        font-size="12"
                        fill="#374151"
                    >
                        {title}
                    </text>
                })}
            </svg>
        </figure>
    }
}
