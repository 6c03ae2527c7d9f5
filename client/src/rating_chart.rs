use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use aomgg_shared::time_format::{format_axis_date, format_rating};
use aomgg_shared::{
    ChartView, CombinedChartData, FetchError, FetchOutcome, FetchTicket, Granularity, MatchType,
    ModelCell, RatingChartModel, load,
};

use crate::api::HttpRatingSource;

pub(crate) const CHART_WIDTH: f64 = 640.0;
pub(crate) const CHART_HEIGHT: f64 = 320.0;
pub(crate) const PLOT_LEFT: f64 = 60.0;
pub(crate) const PLOT_RIGHT: f64 = CHART_WIDTH - 20.0;
pub(crate) const PLOT_TOP: f64 = 10.0;
pub(crate) const PLOT_BOTTOM: f64 = CHART_HEIGHT - 60.0;

const SERIES: [MatchType; 2] = [MatchType::Solo, MatchType::Team];

/// Horizontal centre of category `index` out of `len` evenly spaced bands.
pub(crate) fn x_for(index: usize, len: usize) -> f64 {
    if len == 0 {
        return PLOT_LEFT;
    }
    let band = (PLOT_RIGHT - PLOT_LEFT) / len as f64;
    PLOT_LEFT + band * (index as f64 + 0.5)
}

/// Vertical position of `value` inside `[y_min, y_max]`. A collapsed domain
/// draws on the middle line.
pub(crate) fn y_for(value: f64, y_min: f64, y_max: f64) -> f64 {
    let height = PLOT_BOTTOM - PLOT_TOP;
    if y_max <= y_min {
        return PLOT_TOP + height / 2.0;
    }
    let t = ((value - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    PLOT_BOTTOM - t * height
}

pub(crate) fn series_coords(chart: &ChartView, match_type: MatchType) -> Vec<(f64, f64)> {
    let len = chart.points.len();
    chart
        .points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            (
                x_for(i, len),
                y_for(point.value(match_type), chart.y_min, chart.y_max),
            )
        })
        .collect()
}

pub(crate) fn polyline_points(coords: &[(f64, f64)]) -> String {
    coords
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Chart model owned by the component's reactive graph.
#[derive(Clone, Copy)]
struct SignalModel(RwSignal<RatingChartModel>);

impl ModelCell for SignalModel {
    fn begin_fetch(&self, player_id: u64) -> Option<FetchTicket> {
        self.0.try_update(|m| m.begin_fetch(player_id))
    }

    fn complete(
        &self,
        ticket: FetchTicket,
        result: Result<CombinedChartData, FetchError>,
    ) -> Option<FetchOutcome> {
        let outcome = self.0.try_update_untracked(|m| m.complete(ticket, result))?;
        // Stale responses leave the model alone; don't wake subscribers for them.
        if outcome != FetchOutcome::Stale {
            self.0.notify();
        }
        Some(outcome)
    }
}

/// Dispatch a rating fetch for `player_id`. Responses to superseded requests are dropped.
fn start_fetch(model: RwSignal<RatingChartModel>, player_id: u64) {
    spawn_local(async move {
        if let Some(FetchOutcome::Failed(e)) =
            load(&SignalModel(model), &HttpRatingSource, player_id).await
        {
            web_sys::console::warn_1(&format!("Error fetching chart data: {e}").into());
        }
    });
}

/// Ratings history card: day/week/month selector over a solo vs. team line chart.
#[component]
pub fn RatingChart(#[prop(into)] player_id: Signal<u64>) -> impl IntoView {
    let model: RwSignal<RatingChartModel> = RwSignal::new(RatingChartModel::new());
    let hovered: RwSignal<Option<usize>> = RwSignal::new(None);

    Effect::new(move || {
        let id = player_id.get();
        if model.with_untracked(|m| m.store().player_id()) == Some(id) {
            return;
        }
        hovered.set(None);
        start_fetch(model, id);
    });

    let loading = Memo::new(move |_| model.with(|m| m.is_loading()));
    let granularity = Memo::new(move |_| model.with(|m| m.granularity()));
    let chart = Memo::new(move |_| model.with(|m| m.view().clone()));

    let chart_icon = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M3 3v16a2 2 0 0 0 2 2h16"/><path d="m19 9-5 5-4-4-3 3"/></svg>"#;

    let selector = Granularity::ALL
        .into_iter()
        .map(|g| {
            view! {
                <button
                    class="granularity-btn"
                    class:active=move || granularity.get() == g
                    on:click=move |_| {
                        hovered.set(None);
                        model.update(|m| m.select(g));
                    }
                >
                    <span class="lg-hidden">{g.short_label()}</span>
                    <span class="lg-only">{g.label()}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="card" style="width: 100%;">
            <div style="display: flex; justify-content: space-between; align-items: center; padding: 16px 20px 8px;">
                <div style="display: flex; align-items: center; gap: 8px;">
                    <span style="display: inline-flex;" inner_html=chart_icon />
                    <h3 class="card-title">"Ratings History"</h3>
                </div>
                <div style="display: flex; flex-wrap: wrap; gap: 8px;">{selector}</div>
            </div>
            <div style="padding: 8px 20px 20px; position: relative;">
                {move || {
                    if loading.get() {
                        view! { <div class="spinner" /> }.into_any()
                    } else {
                        let chart = chart.get();
                        if chart.points.is_empty() {
                            view! {
                                <div style="padding: 40px 0; text-align: center; color: #5a5860;">
                                    "No rated games yet"
                                </div>
                            }
                            .into_any()
                        } else {
                            chart_surface(chart, hovered)
                        }
                    }
                }}
            </div>
        </div>
    }
}

fn chart_surface(chart: ChartView, hovered: RwSignal<Option<usize>>) -> AnyView {
    let len = chart.points.len();

    let gridlines = chart
        .ticks()
        .into_iter()
        .map(|tick| {
            let y = format!("{:.1}", y_for(tick, chart.y_min, chart.y_max));
            view! {
                <g>
                    <line
                        x1=format!("{PLOT_LEFT}")
                        x2=format!("{PLOT_RIGHT}")
                        y1=y.clone()
                        y2=y.clone()
                        stroke="#282c3e"
                        stroke-width="1"
                    />
                    <text
                        x=format!("{}", PLOT_LEFT - 25.0)
                        y=y
                        text-anchor="end"
                        dominant-baseline="middle"
                        fill="#9a9590"
                        font-size="11"
                    >
                        {format_rating(tick)}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    let x_labels = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = x_for(i, len);
            let y = PLOT_BOTTOM + 20.0;
            view! {
                <text
                    x=format!("{x:.1}")
                    y=format!("{y:.1}")
                    transform=format!("rotate(-45 {x:.1} {y:.1})")
                    text-anchor="end"
                    fill="#9a9590"
                    font-size="11"
                >
                    {format_axis_date(&point.date)}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let lines = SERIES
        .into_iter()
        .filter(|&m| chart.shows(m))
        .map(|m| {
            let coords = series_coords(&chart, m);
            let dots = coords
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| {
                    view! {
                        <circle
                            cx=format!("{x:.1}")
                            cy=format!("{y:.1}")
                            r="4"
                            fill=m.color()
                            style="cursor: pointer;"
                            on:mouseenter=move |_| hovered.set(Some(i))
                            on:mouseleave=move |_| hovered.set(None)
                        />
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <g>
                    <polyline
                        points=polyline_points(&coords)
                        fill="none"
                        stroke=m.color()
                        stroke-width="2"
                        stroke-linejoin="round"
                    />
                    {dots}
                </g>
            }
        })
        .collect::<Vec<_>>();

    let legend = SERIES
        .into_iter()
        .filter(|&m| chart.shows(m))
        .map(|m| {
            view! {
                <span style="display: inline-flex; align-items: center; gap: 6px; font-size: 0.75rem; color: #e2e0d8;">
                    <span style:background=m.color() style="width: 10px; height: 10px; border-radius: 2px; display: inline-block;" />
                    {m.label()}
                </span>
            }
        })
        .collect::<Vec<_>>();

    let show_solo = chart.show_solo;
    let show_team = chart.show_team;
    let points = chart.points;
    let tooltip = move || {
        let point = hovered.get().and_then(|i| points.get(i).cloned())?;
        Some(view! {
            <div class="chart-tooltip">
                <div style="color: #9a9590; margin-bottom: 4px;">{format_axis_date(&point.date)}</div>
                {show_solo.then(|| view! {
                    <div style:color=MatchType::Solo.color()>
                        {format!("{}: {}", MatchType::Solo.series_key(), format_rating(point.solo_value))}
                    </div>
                })}
                {show_team.then(|| view! {
                    <div style:color=MatchType::Team.color()>
                        {format!("{}: {}", MatchType::Team.series_key(), format_rating(point.team_value))}
                    </div>
                })}
            </div>
        })
    };

    view! {
        <svg
            viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
            width="100%"
            style="display: block; overflow: visible;"
        >
            {gridlines}
            {x_labels}
            {lines}
        </svg>
        {tooltip}
        <div style="display: flex; justify-content: center; gap: 16px; margin-top: 8px;">{legend}</div>
    }
    .into_any()
}
