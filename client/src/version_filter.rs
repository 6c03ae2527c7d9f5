use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use aomgg_shared::{BuildOption, MatchFilters, RecordedGame, VersionFilterState};

use crate::api;
use crate::config::{self, Settings};

/// Signals shared by the recorded-games page and its build filter.
#[derive(Clone, Copy)]
pub struct RecsContext {
    pub state: RwSignal<VersionFilterState>,
    pub filters: RwSignal<MatchFilters>,
    pub recs: RwSignal<Vec<RecordedGame>>,
    pub is_loading: RwSignal<bool>,
}

impl Default for RecsContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RecsContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(VersionFilterState::default()),
            filters: RwSignal::new(MatchFilters::default()),
            recs: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(true),
        }
    }
}

/// Switch the build filter and re-query the first page of recorded games.
/// Only the most recent choice is applied when queries overlap.
pub(crate) fn apply_build_option(option: BuildOption, ctx: RecsContext) {
    let RecsContext {
        state,
        filters,
        recs,
        is_loading,
    } = ctx;

    let current_filters = filters.get_untracked();
    let mut pending = None;
    state.update(|s| pending = Some(s.choose(option, &current_filters)));
    let Some((ticket, updated)) = pending else {
        return;
    };

    filters.set(updated.clone());
    is_loading.set(true);

    spawn_local(async move {
        let result = api::fetch_recs(config::FIRST_PAGE, &updated).await;

        let Some(current) = state.try_with_untracked(|s| s.is_current(ticket)) else {
            return;
        };
        if !current {
            return;
        }

        match result {
            Ok(page) => recs.set(page),
            Err(e) => {
                web_sys::console::warn_1(&format!("Recorded games fetch failed: {e}").into());
            }
        }
        is_loading.set(false);
        state.update(|s| {
            s.finish(ticket);
        });
        Settings::remember_build(option);
    });
}

/// Dropdown restricting the recorded-games list to one build. Hidden when no
/// builds are known.
#[component]
pub fn VersionFilter(ctx: RecsContext) -> impl IntoView {
    let state = ctx.state;

    let on_change = move |e: web_sys::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(select) = target.dyn_into::<web_sys::HtmlSelectElement>() else {
            return;
        };
        let Some(option) = BuildOption::parse(&select.value()) else {
            return;
        };
        apply_build_option(option, ctx);
    };

    view! {
        <Show when=move || state.with(|s| s.is_visible())>
            <select
                class="build-select"
                aria-label="Game build"
                prop:value=move || state.with(|s| s.select_value())
                title=move || state.with(|s| s.display_label())
                on:change=on_change
            >
                {move || {
                    state
                        .with(|s| s.options())
                        .into_iter()
                        .map(|option| {
                            let value = option.value();
                            let current = value.clone();
                            let label = option.label();
                            view! {
                                <option
                                    value=value
                                    selected=move || state.with(|s| s.select_value() == current)
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </Show>
    }
}
