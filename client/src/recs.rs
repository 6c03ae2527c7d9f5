use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use aomgg_shared::time_format::format_game_length;
use aomgg_shared::{BuildOption, RecordedGame};

use crate::api;
use crate::config::Settings;
use crate::version_filter::{RecsContext, VersionFilter, apply_build_option};

/// Option restored on mount: the remembered choice when it still exists,
/// otherwise the newest build.
fn restored_option(ctx: RecsContext, saved: Option<BuildOption>) -> BuildOption {
    match saved {
        Some(BuildOption::Build(n)) if ctx.state.with_untracked(|s| s.build_numbers().contains(&n)) => {
            BuildOption::Build(n)
        }
        Some(BuildOption::All) => BuildOption::All,
        _ => {
            let mut selected = None;
            ctx.state.update(|s| selected = s.initial_selection());
            BuildOption::from_selection(selected)
        }
    }
}

fn load_initial(ctx: RecsContext) {
    spawn_local(async move {
        let builds = match api::fetch_build_numbers().await {
            Ok(builds) => builds,
            Err(e) => {
                web_sys::console::warn_1(&format!("Build list fetch failed: {e}").into());
                Vec::new()
            }
        };
        if ctx.state.try_update(|s| s.set_build_numbers(builds)).is_none() {
            return;
        }
        let option = restored_option(ctx, Settings::load().recs_build_option());
        apply_build_option(option, ctx);
    });
}

fn game_row(game: RecordedGame) -> impl IntoView {
    let length = game
        .game_length
        .map(|secs| format_game_length(i64::from(secs)))
        .unwrap_or_else(|| "-".to_string());
    let players = game.player_names.join(", ");
    view! {
        <li class="rec-row">
            <span class="rec-map">{game.map_name}</span>
            <span class="rec-build">{format!("Build {}", game.build_number)}</span>
            <span class="rec-length">{length}</span>
            <span class="rec-players">{players}</span>
        </li>
    }
}

/// Recorded games page: build filter over the first page of matches.
#[component]
pub fn RecordedGames() -> impl IntoView {
    let ctx = RecsContext::new();
    load_initial(ctx);

    let RecsContext {
        recs, is_loading, ..
    } = ctx;

    view! {
        <section class="card" style="margin: 16px; padding: 16px 20px;">
            <div style="display: flex; justify-content: space-between; align-items: center; gap: 12px;">
                <h3 class="card-title">"Recorded Games"</h3>
                <VersionFilter ctx=ctx />
            </div>
            {move || {
                if is_loading.get() {
                    view! { <div class="spinner" /> }.into_any()
                } else if recs.with(|r| r.is_empty()) {
                    view! {
                        <div style="padding: 40px 0; text-align: center; color: #5a5860;">
                            "No recorded games found"
                        </div>
                    }
                    .into_any()
                } else {
                    let rows = recs.get().into_iter().map(game_row).collect::<Vec<_>>();
                    view! { <ul class="rec-list">{rows}</ul> }.into_any()
                }
            }}
        </section>
    }
}
