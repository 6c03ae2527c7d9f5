use leptos::prelude::*;

use aomgg_shared::nav::Route;

use crate::header::Header;
use crate::rating_chart::RatingChart;
use crate::recs::RecordedGames;

const APP_STYLE: &str = r#"
body { margin: 0; background: #0c0e17; color: #e2e0d8; font-family: system-ui, sans-serif; }
.wide-only { display: none; }
.narrow-only { display: inline-flex; }
@media (min-width: 640px) {
  .wide-only { display: flex; }
  .narrow-only { display: none; }
}
.lg-only { display: none; }
@media (min-width: 1024px) {
  .lg-only { display: inline; }
  .lg-hidden { display: none; }
}
.card { background: #13161f; border: 1px solid #282c3e; border-radius: 8px; }
.card-title { margin: 0; font-size: 1.1rem; font-weight: 600; }
.nav-link:hover { color: #f5c542 !important; }
.nav-separator { width: 1px; height: 24px; background: #3a3f55; }
.menu-button { background: none; border: none; color: #e2e0d8; cursor: pointer; }
.mobile-nav { position: fixed; inset: 0; z-index: 50; transition: transform 0.3s ease-in-out; }
.mobile-nav-backdrop { position: absolute; inset: 0; background: #000; transition: opacity 0.3s; }
.mobile-nav-panel { position: absolute; top: 0; right: 0; bottom: 0; width: 75%; max-width: 320px; display: flex; flex-direction: column; background: #13161f; }
.granularity-btn { background: #1c2030; color: #9a9590; border: 1px solid #282c3e; border-radius: 6px; padding: 4px 10px; cursor: pointer; }
.granularity-btn.active { background: #e2e0d8; color: #0c0e17; }
.spinner { width: 32px; height: 32px; margin: 40px auto; border: 3px solid #282c3e; border-top-color: #e2e0d8; border-radius: 50%; animation: spin 0.8s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.chart-tooltip { position: absolute; top: 16px; right: 28px; padding: 8px 10px; background: #13161f; border: 1px solid #282c3e; border-radius: 6px; font-size: 0.8rem; pointer-events: none; }
.build-select { background: #1c2030; color: #e2e0d8; border: 1px solid #282c3e; border-radius: 6px; padding: 4px 8px; }
.rec-list { list-style: none; margin: 12px 0 0; padding: 0; }
.rec-row { display: grid; grid-template-columns: 2fr 1fr 1fr 3fr; gap: 8px; padding: 8px 0; border-top: 1px solid #282c3e; font-size: 0.85rem; }
"#;

fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Home)
}

#[component]
pub fn App() -> impl IntoView {
    let page = match current_route() {
        Route::Profile(player_id) => view! {
            <main style="padding: 16px; max-width: 960px; margin: 0 auto;">
                <RatingChart player_id=Signal::derive(move || player_id) />
            </main>
        }
        .into_any(),
        Route::RecordedGames => view! { <RecordedGames /> }.into_any(),
        Route::Home => view! {
            <main style="padding: 48px 16px; text-align: center; color: #9a9590;">
                "Look up a player profile to see their ratings history."
            </main>
        }
        .into_any(),
    };

    view! {
        <style>{APP_STYLE}</style>
        <Header />
        {page}
    }
}
