use aomgg_shared::BuildOption;
use gloo_storage::Storage;

pub const RATINGS_PATH: &str = "/api/profile/ratings";
pub const RECS_PATH: &str = "/api/recs";
pub const BUILDS_PATH: &str = "/api/recs/builds";

pub const LOGO_SRC: &str = "/aom-gg-logo.png";
pub const KOFI_BUTTON_SRC: &str = "/kofi_button_blue.png";
pub const KOFI_TAG_SRC: &str = "/kofi_bg_tag_dark.png";

pub const SETTINGS_KEY: &str = "aomgg_settings";

/// First page of recorded games.
pub const FIRST_PAGE: u32 = 0;

pub fn ratings_url(player_id: u64) -> String {
    format!("{RATINGS_PATH}?playerId={player_id}")
}

pub fn recs_url(page: u32) -> String {
    format!("{RECS_PATH}?page={page}")
}

/// Browser-persisted preferences.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Select value last chosen in the recorded-games build filter.
    pub recs_build: Option<String>,
}

impl Settings {
    pub fn load() -> Self {
        gloo_storage::LocalStorage::get(SETTINGS_KEY).unwrap_or_default()
    }

    pub fn recs_build_option(&self) -> Option<BuildOption> {
        self.recs_build.as_deref().and_then(BuildOption::parse)
    }

    pub fn remember_build(option: BuildOption) {
        let mut settings = Self::load();
        settings.recs_build = Some(option.value());
        settings.save();
    }

    pub fn save(&self) {
        if let Err(e) = gloo_storage::LocalStorage::set(SETTINGS_KEY, self) {
            web_sys::console::warn_1(&format!("failed to persist settings: {e}").into());
        }
    }
}
