/// A header navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Opens in a new tab with `rel="noopener noreferrer"`.
    pub external: bool,
}

impl NavLink {
    const fn internal(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href,
            external: false,
        }
    }

    const fn external(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href,
            external: true,
        }
    }

    pub fn target(&self) -> Option<&'static str> {
        self.external.then_some("_blank")
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.external.then_some("noopener noreferrer")
    }
}

pub const DISCORD_URL: &str = "https://discord.gg/Um8MZju4CK";
pub const TWITCH_URL: &str = "https://www.twitch.tv/fitzbro/videos";
pub const KOFI_URL: &str = "https://ko-fi.com/fitzbro";

pub const DESKTOP_LINKS: [NavLink; 2] = [
    NavLink::internal("Recorded Games", "/recs"),
    NavLink::internal("Resources", "/resources"),
];

pub const MOBILE_LINKS: [NavLink; 3] = [
    NavLink::internal("Home", "/"),
    NavLink::internal("Replays", "/recs"),
    NavLink::internal("Resources", "/resources"),
];

pub const SOCIAL_LINKS: [NavLink; 3] = [
    NavLink::external("Discord", DISCORD_URL),
    NavLink::external("Twitch", TWITCH_URL),
    NavLink::external("Ko-fi", KOFI_URL),
];

/// Open/closed state of the mobile slide-in menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Transform class for the slide-in panel.
    pub fn panel_translate(self) -> &'static str {
        if self.open {
            "translateX(0)"
        } else {
            "translateX(100%)"
        }
    }
}

/// Page selected from the location path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    RecordedGames,
    Profile(u64),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next()) {
            (Some("recs"), None) => Route::RecordedGames,
            (Some("profile"), Some(id)) => id
                .parse::<u64>()
                .map(Route::Profile)
                .unwrap_or(Route::Home),
            _ => Route::Home,
        }
    }
}
