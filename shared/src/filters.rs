use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Select value standing for "no build restriction".
pub const ALL_BUILDS_VALUE: &str = "ALL_BUILDS";
pub const ALL_BUILDS_LABEL: &str = "All Builds";

/// Query sent with a recorded-games page request.
/// Fields other than `buildNumbers` are owned by other filter controls and
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFilters {
    #[serde(default)]
    pub build_numbers: Vec<u32>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// One recorded match in a page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedGame {
    pub game_guid: String,
    pub build_number: u32,
    #[serde(default)]
    pub map_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_length: Option<u32>,
    #[serde(default)]
    pub player_names: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOption {
    All,
    Build(u32),
}

impl BuildOption {
    pub fn from_selection(selected: Option<u32>) -> Self {
        selected.map_or(BuildOption::All, BuildOption::Build)
    }

    /// Parse a `<select>` value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        if value == ALL_BUILDS_VALUE {
            return Some(BuildOption::All);
        }
        value.trim().parse::<u32>().ok().map(BuildOption::Build)
    }

    pub fn value(self) -> String {
        match self {
            BuildOption::All => ALL_BUILDS_VALUE.to_string(),
            BuildOption::Build(n) => n.to_string(),
        }
    }

    pub fn label(self) -> String {
        match self {
            BuildOption::All => ALL_BUILDS_LABEL.to_string(),
            BuildOption::Build(n) => n.to_string(),
        }
    }

    pub fn build(self) -> Option<u32> {
        match self {
            BuildOption::All => None,
            BuildOption::Build(n) => Some(n),
        }
    }

    /// The `buildNumbers` filter this option stands for; empty means all builds.
    pub fn build_filter(self) -> Vec<u32> {
        self.build().into_iter().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTicket {
    pub generation: u64,
    pub option: BuildOption,
}

/// Build dropdown state for the recorded-games list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionFilterState {
    build_numbers: Vec<u32>,
    selected: Option<u32>,
    generation: u64,
}

impl VersionFilterState {
    pub fn new(build_numbers: Vec<u32>, selected: Option<u32>) -> Self {
        Self {
            build_numbers,
            selected,
            generation: 0,
        }
    }

    pub fn build_numbers(&self) -> &[u32] {
        &self.build_numbers
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// The dropdown is hidden when there is nothing to choose from.
    pub fn is_visible(&self) -> bool {
        !self.build_numbers.is_empty()
    }

    pub fn set_build_numbers(&mut self, build_numbers: Vec<u32>) {
        self.build_numbers = build_numbers;
    }

    /// Mount-time default: pick the first (newest) build when nothing is selected.
    pub fn initial_selection(&mut self) -> Option<u32> {
        if self.selected.is_none()
            && let Some(&first) = self.build_numbers.first()
        {
            self.selected = Some(first);
        }
        self.selected
    }

    pub fn select_value(&self) -> String {
        BuildOption::from_selection(self.selected).value()
    }

    pub fn display_label(&self) -> String {
        BuildOption::from_selection(self.selected).label()
    }

    /// Every dropdown entry in order, "All Builds" first.
    pub fn options(&self) -> Vec<BuildOption> {
        std::iter::once(BuildOption::All)
            .chain(self.build_numbers.iter().copied().map(BuildOption::Build))
            .collect()
    }

    /// Start a filter change. Returns the ticket for the re-query and the
    /// filters to send with it.
    pub fn choose(
        &mut self,
        option: BuildOption,
        filters: &MatchFilters,
    ) -> (FilterTicket, MatchFilters) {
        self.generation = self.generation.wrapping_add(1);
        let updated = MatchFilters {
            build_numbers: option.build_filter(),
            other: filters.other.clone(),
        };
        (
            FilterTicket {
                generation: self.generation,
                option,
            },
            updated,
        )
    }

    /// Apply the selection once its query has resolved. Returns false and
    /// leaves the selection alone when a newer choice superseded the ticket.
    pub fn finish(&mut self, ticket: FilterTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.selected = ticket.option.build();
        true
    }

    pub fn is_current(&self, ticket: FilterTicket) -> bool {
        ticket.generation == self.generation
    }
}
