use serde::{Deserialize, Serialize};

/// Time-bucketing resolution of a rating series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Day,
    Week,
    Month,
}

impl Granularity {
    /// Display order of the selector buttons.
    pub const ALL: [Granularity; 3] = [Granularity::Day, Granularity::Week, Granularity::Month];

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Granularity::Day => "Day",
            Granularity::Week => "Week",
            Granularity::Month => "Month",
        }
    }

    /// Single-letter label used on narrow screens.
    pub fn short_label(self) -> &'static str {
        match self {
            Granularity::Day => "D",
            Granularity::Week => "W",
            Granularity::Month => "M",
        }
    }
}

/// Competitive queue a rating belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Solo,
    Team,
}

impl MatchType {
    pub fn label(self) -> &'static str {
        match self {
            MatchType::Solo => "1V1_SUPREMACY",
            MatchType::Team => "TEAM_SUPREMACY",
        }
    }

    /// Key of this series inside a merged chart row.
    pub fn series_key(self) -> &'static str {
        match self {
            MatchType::Solo => "1V1_SUP",
            MatchType::Team => "TEAM_SUP",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            MatchType::Solo => "#E23670",
            MatchType::Team => "#2761D9",
        }
    }
}

/// One sampled rating value for one match type and granularity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingPoint {
    pub date: String,
    pub average_rating: f64,
}

impl RatingPoint {
    pub fn new(date: impl Into<String>, average_rating: f64) -> Self {
        Self {
            date: date.into(),
            average_rating,
        }
    }
}

/// Rating points ordered by date ascending.
pub type ChartDataItem = Vec<RatingPoint>;

/// Rating history of one match type at every granularity.
/// Missing keys deserialize as empty series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub day: ChartDataItem,
    #[serde(default)]
    pub week: ChartDataItem,
    #[serde(default)]
    pub month: ChartDataItem,
}

impl ChartData {
    pub fn slice(&self, granularity: Granularity) -> &ChartDataItem {
        match granularity {
            Granularity::Day => &self.day,
            Granularity::Week => &self.week,
            Granularity::Month => &self.month,
        }
    }
}

/// Full rating payload for one player.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CombinedChartData {
    #[serde(default)]
    pub solo: ChartData,
    #[serde(default)]
    pub team: ChartData,
}

impl CombinedChartData {
    pub fn series(&self, match_type: MatchType) -> &ChartData {
        match match_type {
            MatchType::Solo => &self.solo,
            MatchType::Team => &self.team,
        }
    }
}

/// Extract the rating values of a series in order.
pub fn ratings(series: &[RatingPoint]) -> impl Iterator<Item = f64> + '_ {
    series.iter().map(|point| point.average_rating)
}
