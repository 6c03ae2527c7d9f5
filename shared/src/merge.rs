use serde::{Deserialize, Serialize};

use crate::rating::{MatchType, RatingPoint};

/// One row of the dual-line chart. The date always comes from the solo series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedPoint {
    pub date: String,
    pub solo_value: f64,
    pub team_value: f64,
}

impl MergedPoint {
    pub fn value(&self, match_type: MatchType) -> f64 {
        match match_type {
            MatchType::Solo => self.solo_value,
            MatchType::Team => self.team_value,
        }
    }
}

/// Join the team series onto the solo x-axis.
///
/// The solo series decides the output length. A team entry at the same index is
/// used when present; otherwise the last team value seen is repeated (starting
/// from the team's first value, or zero when the team series is empty). Team
/// entries past the end of the solo series are dropped.
pub fn merge_series(solo: &[RatingPoint], team: &[RatingPoint]) -> Vec<MergedPoint> {
    let seed = team.first().map_or(0.0, |point| point.average_rating);

    solo.iter()
        .enumerate()
        .scan(seed, |last_team, (index, point)| {
            if let Some(team_point) = team.get(index) {
                *last_team = team_point.average_rating;
            }
            Some(MergedPoint {
                date: point.date.clone(),
                solo_value: point.average_rating,
                team_value: *last_team,
            })
        })
        .collect()
}
