use std::future::Future;

use crate::error::FetchError;
use crate::rating::{ChartDataItem, CombinedChartData, Granularity};

/// Source of a player's rating history.
pub trait RatingSource {
    fn fetch_ratings(
        &self,
        player_id: u64,
    ) -> impl Future<Output = Result<CombinedChartData, FetchError>>;
}

/// Identifies one dispatched fetch. Only the ticket from the most recent
/// dispatch may write into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub player_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Applied,
    Failed(FetchError),
    /// A newer request was dispatched before this one resolved.
    Stale,
}

/// Rating history for the player currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesStore {
    data: CombinedChartData,
    loading: bool,
    generation: u64,
    player_id: Option<u64>,
}

impl Default for TimeSeriesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSeriesStore {
    /// Empty store. It reports loading until the first fetch settles.
    pub fn new() -> Self {
        Self {
            data: CombinedChartData::default(),
            loading: true,
            generation: 0,
            player_id: None,
        }
    }

    pub fn data(&self) -> &CombinedChartData {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Player of the most recently dispatched fetch.
    pub fn player_id(&self) -> Option<u64> {
        self.player_id
    }

    /// Solo and team slices for `granularity`.
    pub fn select_granularity(&self, granularity: Granularity) -> (&ChartDataItem, &ChartDataItem) {
        (
            self.data.solo.slice(granularity),
            self.data.team.slice(granularity),
        )
    }

    pub fn begin_fetch(&mut self, player_id: u64) -> FetchTicket {
        self.generation = self.generation.wrapping_add(1);
        self.player_id = Some(player_id);
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            player_id,
        }
    }

    /// Settle a fetch. Stale tickets change nothing; otherwise loading is
    /// cleared whether the fetch succeeded or not.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<CombinedChartData, FetchError>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                player_id = ticket.player_id,
                generation = ticket.generation,
                current = self.generation,
                "discarding stale rating response"
            );
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                FetchOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(
                    player_id = ticket.player_id,
                    error = %e,
                    "error fetching chart data"
                );
                FetchOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::RatingPoint;

    fn payload(solo_day: f64) -> CombinedChartData {
        let mut data = CombinedChartData::default();
        data.solo.day.push(RatingPoint::new("2024-09-01", solo_day));
        data
    }

    #[test]
    fn starts_loading_with_empty_data() {
        let store = TimeSeriesStore::new();
        assert!(store.is_loading());
        assert_eq!(store.data(), &CombinedChartData::default());
        assert_eq!(store.player_id(), None);
    }

    #[test]
    fn successful_fetch_replaces_data_and_clears_loading() {
        let mut store = TimeSeriesStore::new();
        let ticket = store.begin_fetch(7);
        assert!(store.is_loading());
        assert_eq!(store.complete(ticket, Ok(payload(1200.0))), FetchOutcome::Applied);
        assert!(!store.is_loading());
        assert_eq!(store.data(), &payload(1200.0));
        assert_eq!(store.player_id(), Some(7));
    }

    #[test]
    fn failed_fetch_keeps_prior_data_and_clears_loading() {
        let mut store = TimeSeriesStore::new();
        let first = store.begin_fetch(7);
        store.complete(first, Ok(payload(1200.0)));

        let second = store.begin_fetch(7);
        let outcome = store.complete(second, Err(FetchError::Status(500)));
        assert_eq!(outcome, FetchOutcome::Failed(FetchError::Status(500)));
        assert!(!store.is_loading());
        assert_eq!(store.data(), &payload(1200.0));
    }

    #[test]
    fn late_response_for_previous_player_is_discarded() {
        let mut store = TimeSeriesStore::new();
        let a = store.begin_fetch(1);
        let b = store.begin_fetch(2);

        assert_eq!(store.complete(b, Ok(payload(2000.0))), FetchOutcome::Applied);
        assert_eq!(store.complete(a, Ok(payload(1000.0))), FetchOutcome::Stale);
        assert_eq!(store.data(), &payload(2000.0));
        assert!(!store.is_loading());
    }

    #[test]
    fn stale_completion_does_not_clear_loading_of_newer_request() {
        let mut store = TimeSeriesStore::new();
        let a = store.begin_fetch(1);
        let _b = store.begin_fetch(2);
        assert_eq!(
            store.complete(a, Err(FetchError::Network("timeout".into()))),
            FetchOutcome::Stale
        );
        assert!(store.is_loading());
    }

    #[test]
    fn select_granularity_reads_both_series() {
        let mut store = TimeSeriesStore::new();
        let mut data = payload(1200.0);
        data.team.week.push(RatingPoint::new("2024-09-02", 1300.0));
        let ticket = store.begin_fetch(3);
        store.complete(ticket, Ok(data));

        let (solo, team) = store.select_granularity(Granularity::Day);
        assert_eq!(solo.len(), 1);
        assert!(team.is_empty());
        let (solo, team) = store.select_granularity(Granularity::Week);
        assert!(solo.is_empty());
        assert_eq!(team[0].average_rating, 1300.0);
    }
}
