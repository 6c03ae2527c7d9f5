use std::future::Future;

use aomgg_shared::{CombinedChartData, FetchError, MatchFilters, RatingSource, RecordedGame};
use gloo_net::http::{Request, Response};

use crate::config;

async fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, FetchError> {
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    resp.json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch a player's solo and team rating history at every granularity.
pub async fn fetch_match_ratings(player_id: u64) -> Result<CombinedChartData, FetchError> {
    let resp = Request::get(&config::ratings_url(player_id))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode(resp).await
}

/// Fetch one page of recorded games matching `filters`.
pub async fn fetch_recs(page: u32, filters: &MatchFilters) -> Result<Vec<RecordedGame>, FetchError> {
    let request = Request::post(&config::recs_url(page))
        .json(filters)
        .map_err(|e| FetchError::Encode(e.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode(resp).await
}

/// Fetch the known build numbers, newest first.
pub async fn fetch_build_numbers() -> Result<Vec<u32>, FetchError> {
    let resp = Request::get(config::BUILDS_PATH)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode(resp).await
}

/// Rating history over the site's HTTP API.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpRatingSource;

impl RatingSource for HttpRatingSource {
    fn fetch_ratings(
        &self,
        player_id: u64,
    ) -> impl Future<Output = Result<CombinedChartData, FetchError>> {
        fetch_match_ratings(player_id)
    }
}
