use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::merge::{MergedPoint, merge_series};
use crate::range::{combined_bounds, is_all_zero, snap_domain, tick_count};
use crate::rating::{CombinedChartData, Granularity, MatchType, RatingPoint, ratings};
use crate::store::{FetchOutcome, FetchTicket, RatingSource, TimeSeriesStore};

/// Everything the rendering surface needs to draw one granularity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    pub granularity: Granularity,
    pub y_min: f64,
    pub y_max: f64,
    pub tick_count: usize,
    pub show_solo: bool,
    pub show_team: bool,
    pub points: Vec<MergedPoint>,
}

impl ChartView {
    /// Gridline values from `y_min` upward, one per tick.
    pub fn ticks(&self) -> Vec<f64> {
        (0..self.tick_count)
            .map(|i| self.y_min + i as f64 * crate::range::AXIS_STEP)
            .collect()
    }

    /// Whether the line for `match_type` should be drawn.
    pub fn shows(&self, match_type: MatchType) -> bool {
        match match_type {
            MatchType::Solo => self.show_solo,
            MatchType::Team => self.show_team,
        }
    }
}

/// Shape one granularity of `data` into chart-ready form.
pub fn present(granularity: Granularity, data: &CombinedChartData) -> ChartView {
    present_series(
        granularity,
        data.series(MatchType::Solo).slice(granularity),
        data.series(MatchType::Team).slice(granularity),
    )
}

/// Shape an already selected pair of solo and team series.
pub fn present_series(
    granularity: Granularity,
    solo_points: &[RatingPoint],
    team_points: &[RatingPoint],
) -> ChartView {
    let solo: Vec<f64> = ratings(solo_points).collect();
    let team: Vec<f64> = ratings(team_points).collect();

    let (min, max) = combined_bounds(&solo, &team);
    let (y_min, y_max) = snap_domain(min, max);

    ChartView {
        granularity,
        y_min,
        y_max,
        tick_count: tick_count(y_min, y_max),
        show_solo: !is_all_zero(&solo),
        show_team: !is_all_zero(&team),
        points: merge_series(solo_points, team_points),
    }
}

/// Day/week/month selector. Starts on `Day`; only explicit selection moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartPresenter {
    granularity: Granularity,
}

impl ChartPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Returns true when the selection changed.
    pub fn select(&mut self, granularity: Granularity) -> bool {
        let changed = self.granularity != granularity;
        self.granularity = granularity;
        changed
    }

    pub fn present(&self, data: &CombinedChartData) -> ChartView {
        present(self.granularity, data)
    }
}

/// Store, selector and derived view kept in step. Every mutation recomputes
/// the view from `{granularity, data}`.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingChartModel {
    store: TimeSeriesStore,
    presenter: ChartPresenter,
    view: ChartView,
}

impl Default for RatingChartModel {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingChartModel {
    pub fn new() -> Self {
        let store = TimeSeriesStore::new();
        let presenter = ChartPresenter::new();
        let view = presenter.present(store.data());
        Self {
            store,
            presenter,
            view,
        }
    }

    pub fn view(&self) -> &ChartView {
        &self.view
    }

    pub fn store(&self) -> &TimeSeriesStore {
        &self.store
    }

    pub fn granularity(&self) -> Granularity {
        self.presenter.granularity()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn select(&mut self, granularity: Granularity) {
        self.presenter.select(granularity);
        self.recompute();
    }

    pub fn begin_fetch(&mut self, player_id: u64) -> FetchTicket {
        self.store.begin_fetch(player_id)
    }

    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<CombinedChartData, FetchError>,
    ) -> FetchOutcome {
        let outcome = self.store.complete(ticket, result);
        if outcome == FetchOutcome::Applied {
            self.recompute();
        }
        outcome
    }

    pub fn recompute(&mut self) {
        let granularity = self.presenter.granularity();
        let (solo, team) = self.store.select_granularity(granularity);
        self.view = present_series(granularity, solo, team);
    }
}

/// Shared owner of a [`RatingChartModel`] that a fetch writes back into.
///
/// Both methods return `None` once the owner is gone, which ends the fetch
/// without touching anything.
pub trait ModelCell {
    fn begin_fetch(&self, player_id: u64) -> Option<FetchTicket>;

    fn complete(
        &self,
        ticket: FetchTicket,
        result: Result<CombinedChartData, FetchError>,
    ) -> Option<FetchOutcome>;
}

impl ModelCell for RefCell<RatingChartModel> {
    fn begin_fetch(&self, player_id: u64) -> Option<FetchTicket> {
        Some(self.borrow_mut().begin_fetch(player_id))
    }

    fn complete(
        &self,
        ticket: FetchTicket,
        result: Result<CombinedChartData, FetchError>,
    ) -> Option<FetchOutcome> {
        Some(self.borrow_mut().complete(ticket, result))
    }
}

/// Load `player_id` into `model`. The model is never borrowed across the await,
/// and a response overtaken by a newer request comes back as
/// [`FetchOutcome::Stale`] without changing the model.
pub async fn load<C: ModelCell, S: RatingSource>(
    model: &C,
    source: &S,
    player_id: u64,
) -> Option<FetchOutcome> {
    let ticket = model.begin_fetch(player_id)?;
    let result = source.fetch_ratings(player_id).await;
    model.complete(ticket, result)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::future::Future;
    use std::pin::pin;

    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::poll;

    use super::*;

    type Reply = Result<CombinedChartData, FetchError>;

    struct CountingSource {
        data: CombinedChartData,
        calls: Cell<usize>,
    }

    impl RatingSource for CountingSource {
        fn fetch_ratings(
            &self,
            _player_id: u64,
        ) -> impl Future<Output = Result<CombinedChartData, FetchError>> {
            self.calls.set(self.calls.get() + 1);
            let data = self.data.clone();
            async move { Ok(data) }
        }
    }

    /// Source whose responses are released by the test, per player.
    #[derive(Default)]
    struct ChannelSource {
        pending: RefCell<HashMap<u64, oneshot::Receiver<Reply>>>,
        calls: Cell<usize>,
    }

    impl ChannelSource {
        fn hold(&self, player_id: u64) -> oneshot::Sender<Reply> {
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().insert(player_id, rx);
            tx
        }
    }

    impl RatingSource for ChannelSource {
        fn fetch_ratings(&self, player_id: u64) -> impl Future<Output = Reply> {
            self.calls.set(self.calls.get() + 1);
            let rx = self.pending.borrow_mut().remove(&player_id);
            async move {
                match rx {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(FetchError::Network("dropped".into()))),
                    None => Err(FetchError::Status(404)),
                }
            }
        }
    }

    /// Owner that has already been torn down.
    struct Dropped;

    impl ModelCell for Dropped {
        fn begin_fetch(&self, _player_id: u64) -> Option<FetchTicket> {
            None
        }

        fn complete(&self, _ticket: FetchTicket, _result: Reply) -> Option<FetchOutcome> {
            None
        }
    }

    fn single_day(solo: f64) -> CombinedChartData {
        let mut data = CombinedChartData::default();
        data.solo.day.push(RatingPoint::new("2024-09-01", solo));
        data
    }

    fn sample() -> CombinedChartData {
        let mut data = CombinedChartData::default();
        data.solo.day = vec![
            RatingPoint::new("2024-09-01", 1132.0),
            RatingPoint::new("2024-09-02", 1180.0),
            RatingPoint::new("2024-09-03", 1267.5),
        ];
        data.team.day = vec![RatingPoint::new("2024-09-01", 1050.0)];
        data.solo.week = vec![RatingPoint::new("2024-09-02", 1200.0)];
        data.solo.month = vec![RatingPoint::new("2024-09-01", 0.0)];
        data
    }

    #[test]
    fn presents_day_slice() {
        let view = present(Granularity::Day, &sample());
        assert_eq!((view.y_min, view.y_max), (1000.0, 1300.0));
        assert_eq!(view.tick_count, 4);
        assert_eq!(view.ticks(), vec![1000.0, 1100.0, 1200.0, 1300.0]);
        assert!(view.show_solo);
        assert!(view.show_team);
        assert_eq!(view.points.len(), 3);
        assert!(view.points.iter().all(|p| p.team_value == 1050.0));
    }

    #[test]
    fn empty_team_series_is_hidden_and_does_not_widen_axis() {
        let view = present(Granularity::Week, &sample());
        assert_eq!((view.y_min, view.y_max), (1200.0, 1200.0));
        assert_eq!(view.tick_count, 1);
        assert!(view.shows(MatchType::Solo));
        assert!(!view.shows(MatchType::Team));
        assert_eq!(view.points[0].team_value, 0.0);
    }

    #[test]
    fn flat_zero_series_is_hidden() {
        let view = present(Granularity::Month, &sample());
        assert!(!view.show_solo);
        assert!(!view.show_team);
        assert_eq!(view.points.len(), 1);
    }

    #[test]
    fn empty_data_renders_nothing() {
        let view = present(Granularity::Day, &CombinedChartData::default());
        assert!(view.points.is_empty());
        assert_eq!((view.y_min, view.y_max), (0.0, 0.0));
        assert!(!view.show_solo && !view.show_team);
    }

    #[test]
    fn presenting_is_idempotent() {
        let data = sample();
        let presenter = ChartPresenter::new();
        assert_eq!(presenter.present(&data), presenter.present(&data));
    }

    #[test]
    fn presenter_starts_on_day_and_moves_only_on_select() {
        let mut presenter = ChartPresenter::new();
        assert_eq!(presenter.granularity(), Granularity::Day);
        assert!(presenter.select(Granularity::Month));
        assert!(!presenter.select(Granularity::Month));
        assert_eq!(presenter.granularity(), Granularity::Month);
    }

    #[test]
    fn granularity_switches_do_not_refetch() {
        let model = RefCell::new(RatingChartModel::new());
        let source = CountingSource {
            data: sample(),
            calls: Cell::new(0),
        };

        let outcome = block_on(load(&model, &source, 42));
        assert_eq!(outcome, Some(FetchOutcome::Applied));
        assert_eq!(model.borrow().view().points.len(), 3);

        for granularity in [Granularity::Week, Granularity::Month, Granularity::Day] {
            model.borrow_mut().select(granularity);
            assert_eq!(model.borrow().view().granularity, granularity);
        }
        assert_eq!(source.calls.get(), 1);
        assert!(!model.borrow().is_loading());
    }

    #[test]
    fn selection_survives_data_refresh() {
        let mut model = RatingChartModel::new();
        model.select(Granularity::Week);
        let ticket = model.begin_fetch(1);
        model.complete(ticket, Ok(sample()));
        assert_eq!(model.view().granularity, Granularity::Week);
        assert_eq!(model.view(), &present(Granularity::Week, &sample()));
    }

    #[test]
    fn failed_refresh_keeps_previous_view() {
        let mut model = RatingChartModel::new();
        let ticket = model.begin_fetch(1);
        model.complete(ticket, Ok(sample()));
        let before = model.view().clone();

        let ticket = model.begin_fetch(1);
        assert!(model.is_loading());
        let outcome = model.complete(ticket, Err(FetchError::Status(502)));
        assert!(matches!(outcome, FetchOutcome::Failed(_)));
        assert_eq!(model.view(), &before);
        assert!(!model.is_loading());
    }

    #[test]
    fn out_of_order_loads_keep_newest_player() {
        let model = RefCell::new(RatingChartModel::new());
        let source = ChannelSource::default();
        let tx_a = source.hold(1);
        let tx_b = source.hold(2);

        block_on(async {
            let mut load_a = pin!(load(&model, &source, 1));
            let mut load_b = pin!(load(&model, &source, 2));
            assert!(poll!(load_a.as_mut()).is_pending());
            assert!(poll!(load_b.as_mut()).is_pending());

            tx_b.send(Ok(single_day(2000.0))).expect("receiver alive");
            assert_eq!(load_b.await, Some(FetchOutcome::Applied));

            tx_a.send(Ok(single_day(1000.0))).expect("receiver alive");
            assert_eq!(load_a.await, Some(FetchOutcome::Stale));
        });

        let model = model.into_inner();
        assert_eq!(model.store().data(), &single_day(2000.0));
        assert_eq!(model.store().player_id(), Some(2));
        assert_eq!(model.view(), &present(Granularity::Day, &single_day(2000.0)));
        assert!(!model.is_loading());
        assert_eq!(source.calls.get(), 2);
    }

    #[test]
    fn stale_load_after_failed_newer_load_stays_discarded() {
        let model = RefCell::new(RatingChartModel::new());
        let source = ChannelSource::default();
        let tx_a = source.hold(1);
        let tx_b = source.hold(2);

        block_on(async {
            let mut load_a = pin!(load(&model, &source, 1));
            let mut load_b = pin!(load(&model, &source, 2));
            assert!(poll!(load_a.as_mut()).is_pending());
            assert!(poll!(load_b.as_mut()).is_pending());

            tx_b.send(Err(FetchError::Status(500))).expect("receiver alive");
            assert!(matches!(load_b.await, Some(FetchOutcome::Failed(_))));

            tx_a.send(Ok(single_day(1000.0))).expect("receiver alive");
            assert_eq!(load_a.await, Some(FetchOutcome::Stale));
        });

        let model = model.into_inner();
        assert_eq!(model.store().data(), &CombinedChartData::default());
        assert!(model.view().points.is_empty());
        assert!(!model.is_loading());
    }

    #[test]
    fn load_into_dropped_owner_never_fetches() {
        let source = CountingSource {
            data: sample(),
            calls: Cell::new(0),
        };
        assert_eq!(block_on(load(&Dropped, &source, 7)), None);
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn recompute_follows_store_selection() {
        let mut model = RatingChartModel::new();
        let ticket = model.begin_fetch(1);
        model.complete(ticket, Ok(sample()));
        for granularity in Granularity::ALL {
            model.select(granularity);
            let (solo, team) = model.store().select_granularity(granularity);
            assert_eq!(model.view(), &present_series(granularity, solo, team));
            assert_eq!(model.view(), &present(granularity, &sample()));
        }
    }
}
