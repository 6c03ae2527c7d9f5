pub mod error;
pub mod filters;
pub mod merge;
pub mod nav;
pub mod presenter;
pub mod range;
pub mod rating;
pub mod store;
pub mod time_format;

pub use error::FetchError;
pub use filters::{BuildOption, MatchFilters, RecordedGame, VersionFilterState};
pub use merge::{MergedPoint, merge_series};
pub use presenter::{ChartPresenter, ChartView, ModelCell, RatingChartModel, load, present, present_series};
pub use rating::*;
pub use store::{FetchOutcome, FetchTicket, RatingSource, TimeSeriesStore};
