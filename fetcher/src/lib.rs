pub mod collector;
pub mod config;
pub mod details;
pub mod error;
pub mod export;
pub mod flatten;
pub mod models;
pub mod pacing;
pub mod pipeline;
pub mod youtube;

pub use collector::SearchCollector;
pub use config::Config;
pub use details::DetailFetcher;
pub use error::{ConfigError, FetchError};
pub use models::{FlatRow, VideoRecord};
pub use pacing::{FixedDelay, NoDelay, Pacer};
pub use youtube::{SearchApi, VideoLookupApi, YouTubeClient};
