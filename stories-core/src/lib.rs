pub mod config;
pub mod effect;
pub mod error;
pub mod filter;
pub mod persisted;
pub mod storage;
pub mod story;

pub use config::{app_config_dir, AppConfig, SearchConfig, ThemeConfig, UiConfig};
pub use effect::Effect;
pub use error::{ConfigError, StoreError, StoryError};
pub use filter::{filter_stories, matches_title};
pub use persisted::PersistedValue;
pub use storage::LocalStore;
pub use story::{load_stories, sample_stories, validate_stories, RawStory, Story};
