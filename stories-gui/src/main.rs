mod app;
mod widgets;

use std::sync::Arc;

use eframe::{egui, NativeOptions};
use stories_core::{
    app_config_dir, load_stories, sample_stories, AppConfig, LocalStore, PersistedValue, Story,
};
use tokio::runtime::Runtime;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::{AppInit, StoriesApp};

fn main() -> eframe::Result<()> {
    init_tracing();

    let runtime = Arc::new(Runtime::new().expect("failed to initialise Tokio runtime"));
    let config = AppConfig::load();
    let stories = load_story_source(&config);
    let store = load_local_store(&runtime);
    let search = runtime.block_on(PersistedValue::create(
        store,
        config.search.storage_key.clone(),
        config.search.default_query.clone(),
    ));
    info!(stories = stories.len(), query = %search.value(), "starting");

    let init = AppInit {
        runtime,
        theme: config.theme.clone(),
        font_size: config.ui.font_size,
        stories,
        search,
    };

    eframe::run_native(
        "My Hacker Stories",
        NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([config.ui.window_width, config.ui.window_height])
                .with_min_inner_size([320.0, 240.0]),
            ..Default::default()
        },
        Box::new(move |_cc| Box::new(StoriesApp::new(init))),
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn load_story_source(config: &AppConfig) -> Vec<Story> {
    let Some(path) = &config.ui.stories_file else {
        return sample_stories();
    };
    match load_stories(path) {
        Ok(stories) => stories,
        Err(e) => {
            warn!(error = %e, path = %path.display(), "failed to load stories file, using built-in stories");
            sample_stories()
        }
    }
}

fn load_local_store(runtime: &Arc<Runtime>) -> LocalStore {
    // Linux: ~/.config/hacker-stories/local_storage.json
    match app_config_dir() {
        Ok(dir) => runtime.block_on(LocalStore::load_from(dir.join("local_storage.json"))),
        Err(e) => {
            warn!(error = %e, "no storage location, search will not persist");
            LocalStore::in_memory()
        }
    }
}
