use crate::config::AppConfig;
use crate::data::DatasetMetadata;
use polars::prelude::DataFrame;
use std::path::PathBuf;
use std::sync::Arc;

/// What the most recent load pass produced. Refreshed every frame from the
/// memoized cache, so after the first frame this never touches the disk.
pub enum LoadState {
    Ready(Arc<DataFrame>),
    Missing { path: PathBuf },
    Failed(String),
}

/// Central application state for the UI
pub struct AppState {
    pub load: LoadState,
    pub metadata: Option<DatasetMetadata>,

    // Selection (transient, per interaction)
    pub selected_category: Option<String>,
    pub selected_symbol: Option<String>,

    // Display configuration
    pub recent_rows: usize,
    pub chart_height: f32,

    pub status_message: String,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            load: LoadState::Missing {
                path: config.data_source.file_path.clone(),
            },
            metadata: None,
            selected_category: None,
            selected_symbol: None,
            recent_rows: config.display.recent_rows,
            chart_height: config.display.chart_height,
            status_message: "Ready".to_string(),
        }
    }
}
