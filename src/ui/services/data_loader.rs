use crate::config::DataSourceConfig;
use crate::data::{HistoryCache, LoadOutcome};

/// UI-facing load service. Owns the process-wide memoization cache and
/// maps crate errors to display strings at the UI boundary.
pub struct DataLoader {
    cache: HistoryCache,
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            cache: HistoryCache::new(),
        }
    }

    pub fn load(&self, source: &DataSourceConfig) -> Result<LoadOutcome, String> {
        self.cache
            .load(&source.file_path, &source.date_format)
            .map_err(|e| e.to_string())
    }
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}
