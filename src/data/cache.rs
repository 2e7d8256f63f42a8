use super::connectors::CsvConnector;
use crate::error::Result;
use polars::prelude::DataFrame;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// What a load produced: either the parsed history, or the sentinel for a
/// file that was not there. Both outcomes are memoized; errors are not.
#[derive(Clone)]
pub enum LoadOutcome {
    Loaded(Arc<DataFrame>),
    Missing,
}

impl LoadOutcome {
    pub fn table(&self) -> Option<&Arc<DataFrame>> {
        match self {
            Self::Loaded(df) => Some(df),
            Self::Missing => None,
        }
    }
}

/// Process-lifetime memoization of CSV loads, keyed by file path. The
/// cached frame is immutable after construction and handed out as `Arc`,
/// so repeated lookups never touch the filesystem again.
pub struct HistoryCache {
    entries: Mutex<HashMap<PathBuf, LoadOutcome>>,
}

impl HistoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn load(&self, path: &Path, date_format: &str) -> Result<LoadOutcome> {
        if let Some(hit) = self.entries.lock().unwrap().get(path) {
            log::debug!("Cache hit for {}", path.display());
            return Ok(hit.clone());
        }

        let outcome = if path.exists() {
            let df = CsvConnector::load_history(path, date_format)?;
            LoadOutcome::Loaded(Arc::new(df))
        } else {
            log::info!("Data file not found: {}", path.display());
            LoadOutcome::Missing
        };

        self.entries
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), outcome.clone());
        Ok(outcome)
    }
}

impl Default for HistoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "Date,Symbol,Category,Close\n\
                       2023-01-02,TCS,IT,3300.5\n\
                       2023-01-03,TCS,IT,3312.0\n";

    #[test]
    fn test_load_memoized_without_reread() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        std::fs::write(&path, CSV).unwrap();

        let cache = HistoryCache::new();
        let first = cache.load(&path, "%Y-%m-%d").unwrap();
        let first = first.table().expect("file exists").clone();

        // Remove the file: a second load must come from the cache.
        std::fs::remove_file(&path).unwrap();
        let second = cache.load(&path, "%Y-%m-%d").unwrap();
        let second = second.table().expect("memoized").clone();

        assert_eq!(first.height(), 2);
        assert!(first.equals(&second));
    }

    #[test]
    fn test_missing_file_yields_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");

        let cache = HistoryCache::new();
        let outcome = cache.load(&path, "%Y-%m-%d").unwrap();
        assert!(outcome.table().is_none());
    }

    #[test]
    fn test_missing_outcome_is_memoized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("late.csv");

        let cache = HistoryCache::new();
        let outcome = cache.load(&path, "%Y-%m-%d").unwrap();
        assert!(outcome.table().is_none());

        // The file appearing later does not invalidate the sentinel;
        // the cache lives for the process.
        std::fs::write(&path, CSV).unwrap();
        let outcome = cache.load(&path, "%Y-%m-%d").unwrap();
        assert!(outcome.table().is_none());
    }

    #[test]
    fn test_distinct_paths_cached_separately() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        std::fs::write(&a, CSV).unwrap();

        let cache = HistoryCache::new();
        assert!(cache.load(&a, "%Y-%m-%d").unwrap().table().is_some());
        assert!(cache.load(&b, "%Y-%m-%d").unwrap().table().is_none());
    }

    #[test]
    fn test_parse_error_not_memoized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "Date,Symbol,Category,Close\nnot-a-date,TCS,IT,1.0\n").unwrap();

        let cache = HistoryCache::new();
        assert!(cache.load(&path, "%Y-%m-%d").is_err());

        // Fixing the file makes the next load succeed.
        std::fs::write(&path, CSV).unwrap();
        assert!(cache.load(&path, "%Y-%m-%d").unwrap().table().is_some());
    }
}
