use super::traits::ConfigSection;
use crate::error::StockVizError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the price history comes from and how its dates are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSourceConfig {
    pub file_path: PathBuf,
    pub date_format: String,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from("Nifty_Stocks.csv"),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl ConfigSection for DataSourceConfig {
    fn section_name() -> &'static str {
        "data_source"
    }

    fn validate(&self) -> Result<(), StockVizError> {
        if self.file_path.as_os_str().is_empty() {
            return Err(StockVizError::Configuration(
                "Data file path must not be empty".to_string(),
            ));
        }
        if self.date_format.is_empty() {
            return Err(StockVizError::Configuration(
                "Date format must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
