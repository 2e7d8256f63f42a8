use super::traits::ConfigSection;
use crate::error::StockVizError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of rows shown in the "recent data" table.
    pub recent_rows: usize,
    pub chart_height: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            recent_rows: 10,
            chart_height: 320.0,
        }
    }
}

impl ConfigSection for DisplayConfig {
    fn section_name() -> &'static str {
        "display"
    }

    fn validate(&self) -> Result<(), StockVizError> {
        if self.recent_rows == 0 {
            return Err(StockVizError::Configuration(
                "Recent row count must be at least 1".to_string(),
            ));
        }
        if !self.chart_height.is_finite() || self.chart_height <= 0.0 {
            return Err(StockVizError::Configuration(
                "Chart height must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
