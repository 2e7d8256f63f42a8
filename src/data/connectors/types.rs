use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Required columns for stock history data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredColumn {
    Date,
    Symbol,
    Category,
    Close,
}

impl RequiredColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Symbol => "Symbol",
            Self::Category => "Category",
            Self::Close => "Close",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Date, Self::Symbol, Self::Category, Self::Close]
    }

    /// Common alternative column names
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::Date => vec!["Date", "date", "DATE", "datetime", "timestamp"],
            Self::Symbol => vec!["Symbol", "symbol", "SYMBOL", "ticker", "Ticker"],
            Self::Category => vec!["Category", "category", "CATEGORY", "sector", "Sector"],
            Self::Close => vec!["Close", "close", "CLOSE", "c"],
        }
    }
}

/// Metadata about a loaded price history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub file_path: String,
    pub num_rows: usize,
    pub num_columns: usize,
    pub columns: Vec<String>,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub close_range: (f64, f64), // (min, max)
}

/// A sub-table formatted for a grid widget: column names plus
/// rows already rendered as strings.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
