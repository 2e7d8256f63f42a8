pub mod cache;
pub mod connectors;
pub mod query;

pub use cache::{HistoryCache, LoadOutcome};
pub use connectors::{CsvConnector, DataValidator, DatasetMetadata, RequiredColumn, TableView};
pub use query::StockQuery;
