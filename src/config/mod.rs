pub mod data_source;
pub mod display;
pub mod manager;
pub mod traits;

pub use data_source::DataSourceConfig;
pub use display::DisplayConfig;
pub use manager::{AppConfig, ConfigManager};
