mod app;
mod panels;
mod services;
mod state;
mod widgets;

pub use app::StockVizApp;
pub use state::{AppState, LoadState};
