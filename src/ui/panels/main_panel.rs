use crate::data::StockQuery;
use crate::ui::state::{AppState, LoadState};
use crate::ui::widgets::{DataTable, PriceChart};
use polars::prelude::DataFrame;

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        match &state.load {
            LoadState::Missing { path } => {
                ui.colored_label(egui::Color32::RED, "Error: The data file was not found.");
                ui.label(format!(
                    "Please ensure the file is located at the specified path: '{}'",
                    path.display()
                ));
            }
            LoadState::Failed(e) => {
                ui.colored_label(egui::Color32::RED, format!("Error loading data: {}", e));
            }
            LoadState::Ready(df) => {
                let df = df.clone();
                Self::show_dashboard(ui, state, &df);
            }
        }
    }

    fn show_dashboard(ui: &mut egui::Ui, state: &AppState, df: &DataFrame) {
        let (Some(category), Some(symbol)) = (
            state.selected_category.as_deref(),
            state.selected_symbol.as_deref(),
        ) else {
            ui.label("Select a category and a stock symbol to begin.");
            return;
        };

        ui.heading(format!("Displaying price history for: {}", symbol));
        ui.label(format!("Category: {}", category));
        ui.separator();

        // Category filter, then symbol filter within it.
        let category_df = match StockQuery::filter_category(df, category) {
            Ok(category_df) => category_df,
            Err(e) => {
                ui.colored_label(egui::Color32::RED, format!("Error: {}", e));
                return;
            }
        };
        let symbol_df = match StockQuery::filter_symbol(&category_df, symbol) {
            Ok(symbol_df) => symbol_df,
            Err(e) => {
                ui.colored_label(egui::Color32::RED, format!("Error: {}", e));
                return;
            }
        };

        ui.strong("Recent Stock Data");
        match StockQuery::recent_view(&symbol_df, state.recent_rows) {
            Ok(view) => DataTable::show(ui, &view),
            Err(e) => {
                ui.colored_label(egui::Color32::RED, format!("Error: {}", e));
                return;
            }
        }

        ui.separator();

        ui.strong("Closing Price History");
        match StockQuery::close_series(&symbol_df) {
            Ok(points) => PriceChart::show(ui, symbol, state.chart_height, points),
            Err(e) => {
                ui.colored_label(egui::Color32::RED, format!("Error: {}", e));
            }
        }
    }
}
