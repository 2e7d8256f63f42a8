use crate::data::StockQuery;
use crate::ui::state::{AppState, LoadState};

/// The two dependent dropdowns: pick a category, then a symbol from
/// within that category. Changing the category resets the symbol to the
/// first one available, like a freshly rendered dropdown.
pub struct SymbolSelector;

impl SymbolSelector {
    pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
        let df = match &state.load {
            LoadState::Ready(df) => df.clone(),
            _ => {
                ui.label("No data loaded");
                return;
            }
        };

        let categories = match StockQuery::categories(&df) {
            Ok(categories) => categories,
            Err(e) => {
                ui.colored_label(egui::Color32::RED, format!("Error: {}", e));
                return;
            }
        };
        if categories.is_empty() {
            ui.label("The data file contains no categories");
            return;
        }

        // Fall back to the first entry whenever the stored selection is
        // absent from the current list.
        let valid = state
            .selected_category
            .as_deref()
            .map(|c| categories.iter().any(|x| x == c))
            .unwrap_or(false);
        if !valid {
            state.selected_category = Some(categories[0].clone());
            state.selected_symbol = None;
        }
        let mut category = state.selected_category.clone().unwrap_or_default();

        ui.label("Select a Category:");
        egui::ComboBox::from_id_salt("category_select")
            .selected_text(category.clone())
            .show_ui(ui, |ui| {
                for entry in &categories {
                    ui.selectable_value(&mut category, entry.clone(), entry);
                }
            });

        if state.selected_category.as_deref() != Some(category.as_str()) {
            state.selected_category = Some(category.clone());
            // Dependent selector: a new category invalidates the symbol.
            state.selected_symbol = None;
        }

        let category_df = match StockQuery::filter_category(&df, &category) {
            Ok(category_df) => category_df,
            Err(e) => {
                ui.colored_label(egui::Color32::RED, format!("Error: {}", e));
                return;
            }
        };
        let symbols = match StockQuery::symbols_in(&category_df) {
            Ok(symbols) => symbols,
            Err(e) => {
                ui.colored_label(egui::Color32::RED, format!("Error: {}", e));
                return;
            }
        };
        if symbols.is_empty() {
            ui.label("No symbols in this category");
            return;
        }

        let valid = state
            .selected_symbol
            .as_deref()
            .map(|s| symbols.iter().any(|x| x == s))
            .unwrap_or(false);
        if !valid {
            state.selected_symbol = Some(symbols[0].clone());
        }
        let mut symbol = state.selected_symbol.clone().unwrap_or_default();

        ui.label("Select a Stock Symbol:");
        egui::ComboBox::from_id_salt("symbol_select")
            .selected_text(symbol.clone())
            .show_ui(ui, |ui| {
                for entry in &symbols {
                    ui.selectable_value(&mut symbol, entry.clone(), entry);
                }
            });

        state.selected_symbol = Some(symbol);
    }
}
