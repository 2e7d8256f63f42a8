use crate::ui::state::AppState;
use crate::ui::widgets::SymbolSelector;

pub struct LeftPanel;

impl LeftPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Select Your Stock");
        ui.separator();

        SymbolSelector::show(ui, state);

        ui.separator();

        ui.collapsing("Dataset", |ui| {
            Self::show_dataset_summary(ui, state);
        });
    }

    fn show_dataset_summary(ui: &mut egui::Ui, state: &AppState) {
        let Some(meta) = &state.metadata else {
            ui.label("No data loaded");
            return;
        };

        ui.label(format!("File: {}", meta.file_path));
        ui.label(format!("Rows: {}", meta.num_rows));
        ui.label(format!("Columns: {}", meta.num_columns));
        if let Some((start, end)) = meta.date_range {
            ui.label(format!("Dates: {} to {}", start, end));
        }
        ui.label(format!(
            "Close range: {:.2} to {:.2}",
            meta.close_range.0, meta.close_range.1
        ));
    }
}
