use crate::data::TableView;

pub struct DataTable;

impl DataTable {
    pub fn show(ui: &mut egui::Ui, view: &TableView) {
        if view.is_empty() {
            ui.label("No rows for this selection.");
            return;
        }

        egui::ScrollArea::horizontal()
            .id_salt("recent_rows_scroll")
            .show(ui, |ui| {
                egui::Grid::new("recent_rows_grid")
                    .striped(true)
                    .show(ui, |ui| {
                        for col_name in &view.columns {
                            ui.strong(col_name);
                        }
                        ui.end_row();

                        for row in &view.rows {
                            for cell in row {
                                ui.label(cell);
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}
