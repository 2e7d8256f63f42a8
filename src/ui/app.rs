use super::panels::{LeftPanel, MainPanel};
use super::services::DataLoader;
use super::state::{AppState, LoadState};
use crate::config::AppConfig;
use crate::data::{CsvConnector, LoadOutcome};

pub struct StockVizApp {
    config: AppConfig,
    loader: DataLoader,
    state: AppState,
    left_panel: LeftPanel,
    main_panel: MainPanel,
}

impl StockVizApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut app = Self {
            state: AppState::new(&config),
            loader: DataLoader::new(),
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
            config,
        };
        app.refresh_data();
        app
    }

    /// Start of a pipeline pass: refresh the memoized load and keep the
    /// derived metadata in step.
    fn refresh_data(&mut self) {
        let source = &self.config.data_source;
        self.state.load = match self.loader.load(source) {
            Ok(LoadOutcome::Loaded(df)) => {
                if self.state.metadata.is_none() {
                    match CsvConnector::create_metadata(&source.file_path, &df) {
                        Ok(meta) => self.state.metadata = Some(meta),
                        Err(e) => log::warn!("Could not derive metadata: {}", e),
                    }
                }
                self.state.status_message = format!("{} rows loaded", df.height());
                LoadState::Ready(df)
            }
            Ok(LoadOutcome::Missing) => {
                self.state.status_message = "Data file not found".to_string();
                LoadState::Missing {
                    path: source.file_path.clone(),
                }
            }
            Err(e) => {
                self.state.status_message = e.clone();
                LoadState::Failed(e)
            }
        };
    }
}

impl eframe::App for StockVizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Immediate mode: the whole pipeline re-runs every frame from the
        // cached table plus the current selection.
        self.refresh_data();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Nifty Stock Price Visualizer");
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.state.status_message);
        });

        egui::SidePanel::left("sidebar")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.left_panel.show(ui, &mut self.state);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.main_panel.show(ui, &mut self.state);
            });
        });
    }
}
