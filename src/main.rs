use eframe::NativeOptions;
use std::path::Path;
use stockviz::config::ConfigManager;
use stockviz::ui::StockVizApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ConfigManager::new();
    // Optional config file next to the binary; defaults apply when absent.
    let config_path = Path::new("stockviz.toml");
    if config_path.exists() {
        if let Err(e) = config.load_from_file(config_path) {
            log::warn!("Ignoring invalid config file: {}", e);
        }
    }

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([900.0, 560.0])
            .with_title("StockViz - Nifty Stock Price Visualizer"),
        ..Default::default()
    };

    eframe::run_native(
        "StockViz",
        native_options,
        Box::new(move |cc| Ok(Box::new(StockVizApp::new(cc, config.get())))),
    )
}
