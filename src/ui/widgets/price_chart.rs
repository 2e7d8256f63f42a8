use crate::data::query::date_from_epoch_days;
use egui_plot::{Legend, Line, Plot, PlotPoints};

/// Line chart of closing price over time. Points arrive pre-sorted by
/// date, with x as days since epoch.
pub struct PriceChart;

impl PriceChart {
    pub fn show(ui: &mut egui::Ui, symbol: &str, height: f32, points: Vec<[f64; 2]>) {
        if points.is_empty() {
            ui.label("No price points to plot.");
            return;
        }

        // Series blue: #007bff
        let line_color = egui::Color32::from_rgb(0x00, 0x7b, 0xff);

        Plot::new("close_plot")
            .height(height)
            .show_grid(true)
            .legend(Legend::default())
            .x_axis_formatter(|mark, _range| format_epoch_day(mark.value))
            .label_formatter(|name, value| {
                if name.is_empty() {
                    format!("{}  {:.2}", format_epoch_day(value.x), value.y)
                } else {
                    format!("{}\n{}  {:.2}", name, format_epoch_day(value.x), value.y)
                }
            })
            .show(ui, |plot_ui| {
                let pts: PlotPoints = points.into();
                plot_ui.line(Line::new(symbol, pts).color(line_color));
            });
    }
}

/// Compact date labels keep a dense x axis readable.
fn format_epoch_day(value: f64) -> String {
    date_from_epoch_days(value.round() as i32)
        .format("%d %b %y")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_epoch_day() {
        assert_eq!(format_epoch_day(0.0), "01 Jan 70");
        assert_eq!(format_epoch_day(19359.2), "02 Jan 23");
    }
}
