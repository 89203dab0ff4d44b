mod controller;
mod ui;

use eframe::egui;

use crate::ui::ConverterApp;

const WINDOW_TITLE: &str = "Decimal / Binary Converter";

fn main() -> eframe::Result<()> {
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([720.0, 420.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(ConverterApp::new("Number bits")))),
    )
}
