mod app;
mod export;
mod style;

use crate::app::ExtractorApp;

fn main() -> eframe::Result<()> {
    log4rs::init_file("log4rs.yaml", Default::default()).expect("Failed to initialize log4rs");

    log::info!("Starting up");
    eframe::run_native(
        "NDS Icon Extractor v0.1.0",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([420.0, 620.0])
                .with_drag_and_drop(true),
            ..Default::default()
        },
        Box::new(|cc| Box::new(ExtractorApp::new(cc))),
    )
}
