// Desktop entry point for the roommate intake form
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod http_client;
pub mod intake;
mod ui;
pub mod upload;
pub mod wasm_utils;

#[cfg(feature = "tokio")]
#[tokio::main]
async fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 860.0])
            .with_min_inner_size([640.0, 560.0])
            .with_title("Roommate Match Making"),
        ..Default::default()
    };

    eframe::run_native(
        "Roommate Match Making",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(app::IntakeApp::new(cc)))
        }),
    )
}

#[cfg(not(feature = "tokio"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 860.0])
            .with_min_inner_size([640.0, 560.0])
            .with_title("Roommate Match Making"),
        ..Default::default()
    };

    eframe::run_native(
        "Roommate Match Making",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(app::IntakeApp::new(cc)))
        }),
    )
}
