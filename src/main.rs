#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the PC recommender desktop client.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use pcrec::config;
use pcrec::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use pcrec::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = config::load_or_default();
    if let Err(err) = &settings {
        tracing::error!("Failed to load config: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1100.0, 820.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "PC Recommender",
        native_options,
        Box::new(move |cc| match settings {
            Ok(settings) => Ok(Box::new(EguiApp::new(cc, &settings))),
            Err(err) => Ok(Box::new(LaunchError {
                message: format!("Failed to load config: {err}"),
            })),
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
