use eframe::egui;

use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AircastApp {
    pub state: AppState,
}

impl AircastApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for AircastApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // A fatal startup error replaces the whole UI; nothing else renders.
        if let Some(message) = self.state.fatal.clone() {
            egui::CentralPanel::default().show(ctx, |ui| {
                panels::fatal_screen(ui, &message);
            });
            return;
        }

        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: lag inputs ----
        egui::SidePanel::left("input_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: results + trend ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::central_panel(ui, &self.state);
        });
    }
}
