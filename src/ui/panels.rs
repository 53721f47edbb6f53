use eframe::egui::{self, Color32, Grid, RichText, Ui};

use crate::features::FeatureVector;
use crate::state::AppState;
use crate::verdict::AirQuality;

// ---------------------------------------------------------------------------
// Left side panel – lag inputs
// ---------------------------------------------------------------------------

/// Render the left input panel: three lag fields and the run button.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("NO₂ inputs (mol/m²)");
    ui.separator();

    lag_input(ui, "Day −1 (yesterday)", &mut state.lag1);
    lag_input(ui, "Day −2", &mut state.lag2);
    lag_input(ui, "Day −3", &mut state.lag3);

    ui.add_space(8.0);
    if ui.button("Run prediction").clicked() {
        state.run_prediction();
    }

    ui.add_space(8.0);
    ui.separator();

    // Ordered feature row, as it is handed to the scaler.
    ui.strong("Assembled features");
    let names = FeatureVector::names();
    let ordered = [state.lag3, state.lag2, state.lag1];
    Grid::new("assembled_features").striped(true).show(ui, |ui: &mut Ui| {
        for name in names {
            ui.label(name);
        }
        ui.end_row();
        for value in ordered {
            ui.monospace(format!("{value:.6}"));
        }
        ui.end_row();
    });

    if let Some(outcome) = &state.outcome {
        ui.add_space(4.0);
        ui.strong("After scaling (z-score)");
        Grid::new("scaled_features").striped(true).show(ui, |ui: &mut Ui| {
            for name in names {
                ui.label(name);
            }
            ui.end_row();
            for value in outcome.scaled.0 {
                ui.monospace(format!("{value:.4}"));
            }
            ui.end_row();
        });
    }
}

/// One labelled drag-value row, clamped to non-negative, 6-decimal display.
fn lag_input(ui: &mut Ui, label: &str, value: &mut f64) {
    ui.label(label);
    ui.add(
        egui::DragValue::new(value)
            .speed(0.000001)
            .range(0.0..=f64::INFINITY)
            .custom_formatter(|v, _| format!("{v:.6}")),
    );
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Central panel – prediction results
// ---------------------------------------------------------------------------

/// Render the central panel: metrics, verdict, and the lag trend plot.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let Some(outcome) = &state.outcome else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Enter the last three days of NO₂ and run a prediction.");
        });
        return;
    };

    ui.heading("Prediction");
    ui.separator();

    Grid::new("prediction_metrics").spacing([24.0, 6.0]).show(ui, |ui: &mut Ui| {
        ui.label("Predicted NO₂ (standard scale)");
        ui.strong(format!("{:.1} µg/m³", outcome.standardized_ug_m3));
        ui.end_row();
        ui.label("Predicted NO₂ (raw column density)");
        ui.strong(format!("{:.6} mol/m²", outcome.raw_mol_per_m2));
        ui.end_row();
    });

    ui.add_space(8.0);

    let (color, label) = match outcome.verdict.quality {
        AirQuality::Good => (Color32::from_rgb(0, 160, 60), "Good ✅"),
        AirQuality::Bad => (Color32::from_rgb(200, 40, 40), "Bad ⚠"),
    };
    ui.heading(RichText::new(label).color(color));
    ui.label(&outcome.verdict.description);

    ui.add_space(12.0);
    ui.separator();
    super::plot::trend_plot(ui, state);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label("Aircast – next-day NO₂ forecast (KNN, lag 3)");
        ui.separator();

        if state.predictor.is_some() {
            ui.label(RichText::new("model and scaler loaded").color(Color32::DARK_GREEN));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Fatal screen
// ---------------------------------------------------------------------------

/// Shown instead of the normal panels when artifact loading failed at
/// startup. No inputs are rendered, so no prediction can be attempted.
pub fn fatal_screen(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.heading(RichText::new("Cannot start").color(Color32::RED));
            ui.add_space(8.0);
            ui.label(message);
            ui.add_space(8.0);
            ui.label("Restore the artifact files and restart the application.");
        });
    });
}
