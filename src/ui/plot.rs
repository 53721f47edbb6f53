use eframe::egui::{Color32, Ui};
use egui_plot::{HLine, Line, Plot, PlotPoints, Points};

use crate::convert::{BOUNDARY_LAYER_HEIGHT_M, G_TO_UG, MOLAR_MASS_NO2_G_PER_MOL};
use crate::state::AppState;
use crate::verdict::WHO_GUIDELINE_UG_M3;

// ---------------------------------------------------------------------------
// Lag trend plot (central panel)
// ---------------------------------------------------------------------------

/// Render the recent-history trend: the three lag observations at days
/// −3…−1 and, when available, the prediction at day 0.
pub fn trend_plot(ui: &mut Ui, state: &AppState) {
    let mut history: Vec<[f64; 2]> = vec![
        [-3.0, state.lag3],
        [-2.0, state.lag2],
        [-1.0, state.lag1],
    ];
    if let Some(outcome) = &state.outcome {
        history.push([0.0, outcome.raw_mol_per_m2]);
    }

    // WHO guideline mapped back to column density for the same axis.
    let guideline_mol_per_m2 =
        WHO_GUIDELINE_UG_M3 * BOUNDARY_LAYER_HEIGHT_M / (MOLAR_MASS_NO2_G_PER_MOL * G_TO_UG);

    Plot::new("lag_trend")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Day (0 = prediction target)")
        .y_axis_label("NO₂ column density (mol/m²)")
        .include_y(0.0)
        .height(260.0)
        .show(ui, |plot_ui| {
            let line_points: PlotPoints = history.iter().copied().collect();
            plot_ui.line(
                Line::new(line_points)
                    .name("NO₂")
                    .color(Color32::LIGHT_BLUE)
                    .width(1.5),
            );

            let marker_points: PlotPoints = history.iter().copied().collect();
            plot_ui.points(
                Points::new(marker_points)
                    .name("observations")
                    .color(Color32::LIGHT_BLUE)
                    .radius(3.0),
            );

            if let Some(outcome) = &state.outcome {
                let predicted: PlotPoints = vec![[0.0, outcome.raw_mol_per_m2]].into();
                plot_ui.points(
                    Points::new(predicted)
                        .name("predicted")
                        .color(Color32::GOLD)
                        .radius(4.0),
                );
            }

            plot_ui.hline(
                HLine::new(guideline_mol_per_m2)
                    .name("WHO guideline")
                    .color(Color32::RED),
            );
        });
}
