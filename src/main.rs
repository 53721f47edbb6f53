use aircast::app::AircastApp;
use aircast::inference;
use aircast::state::AppState;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Load both artifacts once, before any UI. Failure is fatal for the
    // session: the window opens on a dead error screen instead.
    let load_result = inference::loader::load_default();
    if let Err(e) = &load_result {
        log::error!("artifact loading failed: {e:#}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Aircast – NO₂ Forecast",
        options,
        Box::new(|_cc| Ok(Box::new(AircastApp::new(AppState::new(load_result))))),
    )
}
