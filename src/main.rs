#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use career_dash::{app::CareerDashApp, state::AppState, ui};
#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(not(target_arch = "wasm32"))]
use eframe::egui;

/// Career Dash - academic and career success dashboard
///
/// Loads a table of student records and charts how GPA, internships and job
/// level relate to starting salary.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "career-dash")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Records file (.csv, .json or .parquet)
    #[arg(default_value = "education_career_success.csv")]
    data: PathBuf,

    /// Initial window width
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 860.0)]
    height: f32,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();

    let mut state = AppState::default();
    if cli.data.exists() {
        ui::panels::load_into(&mut state, cli.data.clone());
    } else {
        log::warn!(
            "{} not found; starting without data",
            cli.data.display()
        );
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cli.width, cli.height])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        ui::report::WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(CareerDashApp::new(state)))),
    )
}

/// `trunk serve` builds this and mounts it on the canvas in `index.html`.
#[cfg(target_arch = "wasm32")]
fn main() {
    career_dash::web::start();
}
