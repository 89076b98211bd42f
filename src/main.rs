// src/main.rs

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ui;

use readiness_wizard_lib::checklist::load_or_fallback;
use readiness_wizard_lib::context::AppCtx;
use readiness_wizard_lib::export::ExportCollaborators;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const ENV_LOG: &str = "READINESS_LOG";
const ENV_LOG_JSON: &str = "READINESS_LOG_JSON";

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("info"));

    if env_bool(ENV_LOG_JSON, false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn main() -> eframe::Result<()> {
    init_tracing();

    let ctx = AppCtx::from_env();
    tracing::info!(
        checklist = %ctx.checklist_path.display(),
        export_dir = %ctx.export_dir.display(),
        debug_ui = ctx.debug_ui,
        "starting"
    );

    let (definition, load_err) = load_or_fallback(&ctx.checklist_path);
    let state = readiness_wizard_lib::init_state(definition);
    let collaborators = ExportCollaborators::available();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Production Readiness Checklist",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ui::UiApp::new(
                state,
                ctx,
                collaborators,
                load_err,
            )))
        }),
    )
}
