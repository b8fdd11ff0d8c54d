//! LuaPad - Main Entry Point
//!
//! Tabbed Lua scratchpad with inline autocomplete.

use luapad_rs::{config::AppState, frontend::LuaPadApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,luapad_rs=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting LuaPad");

    let mut app_state = AppState::load_or_default();
    app_state.preferences = app_state.preferences.validated_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("LuaPad"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "LuaPad",
        native_options,
        Box::new(|cc| {
            let mut style = (*cc.egui_ctx.style()).clone();
            style.visuals.window_shadow.offset = [0, 0];
            cc.egui_ctx.set_style(style);

            Ok(Box::new(LuaPadApp::new(cc, app_state)?))
        }),
    );

    tracing::info!("Shutting down...");
    result
}
