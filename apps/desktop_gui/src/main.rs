use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;

use backend_bridge::{
    commands::BackendCommand,
    runtime::{self, BackendConfig},
};
use controller::events::UiEvent;
use ui::DesktopGuiApp;

#[derive(Parser, Debug)]
#[command(about = "Browse and edit the demo user directory in memory")]
struct Args {
    /// User directory endpoint; overrides roster.toml and environment.
    #[arg(long)]
    endpoint: Option<String>,
    /// Settings file to read instead of ./roster.toml.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref());
    if let Some(endpoint) = args.endpoint {
        settings.directory_url = endpoint;
    }
    let directory_url = settings
        .directory_endpoint()
        .context("cannot start without a usable user directory endpoint")?;
    tracing::info!(
        endpoint = %directory_url,
        id_assignment = ?settings.id_assignment,
        "starting roster window"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    runtime::launch(
        cmd_rx,
        ui_tx,
        BackendConfig {
            directory_url,
            request_timeout: settings.request_timeout(),
        },
    );

    let id_assignment = settings.id_assignment;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("User management")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "User management",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(DesktopGuiApp::new(
                &cmd_tx,
                ui_rx,
                id_assignment,
            )))
        }),
    )
    .map_err(|err| anyhow!("window closed with error: {err}"))
}
