//! Backend worker thread: owns the tokio runtime and the directory client.

use std::{thread, time::Duration};

use client_core::{HttpUserDirectory, UserDirectory};
use crossbeam_channel::{Receiver, Sender};
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub struct BackendConfig {
    pub directory_url: Url,
    pub request_timeout: Duration,
}

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, config: BackendConfig) {
    thread::spawn(move || run_backend(cmd_rx, ui_tx, config));
}

fn run_backend(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, config: BackendConfig) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!("failed to build backend runtime: {err}");
            let _ = ui_tx.try_send(UiEvent::Info(format!(
                "Backend worker startup failure: {err}"
            )));
            return;
        }
    };

    let directory = match HttpUserDirectory::new(config.directory_url, config.request_timeout) {
        Ok(directory) => Some(directory),
        Err(err) => {
            tracing::error!("failed to build user directory client: {err}");
            let _ = ui_tx.try_send(UiEvent::DirectoryLoaded(Err(err)));
            None
        }
    };

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::FetchDirectory => {
                let Some(directory) = directory.as_ref() else {
                    continue;
                };
                tracing::info!(endpoint = %directory.endpoint(), "loading user directory");
                let result = runtime.block_on(directory.fetch_users());
                if ui_tx.send(UiEvent::DirectoryLoaded(result)).is_err() {
                    break;
                }
            }
        }
    }
    tracing::debug!("backend worker stopped");
}
