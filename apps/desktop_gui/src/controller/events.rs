//! Events flowing from the backend worker into the UI.

use client_core::DirectoryError;
use shared::UserRecord;

pub enum UiEvent {
    Info(String),
    DirectoryLoaded(Result<Vec<UserRecord>, DirectoryError>),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::Info(_) => "info",
            UiEvent::DirectoryLoaded(Ok(_)) => "directory_loaded",
            UiEvent::DirectoryLoaded(Err(_)) => "directory_failed",
        }
    }
}
