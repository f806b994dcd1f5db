//! Reducer-like state transitions for UI intents and backend events.

use client_core::{IdAssignment, RecordCreator, Roster};
use shared::{AddressField, FormField, RecordField, UserId, ValidationError};

use crate::controller::events::UiEvent;

/// Everything the window renders from. Only `reduce` and `apply_event`
/// mutate it.
#[derive(Debug, Clone)]
pub struct AppState {
    pub roster: Roster,
    pub creator: RecordCreator,
    pub alert: Option<ValidationError>,
    pub status: String,
}

impl AppState {
    pub fn new(id_assignment: IdAssignment) -> Self {
        Self {
            roster: Roster::new(id_assignment),
            creator: RecordCreator::new(),
            alert: None,
            status: "Loading users...".to_string(),
        }
    }

    pub fn alert_open(&self) -> bool {
        self.alert.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SetKeyword(String),
    OpenCreateForm,
    CloseCreateForm,
    UpdateDraft(FormField, String),
    SubmitDraft,
    DismissAlert,
    BeginEdit(UserId),
    UpdateEdit(RecordField, String),
    UpdateEditAddress(AddressField, String),
    CommitEdit,
    CancelEdit,
    Remove(UserId),
}

pub fn reduce(state: &mut AppState, action: UiAction) {
    if state.alert_open() && action != UiAction::DismissAlert {
        tracing::debug!(?action, "ignored while alert is open");
        return;
    }

    match action {
        UiAction::SetKeyword(keyword) => state.roster.set_keyword(keyword),
        UiAction::OpenCreateForm => state.creator.open_form(),
        UiAction::CloseCreateForm => state.creator.close_form(),
        UiAction::UpdateDraft(field, value) => state.creator.update_form_field(field, value),
        UiAction::SubmitDraft => match state.creator.submit(&mut state.roster) {
            Ok(id) => {
                state.status = format!("Added user #{id}");
            }
            Err(err) => {
                tracing::debug!("draft rejected: {err}");
                state.alert = Some(err);
            }
        },
        UiAction::DismissAlert => state.alert = None,
        UiAction::BeginEdit(id) => {
            state.roster.begin_edit(id);
        }
        UiAction::UpdateEdit(field, value) => {
            state.roster.update_edit_field(field, value);
        }
        UiAction::UpdateEditAddress(field, value) => {
            state.roster.update_edit_address_field(field, value);
        }
        UiAction::CommitEdit => {
            if let Some(outcome) = state.roster.commit_edit() {
                state.status = if outcome.replaced > 0 {
                    format!("Saved user #{}", outcome.id)
                } else {
                    format!("User #{} no longer exists; edit discarded", outcome.id)
                };
            }
        }
        UiAction::CancelEdit => state.roster.cancel_edit(),
        UiAction::Remove(id) => {
            if state.roster.remove_record(id) > 0 {
                state.status = format!("Removed user #{id}");
            }
        }
    }
}

pub fn apply_event(state: &mut AppState, event: UiEvent) {
    tracing::debug!(event = event.name(), "applying backend event");
    match event {
        UiEvent::Info(message) => state.status = message,
        UiEvent::DirectoryLoaded(result) => {
            let count = state.roster.apply_initial_load(result);
            state.status = format!("{count} users");
        }
    }
}
