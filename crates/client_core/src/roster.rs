//! Canonical in-memory list of user records and the single active edit.

use serde::Deserialize;
use shared::{AddressField, Draft, RecordField, UserId, UserRecord};
use tracing::{debug, info, warn};

use crate::directory::{DirectoryError, UserDirectory};
use crate::filter::FilteredView;

/// How `Roster::add_record` numbers new records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdAssignment {
    /// One past the highest live id, so a new record never shares an id.
    #[default]
    NextAfterMax,
    /// Current length plus one. Can hand out an id that is still in use once
    /// records have been removed.
    CountPlusOne,
}

impl IdAssignment {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "next_after_max" => Some(IdAssignment::NextAfterMax),
            "count_plus_one" => Some(IdAssignment::CountPlusOne),
            _ => None,
        }
    }

    fn next_id(self, records: &[UserRecord]) -> UserId {
        match self {
            IdAssignment::NextAfterMax => {
                let max = records.iter().map(|record| record.id.0).max().unwrap_or(0);
                UserId(max.saturating_add(1))
            }
            IdAssignment::CountPlusOne => {
                let len = i64::try_from(records.len()).unwrap_or(i64::MAX);
                UserId(len.saturating_add(1))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Pending,
    Done,
}

/// Result of [`Roster::commit_edit`]. `replaced` is zero when the edited
/// record was removed while the edit was open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitOutcome {
    pub id: UserId,
    pub replaced: usize,
}

/// Owns the canonical record list, the active search keyword and the edit
/// buffer. All mutations go through the named methods below.
#[derive(Debug, Clone)]
pub struct Roster {
    records: Vec<UserRecord>,
    keyword: String,
    editing: Option<UserRecord>,
    id_assignment: IdAssignment,
    load_state: LoadState,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(IdAssignment::default())
    }
}

impl Roster {
    pub fn new(id_assignment: IdAssignment) -> Self {
        Self {
            records: Vec::new(),
            keyword: String::new(),
            editing: None,
            id_assignment,
            load_state: LoadState::Pending,
        }
    }

    pub fn with_records(id_assignment: IdAssignment, records: Vec<UserRecord>) -> Self {
        Self {
            records,
            load_state: LoadState::Done,
            ..Self::new(id_assignment)
        }
    }

    /// Loads the initial list from `directory`. Only the first call reads;
    /// later calls return without touching the list. Returns the number of
    /// records now held.
    pub async fn initialize<D>(&mut self, directory: &D) -> usize
    where
        D: UserDirectory + ?Sized,
    {
        if self.load_state == LoadState::Done {
            return self.records.len();
        }
        let result = directory.fetch_users().await;
        self.apply_initial_load(result)
    }

    /// Applies the outcome of the initial directory read. A failure leaves the
    /// list empty and is only logged.
    pub fn apply_initial_load(
        &mut self,
        result: Result<Vec<UserRecord>, DirectoryError>,
    ) -> usize {
        if self.load_state == LoadState::Done {
            debug!("ignoring repeated initial load");
            return self.records.len();
        }
        self.load_state = LoadState::Done;
        match result {
            Ok(records) => {
                info!(count = records.len(), "roster initialized from directory");
                self.records = records;
            }
            Err(err) => {
                warn!("user directory unavailable, starting with an empty roster: {err}");
            }
        }
        self.records.len()
    }

    pub fn is_initialized(&self) -> bool {
        self.load_state == LoadState::Done
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: UserId) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn add_record(&mut self, draft: Draft) -> UserId {
        let id = self.id_assignment.next_id(&self.records);
        self.records.push(draft.into_record(id));
        debug!(id = id.0, len = self.records.len(), "record added");
        id
    }

    /// Starts editing the record with `id` on a detached copy. Returns `false`
    /// when no such record exists; an edit already in progress is then kept.
    pub fn begin_edit(&mut self, id: UserId) -> bool {
        let Some(record) = self.get(id).cloned() else {
            debug!(id = id.0, "begin_edit ignored: unknown id");
            return false;
        };
        self.editing = Some(record);
        debug!(id = id.0, "edit started");
        true
    }

    pub fn editing(&self) -> Option<&UserRecord> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Sets a top-level field on the edit buffer. No-op without an active edit.
    pub fn update_edit_field(&mut self, field: RecordField, value: impl Into<String>) -> bool {
        match self.editing.as_mut() {
            Some(buffer) => {
                buffer.set_field(field, value);
                true
            }
            None => false,
        }
    }

    /// Sets an address field on the edit buffer. No-op without an active edit.
    pub fn update_edit_address_field(
        &mut self,
        field: AddressField,
        value: impl Into<String>,
    ) -> bool {
        match self.editing.as_mut() {
            Some(buffer) => {
                buffer.address.set_field(field, value);
                true
            }
            None => false,
        }
    }

    /// Writes the edit buffer back over every record sharing its id and ends
    /// the edit. List order and length are preserved. Returns `None` when no
    /// edit was active.
    pub fn commit_edit(&mut self) -> Option<CommitOutcome> {
        let buffer = self.editing.take()?;
        let id = buffer.id;
        let mut replaced = 0usize;
        for record in self.records.iter_mut().filter(|record| record.id == id) {
            *record = buffer.clone();
            replaced += 1;
        }
        if replaced == 0 {
            debug!(id = id.0, "commit_edit found no record to replace");
        } else {
            debug!(id = id.0, replaced, "edit committed");
        }
        Some(CommitOutcome { id, replaced })
    }

    pub fn cancel_edit(&mut self) {
        if let Some(buffer) = self.editing.take() {
            debug!(id = buffer.id.0, "edit cancelled");
        }
    }

    /// Removes every record with `id` and returns how many were removed.
    pub fn remove_record(&mut self, id: UserId) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = before - self.records.len();
        debug!(id = id.0, removed, "remove_record");
        removed
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    pub fn filtered_view(&self, keyword: &str) -> FilteredView<'_> {
        FilteredView::new(&self.records, keyword)
    }

    /// Records matching the active keyword.
    pub fn visible(&self) -> FilteredView<'_> {
        FilteredView::new(&self.records, &self.keyword)
    }
}

#[cfg(test)]
#[path = "tests/roster_tests.rs"]
mod tests;
