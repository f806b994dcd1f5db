//! State behind the "add user" form.

use shared::{AddressField, Draft, FormField, RecordField, RequiredField, UserId, ValidationError};
use tracing::debug;

use crate::roster::Roster;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCreator {
    open: bool,
    draft: Draft,
}

impl RecordCreator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn open_form(&mut self) {
        self.open = true;
    }

    /// Hides the form. The draft is kept for the next time it opens.
    pub fn close_form(&mut self) {
        self.open = false;
    }

    pub fn update_draft_field(&mut self, field: RecordField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    pub fn update_draft_address_field(&mut self, field: AddressField, value: impl Into<String>) {
        self.draft.set_address_field(field, value);
    }

    pub fn update_form_field(&mut self, field: FormField, value: impl Into<String>) {
        match field {
            FormField::Record(field) => self.update_draft_field(field, value),
            FormField::Address(field) => self.update_draft_address_field(field, value),
        }
    }

    /// Hands the draft to `roster` when name and username are both present,
    /// then resets the draft and closes the form. On a validation failure
    /// nothing changes.
    pub fn submit(&mut self, roster: &mut Roster) -> Result<UserId, ValidationError> {
        let mut missing = Vec::new();
        if self.draft.name.is_empty() {
            missing.push(RequiredField::Name);
        }
        if self.draft.username.is_empty() {
            missing.push(RequiredField::Username);
        }
        if !missing.is_empty() {
            debug!(?missing, "draft rejected");
            return Err(ValidationError::MissingRequired { missing });
        }

        let draft = std::mem::take(&mut self.draft);
        let id = roster.add_record(draft);
        self.open = false;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_username_is_rejected_and_draft_is_kept() {
        let mut roster = Roster::default();
        let mut creator = RecordCreator::new();
        creator.open_form();
        creator.update_draft_field(RecordField::Name, "Ana");

        let err = creator.submit(&mut roster).expect_err("username missing");
        assert_eq!(err.missing(), &[RequiredField::Username]);
        assert!(roster.is_empty());
        assert!(creator.is_open());
        assert_eq!(creator.draft().name, "Ana");
    }

    #[test]
    fn both_fields_missing_are_reported() {
        let mut roster = Roster::default();
        let mut creator = RecordCreator::new();

        let err = creator.submit(&mut roster).expect_err("empty draft");
        assert_eq!(err.missing(), &[RequiredField::Name, RequiredField::Username]);
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut roster = Roster::default();
        let mut creator = RecordCreator::new();
        creator.update_draft_field(RecordField::Name, " ");
        creator.update_draft_field(RecordField::Username, " ");

        assert!(creator.submit(&mut roster).is_ok());
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn successful_submit_adds_record_resets_draft_and_closes() {
        let mut roster = Roster::default();
        let mut creator = RecordCreator::new();
        creator.open_form();
        creator.update_form_field(FormField::Record(RecordField::Name), "Ana");
        creator.update_form_field(FormField::Record(RecordField::Username), "ana1");
        creator.update_form_field(FormField::Address(AddressField::City), "Hanoi");

        let id = creator.submit(&mut roster).expect("valid draft");
        assert_eq!(id, UserId(1));
        assert!(!creator.is_open());
        assert_eq!(creator.draft(), &Draft::default());

        let added = roster.get(id).expect("added");
        assert_eq!(added.name, "Ana");
        assert_eq!(added.username, "ana1");
        assert_eq!(added.address.city, "Hanoi");
    }

    #[test]
    fn closing_the_form_keeps_the_draft() {
        let mut creator = RecordCreator::new();
        creator.open_form();
        creator.update_draft_address_field(AddressField::Street, "Kulas Light");
        creator.close_form();
        creator.open_form();

        assert_eq!(creator.draft().street, "Kulas Light");
    }
}
