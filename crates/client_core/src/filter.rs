//! Keyword projection over the canonical record list.

use std::slice;

use shared::UserRecord;

/// Lazy iterator over the records whose name or username contains a keyword,
/// compared case-insensitively. An empty keyword matches every record.
///
/// The view borrows the list, so it has to be rebuilt after every mutation or
/// keyword change.
pub struct FilteredView<'a> {
    records: slice::Iter<'a, UserRecord>,
    needle: String,
}

impl<'a> FilteredView<'a> {
    pub fn new(records: &'a [UserRecord], keyword: &str) -> Self {
        Self {
            records: records.iter(),
            needle: keyword.to_lowercase(),
        }
    }
}

impl<'a> Iterator for FilteredView<'a> {
    type Item = &'a UserRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_str();
        self.records
            .by_ref()
            .find(|record| matches_lowercase_needle(record, needle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.records.size_hint().1)
    }
}

fn matches_lowercase_needle(record: &UserRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record.username.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use shared::{Draft, UserId};

    use super::*;

    fn record(id: i64, name: &str, username: &str) -> UserRecord {
        Draft {
            name: name.to_string(),
            username: username.to_string(),
            email: format!("{username}@example.test"),
            ..Draft::default()
        }
        .into_record(UserId(id))
    }

    #[test]
    fn matches_name_or_username_ignoring_case() {
        let records = vec![
            record(1, "Ana", "ana1"),
            record(2, "Bob", "bobby"),
            record(3, "Clementine", "ANAtole"),
        ];

        let ids: Vec<_> = FilteredView::new(&records, "aNa").map(|r| r.id).collect();
        assert_eq!(ids, vec![UserId(1), UserId(3)]);
    }

    #[test]
    fn empty_keyword_keeps_every_record_in_order() {
        let records = vec![record(4, "Dan", "d"), record(2, "Eve", "e"), record(9, "Fay", "f")];
        let ids: Vec<_> = FilteredView::new(&records, "").map(|r| r.id).collect();
        assert_eq!(ids, vec![UserId(4), UserId(2), UserId(9)]);
    }

    #[test]
    fn keyword_is_not_trimmed() {
        let records = vec![record(1, "Ana Maria", "am")];
        assert_eq!(FilteredView::new(&records, " maria").count(), 1);
        assert_eq!(FilteredView::new(&records, "maria ").count(), 0);
    }

    #[test]
    fn email_is_not_searched() {
        let records = vec![record(1, "Ana", "ana1")];
        assert_eq!(FilteredView::new(&records, "example.test").count(), 0);
    }
}
