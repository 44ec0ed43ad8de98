//! Repositories
//!
//! An in-memory, insertion-ordered store for one entity type. The repository owns
//! identifier assignment: ids start at 1, grow by one per insert, and are never handed
//! out again, even after a record is removed.

use std::sync::Arc;

use crate::ids::TypedId;

/// A type that can be stored in a [`Repository`].
pub trait Record: Sized {
    /// The record's data before an identifier is assigned.
    type Draft;

    /// Build the stored record from its draft and freshly issued identifier.
    fn from_draft(id: TypedId<Self>, draft: Self::Draft) -> Self;

    /// The identifier issued by the owning repository.
    fn id(&self) -> TypedId<Self>;
}

/// Ordered collection of records of a single type.
///
/// Records are shared behind [`Arc`] so other records (a sale, for instance) can refer
/// to the stored value itself rather than a copy of it.
#[derive(Debug)]
pub struct Repository<T> {
    records: Vec<Arc<T>>,
    next_id: u32,
}

impl<T: Record> Repository<T> {
    /// Create an empty repository whose first id will be 1.
    #[must_use]
    pub fn new() -> Self {
        Repository {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Stamp the draft with the next id, append it, and return the stored record.
    pub fn add(&mut self, draft: T::Draft) -> Arc<T> {
        let id = TypedId::new(self.next_id);
        self.next_id += 1;

        let record = Arc::new(T::from_draft(id, draft));
        self.records.push(Arc::clone(&record));

        record
    }

    /// All stored records, in insertion order.
    pub fn list(&self) -> &[Arc<T>] {
        &self.records
    }

    /// Iterate over the stored records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        self.records.iter()
    }

    /// First record carrying `id`, if any.
    pub fn find_by_id(&self, id: TypedId<T>) -> Option<&Arc<T>> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Remove the given record, matched by identity rather than by value.
    ///
    /// Returns `None` when the record is not (or no longer) stored here. Callers only
    /// remove records they just looked up in this same repository, so `None` points at
    /// a bug in the caller.
    pub fn remove(&mut self, record: &Arc<T>) -> Option<Arc<T>> {
        let position = self
            .records
            .iter()
            .position(|stored| Arc::ptr_eq(stored, record))?;

        Some(self.records.remove(position))
    }

    /// The id the next [`Repository::add`] will issue.
    pub fn next_id(&self) -> TypedId<T> {
        TypedId::new(self.next_id)
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the repository holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Note {
        id: TypedId<Note>,
        text: &'static str,
    }

    impl Record for Note {
        type Draft = &'static str;

        fn from_draft(id: TypedId<Self>, text: &'static str) -> Self {
            Note { id, text }
        }

        fn id(&self) -> TypedId<Self> {
            self.id
        }
    }

    #[test]
    fn add_issues_sequential_ids_from_one() {
        let mut notes = Repository::<Note>::new();

        let ids: Vec<u32> = ["a", "b", "c"]
            .into_iter()
            .map(|text| notes.add(text).id().get())
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(notes.len(), 3);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut notes = Repository::<Note>::new();
        notes.add("first");
        notes.add("second");

        let texts: Vec<&str> = notes.iter().map(|note| note.text).collect();

        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(notes.list(), notes.list());
    }

    #[test]
    fn find_by_id_returns_stored_record() -> TestResult {
        let mut notes = Repository::<Note>::new();
        notes.add("first");
        let second = notes.add("second");

        let found = notes.find_by_id(second.id()).ok_or("note not found")?;

        assert!(Arc::ptr_eq(found, &second));
        assert!(notes.find_by_id(TypedId::new(0)).is_none());
        assert!(notes.find_by_id(TypedId::new(3)).is_none());

        Ok(())
    }

    #[test]
    fn remove_matches_identity_not_value() {
        let mut notes = Repository::<Note>::new();
        let stored = notes.add("same");

        let lookalike = Arc::new(Note {
            id: stored.id(),
            text: "same",
        });

        assert!(notes.remove(&lookalike).is_none());
        assert_eq!(notes.len(), 1);

        assert!(notes.remove(&stored).is_some());
        assert!(notes.is_empty());
        assert!(notes.remove(&stored).is_none());
    }

    #[test]
    fn removed_ids_are_never_reissued() {
        let mut notes = Repository::<Note>::new();
        let first = notes.add("first");

        notes.remove(&first);

        let second = notes.add("second");

        assert_eq!(second.id().get(), 2);
        assert_eq!(notes.next_id().get(), 3);
    }
}
