//! Local Record Patching
//!
//! Row actions either refetch the whole list or patch one record in place.
//! Optimistic patches keep a snapshot so a failed request can be undone.

/// Records addressable by their backend id
pub trait Identified {
    fn id(&self) -> u32;
}

/// Replace the record with the same id. Returns false if it is gone.
pub fn replace_record<T: Identified>(records: &mut [T], updated: T) -> bool {
    match records.iter_mut().find(|record| record.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove the record with `id`. Returns false if it was not present.
pub fn remove_record<T: Identified>(records: &mut Vec<T>, id: u32) -> bool {
    let before = records.len();
    records.retain(|record| record.id() != id);
    records.len() != before
}

/// Pre-action copy of a list, taken before an optimistic change
#[derive(Clone, Debug, PartialEq)]
#[must_use = "an optimistic change must be either committed or rolled back"]
pub struct Optimistic<T> {
    snapshot: Vec<T>,
}

impl<T: Clone + Identified> Optimistic<T> {
    /// Apply `change` to the record with `id`. `None` (and no change)
    /// when the record is not in the list.
    pub fn patch(records: &mut [T], id: u32, change: impl FnOnce(&mut T)) -> Option<Self> {
        let snapshot = records.to_vec();
        let record = records.iter_mut().find(|record| record.id() == id)?;
        change(record);
        Some(Self { snapshot })
    }

    pub fn remove(records: &mut Vec<T>, id: u32) -> Option<Self> {
        let snapshot = records.clone();
        remove_record(records, id).then_some(Self { snapshot })
    }

    /// The server accepted the change.
    pub fn commit(self) {}

    /// The server rejected the change: put the list back as it was.
    pub fn rollback(self, records: &mut Vec<T>) {
        *records = self.snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Booking {
        id: u32,
        status: &'static str,
    }

    impl Identified for Booking {
        fn id(&self) -> u32 {
            self.id
        }
    }

    fn bookings() -> Vec<Booking> {
        vec![
            Booking { id: 1, status: "pending" },
            Booking { id: 2, status: "confirmed" },
        ]
    }

    #[test]
    fn test_patch_and_rollback() {
        let mut records = bookings();
        let undo = Optimistic::patch(&mut records, 2, |b| b.status = "cancelled").unwrap();
        assert_eq!(records[1].status, "cancelled");

        undo.rollback(&mut records);
        assert_eq!(records, bookings());
    }

    #[test]
    fn test_patch_missing_record_is_noop() {
        let mut records = bookings();
        assert!(Optimistic::patch(&mut records, 9, |b| b.status = "x").is_none());
        assert_eq!(records, bookings());
    }

    #[test]
    fn test_remove_and_commit() {
        let mut records = bookings();
        let undo = Optimistic::remove(&mut records, 1).unwrap();
        assert_eq!(records.len(), 1);
        undo.commit();
        assert_eq!(records[0].id, 2);
    }

    #[test]
    fn test_replace_record() {
        let mut records = bookings();
        assert!(replace_record(&mut records, Booking { id: 1, status: "completed" }));
        assert_eq!(records[0].status, "completed");
        assert!(!replace_record(&mut records, Booking { id: 3, status: "x" }));
        assert!(remove_record(&mut records, 1));
        assert!(!remove_record(&mut records, 1));
    }
}
