//! FILENAME: core/persistence/src/attendance.rs
//! Attendance repository backed by a `Storage`.

use std::sync::Arc;

use chrono::NaiveDate;
use records::{
    validate_attendance_patch, validate_new_attendance, AttendancePatch, AttendanceRecord,
    NewAttendance, RecordId,
};

use crate::clock::Clock;
use crate::collection::Collection;
use crate::storage::Storage;
use crate::PersistenceError;

pub trait AttendanceRepository {
    fn list(&self) -> &[AttendanceRecord];

    fn get(&self, id: &RecordId) -> Option<&AttendanceRecord>;

    fn create(&mut self, draft: NewAttendance) -> Result<AttendanceRecord, PersistenceError>;

    fn update(
        &mut self,
        id: &RecordId,
        patch: &AttendancePatch,
    ) -> Result<AttendanceRecord, PersistenceError>;

    fn delete(&mut self, id: &RecordId) -> Result<AttendanceRecord, PersistenceError>;
}

pub fn new_attendance_id() -> RecordId {
    RecordId::Text(format!("att_{}", uuid::Uuid::new_v4().simple()))
}

pub struct LocalAttendanceStore<S> {
    collection: Collection<AttendanceRecord, S>,
    clock: Arc<dyn Clock>,
}

impl<S: Storage> LocalAttendanceStore<S> {
    pub fn empty(storage: S, clock: Arc<dyn Clock>) -> Self {
        LocalAttendanceStore {
            collection: Collection::empty(storage),
            clock,
        }
    }

    pub fn load_or_seed(
        storage: S,
        clock: Arc<dyn Clock>,
        seed: Vec<AttendanceRecord>,
    ) -> Result<Self, PersistenceError> {
        Ok(LocalAttendanceStore {
            collection: Collection::load_or_seed(storage, seed)?,
            clock,
        })
    }

    pub fn with_records(
        storage: S,
        clock: Arc<dyn Clock>,
        records: Vec<AttendanceRecord>,
    ) -> Result<Self, PersistenceError> {
        Ok(LocalAttendanceStore {
            collection: Collection::replace(storage, records)?,
            clock,
        })
    }

    /// Date "today" according to the injected clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn storage(&self) -> &S {
        self.collection.storage()
    }
}

impl<S: Storage> AttendanceRepository for LocalAttendanceStore<S> {
    fn list(&self) -> &[AttendanceRecord] {
        self.collection.items()
    }

    fn get(&self, id: &RecordId) -> Option<&AttendanceRecord> {
        self.collection.find(id)
    }

    fn create(&mut self, draft: NewAttendance) -> Result<AttendanceRecord, PersistenceError> {
        let errors = validate_new_attendance(&draft);
        if !errors.is_empty() {
            return Err(PersistenceError::Validation(errors));
        }
        let record = draft.into_record(new_attendance_id());
        self.collection.push(record.clone())?;
        Ok(record)
    }

    fn update(
        &mut self,
        id: &RecordId,
        patch: &AttendancePatch,
    ) -> Result<AttendanceRecord, PersistenceError> {
        self.collection.modify(id, |current| {
            let errors = validate_attendance_patch(current, patch);
            if !errors.is_empty() {
                return Err(PersistenceError::Validation(errors));
            }
            let mut next = current.clone();
            next.apply_patch(patch);
            Ok(next)
        })
    }

    fn delete(&mut self, id: &RecordId) -> Result<AttendanceRecord, PersistenceError> {
        self.collection.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::MemoryStorage;
    use chrono::{TimeZone, Utc};
    use records::AttendanceStatus;

    fn store() -> LocalAttendanceStore<MemoryStorage> {
        let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap()));
        LocalAttendanceStore::load_or_seed(MemoryStorage::new(), clock, vec![]).unwrap()
    }

    fn draft(employee: u64, day: u32, check_in: &str) -> NewAttendance {
        NewAttendance {
            employee_id: RecordId::Number(employee),
            employee_name: format!("Employee {}", employee),
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            check_in: check_in.to_string(),
            check_out: None,
            status: AttendanceStatus::Present,
            notes: Some("  ".to_string()),
        }
    }

    #[test]
    fn test_create_and_get() {
        let mut store = store();
        let a = store.create(draft(1, 5, "09:00")).unwrap();
        store.create(draft(2, 5, "09:10")).unwrap();
        store.create(draft(1, 6, "08:55")).unwrap();

        assert!(a.id.to_string().starts_with("att_"));
        assert_eq!(a.notes, None);
        assert_eq!(store.today(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(store.list().len(), 3);
        assert_eq!(store.get(&a.id), Some(&a));
    }

    #[test]
    fn test_create_rejects_bad_times() {
        let mut store = store();
        let mut bad = draft(1, 5, "9am");
        bad.check_out = Some("25:00".to_string());
        match store.create(bad) {
            Err(PersistenceError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_update_validates_against_current() {
        let mut store = store();
        let rec = store.create(draft(1, 5, "09:00")).unwrap();

        let early_out = AttendancePatch {
            check_out: Some("08:30".to_string()),
            ..AttendancePatch::default()
        };
        assert!(matches!(
            store.update(&rec.id, &early_out),
            Err(PersistenceError::Validation(_))
        ));
        assert_eq!(store.get(&rec.id).unwrap().check_out, None);

        let patch = AttendancePatch {
            check_out: Some("17:30".to_string()),
            status: Some(AttendanceStatus::Late),
            ..AttendancePatch::default()
        };
        let updated = store.update(&rec.id, &patch).unwrap();
        assert_eq!(updated.check_out.as_deref(), Some("17:30"));
        assert_eq!(updated.status, AttendanceStatus::Late);
        assert_eq!(updated.id, rec.id);
    }

    #[test]
    fn test_delete() {
        let mut store = store();
        let rec = store.create(draft(1, 5, "09:00")).unwrap();
        assert_eq!(store.delete(&rec.id).unwrap(), rec);
        assert!(store.list().is_empty());
        assert!(store.delete(&rec.id).unwrap_err().is_not_found());
    }
}
