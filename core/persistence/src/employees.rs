//! FILENAME: core/persistence/src/employees.rs
//! PURPOSE: Employee repository backed by a `Storage`.
//! CONTEXT: New employees get an `emp_` id and a `createdAt` from the
//! injected clock. Neither ever changes afterwards.

use std::sync::Arc;

use records::{
    validate_employee_patch, validate_new_employee, Employee, EmployeePatch, NewEmployee, RecordId,
};

use crate::clock::Clock;
use crate::collection::Collection;
use crate::storage::Storage;
use crate::PersistenceError;

pub trait EmployeeRepository {
    fn list(&self) -> &[Employee];

    fn get(&self, id: &RecordId) -> Option<&Employee>;

    fn create(&mut self, draft: NewEmployee) -> Result<Employee, PersistenceError>;

    fn update(&mut self, id: &RecordId, patch: &EmployeePatch) -> Result<Employee, PersistenceError>;

    /// Attendance history of the employee is left untouched.
    fn delete(&mut self, id: &RecordId) -> Result<Employee, PersistenceError>;
}

pub fn new_employee_id() -> RecordId {
    RecordId::Text(format!("emp_{}", uuid::Uuid::new_v4().simple()))
}

pub struct LocalEmployeeStore<S> {
    collection: Collection<Employee, S>,
    clock: Arc<dyn Clock>,
}

impl<S: Storage> LocalEmployeeStore<S> {
    /// Empty roster; nothing is read from or written to `storage` until
    /// the first mutation.
    pub fn empty(storage: S, clock: Arc<dyn Clock>) -> Self {
        LocalEmployeeStore {
            collection: Collection::empty(storage),
            clock,
        }
    }

    /// Loads from `storage`, seeding it with `seed` when nothing is stored.
    pub fn load_or_seed(
        storage: S,
        clock: Arc<dyn Clock>,
        seed: Vec<Employee>,
    ) -> Result<Self, PersistenceError> {
        Ok(LocalEmployeeStore {
            collection: Collection::load_or_seed(storage, seed)?,
            clock,
        })
    }

    /// Discards whatever `storage` holds and starts from `employees`.
    pub fn with_records(
        storage: S,
        clock: Arc<dyn Clock>,
        employees: Vec<Employee>,
    ) -> Result<Self, PersistenceError> {
        Ok(LocalEmployeeStore {
            collection: Collection::replace(storage, employees)?,
            clock,
        })
    }

    pub fn storage(&self) -> &S {
        self.collection.storage()
    }
}

impl<S: Storage> EmployeeRepository for LocalEmployeeStore<S> {
    fn list(&self) -> &[Employee] {
        self.collection.items()
    }

    fn get(&self, id: &RecordId) -> Option<&Employee> {
        self.collection.find(id)
    }

    fn create(&mut self, draft: NewEmployee) -> Result<Employee, PersistenceError> {
        let errors = validate_new_employee(&draft);
        if !errors.is_empty() {
            return Err(PersistenceError::Validation(errors));
        }
        let employee = draft.into_employee(new_employee_id(), self.clock.now());
        self.collection.push(employee.clone())?;
        Ok(employee)
    }

    fn update(&mut self, id: &RecordId, patch: &EmployeePatch) -> Result<Employee, PersistenceError> {
        let errors = validate_employee_patch(patch);
        if !errors.is_empty() {
            return Err(PersistenceError::Validation(errors));
        }
        self.collection.modify(id, |current| {
            let mut next = current.clone();
            next.apply_patch(patch);
            Ok(next)
        })
    }

    fn delete(&mut self, id: &RecordId) -> Result<Employee, PersistenceError> {
        self.collection.remove(id)
    }
}
