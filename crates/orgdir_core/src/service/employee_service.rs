//! Employee use-case service.

use crate::dto::{EmployeeCreate, EmployeeDto};
use crate::model::{Employee, EntityId};
use crate::repo::entity_repo::SqliteRepository;
use crate::service::{ServiceError, ServiceResult};

/// Use-case facade for employee records.
pub struct EmployeeService<'conn> {
    repo: SqliteRepository<'conn, Employee>,
}

impl<'conn> EmployeeService<'conn> {
    /// Creates a service using the provided repository.
    pub fn new(repo: SqliteRepository<'conn, Employee>) -> Self {
        Self { repo }
    }

    /// Persists a new employee and returns it with its assigned identity.
    pub fn create(&self, request: EmployeeCreate) -> ServiceResult<EmployeeDto> {
        let mut employee = Employee::from(request);
        self.repo.create(&mut employee)?;
        Ok(employee.into())
    }

    /// Gets one employee by identity.
    pub fn get(&self, id: EntityId) -> ServiceResult<EmployeeDto> {
        Ok(self.repo.get_by_id(id)?.into())
    }

    /// Lists all employees, tombstoned rows included.
    pub fn list(&self) -> ServiceResult<Vec<EmployeeDto>> {
        Ok(self.repo.get_all()?.into_iter().map(Into::into).collect())
    }

    /// Applies the transfer shape's fields onto the persisted row.
    pub fn update(&self, request: &EmployeeDto) -> ServiceResult<EmployeeDto> {
        let id = request
            .id
            .ok_or(ServiceError::MissingId("employee update"))?;
        let mut employee = self.repo.get_by_id(id)?;
        employee.full_name = request.full_name.clone();
        self.repo.update(&employee)?;
        Ok(employee.into())
    }

    /// Sets the soft-delete flag; the row stays readable.
    pub fn soft_delete(&self, id: EntityId) -> ServiceResult<()> {
        let employee = self.repo.get_by_id(id)?;
        self.repo.soft_delete(&employee)?;
        Ok(())
    }

    /// Physically removes the employee.
    pub fn delete(&self, id: EntityId) -> ServiceResult<()> {
        let employee = self.repo.get_by_id(id)?;
        self.repo.delete(&employee)?;
        Ok(())
    }

    /// Case-sensitive substring search on employee full names.
    pub fn search(&self, name: Option<&str>) -> ServiceResult<Vec<EmployeeDto>> {
        Ok(self
            .repo
            .search_by_name(name)?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
