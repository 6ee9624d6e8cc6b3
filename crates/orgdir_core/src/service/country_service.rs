//! Country use-case service.
//!
//! # Responsibility
//! - Provide country create/get/list/update/delete APIs in DTO terms.
//! - Delegate persistence to the generic repository.
//!
//! # Invariants
//! - `update` is read-modify-write: fields not present on the transfer
//!   shape (`created_at`, `soft_delete`) keep their persisted values.

use crate::dto::{CountryCreate, CountryDto};
use crate::model::{Country, EntityId};
use crate::repo::entity_repo::SqliteRepository;
use crate::service::{ServiceError, ServiceResult};

/// Use-case facade for country records.
pub struct CountryService<'conn> {
    repo: SqliteRepository<'conn, Country>,
}

impl<'conn> CountryService<'conn> {
    /// Creates a service using the provided repository.
    pub fn new(repo: SqliteRepository<'conn, Country>) -> Self {
        Self { repo }
    }

    /// Persists a new country and returns it with its assigned identity.
    pub fn create(&self, request: CountryCreate) -> ServiceResult<CountryDto> {
        let mut country = Country::from(request);
        self.repo.create(&mut country)?;
        Ok(country.into())
    }

    /// Gets one country by identity.
    pub fn get(&self, id: EntityId) -> ServiceResult<CountryDto> {
        Ok(self.repo.get_by_id(id)?.into())
    }

    /// Lists all countries, tombstoned rows included.
    pub fn list(&self) -> ServiceResult<Vec<CountryDto>> {
        Ok(self.repo.get_all()?.into_iter().map(Into::into).collect())
    }

    /// Applies the transfer shape's fields onto the persisted row.
    pub fn update(&self, request: &CountryDto) -> ServiceResult<CountryDto> {
        let id = request
            .id
            .ok_or(ServiceError::MissingId("country update"))?;
        let mut country = self.repo.get_by_id(id)?;
        country.name = request.name.clone();
        self.repo.update(&country)?;
        Ok(country.into())
    }

    /// Sets the soft-delete flag; the row stays readable.
    pub fn soft_delete(&self, id: EntityId) -> ServiceResult<()> {
        let country = self.repo.get_by_id(id)?;
        self.repo.soft_delete(&country)?;
        Ok(())
    }

    /// Physically removes the country; owned cities go with it via the
    /// schema's cascade rule.
    pub fn delete(&self, id: EntityId) -> ServiceResult<()> {
        let country = self.repo.get_by_id(id)?;
        self.repo.delete(&country)?;
        Ok(())
    }

    /// Case-sensitive substring search on country names.
    pub fn search(&self, name: Option<&str>) -> ServiceResult<Vec<CountryDto>> {
        Ok(self
            .repo
            .search_by_name(name)?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
