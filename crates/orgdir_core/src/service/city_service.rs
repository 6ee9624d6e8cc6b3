//! City use-case service.
//!
//! # Invariants
//! - `update` takes the dedicated [`CityUpdate`] shape and is
//!   read-modify-write over the persisted row.
//! - Referential checks stay in the schema: creating a city against an
//!   unknown country surfaces the store's foreign-key failure unchanged.

use crate::dto::{CityCreate, CityDto, CityUpdate};
use crate::model::{City, EntityId};
use crate::repo::entity_repo::SqliteRepository;
use crate::service::{ServiceError, ServiceResult};

/// Use-case facade for city records.
pub struct CityService<'conn> {
    repo: SqliteRepository<'conn, City>,
}

impl<'conn> CityService<'conn> {
    /// Creates a service using the provided repository.
    pub fn new(repo: SqliteRepository<'conn, City>) -> Self {
        Self { repo }
    }

    /// Persists a new city and returns it with its assigned identity.
    pub fn create(&self, request: CityCreate) -> ServiceResult<CityDto> {
        let mut city = City::from(request);
        self.repo.create(&mut city)?;
        Ok(city.into())
    }

    /// Gets one city by identity.
    pub fn get(&self, id: EntityId) -> ServiceResult<CityDto> {
        Ok(self.repo.get_by_id(id)?.into())
    }

    /// Lists all cities, tombstoned rows included.
    pub fn list(&self) -> ServiceResult<Vec<CityDto>> {
        Ok(self.repo.get_all()?.into_iter().map(Into::into).collect())
    }

    /// Applies the update shape's fields onto the persisted row.
    pub fn update(&self, request: &CityUpdate) -> ServiceResult<CityDto> {
        let id = request.id.ok_or(ServiceError::MissingId("city update"))?;
        let mut city = self.repo.get_by_id(id)?;
        city.name = request.name.clone();
        city.country_id = request.country_id;
        self.repo.update(&city)?;
        Ok(city.into())
    }

    /// Sets the soft-delete flag; the row stays readable.
    pub fn soft_delete(&self, id: EntityId) -> ServiceResult<()> {
        let city = self.repo.get_by_id(id)?;
        self.repo.soft_delete(&city)?;
        Ok(())
    }

    /// Physically removes the city.
    pub fn delete(&self, id: EntityId) -> ServiceResult<()> {
        let city = self.repo.get_by_id(id)?;
        self.repo.delete(&city)?;
        Ok(())
    }

    /// Case-sensitive substring search on city names.
    pub fn search(&self, name: Option<&str>) -> ServiceResult<Vec<CityDto>> {
        Ok(self
            .repo
            .search_by_name(name)?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
