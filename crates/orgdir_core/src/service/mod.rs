//! Directory use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into transfer-object level APIs.
//! - Keep outer layers decoupled from entity and SQL details.
//!
//! # Invariants
//! - Services never bypass the repository persistence contract.
//! - Entity/DTO translation goes through the mapping layer only.

use crate::repo::entity_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod city_service;
pub mod country_service;
pub mod employee_service;

pub use city_service::CityService;
pub use country_service::CountryService;
pub use employee_service::EmployeeService;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error shared by the directory use-case facades.
#[derive(Debug)]
pub enum ServiceError {
    /// The transfer object carries no identity for an identity-keyed call.
    MissingId(&'static str),
    /// Persistence-layer failure, propagated unrecovered.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingId(operation) => {
                write!(f, "{operation} requires a transfer object with an assigned id")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingId(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
