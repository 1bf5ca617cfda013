//! Read access to the record snapshot the listings operate on.

use crate::{
    domain::{
        service_category::ServiceCategory,
        specialization::Specialization,
        types::{ServiceCategoryId, SpecializationId},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod json;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use json::{JsonRepository, Snapshot};

pub trait SpecializationReader {
    /// Returns every specialization, soft-deleted ones included.
    fn list_specializations(&self) -> RepositoryResult<Vec<Specialization>>;
    fn get_specialization_by_id(
        &self,
        id: SpecializationId,
    ) -> RepositoryResult<Option<Specialization>>;
}

pub trait ServiceCategoryReader {
    /// Returns every service category, soft-deleted ones included.
    fn list_service_categories(&self) -> RepositoryResult<Vec<ServiceCategory>>;
    fn get_service_category_by_id(
        &self,
        id: ServiceCategoryId,
    ) -> RepositoryResult<Option<ServiceCategory>>;
}
