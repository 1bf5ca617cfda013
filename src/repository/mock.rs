//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::service_category::ServiceCategory;
use crate::domain::specialization::Specialization;
use crate::domain::types::{ServiceCategoryId, SpecializationId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ServiceCategoryReader, SpecializationReader};

mock! {
    pub Repository {}

    impl SpecializationReader for Repository {
        fn list_specializations(&self) -> RepositoryResult<Vec<Specialization>>;
        fn get_specialization_by_id(
            &self,
            id: SpecializationId,
        ) -> RepositoryResult<Option<Specialization>>;
    }

    impl ServiceCategoryReader for Repository {
        fn list_service_categories(&self) -> RepositoryResult<Vec<ServiceCategory>>;
        fn get_service_category_by_id(
            &self,
            id: ServiceCategoryId,
        ) -> RepositoryResult<Option<ServiceCategory>>;
    }
}
