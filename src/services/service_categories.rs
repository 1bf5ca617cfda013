//! Services backing the service category admin pages.

use chrono::NaiveDate;

use crate::domain::service_category::ServiceCategory;
use crate::domain::types::ServiceCategoryId;
use crate::dto::listing::ListPageData;
use crate::forms::listing::ListQueryForm;
use crate::query::Statistics;
use crate::repository::ServiceCategoryReader;
use crate::services::listing::{build_listing, parse_criteria};
use crate::services::{ServiceError, ServiceResult};

/// Loads one page of service categories together with the summary counts.
pub fn list_service_categories<R>(
    repo: &R,
    form: ListQueryForm,
    today: NaiveDate,
) -> ServiceResult<ListPageData<ServiceCategory>>
where
    R: ServiceCategoryReader + ?Sized,
{
    let criteria = parse_criteria(form)?;

    let categories = repo.list_service_categories().map_err(|err| {
        log::error!("Failed to load service categories: {err}");
        err
    })?;

    Ok(build_listing(&categories, &criteria, today))
}

pub fn get_service_category<R>(repo: &R, id: i32) -> ServiceResult<ServiceCategory>
where
    R: ServiceCategoryReader + ?Sized,
{
    let id = ServiceCategoryId::new(id)?;

    repo.get_service_category_by_id(id)
        .map_err(|err| {
            log::error!("Failed to load service category {id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)
}

pub fn service_category_statistics<R>(repo: &R, today: NaiveDate) -> ServiceResult<Statistics>
where
    R: ServiceCategoryReader + ?Sized,
{
    let categories = repo.list_service_categories().map_err(|err| {
        log::error!("Failed to load service categories: {err}");
        err
    })?;

    Ok(Statistics::collect(&categories, today))
}
