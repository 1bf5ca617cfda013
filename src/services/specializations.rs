//! Services backing the specialization admin pages.

use chrono::NaiveDate;

use crate::domain::specialization::Specialization;
use crate::domain::types::SpecializationId;
use crate::dto::listing::ListPageData;
use crate::forms::listing::ListQueryForm;
use crate::query::Statistics;
use crate::repository::SpecializationReader;
use crate::services::listing::{build_listing, parse_criteria};
use crate::services::{ServiceError, ServiceResult};

/// Loads one page of specializations together with the summary counts.
pub fn list_specializations<R>(
    repo: &R,
    form: ListQueryForm,
    today: NaiveDate,
) -> ServiceResult<ListPageData<Specialization>>
where
    R: SpecializationReader + ?Sized,
{
    let criteria = parse_criteria(form)?;

    let specializations = repo.list_specializations().map_err(|err| {
        log::error!("Failed to load specializations: {err}");
        err
    })?;

    let data = build_listing(&specializations, &criteria, today);
    log::debug!(
        "Listed specializations: page {} of {}, {} matching",
        data.page.page,
        data.page.total_pages,
        data.page.total
    );

    Ok(data)
}

/// Fetches a single specialization, deleted ones included.
pub fn get_specialization<R>(repo: &R, id: i32) -> ServiceResult<Specialization>
where
    R: SpecializationReader + ?Sized,
{
    let id = SpecializationId::new(id)?;

    repo.get_specialization_by_id(id)
        .map_err(|err| {
            log::error!("Failed to load specialization {id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)
}

/// Summary counts over every stored specialization.
pub fn specialization_statistics<R>(repo: &R, today: NaiveDate) -> ServiceResult<Statistics>
where
    R: SpecializationReader + ?Sized,
{
    let specializations = repo.list_specializations().map_err(|err| {
        log::error!("Failed to load specializations: {err}");
        err
    })?;

    Ok(Statistics::collect(&specializations, today))
}
