//! Listing workflow shared by every admin entity.

use chrono::NaiveDate;

use crate::dto::listing::ListPageData;
use crate::forms::listing::ListQueryForm;
use crate::query::{ListRecord, SearchCriteria, Statistics, run_list_query};
use crate::services::{ServiceError, ServiceResult};

/// Converts the raw query form into validated search criteria.
pub fn parse_criteria(form: ListQueryForm) -> ServiceResult<SearchCriteria> {
    SearchCriteria::try_from(form).map_err(|err| {
        log::error!("Failed to validate listing query: {err}");
        ServiceError::Form(format!("پارامترهای جستجو نامعتبر است: {err}"))
    })
}

/// Runs the list query over `records` and summarizes the full set.
///
/// Statistics are taken from `records` before any filtering so they never
/// depend on the criteria.
pub fn build_listing<T>(
    records: &[T],
    criteria: &SearchCriteria,
    today: NaiveDate,
) -> ListPageData<T>
where
    T: ListRecord + Clone,
{
    ListPageData {
        page: run_list_query(records, criteria),
        statistics: Statistics::collect(records, today),
    }
}
