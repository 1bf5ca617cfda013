//! DTOs returned by the listing services.

use serde::Serialize;

use crate::pagination::Page;
use crate::query::Statistics;

/// Data required to render an admin listing: the requested page plus summary
/// counts over the whole collection.
#[derive(Debug, Serialize)]
pub struct ListPageData<T> {
    pub page: Page<T>,
    pub statistics: Statistics,
}
