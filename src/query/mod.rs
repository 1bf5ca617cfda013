//! In-memory list-query pipeline used by the admin listings.
//!
//! A listing request runs `filter -> sort -> paginate` over a read-only
//! snapshot of records. Summary [`stats::Statistics`] are computed separately
//! over the complete snapshot and never depend on the criteria.

use chrono::{NaiveDate, NaiveDateTime};

use crate::pagination::{Page, Pagination, paginate};

pub mod filter;
pub mod sort;
pub mod stats;

pub use filter::Predicate;
pub use sort::{SortDirection, SortKey};
pub use stats::Statistics;

/// Read-only view of an entity that can appear in an admin listing.
pub trait ListRecord {
    fn id(&self) -> i32;
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn is_active(&self) -> bool;
    fn is_deleted(&self) -> bool;
    fn display_order(&self) -> i32;
    fn created_at(&self) -> NaiveDateTime;
}

/// Search, filter, sort and paging parameters of a single listing request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchCriteria {
    /// Free-text term matched against name and description.
    pub search: Option<String>,
    /// `None` keeps both active and inactive records.
    pub is_active: Option<bool>,
    /// Inclusive lower bound on the creation date.
    pub created_from: Option<NaiveDate>,
    /// Inclusive upper bound on the creation date.
    pub created_to: Option<NaiveDate>,
    pub include_deleted: bool,
    pub sort_key: SortKey,
    pub direction: SortDirection,
    pub pagination: Pagination,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn created_between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.created_from = from;
        self.created_to = to;
        self
    }

    pub fn include_deleted(mut self, include_deleted: bool) -> Self {
        self.include_deleted = include_deleted;
        self
    }

    pub fn sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.direction = direction;
        self
    }

    /// Non-positive values fall back to the defaults.
    pub fn paginate(mut self, page: i64, per_page: i64) -> Self {
        self.pagination = Pagination::new(page, per_page);
        self
    }
}

/// Filters, orders and pages `records` according to `criteria`.
///
/// The input slice is left untouched; the returned page owns clones of the
/// selected records only.
pub fn run_list_query<T>(records: &[T], criteria: &SearchCriteria) -> Page<T>
where
    T: ListRecord + Clone,
{
    let predicate = Predicate::new(criteria);
    let mut matching: Vec<&T> = records
        .iter()
        .filter(|record| predicate.matches(*record))
        .collect();

    sort::sort_records(&mut matching, criteria.sort_key, criteria.direction);

    paginate(&matching, criteria.pagination).map(|record| record.clone())
}
