//! Predicate built from [`SearchCriteria`] and applied to listing records.

use chrono::NaiveDate;

use crate::query::{ListRecord, SearchCriteria};

/// AND-combination of every active criterion of a listing request.
///
/// Text matching is case-insensitive: both the term and the record fields are
/// lower-cased before the substring test. A missing description matches as an
/// empty string.
#[derive(Debug, Clone)]
pub struct Predicate {
    term: Option<String>,
    is_active: Option<bool>,
    created_from: Option<NaiveDate>,
    created_to: Option<NaiveDate>,
    include_deleted: bool,
}

impl Predicate {
    pub fn new(criteria: &SearchCriteria) -> Self {
        let term = criteria
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        Self {
            term,
            is_active: criteria.is_active,
            created_from: criteria.created_from,
            created_to: criteria.created_to,
            include_deleted: criteria.include_deleted,
        }
    }

    pub fn matches<R: ListRecord + ?Sized>(&self, record: &R) -> bool {
        self.matches_deleted(record)
            && self.matches_active(record)
            && self.matches_created(record)
            && self.matches_term(record)
    }

    fn matches_deleted<R: ListRecord + ?Sized>(&self, record: &R) -> bool {
        self.include_deleted || !record.is_deleted()
    }

    fn matches_active<R: ListRecord + ?Sized>(&self, record: &R) -> bool {
        self.is_active
            .is_none_or(|expected| record.is_active() == expected)
    }

    fn matches_created<R: ListRecord + ?Sized>(&self, record: &R) -> bool {
        let created = record.created_at().date();
        self.created_from.is_none_or(|from| created >= from)
            && self.created_to.is_none_or(|to| created <= to)
    }

    fn matches_term<R: ListRecord + ?Sized>(&self, record: &R) -> bool {
        let Some(term) = &self.term else {
            return true;
        };

        record.name().to_lowercase().contains(term)
            || record
                .description()
                .unwrap_or_default()
                .to_lowercase()
                .contains(term)
    }
}
