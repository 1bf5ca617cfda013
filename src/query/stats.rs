use chrono::NaiveDate;
use serde::Serialize;

use crate::query::ListRecord;

/// Summary counts over a complete, unfiltered record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Statistics {
    pub total: usize,
    /// Active and not deleted.
    pub active: usize,
    /// Inactive and not deleted.
    pub inactive: usize,
    /// Deleted regardless of the active flag.
    pub deleted: usize,
    /// Created on `today`, as supplied by the caller.
    pub created_today: usize,
}

impl Statistics {
    /// Counts `records` in one pass. `today` is passed in so that no clock is
    /// read here.
    pub fn collect<R: ListRecord>(records: &[R], today: NaiveDate) -> Self {
        records.iter().fold(Self::default(), |mut stats, record| {
            stats.total += 1;
            match (record.is_deleted(), record.is_active()) {
                (true, _) => stats.deleted += 1,
                (false, true) => stats.active += 1,
                (false, false) => stats.inactive += 1,
            }
            if record.created_at().date() == today {
                stats.created_today += 1;
            }
            stats
        })
    }
}
