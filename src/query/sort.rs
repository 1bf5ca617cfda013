//! Ordering of listing records by a named key.

use std::cmp::Ordering;

use crate::query::ListRecord;

/// Column a listing can be ordered by.
///
/// `Default` stands for the listing's natural order: display order, then name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Default,
    Name,
    DisplayOrder,
    CreatedAt,
}

impl SortKey {
    /// Parses a key name ignoring case and `_`/`-` separators.
    ///
    /// Returns `None` for unknown names; callers fall back to
    /// [`SortKey::Default`] instead of rejecting the request.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "name" => Some(Self::Name),
            "displayorder" | "order" => Some(Self::DisplayOrder),
            "createdat" | "created" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parses `asc`/`desc` (or their long forms), case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Total order over records for the given key and direction.
///
/// The direction applies to the requested key only. The identifier is the
/// final tiebreak and always ascending, so equal keys keep a stable order
/// across calls. [`SortKey::Default`] ignores the direction.
pub fn compare<R: ListRecord + ?Sized>(
    a: &R,
    b: &R,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    let primary = match key {
        SortKey::Default => a
            .display_order()
            .cmp(&b.display_order())
            .then_with(|| a.name().cmp(b.name())),
        SortKey::Name => direction.apply(a.name().cmp(b.name())),
        SortKey::DisplayOrder => direction.apply(
            a.display_order()
                .cmp(&b.display_order())
                .then_with(|| a.name().cmp(b.name())),
        ),
        SortKey::CreatedAt => direction.apply(a.created_at().cmp(&b.created_at())),
    };

    primary.then_with(|| a.id().cmp(&b.id()))
}

/// Sorts borrowed records in place without touching the records themselves.
pub fn sort_records<R: ListRecord>(records: &mut [&R], key: SortKey, direction: SortDirection) {
    records.sort_by(|a, b| compare(*a, *b, key, direction));
}
