//! Query-string form shared by every admin listing.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::forms::FormError;
use crate::pagination::Pagination;
use crate::query::{SearchCriteria, SortDirection, SortKey};

/// Raw listing parameters as they arrive in the query string.
///
/// Everything is kept as text so that lenient fields (paging, sorting) can
/// fall back to defaults instead of failing deserialization.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListQueryForm {
    #[validate(length(max = 200))]
    pub search: Option<String>,
    /// `true`, `false`, or `any`/empty for no filter.
    pub is_active: Option<String>,
    /// `YYYY-MM-DD`, inclusive.
    pub created_from: Option<String>,
    /// `YYYY-MM-DD`, inclusive.
    pub created_to: Option<String>,
    pub include_deleted: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl ListQueryForm {
    /// Builds the form from decoded query pairs. A repeated key keeps its last
    /// value and unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "search" => &mut form.search,
                "is_active" => &mut form.is_active,
                "created_from" => &mut form.created_from,
                "created_to" => &mut form.created_to,
                "include_deleted" => &mut form.include_deleted,
                "sort" => &mut form.sort,
                "direction" => &mut form.direction,
                "page" => &mut form.page,
                "per_page" => &mut form.per_page,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        form
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_date(value: Option<&str>) -> Result<Option<NaiveDate>, FormError> {
    non_blank(value)
        .map(|raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| FormError::InvalidDate(raw.to_string()))
        })
        .transpose()
}

fn parse_active(value: Option<&str>) -> Result<Option<bool>, FormError> {
    let Some(raw) = non_blank(value) else {
        return Ok(None);
    };
    match raw.to_lowercase().as_str() {
        "any" | "all" => Ok(None),
        "true" | "1" | "active" => Ok(Some(true)),
        "false" | "0" | "inactive" => Ok(Some(false)),
        _ => Err(FormError::InvalidActiveFilter(raw.to_string())),
    }
}

fn parse_flag(value: Option<&str>) -> Result<bool, FormError> {
    let Some(raw) = non_blank(value) else {
        return Ok(false);
    };
    match raw.to_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(FormError::InvalidFlag(raw.to_string())),
    }
}

/// Unparseable numbers count as absent and end up as the paging defaults.
fn parse_number(value: Option<&str>) -> i64 {
    non_blank(value)
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(0)
}

impl TryFrom<ListQueryForm> for SearchCriteria {
    type Error = FormError;

    fn try_from(form: ListQueryForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let created_from = parse_date(form.created_from.as_deref())?;
        let created_to = parse_date(form.created_to.as_deref())?;
        if let (Some(from), Some(to)) = (created_from, created_to) {
            if from > to {
                return Err(FormError::InvalidDateRange);
            }
        }

        let sort_key = match non_blank(form.sort.as_deref()) {
            Some(raw) => SortKey::parse(raw).unwrap_or_else(|| {
                log::debug!("Unknown sort key {raw:?}, using default ordering");
                SortKey::Default
            }),
            None => SortKey::Default,
        };
        let direction = non_blank(form.direction.as_deref())
            .and_then(SortDirection::parse)
            .unwrap_or_default();

        Ok(SearchCriteria {
            search: non_blank(form.search.as_deref()).map(str::to_string),
            is_active: parse_active(form.is_active.as_deref())?,
            created_from,
            created_to,
            include_deleted: parse_flag(form.include_deleted.as_deref())?,
            sort_key,
            direction,
            pagination: Pagination::new(
                parse_number(form.page.as_deref()),
                parse_number(form.per_page.as_deref()),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ListQueryForm {
        ListQueryForm::default()
    }

    #[test]
    fn repeated_keys_keep_last_value() {
        let form = ListQueryForm::from_pairs([
            ("page", "1"),
            ("sort", "name"),
            ("page", "2"),
            ("sort", "created_at"),
            ("unknown", "ignored"),
        ]);

        assert_eq!(form.page.as_deref(), Some("2"));
        assert_eq!(form.sort.as_deref(), Some("created_at"));
        assert!(form.search.is_none());
    }

    #[test]
    fn empty_form_gives_default_criteria() {
        let criteria = SearchCriteria::try_from(form()).expect("valid form");
        assert_eq!(criteria, SearchCriteria::default());
    }

    #[test]
    fn parses_every_field() {
        let criteria = SearchCriteria::try_from(ListQueryForm {
            search: Some("  derm ".to_string()),
            is_active: Some("false".to_string()),
            created_from: Some("2024-01-01".to_string()),
            created_to: Some("2024-12-31".to_string()),
            include_deleted: Some("on".to_string()),
            sort: Some("created_at".to_string()),
            direction: Some("desc".to_string()),
            page: Some("3".to_string()),
            per_page: Some("25".to_string()),
        })
        .expect("valid form");

        assert_eq!(criteria.search.as_deref(), Some("derm"));
        assert_eq!(criteria.is_active, Some(false));
        assert_eq!(criteria.created_from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(criteria.created_to, NaiveDate::from_ymd_opt(2024, 12, 31));
        assert!(criteria.include_deleted);
        assert_eq!(criteria.sort_key, SortKey::CreatedAt);
        assert_eq!(criteria.direction, SortDirection::Descending);
        assert_eq!(criteria.pagination, Pagination::new(3, 25));
    }

    #[test]
    fn lenient_fields_fall_back_to_defaults() {
        let criteria = SearchCriteria::try_from(ListQueryForm {
            sort: Some("price".to_string()),
            direction: Some("sideways".to_string()),
            page: Some("-2".to_string()),
            per_page: Some("many".to_string()),
            ..form()
        })
        .expect("valid form");

        assert_eq!(criteria.sort_key, SortKey::Default);
        assert_eq!(criteria.direction, SortDirection::Ascending);
        assert_eq!(criteria.pagination, Pagination::default());
    }

    #[test]
    fn rejects_malformed_dates_and_ranges() {
        let bad_date = SearchCriteria::try_from(ListQueryForm {
            created_from: Some("01/02/2024".to_string()),
            ..form()
        });
        let reversed = SearchCriteria::try_from(ListQueryForm {
            created_from: Some("2024-06-01".to_string()),
            created_to: Some("2024-01-01".to_string()),
            ..form()
        });

        assert!(matches!(bad_date, Err(FormError::InvalidDate(_))));
        assert!(matches!(reversed, Err(FormError::InvalidDateRange)));
    }

    #[test]
    fn rejects_unknown_active_filter_and_flag() {
        let active = SearchCriteria::try_from(ListQueryForm {
            is_active: Some("maybe".to_string()),
            ..form()
        });
        let flag = SearchCriteria::try_from(ListQueryForm {
            include_deleted: Some("perhaps".to_string()),
            ..form()
        });

        assert!(matches!(active, Err(FormError::InvalidActiveFilter(_))));
        assert!(matches!(flag, Err(FormError::InvalidFlag(_))));
    }

    #[test]
    fn any_active_filter_means_no_filter() {
        let criteria = SearchCriteria::try_from(ListQueryForm {
            is_active: Some("ANY".to_string()),
            ..form()
        })
        .expect("valid form");

        assert_eq!(criteria.is_active, None);
    }

    #[test]
    fn overlong_search_fails_validation() {
        let result = SearchCriteria::try_from(ListQueryForm {
            search: Some("x".repeat(201)),
            ..form()
        });

        assert!(matches!(result, Err(FormError::Validation(_))));
    }
}
