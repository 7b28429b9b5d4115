//! Client-side ordering of the rows of a fetched page.
//!
//! Sorting never reaches the catalog API: the list screens reorder the page
//! they already hold. Every entity exposes its displayable fields through
//! [`RecordFields`], so one comparator serves all of them.

use std::borrow::Cow;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Read access to the string form of a record's fields by wire name.
pub trait RecordFields {
    /// Returns `None` when the record has no such field or the value is absent.
    fn field(&self, key: &str) -> Option<Cow<'_, str>>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Locale-style string comparison: letters compare case-insensitively first,
/// and on a tie the lower-case form sorts before the upper-case one.
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| right.cmp(left))
}

/// Compares two optional values treating absent and empty values as `""`.
pub fn compare_optional_str(left: Option<&str>, right: Option<&str>) -> Ordering {
    let left = left.filter(|value| !value.is_empty());
    let right = right.filter(|value| !value.is_empty());

    match (left, right) {
        (None, None) => Ordering::Equal,
        (Some(left), None) => locale_compare(left, ""),
        (None, Some(right)) => locale_compare("", right),
        (Some(left), Some(right)) => locale_compare(left, right),
    }
}

/// Builds a comparator ordering records by the named field.
pub fn compare_by_field<T>(field: &str) -> impl Fn(&T, &T) -> Ordering
where
    T: RecordFields,
{
    move |a, b| compare_optional_str(a.field(field).as_deref(), b.field(field).as_deref())
}

/// Stable in-place sort of `records` by `field`.
pub fn sort_records<T>(records: &mut [T], field: &str, order: SortOrder)
where
    T: RecordFields,
{
    let compare = compare_by_field::<T>(field);
    match order {
        SortOrder::Asc => records.sort_by(|a, b| compare(a, b)),
        SortOrder::Desc => records.sort_by(|a, b| compare(b, a)),
    }
}
