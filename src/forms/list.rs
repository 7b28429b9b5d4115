use serde::Deserialize;

use crate::sorting::SortOrder;

/// Query string of a list screen, translated into pagination events.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListQuery {
    /// Submitted search text. Present even when empty so that clearing the
    /// search box is an event of its own.
    pub search: Option<String>,
    /// One-based page number.
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
    /// Start over from the default filter, as on a fresh visit.
    #[serde(default)]
    pub reset: bool,
}
