//! Paths of the catalog REST API, relative to the configured base URL.

use std::fmt::Display;

/// Paginated fetch; the filter goes into the query string, see
/// [`crate::pagination::pagination_filter_pairs`].
pub fn pagination(resource: &str) -> String {
    format!("{resource}/pagination")
}

pub fn available(resource: &str) -> String {
    format!("{resource}/available")
}

pub fn by_id(resource: &str, id: impl Display) -> String {
    format!("{resource}/{id}")
}

/// Collection path used by create (POST) and update (PUT).
pub fn collection(resource: &str) -> String {
    resource.to_string()
}

pub const PRODUCT_IMAGES: &str = "products/images";
pub const LOGIN: &str = "accounts/login";

pub fn revoke(name: &str) -> String {
    format!("accounts/revoke/{name}")
}
