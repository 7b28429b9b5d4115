//! Catalog entities managed by the admin console.
//!
//! Each entity module exposes the record returned by the catalog API, the
//! payloads for creating and updating it, and a marker type implementing
//! [`CatalogEntity`]. The marker is what the generic list, editor and mutation
//! code is instantiated with.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::types::TypeConstraintError;
use crate::sorting::RecordFields;

pub mod app_config;
pub mod brand;
pub mod category;
pub mod contact;
pub mod product;
pub mod session;
pub mod tag;
pub mod types;

/// One column of a list screen.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Column {
    /// Wire name of the field rendered in the column.
    pub key: &'static str,
    pub title: &'static str,
    pub sortable: bool,
}

impl Column {
    pub const fn sortable(key: &'static str, title: &'static str) -> Self {
        Self {
            key,
            title,
            sortable: true,
        }
    }

    pub const fn plain(key: &'static str, title: &'static str) -> Self {
        Self {
            key,
            title,
            sortable: false,
        }
    }
}

/// Static description of an entity collection exposed by the catalog API.
pub trait CatalogEntity: 'static {
    type Id: Clone + Debug + Display + FromStr<Err = TypeConstraintError> + Send + Sync;
    type Record: Clone + Debug + DeserializeOwned + Serialize + RecordFields + Send + Sync;
    type New: Debug + Serialize + Send + Sync;
    type Update: Debug + Serialize + Send + Sync;

    /// Path segment of the REST resource and of the admin screen.
    const RESOURCE: &'static str;
    /// Heading of the list screen.
    const TITLE: &'static str;
    /// Lower-case singular noun used in buttons and editor headings.
    const SINGULAR: &'static str;
    const COLUMNS: &'static [Column];

    fn id_of(record: &Self::Record) -> Self::Id;

    /// Returns the column when `key` names a sortable one.
    fn sortable_column(key: &str) -> Option<&'static Column> {
        Self::COLUMNS
            .iter()
            .find(|column| column.sortable && column.key == key)
    }
}

/// Draft handed over by an editor form.
///
/// Creating and editing carry different payloads, so the mode is part of the
/// value instead of a flag next to an optional payload.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorMode<N, U> {
    Create(N),
    Edit(U),
}

impl<N, U> EditorMode<N, U> {
    pub fn is_create(&self) -> bool {
        matches!(self, EditorMode::Create(_))
    }
}

/// Editor draft for entity `E`.
pub type Draft<E> = EditorMode<<E as CatalogEntity>::New, <E as CatalogEntity>::Update>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Categories;
    use crate::domain::product::Products;

    #[test]
    fn sortable_column_ignores_plain_columns() {
        assert!(Categories::sortable_column("name").is_some());
        assert!(Categories::sortable_column("unknown").is_none());
        assert!(Products::sortable_column("imageUrl").is_none());
    }

    #[test]
    fn editor_mode_reports_create() {
        let create: EditorMode<u8, u16> = EditorMode::Create(1);
        let edit: EditorMode<u8, u16> = EditorMode::Edit(2);

        assert!(create.is_create());
        assert!(!edit.is_create());
    }
}
