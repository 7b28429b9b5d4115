use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::types::{BrandId, Status, non_blank};
use crate::domain::{CatalogEntity, Column};
use crate::select_option::OptionSet;
use crate::sorting::RecordFields;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub status: Status,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBrand {
    pub name: String,
    pub summary: Option<String>,
    pub status: Status,
}

impl NewBrand {
    #[must_use]
    pub fn new(name: String, summary: Option<String>, status: Status) -> Self {
        Self {
            name: name.trim().to_string(),
            summary: non_blank(summary),
            status,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrand {
    pub id: BrandId,
    pub name: String,
    pub summary: Option<String>,
    pub status: Status,
}

impl UpdateBrand {
    #[must_use]
    pub fn new(id: BrandId, name: String, summary: Option<String>, status: Status) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            summary: non_blank(summary),
            status,
        }
    }
}

impl RecordFields for Brand {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "summary" => self.summary.as_deref().map(Cow::Borrowed),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }
}

/// Marker for the brands collection.
pub struct Brands;

impl CatalogEntity for Brands {
    type Id = BrandId;
    type Record = Brand;
    type New = NewBrand;
    type Update = UpdateBrand;

    const RESOURCE: &'static str = "brands";
    const TITLE: &'static str = "Brands";
    const SINGULAR: &'static str = "brand";
    const COLUMNS: &'static [Column] = &[
        Column::sortable("name", "Name"),
        Column::sortable("summary", "Summary"),
        Column::sortable("status", "Status"),
    ];

    fn id_of(record: &Brand) -> BrandId {
        record.id
    }
}
