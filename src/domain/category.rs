use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, Status, non_blank};
use crate::domain::{CatalogEntity, Column};
use crate::select_option::OptionSet;
use crate::sorting::RecordFields;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: Status,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub status: Status,
}

impl NewCategory {
    #[must_use]
    pub fn new(name: String, description: Option<String>, status: Status) -> Self {
        Self {
            name: name.trim().to_string(),
            description: non_blank(description),
            status,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub status: Status,
}

impl UpdateCategory {
    #[must_use]
    pub fn new(
        id: CategoryId,
        name: String,
        description: Option<String>,
        status: Status,
    ) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            description: non_blank(description),
            status,
        }
    }
}

impl RecordFields for Category {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "description" => self.description.as_deref().map(Cow::Borrowed),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }
}

/// Marker for the categories collection.
pub struct Categories;

impl CatalogEntity for Categories {
    type Id = CategoryId;
    type Record = Category;
    type New = NewCategory;
    type Update = UpdateCategory;

    const RESOURCE: &'static str = "categories";
    const TITLE: &'static str = "Categories";
    const SINGULAR: &'static str = "category";
    const COLUMNS: &'static [Column] = &[
        Column::sortable("name", "Name"),
        Column::sortable("description", "Description"),
        Column::sortable("status", "Status"),
    ];

    fn id_of(record: &Category) -> CategoryId {
        record.id
    }
}
