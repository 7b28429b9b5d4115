use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::types::{Status, TagId};
use crate::domain::{CatalogEntity, Column};
use crate::select_option::OptionSet;
use crate::sorting::RecordFields;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: TagId,
    pub title: String,
    pub status: Status,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTag {
    pub title: String,
    pub status: Status,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTag {
    pub id: TagId,
    pub title: String,
    pub status: Status,
}

impl RecordFields for Tag {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "title" => Some(Cow::Borrowed(self.title.as_str())),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }
}

/// Marker for the tags collection.
pub struct Tags;

impl CatalogEntity for Tags {
    type Id = TagId;
    type Record = Tag;
    type New = NewTag;
    type Update = UpdateTag;

    const RESOURCE: &'static str = "tags";
    const TITLE: &'static str = "Tags";
    const SINGULAR: &'static str = "tag";
    const COLUMNS: &'static [Column] = &[
        Column::sortable("title", "Title"),
        Column::sortable("status", "Status"),
    ];

    fn id_of(record: &Tag) -> TagId {
        record.id
    }
}
