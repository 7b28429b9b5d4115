use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::types::{AppConfigId, Status};
use crate::domain::{CatalogEntity, Column};
use crate::select_option::OptionSet;
use crate::sorting::RecordFields;

/// Application-wide key/value setting.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub id: AppConfigId,
    pub key: String,
    pub value: String,
    pub status: Status,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAppConfig {
    pub key: String,
    pub value: String,
    pub status: Status,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppConfig {
    pub id: AppConfigId,
    pub key: String,
    pub value: String,
    pub status: Status,
}

impl RecordFields for AppConfig {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "key" => Some(Cow::Borrowed(self.key.as_str())),
            "value" => Some(Cow::Borrowed(self.value.as_str())),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }
}

/// Marker for the app configuration collection.
pub struct AppConfigs;

impl CatalogEntity for AppConfigs {
    type Id = AppConfigId;
    type Record = AppConfig;
    type New = NewAppConfig;
    type Update = UpdateAppConfig;

    const RESOURCE: &'static str = "app-configs";
    const TITLE: &'static str = "App Configs";
    const SINGULAR: &'static str = "app config";
    const COLUMNS: &'static [Column] = &[
        Column::sortable("key", "Key"),
        Column::sortable("value", "Value"),
        Column::sortable("status", "Status"),
    ];

    fn id_of(record: &AppConfig) -> AppConfigId {
        record.id
    }
}
