use serde::Deserialize;
use validator::Validate;

use crate::domain::app_config::{AppConfig, AppConfigs, NewAppConfig, UpdateAppConfig};
use crate::domain::types::{AppConfigId, Status};
use crate::domain::{Draft, EditorMode};
use crate::forms::{EntityForm, FormError, FormField, Lookups, not_blank, parse_optional_id};
use crate::select_option::status_options;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct AppConfigForm {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 500), custom(function = "not_blank"))]
    pub key: String,
    #[validate(length(min = 1, max = 500), custom(function = "not_blank"))]
    pub value: String,
    #[serde(default)]
    pub status: Status,
}

impl EntityForm for AppConfigForm {
    type Entity = AppConfigs;

    fn from_record(record: &AppConfig) -> Self {
        Self {
            id: Some(record.id.to_string()),
            key: record.key.clone(),
            value: record.value.clone(),
            status: record.status,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn into_draft(self) -> Result<Draft<AppConfigs>, FormError> {
        let key = self.key.trim().to_string();
        let value = self.value.trim().to_string();
        Ok(
            match parse_optional_id::<AppConfigId>(self.id.as_deref())? {
                Some(id) => EditorMode::Edit(UpdateAppConfig {
                    id,
                    key,
                    value,
                    status: self.status,
                }),
                None => EditorMode::Create(NewAppConfig {
                    key,
                    value,
                    status: self.status,
                }),
            },
        )
    }

    fn fields(&self, _lookups: &Lookups) -> Vec<FormField> {
        vec![
            FormField::text("key", "Key", &self.key)
                .required()
                .max_length(500),
            FormField::text_area("value", "Value", &self.value)
                .required()
                .max_length(500),
            FormField::select(
                "status",
                "Status",
                status_options::<Status>(),
                Some(self.status.to_string()),
            ),
        ]
    }
}
