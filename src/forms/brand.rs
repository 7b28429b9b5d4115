use serde::Deserialize;
use validator::Validate;

use crate::domain::brand::{Brand, Brands, NewBrand, UpdateBrand};
use crate::domain::types::{BrandId, Status};
use crate::domain::{Draft, EditorMode};
use crate::forms::{EntityForm, FormError, FormField, Lookups, not_blank, parse_optional_id};
use crate::select_option::status_options;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct BrandForm {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub summary: String,
    #[serde(default)]
    pub status: Status,
}

impl EntityForm for BrandForm {
    type Entity = Brands;

    fn from_record(record: &Brand) -> Self {
        Self {
            id: Some(record.id.to_string()),
            name: record.name.clone(),
            summary: record.summary.clone().unwrap_or_default(),
            status: record.status,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn into_draft(self) -> Result<Draft<Brands>, FormError> {
        let summary = Some(self.summary);
        Ok(match parse_optional_id::<BrandId>(self.id.as_deref())? {
            Some(id) => EditorMode::Edit(UpdateBrand::new(id, self.name, summary, self.status)),
            None => EditorMode::Create(NewBrand::new(self.name, summary, self.status)),
        })
    }

    fn fields(&self, _lookups: &Lookups) -> Vec<FormField> {
        vec![
            FormField::text("name", "Name", &self.name)
                .required()
                .max_length(255),
            FormField::text_area("summary", "Summary", &self.summary).max_length(500),
            FormField::select(
                "status",
                "Status",
                status_options::<Status>(),
                Some(self.status.to_string()),
            ),
        ]
    }
}
