use serde::Deserialize;
use validator::Validate;

use crate::domain::tag::{NewTag, Tag, Tags, UpdateTag};
use crate::domain::types::{Status, TagId};
use crate::domain::{Draft, EditorMode};
use crate::forms::{EntityForm, FormError, FormField, Lookups, not_blank, parse_optional_id};
use crate::select_option::status_options;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct TagForm {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    pub status: Status,
}

impl EntityForm for TagForm {
    type Entity = Tags;

    fn from_record(record: &Tag) -> Self {
        Self {
            id: Some(record.id.to_string()),
            title: record.title.clone(),
            status: record.status,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn into_draft(self) -> Result<Draft<Tags>, FormError> {
        let title = self.title.trim().to_string();
        Ok(match parse_optional_id::<TagId>(self.id.as_deref())? {
            Some(id) => EditorMode::Edit(UpdateTag {
                id,
                title,
                status: self.status,
            }),
            None => EditorMode::Create(NewTag {
                title,
                status: self.status,
            }),
        })
    }

    fn fields(&self, _lookups: &Lookups) -> Vec<FormField> {
        vec![
            FormField::text("title", "Title", &self.title)
                .required()
                .max_length(255),
            FormField::select(
                "status",
                "Status",
                status_options::<Status>(),
                Some(self.status.to_string()),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed_into_payload() {
        let form = TagForm {
            title: "  sale ".to_string(),
            ..TagForm::default()
        };

        assert_eq!(
            form.into_draft().unwrap(),
            EditorMode::Create(NewTag {
                title: "sale".to_string(),
                status: Status::Active,
            })
        );
    }
}
