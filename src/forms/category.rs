use serde::Deserialize;
use validator::Validate;

use crate::domain::category::{Categories, Category, NewCategory, UpdateCategory};
use crate::domain::types::{CategoryId, Status};
use crate::domain::{Draft, EditorMode};
use crate::forms::{EntityForm, FormError, FormField, Lookups, not_blank, parse_optional_id};
use crate::select_option::status_options;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CategoryForm {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,
    #[serde(default)]
    pub status: Status,
}

impl EntityForm for CategoryForm {
    type Entity = Categories;

    fn from_record(record: &Category) -> Self {
        Self {
            id: Some(record.id.to_string()),
            name: record.name.clone(),
            description: record.description.clone().unwrap_or_default(),
            status: record.status,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn into_draft(self) -> Result<Draft<Categories>, FormError> {
        let description = Some(self.description);
        Ok(
            match parse_optional_id::<CategoryId>(self.id.as_deref())? {
                Some(id) => EditorMode::Edit(UpdateCategory::new(
                    id,
                    self.name,
                    description,
                    self.status,
                )),
                None => EditorMode::Create(NewCategory::new(self.name, description, self.status)),
            },
        )
    }

    fn fields(&self, _lookups: &Lookups) -> Vec<FormField> {
        vec![
            FormField::text("name", "Name", &self.name)
                .required()
                .max_length(255),
            FormField::text_area("description", "Description", &self.description).max_length(500),
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
    fn blank_id_creates_and_numeric_id_edits() {
        let create = CategoryForm {
            name: " Lamps ".to_string(),
            ..CategoryForm::default()
        };
        assert_eq!(
            create.into_draft().unwrap(),
            EditorMode::Create(NewCategory::new(
                "Lamps".to_string(),
                None,
                Status::Active
            ))
        );

        let edit = CategoryForm {
            id: Some("4".to_string()),
            name: "Lamps".to_string(),
            description: "Desk lamps".to_string(),
            status: Status::Deactive,
        };
        match edit.into_draft().unwrap() {
            EditorMode::Edit(update) => {
                assert_eq!(update.id.get(), 4);
                assert_eq!(update.description.as_deref(), Some("Desk lamps"));
            }
            EditorMode::Create(_) => panic!("expected edit draft"),
        }
    }

    #[test]
    fn name_is_required_and_bounded() {
        let blank = CategoryForm {
            name: "   ".to_string(),
            ..CategoryForm::default()
        };
        assert!(blank.validate().is_err());

        let long = CategoryForm {
            name: "x".repeat(256),
            ..CategoryForm::default()
        };
        assert!(long.validate().is_err());
    }
}
