use serde::Deserialize;
use validator::Validate;

use crate::domain::contact::{Contact, Contacts, NewContact, UpdateContact};
use crate::domain::types::{ContactId, ContactStatus};
use crate::domain::{Draft, EditorMode};
use crate::forms::{EntityForm, FormError, FormField, Lookups, not_blank, parse_optional_id};
use crate::select_option::status_options;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(email, length(min = 1, max = 255))]
    pub email: String,
    #[validate(length(min = 1, max = 20), custom(function = "not_blank"))]
    pub phone_number: String,
    #[validate(length(min = 1), custom(function = "not_blank"))]
    pub content: String,
    #[serde(default)]
    pub status: ContactStatus,
}

impl EntityForm for ContactForm {
    type Entity = Contacts;

    fn from_record(record: &Contact) -> Self {
        Self {
            id: Some(record.id.to_string()),
            email: record.email.clone(),
            phone_number: record.phone_number.clone(),
            content: record.content.clone(),
            status: record.status,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn into_draft(self) -> Result<Draft<Contacts>, FormError> {
        Ok(match parse_optional_id::<ContactId>(self.id.as_deref())? {
            Some(id) => EditorMode::Edit(UpdateContact::new(
                id,
                self.email,
                self.phone_number,
                self.content,
                self.status,
            )),
            None => EditorMode::Create(NewContact::new(
                self.email,
                self.phone_number,
                self.content,
                self.status,
            )),
        })
    }

    fn fields(&self, _lookups: &Lookups) -> Vec<FormField> {
        vec![
            FormField::email("email", "Email", &self.email)
                .required()
                .max_length(255),
            FormField::text("phone_number", "Phone Number", &self.phone_number)
                .required()
                .max_length(20),
            FormField::text_area("content", "Content", &self.content).required(),
            FormField::select(
                "status",
                "Status",
                status_options::<ContactStatus>(),
                Some(self.status.to_string()),
            ),
        ]
    }
}
