use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::types::{ContactId, ContactStatus};
use crate::domain::{CatalogEntity, Column};
use crate::select_option::OptionSet;
use crate::sorting::RecordFields;

/// Customer contact submission.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub email: String,
    pub phone_number: String,
    pub content: String,
    pub status: ContactStatus,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub email: String,
    pub phone_number: String,
    pub content: String,
    pub status: ContactStatus,
}

impl NewContact {
    #[must_use]
    pub fn new(email: String, phone_number: String, content: String, status: ContactStatus) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            phone_number: phone_number.trim().to_string(),
            content: content.trim().to_string(),
            status,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContact {
    pub id: ContactId,
    pub email: String,
    pub phone_number: String,
    pub content: String,
    pub status: ContactStatus,
}

impl UpdateContact {
    #[must_use]
    pub fn new(
        id: ContactId,
        email: String,
        phone_number: String,
        content: String,
        status: ContactStatus,
    ) -> Self {
        Self {
            id,
            email: email.trim().to_lowercase(),
            phone_number: phone_number.trim().to_string(),
            content: content.trim().to_string(),
            status,
        }
    }
}

impl RecordFields for Contact {
    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "email" => Some(Cow::Borrowed(self.email.as_str())),
            "phoneNumber" => Some(Cow::Borrowed(self.phone_number.as_str())),
            "content" => Some(Cow::Borrowed(self.content.as_str())),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }
}

/// Marker for the contact submissions collection.
pub struct Contacts;

impl CatalogEntity for Contacts {
    type Id = ContactId;
    type Record = Contact;
    type New = NewContact;
    type Update = UpdateContact;

    const RESOURCE: &'static str = "contacts";
    const TITLE: &'static str = "Contacts";
    const SINGULAR: &'static str = "contact";
    const COLUMNS: &'static [Column] = &[
        Column::sortable("email", "Email"),
        Column::sortable("phoneNumber", "Phone Number"),
        Column::sortable("content", "Content"),
        Column::sortable("status", "Status"),
    ];

    fn id_of(record: &Contact) -> ContactId {
        record.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_contact_normalizes_inputs() {
        let contact = NewContact::new(
            " Jane@Example.COM ".to_string(),
            " +1 555 0100 ".to_string(),
            "<b>Call me</b> back".to_string(),
            ContactStatus::default(),
        );

        assert_eq!(contact.email, "jane@example.com");
        assert_eq!(contact.phone_number, "+1 555 0100");
        assert_eq!(contact.content, "<b>Call me</b> back");
        assert_eq!(contact.status, ContactStatus::Pending);
    }

    #[test]
    fn update_contact_keeps_typed_text() {
        let contact = UpdateContact::new(
            ContactId::new("c1").unwrap(),
            "a@b.c".to_string(),
            "123".to_string(),
            " Salt & pepper <3 ".to_string(),
            ContactStatus::Resolved,
        );

        assert_eq!(contact.content, "Salt & pepper <3");
        let payload = serde_json::to_value(&contact).unwrap();
        assert_eq!(payload["content"], "Salt & pepper <3");
    }

    #[test]
    fn phone_number_is_exposed_under_wire_name() {
        let contact: Contact = serde_json::from_str(
            r#"{"id":"c1","email":"a@b.c","phoneNumber":"123","content":"hi","status":"RESOLVED"}"#,
        )
        .unwrap();

        assert_eq!(contact.field("phoneNumber").as_deref(), Some("123"));
        assert_eq!(contact.field("phone_number"), None);
    }
}
