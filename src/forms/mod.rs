//! Form definitions backing the admin console routes.
//!
//! Every editor form implements [`EntityForm`]: it can be prefilled from a
//! record, turned into a create or update draft, and described as a list of
//! [`FormField`]s for the shared editor template.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::domain::types::TypeConstraintError;
use crate::domain::{CatalogEntity, Draft};
use crate::select_option::SelectOption;

pub mod app_config;
pub mod auth;
pub mod brand;
pub mod category;
pub mod contact;
pub mod list;
pub mod product;
pub mod product_images;
pub mod tag;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("could not read submitted form: {0}")]
    Decode(String),

    #[error("invalid identifier")]
    InvalidId,

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Constraint(#[from] TypeConstraintError),
}

impl FormError {
    /// Human readable messages, one per failed field rule.
    pub fn messages(&self) -> Vec<String> {
        match self {
            FormError::Validation(errors) => validation_messages(errors),
            other => vec![other.to_string()],
        }
    }
}

fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    for (field, kind) in errors.errors() {
        if let ValidationErrorsKind::Field(field_errors) = kind {
            for error in field_errors {
                let reason = error
                    .message
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| describe_code(error));
                messages.push(format!("{}: {reason}", field.replace('_', " ")));
            }
        }
    }
    messages.sort();
    messages
}

fn describe_code(error: &ValidationError) -> String {
    match error.code.as_ref() {
        "length" => match (error.params.get("min"), error.params.get("max")) {
            (Some(_), Some(max)) => format!("is required and must be at most {max} characters"),
            (None, Some(max)) => format!("must be at most {max} characters"),
            _ => "is required".to_string(),
        },
        "range" => match error.params.get("min") {
            Some(min) => format!("must be at least {min}"),
            None => "is out of range".to_string(),
        },
        "required" => "is required".to_string(),
        "email" => "must be a valid email address".to_string(),
        "url" => "must be a valid url".to_string(),
        code => code.to_string(),
    }
}

/// Rejects values made only of whitespace.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("is required".into()));
    }
    Ok(())
}

/// Parses the optional hidden `id` field: blank means a new record.
pub(crate) fn parse_optional_id<I>(raw: Option<&str>) -> Result<Option<I>, FormError>
where
    I: std::str::FromStr<Err = TypeConstraintError>,
{
    match raw.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => id.parse().map(Some).map_err(|_| FormError::InvalidId),
        None => Ok(None),
    }
}

/// Widget used to render a form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Url,
    TextArea,
    Number,
    Checkbox,
    Select,
    MultiSelect,
}

/// Rendering description of one editor input.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
    pub max_length: Option<u64>,
    /// Lower bound for number inputs.
    pub min: Option<String>,
    pub step: Option<&'static str>,
    pub options: Vec<SelectOption<String>>,
    pub selected: Vec<String>,
}

impl FormField {
    fn new(name: &'static str, label: &'static str, kind: FieldKind, value: String) -> Self {
        Self {
            name,
            label,
            kind,
            value,
            required: false,
            max_length: None,
            min: None,
            step: None,
            options: Vec::new(),
            selected: Vec::new(),
        }
    }

    pub fn text(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text, value.into())
    }

    pub fn email(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Email, value.into())
    }

    pub fn url(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Url, value.into())
    }

    pub fn text_area(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::TextArea, value.into())
    }

    pub fn number(name: &'static str, label: &'static str, value: impl ToString) -> Self {
        Self::new(name, label, FieldKind::Number, value.to_string())
    }

    pub fn checkbox(name: &'static str, label: &'static str, checked: bool) -> Self {
        let mut field = Self::new(name, label, FieldKind::Checkbox, "true".to_string());
        if checked {
            field.selected.push("true".to_string());
        }
        field
    }

    pub fn select(
        name: &'static str,
        label: &'static str,
        options: Vec<SelectOption<String>>,
        selected: Option<String>,
    ) -> Self {
        let mut field = Self::new(name, label, FieldKind::Select, String::new());
        field.options = options;
        field.selected = selected.into_iter().collect();
        field
    }

    pub fn multi_select(
        name: &'static str,
        label: &'static str,
        options: Vec<SelectOption<String>>,
        selected: Vec<String>,
    ) -> Self {
        let mut field = Self::new(name, label, FieldKind::MultiSelect, String::new());
        field.options = options;
        field.selected = selected;
        field
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn max_length(mut self, max: u64) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn min(mut self, min: impl ToString) -> Self {
        self.min = Some(min.to_string());
        self
    }

    pub fn step(mut self, step: &'static str) -> Self {
        self.step = Some(step);
        self
    }
}

/// Options for the product editor's category, brand and tag pickers.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Lookups {
    pub categories: Vec<SelectOption<String>>,
    pub brands: Vec<SelectOption<String>>,
    pub tags: Vec<SelectOption<String>>,
}

/// Editor form of one catalog entity.
pub trait EntityForm: DeserializeOwned + Validate + Default + Send {
    type Entity: CatalogEntity;

    /// Whether [`EntityForm::fields`] needs category, brand and tag options.
    const NEEDS_LOOKUPS: bool = false;

    /// Prefills the form for editing an existing record.
    fn from_record(record: &<Self::Entity as CatalogEntity>::Record) -> Self;

    /// Identifier carried by the form, blank for new records.
    fn id(&self) -> Option<&str>;

    /// Converts a validated form into the payload for the API.
    fn into_draft(self) -> Result<Draft<Self::Entity>, FormError>;

    fn fields(&self, lookups: &Lookups) -> Vec<FormField>;

    fn is_create(&self) -> bool {
        self.id().is_none_or(|id| id.trim().is_empty())
    }
}
