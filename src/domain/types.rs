//! Strongly-typed value objects used by catalog entities.
//!
//! Identifiers coming from URLs and forms pass through these wrappers so that
//! once a value reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateUrl;

use crate::select_option::OptionSet;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
}

/// Macro to generate lightweight newtypes for positive numeric identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| TypeConstraintError::InvalidValue(s.to_string()))?;
                Self::new(value)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(CategoryId, "Unique identifier for a category.");
id_newtype!(BrandId, "Unique identifier for a brand.");
id_newtype!(TagId, "Unique identifier for a tag.");
id_newtype!(AppConfigId, "Unique identifier for an app configuration entry.");

/// Macro to generate newtypes for opaque string identifiers.
macro_rules! string_id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Trims whitespace and rejects empty inputs.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

string_id_newtype!(ContactId, "Unique identifier for a contact submission.");
string_id_newtype!(ProductId, "Unique identifier for a product.");
string_id_newtype!(ProductImageId, "Unique identifier for a product gallery image.");

impl ProductImageId {
    /// Fresh random identifier for an image added from the admin console.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// Non-empty, trimmed and syntactically valid image URL.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Ensures a trimmed URL is non-empty and well formed before wrapping.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let url = value.into().trim().to_string();
        if url.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }

        if !url.as_str().validate_url() {
            Err(TypeConstraintError::InvalidUrl)
        } else {
            Ok(Self(url))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ImageUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Publication status shared by categories, brands, tags, configs and products.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Active,
    Deactive,
    Unknown,
}

impl OptionSet for Status {
    const ALL: &'static [Self] = &[Status::Active, Status::Deactive, Status::Unknown];

    fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "ACTIVE",
            Status::Deactive => "DEACTIVE",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processing state of a customer contact submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactStatus {
    #[default]
    Pending,
    Processing,
    Resolved,
    Aborted,
    Unknown,
}

impl OptionSet for ContactStatus {
    const ALL: &'static [Self] = &[
        ContactStatus::Pending,
        ContactStatus::Processing,
        ContactStatus::Resolved,
        ContactStatus::Aborted,
        ContactStatus::Unknown,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Pending => "PENDING",
            ContactStatus::Processing => "PROCESSING",
            ContactStatus::Resolved => "RESOLVED",
            ContactStatus::Aborted => "ABORTED",
            ContactStatus::Unknown => "UNKNOWN",
        }
    }
}

impl Display for ContactStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trims an optional free-text field, dropping it when nothing is left.
///
/// The text is kept as typed; escaping happens when a page renders it.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
