//! Business logic between the routes and the catalog API.

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::api::errors::ApiError;
use crate::forms::FormError;
use crate::pagination::PaginationError;
use crate::session::{SessionError, SessionStore};

pub mod auth;
pub mod catalog;
pub mod products;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("{kind} failed: {source}")]
    Mutation {
        kind: MutationKind,
        #[source]
        source: ApiError,
    },

    #[error("catalog API error: {0}")]
    Api(ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<ApiError> for ServiceError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => ServiceError::Unauthorized,
            ApiError::NotFound => ServiceError::NotFound,
            other => ServiceError::Api(other),
        }
    }
}

/// Write operation attempted from an editor or list screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
    UpdateImages,
}

impl MutationKind {
    pub fn success_message(self) -> &'static str {
        match self {
            MutationKind::Create => "Create successfully!",
            MutationKind::Update | MutationKind::UpdateImages => "Update successfully!",
            MutationKind::Delete => "Delete successfully!",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            MutationKind::Create => "Create failure!",
            MutationKind::Update | MutationKind::UpdateImages => "Update failure!",
            MutationKind::Delete => "Delete failure!",
        }
    }
}

impl Display for MutationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MutationKind::Create => "create",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
            MutationKind::UpdateImages => "update images",
        };
        f.write_str(name)
    }
}

/// Maps a failed read, dropping the stored session when the API no longer
/// accepts its token.
fn read_failure(session: &dyn SessionStore, err: ApiError) -> ServiceError {
    if matches!(err, ApiError::Unauthorized) {
        session.clear();
    }
    ServiceError::from(err)
}

/// Maps a failed write to [`ServiceError::Mutation`] unless the session has
/// expired, which is reported as [`ServiceError::Unauthorized`].
fn mutation_failure(session: &dyn SessionStore, kind: MutationKind, err: ApiError) -> ServiceError {
    match err {
        ApiError::Unauthorized => {
            session.clear();
            ServiceError::Unauthorized
        }
        source => ServiceError::Mutation { kind, source },
    }
}
