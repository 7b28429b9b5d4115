use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Entity not found")]
    NotFound,

    #[error("Catalog API responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Invalid url: {0}")]
    InvalidUrl(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Maps a non-success HTTP status and its body to an error.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::NOT_FOUND => ApiError::NotFound,
            _ => ApiError::Status {
                status: status.as_u16(),
                message: body,
            },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::from_status(status, err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_distinguishes_auth_and_missing() {
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, String::new()),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, String::new()),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_REQUEST, "name taken".into()),
            ApiError::Status { status: 400, ref message } if message == "name taken"
        ));
    }
}
