use validator::Validate;

use crate::api::AuthApi;
use crate::api::errors::ApiError;
use crate::domain::session::{LoginRequest, UserSession};
use crate::forms::FormError;
use crate::forms::auth::LoginForm;
use crate::services::{ServiceError, ServiceResult};
use crate::session::SessionStore;

/// Exchanges credentials for tokens and stores the resulting session.
///
/// Rejected credentials and responses without an access token both yield
/// [`ServiceError::Unauthorized`].
pub async fn login<A>(
    api: &A,
    session: &dyn SessionStore,
    form: LoginForm,
) -> ServiceResult<UserSession>
where
    A: AuthApi + ?Sized,
{
    form.validate().map_err(FormError::from)?;
    let request = LoginRequest::from(form);

    let response = api.login(&request).await.map_err(|err| {
        log::error!("Login failed for {}: {err}", request.user_name);
        match err {
            ApiError::Unauthorized | ApiError::NotFound => ServiceError::Unauthorized,
            ApiError::Status { status: 400, .. } => ServiceError::Unauthorized,
            other => ServiceError::Api(other),
        }
    })?;

    let user = UserSession::from(response);
    if !user.is_authenticated {
        log::warn!("Login for {} returned no access token", request.user_name);
        return Err(ServiceError::Unauthorized);
    }

    session.save(&user)?;
    log::info!("{} signed in", user.name);
    Ok(user)
}

/// Revokes the refresh token of the signed-in user and clears the session.
///
/// The session is cleared even when the revoke call fails.
pub async fn logout<A>(api: &A, session: &dyn SessionStore)
where
    A: AuthApi + ?Sized,
{
    if let Some(user) = session.load() {
        if let Err(err) = api.revoke(&user.name).await {
            log::error!("Failed to revoke token of {}: {err}", user.name);
        }
    }
    session.clear();
}
