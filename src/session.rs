//! Persistence of the signed-in user and of each list screen's filter.
//!
//! State lives in the signed cookie session in production and in memory in
//! tests. Everything that needs the access token receives a [`SessionStore`]
//! explicitly.

use std::collections::HashMap;
use std::future::{Ready, ready};
use std::sync::Mutex;

use actix_session::{Session, SessionExt};
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{FromRequest, HttpRequest};
use thiserror::Error;

use crate::domain::session::UserSession;
use crate::pagination::PaginationFilter;

const USER_KEY: &str = "user";
const FILTER_KEY_PREFIX: &str = "filter:";

#[derive(Debug, Error)]
#[error("Failed to persist session state: {0}")]
pub struct SessionError(String);

pub trait SessionStore {
    fn load(&self) -> Option<UserSession>;
    fn save(&self, session: &UserSession) -> Result<(), SessionError>;
    /// Drops the user and every held filter.
    fn clear(&self);

    fn load_filter(&self, resource: &str) -> Option<PaginationFilter>;
    fn save_filter(&self, resource: &str, filter: &PaginationFilter) -> Result<(), SessionError>;

    /// Access token of an authenticated session.
    fn access_token(&self) -> Option<String> {
        self.load()
            .filter(|session| session.is_authenticated && !session.access_token.is_empty())
            .map(|session| session.access_token)
    }
}

fn filter_key(resource: &str) -> String {
    format!("{FILTER_KEY_PREFIX}{resource}")
}

/// [`SessionStore`] backed by the actix cookie session.
pub struct WebSessionStore {
    session: Session,
}

impl WebSessionStore {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl SessionStore for WebSessionStore {
    fn load(&self) -> Option<UserSession> {
        self.session
            .get::<UserSession>(USER_KEY)
            .map_err(|err| log::warn!("Discarding unreadable user session: {err}"))
            .ok()
            .flatten()
    }

    fn save(&self, session: &UserSession) -> Result<(), SessionError> {
        self.session
            .insert(USER_KEY, session)
            .map_err(|err| SessionError(err.to_string()))
    }

    fn clear(&self) {
        self.session.purge();
    }

    fn load_filter(&self, resource: &str) -> Option<PaginationFilter> {
        self.session
            .get::<PaginationFilter>(&filter_key(resource))
            .ok()
            .flatten()
    }

    fn save_filter(&self, resource: &str, filter: &PaginationFilter) -> Result<(), SessionError> {
        self.session
            .insert(filter_key(resource), filter)
            .map_err(|err| SessionError(err.to_string()))
    }
}

/// Signed-in operator, extracted from the cookie session.
///
/// Extraction fails with `401 Unauthorized` when nobody is signed in; the
/// [`crate::middleware::RedirectUnauthorized`] middleware turns that into a
/// redirect to the sign-in page.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser(pub UserSession);

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let store = WebSessionStore::new(req.get_session());
        let user = store
            .load()
            .filter(|user| user.is_authenticated)
            .map(AuthenticatedUser)
            .ok_or_else(|| ErrorUnauthorized("sign in required"));
        ready(user)
    }
}

/// In-process [`SessionStore`], used by tests and tooling.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    user: Mutex<Option<UserSession>>,
    filters: Mutex<HashMap<String, PaginationFilter>>,
}

impl MemorySessionStore {
    pub fn with_user(session: UserSession) -> Self {
        Self {
            user: Mutex::new(Some(session)),
            filters: Mutex::default(),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<UserSession> {
        self.user.lock().ok().and_then(|user| user.clone())
    }

    fn save(&self, session: &UserSession) -> Result<(), SessionError> {
        let mut user = self
            .user
            .lock()
            .map_err(|err| SessionError(err.to_string()))?;
        *user = Some(session.clone());
        Ok(())
    }

    fn clear(&self) {
        if let Ok(mut user) = self.user.lock() {
            *user = None;
        }
        if let Ok(mut filters) = self.filters.lock() {
            filters.clear();
        }
    }

    fn load_filter(&self, resource: &str) -> Option<PaginationFilter> {
        self.filters
            .lock()
            .ok()
            .and_then(|filters| filters.get(resource).cloned())
    }

    fn save_filter(&self, resource: &str, filter: &PaginationFilter) -> Result<(), SessionError> {
        let mut filters = self
            .filters
            .lock()
            .map_err(|err| SessionError(err.to_string()))?;
        filters.insert(resource.to_string(), filter.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in(token: &str) -> UserSession {
        UserSession {
            access_token: token.to_string(),
            refresh_token: "refresh".to_string(),
            name: "admin".to_string(),
            issuer: "tshop".to_string(),
            audience: "tshop".to_string(),
            is_authenticated: !token.is_empty(),
        }
    }

    #[test]
    fn access_token_requires_authenticated_session() {
        assert_eq!(MemorySessionStore::default().access_token(), None);
        assert_eq!(
            MemorySessionStore::with_user(signed_in("abc")).access_token(),
            Some("abc".to_string())
        );
        assert_eq!(MemorySessionStore::with_user(signed_in("")).access_token(), None);
    }

    #[test]
    fn clear_drops_user_and_filters() {
        let store = MemorySessionStore::with_user(signed_in("abc"));
        store
            .save_filter("tags", &PaginationFilter::default())
            .unwrap();

        store.clear();

        assert_eq!(store.load(), None);
        assert_eq!(store.load_filter("tags"), None);
    }

    #[test]
    fn filters_are_kept_per_resource() {
        let store = MemorySessionStore::default();
        let filter = PaginationFilter {
            page_index: 1,
            page_size: 20,
            search: "red".to_string(),
        };
        store.save_filter("brands", &filter).unwrap();

        assert_eq!(store.load_filter("brands"), Some(filter));
        assert_eq!(store.load_filter("categories"), None);
    }
}
