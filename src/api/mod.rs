//! Collaborator traits for the remote catalog REST API and their reqwest
//! implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::api::errors::{ApiError, ApiResult};
use crate::domain::CatalogEntity;
use crate::domain::product::{Product, UpdateProductImages};
use crate::domain::session::{LoginRequest, LoginResponse};
use crate::pagination::{Page, PaginationFilter};

pub mod client;
pub mod endpoints;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

const USER_AGENT: &str = concat!("tshop-admin/", env!("CARGO_PKG_VERSION"));

#[async_trait]
pub trait CatalogReader<E: CatalogEntity>: Send + Sync {
    async fn fetch_page(&self, filter: &PaginationFilter) -> ApiResult<Page<E::Record>>;
    /// Every active record, used to feed select widgets.
    async fn fetch_available(&self) -> ApiResult<Vec<E::Record>>;
    async fn fetch_by_id(&self, id: &E::Id) -> ApiResult<E::Record>;
}

#[async_trait]
pub trait CatalogWriter<E: CatalogEntity>: Send + Sync {
    async fn create(&self, payload: &E::New) -> ApiResult<E::Record>;
    async fn update(&self, payload: &E::Update) -> ApiResult<E::Record>;
    async fn delete(&self, id: &E::Id) -> ApiResult<E::Record>;
}

#[async_trait]
pub trait ProductImagesWriter: Send + Sync {
    async fn update_product_images(&self, request: &UpdateProductImages) -> ApiResult<Product>;
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse>;
    /// Revokes the refresh token issued to `name`.
    async fn revoke(&self, name: &str) -> ApiResult<()>;
}

/// Shared HTTP client and base URL of the catalog API.
///
/// Cheap to clone; one instance is registered as application data and every
/// request builds its [`client::CatalogClient`] from it.
#[derive(Clone, Debug)]
pub struct ApiConnector {
    http: Client,
    base_url: Url,
}

impl ApiConnector {
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let base_url = normalize_base_url(base_url)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Resolves an endpoint path against the base URL.
    pub fn url(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::InvalidUrl(format!("{path}: {err}")))
    }
}

/// Parses the base URL making sure it ends with a slash, so that joined
/// endpoint paths extend it instead of replacing its last segment.
fn normalize_base_url(raw: &str) -> ApiResult<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&with_slash).map_err(|err| ApiError::InvalidUrl(format!("{raw}: {err}")))
}
