use async_trait::async_trait;
use reqwest::header::{self, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{
    ApiConnector, AuthApi, CatalogReader, CatalogWriter, ProductImagesWriter, endpoints,
};
use crate::domain::CatalogEntity;
use crate::domain::product::{Product, UpdateProductImages};
use crate::domain::session::{LoginRequest, LoginResponse};
use crate::pagination::{Page, PaginationFilter, pagination_filter_pairs};
use crate::session::SessionStore;

/// reqwest implementation of the catalog collaborator traits.
///
/// The access token is read from the [`SessionStore`] once, at construction.
/// Without an authenticated session requests go out without credentials.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    connector: ApiConnector,
    bearer: Option<HeaderValue>,
}

impl CatalogClient {
    pub fn new(connector: ApiConnector, session: &dyn SessionStore) -> Self {
        let bearer = session
            .access_token()
            .and_then(|token| bearer_header(&token));
        Self { connector, bearer }
    }

    pub fn has_credentials(&self) -> bool {
        self.bearer.is_some()
    }

    fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let url = self.connector.url(path)?;
        Ok(self.request_url(method, url))
    }

    fn request_url(&self, method: Method, url: Url) -> RequestBuilder {
        log::debug!("Catalog API request: {method} {url}");

        let builder = self.connector.http().request(method, url);
        match &self.bearer {
            Some(value) => builder.header(header::AUTHORIZATION, value.clone()),
            None => builder,
        }
    }

    async fn checked(builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, body))
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> ApiResult<T> {
        let response = Self::checked(builder).await?;
        Ok(response.json::<T>().await?)
    }
}

fn bearer_header(token: &str) -> Option<HeaderValue> {
    match HeaderValue::from_str(&format!("Bearer {token}")) {
        Ok(mut value) => {
            value.set_sensitive(true);
            Some(value)
        }
        Err(err) => {
            log::warn!("Ignoring access token that is not a valid header value: {err}");
            None
        }
    }
}

#[async_trait]
impl<E: CatalogEntity> CatalogReader<E> for CatalogClient {
    async fn fetch_page(&self, filter: &PaginationFilter) -> ApiResult<Page<E::Record>> {
        let mut url = self.connector.url(&endpoints::pagination(E::RESOURCE))?;
        url.query_pairs_mut()
            .extend_pairs(pagination_filter_pairs(filter));
        Self::send(self.request_url(Method::GET, url)).await
    }

    async fn fetch_available(&self) -> ApiResult<Vec<E::Record>> {
        let builder = self.request(Method::GET, &endpoints::available(E::RESOURCE))?;
        Self::send(builder).await
    }

    async fn fetch_by_id(&self, id: &E::Id) -> ApiResult<E::Record> {
        let builder = self.request(Method::GET, &endpoints::by_id(E::RESOURCE, id))?;
        Self::send(builder).await
    }
}

#[async_trait]
impl<E: CatalogEntity> CatalogWriter<E> for CatalogClient {
    async fn create(&self, payload: &E::New) -> ApiResult<E::Record> {
        let builder = self
            .request(Method::POST, &endpoints::collection(E::RESOURCE))?
            .json(payload);
        Self::send(builder).await
    }

    async fn update(&self, payload: &E::Update) -> ApiResult<E::Record> {
        let builder = self
            .request(Method::PUT, &endpoints::collection(E::RESOURCE))?
            .json(payload);
        Self::send(builder).await
    }

    async fn delete(&self, id: &E::Id) -> ApiResult<E::Record> {
        let builder = self.request(Method::DELETE, &endpoints::by_id(E::RESOURCE, id))?;
        Self::send(builder).await
    }
}

#[async_trait]
impl ProductImagesWriter for CatalogClient {
    async fn update_product_images(&self, request: &UpdateProductImages) -> ApiResult<Product> {
        let builder = self
            .request(Method::PUT, endpoints::PRODUCT_IMAGES)?
            .json(request);
        Self::send(builder).await
    }
}

#[async_trait]
impl AuthApi for CatalogClient {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let builder = self.request(Method::POST, endpoints::LOGIN)?.json(request);
        Self::send(builder).await
    }

    async fn revoke(&self, name: &str) -> ApiResult<()> {
        let builder = self.request(Method::POST, &endpoints::revoke(name))?;
        Self::checked(builder).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::session::UserSession;
    use crate::session::MemorySessionStore;

    fn connector() -> ApiConnector {
        ApiConnector::new("http://localhost:5000/api", Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn client_without_session_has_no_credentials() {
        let client = CatalogClient::new(connector(), &MemorySessionStore::default());

        assert!(!client.has_credentials());
    }

    #[test]
    fn bearer_header_is_sensitive() {
        let store = MemorySessionStore::with_user(UserSession {
            access_token: "token".to_string(),
            is_authenticated: true,
            ..UserSession::default()
        });
        let client = CatalogClient::new(connector(), &store);

        let header = client.bearer.expect("bearer header");
        assert!(header.is_sensitive());
        assert_eq!(header.to_str().unwrap(), "Bearer token");
    }
}
