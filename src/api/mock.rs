//! Mock collaborators for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::api::errors::ApiResult;
use crate::api::{AuthApi, ProductImagesWriter};
use crate::domain::product::{Product, UpdateProductImages};
use crate::domain::session::{LoginRequest, LoginResponse};

mock! {
    pub Auth {}

    #[async_trait]
    impl AuthApi for Auth {
        async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse>;
        async fn revoke(&self, name: &str) -> ApiResult<()>;
    }
}

mock! {
    pub ProductImages {}

    #[async_trait]
    impl ProductImagesWriter for ProductImages {
        async fn update_product_images(&self, request: &UpdateProductImages) -> ApiResult<Product>;
    }
}
