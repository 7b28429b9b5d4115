//! Product image gallery.

use crate::api::{CatalogReader, ProductImagesWriter};
use crate::domain::product::{Product, Products, UpdateProductImages};
use crate::domain::types::ProductId;
use crate::forms::product_images::{ProductImagesForm, ProductImagesPayload};
use crate::services::{MutationKind, ServiceError, ServiceResult, mutation_failure, read_failure};
use crate::session::SessionStore;

pub async fn load_gallery<R>(
    repo: &R,
    session: &dyn SessionStore,
    id: &str,
) -> ServiceResult<Product>
where
    R: CatalogReader<Products> + ?Sized,
{
    let id = id.parse::<ProductId>().map_err(|_| ServiceError::NotFound)?;

    repo.fetch_by_id(&id).await.map_err(|err| {
        log::error!("Failed to fetch product {id}: {err}");
        read_failure(session, err)
    })
}

/// Replaces the gallery of a product with the submitted URLs.
///
/// Images whose URL is kept retain their id.
pub async fn save_gallery<R, W>(
    reader: &R,
    writer: &W,
    session: &dyn SessionStore,
    id: &str,
    form: ProductImagesForm,
) -> ServiceResult<MutationKind>
where
    R: CatalogReader<Products> + ?Sized,
    W: ProductImagesWriter + ?Sized,
{
    let payload = ProductImagesPayload::try_from(form)?;
    let product = load_gallery(reader, session, id).await?;

    let request = UpdateProductImages {
        images: payload.into_images(&product.images),
        id: product.id,
    };

    writer
        .update_product_images(&request)
        .await
        .map(|_| MutationKind::UpdateImages)
        .map_err(|err| {
            log::error!("Failed to update images of product {}: {err}", request.id);
            mutation_failure(session, MutationKind::UpdateImages, err)
        })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::errors::ApiError;
    use crate::api::mock::MockProductImages;
    use crate::api::test::InMemoryCatalog;
    use crate::domain::product::ProductImage;
    use crate::domain::session::UserSession;
    use crate::domain::types::{ProductImageId, Status};
    use crate::forms::FormError;
    use crate::session::MemorySessionStore;

    fn product() -> Product {
        Product {
            id: ProductId::new("p-1").unwrap(),
            name: "Lamp".to_string(),
            description: None,
            price: 10.0,
            sale_price: None,
            quantity: 1,
            warranty: 0,
            image_url: "https://cdn.example.com/lamp.png".to_string(),
            status: Status::Active,
            is_new_product: false,
            is_featured_product: false,
            is_favorite_product: false,
            category_id: 1,
            brand_id: 1,
            images: vec![ProductImage {
                id: ProductImageId::new("img-1").unwrap(),
                url: "https://cdn.example.com/a.png".to_string(),
            }],
            tags: Vec::new(),
        }
    }

    fn signed_in() -> MemorySessionStore {
        MemorySessionStore::with_user(UserSession {
            access_token: "token".to_string(),
            is_authenticated: true,
            ..UserSession::default()
        })
    }

    #[actix_web::test]
    async fn save_keeps_existing_ids_and_adds_new_ones() {
        let reader = InMemoryCatalog::<Products>::new(vec![product()]);
        let mut writer = MockProductImages::new();
        writer
            .expect_update_product_images()
            .withf(|request| {
                request.id.as_str() == "p-1"
                    && request.images.len() == 2
                    && request.images[0].id.as_str() == "img-1"
                    && request.images[1].id.as_str() != "img-1"
                    && request.images[1].url == "https://cdn.example.com/b.png"
            })
            .times(1)
            .returning(|_| Ok(product()));
        let form = ProductImagesForm {
            images: "https://cdn.example.com/a.png\nhttps://cdn.example.com/b.png".to_string(),
        };

        let kind = save_gallery(&reader, &writer, &signed_in(), "p-1", form)
            .await
            .expect("gallery saved");

        assert_eq!(kind, MutationKind::UpdateImages);
    }

    #[actix_web::test]
    async fn invalid_url_is_rejected_before_any_call() {
        let reader = InMemoryCatalog::<Products>::new(vec![product()]);
        let mut writer = MockProductImages::new();
        writer.expect_update_product_images().times(0);
        let form = ProductImagesForm {
            images: "not a url".to_string(),
        };

        let result = save_gallery(&reader, &writer, &signed_in(), "p-1", form).await;

        assert!(matches!(result, Err(ServiceError::Form(FormError::InvalidUrl(_)))));
    }

    #[actix_web::test]
    async fn writer_failure_is_an_update_failure() {
        let reader = InMemoryCatalog::<Products>::new(vec![product()]);
        let mut writer = MockProductImages::new();
        writer
            .expect_update_product_images()
            .returning(|_| Err(ApiError::Transport("timeout".to_string())));

        let result = save_gallery(
            &reader,
            &writer,
            &signed_in(),
            "p-1",
            ProductImagesForm::default(),
        )
        .await;

        assert!(matches!(
            result,
            Err(ServiceError::Mutation {
                kind: MutationKind::UpdateImages,
                ..
            })
        ));
    }
}
