use actix_session::Session;
use actix_web::{HttpResponse, Scope, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::api::ApiConnector;
use crate::api::client::CatalogClient;
use crate::dto::products::ImagesView;
use crate::forms::product::ProductForm;
use crate::forms::product_images::ProductImagesForm;
use crate::middleware::LOGIN_PATH;
use crate::routes::catalog::catalog_scope;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::products::{load_gallery, save_gallery};
use crate::session::{AuthenticatedUser, WebSessionStore};

const PRODUCTS_PATH: &str = "/products";

/// Product screens: the generic catalog routes plus the gallery editor at
/// `/products/{id}/images`.
pub fn products_scope() -> Scope {
    catalog_scope::<ProductForm>().service(
        web::resource("/{id}/images")
            .route(web::get().to(show_images))
            .route(web::post().to(save_images)),
    )
}

pub async fn show_images(
    user: AuthenticatedUser,
    session: Session,
    id: web::Path<String>,
    connector: web::Data<ApiConnector>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> HttpResponse {
    let store = WebSessionStore::new(session);
    let client = CatalogClient::new(connector.get_ref().clone(), &store);

    match load_gallery(&client, &store, &id).await {
        Ok(product) => {
            let mut context = base_context(&flash_messages, Some(&user.0), "products");
            context.insert("view", &ImagesView::new(&product, None, Vec::new()));
            render_template(&tera, "products/images.html", &context)
        }
        Err(err) => gallery_failure(err),
    }
}

pub async fn save_images(
    user: AuthenticatedUser,
    session: Session,
    id: web::Path<String>,
    form: web::Form<ProductImagesForm>,
    connector: web::Data<ApiConnector>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> HttpResponse {
    let store = WebSessionStore::new(session);
    let client = CatalogClient::new(connector.get_ref().clone(), &store);
    let form = form.into_inner();
    let submitted = form.images.clone();

    match save_gallery(&client, &client, &store, &id, form).await {
        Ok(kind) => {
            FlashMessage::success(kind.success_message()).send();
            redirect(PRODUCTS_PATH)
        }
        Err(ServiceError::Form(err)) => {
            // Keep the operator's input so the offending line can be fixed.
            let product = match load_gallery(&client, &store, &id).await {
                Ok(product) => product,
                Err(err) => return gallery_failure(err),
            };
            let view = ImagesView::new(&product, Some(submitted), err.messages());
            let mut context = base_context(&flash_messages, Some(&user.0), "products");
            context.insert("view", &view);
            render_template(&tera, "products/images.html", &context)
        }
        Err(err) => gallery_failure(err),
    }
}

fn gallery_failure(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => redirect(LOGIN_PATH),
        ServiceError::NotFound => {
            FlashMessage::error("The product was not found.").send();
            redirect(PRODUCTS_PATH)
        }
        ServiceError::Mutation { kind, .. } => {
            FlashMessage::error(kind.failure_message()).send();
            redirect(PRODUCTS_PATH)
        }
        err => {
            log::error!("Gallery request failed: {err}");
            FlashMessage::error("Failed to load product images.").send();
            redirect(PRODUCTS_PATH)
        }
    }
}
