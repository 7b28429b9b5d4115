//! List, editor and mutation handlers, instantiated once per catalog entity.

use actix_session::Session;
use actix_web::{HttpResponse, Scope, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;
use validator::Validate;

use crate::api::ApiConnector;
use crate::api::client::CatalogClient;
use crate::domain::CatalogEntity;
use crate::dto::catalog::{EditorView, ListView};
use crate::forms::list::ListQuery;
use crate::middleware::LOGIN_PATH;
use crate::forms::{EntityForm, FormError, Lookups};
use crate::pagination::Page;
use crate::routes::{base_context, redirect, render_template};
use crate::services::catalog::{self as catalog_service, ListPage};
use crate::services::{ServiceError, ServiceResult};
use crate::session::{AuthenticatedUser, SessionStore, WebSessionStore};

/// Routes of one entity screen:
///
/// * `GET /{resource}` list, `POST /{resource}` create or update
/// * `GET /{resource}/new` and `GET /{resource}/{id}/edit` editors
/// * `POST /{resource}/{id}/delete`
pub fn catalog_scope<F>() -> Scope
where
    F: EntityForm + 'static,
{
    let resource = <F::Entity as CatalogEntity>::RESOURCE;

    web::scope(&format!("/{resource}"))
        .service(
            web::resource("")
                .route(web::get().to(show_list::<F::Entity>))
                .route(web::post().to(save_entity::<F>)),
        )
        .service(web::resource("/new").route(web::get().to(new_entity::<F>)))
        .service(web::resource("/{id}/edit").route(web::get().to(edit_entity::<F>)))
        .service(web::resource("/{id}/delete").route(web::post().to(delete_entity::<F::Entity>)))
}

fn list_path<E: CatalogEntity>() -> String {
    format!("/{}", E::RESOURCE)
}

pub async fn show_list<E: CatalogEntity>(
    user: AuthenticatedUser,
    session: Session,
    query: web::Query<ListQuery>,
    connector: web::Data<ApiConnector>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> HttpResponse {
    let store = WebSessionStore::new(session);
    let client = CatalogClient::new(connector.get_ref().clone(), &store);

    let mut context = base_context(&flash_messages, Some(&user.0), E::RESOURCE);

    let list = match catalog_service::load_list_page::<E, _>(&client, &store, &query).await {
        Ok(list) => list,
        Err(ServiceError::Unauthorized) => return redirect(LOGIN_PATH),
        Err(ServiceError::Pagination(err)) => {
            FlashMessage::error(err.to_string()).send();
            return redirect(&list_path::<E>());
        }
        Err(err) => {
            log::error!("Failed to load {} list: {err}", E::RESOURCE);
            let message = format!("Failed to load {}.", E::TITLE.to_lowercase());
            context.insert("load_error", &message);
            let filter = store.load_filter(E::RESOURCE).unwrap_or_default();
            ListPage {
                page: Page::empty(&filter),
                filter,
                sort: None,
            }
        }
    };

    context.insert("view", &ListView::build::<E>(list));
    render_template(&tera, "crud/list.html", &context)
}

pub async fn new_entity<F: EntityForm>(
    user: AuthenticatedUser,
    session: Session,
    connector: web::Data<ApiConnector>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> HttpResponse {
    let store = WebSessionStore::new(session);
    let client = CatalogClient::new(connector.get_ref().clone(), &store);

    let form = F::default();
    render_editor(&client, &store, &user, &flash_messages, &tera, &form, Vec::new()).await
}

pub async fn edit_entity<F: EntityForm>(
    user: AuthenticatedUser,
    session: Session,
    id: web::Path<String>,
    connector: web::Data<ApiConnector>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> HttpResponse {
    let store = WebSessionStore::new(session);
    let client = CatalogClient::new(connector.get_ref().clone(), &store);

    match catalog_service::load_editor::<F, _>(&client, &store, Some(id.as_str())).await {
        Ok(form) => {
            render_editor(&client, &store, &user, &flash_messages, &tera, &form, Vec::new()).await
        }
        Err(err) => failure_redirect::<F::Entity>(err, "Failed to load record."),
    }
}

/// Creates or updates the record depending on the hidden `id` field.
///
/// The body is decoded with `serde_html_form` so that multi-selects arrive as
/// lists. Invalid input re-renders the editor with the submitted values.
pub async fn save_entity<F: EntityForm>(
    user: AuthenticatedUser,
    session: Session,
    body: web::Bytes,
    connector: web::Data<ApiConnector>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> HttpResponse {
    let store = WebSessionStore::new(session);
    let client = CatalogClient::new(connector.get_ref().clone(), &store);

    let form: F = match serde_html_form::from_bytes(&body) {
        Ok(form) => form,
        Err(err) => {
            log::warn!("Rejected {} form: {err}", <F::Entity as CatalogEntity>::RESOURCE);
            let err = FormError::Decode(err.to_string());
            FlashMessage::error(err.to_string()).send();
            return redirect(&list_path::<F::Entity>());
        }
    };

    if let Err(errors) = form.validate() {
        let messages = FormError::from(errors).messages();
        return render_editor(&client, &store, &user, &flash_messages, &tera, &form, messages)
            .await;
    }

    match catalog_service::save_entity(&client, &store, form).await {
        Ok(kind) => {
            FlashMessage::success(kind.success_message()).send();
            redirect(&list_path::<F::Entity>())
        }
        Err(ServiceError::Mutation { kind, .. }) => {
            FlashMessage::error(kind.failure_message()).send();
            redirect(&list_path::<F::Entity>())
        }
        Err(err) => failure_redirect::<F::Entity>(err, "Failed to save record."),
    }
}

pub async fn delete_entity<E: CatalogEntity>(
    _user: AuthenticatedUser,
    session: Session,
    id: web::Path<String>,
    connector: web::Data<ApiConnector>,
) -> HttpResponse {
    let store = WebSessionStore::new(session);
    let client = CatalogClient::new(connector.get_ref().clone(), &store);

    match catalog_service::delete_entity::<E, _>(&client, &store, &id).await {
        Ok(kind) => {
            FlashMessage::success(kind.success_message()).send();
            redirect(&list_path::<E>())
        }
        Err(ServiceError::Mutation { kind, .. }) => {
            FlashMessage::error(kind.failure_message()).send();
            redirect(&list_path::<E>())
        }
        Err(err) => failure_redirect::<E>(err, "Failed to delete record."),
    }
}

/// Maps errors other than mutation failures to a redirect with a toast.
fn failure_redirect<E: CatalogEntity>(err: ServiceError, fallback: &str) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => redirect(LOGIN_PATH),
        ServiceError::NotFound => {
            FlashMessage::error(format!("The {} was not found.", E::SINGULAR)).send();
            redirect(&list_path::<E>())
        }
        ServiceError::Form(err) => {
            FlashMessage::error(err.messages().join(" ")).send();
            redirect(&list_path::<E>())
        }
        err => {
            log::error!("{} request failed: {err}", E::RESOURCE);
            FlashMessage::error(fallback).send();
            redirect(&list_path::<E>())
        }
    }
}

async fn load_lookups_if_needed<F: EntityForm>(
    client: &CatalogClient,
    store: &dyn SessionStore,
) -> ServiceResult<Lookups> {
    if F::NEEDS_LOOKUPS {
        catalog_service::load_lookups(client, store).await
    } else {
        Ok(Lookups::default())
    }
}

async fn render_editor<F: EntityForm>(
    client: &CatalogClient,
    store: &WebSessionStore,
    user: &AuthenticatedUser,
    flash_messages: &IncomingFlashMessages,
    tera: &Tera,
    form: &F,
    errors: Vec<String>,
) -> HttpResponse {
    let lookups = match load_lookups_if_needed::<F>(client, store).await {
        Ok(lookups) => lookups,
        Err(err) => return failure_redirect::<F::Entity>(err, "Failed to load form options."),
    };

    let view = EditorView::new::<F::Entity>(
        form.id().map(str::to_string),
        form.fields(&lookups),
        errors,
    );

    let mut context = base_context(
        flash_messages,
        Some(&user.0),
        <F::Entity as CatalogEntity>::RESOURCE,
    );
    context.insert("view", &view);
    render_template(tera, "crud/form.html", &context)
}
