use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::api::ApiConnector;
use crate::api::client::CatalogClient;
use crate::forms::auth::LoginForm;
use crate::middleware::LOGIN_PATH;
use crate::routes::{HOME_PATH, base_context, redirect, render_template};
use crate::services::{ServiceError, auth};
use crate::session::{SessionStore, WebSessionStore};

#[get("/login")]
pub async fn show_login(
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let store = WebSessionStore::new(session);
    if store.access_token().is_some() {
        return redirect(HOME_PATH);
    }

    let context = base_context(&flash_messages, None, "login");
    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn login(
    session: Session,
    form: web::Form<LoginForm>,
    connector: web::Data<ApiConnector>,
) -> impl Responder {
    let store = WebSessionStore::new(session);
    let client = CatalogClient::new(connector.get_ref().clone(), &store);

    match auth::login(&client, &store, form.into_inner()).await {
        Ok(user) => {
            FlashMessage::success(format!("Welcome, {}.", user.name)).send();
            redirect(HOME_PATH)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Invalid user name or password.").send();
            redirect(LOGIN_PATH)
        }
        Err(ServiceError::Form(err)) => {
            FlashMessage::error(err.messages().join(" ")).send();
            redirect(LOGIN_PATH)
        }
        Err(err) => {
            log::error!("Sign in failed: {err}");
            FlashMessage::error("Sign in is unavailable, try again later.").send();
            redirect(LOGIN_PATH)
        }
    }
}

#[post("/logout")]
pub async fn logout(session: Session, connector: web::Data<ApiConnector>) -> HttpResponse {
    let store = WebSessionStore::new(session);
    let client = CatalogClient::new(connector.get_ref().clone(), &store);

    auth::logout(&client, &store).await;
    redirect(LOGIN_PATH)
}
