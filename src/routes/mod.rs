//! HTTP handlers of the admin console and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::CatalogEntity;
use crate::domain::app_config::AppConfigs;
use crate::domain::brand::Brands;
use crate::domain::category::Categories;
use crate::domain::contact::Contacts;
use crate::domain::product::Products;
use crate::domain::session::UserSession;
use crate::domain::tag::Tags;

pub mod auth;
pub mod catalog;
pub mod main;
pub mod products;

/// Landing screen after sign in.
pub const HOME_PATH: &str = "/categories";

/// Sidebar entry linking a list screen.
#[derive(Debug, Serialize)]
pub struct NavItem {
    pub resource: &'static str,
    pub title: &'static str,
}

const fn nav<E: CatalogEntity>() -> NavItem {
    NavItem {
        resource: E::RESOURCE,
        title: E::TITLE,
    }
}

pub const NAVIGATION: [NavItem; 6] = [
    nav::<Categories>(),
    nav::<Brands>(),
    nav::<Tags>(),
    nav::<Products>(),
    nav::<Contacts>(),
    nav::<AppConfigs>(),
];

/// Maps a flash message level to the Bootstrap alert class.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Context shared by every page: alerts, the signed-in user and navigation.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: Option<&UserSession>,
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &user.map(|user| user.name.as_str()));
    context.insert("current_page", current_page);
    context.insert("navigation", &NAVIGATION);
    context
}
