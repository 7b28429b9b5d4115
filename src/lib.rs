pub mod domain;
pub mod forms;
pub mod pagination;
pub mod select_option;
pub mod sorting;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod session;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_files::Files;
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::api::ApiConnector;
    use crate::forms::app_config::AppConfigForm;
    use crate::forms::brand::BrandForm;
    use crate::forms::category::CategoryForm;
    use crate::forms::contact::ContactForm;
    use crate::forms::tag::TagForm;
    use crate::middleware::RedirectUnauthorized;
    use crate::models::config::ServerConfig;
    use crate::routes::auth::{login, logout, show_login};
    use crate::routes::catalog::catalog_scope;
    use crate::routes::main::show_index;
    use crate::routes::products::products_scope;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Shared HTTP client for the catalog REST API.
        let connector =
            ApiConnector::new(&server_config.api_base_url, server_config.request_timeout())
                .map_err(|e| std::io::Error::other(format!("Invalid catalog API settings: {e}")))?;
        log::info!("Using catalog API at {}", connector.base_url());

        // Keys and stores for sessions and flash messages.
        let secret_key = Key::try_from(server_config.secret.as_bytes())
            .map_err(|e| std::io::Error::other(format!("Invalid session secret: {e}")))?;

        let message_store = CookieMessageStore::builder(secret_key.clone()).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(message_framework.clone())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                        .cookie_secure(false) // set to true in prod
                        .cookie_domain(Some(server_config.domain.clone()))
                        .build(),
                )
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", "./assets"))
                .service(show_login)
                .service(login)
                .service(
                    web::scope("")
                        .wrap(RedirectUnauthorized)
                        .service(show_index)
                        .service(logout)
                        .service(catalog_scope::<CategoryForm>())
                        .service(catalog_scope::<BrandForm>())
                        .service(catalog_scope::<TagForm>())
                        .service(products_scope())
                        .service(catalog_scope::<ContactForm>())
                        .service(catalog_scope::<AppConfigForm>()),
                )
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(connector.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
