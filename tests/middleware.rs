use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{
    App, HttpResponse,
    cookie::Key,
    http::{StatusCode, header},
    test, web,
};

use tshop_admin::middleware::RedirectUnauthorized;
use tshop_admin::session::AuthenticatedUser;

#[actix_web::test]
async fn redirects_unauthorized_to_login() {
    let app = test::init_service(
        App::new()
            .wrap(RedirectUnauthorized)
            .default_service(web::to(|| async { HttpResponse::Unauthorized().finish() })),
    )
    .await;

    let req = test::TestRequest::default().to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
}

#[actix_web::test]
async fn success_response_passes_through() {
    let app = test::init_service(
        App::new()
            .wrap(RedirectUnauthorized)
            .default_service(web::to(|| async { HttpResponse::Ok().finish() })),
    )
    .await;

    let req = test::TestRequest::default().to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn anonymous_visitor_is_sent_to_login() {
    let app = test::init_service(
        App::new()
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                Key::generate(),
            ))
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .route(
                        "/categories",
                        web::get().to(|_user: AuthenticatedUser| async {
                            HttpResponse::Ok().finish()
                        }),
                    ),
            ),
    )
    .await;

    let req = test::TestRequest::get().uri("/categories").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
}
