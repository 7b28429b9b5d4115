use std::time::Duration;

use mockito::{Matcher, Server};
use serde_json::json;

use tshop_admin::api::client::CatalogClient;
use tshop_admin::api::errors::ApiError;
use tshop_admin::api::{ApiConnector, AuthApi, CatalogReader, CatalogWriter};
use tshop_admin::domain::category::{Categories, NewCategory};
use tshop_admin::domain::session::{LoginRequest, UserSession};
use tshop_admin::domain::types::{CategoryId, Status};
use tshop_admin::pagination::PaginationFilter;
use tshop_admin::session::MemorySessionStore;

fn connector(server: &Server) -> ApiConnector {
    ApiConnector::new(&format!("{}/api/v1", server.url()), Duration::from_secs(5)).unwrap()
}

fn signed_in(token: &str) -> MemorySessionStore {
    MemorySessionStore::with_user(UserSession {
        access_token: token.to_string(),
        name: "admin".to_string(),
        is_authenticated: true,
        ..UserSession::default()
    })
}

fn category_json(id: i32, name: &str) -> serde_json::Value {
    json!({ "id": id, "name": name, "description": null, "status": "ACTIVE" })
}

#[actix_web::test]
async fn fetch_page_sends_filter_and_bearer() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/categories/pagination")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pageIndex".into(), "2".into()),
            Matcher::UrlEncoded("pageSize".into(), "10".into()),
            Matcher::UrlEncoded("search".into(), "red".into()),
        ]))
        .match_header("authorization", "Bearer abc")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": [category_json(21, "Red lamps")],
                "pageIndex": 2,
                "pageSize": 10,
                "totalRows": 21,
                "totalPages": 3,
                "hasNext": false,
                "hasPrevious": true
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = CatalogClient::new(connector(&server), &signed_in("abc"));
    let filter = PaginationFilter {
        page_index: 2,
        page_size: 10,
        search: "red".to_string(),
    };

    let page = CatalogReader::<Categories>::fetch_page(&client, &filter)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.total_rows, 21);
    assert!(page.has_previous);
    assert_eq!(page.data[0].name, "Red lamps");
}

#[actix_web::test]
async fn search_with_reserved_characters_is_encoded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/categories/pagination")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pageIndex".into(), "0".into()),
            Matcher::UrlEncoded("pageSize".into(), "10".into()),
            Matcher::UrlEncoded("search".into(), "R&D #1 + more".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": [],
                "pageIndex": 0,
                "pageSize": 10,
                "totalRows": 0,
                "totalPages": 0,
                "hasNext": false,
                "hasPrevious": false
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = CatalogClient::new(connector(&server), &signed_in("abc"));
    let filter = PaginationFilter {
        search: "R&D #1 + more".to_string(),
        ..PaginationFilter::default()
    };

    let page = CatalogReader::<Categories>::fetch_page(&client, &filter)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(page.data.is_empty());
}

#[actix_web::test]
async fn anonymous_requests_carry_no_credentials() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/categories/available")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = CatalogClient::new(connector(&server), &MemorySessionStore::default());
    assert!(!client.has_credentials());

    let categories = CatalogReader::<Categories>::fetch_available(&client)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(categories.is_empty());
}

#[actix_web::test]
async fn expired_token_maps_to_unauthorized() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/categories/7")
        .with_status(401)
        .create_async()
        .await;

    let client = CatalogClient::new(connector(&server), &signed_in("stale"));

    let result =
        CatalogReader::<Categories>::fetch_by_id(&client, &CategoryId::new(7).unwrap()).await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
}

#[actix_web::test]
async fn create_posts_camel_case_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/categories")
        .match_body(Matcher::PartialJson(json!({
            "name": "Lamps",
            "status": "ACTIVE"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(category_json(5, "Lamps").to_string())
        .create_async()
        .await;

    let client = CatalogClient::new(connector(&server), &signed_in("abc"));
    let payload = NewCategory::new(" Lamps ".to_string(), None, Status::Active);

    let created = CatalogWriter::<Categories>::create(&client, &payload)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(created.id, CategoryId::new(5).unwrap());
}

#[actix_web::test]
async fn rejected_delete_keeps_status_and_body() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/api/v1/categories/3")
        .with_status(409)
        .with_body("category has products")
        .create_async()
        .await;

    let client = CatalogClient::new(connector(&server), &signed_in("abc"));

    let result = CatalogWriter::<Categories>::delete(&client, &CategoryId::new(3).unwrap()).await;

    match result {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 409);
            assert_eq!(message, "category has products");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[actix_web::test]
async fn login_returns_tokens() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/accounts/login")
        .match_body(Matcher::PartialJson(json!({
            "userName": "admin",
            "rememberMe": true
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "accessToken": "abc",
                "refreshToken": "def",
                "name": "admin",
                "issuer": "tshop",
                "audience": "tshop"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = CatalogClient::new(connector(&server), &MemorySessionStore::default());
    let request = LoginRequest {
        user_name: "admin".to_string(),
        password: "secret".to_string(),
        remember_me: true,
    };

    let response = client.login(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.access_token, "abc");
    assert_eq!(response.refresh_token, "def");
}
