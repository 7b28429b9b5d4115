use actix_web::http::{StatusCode, header};
use actix_web_flash_messages::Level;
use tshop_admin::routes::{NAVIGATION, alert_level_to_str, redirect};

#[test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[test]
fn navigation_lists_every_screen_once() {
    let resources: Vec<&str> = NAVIGATION.iter().map(|item| item.resource).collect();

    assert_eq!(
        resources,
        vec![
            "categories",
            "brands",
            "tags",
            "products",
            "contacts",
            "app-configs"
        ]
    );
    assert_eq!(NAVIGATION[5].title, "App Configs");
}

#[test]
fn redirect_uses_see_other() {
    let resp = redirect("/brands");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/brands");
}
