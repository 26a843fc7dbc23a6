use crate::domain::Category;
use crate::errors::ServerError;
use crate::gateway::GatewayError;
use crate::router::handle;
use crate::tests::utils::{app_with, body_string, detail, get, Call, FakeGateway};

#[test]
fn known_listing_renders_detail_page() {
    let gateway = FakeGateway::new().with_detail(detail("Registon", Category::Mehmonxona));
    let (app, _) = app_with(gateway);

    let resp = handle(get("/listing/Registon"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<h1>Registon</h1>"));
    assert!(body.contains("Hotel"));
    assert!(body.contains(r#"href="tel:+998 67 225 00 00""#));
    assert!(body.contains("Shahar markazidagi qulay joy."));
    assert!(body.contains(
        "https://www.openstreetmap.org/export/embed.html?bbox=68.7842,40.4897"
    ));
}

#[test]
fn listing_without_location_has_no_map() {
    let mut record = detail("Kafe Bahor", Category::Kafe);
    record.latitude = Some(0.0);
    record.longitude = Some(0.0);
    record.description = String::new();
    let (app, _) = app_with(FakeGateway::new().with_detail(record));

    let body = body_string(handle(get("/listing/Kafe%20Bahor"), &app).expect("Handler failed"));

    assert!(body.contains("Kafe Bahor"));
    assert!(!body.contains("openstreetmap"));
    assert!(!body.contains("Description"));
}

#[test]
fn encoded_identifier_is_decoded_before_lookup() {
    let (app, gateway) = app_with(FakeGateway::new());

    let _ = handle(get("/listing/Kafe%20Bahor%2F2"), &app).expect("Handler failed");

    assert_eq!(gateway.calls(), vec![Call::ById("Kafe Bahor/2".into())]);
}

#[test]
fn unknown_listing_shows_error_state_with_404() {
    let gateway = FakeGateway::new().with_detail(detail("Registon", Category::Mehmonxona));
    let (app, _) = app_with(gateway);

    let resp = handle(get("/listing/Nowhere"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 404);

    let body = body_string(resp);
    assert!(body.contains("This listing could not be found."));
    assert!(!body.contains("<article"), "no listing should be rendered");
    assert!(!body.contains("Registon"));
}

#[test]
fn unreachable_service_shows_error_state_with_502() {
    let failing = FakeGateway::new().failing(GatewayError::Server {
        status: 500,
        message: "NullPointerException".into(),
    });
    let (app, _) = app_with(failing);

    let resp = handle(get("/listing/Registon"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 502);

    let body = body_string(resp);
    assert!(body.contains("ran into a problem"));
    assert!(!body.contains("NullPointerException"));
    assert!(body.contains(r#"href="/listing/Registon">Try again"#));
}

#[test]
fn missing_or_nested_identifier_is_not_found() {
    let (app, gateway) = app_with(FakeGateway::new());

    assert!(matches!(handle(get("/listing/"), &app), Err(ServerError::NotFound)));
    assert!(matches!(handle(get("/listing/a/b"), &app), Err(ServerError::NotFound)));
    assert!(matches!(handle(get("/listing/%2E"), &app), Err(ServerError::NotFound)));
    assert!(matches!(handle(get("/listing/%2E%2E"), &app), Err(ServerError::NotFound)));
    assert!(gateway.calls().is_empty());
}
