use crate::domain::Category;
use crate::errors::ServerError;
use crate::gateway::GatewayError;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::tests::utils::{app_with, body_string, get, post_form, Call, FakeGateway};

fn form_body(overrides: &[(&str, &str)]) -> String {
    let mut fields = vec![
        ("name", "Chinor"),
        ("type", "RESTORAN"),
        ("phone", "+998901234567"),
        ("openingHours", "09:00 - 23:00"),
        ("address", "Gulistan, Birlik 4"),
        ("imageUrl", "https://img.example/chinor.jpg"),
        ("latitude", "40.4897"),
        ("longitude", ""),
        ("password", "s3cret!"),
        ("description", "Milliy taomlar restorani"),
    ];
    for (key, value) in overrides {
        if let Some(slot) = fields.iter_mut().find(|(k, _)| k == key) {
            slot.1 = *value;
        }
    }

    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}

#[test]
fn blank_form_preselects_hotel() {
    let (app, _) = app_with(FakeGateway::new());

    let resp = handle(get("/create"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"<option value="MEHMONXONA" selected>Hotel</option>"#));
    for key in ["name", "phone", "openingHours", "address", "imageUrl", "password"] {
        assert!(body.contains(&format!(r#"name="{key}""#)), "missing input {key}");
    }
    assert!(body.contains(r#"<textarea id="description" name="description">"#));
}

#[test]
fn valid_submission_redirects_with_notice() {
    let (app, gateway) = app_with(FakeGateway::new());

    let resp = handle(post_form("/create", &form_body(&[])), &app).expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/?notice=created&name=Chinor"
    );

    let calls = gateway.calls();
    assert_eq!(calls.len(), 1);
    let Call::Create(listing) = &calls[0] else {
        panic!("expected a create call, got {calls:?}");
    };
    assert_eq!(listing.name, "Chinor");
    assert_eq!(listing.category, Category::Restoran);
    assert_eq!(listing.latitude, Some(40.4897));
    assert_eq!(listing.longitude, None);
    assert_eq!(listing.password, "s3cret!");
}

#[test]
fn nine_character_description_never_reaches_the_service() {
    let (app, gateway) = app_with(FakeGateway::new());

    let resp = handle(
        post_form("/create", &form_body(&[("description", "123456789")])),
        &app,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 422);
    assert!(gateway.calls().is_empty());

    let body = body_string(resp);
    assert!(body.contains("Description must be at least 10 characters"));
    assert!(body.contains(r#"value="Chinor""#), "input should be kept");
    assert!(!body.contains("s3cret!"), "password echoed back");
}

#[test]
fn ten_character_description_is_submitted() {
    let (app, gateway) = app_with(FakeGateway::new());

    let resp = handle(
        post_form("/create", &form_body(&[("description", "1234567890")])),
        &app,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(gateway.calls().len(), 1);
}

#[test]
fn every_invalid_field_gets_a_message() {
    let (app, gateway) = app_with(FakeGateway::new());

    let body = form_body(&[
        ("name", "C"),
        ("imageUrl", "chinor.jpg"),
        ("password", "123"),
    ]);
    let resp = handle(post_form("/create", &body), &app).expect("Handler failed");

    assert_eq!(resp.status(), 422);
    assert!(gateway.calls().is_empty());

    let body = body_string(resp);
    assert!(body.contains("Name must be at least 2 characters"));
    assert!(body.contains("Enter a valid image URL"));
    assert!(body.contains("Password must be at least 6 characters"));
    assert_eq!(body.matches(r#"class="field-error""#).count(), 3);
}

#[test]
fn service_rejection_is_shown_on_the_form() {
    let gateway = FakeGateway::new()
        .rejecting_create(GatewayError::Validation("Password too short".into()));
    let (app, gateway) = app_with(gateway);

    let resp = handle(post_form("/create", &form_body(&[])), &app).expect("Handler failed");

    assert_eq!(resp.status(), 422);
    assert_eq!(gateway.calls().len(), 1);

    let body = body_string(resp);
    assert!(body.contains("The listing was rejected: Password too short"));
    assert!(body.contains(r#"value="Chinor""#));
    assert!(!body.contains("s3cret!"));
}

#[test]
fn unreachable_service_on_submit_is_bad_gateway() {
    let gateway = FakeGateway::new().failing(GatewayError::Transport("timed out".into()));
    let (app, _) = app_with(gateway);

    let resp = handle(post_form("/create", &form_body(&[])), &app).expect("Handler failed");

    assert_eq!(resp.status(), 502);
    assert!(body_string(resp).contains("could not be reached"));
}

#[test]
fn oversized_form_is_refused_before_the_service() {
    let (app, gateway) = app_with(FakeGateway::new());
    let description = "a".repeat(70 * 1024);

    let result = handle(
        post_form("/create", &form_body(&[("description", description.as_str())])),
        &app,
    );

    assert!(gateway.calls().is_empty());
    let Err(err) = result else {
        panic!("oversized form was accepted");
    };
    assert!(matches!(err, ServerError::PayloadTooLarge));
    assert_eq!(html_error_response(err).status(), 413);
}
