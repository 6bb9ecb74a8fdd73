use std::time::Duration;

use cloner_engine::{CloneProvider, FailureKind, HttpCloneProvider, HttpSettings};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> HttpCloneProvider {
    HttpCloneProvider::new(HttpSettings::new(format!("{}/clone", server.uri())))
        .expect("valid endpoint")
}

#[tokio::test]
async fn posts_url_and_decodes_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .and(body_json(serde_json::json!({ "url": "https://example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"tsxCode":"X","previewHtml":"<p>Y</p>"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let response = provider_for(&server)
        .clone_site(1, "https://example.com")
        .await
        .expect("clone ok");
    assert_eq!(response.tsx_code, "X");
    assert_eq!(response.preview_html, "<p>Y</p>");
}

#[tokio::test]
async fn missing_field_decodes_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"tsxCode":"X"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let response = provider_for(&server)
        .clone_site(1, "https://example.com")
        .await
        .expect("clone ok");
    assert_eq!(response.preview_html, "");
}

#[tokio::test]
async fn fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .clone_site(2, "https://example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
    assert!(err.description().is_some());
}

#[tokio::test]
async fn fails_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .clone_site(3, "https://example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("{}"),
        )
        .mount(&server)
        .await;

    let settings = HttpSettings {
        request_timeout: Duration::from_millis(50),
        ..HttpSettings::new(format!("{}/clone", server.uri()))
    };
    let err = HttpCloneProvider::new(settings)
        .expect("valid endpoint")
        .clone_site(4, "https://example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string("01234567890"),
        )
        .mount(&server)
        .await;

    let settings = HttpSettings {
        max_bytes: 10,
        ..HttpSettings::new(format!("{}/clone", server.uri()))
    };
    let err = HttpCloneProvider::new(settings)
        .expect("valid endpoint")
        .clone_site(5, "https://example.com")
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[test]
fn invalid_endpoint_is_rejected() {
    let err = HttpCloneProvider::new(HttpSettings::new("not a url")).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidEndpoint);
}
