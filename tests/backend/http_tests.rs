//! HttpChatBackend against a mock server

use lifeline_chat::backend::{BackendError, ChatBackend, ChatRequest, HttpChatBackend};
use lifeline_chat::constants::FAILURE_MESSAGE;
use lifeline_chat::controller::ChatController;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

async fn server_replying(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn backend_for(server: &MockServer) -> HttpChatBackend {
    HttpChatBackend::new(&server.uri(), "/api/chat", None).unwrap()
}

// ============================================================================
// Request shape
// ============================================================================

#[tokio::test]
async fn posts_json_message_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "message": "hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "hi",
            "message_type": "Non Suicide Post",
            "original_message": "hello"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = backend_for(&server)
        .send(ChatRequest::new("hello"))
        .await
        .unwrap();

    assert_eq!(reply.response, "hi");
    assert!(!reply.is_urgent());
}

#[tokio::test]
async fn endpoint_with_trailing_slash_hits_same_route() {
    let server = server_replying(
        ResponseTemplate::new(200).set_body_json(json!({ "response": "ok" })),
    )
    .await;
    let backend = HttpChatBackend::new(&format!("{}/", server.uri()), "api/chat", None).unwrap();

    assert_eq!(backend.url(), format!("{}/api/chat", server.uri()));
    assert!(backend.send(ChatRequest::new("x")).await.is_ok());
}

// ============================================================================
// Replies
// ============================================================================

#[tokio::test]
async fn crisis_reply_is_urgent() {
    let server = server_replying(ResponseTemplate::new(200).set_body_json(json!({
        "response": "You are not alone.",
        "message_type": "Potential Suicide Post"
    })))
    .await;

    let reply = backend_for(&server)
        .send(ChatRequest::new("..."))
        .await
        .unwrap();

    assert!(reply.is_urgent());
}

#[tokio::test]
async fn server_error_is_reported_as_status() {
    let server = server_replying(ResponseTemplate::new(500)).await;

    let err = backend_for(&server)
        .send(ChatRequest::new("hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Status { status, .. } if status.as_u16() == 500));
    assert_eq!(err.kind(), "status");
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server =
        server_replying(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let err = backend_for(&server)
        .send(ChatRequest::new("hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Decode { .. }));
}

#[tokio::test]
async fn missing_response_field_is_a_decode_error() {
    let server = server_replying(
        ResponseTemplate::new(200).set_body_json(json!({ "message_type": "Non Suicide Post" })),
    )
    .await;

    let err = backend_for(&server)
        .send(ChatRequest::new("hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let backend = HttpChatBackend::new(&uri, "/api/chat", None).unwrap();

    let err = backend.send(ChatRequest::new("hello")).await.unwrap_err();

    assert!(matches!(err, BackendError::Network { .. }));
}

#[tokio::test]
async fn configured_timeout_bounds_the_call() {
    let server = server_replying(
        ResponseTemplate::new(200)
            .set_body_json(json!({ "response": "late" }))
            .set_delay(Duration::from_secs(2)),
    )
    .await;
    let backend =
        HttpChatBackend::new(&server.uri(), "/api/chat", Some(Duration::from_millis(100)))
            .unwrap();

    let err = backend.send(ChatRequest::new("hello")).await.unwrap_err();

    assert_eq!(err.kind(), "timeout");
}

// ============================================================================
// End to end through the controller
// ============================================================================

#[tokio::test]
async fn controller_renders_failure_for_http_error() {
    let server = server_replying(ResponseTemplate::new(502)).await;
    let mut chat = ChatController::new(Arc::new(backend_for(&server)));

    chat.submit("hello").await;

    let texts: Vec<_> = chat.log().messages().map(|m| m.text.clone()).collect();
    assert_eq!(texts, vec!["hello".to_string(), FAILURE_MESSAGE.to_string()]);
    assert_eq!(chat.log().typing_count(), 0);
}

#[tokio::test]
async fn controller_renders_backend_reply() {
    let server = server_replying(ResponseTemplate::new(200).set_body_json(json!({
        "response": "Line one\nSee [AASRA](http://www.aasra.info/)",
        "message_type": "Potential Suicide Post"
    })))
    .await;
    let mut chat = ChatController::new(Arc::new(backend_for(&server)));

    chat.submit("help").await;

    let reply = chat.log().messages().last().unwrap();
    assert!(reply.urgent);
    assert_eq!(reply.text, "Line one\nSee [AASRA](http://www.aasra.info/)");
}
