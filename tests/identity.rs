use repo_dashboard_server::error::DashboardError;
use repo_dashboard_server::identity::IdentityClient;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_body(user_id: &str, email: &str) -> serde_json::Value {
    json!({
        "localId": user_id,
        "email": email,
        "idToken": "token-abc",
        "expiresIn": "3600",
    })
}

#[tokio::test]
async fn sign_up_returns_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .and(query_param("key", "test-key"))
        .and(body_json(json!({
            "email": "new@example.com",
            "password": "secret1",
            "returnSecureToken": true,
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(session_body("uid-1", "new@example.com")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = IdentityClient::new(server.uri(), "test-key".to_string()).expect("client");
    let session = client
        .sign_up("new@example.com", "secret1")
        .await
        .expect("sign up");

    assert_eq!(session.user_id, "uid-1");
    assert_eq!(session.email, "new@example.com");
    assert_eq!(session.id_token, "token-abc");
    server.verify().await;
}

#[tokio::test]
async fn sign_in_returns_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(session_body("uid-2", "user@example.com")),
        )
        .mount(&server)
        .await;

    let client = IdentityClient::new(server.uri(), "test-key".to_string()).expect("client");
    let session = client
        .sign_in("user@example.com", "secret1")
        .await
        .expect("sign in");

    assert_eq!(session.user_id, "uid-2");
}

#[tokio::test]
async fn provider_error_message_is_surfaced_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "INVALID_LOGIN_CREDENTIALS" }
        })))
        .mount(&server)
        .await;

    let client = IdentityClient::new(server.uri(), "test-key".to_string()).expect("client");
    let result = client.sign_in("user@example.com", "wrongpw").await;

    match result.unwrap_err() {
        DashboardError::AuthError(msg) => assert_eq!(msg, "INVALID_LOGIN_CREDENTIALS"),
        other => panic!("Expected AuthError, got: {:?}", other),
    }
}

#[tokio::test]
async fn non_json_provider_failure_still_yields_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:sendOobCode"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = IdentityClient::new(server.uri(), "test-key".to_string()).expect("client");
    let result = client.send_password_reset("user@example.com").await;

    match result.unwrap_err() {
        DashboardError::AuthError(msg) => assert!(msg.contains("503")),
        other => panic!("Expected AuthError, got: {:?}", other),
    }
}

#[tokio::test]
async fn password_reset_sends_oob_code_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:sendOobCode"))
        .and(body_json(json!({
            "requestType": "PASSWORD_RESET",
            "email": "user@example.com",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "user@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = IdentityClient::new(server.uri(), "test-key".to_string()).expect("client");
    client
        .send_password_reset("user@example.com")
        .await
        .expect("reset");

    server.verify().await;
}
