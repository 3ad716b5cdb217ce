//! Integration tests for the OAuth authorization code flow.
//!
//! The token endpoint is mocked; the tests cover the authorization URL, the
//! code exchange request, error classification of the token response, and
//! the hand-off of the token's side-channel values to the resource owner.

use serde_json::json;
use vkontakte_oauth::auth::oauth::{
    begin_auth, validate_callback, CallbackQuery, OAuthError, OAuthFlow, StateParam, VkOAuth,
};
use vkontakte_oauth::{BaseUrl, ClientId, ClientSecret, VkClient, VkConfig};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_config(server: &MockServer) -> VkConfig {
    VkConfig::builder()
        .client_id(ClientId::new("mock_client_id").unwrap())
        .client_secret(ClientSecret::new("mock_secret").unwrap())
        .redirect_uri(BaseUrl::new("https://example.com/callback").unwrap())
        .oauth_base_uri(BaseUrl::new(server.uri()).unwrap())
        .api_base_uri(BaseUrl::new(format!("{}/method", server.uri())).unwrap())
        .build()
        .unwrap()
}

fn token_body() -> serde_json::Value {
    json!({
        "access_token": "mock_access_token",
        "expires_in": 0,
        "user_id": 12345,
        "email": "a@b.com",
    })
}

#[tokio::test]
async fn test_begin_auth_points_at_configured_oauth_host() {
    let server = MockServer::start().await;
    let flow = VkOAuth::new(create_config(&server)).unwrap();

    let result = begin_auth(&flow, None).unwrap();

    assert!(result
        .auth_url
        .starts_with(&format!("{}/authorize?", server.uri())));
    assert!(result.auth_url.contains("client_id=mock_client_id"));
    assert!(result
        .auth_url
        .contains("redirect_uri=https%3A%2F%2Fexample.com%2Fcallback"));
    assert!(result.auth_url.contains("response_type=code"));
    assert!(result.auth_url.contains("approval_prompt=auto"));
    assert!(result.auth_url.contains(&format!("state={}", result.state)));
}

#[tokio::test]
async fn test_exchange_code_posts_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/access_token"))
        .and(body_string_contains("client_id=mock_client_id"))
        .and(body_string_contains("client_secret=mock_secret"))
        .and(body_string_contains("code=mock_authorization_code"))
        .and(body_string_contains("grant_type=authorization_code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .expect(1)
        .mount(&server)
        .await;

    let flow = VkOAuth::new(create_config(&server)).unwrap();
    let token = flow.exchange_code("mock_authorization_code").await.unwrap();

    assert_eq!(token.token(), "mock_access_token");
    assert_eq!(token.user_id(), Some(12345));
    assert_eq!(token.email(), Some("a@b.com".to_string()));
    assert!(token.expires().is_none());
}

#[tokio::test]
async fn test_token_endpoint_error_is_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/access_token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_client",
            "error_description": "client_secret is incorrect",
        })))
        .mount(&server)
        .await;

    let flow = VkOAuth::new(create_config(&server)).unwrap();
    let result = flow.exchange_code("mock_authorization_code").await;

    match result {
        Err(OAuthError::Provider(error)) => {
            assert_eq!(error.code, 401);
            assert_eq!(error.message, "client_secret is incorrect");
        }
        other => panic!("Expected Provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_token_response_without_token_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user_id": 1})))
        .mount(&server)
        .await;

    let flow = VkOAuth::new(create_config(&server)).unwrap();
    let result = flow.exchange_code("mock_authorization_code").await;

    assert!(matches!(
        result,
        Err(OAuthError::TokenExchangeFailed { .. })
    ));
}

#[tokio::test]
async fn test_out_of_range_token_lifetime_is_non_expiring() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "mock_access_token",
            "expires_in": "1e30",
            "user_id": 12345,
        })))
        .mount(&server)
        .await;

    let flow = VkOAuth::new(create_config(&server)).unwrap();
    let token = flow.exchange_code("mock_authorization_code").await.unwrap();

    assert_eq!(token.token(), "mock_access_token");
    assert!(token.expires().is_none());
    assert!(!token.has_expired());
}

#[tokio::test]
async fn test_state_mismatch_never_reaches_token_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .expect(0)
        .mount(&server)
        .await;

    let flow = VkOAuth::new(create_config(&server)).unwrap();
    let state = StateParam::new();
    let query = CallbackQuery::new("mock_authorization_code", "forged");

    let result = validate_callback(&flow, &query, state.as_ref()).await;
    assert!(matches!(result, Err(OAuthError::StateMismatch { .. })));
}

#[tokio::test]
async fn test_full_flow_resolves_owner_with_side_channel_values() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/method/users.get"))
        .and(query_param("access_token", "mock_access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{"id": 1, "first_name": "mock_first_name"}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_config(&server);
    let flow = VkOAuth::new(config.clone()).unwrap();
    let started = begin_auth(&flow, None).unwrap();

    let query = CallbackQuery::new("mock_authorization_code", started.state.as_ref());
    let token = validate_callback(&flow, &query, started.state.as_ref())
        .await
        .unwrap();

    let owner = VkClient::new(config)
        .unwrap()
        .resolve_owner(&token)
        .await
        .unwrap();

    assert_eq!(owner.id(), 12345);
    assert_eq!(owner.email(), "a@b.com");
    assert_eq!(owner.first_name(), "mock_first_name");
}
