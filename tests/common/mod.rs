use listmonk_client::ListmonkClient;
use wiremock::MockServer;

/// `Authorization` header value for `admin:password`.
#[allow(dead_code)]
pub const AUTH_HEADER: &str = "Basic YWRtaW46cGFzc3dvcmQ=";

/// Base URL of the API under the mock server, without a trailing slash.
#[allow(dead_code)]
pub fn api_base(mock_server: &MockServer) -> String {
    format!("{}/api", mock_server.uri())
}

/// Set up a test client with predefined credentials.
#[allow(dead_code)]
pub fn setup_test_client(mock_server: &MockServer) -> ListmonkClient {
    ListmonkClient::builder()
        .base_url(api_base(mock_server))
        .basic_auth("admin", "password")
        .build()
        .expect("Failed to build ListmonkClient")
}

/// A subscriber as the server renders it.
#[allow(dead_code)]
pub fn subscriber_json(id: i64, email: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "uuid": format!("uuid-{id}"),
        "email": email,
        "name": "Test User",
        "status": "enabled",
        "attribs": {},
        "lists": [],
        "created_at": "2024-03-01T10:00:00.000000Z",
        "updated_at": "2024-03-01T10:00:00.000000Z"
    })
}
