use http::StatusCode;
use listmonk_client::{ListmonkError, SortOrder};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{setup_test_client, subscriber_json};

const LIST_FILTERS: [&str; 6] = ["page", "per_page", "order_by", "order", "query", "list_id"];

#[tokio::test]
async fn test_list_subscribers_without_filters_sends_no_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/subscribers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [subscriber_json(1, "test@example.com")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server);
    let reply = client.subscribers().list().send().await.unwrap();

    let subscribers = reply.data().unwrap();
    assert_eq!(subscribers.len(), 1);
    assert_eq!(subscribers[0].email, "test@example.com");

    let requests = mock_server.received_requests().await.unwrap();
    let url = &requests[0].url;
    assert_eq!(url.query(), None);
    for filter in LIST_FILTERS {
        assert!(url.query_pairs().all(|(name, _)| name != filter));
    }
}

#[tokio::test]
async fn test_list_subscribers_sends_only_set_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/subscribers"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server);
    let reply = client
        .subscribers()
        .list()
        .page(1)
        .per_page(10)
        .send()
        .await
        .unwrap();
    assert!(reply.is_success());

    let requests = mock_server.received_requests().await.unwrap();
    let mut names: Vec<String> = requests[0]
        .url
        .query_pairs()
        .map(|(name, _)| name.into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["page".to_string(), "per_page".to_string()]);
}

#[tokio::test]
async fn test_list_subscribers_with_all_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/subscribers"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "25"))
        .and(query_param("order_by", "created_at"))
        .and(query_param("order", "desc"))
        .and(query_param("query", "subscribers.name LIKE 'J%'"))
        .and(query_param("list_id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server);
    let reply = client
        .subscribers()
        .list()
        .page(2)
        .per_page(25)
        .order_by("created_at")
        .order(SortOrder::Desc)
        .query("subscribers.name LIKE 'J%'")
        .list_id(3)
        .send()
        .await
        .unwrap();

    assert_eq!(reply.data(), Some(&Vec::new()));
}

#[tokio::test]
async fn test_get_subscriber() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/subscribers/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 1,
                "uuid": "u1",
                "email": "a@b.com",
                "name": "A",
                "status": "enabled",
                "attribs": {},
                "lists": []
            }
        })))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server);
    let reply = client.subscribers().get(1).await.unwrap();

    assert_eq!(reply.status(), StatusCode::OK);
    let subscriber = reply.into_data().unwrap();
    assert_eq!(subscriber.id, 1);
    assert_eq!(subscriber.email, "a@b.com");
}

#[tokio::test]
async fn test_get_missing_subscriber_returns_not_found_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/subscribers/999"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Subscriber not found." })),
        )
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server);
    let reply = client.subscribers().get(999).await.unwrap();

    assert!(!reply.is_success());
    assert_eq!(reply.status(), StatusCode::NOT_FOUND);
    assert_eq!(reply.data(), None);

    let error = reply.error().unwrap();
    assert_eq!(error.message.as_deref(), Some("Subscriber not found."));
    assert!(error.raw.contains("Subscriber not found."));
}

#[tokio::test]
async fn test_create_subscriber_sends_field_map() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/subscribers"))
        .and(body_json(json!({
            "email": "newuser@example.com",
            "name": "New User",
            "status": "enabled",
            "lists": [1],
            "attribs": {"city": "Lisbon"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": subscriber_json(5, "newuser@example.com")
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server);
    let body = json!({
        "email": "newuser@example.com",
        "name": "New User",
        "status": "enabled",
        "lists": [1],
        "attribs": {"city": "Lisbon"}
    });

    let created = client
        .subscribers()
        .create(body.as_object().cloned().unwrap())
        .await
        .unwrap()
        .into_data()
        .unwrap();

    assert_eq!(created.id, 5);
    assert_eq!(created.uuid, "uuid-5");
}

#[tokio::test]
async fn test_update_subscriber_sends_only_changed_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/subscribers/5"))
        .and(body_json(json!({ "status": "blocklisted" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": subscriber_json(5, "newuser@example.com")
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server);
    let mut changes = listmonk_client::Payload::new();
    changes.insert("status".into(), json!("blocklisted"));

    let reply = client.subscribers().update(5, changes).await.unwrap();
    assert!(reply.is_success());
}

#[tokio::test]
async fn test_delete_subscriber() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/subscribers/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server);
    let reply = client.subscribers().delete(5).await.unwrap();
    assert_eq!(reply.data(), Some(&json!(true)));
}

#[tokio::test]
async fn test_unknown_fields_are_ignored() {
    let mock_server = MockServer::start().await;

    let mut subscriber = subscriber_json(8, "extra@example.com");
    subscriber["future_field"] = json!({"nested": [1, 2, 3]});

    Mock::given(method("GET"))
        .and(path("/api/subscribers/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": subscriber })))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server);
    let subscriber = client
        .subscribers()
        .get(8)
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(subscriber.email, "extra@example.com");
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/subscribers/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\": {\"id\": \"one\"}"))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server);
    match client.subscribers().get(1).await {
        Err(ListmonkError::DecodeError { status, .. }) => assert_eq!(status, StatusCode::OK),
        other => panic!("Expected DecodeError, got {other:?}"),
    }
}
