//! Integration tests for the resource bindings: wire names, paths and bodies.

use follow_up_boss::query::Page;
use follow_up_boss::resources::deal_attachments::DealAttachmentLink;
use follow_up_boss::resources::deals::{DealFilter, NewDeal};
use follow_up_boss::resources::events::{EventFilter, EventPerson, NewEvent};
use follow_up_boss::resources::people::TagOptions;
use follow_up_boss::resources::webhooks::NewWebhook;
use follow_up_boss::{webhook, Client, Error};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .api_key("test-key")
        .ignore_env()
        .base_url(server.uri())
        .unwrap()
        .build()
        .unwrap()
}

fn query_of(request: &wiremock::Request) -> Vec<(String, String)> {
    request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[tokio::test]
async fn test_deals_list_uses_snake_case_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/deals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deals": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .deals()
        .list(&DealFilter {
            page: Page::new().limit(10),
            pipeline_id: Some(2),
            person_id: Some(8),
            ..Default::default()
        })
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        query_of(&requests[0]),
        vec![
            ("limit".to_string(), "10".to_string()),
            ("pipeline_id".to_string(), "2".to_string()),
            ("person_id".to_string(), "8".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_deal_create_maps_owner_to_user_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/deals"))
        .and(body_json(json!({
            "name": "12 Oak St",
            "stageId": 4,
            "userId": 3,
            "peopleIds": [17],
            "price": 450000.0,
            "customLotSize": "0.3 acres"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 100})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let deal = client
        .deals()
        .create(&NewDeal {
            name: "12 Oak St".into(),
            stage_id: 4,
            owner_id: Some(3),
            people_ids: vec![17],
            price: Some(450000.0),
            extra: [
                ("customLotSize".to_string(), json!("0.3 acres")),
                ("commissionValue".to_string(), Value::Null),
            ]
            .into_iter()
            .collect(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(deal["id"], 100);
}

#[tokio::test]
async fn test_stage_delete_sends_reassignment_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/stages/9"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"assignStageId": 2})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data = client.stages().delete(9, 2).await.unwrap();
    assert_eq!(data, json!({}));
}

#[tokio::test]
async fn test_reaction_delete_sends_emoji_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/reactions/note/42"))
        .and(body_json(json!({"body": "👍"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.reactions().delete("note", 42, "👍").await.unwrap();
}

#[tokio::test]
async fn test_webhooks_are_scoped_by_system() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhooks"))
        .and(query_param("system", "AcmeCRM"))
        .and(body_json(json!({
            "event": "peopleCreated",
            "url": "https://example.com/hook"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 5})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/webhooks/5"))
        .and(query_param("system", "AcmeCRM"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/webhookEvents/8"))
        .and(query_param("system", "AcmeCRM"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 8})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let webhooks = client.webhooks().system("AcmeCRM");
    let created = webhooks
        .create(&NewWebhook {
            event: "peopleCreated".into(),
            url: "https://example.com/hook".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created["id"], 5);

    let event = webhooks.retrieve_event(8).await.unwrap();
    assert_eq!(event["id"], 8);

    webhooks.delete(5).await.unwrap();
}

#[tokio::test]
async fn test_events_list_repeats_type_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"events": []})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .events()
        .list(&EventFilter {
            person_id: Some(4),
            types: vec!["Registration".into()],
            ..Default::default()
        })
        .await
        .unwrap();
    client
        .events()
        .list(&EventFilter {
            types: vec!["Registration".into(), "Property Inquiry".into()],
            ..Default::default()
        })
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        query_of(&requests[0]),
        vec![
            ("personId".to_string(), "4".to_string()),
            ("type".to_string(), "Registration".to_string()),
        ]
    );
    assert_eq!(
        query_of(&requests[1]),
        vec![
            ("type[]".to_string(), "Registration".to_string()),
            ("type[]".to_string(), "Property Inquiry".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_event_create_is_validated_before_sending() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let err = client
        .events()
        .create(&NewEvent {
            event_type: "Registration".into(),
            person: Some(EventPerson::default()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = client
        .events()
        .create(&NewEvent {
            event_type: "Registration".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_event_type_is_optional() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events"))
        .and(body_json(json!({"person": {"id": 12}, "message": "Hi"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 12})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let person = client
        .events()
        .create(&NewEvent {
            person: Some(EventPerson::existing(12)),
            message: Some("Hi".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(person["id"], 12);
}

#[tokio::test]
async fn test_add_tags_merges_with_existing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/17"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 17, "tags": ["Buyer", "VIP"]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/people/17"))
        .and(body_json(json!({"tags": ["Buyer", "VIP", "Hot"]})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 17, "tags": ["Buyer", "VIP", "Hot"]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let person = client
        .people()
        .add_tags(
            17,
            &["vip", " Hot ", ""],
            TagOptions {
                merge: true,
                case_sensitive: false,
            },
        )
        .await
        .unwrap();

    assert_eq!(person["tags"], json!(["Buyer", "VIP", "Hot"]));
}

#[tokio::test]
async fn test_add_tags_replace_skips_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/people/17"))
        .and(body_json(json!({"tags": ["Seller"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 17})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .people()
        .add_tags(
            17,
            &["Seller", "Seller"],
            TagOptions {
                merge: false,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let err = client
        .people()
        .add_tags(17, &[" "], TagOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_people_list_is_normalized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client
        .people()
        .list(&follow_up_boss::resources::people::PeopleFilter {
            page: Page::new().limit(2),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page["people"], json!([]));
    assert_eq!(page["count"], 0);
    assert_eq!(page["_metadata"]["limit"], 2);
}

#[tokio::test]
async fn test_pond_delete_defaults_to_current_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 31})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/ponds/6"))
        .and(query_param("assignTo", "31"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.ponds().delete(6, None).await.unwrap();
}

#[tokio::test]
async fn test_inbox_app_deactivate_sends_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/inboxApps/deactivate"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("appId=app-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data = client.inbox_apps().deactivate("app-1").await.unwrap();
    assert_eq!(data["success"], true);
}

#[tokio::test]
async fn test_user_lookup_by_email() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{"id": 2, "email": "Agent@Example.com"}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(
        client.users().id_by_email("agent@example.com").await.unwrap(),
        Some(2)
    );
    assert_eq!(client.users().find_by_email("").await.unwrap(), None);
}

#[tokio::test]
async fn test_webhook_resolves_person_through_note() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/notes/300"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 300, "personId": 17})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let payload = json!({"event": "notesCreated", "resourceIds": [300]});

    assert_eq!(webhook::extract_person_id(&payload), None);
    assert_eq!(
        webhook::resolve_person_id(&client, &payload).await.unwrap(),
        Some(17)
    );
}

#[tokio::test]
async fn test_attachment_update_requires_fields() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let err = client
        .deal_attachments()
        .update(3, &Default::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_deal_attachment_link_requires_uri() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let err = client
        .deal_attachments()
        .link(&DealAttachmentLink {
            deal_id: 1,
            uri: "  ".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
