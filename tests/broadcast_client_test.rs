//! Broadcast client integration tests
//! Run with: cargo test --test broadcast_client_test

use std::sync::{Mutex, Once};

use async_trait::async_trait;
use serde_json::{json, Value};

use broadcast_client::application::services::SessionService;
use broadcast_client::infrastructure::storage::MemoryStore;
use broadcast_client::{
    ApiRequest, ApiResult, Broadcast, BroadcastClient, GroupContext, GroupInfo, JoinPrompt, Method,
    Transport,
};

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Transport that replays canned responses in order and records every request
struct ScriptedTransport {
    replies: Mutex<Vec<Value>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    fn new(replies: Vec<Value>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().rev().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        self.requests.lock().unwrap().push(request);
        Ok(self.replies.lock().unwrap().pop().unwrap_or(Value::Null))
    }
}

fn sample_broadcasts() -> Value {
    json!([
        {
            "broadcast_id": "b2",
            "category": "PLAIN_TEXT",
            "created_at": "2022-03-02T18:30:00+08:00",
            "data": "c2Vjb25k",
            "user_id": "u2",
            "full_name": "Bob",
            "avatar_url": "",
            "status": "2"
        },
        {
            "broadcast_id": "b1",
            "category": "PLAIN_POST",
            "created_at": "2022-03-01T08:00:00Z",
            "data": "Zmlyc3Q=",
            "user_id": "u1",
            "full_name": "Alice",
            "avatar_url": "https://example.com/a.png",
            "status": "0"
        }
    ])
}

/// The list is handed back exactly as the transport returned it
#[tokio::test]
async fn test_list_returns_transport_array_unmodified() {
    ensure_init();

    let raw = sample_broadcasts();
    let client = BroadcastClient::new(ScriptedTransport::new(vec![raw.clone()]));

    let list = client.list_broadcasts(&GroupContext::new("g1")).await.unwrap();

    let expected: Vec<Broadcast> = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(list, expected);
    assert_eq!(list[0].broadcast_id, "b2");
    assert_eq!(list[1].broadcast_id, "b1");
    assert_eq!(serde_json::to_value(&list).unwrap(), raw);

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].path(), "/broadcast/g1");
}

#[tokio::test]
async fn test_post_then_recall() {
    ensure_init();

    let client = BroadcastClient::new(ScriptedTransport::new(vec![json!(true), json!(true)]));
    let group = GroupContext::new("g1");

    assert!(client.post_broadcast(&group, "hello").await.unwrap());
    assert!(client.recall_broadcast(&group, "b1").await.unwrap());

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 2);

    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path(), "/broadcast/g1");
    assert_eq!(requests[0].body, Some(json!({"data": "hello"})));

    assert_eq!(requests[1].method, Method::Get);
    assert_eq!(requests[1].path(), "/broadcast/g1/b1");
    assert!(requests[1].body.is_none());
}

/// Posting the same payload twice creates two requests; the client does not dedup
#[tokio::test]
async fn test_repeated_post_not_deduplicated_by_client() {
    ensure_init();

    let client = BroadcastClient::new(ScriptedTransport::new(vec![json!(true), json!(true)]));
    let group = GroupContext::new("g1");

    client.post_broadcast(&group, "same").await.unwrap();
    client.post_broadcast(&group, "same").await.unwrap();

    assert_eq!(client.transport().requests().len(), 2);
}

/// Two presses of a prompt while the first post is pending send one request
#[tokio::test]
async fn test_prompt_guards_double_post() {
    ensure_init();

    let client = BroadcastClient::new(ScriptedTransport::new(vec![json!(true), json!(true)]));
    let group = GroupContext::new("g1");
    let prompt = JoinPrompt::new(Some(GroupInfo::new("g1").with_name("Rustaceans")), "Send");

    let first = prompt.activate(|| async {
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        client.post_broadcast(&group, "hello").await
    });
    let second = async {
        tokio::task::yield_now().await;
        prompt.activate(|| client.post_broadcast(&group, "hello")).await
    };

    let (a, b) = tokio::join!(first, second);
    assert!(matches!(a, Some(Ok(true))));
    assert!(b.is_none());
    assert_eq!(client.transport().requests().len(), 1);

    // guard released, the next press goes through
    let c = prompt.activate(|| client.post_broadcast(&group, "again")).await;
    assert!(matches!(c, Some(Ok(true))));
    assert_eq!(client.transport().requests().len(), 2);
}

/// Group context stored in the session is passed explicitly to the client
#[tokio::test]
async fn test_session_group_drives_requests() {
    ensure_init();

    let session = SessionService::new(MemoryStore::new());
    session
        .save_group(&GroupInfo::new("g42").with_name("Answers"))
        .await
        .unwrap();

    let client = BroadcastClient::new(ScriptedTransport::new(vec![json!([])]));
    let group = session.group_context().await.unwrap();
    client.list_broadcasts(&group).await.unwrap();

    assert_eq!(client.transport().requests()[0].path(), "/broadcast/g42");
}
