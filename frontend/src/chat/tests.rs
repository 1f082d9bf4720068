use super::*;
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dreams_shared::error::{GatewayError, GatewayErrorKind, GatewayResult};
use dreams_shared::{ChatOrigin, Session, StoredRecord, UserIdentity};

// =========================================================
// Shared Mock Components
// =========================================================

struct TestContext {
    log: RefCell<Vec<String>>,
    /// The transcript the component would render
    entries: Rc<RefCell<Vec<ChatEntry>>>,
    /// Transcript length observed at the moment the chat call goes out
    entries_at_send: Cell<usize>,
    /// Whether the chat endpoint should fail
    fail_chat: Cell<bool>,
    session: RefCell<Session>,
}

impl TestContext {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            log: RefCell::new(Vec::new()),
            entries: Rc::new(RefCell::new(Vec::new())),
            entries_at_send: Cell::new(usize::MAX),
            fail_chat: Cell::new(false),
            session: RefCell::new(Session::Anonymous),
        })
    }

    fn sign_in(&self, uid: &str, email: &str) {
        *self.session.borrow_mut() = Session::Authenticated(UserIdentity {
            uid: uid.to_string(),
            email: email.to_string(),
            display_name: None,
        });
    }
}

struct StubSession {
    ctx: Rc<TestContext>,
}

impl SessionSource for StubSession {
    fn current_session(&self) -> Session {
        self.ctx.session.borrow().clone()
    }
}

struct TestStore {
    ctx: Rc<TestContext>,
}

#[async_trait(?Send)]
impl RecordStore for TestStore {
    async fn append<T>(
        &self,
        uid: &str,
        category: RecordCategory,
        _data: &T,
    ) -> GatewayResult<String>
    where
        T: serde::Serialize + 'static,
    {
        self.ctx
            .log
            .borrow_mut()
            .push(format!("append:{uid}:{}", category.collection()));
        Ok("r1".to_string())
    }

    async fn list<T>(
        &self,
        _uid: &str,
        _category: RecordCategory,
    ) -> GatewayResult<Vec<StoredRecord<T>>>
    where
        T: serde::de::DeserializeOwned + 'static,
    {
        Ok(Vec::new())
    }

    async fn delete(&self, _uid: &str, _category: RecordCategory, _id: &str) -> GatewayResult<()> {
        Ok(())
    }
}

struct TestChatClient {
    ctx: Rc<TestContext>,
}

#[async_trait(?Send)]
impl ChatClient for TestChatClient {
    async fn send(&self, message: &str, user_id: &str) -> GatewayResult<String> {
        self.ctx
            .log
            .borrow_mut()
            .push(format!("chat:{user_id}:{message}"));
        self.ctx.entries_at_send.set(self.ctx.entries.borrow().len());
        if self.ctx.fail_chat.get() {
            Err(GatewayError::network("connection refused"))
        } else {
            Ok(format!("You said: {message}"))
        }
    }
}

fn setup() -> (
    Rc<TestContext>,
    TestChatClient,
    RecordService<StubSession, TestStore>,
) {
    let ctx = TestContext::new();
    let client = TestChatClient { ctx: ctx.clone() };
    let records = RecordService::new(
        StubSession { ctx: ctx.clone() },
        TestStore { ctx: ctx.clone() },
    );
    (ctx, client, records)
}

fn pusher(ctx: &Rc<TestContext>) -> impl Fn(ChatEntry) {
    let entries = ctx.entries.clone();
    move |entry| entries.borrow_mut().push(entry)
}

// =========================================================
// Tests
// =========================================================

#[tokio::test]
async fn test_user_entry_appended_before_call_resolves() {
    let (ctx, client, records) = setup();
    ctx.sign_in("u1", "a@b.com");

    send_message(&client, &records, "hello", pusher(&ctx))
        .await
        .unwrap();

    // The user entry was already in the transcript when the endpoint was hit
    assert_eq!(ctx.entries_at_send.get(), 1);

    let entries = ctx.entries.borrow();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].origin, ChatOrigin::User);
    assert_eq!(entries[0].text, "hello");
    assert_eq!(entries[1].origin, ChatOrigin::Assistant);
    assert_eq!(entries[1].text, "You said: hello");
}

#[tokio::test]
async fn test_failure_leaves_no_assistant_entry() {
    let (ctx, client, records) = setup();
    ctx.sign_in("u1", "a@b.com");
    ctx.fail_chat.set(true);

    let err = send_message(&client, &records, "hello", pusher(&ctx))
        .await
        .unwrap_err();

    assert_eq!(err.kind, GatewayErrorKind::Network);
    let entries = ctx.entries.borrow();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].origin, ChatOrigin::User);
}

#[tokio::test]
async fn test_anonymous_send_is_rejected_without_calls() {
    let (ctx, client, records) = setup();

    let err = send_message(&client, &records, "hello", pusher(&ctx))
        .await
        .unwrap_err();

    assert_eq!(err.kind, GatewayErrorKind::Unauthenticated);
    assert!(ctx.entries.borrow().is_empty());
    assert!(ctx.log.borrow().is_empty());
}

#[tokio::test]
async fn test_user_message_is_echoed_to_store() {
    let (ctx, client, records) = setup();
    ctx.sign_in("u1", "a@b.com");

    send_message(&client, &records, "hello", pusher(&ctx))
        .await
        .unwrap();

    let log = ctx.log.borrow();
    assert_eq!(*log, ["append:u1:chatHistory", "chat:u1:hello"]);
}

#[tokio::test]
async fn test_blank_message_is_ignored() {
    let (ctx, client, records) = setup();
    ctx.sign_in("u1", "a@b.com");

    send_message(&client, &records, "   ", pusher(&ctx))
        .await
        .unwrap();

    assert!(ctx.entries.borrow().is_empty());
    assert!(ctx.log.borrow().is_empty());
}

#[tokio::test]
async fn test_message_is_trimmed_before_sending() {
    let (ctx, client, records) = setup();
    ctx.sign_in("u1", "a@b.com");

    send_message(&client, &records, "  hello  ", pusher(&ctx))
        .await
        .unwrap();

    assert_eq!(ctx.entries.borrow()[0].text, "hello");
}
