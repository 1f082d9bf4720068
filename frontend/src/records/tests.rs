use super::*;
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dreams_shared::error::GatewayErrorKind;
use dreams_shared::{MealEntry, MuscleGroup, Timestamp, UserIdentity, WorkoutPlan, WorkoutType};

// =========================================================
// Shared Mock Components
// =========================================================

struct TestContext {
    /// Operation log to verify calling order (and absence of calls)
    log: RefCell<Vec<String>>,
    /// In-memory collections, keyed by "{uid}/{collection}"
    collections: RefCell<HashMap<String, Vec<serde_json::Value>>>,
    /// Monotonic counter for ids and created_at stamps
    seq: RefCell<i64>,
    /// Session the stub source reports at call time
    session: RefCell<Session>,
}

impl TestContext {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            log: RefCell::new(Vec::new()),
            collections: RefCell::new(HashMap::new()),
            seq: RefCell::new(0),
            session: RefCell::new(Session::Anonymous),
        })
    }

    fn push_log(&self, msg: String) {
        self.log.borrow_mut().push(msg);
    }

    fn sign_in(&self, uid: &str) {
        *self.session.borrow_mut() = Session::Authenticated(UserIdentity {
            uid: uid.to_string(),
            email: format!("{uid}@example.com"),
            display_name: None,
        });
    }

    fn sign_out(&self) {
        *self.session.borrow_mut() = Session::Anonymous;
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
        data: &T,
    ) -> GatewayResult<String>
    where
        T: serde::Serialize + 'static,
    {
        self.ctx
            .push_log(format!("append:{uid}:{}", category.collection()));

        let seq = {
            let mut seq = self.ctx.seq.borrow_mut();
            *seq += 1;
            *seq
        };
        let id = format!("r{seq}");
        let stored = StoredRecord {
            id: id.clone(),
            created_at: Timestamp::new(seq),
            data: serde_json::to_value(data).unwrap(),
        };
        self.ctx
            .collections
            .borrow_mut()
            .entry(format!("{uid}/{}", category.collection()))
            .or_default()
            .push(serde_json::to_value(&stored).unwrap());
        Ok(id)
    }

    async fn list<T>(
        &self,
        uid: &str,
        category: RecordCategory,
    ) -> GatewayResult<Vec<StoredRecord<T>>>
    where
        T: serde::de::DeserializeOwned + 'static,
    {
        self.ctx
            .push_log(format!("list:{uid}:{}", category.collection()));

        let key = format!("{uid}/{}", category.collection());
        let collections = self.ctx.collections.borrow();
        let values = collections.get(&key).cloned().unwrap_or_default();
        // Insertion order on purpose: the service owns the newest-first guarantee
        Ok(values
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap())
            .collect())
    }

    async fn delete(&self, uid: &str, category: RecordCategory, id: &str) -> GatewayResult<()> {
        self.ctx
            .push_log(format!("delete:{uid}:{}:{id}", category.collection()));
        Ok(())
    }
}

fn setup() -> (Rc<TestContext>, RecordService<StubSession, TestStore>) {
    let ctx = TestContext::new();
    let service = RecordService::new(
        StubSession { ctx: ctx.clone() },
        TestStore { ctx: ctx.clone() },
    );
    (ctx, service)
}

fn meal(name: &str, calories: u32) -> MealEntry {
    MealEntry {
        meal: name.to_string(),
        calories,
    }
}

// =========================================================
// Tests
// =========================================================

#[tokio::test]
async fn test_anonymous_meal_log_fails_fast() {
    let (ctx, service) = setup();

    let result = service
        .append(RecordCategory::Meals, &meal("Oatmeal", 300))
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.kind, GatewayErrorKind::Unauthenticated);
    // No remote persistence call was made
    assert!(ctx.log.borrow().is_empty());
}

#[tokio::test]
async fn test_anonymous_workout_plan_fails_fast() {
    let (ctx, service) = setup();

    let plan = WorkoutPlan {
        workout_type: WorkoutType::Strength,
        duration_minutes: 45,
        muscle_groups: vec![MuscleGroup::Chest, MuscleGroup::Core],
    };
    let err = service
        .append(RecordCategory::WorkoutPlans, &plan)
        .await
        .unwrap_err();

    assert_eq!(err.kind, GatewayErrorKind::Unauthenticated);
    assert!(ctx.log.borrow().is_empty());
}

#[tokio::test]
async fn test_append_reads_uid_at_call_time() {
    let (ctx, service) = setup();

    ctx.sign_in("u1");
    service
        .append(RecordCategory::Meals, &meal("Breakfast", 400))
        .await
        .unwrap();

    // The identity changes between calls; the next write must use the
    // fresh uid, never a cached one.
    ctx.sign_in("u2");
    service
        .append(RecordCategory::Meals, &meal("Lunch", 600))
        .await
        .unwrap();

    let log = ctx.log.borrow();
    assert_eq!(*log, ["append:u1:nutritionHistory", "append:u2:nutritionHistory"]);
}

#[tokio::test]
async fn test_sign_out_blocks_further_writes() {
    let (ctx, service) = setup();

    ctx.sign_in("u1");
    service
        .append(RecordCategory::Meals, &meal("Breakfast", 400))
        .await
        .unwrap();

    ctx.sign_out();
    let err = service
        .append(RecordCategory::Meals, &meal("Lunch", 600))
        .await
        .unwrap_err();

    assert_eq!(err.kind, GatewayErrorKind::Unauthenticated);
    assert_eq!(ctx.log.borrow().len(), 1);
}

#[tokio::test]
async fn test_list_returns_newest_first() {
    let (ctx, service) = setup();
    ctx.sign_in("u1");

    for (name, calories) in [("Breakfast", 400), ("Lunch", 600), ("Dinner", 700)] {
        service
            .append(RecordCategory::Meals, &meal(name, calories))
            .await
            .unwrap();
    }

    let listed: Vec<StoredRecord<MealEntry>> =
        service.list(RecordCategory::Meals).await.unwrap();

    let names: Vec<&str> = listed.iter().map(|r| r.data.meal.as_str()).collect();
    assert_eq!(names, ["Dinner", "Lunch", "Breakfast"]);
}

#[tokio::test]
async fn test_list_requires_session() {
    let (ctx, service) = setup();

    let err = service
        .list::<MealEntry>(RecordCategory::Meals)
        .await
        .unwrap_err();

    assert_eq!(err.kind, GatewayErrorKind::Unauthenticated);
    assert!(ctx.log.borrow().is_empty());
}

#[tokio::test]
async fn test_delete_is_scoped_to_current_user() {
    let (ctx, service) = setup();
    ctx.sign_in("u1");

    service
        .delete(RecordCategory::WorkoutPlans, "r42")
        .await
        .unwrap();

    assert_eq!(*ctx.log.borrow(), ["delete:u1:workoutHistory:r42"]);
}
