//! 按用户记录服务
//!
//! 所有持久化调用的必经之路：在调用时刻从会话读取 uid，
//! 匿名会话立即以 `Unauthenticated` 失败，绝不携带过期标识发请求。
//! 另提供 `RecordWatcher`，以固定间隔轮询列表实现"实时"刷新。

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Serialize, de::DeserializeOwned};

use dreams_shared::error::{GatewayError, GatewayResult};
use dreams_shared::{RecordCategory, Session, StoredRecord};

use crate::api::RecordApi;
use crate::gateway::RecordStore;
use crate::session::SessionContext;
use crate::web::Interval;

/// 列表轮询间隔
pub const WATCH_INTERVAL_MS: u32 = 15_000;

// =========================================================
// 会话来源
// =========================================================

/// 调用时刻提供当前会话的来源
///
/// 生产实现是 `SessionContext`；测试中用可变替身模拟登录/注销。
pub trait SessionSource {
    fn current_session(&self) -> Session;
}

impl SessionSource for SessionContext {
    fn current_session(&self) -> Session {
        SessionContext::current_session(self)
    }
}

// =========================================================
// 记录服务
// =========================================================

/// 会话守卫的持久化门面
pub struct RecordService<A, S>
where
    A: SessionSource,
    S: RecordStore,
{
    session: A,
    store: S,
}

/// 应用中实际使用的具体化别名
pub type AppRecords = RecordService<SessionContext, RecordApi>;

impl<A, S> RecordService<A, S>
where
    A: SessionSource,
    S: RecordStore,
{
    pub fn new(session: A, store: S) -> Self {
        Self { session, store }
    }

    /// 调用时刻解析 uid；匿名会话立即失败
    pub fn current_uid(&self) -> GatewayResult<String> {
        self.session
            .current_session()
            .uid()
            .map(str::to_string)
            .ok_or_else(GatewayError::unauthenticated)
    }

    pub async fn append<T>(&self, category: RecordCategory, data: &T) -> GatewayResult<String>
    where
        T: Serialize + 'static,
    {
        let uid = self.current_uid()?;
        self.store.append(&uid, category, data).await
    }

    /// 列出记录，保证最新在前
    pub async fn list<T>(&self, category: RecordCategory) -> GatewayResult<Vec<StoredRecord<T>>>
    where
        T: DeserializeOwned + 'static,
    {
        let uid = self.current_uid()?;
        let mut records = self.store.list::<T>(&uid, category).await?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    pub async fn delete(&self, category: RecordCategory, id: &str) -> GatewayResult<()> {
        let uid = self.current_uid()?;
        self.store.delete(&uid, category, id).await
    }
}

// =========================================================
// 轮询监听器
// =========================================================

/// 记录列表的"实时"监听
///
/// HTTP 客户端契约没有推送通道，用固定间隔轮询代替。
/// 随拥有它的视图一起销毁，定时器在 drop 时清除。
pub struct RecordWatcher {
    _interval: Interval,
}

impl RecordWatcher {
    /// 启动轮询并挂到当前组件的生命周期上
    ///
    /// 匿名会话的 tick 直接跳过；轮询失败只记日志，
    /// 不打断已展示的列表（首次加载的错误由页面自行提示）。
    ///
    /// 定时器闭包持有 JS 回调，不是 `Send`，所以监听器放进
    /// 组件本地的 arena 槽位；视图卸载、Owner 清理时随之 drop。
    pub fn mount<T>(
        records: Arc<AppRecords>,
        category: RecordCategory,
        set_records: WriteSignal<Vec<StoredRecord<T>>>,
    ) where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let interval = Interval::new(WATCH_INTERVAL_MS, move || {
            let records = records.clone();
            spawn_local(async move {
                if records.current_uid().is_err() {
                    return;
                }
                match records.list::<T>(category).await {
                    Ok(items) => set_records.set(items),
                    Err(e) => {
                        web_sys::console::log_1(
                            &format!("[Records] Poll of {} failed: {e}", category.collection())
                                .into(),
                        );
                    }
                }
            });
        });

        StoredValue::new_local(RecordWatcher {
            _interval: interval,
        });
    }
}

#[cfg(test)]
mod tests;
