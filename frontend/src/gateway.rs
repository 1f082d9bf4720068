//! 能力边界模块
//!
//! 视图层不直接接触具体服务客户端，而是面向三个窄接口：
//! - `AuthGateway`: 身份服务（登录/注册/注销/重置/会话流）
//! - `RecordStore`: 按用户的文档存储
//! - `ChatClient`: 聊天端点
//!
//! 这样外部服务可以整体替换，测试中可以用内存 mock 替身。
//! 回调与监听表使用 `Arc`/`Mutex`：响应式系统是线程安全的，
//! 视图闭包捕获的一切都必须 `Send + Sync`。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dreams_shared::error::GatewayResult;
use dreams_shared::protocol::SignUpRequest;
use dreams_shared::{AuthProvider, RecordCategory, Session, StoredRecord, UserIdentity};
use serde::{Serialize, de::DeserializeOwned};

// =========================================================
// 会话变更广播
// =========================================================

pub type SessionCallback = Arc<dyn Fn(Session) + Send + Sync>;

type ListenerList = Arc<Mutex<Vec<(u64, SessionCallback)>>>;

/// 会话流订阅句柄
///
/// drop 即退订，保证卸载后的视图不会再收到发射。
pub struct AuthSubscription {
    listeners: ListenerList,
    id: u64,
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// 会话变更的发布端
///
/// 身份网关持有它；每次登录/注销/恢复成功后 emit 一次，
/// 所有仍然存活的订阅按注册顺序收到新的 `Session`。
#[derive(Clone, Default)]
pub struct SessionBroadcast {
    listeners: ListenerList,
    next_id: Arc<AtomicU64>,
}

impl SessionBroadcast {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册监听器，返回 RAII 订阅句柄
    pub fn subscribe(&self, callback: SessionCallback) -> AuthSubscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push((id, callback));
        }
        AuthSubscription {
            listeners: self.listeners.clone(),
            id,
        }
    }

    /// 向所有订阅者发射一次会话值
    pub fn emit(&self, session: &Session) {
        // 先拷贝回调再调用，避免监听器在回调中退订造成死锁
        let callbacks: Vec<SessionCallback> = match self.listeners.lock() {
            Ok(listeners) => listeners.iter().map(|(_, cb)| cb.clone()).collect(),
            Err(_) => return,
        };
        for cb in callbacks {
            cb(session.clone());
        }
    }
}

// =========================================================
// 网关接口
// =========================================================

/// 身份服务网关
#[async_trait(?Send)]
pub trait AuthGateway {
    /// 订阅会话变更流
    fn on_session_change(&self, callback: SessionCallback) -> AuthSubscription;

    /// 用持久化令牌恢复会话；无论成败都会产生一次发射
    /// （失败 / 无令牌时发射 `Anonymous`，即初始"未知态"的解析）
    async fn restore(&self);

    async fn sign_in(&self, email: &str, password: &str, remember: bool)
    -> GatewayResult<UserIdentity>;

    async fn sign_up(&self, request: SignUpRequest) -> GatewayResult<UserIdentity>;

    async fn sign_in_with_provider(&self, provider: AuthProvider) -> GatewayResult<UserIdentity>;

    async fn send_otp(&self, phone: &str) -> GatewayResult<()>;

    async fn verify_otp(&self, phone: &str, code: &str) -> GatewayResult<UserIdentity>;

    async fn sign_out(&self) -> GatewayResult<()>;

    async fn send_reset_email(&self, email: &str) -> GatewayResult<()>;

    async fn confirm_reset(&self, oob_code: &str, new_password: &str) -> GatewayResult<()>;
}

/// 按用户的文档存储
///
/// 所有方法都要求调用方显式传入 `uid`——由服务层在调用时刻
/// 从当前会话读取，绝不缓存过期标识。
#[async_trait(?Send)]
pub trait RecordStore {
    async fn append<T>(
        &self,
        uid: &str,
        category: RecordCategory,
        data: &T,
    ) -> GatewayResult<String>
    where
        T: Serialize + 'static;

    /// 按创建时间倒序列出（最新在前）
    async fn list<T>(
        &self,
        uid: &str,
        category: RecordCategory,
    ) -> GatewayResult<Vec<StoredRecord<T>>>
    where
        T: DeserializeOwned + 'static;

    async fn delete(&self, uid: &str, category: RecordCategory, id: &str) -> GatewayResult<()>;
}

/// 聊天端点客户端
#[async_trait(?Send)]
pub trait ChatClient {
    /// 发送一条消息，返回助手的回复文本
    async fn send(&self, message: &str, user_id: &str) -> GatewayResult<String>;
}

#[cfg(test)]
mod tests;
