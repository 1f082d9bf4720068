//! 会话视图模型
//!
//! 把外部身份流映射为所有页面共享的登录态视图，页面不各自推导。
//! 状态变更唯一的入口是身份流的发射：登录/注销的意图只是委托给
//! 网关，成功后由流驱动 `Session` 的替换。

use std::sync::Arc;

use leptos::prelude::*;

use dreams_shared::Session;
use dreams_shared::error::GatewayResult;
use dreams_shared::{AuthProvider, UserIdentity};

use crate::gateway::AuthGateway;

// =========================================================
// 状态
// =========================================================

/// 会话视图状态
///
/// `is_loading` 表示订阅后尚未收到第一次发射的"未知态"；
/// 此间导航栏不渲染登录/注销按钮，避免闪烁。
#[derive(Clone, Default)]
pub struct SessionState {
    pub session: Session,
    pub is_loading: bool,
}

impl SessionState {
    /// 订阅后、首次发射前的未知态
    pub fn unknown() -> Self {
        Self {
            session: Session::Anonymous,
            is_loading: true,
        }
    }

    /// 一次发射解析出的确定态
    pub fn resolved(session: Session) -> Self {
        Self {
            session,
            is_loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// 导航栏问候语；匿名会话返回 None
    pub fn greeting(&self) -> Option<String> {
        self.session
            .identity()
            .map(|identity| format!("Hi, {}", identity.display_label()))
    }
}

// =========================================================
// 上下文
// =========================================================

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 会话状态（只读）
    pub state: ReadSignal<SessionState>,
    /// 设置会话状态（写入）
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::unknown());
        Self { state, set_state }
    }

    /// 认证状态信号（用于注入路由服务）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }

    /// 调用时刻的会话快照（不参与响应式追踪）
    ///
    /// 按用户的持久化调用必须经由它读取 uid，绝不缓存。
    pub fn current_session(&self) -> Session {
        self.state.get_untracked().session
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

// =========================================================
// 操作
// =========================================================

/// 订阅身份流；视图卸载时自动退订
///
/// 每个挂载的页面调用一次。订阅句柄交给 `on_cleanup`，
/// 保证不会更新已卸载的视图，也不会跨导航泄漏订阅。
pub fn observe(ctx: &SessionContext, gateway: &(impl AuthGateway + ?Sized)) {
    let set_state = ctx.set_state;
    let subscription = gateway.on_session_change(Arc::new(move |session| {
        set_state.set(SessionState::resolved(session));
    }));
    on_cleanup(move || drop(subscription));
}

/// 邮箱密码登录。失败时会话保持不变，错误交由调用方展示。
pub async fn request_sign_in(
    gateway: &(impl AuthGateway + ?Sized),
    email: &str,
    password: &str,
    remember: bool,
) -> GatewayResult<UserIdentity> {
    gateway.sign_in(email, password, remember).await
}

/// 第三方联合登录
pub async fn request_provider_sign_in(
    gateway: &(impl AuthGateway + ?Sized),
    provider: AuthProvider,
) -> GatewayResult<UserIdentity> {
    gateway.sign_in_with_provider(provider).await
}

/// 注销
///
/// 不做乐观更新：只有服务端确认后流才会发射 `Anonymous`。
/// 假的"已注销"会让未授权写入成为可能。
pub async fn request_sign_out(gateway: &(impl AuthGateway + ?Sized)) -> GatewayResult<()> {
    gateway.sign_out().await
}

#[cfg(test)]
mod tests;
