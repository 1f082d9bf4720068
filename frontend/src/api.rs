//! 外部服务 HTTP 客户端
//!
//! 三个网关接口的具体实现：
//! - `IdentityApi`: 身份服务（含会话令牌的持有与持久化）
//! - `RecordApi`: 按用户的文档存储（Bearer 令牌鉴权）
//! - `ChatApi`: 聊天端点（契约不带鉴权头）
//!
//! 按照安全约定，LocalStorage 只保存服务签发的短期会话令牌，
//! 绝不保存邮箱/密码等原始凭据。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use leptos::prelude::use_context;
use serde::{Serialize, de::DeserializeOwned};

use dreams_shared::error::{ErrorResponse, GatewayError, GatewayResult};
use dreams_shared::protocol::{
    ApiRequest, AppendRecordResponse, ChatRequest, OtpSendRequest, OtpVerifyRequest,
    ProviderSignInRequest, ResetConfirmRequest, ResetEmailRequest, RestoreSessionRequest,
    SessionGrant, SignInRequest, SignOutRequest, SignUpRequest,
};
use dreams_shared::{
    AuthProvider, HEADER_AUTHORIZATION, RecordCategory, Session, StoredRecord, UserIdentity,
};

use crate::config::AppConfig;
use crate::gateway::{
    AuthGateway, AuthSubscription, ChatClient, RecordStore, SessionBroadcast, SessionCallback,
};
use crate::web::LocalStorage;

const STORAGE_TOKEN_KEY: &str = "dreams_session_token";

/// 共享的会话令牌单元：身份客户端写入，记录客户端读取
pub type TokenCell = Arc<Mutex<Option<String>>>;

// =========================================================
// 工具函数
// =========================================================

fn network_err(e: gloo_net::Error) -> GatewayError {
    GatewayError::network(e.to_string())
}

/// 从失败响应中恢复结构化错误；响应体不可解析时退化为状态码消息
async fn error_from_response(res: Response) -> GatewayError {
    match res.json::<ErrorResponse>().await {
        Ok(body) => body.into(),
        Err(_) => GatewayError::unknown(format!("Request failed with status {}", res.status())),
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// =========================================================
// IdentityApi
// =========================================================

/// 身份服务客户端
#[derive(Clone)]
pub struct IdentityApi {
    base_url: String,
    token: TokenCell,
    broadcast: SessionBroadcast,
}

impl IdentityApi {
    /// 创建客户端；已持久化的令牌先装入内存，待 `restore` 验证
    pub fn new(base_url: &str, token: TokenCell) -> Self {
        if let Ok(mut slot) = token.lock() {
            *slot = LocalStorage::get(STORAGE_TOKEN_KEY);
        }
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            broadcast: SessionBroadcast::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn current_token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|slot| slot.clone())
    }

    /// 发送一个 `ApiRequest` 并解析 JSON 响应体
    async fn post<R: ApiRequest>(&self, request: &R) -> GatewayResult<R::Response> {
        let res = self.send(request).await?;
        res.json::<R::Response>()
            .await
            .map_err(|e| GatewayError::serialization(e.to_string()))
    }

    /// 发送一个响应体为空的 `ApiRequest`
    async fn post_unit<R: ApiRequest<Response = ()>>(&self, request: &R) -> GatewayResult<()> {
        self.send(request).await.map(|_| ())
    }

    async fn send<R: ApiRequest>(&self, request: &R) -> GatewayResult<Response> {
        let mut builder = Request::post(&self.url(R::PATH));
        if let Some(token) = self.current_token() {
            builder = builder.header(HEADER_AUTHORIZATION, &bearer(&token));
        }
        let res = builder
            .json(request)
            .map_err(|e| GatewayError::serialization(e.to_string()))?
            .send()
            .await
            .map_err(network_err)?;

        if !res.ok() {
            return Err(error_from_response(res).await);
        }
        Ok(res)
    }

    /// 采纳一次签发：持有令牌、按需持久化、向会话流发射
    fn adopt_grant(&self, grant: SessionGrant, persist: bool) -> UserIdentity {
        if persist {
            LocalStorage::set(STORAGE_TOKEN_KEY, &grant.id_token);
        } else {
            LocalStorage::delete(STORAGE_TOKEN_KEY);
        }
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(grant.id_token);
        }

        let identity = grant.identity;
        self.broadcast
            .emit(&Session::Authenticated(identity.clone()));
        identity
    }

    /// 丢弃当前会话并发射 `Anonymous`
    fn drop_session(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
        LocalStorage::delete(STORAGE_TOKEN_KEY);
        self.broadcast.emit(&Session::Anonymous);
    }
}

#[async_trait(?Send)]
impl AuthGateway for IdentityApi {
    fn on_session_change(&self, callback: SessionCallback) -> AuthSubscription {
        self.broadcast.subscribe(callback)
    }

    async fn restore(&self) {
        if self.current_token().is_none() {
            self.broadcast.emit(&Session::Anonymous);
            return;
        }
        match self.post(&RestoreSessionRequest).await {
            Ok(grant) => {
                self.adopt_grant(grant, true);
            }
            Err(e) => {
                web_sys::console::log_1(&format!("[Session] Stored token rejected: {e}").into());
                self.drop_session();
            }
        }
    }

    async fn sign_in(
        &self,
        email: &str,
        password: &str,
        remember: bool,
    ) -> GatewayResult<UserIdentity> {
        let grant = self
            .post(&SignInRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;
        Ok(self.adopt_grant(grant, remember))
    }

    async fn sign_up(&self, request: SignUpRequest) -> GatewayResult<UserIdentity> {
        let grant = self.post(&request).await?;
        Ok(self.adopt_grant(grant, true))
    }

    async fn sign_in_with_provider(&self, provider: AuthProvider) -> GatewayResult<UserIdentity> {
        let grant = self.post(&ProviderSignInRequest { provider }).await?;
        Ok(self.adopt_grant(grant, true))
    }

    async fn send_otp(&self, phone: &str) -> GatewayResult<()> {
        self.post_unit(&OtpSendRequest {
            phone: phone.to_string(),
        })
        .await
    }

    async fn verify_otp(&self, phone: &str, code: &str) -> GatewayResult<UserIdentity> {
        let grant = self
            .post(&OtpVerifyRequest {
                phone: phone.to_string(),
                code: code.to_string(),
            })
            .await?;
        Ok(self.adopt_grant(grant, true))
    }

    async fn sign_out(&self) -> GatewayResult<()> {
        // 先等服务端确认，再清除本地会话：
        // 失败时保持已认证状态，避免假的"已注销"允许未授权写入
        self.post_unit(&SignOutRequest).await?;
        self.drop_session();
        Ok(())
    }

    async fn send_reset_email(&self, email: &str) -> GatewayResult<()> {
        self.post_unit(&ResetEmailRequest {
            email: email.to_string(),
        })
        .await
    }

    async fn confirm_reset(&self, oob_code: &str, new_password: &str) -> GatewayResult<()> {
        self.post_unit(&ResetConfirmRequest {
            oob_code: oob_code.to_string(),
            new_password: new_password.to_string(),
        })
        .await
    }
}

// =========================================================
// RecordApi
// =========================================================

/// 按用户文档存储的客户端
#[derive(Clone)]
pub struct RecordApi {
    base_url: String,
    token: TokenCell,
}

impl RecordApi {
    pub fn new(base_url: &str, token: TokenCell) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, uid: &str, category: RecordCategory) -> String {
        format!("{}/{}/{}", self.base_url, uid, category.collection())
    }

    fn auth_header(&self) -> GatewayResult<String> {
        self.token
            .lock()
            .ok()
            .and_then(|slot| slot.as_deref().map(bearer))
            .ok_or_else(GatewayError::unauthenticated)
    }
}

#[async_trait(?Send)]
impl RecordStore for RecordApi {
    async fn append<T>(
        &self,
        uid: &str,
        category: RecordCategory,
        data: &T,
    ) -> GatewayResult<String>
    where
        T: Serialize + 'static,
    {
        let auth = self.auth_header()?;
        let res = Request::post(&self.url(uid, category))
            .header(HEADER_AUTHORIZATION, &auth)
            .json(data)
            .map_err(|e| GatewayError::serialization(e.to_string()))?
            .send()
            .await
            .map_err(network_err)?;

        if !res.ok() {
            return Err(error_from_response(res).await);
        }
        let body: AppendRecordResponse = res
            .json()
            .await
            .map_err(|e| GatewayError::serialization(e.to_string()))?;
        Ok(body.id)
    }

    async fn list<T>(
        &self,
        uid: &str,
        category: RecordCategory,
    ) -> GatewayResult<Vec<StoredRecord<T>>>
    where
        T: DeserializeOwned + 'static,
    {
        let auth = self.auth_header()?;
        let res = Request::get(&self.url(uid, category))
            .header(HEADER_AUTHORIZATION, &auth)
            .send()
            .await
            .map_err(network_err)?;

        if !res.ok() {
            return Err(error_from_response(res).await);
        }
        res.json::<Vec<StoredRecord<T>>>()
            .await
            .map_err(|e| GatewayError::serialization(e.to_string()))
    }

    async fn delete(&self, uid: &str, category: RecordCategory, id: &str) -> GatewayResult<()> {
        let auth = self.auth_header()?;
        let res = Request::delete(&format!("{}/{}", self.url(uid, category), id))
            .header(HEADER_AUTHORIZATION, &auth)
            .send()
            .await
            .map_err(network_err)?;

        if !res.ok() {
            return Err(error_from_response(res).await);
        }
        Ok(())
    }
}

// =========================================================
// ChatApi
// =========================================================

/// 聊天端点客户端。契约没有鉴权头与重试约定。
#[derive(Clone)]
pub struct ChatApi {
    base_url: String,
}

impl ChatApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait(?Send)]
impl ChatClient for ChatApi {
    async fn send(&self, message: &str, user_id: &str) -> GatewayResult<String> {
        let request = ChatRequest {
            message: message.to_string(),
            user_id: user_id.to_string(),
        };
        let res = Request::post(&format!("{}{}", self.base_url, ChatRequest::PATH))
            .json(&request)
            .map_err(|e| GatewayError::serialization(e.to_string()))?
            .send()
            .await
            .map_err(network_err)?;

        if !res.ok() {
            return Err(error_from_response(res).await);
        }
        let body: <ChatRequest as ApiRequest>::Response = res
            .json()
            .await
            .map_err(|e| GatewayError::serialization(e.to_string()))?;
        Ok(body.response)
    }
}

// =========================================================
// 服务集合
// =========================================================

/// 应用使用的全部外部服务客户端，作为 Context 提供
pub struct Services {
    pub auth: IdentityApi,
    pub records: RecordApi,
    pub chat: ChatApi,
}

impl Services {
    pub fn new(config: &AppConfig) -> Arc<Self> {
        let token: TokenCell = Arc::new(Mutex::new(None));
        Arc::new(Self {
            auth: IdentityApi::new(&config.identity_base_url, token.clone()),
            records: RecordApi::new(&config.records_base_url, token),
            chat: ChatApi::new(&config.chat_base_url),
        })
    }
}

/// 从 Context 获取服务集合
pub fn use_services() -> Arc<Services> {
    use_context::<Arc<Services>>().expect("Services should be provided")
}
