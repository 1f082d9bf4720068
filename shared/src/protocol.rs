//! 外部服务的客户端契约
//!
//! 身份服务与聊天端点的请求/响应类型。`ApiRequest` trait 把
//! 请求体、响应类型、路径与方法绑定在一起，HTTP 客户端据此发送。
//! 记录存储的路径按 `uid` / 集合名动态拼接，不走本 trait。

use crate::UserIdentity;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The URL path (or suffix).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

// =========================================================
// 身份服务 (Identity Service)
// =========================================================

/// 身份服务签发的会话授权
///
/// `id_token` 是短期令牌；客户端只持久化它，绝不持久化凭据。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionGrant {
    #[serde(flatten)]
    pub identity: UserIdentity,
    pub id_token: String,
}

/// 邮箱 + 密码登录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for SignInRequest {
    type Response = SessionGrant;
    const PATH: &'static str = "/auth/sign-in";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 注册新账户（附带基础体测档案）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub phone: String,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl ApiRequest for SignUpRequest {
    type Response = SessionGrant;
    const PATH: &'static str = "/auth/sign-up";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 第三方联合登录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSignInRequest {
    pub provider: crate::AuthProvider,
}

impl ApiRequest for ProviderSignInRequest {
    type Response = SessionGrant;
    const PATH: &'static str = "/auth/provider";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 发送手机验证码
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpSendRequest {
    pub phone: String,
}

impl ApiRequest for OtpSendRequest {
    type Response = ();
    const PATH: &'static str = "/auth/otp/send";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 校验手机验证码
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpVerifyRequest {
    pub phone: String,
    pub code: String,
}

impl ApiRequest for OtpVerifyRequest {
    type Response = SessionGrant;
    const PATH: &'static str = "/auth/otp/verify";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 注销（令牌在 Authorization 头中）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignOutRequest;

impl ApiRequest for SignOutRequest {
    type Response = ();
    const PATH: &'static str = "/auth/sign-out";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 用持久化的令牌恢复会话（令牌在 Authorization 头中）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoreSessionRequest;

impl ApiRequest for RestoreSessionRequest {
    type Response = SessionGrant;
    const PATH: &'static str = "/auth/restore";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 请求发送重置密码邮件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetEmailRequest {
    pub email: String,
}

impl ApiRequest for ResetEmailRequest {
    type Response = ();
    const PATH: &'static str = "/auth/reset/send";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 用邮件中的 out-of-band 码确认新密码
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetConfirmRequest {
    pub oob_code: String,
    pub new_password: String,
}

impl ApiRequest for ResetConfirmRequest {
    type Response = ();
    const PATH: &'static str = "/auth/reset/confirm";
    const METHOD: HttpMethod = HttpMethod::Post;
}

// =========================================================
// 记录存储 (Record Store)
// =========================================================

/// 追加记录后服务端返回分配的文档 id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendRecordResponse {
    pub id: String,
}

// =========================================================
// 聊天端点 (Chat Endpoint)
// =========================================================

/// 聊天请求体。字段名由端点契约固定（camelCase 的 userId）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl ApiRequest for ChatRequest {
    type Response = ChatResponse;
    const PATH: &'static str = "/chat";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
