//! 错误类型模块
//!
//! 整个应用共用的错误分类：
//! - `GatewayErrorKind`: 语义分类（用于界面提示的选择与测试断言）
//! - `GatewayError`: 携带分类与消息的核心错误类型
//! - `ErrorResponse`: 外部服务的线上错误载荷，可恢复为 `GatewayError`

use std::fmt;

use serde::{Deserialize, Serialize};

// =========================================================
// 错误分类枚举
// =========================================================

/// 错误分类
///
/// 远端失败尽量归入具体分类（invalid-credentials / popup-cancelled /
/// invalid-email），无法识别时落到 `Unknown`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayErrorKind {
    /// 凭据无效（密码错误 / 用户不存在）
    InvalidCredentials,
    /// 邮箱格式被身份服务拒绝
    InvalidEmail,
    /// 用户关闭了第三方登录弹窗
    PopupCancelled,
    /// 本地守卫：没有活跃会话就尝试了按用户操作
    Unauthenticated,
    /// 资源未找到
    NotFound,
    /// 网络层失败
    Network,
    /// JSON 解析或序列化错误
    Serialization,
    /// 其余所有远端失败
    Unknown,
}

impl GatewayErrorKind {
    /// 根据外部身份服务返回的错误代码分类
    ///
    /// 代码形如 `auth/wrong-password`；未知代码归为 `Unknown`。
    pub fn classify_code(code: &str) -> Self {
        match code {
            "auth/invalid-credential"
            | "auth/wrong-password"
            | "auth/user-not-found"
            | "auth/invalid-otp" => GatewayErrorKind::InvalidCredentials,
            "auth/invalid-email" => GatewayErrorKind::InvalidEmail,
            "auth/popup-closed-by-user" | "auth/cancelled-popup-request" => {
                GatewayErrorKind::PopupCancelled
            }
            "auth/network-request-failed" => GatewayErrorKind::Network,
            "auth/user-token-expired" | "auth/invalid-user-token" => {
                GatewayErrorKind::Unauthenticated
            }
            _ => GatewayErrorKind::Unknown,
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayError {
    pub kind: GatewayErrorKind,
    pub message: String,
}

impl GatewayError {
    pub fn new(kind: GatewayErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    // --- Convenience constructors ---

    pub fn unauthenticated() -> Self {
        Self::new(
            GatewayErrorKind::Unauthenticated,
            "Please sign in to continue",
        )
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Network, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Serialization, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::NotFound, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Unknown, message)
    }

    /// 从线上错误代码 + 消息构造，自动分类
    pub fn from_code(code: &str, message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::classify_code(code), message)
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.message)
    }
}

impl std::error::Error for GatewayError {}

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

// =========================================================
// 传输用错误类型
// =========================================================

/// 外部服务的错误响应体
///
/// 身份服务以 `{ code, message }` 返回失败，`code` 使用
/// `auth/...` 风格的机器可读代码。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<ErrorResponse> for GatewayError {
    fn from(e: ErrorResponse) -> Self {
        GatewayError::from_code(&e.code, e.message)
    }
}

#[cfg(test)]
mod tests;
