//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 所有页面都可匿名访问；按用户的持久化操作在服务层单独守卫。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    /// 登录页面
    Login,
    /// 注册页面
    SignUp,
    /// 重置密码页面
    ResetPassword,
    /// 训练计划页面
    Workout,
    /// 营养页面
    Nutrition,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/home" => Self::Home,
            "/login" => Self::Login,
            "/signup" => Self::SignUp,
            "/reset-password" => Self::ResetPassword,
            "/workout" => Self::Workout,
            "/nutrition" => Self::Nutrition,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::SignUp => "/signup",
            Self::ResetPassword => "/reset-password",
            Self::Workout => "/workout",
            Self::Nutrition => "/nutrition",
            Self::NotFound => "/404",
        }
    }

    /// 认证入口页（登录/注册）：已认证用户不应停留
    pub fn is_auth_entry(&self) -> bool {
        matches!(self, Self::Login | Self::SignUp)
    }

    /// 认证成功后离开入口页的去向
    pub fn auth_success_redirect() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
