//! DREAMS 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route` / `web::router`: 路由定义与路由服务
//! - `session`: 会话视图模型（身份流 → 登录态）
//! - `gateway` / `api`: 能力边界与外部服务客户端
//! - `records` / `chat`: 会话守卫的持久化与聊天流程
//! - `components`: UI 组件层

mod api;
mod chat;
mod config;
mod form;
mod gateway;
mod prefs;
mod records;
mod session;

mod components {
    mod chat_panel;
    mod forms;
    pub mod home;
    mod icons;
    pub mod login;
    mod navbar;
    pub mod nutrition;
    pub mod reset_password;
    pub mod signup;
    mod toast;
    pub mod workout;
}

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，以减小 WASM 二进制体积。
pub(crate) mod web {
    pub mod date;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use storage::LocalStorage;
    pub use timer::Interval;
}

// =========================================================
// 日志宏（测试在本地目标上运行，不能触碰 JS API）
// =========================================================

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}
#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_log {
    ($($t:tt)*) => (eprintln!($($t)*))
}
pub(crate) use console_log;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Services;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::nutrition::NutritionPage;
use crate::components::reset_password::ResetPasswordPage;
use crate::components::signup::SignUpPage;
use crate::components::workout::WorkoutPage;
use crate::config::AppConfig;
use crate::gateway::AuthGateway;
use crate::prefs::PrefsContext;
use crate::session::SessionContext;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::SignUp => view! { <SignUpPage /> }.into_any(),
        AppRoute::ResetPassword => view! { <ResetPasswordPage /> }.into_any(),
        AppRoute::Workout => view! { <WorkoutPage /> }.into_any(),
        AppRoute::Nutrition => view! { <NutritionPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 装配外部服务客户端并注入 Context
    let config = AppConfig::load();
    let services = Services::new(&config);
    provide_context(services.clone());

    // 2. 创建会话上下文
    let session_ctx = SessionContext::new();
    provide_context(session_ctx);

    // 3. 界面偏好（深色模式 / 菜单）
    let prefs = PrefsContext::new();
    provide_context(prefs);

    // 4. 首屏渲染完成后用持久化令牌恢复会话；
    //    无论结果如何，身份流都会发射一次首个已知状态
    let auth = services.auth.clone();
    spawn_local(async move {
        auth.restore().await;
    });

    // 5. 认证信号注入路由服务，登录后自动离开入口页
    let is_authenticated = session_ctx.is_authenticated_signal();
    let theme = prefs.theme();

    view! {
        <div data-theme=move || theme.get()>
            <Router is_authenticated=is_authenticated>
                <RouterOutlet matcher=route_matcher />
            </Router>
        </div>
    }
}
