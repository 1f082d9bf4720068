//! 顶部导航栏
//!
//! 所有页面共用：品牌、导航链接、登录态区域（问候语 + 注销 /
//! 登录按钮）、深色模式切换。登录态由会话上下文驱动，
//! 本组件同时负责页面级的身份流订阅。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_services;
use crate::components::icons::*;
use crate::components::toast::Toast;
use crate::prefs::use_prefs;
use crate::session::{self, use_session};
use crate::web::router::Link;

#[component]
pub fn Navbar() -> impl IntoView {
    let prefs = use_prefs();
    let session_ctx = use_session();
    let services = use_services();

    // 每个挂载的页面恰好持有一份身份流订阅，卸载时退订
    session::observe(&session_ctx, &services.auth);

    let state = session_ctx.state;
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

    let menu_open = prefs.menu_open;
    let dark_mode = prefs.dark_mode;

    view! {
        <Toast notification=notification set_notification=set_notification />

        <header class="navbar bg-base-100 shadow-md sticky top-0 z-40 px-4">
            <div class="flex-1 gap-2">
                <Link to="/" class="btn btn-ghost text-2xl font-bold">"DREAMS"</Link>
            </div>

            <div class="md:hidden">
                <button class="btn btn-ghost btn-square" on:click=move |_| prefs.toggle_menu()>
                    <Menu attr:class="h-6 w-6" />
                </button>
            </div>

            <nav class=move || {
                if menu_open.get() {
                    "block absolute top-16 left-0 right-0 bg-base-100 z-20 p-4 md:relative md:top-0 md:flex md:items-center md:p-0"
                } else {
                    "hidden md:flex md:items-center"
                }
            }>
                <ul class="flex flex-col md:flex-row gap-4 md:items-center">
                    <li>
                        <Link to="/workout" class="flex items-center gap-1 hover:text-primary">
                            <Dumbbell attr:class="h-4 w-4" /> "Workout"
                        </Link>
                    </li>
                    <li>
                        <Link to="/nutrition" class="flex items-center gap-1 hover:text-primary">
                            <Apple attr:class="h-4 w-4" /> "Nutrition"
                        </Link>
                    </li>
                    <li>
                        <a href="#" class="flex items-center gap-1 hover:text-primary">
                            <Bed attr:class="h-4 w-4" /> "Sleep"
                        </a>
                    </li>
                    <li>
                        <a href="#" class="flex items-center gap-1 hover:text-primary">
                            <Trophy attr:class="h-4 w-4" /> "Achievement"
                        </a>
                    </li>
                </ul>

                // 登录态区域：未知态期间不渲染，避免按钮闪烁
                <Show when=move || !state.get().is_loading>
                    {
                        let services = services.clone();
                        move || if state.get().is_authenticated() {
                        let services = services.clone();
                        let on_sign_out = move |_| {
                            let services = services.clone();
                            spawn_local(async move {
                                // 失败时保持登录态不变，只提示错误
                                if let Err(e) = session::request_sign_out(&services.auth).await {
                                    set_notification
                                        .set(Some((format!("Sign out failed: {}", e.message), true)));
                                }
                            });
                        };
                        view! {
                            <span class="ml-4 text-lg font-semibold">
                                {move || state.get().greeting().unwrap_or_default()}
                            </span>
                            <button
                                on:click=on_sign_out
                                class="ml-4 btn btn-error btn-sm rounded-full gap-2 text-white"
                            >
                                <LogOut attr:class="h-4 w-4" /> "Sign Out"
                            </button>
                        }
                        .into_any()
                    } else {
                        view! {
                            <Link to="/login" class="ml-4 btn btn-primary btn-sm rounded-full gap-2">
                                <LogIn attr:class="h-4 w-4" /> "Sign In"
                            </Link>
                        }
                        .into_any()
                    }}
                </Show>

                <button
                    on:click=move |_| prefs.toggle_dark_mode()
                    class="ml-4 btn btn-ghost btn-circle"
                >
                    {move || if dark_mode.get() {
                        view! { <Sun attr:class="h-5 w-5 text-yellow-400" /> }.into_any()
                    } else {
                        view! { <Moon attr:class="h-5 w-5" /> }.into_any()
                    }}
                </button>
            </nav>
        </header>
    }
}
