//! 登录页面
//!
//! 三种登录方式：邮箱密码（严格校验）、手机验证码、第三方提供方。
//! 登录成功不在这里导航——身份流发射后路由服务自动离开入口页。

use leptos::prelude::*;
use leptos::task::spawn_local;

use dreams_shared::AuthProvider;
use dreams_shared::validate::{validate_email, validate_password_strict, validate_phone};

use crate::api::use_services;
use crate::components::forms::Field;
use crate::form::{FieldSpec, FormDraft, Rule};
use crate::gateway::AuthGateway;
use crate::session::{self, use_session};
use crate::web::router::Link;

static SIGN_IN_SPECS: &[FieldSpec] = &[
    FieldSpec {
        name: "email",
        label: "Email",
        input_type: "email",
        placeholder: "you@example.com",
        rule: Rule::Field(validate_email),
    },
    FieldSpec {
        name: "password",
        label: "Password",
        input_type: "password",
        placeholder: "••••••••",
        rule: Rule::Field(validate_password_strict),
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum LoginTab {
    Email,
    Phone,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = use_services();
    let session_ctx = use_session();

    // 登录成功的发射会触发路由服务的自动重定向
    session::observe(&session_ctx, &services.auth);

    let form = FormDraft::new(SIGN_IN_SPECS);
    let (remember, set_remember) = signal(true);
    let (submitting, set_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let (tab, set_tab) = signal(LoginTab::Email);

    // 手机验证码状态
    let (phone, set_phone) = signal(String::new());
    let (phone_error, set_phone_error) = signal(String::new());
    let (otp_code, set_otp_code) = signal(String::new());
    let (otp_sent, set_otp_sent) = signal(false);

    let on_email_submit = {
        let services = services.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            set_error_msg.set(None);
            // 提交时聚合复跑全部字段校验；任一失败则不发请求
            if !form.validate_all() {
                return;
            }

            set_submitting.set(true);
            let services = services.clone();
            spawn_local(async move {
                let email = form.value("email").get_untracked();
                let password = form.value("password").get_untracked();
                let result = session::request_sign_in(
                    &services.auth,
                    &email,
                    &password,
                    remember.get_untracked(),
                )
                .await;
                match result {
                    Ok(_) => form.reset(),
                    Err(e) => set_error_msg.set(Some(e.message)),
                }
                set_submitting.set(false);
            });
        }
    };

    let on_send_code = {
        let services = services.clone();
        move |_| {
            let value = phone.get_untracked();
            if let Some(error) = validate_phone(&value) {
                set_phone_error.set(error);
                return;
            }
            set_phone_error.set(String::new());
            set_error_msg.set(None);

            set_submitting.set(true);
            let services = services.clone();
            spawn_local(async move {
                match services.auth.send_otp(&value).await {
                    Ok(()) => set_otp_sent.set(true),
                    Err(e) => set_error_msg.set(Some(e.message)),
                }
                set_submitting.set(false);
            });
        }
    };

    let on_verify_code = {
        let services = services.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let code = otp_code.get_untracked();
            if code.trim().is_empty() {
                set_error_msg.set(Some("Enter the verification code".to_string()));
                return;
            }
            set_error_msg.set(None);

            set_submitting.set(true);
            let services = services.clone();
            spawn_local(async move {
                let number = phone.get_untracked();
                if let Err(e) = services.auth.verify_otp(&number, code.trim()).await {
                    set_error_msg.set(Some(e.message));
                }
                set_submitting.set(false);
            });
        }
    };

    let provider_button = {
        let services = services.clone();
        move |provider: AuthProvider| {
            let services = services.clone();
            let on_click = move |_| {
                set_error_msg.set(None);
                set_submitting.set(true);
                let services = services.clone();
                spawn_local(async move {
                    // 弹窗被用户关闭会归类为 popup-cancelled，照常提示
                    if let Err(e) =
                        session::request_provider_sign_in(&services.auth, provider).await
                    {
                        set_error_msg.set(Some(e.message));
                    }
                    set_submitting.set(false);
                });
            };
            view! {
                <button
                    type="button"
                    class="btn btn-outline w-full"
                    on:click=on_click
                    disabled=move || submitting.get()
                >
                    {format!("Continue with {}", provider.label())}
                </button>
            }
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Login"</h1>
                    <p class="text-base-content/70">"Welcome back to DREAMS Fitness"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <div class="card-body">
                        <div role="tablist" class="tabs tabs-boxed mb-2">
                            <a
                                role="tab"
                                class=move || if tab.get() == LoginTab::Email { "tab tab-active" } else { "tab" }
                                on:click=move |_| set_tab.set(LoginTab::Email)
                            >
                                "Email"
                            </a>
                            <a
                                role="tab"
                                class=move || if tab.get() == LoginTab::Phone { "tab tab-active" } else { "tab" }
                                on:click=move |_| set_tab.set(LoginTab::Phone)
                            >
                                "Phone"
                            </a>
                        </div>

                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap()}</span>
                            </div>
                        </Show>

                        <Show when=move || tab.get() == LoginTab::Email>
                            {
                                let on_email_submit = on_email_submit.clone();
                                view! {
                                    <form on:submit=on_email_submit>
                                        <Field form=form name="email" />
                                        <Field form=form name="password" />

                                        <div class="form-control mt-2">
                                            <label class="label cursor-pointer justify-start gap-2">
                                                <input
                                                    type="checkbox"
                                                    class="checkbox checkbox-sm"
                                                    prop:checked=remember
                                                    on:change=move |ev| set_remember.set(event_target_checked(&ev))
                                                />
                                                <span class="label-text">"Remember me on this device"</span>
                                            </label>
                                        </div>

                                        <div class="form-control mt-4">
                                            <button class="btn btn-primary" disabled=move || submitting.get()>
                                                {move || if submitting.get() {
                                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                                } else {
                                                    "Login".into_any()
                                                }}
                                            </button>
                                        </div>
                                    </form>
                                }
                            }
                        </Show>

                        <Show when=move || tab.get() == LoginTab::Phone>
                            {
                                let on_send_code = on_send_code.clone();
                                let on_verify_code = on_verify_code.clone();
                                view! {
                                    <form on:submit=on_verify_code>
                                        <div class="form-control">
                                            <label class="label" for="phone">
                                                <span class="label-text">"Phone Number"</span>
                                            </label>
                                            <input
                                                id="phone"
                                                type="tel"
                                                placeholder="(123) 456-7890"
                                                class="input input-bordered w-full"
                                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                                                prop:value=phone
                                            />
                                            <Show when=move || !phone_error.get().is_empty()>
                                                <label class="label">
                                                    <span class="label-text-alt text-error">{move || phone_error.get()}</span>
                                                </label>
                                            </Show>
                                        </div>

                                        <Show when=move || otp_sent.get()>
                                            <div class="form-control mt-2">
                                                <label class="label" for="otp">
                                                    <span class="label-text">"Verification Code"</span>
                                                </label>
                                                <input
                                                    id="otp"
                                                    type="text"
                                                    inputmode="numeric"
                                                    placeholder="123456"
                                                    class="input input-bordered w-full"
                                                    on:input=move |ev| set_otp_code.set(event_target_value(&ev))
                                                    prop:value=otp_code
                                                />
                                            </div>
                                        </Show>

                                        <div class="form-control mt-4 gap-2">
                                            <button
                                                type="button"
                                                class="btn btn-outline"
                                                on:click=on_send_code
                                                disabled=move || submitting.get()
                                            >
                                                {move || if otp_sent.get() { "Resend Code" } else { "Send Code" }}
                                            </button>
                                            <Show when=move || otp_sent.get()>
                                                <button class="btn btn-primary w-full" disabled=move || submitting.get()>
                                                    "Verify & Sign In"
                                                </button>
                                            </Show>
                                        </div>
                                    </form>
                                }
                            }
                        </Show>

                        <div class="divider text-sm text-base-content/50">"Or continue with"</div>
                        <div class="space-y-2">
                            {provider_button(AuthProvider::Google)}
                            {provider_button(AuthProvider::Facebook)}
                            {provider_button(AuthProvider::Github)}
                        </div>

                        <p class="text-sm text-center mt-4">
                            <Link to="/reset-password" class="link">"Forgot password?"</Link>
                        </p>
                        <p class="text-sm text-center">
                            "Don't have an account? "
                            <Link to="/signup" class="link link-primary">"Sign up"</Link>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
