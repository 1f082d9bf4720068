//! 重置密码页面
//!
//! URL 带 out-of-band 码（邮件链接）时显示确认表单；
//! 否则显示请求重置邮件的表单。确认表单用简化密码规则。

use leptos::prelude::*;
use leptos::task::spawn_local;

use dreams_shared::validate::{validate_email, validate_password_min};

use crate::api::use_services;
use crate::components::forms::Field;
use crate::components::icons::Lock;
use crate::form::{FieldSpec, FormDraft, Rule};
use crate::gateway::AuthGateway;
use crate::session::{self, use_session};
use crate::web::router::use_navigate;

static CONFIRM_SPECS: &[FieldSpec] = &[
    FieldSpec {
        name: "newPassword",
        label: "New Password",
        input_type: "password",
        placeholder: "",
        rule: Rule::Field(validate_password_min),
    },
    FieldSpec {
        name: "confirmPassword",
        label: "Confirm Password",
        input_type: "password",
        placeholder: "",
        rule: Rule::Matches { other: "newPassword" },
    },
];

static REQUEST_SPECS: &[FieldSpec] = &[FieldSpec {
    name: "email",
    label: "Email",
    input_type: "email",
    placeholder: "you@example.com",
    rule: Rule::Field(validate_email),
}];

/// 从当前 URL 的查询串中取 out-of-band 码
fn oob_code_from_url() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    if search.is_empty() {
        return None;
    }
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("oobCode")
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let services = use_services();
    let session_ctx = use_session();
    session::observe(&session_ctx, &services.auth);

    match oob_code_from_url() {
        Some(code) => view! { <ConfirmForm code=code /> }.into_any(),
        None => view! { <RequestForm /> }.into_any(),
    }
}

#[component]
fn ConfirmForm(code: String) -> impl IntoView {
    let services = use_services();
    let navigate = use_navigate();

    let form = FormDraft::new(CONFIRM_SPECS);
    let (submitting, set_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        if !form.validate_all() {
            return;
        }

        set_submitting.set(true);
        let services = services.clone();
        let navigate = navigate.clone();
        let code = code.clone();
        spawn_local(async move {
            let new_password = form.value("newPassword").get_untracked();
            match services.auth.confirm_reset(&code, &new_password).await {
                Ok(()) => navigate("/login"),
                Err(e) => set_error_msg.set(Some(e.message)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="flex flex-col items-center gap-2 mb-2">
                            <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                                <Lock attr:class="h-8 w-8" />
                            </div>
                            <h1 class="text-3xl font-bold">"Reset Password"</h1>
                        </div>

                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap()}</span>
                            </div>
                        </Show>

                        <Field form=form name="newPassword" />
                        <Field form=form name="confirmPassword" />

                        <div class="form-control mt-4">
                            <button class="btn btn-primary" disabled=move || submitting.get()>
                                {move || if submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Resetting..." }.into_any()
                                } else {
                                    "Reset Password".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[component]
fn RequestForm() -> impl IntoView {
    let services = use_services();

    let form = FormDraft::new(REQUEST_SPECS);
    let (submitting, set_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        if !form.validate_all() {
            return;
        }

        set_submitting.set(true);
        let services = services.clone();
        spawn_local(async move {
            let email = form.value("email").get_untracked();
            match services.auth.send_reset_email(&email).await {
                Ok(()) => {
                    set_sent.set(true);
                    form.reset();
                }
                Err(e) => set_error_msg.set(Some(e.message)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <h1 class="text-3xl font-bold text-center mb-2">"Forgot Password"</h1>
                        <p class="text-base-content/70 text-center">
                            "Enter your email and we'll send you a reset link."
                        </p>

                        <Show when=move || sent.get()>
                            <div role="alert" class="alert alert-success text-sm py-2">
                                <span>"Reset email sent. Check your inbox."</span>
                            </div>
                        </Show>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap()}</span>
                            </div>
                        </Show>

                        <Field form=form name="email" />

                        <div class="form-control mt-4">
                            <button class="btn btn-primary" disabled=move || submitting.get()>
                                {move || if submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Sending..." }.into_any()
                                } else {
                                    "Send Reset Email".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
