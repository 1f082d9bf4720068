//! 注册页面
//!
//! 邮箱、手机号、基础体测档案（年龄/体重/身高）与密码，
//! 全部字段通过声明式规格校验；也可直接走第三方提供方。

use leptos::prelude::*;
use leptos::task::spawn_local;

use dreams_shared::AuthProvider;
use dreams_shared::protocol::SignUpRequest;
use dreams_shared::validate::{
    validate_age, validate_email, validate_height, validate_password_strict, validate_phone,
    validate_weight,
};

use crate::api::use_services;
use crate::components::forms::Field;
use crate::form::{FieldSpec, FormDraft, Rule};
use crate::gateway::AuthGateway;
use crate::session::{self, use_session};
use crate::web::router::Link;

static SIGN_UP_SPECS: &[FieldSpec] = &[
    FieldSpec {
        name: "email",
        label: "Email",
        input_type: "email",
        placeholder: "you@example.com",
        rule: Rule::Field(validate_email),
    },
    FieldSpec {
        name: "phone",
        label: "Phone Number",
        input_type: "tel",
        placeholder: "(123) 456-7890",
        rule: Rule::Field(validate_phone),
    },
    FieldSpec {
        name: "age",
        label: "Age",
        input_type: "number",
        placeholder: "25",
        rule: Rule::Field(validate_age),
    },
    FieldSpec {
        name: "weight",
        label: "Weight (kg)",
        input_type: "number",
        placeholder: "70",
        rule: Rule::Field(validate_weight),
    },
    FieldSpec {
        name: "height",
        label: "Height (cm)",
        input_type: "number",
        placeholder: "175",
        rule: Rule::Field(validate_height),
    },
    FieldSpec {
        name: "password",
        label: "Password",
        input_type: "password",
        placeholder: "",
        rule: Rule::Field(validate_password_strict),
    },
    FieldSpec {
        name: "confirmPassword",
        label: "Confirm Password",
        input_type: "password",
        placeholder: "",
        rule: Rule::Matches { other: "password" },
    },
];

#[component]
pub fn SignUpPage() -> impl IntoView {
    let services = use_services();
    let session_ctx = use_session();

    // 注册成功的发射触发路由重定向
    session::observe(&session_ctx, &services.auth);

    let form = FormDraft::new(SIGN_UP_SPECS);
    let (submitting, set_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = {
        let services = services.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            set_error_msg.set(None);
            if !form.validate_all() {
                return;
            }

            // 校验已保证数值字段可解析
            let request = SignUpRequest {
                email: form.value("email").get_untracked(),
                password: form.value("password").get_untracked(),
                phone: form.value("phone").get_untracked(),
                age: form.value("age").get_untracked().trim().parse().unwrap_or_default(),
                weight_kg: form
                    .value("weight")
                    .get_untracked()
                    .trim()
                    .parse()
                    .unwrap_or_default(),
                height_cm: form
                    .value("height")
                    .get_untracked()
                    .trim()
                    .parse()
                    .unwrap_or_default(),
            };

            set_submitting.set(true);
            let services = services.clone();
            spawn_local(async move {
                match services.auth.sign_up(request).await {
                    Ok(_) => form.reset(),
                    Err(e) => set_error_msg.set(Some(e.message)),
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
                    class="btn btn-outline btn-sm"
                    on:click=on_click
                    disabled=move || submitting.get()
                >
                    {provider.label()}
                </button>
            }
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Sign Up"</h1>
                    <p class="text-base-content/70">"Start your fitness journey today"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <div class="card-body">
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap()}</span>
                            </div>
                        </Show>

                        <form on:submit=on_submit class="space-y-2">
                            <Field form=form name="email" />
                            <Field form=form name="phone" />

                            <div class="grid grid-cols-3 gap-2">
                                <Field form=form name="age" />
                                <Field form=form name="weight" />
                                <Field form=form name="height" />
                            </div>

                            <Field form=form name="password" />
                            <Field form=form name="confirmPassword" />

                            <div class="form-control mt-4">
                                <button class="btn btn-primary" disabled=move || submitting.get()>
                                    {move || if submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                                    } else {
                                        "Sign Up".into_any()
                                    }}
                                </button>
                            </div>
                        </form>

                        <div class="divider text-sm text-base-content/50">"Or continue with"</div>
                        <div class="grid grid-cols-3 gap-3">
                            {provider_button(AuthProvider::Google)}
                            {provider_button(AuthProvider::Facebook)}
                            {provider_button(AuthProvider::Github)}
                        </div>

                        <p class="text-sm text-center mt-4">
                            "Already have an account? "
                            <Link to="/login" class="link link-primary">"Login"</Link>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
