//! 表单字段组件
//!
//! 渲染 `FormDraft` 中的一个字段：标签、输入框、内联错误。
//! 密码字段带可见性切换（小眼睛）。

use leptos::prelude::*;

use crate::components::icons::{Eye, EyeOff};
use crate::form::FormDraft;

/// 由 FieldSpec 驱动的输入框
#[component]
pub fn Field(form: FormDraft, name: &'static str) -> impl IntoView {
    let spec = form.spec(name);
    let value = form.value(name);
    let error = form.error(name);

    let is_password = spec.input_type == "password";
    let show_password = RwSignal::new(false);
    let input_type = move || {
        if is_password && show_password.get() {
            "text"
        } else {
            spec.input_type
        }
    };

    view! {
        <div class="form-control">
            <label class="label" for=spec.name>
                <span class="label-text">{spec.label}</span>
            </label>
            <div class="relative">
                <input
                    id=spec.name
                    type=input_type
                    placeholder=spec.placeholder
                    on:input=move |ev| form.input(name, event_target_value(&ev))
                    prop:value=value
                    class="input input-bordered w-full"
                />
                <Show when=move || is_password>
                    <button
                        type="button"
                        class="absolute inset-y-0 right-0 pr-3 flex items-center"
                        on:click=move |_| show_password.set(!show_password.get_untracked())
                    >
                        {move || if show_password.get() {
                            view! { <EyeOff attr:class="h-4 w-4 opacity-60" /> }.into_any()
                        } else {
                            view! { <Eye attr:class="h-4 w-4 opacity-60" /> }.into_any()
                        }}
                    </button>
                </Show>
            </div>
            <Show when=move || !error.get().is_empty()>
                <label class="label">
                    <span class="label-text-alt text-error">{move || error.get()}</span>
                </label>
            </Show>
        </div>
    }
}
