//! 聊天助手面板
//!
//! 会话内的追加式对话。发送期间禁用按钮防止重复提交；
//! 失败只提示错误，不产生助手条目。

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use dreams_shared::{ChatEntry, ChatOrigin};

use crate::api::use_services;
use crate::chat;
use crate::components::icons::Send;
use crate::components::toast::Toast;
use crate::records::RecordService;
use crate::session::use_session;

#[component]
pub fn ChatPanel() -> impl IntoView {
    let services = use_services();
    let session_ctx = use_session();

    let (entries, set_entries) = signal(Vec::<ChatEntry>::new());
    let (message, set_message) = signal(String::new());
    let (sending, set_sending) = signal(false);
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

    let records = Arc::new(RecordService::new(session_ctx, services.records.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let text = message.get_untracked();
        if text.trim().is_empty() {
            return;
        }

        set_sending.set(true);
        let services = services.clone();
        let records = records.clone();
        spawn_local(async move {
            let push = move |entry: ChatEntry| set_entries.update(|list| list.push(entry));
            match chat::send_message(&services.chat, &records, &text, push).await {
                Ok(()) => set_message.set(String::new()),
                Err(e) => set_notification.set(Some((e.message, true))),
            }
            set_sending.set(false);
        });
    };

    view! {
        <Toast notification=notification set_notification=set_notification />

        <div class="card bg-base-100 shadow-lg max-w-2xl mx-auto">
            <div class="card-body">
                <h2 class="card-title justify-center text-3xl">"Chatbot Assistant"</h2>

                <div class="h-80 overflow-y-auto p-4 bg-base-200 rounded-lg space-y-4">
                    <Show when=move || entries.with(|e| e.is_empty())>
                        <p class="text-center text-base-content/50 mt-8">
                            "Ask me anything about fitness, nutrition, or recovery."
                        </p>
                    </Show>
                    <For
                        each=move || entries.get().into_iter().enumerate()
                        key=|(i, _)| *i
                        children=move |(_, entry)| {
                            let is_user = entry.origin == ChatOrigin::User;
                            view! {
                                <div class=if is_user { "text-right" } else { "text-left" }>
                                    <span class=if is_user {
                                        "inline-block p-3 rounded-lg bg-primary text-primary-content"
                                    } else {
                                        "inline-block p-3 rounded-lg bg-base-300"
                                    }>
                                        {entry.text}
                                    </span>
                                </div>
                            }
                        }
                    />
                </div>

                <form class="flex mt-2" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Ask me anything about fitness..."
                        class="input input-bordered flex-grow rounded-r-none"
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                        prop:value=message
                    />
                    <button
                        type="submit"
                        class="btn btn-primary rounded-l-none"
                        disabled=move || sending.get()
                    >
                        {move || if sending.get() {
                            view! { <span class="loading loading-spinner loading-sm"></span> }.into_any()
                        } else {
                            view! { <Send attr:class="h-5 w-5" /> }.into_any()
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
