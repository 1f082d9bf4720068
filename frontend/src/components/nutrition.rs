//! 营养页面
//!
//! 营养建议、餐食记录（持久化 + 轮询刷新 + 删除）、餐食计划目录。

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use dreams_shared::validate::{validate_calories, validate_meal};
use dreams_shared::{MealEntry, RecordCategory, StoredRecord};

use crate::api::use_services;
use crate::components::forms::Field;
use crate::components::icons::{Apple, CalendarDays, ClipboardList, Send, Trash2, Utensils};
use crate::components::navbar::Navbar;
use crate::components::toast::Toast;
use crate::form::{FieldSpec, FormDraft, Rule};
use crate::records::{RecordService, RecordWatcher};
use crate::session::use_session;

static MEAL_SPECS: &[FieldSpec] = &[
    FieldSpec {
        name: "meal",
        label: "Meal/Snack",
        input_type: "text",
        placeholder: "Grilled chicken salad",
        rule: Rule::Field(validate_meal),
    },
    FieldSpec {
        name: "calories",
        label: "Calories",
        input_type: "number",
        placeholder: "450",
        rule: Rule::Field(validate_calories),
    },
];

static TIPS: [&str; 5] = [
    "Eat a variety of colorful fruits and vegetables",
    "Include lean proteins in every meal",
    "Stay hydrated by drinking plenty of water",
    "Limit processed foods and added sugars",
    "Include healthy fats from sources like avocados and nuts",
];

struct MealPlan {
    title: &'static str,
    description: &'static str,
    detailed_description: &'static str,
}

static MEAL_PLANS: [MealPlan; 3] = [
    MealPlan {
        title: "High Protein Plan",
        description: "Perfect for muscle building and recovery",
        detailed_description: "This high protein meal plan is designed to support muscle growth and recovery. It includes a variety of lean proteins, complex carbohydrates, and healthy fats to fuel your body and promote muscle synthesis. Ideal for athletes and those engaged in strength training.",
    },
    MealPlan {
        title: "Low Carb Plan",
        description: "Ideal for weight loss and blood sugar control",
        detailed_description: "Our low carb meal plan is perfect for those looking to lose weight or manage their blood sugar levels. It focuses on high-quality proteins, healthy fats, and low-glycemic vegetables. This plan helps reduce insulin spikes and promotes fat burning.",
    },
    MealPlan {
        title: "Balanced Nutrition Plan",
        description: "For overall health and well-being",
        detailed_description: "The balanced nutrition plan is designed to provide a well-rounded diet that supports overall health and well-being. It includes a mix of lean proteins, whole grains, fruits, vegetables, and healthy fats. This plan is suitable for most people looking to maintain a healthy lifestyle.",
    },
];

#[component]
pub fn NutritionPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <div class="container mx-auto py-8 px-4 space-y-8">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <NutritionTips />
                    <MealsSection />
                </div>
                <MealPlans />
            </div>
        </div>
    }
}

#[component]
fn NutritionTips() -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-md">
            <div class="card-body">
                <div class="flex items-center gap-2">
                    <Apple attr:class="h-6 w-6 text-success" />
                    <h2 class="card-title text-2xl">"Nutritional Tips"</h2>
                </div>
                <ul class="list-disc pl-5 space-y-2">
                    {TIPS.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}

/// 餐食记录：表单 + 实时历史列表
#[component]
fn MealsSection() -> impl IntoView {
    let services = use_services();
    let session_ctx = use_session();

    let records = Arc::new(RecordService::new(session_ctx, services.records.clone()));
    let form = FormDraft::new(MEAL_SPECS);

    let (meals, set_meals) = signal(Vec::<StoredRecord<MealEntry>>::new());
    let (submitting, set_submitting) = signal(false);
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

    let load_meals = {
        let records = records.clone();
        move || {
            let records = records.clone();
            spawn_local(async move {
                if records.current_uid().is_err() {
                    return;
                }
                match records.list::<MealEntry>(RecordCategory::Meals).await {
                    Ok(items) => set_meals.set(items),
                    Err(e) => set_notification.set(Some((format!("Failed to load meals: {}", e.message), true))),
                }
            });
        }
    };

    // 登录态变化时加载/清空列表
    let state = session_ctx.state;
    Effect::new({
        let load_meals = load_meals.clone();
        move |_| {
            if state.get().is_authenticated() {
                load_meals();
            } else {
                set_meals.set(Vec::new());
            }
        }
    });

    // 轮询实现"实时"刷新；随视图卸载而停止
    RecordWatcher::mount(records.clone(), RecordCategory::Meals, set_meals);

    let on_submit = {
        let records = records.clone();
        let load_meals = load_meals.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if !form.validate_all() {
                return;
            }

            let entry = MealEntry {
                meal: form.value("meal").get_untracked(),
                calories: form
                    .value("calories")
                    .get_untracked()
                    .trim()
                    .parse()
                    .unwrap_or_default(),
            };

            set_submitting.set(true);
            let records = records.clone();
            let load_meals = load_meals.clone();
            spawn_local(async move {
                match records.append(RecordCategory::Meals, &entry).await {
                    Ok(_) => {
                        set_notification.set(Some(("Meal logged".to_string(), false)));
                        form.reset();
                        load_meals();
                    }
                    Err(e) => set_notification.set(Some((e.message, true))),
                }
                set_submitting.set(false);
            });
        }
    };

    let on_delete = {
        let records = records.clone();
        move |id: String| {
            let records = records.clone();
            spawn_local(async move {
                match records.delete(RecordCategory::Meals, &id).await {
                    Ok(()) => {
                        set_notification.set(Some(("Meal deleted".to_string(), false)));
                        set_meals.update(|list| list.retain(|r| r.id != id));
                    }
                    Err(e) => set_notification.set(Some((e.message, true))),
                }
            });
        }
    };

    view! {
        <Toast notification=notification set_notification=set_notification />

        <div class="card bg-base-100 shadow-md">
            <div class="card-body">
                <div class="flex items-center gap-2">
                    <Utensils attr:class="h-6 w-6 text-primary" />
                    <h2 class="card-title text-2xl">"Log Your Meal"</h2>
                </div>

                <form on:submit=on_submit class="space-y-2">
                    <Field form=form name="meal" />
                    <Field form=form name="calories" />
                    <button
                        type="submit"
                        class="btn btn-primary rounded-full gap-2 mt-2"
                        disabled=move || submitting.get()
                    >
                        <Send attr:class="h-4 w-4" /> "Log Meal"
                    </button>
                </form>

                <div class="divider">"Meal History"</div>

                <Show when=move || meals.with(|m| m.is_empty())>
                    <p class="text-base-content/50 text-sm">
                        "No meals logged yet. Sign in and log your first meal."
                    </p>
                </Show>
                <ul class="divide-y divide-base-200">
                    <For
                        each=move || meals.get()
                        key=|record| record.id.clone()
                        children={
                            let on_delete = on_delete.clone();
                            move |record| {
                                let on_delete = on_delete.clone();
                                let id = record.id.clone();
                                view! {
                                    <li class="py-3 flex items-center justify-between">
                                        <div>
                                            <p class="font-medium">{record.data.meal.clone()}</p>
                                            <p class="text-sm text-base-content/60">
                                                {record.data.calories} " kcal · " {record.created_at.format_short()}
                                            </p>
                                        </div>
                                        <button
                                            class="btn btn-ghost btn-sm text-error"
                                            on:click=move |_| on_delete(id.clone())
                                        >
                                            <Trash2 attr:class="h-4 w-4" />
                                        </button>
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
            </div>
        </div>
    }
}

/// 餐食计划目录与详情模态框
#[component]
fn MealPlans() -> impl IntoView {
    let (selected, set_selected) = signal(Option::<usize>::None);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if selected.get().is_some() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    view! {
        <div class="card bg-base-100 shadow-md">
            <div class="card-body">
                <div class="flex items-center gap-2">
                    <CalendarDays attr:class="h-6 w-6 text-secondary" />
                    <h2 class="card-title text-2xl">"Meal Plans"</h2>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {MEAL_PLANS
                        .iter()
                        .enumerate()
                        .map(|(idx, plan)| {
                            view! {
                                <div class="card bg-base-200">
                                    <div class="card-body">
                                        <h3 class="text-xl font-semibold">{plan.title}</h3>
                                        <p class="text-base-content/70">{plan.description}</p>
                                        <button
                                            class="btn btn-primary btn-sm rounded-full gap-2 mt-2"
                                            on:click=move |_| set_selected.set(Some(idx))
                                        >
                                            <ClipboardList attr:class="h-4 w-4" /> "View Plan"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>

        <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_selected.set(None)>
            <div class="modal-box max-w-2xl">
                {move || selected.get().map(|idx| {
                    let plan = &MEAL_PLANS[idx];
                    view! {
                        <h3 class="text-2xl font-bold mb-4">{plan.title}</h3>
                        <p class="mb-4">{plan.detailed_description}</p>
                    }
                })}
                <div class="modal-action">
                    <button class="btn rounded-full" on:click=move |_| set_selected.set(None)>
                        "Close"
                    </button>
                </div>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
