//! 训练页面
//!
//! 五个标签页：创建计划（持久化）、进度记录（仅会话内）、
//! 训练调整（持久化）、休息日（持久化）、动作变式（持久化）。

mod form_state;

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use dreams_shared::validate::validate_feedback;
use dreams_shared::{
    AdjustmentFeedback, MuscleGroup, RecordCategory, RestDaySelection, StoredRecord, Timestamp,
    VariationSelection, Weekday, WorkoutPlan,
};

use crate::api::use_services;
use crate::components::icons::{Bed, ChartLine, Dumbbell, RotateCcw, Shuffle, Trash2};
use crate::components::navbar::Navbar;
use crate::components::toast::Toast;
use crate::records::{AppRecords, RecordService, RecordWatcher};
use crate::session::use_session;
use crate::web::date::now_timestamp;
use form_state::PlanFormState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum WorkoutTab {
    Create,
    Track,
    Adjust,
    Rest,
    Variations,
}

fn records_service() -> Arc<AppRecords> {
    let services = use_services();
    let session_ctx = use_session();
    Arc::new(RecordService::new(session_ctx, services.records.clone()))
}

#[component]
pub fn WorkoutPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(WorkoutTab::Create);

    let tab_button = move |tab: WorkoutTab, label: &'static str| {
        view! {
            <button
                class=move || {
                    if active_tab.get() == tab {
                        "btn btn-primary rounded-full gap-2"
                    } else {
                        "btn btn-ghost rounded-full gap-2"
                    }
                }
                on:click=move |_| set_active_tab.set(tab)
            >
                {match tab {
                    WorkoutTab::Create => view! { <Dumbbell attr:class="h-4 w-4" /> }.into_any(),
                    WorkoutTab::Track => view! { <ChartLine attr:class="h-4 w-4" /> }.into_any(),
                    WorkoutTab::Adjust => view! { <RotateCcw attr:class="h-4 w-4" /> }.into_any(),
                    WorkoutTab::Rest => view! { <Bed attr:class="h-4 w-4" /> }.into_any(),
                    WorkoutTab::Variations => view! { <Shuffle attr:class="h-4 w-4" /> }.into_any(),
                }}
                {label}
            </button>
        }
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <div class="container mx-auto px-4 py-8">
                <h1 class="text-4xl font-bold text-center mb-8">"Workout Planner"</h1>

                <div class="flex flex-wrap justify-center gap-2 mb-8">
                    {tab_button(WorkoutTab::Create, "Create Plan")}
                    {tab_button(WorkoutTab::Track, "Track Progress")}
                    {tab_button(WorkoutTab::Adjust, "Adjust Workout")}
                    {tab_button(WorkoutTab::Rest, "Rest Days")}
                    {tab_button(WorkoutTab::Variations, "Variations")}
                </div>

                {move || match active_tab.get() {
                    WorkoutTab::Create => view! { <CreatePlanTab /> }.into_any(),
                    WorkoutTab::Track => view! { <TrackProgressTab /> }.into_any(),
                    WorkoutTab::Adjust => view! { <AdjustTab /> }.into_any(),
                    WorkoutTab::Rest => view! { <RestDaysTab /> }.into_any(),
                    WorkoutTab::Variations => view! { <VariationsTab /> }.into_any(),
                }}
            </div>
        </div>
    }
}

// =========================================================
// 创建计划
// =========================================================

#[component]
fn CreatePlanTab() -> impl IntoView {
    let records = records_service();
    let session_ctx = use_session();
    let form = PlanFormState::new();

    let (plans, set_plans) = signal(Vec::<StoredRecord<WorkoutPlan>>::new());
    let (submitting, set_submitting) = signal(false);
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

    let load_plans = {
        let records = records.clone();
        move || {
            let records = records.clone();
            spawn_local(async move {
                if records.current_uid().is_err() {
                    return;
                }
                match records.list::<WorkoutPlan>(RecordCategory::WorkoutPlans).await {
                    Ok(items) => set_plans.set(items),
                    Err(e) => set_notification
                        .set(Some((format!("Failed to load plans: {}", e.message), true))),
                }
            });
        }
    };

    let state = session_ctx.state;
    Effect::new({
        let load_plans = load_plans.clone();
        move |_| {
            if state.get().is_authenticated() {
                load_plans();
            } else {
                set_plans.set(Vec::new());
            }
        }
    });

    RecordWatcher::mount(records.clone(), RecordCategory::WorkoutPlans, set_plans);

    let on_submit = {
        let records = records.clone();
        let load_plans = load_plans.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(plan) = form.validate() else {
                return;
            };

            set_submitting.set(true);
            let records = records.clone();
            let load_plans = load_plans.clone();
            spawn_local(async move {
                match records.append(RecordCategory::WorkoutPlans, &plan).await {
                    Ok(_) => {
                        set_notification.set(Some(("Workout plan created".to_string(), false)));
                        form.reset();
                        load_plans();
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
                match records.delete(RecordCategory::WorkoutPlans, &id).await {
                    Ok(()) => {
                        set_notification.set(Some(("Plan deleted".to_string(), false)));
                        set_plans.update(|list| list.retain(|r| r.id != id));
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
                <h2 class="card-title text-2xl">"Create Workout Plan"</h2>
                <form on:submit=on_submit class="space-y-4">
                    <div class="form-control">
                        <label class="label" for="workout-type">
                            <span class="label-text">"Workout Type"</span>
                        </label>
                        <select
                            id="workout-type"
                            class="select select-bordered w-full"
                            on:change=move |ev| form.workout_type.set(event_target_value(&ev))
                            prop:value=form.workout_type
                        >
                            <option value="">"Select Workout Type"</option>
                            <option value="strength">"Strength Training"</option>
                            <option value="cardio">"Cardio"</option>
                            <option value="flexibility">"Flexibility"</option>
                        </select>
                        <Show when=move || !form.type_error.get().is_empty()>
                            <label class="label">
                                <span class="label-text-alt text-error">{move || form.type_error.get()}</span>
                            </label>
                        </Show>
                    </div>

                    <div class="form-control">
                        <label class="label" for="duration">
                            <span class="label-text">"Duration (minutes)"</span>
                        </label>
                        <input
                            id="duration"
                            type="number"
                            class="input input-bordered w-full"
                            on:input=move |ev| form.duration.set(event_target_value(&ev))
                            prop:value=form.duration
                        />
                        <Show when=move || !form.duration_error.get().is_empty()>
                            <label class="label">
                                <span class="label-text-alt text-error">{move || form.duration_error.get()}</span>
                            </label>
                        </Show>
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Muscle Groups"</span>
                        </label>
                        <div class="flex flex-wrap gap-4">
                            {MuscleGroup::ALL
                                .into_iter()
                                .map(|group| {
                                    view! {
                                        <label class="label cursor-pointer gap-2">
                                            <input
                                                type="checkbox"
                                                class="checkbox checkbox-primary checkbox-sm"
                                                prop:checked=move || form.has_group(group)
                                                on:change=move |_| form.toggle_group(group)
                                            />
                                            <span class="label-text">{group.label()}</span>
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <Show when=move || !form.groups_error.get().is_empty()>
                            <label class="label">
                                <span class="label-text-alt text-error">{move || form.groups_error.get()}</span>
                            </label>
                        </Show>
                    </div>

                    <button class="btn btn-primary" disabled=move || submitting.get()>
                        "Create Workout Plan"
                    </button>
                </form>

                <div class="divider">"Your Plans"</div>

                <Show when=move || plans.with(|p| p.is_empty())>
                    <p class="text-base-content/50 text-sm">"No plans yet."</p>
                </Show>
                <ul class="divide-y divide-base-200">
                    <For
                        each=move || plans.get()
                        key=|record| record.id.clone()
                        children={
                            let on_delete = on_delete.clone();
                            move |record| {
                                let on_delete = on_delete.clone();
                                let id = record.id.clone();
                                let groups = record
                                    .data
                                    .muscle_groups
                                    .iter()
                                    .map(|g| g.label())
                                    .collect::<Vec<_>>()
                                    .join(", ");
                                view! {
                                    <li class="py-3 flex items-center justify-between">
                                        <div>
                                            <p class="font-medium">
                                                {record.data.workout_type.label()}
                                                " · " {record.data.duration_minutes} " min"
                                            </p>
                                            <p class="text-sm text-base-content/60">{groups}</p>
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

// =========================================================
// 进度记录（仅会话内，不入库）
// =========================================================

#[derive(Clone, PartialEq)]
struct ProgressEntry {
    exercise: String,
    sets: u32,
    reps: u32,
    weight: f64,
    logged_at: Timestamp,
}

#[component]
fn TrackProgressTab() -> impl IntoView {
    let (history, set_history) = signal(Vec::<ProgressEntry>::new());
    let exercise = RwSignal::new(String::new());
    let sets = RwSignal::new(String::new());
    let reps = RwSignal::new(String::new());
    let weight = RwSignal::new(String::new());
    let (error_msg, set_error_msg) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let fields = [exercise, sets, reps, weight];
        if fields.iter().any(|f| f.get_untracked().trim().is_empty()) {
            set_error_msg.set("All fields are required".to_string());
            return;
        }
        set_error_msg.set(String::new());

        let entry = ProgressEntry {
            exercise: exercise.get_untracked(),
            sets: sets.get_untracked().trim().parse().unwrap_or_default(),
            reps: reps.get_untracked().trim().parse().unwrap_or_default(),
            weight: weight.get_untracked().trim().parse().unwrap_or_default(),
            logged_at: now_timestamp(),
        };
        set_history.update(|list| list.push(entry));

        exercise.set(String::new());
        sets.set(String::new());
        reps.set(String::new());
        weight.set(String::new());
    };

    let number_field = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label">
                    <span class="label-text">{label}</span>
                </label>
                <input
                    type="number"
                    class="input input-bordered w-full"
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=value
                />
            </div>
        }
    };

    view! {
        <div class="card bg-base-100 shadow-md">
            <div class="card-body">
                <h2 class="card-title text-2xl">"Track Workout Progress"</h2>

                <form on:submit=on_submit class="space-y-4">
                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Exercise"</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                on:input=move |ev| exercise.set(event_target_value(&ev))
                                prop:value=exercise
                            />
                        </div>
                        {number_field("Sets", sets)}
                        {number_field("Reps", reps)}
                        {number_field("Weight (lbs)", weight)}
                    </div>

                    <Show when=move || !error_msg.get().is_empty()>
                        <p class="text-error text-sm">{move || error_msg.get()}</p>
                    </Show>

                    <button class="btn btn-primary">"Log Progress"</button>
                </form>

                <div class="divider">"Workout History"</div>

                <Show when=move || history.with(|h| h.is_empty())>
                    <p class="text-base-content/50 text-sm">
                        "Nothing logged this session yet."
                    </p>
                </Show>
                <ul class="divide-y divide-base-200">
                    <For
                        each=move || history.get().into_iter().enumerate()
                        key=|(i, _)| *i
                        children=move |(_, entry)| {
                            view! {
                                <li class="py-3">
                                    <p class="font-medium">{entry.exercise.clone()}</p>
                                    <p class="text-sm text-base-content/60">
                                        {entry.sets} " sets x " {entry.reps} " reps @ "
                                        {entry.weight} " lbs"
                                    </p>
                                    <p class="text-sm text-base-content/40">
                                        {entry.logged_at.format_short()}
                                    </p>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </div>
    }
}

// =========================================================
// 训练调整
// =========================================================

#[component]
fn AdjustTab() -> impl IntoView {
    let records = records_service();

    let difficulty = RwSignal::new(3u8);
    let feedback = RwSignal::new(String::new());
    let (feedback_error, set_feedback_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

    let on_submit = {
        let records = records.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let text = feedback.get_untracked();
            if let Some(error) = validate_feedback(&text) {
                set_feedback_error.set(error);
                return;
            }
            set_feedback_error.set(String::new());

            let adjustment = AdjustmentFeedback {
                difficulty: difficulty.get_untracked(),
                feedback: text,
            };

            set_submitting.set(true);
            let records = records.clone();
            spawn_local(async move {
                match records
                    .append(RecordCategory::Adjustments, &adjustment)
                    .await
                {
                    Ok(_) => {
                        set_notification.set(Some(("Adjustment submitted".to_string(), false)));
                        difficulty.set(3);
                        feedback.set(String::new());
                    }
                    Err(e) => set_notification.set(Some((e.message, true))),
                }
                set_submitting.set(false);
            });
        }
    };

    view! {
        <Toast notification=notification set_notification=set_notification />

        <div class="card bg-base-100 shadow-md">
            <div class="card-body">
                <h2 class="card-title text-2xl">"Adjust Workout"</h2>
                <form on:submit=on_submit class="space-y-4">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Workout Difficulty"</span>
                        </label>
                        <div class="flex items-center gap-2">
                            {(1u8..=5)
                                .map(|value| {
                                    view! {
                                        <button
                                            type="button"
                                            class=move || {
                                                if difficulty.get() == value {
                                                    "btn btn-circle btn-primary btn-sm"
                                                } else {
                                                    "btn btn-circle btn-ghost btn-sm"
                                                }
                                            }
                                            on:click=move |_| difficulty.set(value)
                                        >
                                            {value}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label" for="feedback">
                            <span class="label-text">"Feedback"</span>
                        </label>
                        <textarea
                            id="feedback"
                            rows="4"
                            class="textarea textarea-bordered w-full"
                            on:input=move |ev| feedback.set(event_target_value(&ev))
                            prop:value=feedback
                        ></textarea>
                        <Show when=move || !feedback_error.get().is_empty()>
                            <label class="label">
                                <span class="label-text-alt text-error">{move || feedback_error.get()}</span>
                            </label>
                        </Show>
                    </div>

                    <button class="btn btn-primary" disabled=move || submitting.get()>
                        "Submit Adjustment"
                    </button>
                </form>
            </div>
        </div>
    }
}

// =========================================================
// 休息日
// =========================================================

#[component]
fn RestDaysTab() -> impl IntoView {
    let records = records_service();

    let selected = RwSignal::new(Vec::<Weekday>::new());
    let (submitting, set_submitting) = signal(false);
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

    let toggle_day = move |day: Weekday| {
        selected.update(|days| {
            if let Some(pos) = days.iter().position(|d| *d == day) {
                days.remove(pos);
            } else {
                days.push(day);
            }
        });
    };

    let on_submit = {
        let records = records.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let selection = RestDaySelection {
                days: selected.get_untracked(),
            };

            set_submitting.set(true);
            let records = records.clone();
            spawn_local(async move {
                match records.append(RecordCategory::RestDays, &selection).await {
                    Ok(_) => set_notification.set(Some(("Rest days saved".to_string(), false))),
                    Err(e) => set_notification.set(Some((e.message, true))),
                }
                set_submitting.set(false);
            });
        }
    };

    view! {
        <Toast notification=notification set_notification=set_notification />

        <div class="card bg-base-100 shadow-md">
            <div class="card-body">
                <h2 class="card-title text-2xl">"Set Rest Days"</h2>
                <form on:submit=on_submit class="space-y-4">
                    <div class="grid grid-cols-7 gap-2">
                        {Weekday::ALL
                            .into_iter()
                            .map(|day| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if selected.with(|days| days.contains(&day)) {
                                                "btn btn-primary btn-sm"
                                            } else {
                                                "btn btn-ghost btn-sm"
                                            }
                                        }
                                        on:click=move |_| toggle_day(day)
                                    >
                                        {day.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button class="btn btn-primary" disabled=move || submitting.get()>
                        "Set Rest Days"
                    </button>
                </form>

                <div class="mt-4">
                    <h3 class="text-lg font-semibold mb-2">"Why Rest Days Matter"</h3>
                    <p class="text-base-content/70">
                        "Rest days are crucial for muscle recovery and growth. They help prevent burnout and reduce the risk of injury. Aim for 1-2 rest days per week, depending on your workout intensity and fitness level."
                    </p>
                </div>
            </div>
        </div>
    }
}

// =========================================================
// 动作变式
// =========================================================

struct Exercise {
    name: &'static str,
    variations: [&'static str; 3],
}

static EXERCISES: [Exercise; 2] = [
    Exercise {
        name: "Push-ups",
        variations: ["Standard Push-ups", "Wide Push-ups", "Diamond Push-ups"],
    },
    Exercise {
        name: "Squats",
        variations: ["Bodyweight Squats", "Jump Squats", "Sumo Squats"],
    },
];

#[component]
fn VariationsTab() -> impl IntoView {
    let records = records_service();

    let (selected, set_selected) = signal(Option::<usize>::None);
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

    let on_select = {
        let records = records.clone();
        move |exercise: &'static str, variation: &'static str| {
            let selection = VariationSelection {
                exercise: exercise.to_string(),
                variation: variation.to_string(),
            };
            let records = records.clone();
            spawn_local(async move {
                match records.append(RecordCategory::Variations, &selection).await {
                    Ok(_) => set_notification
                        .set(Some((format!("Selected {variation}"), false))),
                    Err(e) => set_notification.set(Some((e.message, true))),
                }
            });
        }
    };

    view! {
        <Toast notification=notification set_notification=set_notification />

        <div class="card bg-base-100 shadow-md">
            <div class="card-body">
                <h2 class="card-title text-2xl">"Exercise Variations"</h2>

                <div class="grid grid-cols-2 gap-4">
                    {EXERCISES
                        .iter()
                        .enumerate()
                        .map(|(idx, exercise)| {
                            view! {
                                <div class="card bg-base-200">
                                    <div class="card-body">
                                        <h3 class="text-lg font-semibold">{exercise.name}</h3>
                                        <button
                                            class="btn btn-primary btn-sm"
                                            on:click=move |_| set_selected.set(Some(idx))
                                        >
                                            "View Variations"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                {move || {
                    selected.get().map(|idx| {
                        let exercise = &EXERCISES[idx];
                        let on_select = on_select.clone();
                        view! {
                            <div class="mt-6">
                                <h3 class="text-xl font-semibold mb-4">
                                    {exercise.name} " Variations"
                                </h3>
                                <div class="grid grid-cols-3 gap-4">
                                    {exercise
                                        .variations
                                        .iter()
                                        .map(|variation| {
                                            let variation: &'static str = *variation;
                                            let on_select = on_select.clone();
                                            view! {
                                                <div class="card bg-base-200">
                                                    <div class="card-body items-center">
                                                        <h4 class="font-semibold">{variation}</h4>
                                                        <button
                                                            class="btn btn-ghost btn-sm"
                                                            on:click=move |_| on_select(exercise.name, variation)
                                                        >
                                                            "Select"
                                                        </button>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                }}
            </div>
        </div>
    }
}
