//! 训练计划表单状态
//!
//! 将零散的 signal 整合为 `PlanFormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 聚合校验与到记录载荷的转换
//!
//! 使用 `RwSignal` 因为它实现了 `Copy`，适合直接塞进事件闭包。

use leptos::prelude::*;

use dreams_shared::validate::validate_duration;
use dreams_shared::{MuscleGroup, WorkoutPlan, WorkoutType};

#[derive(Clone, Copy)]
pub struct PlanFormState {
    /// 选中的训练类型（空串 = 未选择）
    pub workout_type: RwSignal<String>,
    pub duration: RwSignal<String>,
    pub muscle_groups: RwSignal<Vec<MuscleGroup>>,

    pub type_error: RwSignal<String>,
    pub duration_error: RwSignal<String>,
    pub groups_error: RwSignal<String>,
}

impl PlanFormState {
    pub fn new() -> Self {
        Self {
            workout_type: RwSignal::new(String::new()),
            duration: RwSignal::new(String::new()),
            muscle_groups: RwSignal::new(Vec::new()),
            type_error: RwSignal::new(String::new()),
            duration_error: RwSignal::new(String::new()),
            groups_error: RwSignal::new(String::new()),
        }
    }

    /// 勾选/取消一个肌群
    pub fn toggle_group(&self, group: MuscleGroup) {
        self.muscle_groups.update(|groups| {
            if let Some(pos) = groups.iter().position(|g| *g == group) {
                groups.remove(pos);
            } else {
                groups.push(group);
            }
        });
    }

    pub fn has_group(&self, group: MuscleGroup) -> bool {
        self.muscle_groups.with(|groups| groups.contains(&group))
    }

    /// 聚合校验；全部通过时转换为记录载荷，否则同时显示所有错误
    pub fn validate(&self) -> Option<WorkoutPlan> {
        let mut ok = true;

        let workout_type = match self.workout_type.get_untracked().as_str() {
            "strength" => Some(WorkoutType::Strength),
            "cardio" => Some(WorkoutType::Cardio),
            "flexibility" => Some(WorkoutType::Flexibility),
            _ => None,
        };
        if workout_type.is_none() {
            self.type_error.set("Workout type is required".to_string());
            ok = false;
        } else {
            self.type_error.set(String::new());
        }

        let duration_value = self.duration.get_untracked();
        match validate_duration(&duration_value) {
            Some(error) => {
                self.duration_error.set(error);
                ok = false;
            }
            None => self.duration_error.set(String::new()),
        }

        let groups = self.muscle_groups.get_untracked();
        if groups.is_empty() {
            self.groups_error
                .set("At least one muscle group must be selected".to_string());
            ok = false;
        } else {
            self.groups_error.set(String::new());
        }

        if !ok {
            return None;
        }
        Some(WorkoutPlan {
            workout_type: workout_type?,
            duration_minutes: duration_value.trim().parse().unwrap_or_default(),
            muscle_groups: groups,
        })
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.workout_type.set(String::new());
        self.duration.set(String::new());
        self.muscle_groups.set(Vec::new());
        self.type_error.set(String::new());
        self.duration_error.set(String::new());
        self.groups_error.set(String::new());
    }
}

impl Default for PlanFormState {
    fn default() -> Self {
        Self::new()
    }
}
