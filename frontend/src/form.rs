//! 声明式表单草稿
//!
//! 一套字段规格 (`FieldSpec`) 驱动一个表单：字段名 → 当前文本值，
//! 字段名 → 校验错误（空串 = 合法）。取代原型里逐表单复制粘贴的
//! 状态管理。挂载时创建，成功提交后整体重置。

use leptos::prelude::*;

use dreams_shared::validate::{FieldValidator, validate_confirm};

/// 字段校验规则
#[derive(Clone, Copy)]
pub enum Rule {
    /// 独立字段的纯校验器
    Field(FieldValidator),
    /// 必须与另一字段的当前值一致（确认密码）
    Matches { other: &'static str },
}

/// 声明式字段规格
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    /// HTML input type: "email" / "password" / "number" / "tel" / "text"
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub rule: Rule,
}

/// 表单草稿
///
/// 信号存放在 `StoredValue` 中，使草稿实现 `Copy`，
/// 可以直接塞进事件闭包（参照 RwSignal 字段结构体的用法）。
#[derive(Clone, Copy)]
pub struct FormDraft {
    specs: &'static [FieldSpec],
    values: StoredValue<Vec<RwSignal<String>>>,
    errors: StoredValue<Vec<RwSignal<String>>>,
}

impl FormDraft {
    pub fn new(specs: &'static [FieldSpec]) -> Self {
        let values: Vec<_> = specs.iter().map(|_| RwSignal::new(String::new())).collect();
        let errors: Vec<_> = specs.iter().map(|_| RwSignal::new(String::new())).collect();
        Self {
            specs,
            values: StoredValue::new(values),
            errors: StoredValue::new(errors),
        }
    }

    fn index(&self, name: &str) -> usize {
        self.specs
            .iter()
            .position(|s| s.name == name)
            .unwrap_or_else(|| panic!("unknown form field: {name}"))
    }

    pub fn specs(&self) -> &'static [FieldSpec] {
        self.specs
    }

    pub fn spec(&self, name: &str) -> &'static FieldSpec {
        &self.specs[self.index(name)]
    }

    /// 字段当前值的信号
    pub fn value(&self, name: &str) -> RwSignal<String> {
        let idx = self.index(name);
        self.values.with_value(|v| v[idx])
    }

    /// 字段错误消息的信号（空串 = 合法）
    pub fn error(&self, name: &str) -> RwSignal<String> {
        let idx = self.index(name);
        self.errors.with_value(|e| e[idx])
    }

    /// 每次击键：写入新值并立即校验该字段
    pub fn input(&self, name: &str, new_value: String) {
        let idx = self.index(name);
        self.values.with_value(|v| v[idx].set(new_value));
        self.validate_index(idx);
    }

    fn validate_index(&self, idx: usize) -> bool {
        let spec = &self.specs[idx];
        let value = self.values.with_value(|v| v[idx].get_untracked());
        let error = match spec.rule {
            Rule::Field(validator) => validator(&value),
            Rule::Matches { other } => {
                let other_value = self.value(other).get_untracked();
                validate_confirm(&other_value, &value)
            }
        };
        let message = error.unwrap_or_default();
        let ok = message.is_empty();
        self.errors.with_value(|e| e[idx].set(message));
        ok
    }

    /// 提交前的聚合校验：逐字段复跑规则，同时显示所有错误
    ///
    /// 必须复跑而不是只看已有错误：字段可能停留在非法初值上，
    /// 从未触发过 change 事件。
    pub fn validate_all(&self) -> bool {
        let mut all_ok = true;
        for idx in 0..self.specs.len() {
            // 不短路：每个字段的错误都要同时显示
            if !self.validate_index(idx) {
                all_ok = false;
            }
        }
        all_ok
    }

    /// 重置为初始状态（成功提交后调用）
    pub fn reset(&self) {
        self.values
            .with_value(|v| v.iter().for_each(|s| s.set(String::new())));
        self.errors
            .with_value(|e| e.iter().for_each(|s| s.set(String::new())));
    }
}

#[cfg(test)]
mod tests;
