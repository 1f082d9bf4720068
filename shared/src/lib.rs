//! DREAMS 共享领域模型
//!
//! 前端与外部服务契约共用的纯数据层：
//! - 会话与用户身份 (`Session` / `UserIdentity`)
//! - 各分类的记录载荷 (`MealEntry`, `WorkoutPlan`, ...)
//! - 聊天记录条目 (`ChatEntry`)
//!
//! 本 crate 不依赖 DOM / JS，可在本地目标上直接测试。

use serde::{Deserialize, Serialize};

pub mod date;
pub mod error;
pub mod protocol;
pub mod validate;

pub use date::Timestamp;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 记录服务鉴权头（Bearer 会话令牌）
pub const HEADER_AUTHORIZATION: &str = "Authorization";

pub const COLLECTION_NUTRITION: &str = "nutritionHistory";
pub const COLLECTION_WORKOUT: &str = "workoutHistory";
pub const COLLECTION_ADJUSTMENT: &str = "adjustmentHistory";
pub const COLLECTION_REST_DAYS: &str = "restDays";
pub const COLLECTION_VARIATIONS: &str = "variationSelections";
pub const COLLECTION_CHAT: &str = "chatHistory";

// =========================================================
// 会话与身份 (Session & Identity)
// =========================================================

/// 已认证用户的身份信息
///
/// `uid` 是外部身份服务签发的稳定标识，所有按用户存储的记录
/// 都以它作为命名空间。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub uid: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl UserIdentity {
    /// 用于界面展示的名称：优先昵称，缺省回退到邮箱
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// 当前会话：匿名或已认证
///
/// 生命周期：每当身份流产生一次发射就整体替换；应用其余部分只读。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(UserIdentity),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    /// 当前用户的 uid；匿名会话返回 None
    pub fn uid(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(identity) => Some(&identity.uid),
        }
    }

    pub fn identity(&self) -> Option<&UserIdentity> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(identity) => Some(identity),
        }
    }
}

/// 联合登录的第三方提供方引用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthProvider {
    Google,
    Facebook,
    Github,
}

impl AuthProvider {
    /// 身份服务使用的 provider id
    pub fn provider_id(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google.com",
            AuthProvider::Facebook => "facebook.com",
            AuthProvider::Github => "github.com",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthProvider::Google => "Google",
            AuthProvider::Facebook => "Facebook",
            AuthProvider::Github => "GitHub",
        }
    }
}

// =========================================================
// 记录分类与载荷 (Record Categories & Payloads)
// =========================================================

/// 按用户存储的记录分类
///
/// 每个分类对应文档存储中的一个集合名。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordCategory {
    Meals,
    WorkoutPlans,
    Adjustments,
    RestDays,
    Variations,
    ChatMessages,
}

impl RecordCategory {
    pub fn collection(&self) -> &'static str {
        match self {
            RecordCategory::Meals => COLLECTION_NUTRITION,
            RecordCategory::WorkoutPlans => COLLECTION_WORKOUT,
            RecordCategory::Adjustments => COLLECTION_ADJUSTMENT,
            RecordCategory::RestDays => COLLECTION_REST_DAYS,
            RecordCategory::Variations => COLLECTION_VARIATIONS,
            RecordCategory::ChatMessages => COLLECTION_CHAT,
        }
    }
}

/// 一条已存储的记录：服务端分配的 id + 创建时间 + 载荷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord<T> {
    pub id: String,
    pub created_at: Timestamp,
    #[serde(flatten)]
    pub data: T,
}

/// 餐食记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    pub meal: String,
    pub calories: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    Strength,
    Cardio,
    Flexibility,
}

impl WorkoutType {
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "Strength Training",
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Flexibility => "Flexibility",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Arms,
    Shoulders,
    Core,
}

impl MuscleGroup {
    pub const ALL: [MuscleGroup; 6] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Legs,
        MuscleGroup::Arms,
        MuscleGroup::Shoulders,
        MuscleGroup::Core,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Core => "Core",
        }
    }
}

/// 训练计划
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub workout_type: WorkoutType,
    pub duration_minutes: u32,
    pub muscle_groups: Vec<MuscleGroup>,
}

/// 训练难度反馈（难度 1..=5）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentFeedback {
    pub difficulty: u8,
    pub feedback: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

/// 休息日选择
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestDaySelection {
    pub days: Vec<Weekday>,
}

/// 动作变式选择
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationSelection {
    pub exercise: String,
    pub variation: String,
}

/// 聊天消息的持久化载荷（仅用户消息入库）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessageRecord {
    pub message: String,
}

// =========================================================
// 聊天记录 (Chat Transcript)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatOrigin {
    User,
    Assistant,
}

/// 一条聊天记录。一旦追加到对话中就不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub origin: ChatOrigin,
    pub text: String,
}

impl ChatEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            origin: ChatOrigin::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            origin: ChatOrigin::Assistant,
            text: text.into(),
        }
    }
}
