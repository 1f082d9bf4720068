//! 表单字段校验模块
//!
//! 纯函数校验器：输入字段当前文本，返回 `Some(错误消息)` 或 `None`。
//! 每次击键都会执行，提交前还会聚合复跑一遍（字段可能从未触发过
//! change 事件就停留在非法初值上）。

/// 字段校验器签名，供声明式表单规格引用
pub type FieldValidator = fn(&str) -> Option<String>;

// =========================================================
// 邮箱 / 密码 / 手机号
// =========================================================

/// 邮箱形如 `local@domain.tld`（锚定匹配，任意空白即非法）
fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

pub fn validate_email(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Email is required".to_string())
    } else if !is_valid_email(value) {
        Some("Invalid email format".to_string())
    } else {
        None
    }
}

/// 严格密码规则（注册 / 登录）：至少 8 字符、一个大写字母、一个数字
pub fn validate_password_strict(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Password is required".to_string());
    }
    let long_enough = value.chars().count() >= 8;
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if long_enough && has_upper && has_digit {
        None
    } else {
        Some(
            "Password must have at least 8 characters, one uppercase letter, and one number"
                .to_string(),
        )
    }
}

/// 简化密码规则（重置表单）：仅要求最小长度
pub fn validate_password_min(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Password is required".to_string())
    } else if value.chars().count() < 8 {
        Some("Password must have at least 8 characters".to_string())
    } else {
        None
    }
}

/// 确认密码必须与密码字段的当前值一致
pub fn validate_confirm(password: &str, confirm: &str) -> Option<String> {
    if confirm.is_empty() {
        Some("Confirm password is required".to_string())
    } else if confirm != password {
        Some("Passwords do not match".to_string())
    } else {
        None
    }
}

/// 手机号：剔除非数字字符后必须恰为 10 位
pub fn validate_phone(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Phone number is required".to_string())
    } else if value.chars().filter(|c| c.is_ascii_digit()).count() != 10 {
        Some("Invalid phone number".to_string())
    } else {
        None
    }
}

// =========================================================
// 数值字段
// =========================================================

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// 闭区间数值校验（边界值合法）
fn closed_range(value: &str, label: &str, min: f64, max: f64) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{label} is required"));
    }
    let Some(n) = parse_number(value) else {
        return Some(format!("{label} must be a number"));
    };
    if n < min || n > max {
        return Some(format!("{label} must be between {min} and {max}"));
    }
    None
}

fn positive(value: &str, label: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{label} is required"));
    }
    let Some(n) = parse_number(value) else {
        return Some(format!("{label} must be a number"));
    };
    if n <= 0.0 {
        return Some(format!("{label} must be greater than 0"));
    }
    None
}

pub fn validate_age(value: &str) -> Option<String> {
    closed_range(value, "Age", 13.0, 120.0)
}

pub fn validate_weight(value: &str) -> Option<String> {
    closed_range(value, "Weight", 30.0, 300.0)
}

pub fn validate_height(value: &str) -> Option<String> {
    closed_range(value, "Height", 100.0, 250.0)
}

pub fn validate_calories(value: &str) -> Option<String> {
    positive(value, "Calories")
}

pub fn validate_duration(value: &str) -> Option<String> {
    positive(value, "Duration")
}

// =========================================================
// 文本字段
// =========================================================

pub fn validate_meal(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("Meal is required".to_string())
    } else {
        None
    }
}

pub fn validate_feedback(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("Feedback is required".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests;
