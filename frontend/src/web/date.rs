//! JS 时钟封装
//!
//! `Timestamp` 本身是纯数据（见 dreams-shared），获取"现在"
//! 依赖浏览器时钟，所以放在前端侧。

use dreams_shared::Timestamp;

/// 当前时间的毫秒时间戳
#[inline]
pub fn now_timestamp() -> Timestamp {
    Timestamp::new(js_sys::Date::now() as i64)
}
