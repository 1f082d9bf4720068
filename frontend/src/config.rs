//! 服务端点配置
//!
//! 三个外部服务的 base URL。默认走同源反向代理路径，
//! 可通过 LocalStorage 覆盖（方便本地联调时指向别的部署）。

use crate::web::LocalStorage;

const STORAGE_IDENTITY_URL_KEY: &str = "dreams_identity_url";
const STORAGE_RECORDS_URL_KEY: &str = "dreams_records_url";
const STORAGE_CHAT_URL_KEY: &str = "dreams_chat_url";

const DEFAULT_IDENTITY_URL: &str = "/api/identity";
const DEFAULT_RECORDS_URL: &str = "/api/records";
// 聊天端点独立部署（Flask 开发服务器的默认端口）
const DEFAULT_CHAT_URL: &str = "http://localhost:5000";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub identity_base_url: String,
    pub records_base_url: String,
    pub chat_base_url: String,
}

impl AppConfig {
    /// 加载配置：LocalStorage 覆盖优先，否则使用默认值
    pub fn load() -> Self {
        Self {
            identity_base_url: load_url(STORAGE_IDENTITY_URL_KEY, DEFAULT_IDENTITY_URL),
            records_base_url: load_url(STORAGE_RECORDS_URL_KEY, DEFAULT_RECORDS_URL),
            chat_base_url: load_url(STORAGE_CHAT_URL_KEY, DEFAULT_CHAT_URL),
        }
    }
}

fn load_url(key: &str, default: &str) -> String {
    let url = LocalStorage::get(key).unwrap_or_else(|| default.to_string());
    url.trim_end_matches('/').to_string()
}
