//! 聊天会话模块
//!
//! 对话是追加式的：用户条目在发送意图时立刻进入对话，
//! 助手条目只有在外部调用成功返回后才追加；失败不产生助手条目。
//! 用户消息另外回写到按用户的 `chatHistory` 集合（尽力而为）。

use dreams_shared::error::GatewayResult;
use dreams_shared::{ChatEntry, ChatMessageRecord, RecordCategory};

use crate::console_log;
use crate::gateway::{ChatClient, RecordStore};
use crate::records::{RecordService, SessionSource};

/// 发送一条聊天消息
///
/// 流程：
/// 1. 空白消息直接忽略
/// 2. 调用时刻解析 uid——匿名会话立即失败，对话不变
/// 3. 追加用户条目（立即，先于一切网络调用）
/// 4. 回写用户消息到记录存储；失败只记日志，不阻断聊天
/// 5. 外部调用成功后追加助手条目；失败时错误交由调用方展示
pub async fn send_message<C, A, S>(
    client: &C,
    records: &RecordService<A, S>,
    message: &str,
    push: impl Fn(ChatEntry),
) -> GatewayResult<()>
where
    C: ChatClient + ?Sized,
    A: SessionSource,
    S: RecordStore,
{
    let text = message.trim();
    if text.is_empty() {
        return Ok(());
    }

    let uid = records.current_uid()?;

    push(ChatEntry::user(text));

    if let Err(e) = records
        .append(
            RecordCategory::ChatMessages,
            &ChatMessageRecord {
                message: text.to_string(),
            },
        )
        .await
    {
        console_log!("[Chat] Failed to persist user message: {e}");
    }

    let reply = client.send(text, &uid).await?;
    push(ChatEntry::assistant(reply));
    Ok(())
}

#[cfg(test)]
mod tests;
