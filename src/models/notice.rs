use parking_lot::RwLock;

/// 进程内通知流
///
/// 消息仅保存在内存中，重启后消失。
#[derive(Debug, Default)]
pub struct NoticeLog {
    messages: RwLock<Vec<String>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, message: impl Into<String>) {
        self.messages.write().push(message.into());
    }

    pub fn list(&self) -> Vec<String> {
        self.messages.read().clone()
    }

    pub fn clear(&self) {
        self.messages.write().clear();
    }
}
