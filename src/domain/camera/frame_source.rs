use super::Frame;
use async_trait::async_trait;

/// 1回の呼び出しで1枚の静止画を取得するカメラ
///
/// 失敗はすべて `None` に畳み込まれ、呼び出し側にエラーは伝わらない。
#[async_trait]
pub trait FrameSource: Send + Sync {
    async fn capture(&self) -> Option<Frame>;
}
