use super::{HardwareError, LightColor};
use async_trait::async_trait;

/// 表示灯ドライバーのトレイト
///
/// 実機のドライバーはこのトレイトを実装して差し替える。
#[async_trait]
pub trait LightDriver: Send + Sync {
    /// ログ出力用のドライバー名
    fn name(&self) -> &str;

    /// 表示灯の色を切り替える
    async fn set_color(&self, color: LightColor) -> Result<(), HardwareError>;
}
