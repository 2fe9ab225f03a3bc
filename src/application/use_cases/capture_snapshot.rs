use crate::domain::camera::FrameSource;
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// カメラから1枚だけ撮影してファイルに保存する
///
/// カメラの接続確認用。
pub struct CaptureSnapshotUseCase {
    frame_source: Arc<dyn FrameSource>,
}

impl CaptureSnapshotUseCase {
    pub fn new(frame_source: Arc<dyn FrameSource>) -> Self {
        Self { frame_source }
    }

    /// 保存したバイト数を返す
    pub async fn execute(&self, output: &Path) -> anyhow::Result<usize> {
        let frame = self
            .frame_source
            .capture()
            .await
            .context("Camera returned no frame")?;

        tokio::fs::write(output, frame.as_bytes())
            .await
            .with_context(|| format!("Failed to write snapshot to {}", output.display()))?;

        info!(path = %output.display(), bytes = frame.len(), "Snapshot saved");
        Ok(frame.len())
    }
}
