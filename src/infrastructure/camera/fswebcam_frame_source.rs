use crate::config::CameraConfig;
use crate::domain::camera::{CaptureError, Frame, FrameSource};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

/// `fswebcam` で1枚ずつ撮影するフレームソース
///
/// 呼び出しごとに短命のプロセスを1つ起動し、標準出力からJPEGを受け取る。
pub struct FswebcamFrameSource {
    config: CameraConfig,
}

impl FswebcamFrameSource {
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }

    /// `fswebcam [-d dev] -r 320x240 --no-banner --jpeg 85 -D 0 -`
    pub fn capture_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(device) = &self.config.device {
            args.push("-d".to_string());
            args.push(device.clone());
        }
        args.extend([
            "-r".to_string(),
            self.config.resolution.clone(),
            "--no-banner".to_string(),
            "--jpeg".to_string(),
            self.config.jpeg_quality.to_string(),
            "-D".to_string(),
            "0".to_string(),
            "-".to_string(),
        ]);
        args
    }

    async fn run_capture(&self) -> Result<Frame, CaptureError> {
        // kill_on_drop: クライアント切断でストリームが破棄されたら撮影中のプロセスも止める
        let child = Command::new(&self.config.program)
            .args(self.capture_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| CaptureError::SpawnFailed {
                program: self.config.program.clone(),
                source,
            })?;

        let output = match self.config.capture_timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| CaptureError::TimedOut(limit))??,
            None => child.wait_with_output().await?,
        };

        if !output.status.success() {
            return Err(CaptureError::NonZeroExit {
                status: output.status,
            });
        }
        if output.stdout.is_empty() {
            return Err(CaptureError::EmptyOutput);
        }

        Ok(Frame::from(output.stdout))
    }
}

#[async_trait]
impl FrameSource for FswebcamFrameSource {
    async fn capture(&self) -> Option<Frame> {
        match self.run_capture().await {
            Ok(frame) => {
                debug!(bytes = frame.len(), "Captured frame");
                Some(frame)
            }
            Err(e) => {
                warn!(program = %self.config.program, "Camera capture failed: {}", e);
                None
            }
        }
    }
}
