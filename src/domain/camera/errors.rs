use std::time::Duration;
use thiserror::Error;

/// キャプチャ失敗の理由
///
/// `FrameSource` の外には出さず、ログに残して「フレームなし」として扱う。
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Failed to spawn capture command '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Capture command exited with {status}")]
    NonZeroExit { status: std::process::ExitStatus },

    #[error("Capture command produced no output")]
    EmptyOutput,

    #[error("Capture command timed out after {0:?}")]
    TimedOut(Duration),

    #[error("IO error while capturing: {0}")]
    Io(#[from] std::io::Error),
}
