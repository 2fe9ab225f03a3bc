//! MJPEGストリーム生成
//!
//! `FrameSource` から1枚ずつ取得し、マルチパート形式のチャンク列として流し続ける。
//! 終了はHTTP側がボディを破棄したとき（クライアント切断）のみ。

use super::FrameSource;
use futures::stream::{self, Stream};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// 1クライアント分のストリーム状態
struct StreamSession {
    source: Arc<dyn FrameSource>,
    retry_interval: Duration,
    frames_sent: u64,
    empty_captures: u64,
}

impl Drop for StreamSession {
    fn drop(&mut self) {
        info!(
            frames_sent = self.frames_sent,
            empty_captures = self.empty_captures,
            "MJPEG stream closed"
        );
    }
}

/// 無限に続くMJPEGチャンク列を作る
///
/// フレームがあれば即座に1チャンクを返し、なければ `retry_interval` 待ってから再取得する。
/// 再試行回数の上限はない。
pub fn mjpeg_stream(
    source: Arc<dyn FrameSource>,
    retry_interval: Duration,
) -> impl Stream<Item = Vec<u8>> + Send + 'static {
    info!(
        retry_interval_ms = retry_interval.as_millis() as u64,
        "MJPEG stream opened"
    );

    let session = StreamSession {
        source,
        retry_interval,
        frames_sent: 0,
        empty_captures: 0,
    };

    stream::unfold(session, |mut session| async move {
        loop {
            match session.source.capture().await {
                Some(frame) => {
                    session.frames_sent += 1;
                    return Some((frame.to_multipart_chunk(), session));
                }
                None => {
                    session.empty_captures += 1;
                    debug!(
                        empty_captures = session.empty_captures,
                        "No frame available, retrying after interval"
                    );
                    tokio::time::sleep(session.retry_interval).await;
                }
            }
        }
    })
}
