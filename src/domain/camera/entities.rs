//! カメラのフレーム
//!
//! 1回のキャプチャで得られるJPEG画像。保持も共有もされず、1チャンクで使い切られる。

/// マルチパートの境界文字列
pub const MJPEG_BOUNDARY: &str = "frame";

/// `GET /video_feed` のContent-Type
pub const MJPEG_CONTENT_TYPE: &str = "multipart/x-mixed-replace; boundary=frame";

/// JPEGエンコード済みの1フレーム
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
}

impl Frame {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// マルチパートの1パートに整形する
    ///
    /// `--frame\r\nContent-Type: image/jpeg\r\n\r\n<jpeg>\r\n`
    pub fn to_multipart_chunk(&self) -> Vec<u8> {
        let header = format!("--{MJPEG_BOUNDARY}\r\nContent-Type: image/jpeg\r\n\r\n");
        let mut chunk = Vec::with_capacity(header.len() + self.data.len() + 2);
        chunk.extend_from_slice(header.as_bytes());
        chunk.extend_from_slice(&self.data);
        chunk.extend_from_slice(b"\r\n");
        chunk
    }
}

impl From<Vec<u8>> for Frame {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}
