//! 表示灯の色

use serde::{Deserialize, Serialize};
use std::fmt;

/// 認識できない色が指定されたときの応答
pub const UNRECOGNIZED_COLOR_MESSAGE: &str = "Color no reconocido";

/// 表示灯が取りうる色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightColor {
    Green,
    Red,
}

impl LightColor {
    /// リクエストの `color` 値を解釈する
    ///
    /// 完全一致の `"green"` と `"red"` のみを受け付ける。
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value? {
            "green" => Some(Self::Green),
            "red" => Some(Self::Red),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
        }
    }

    /// クライアントに返す確認メッセージ
    pub fn acknowledgement(&self) -> &'static str {
        match self {
            Self::Green => "Foco cambiado a Verde",
            Self::Red => "Foco cambiado a Rojo",
        }
    }
}

impl fmt::Display for LightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
