use serde::{Deserialize, Serialize};

/// `{"message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `POST /light`
///
/// `color` is kept as raw JSON so that non-string values fall through to the
/// "not recognized" answer instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LightRequest {
    #[serde(default)]
    pub color: Option<serde_json::Value>,
}

impl LightRequest {
    pub fn color_str(&self) -> Option<&str> {
        self.color.as_ref().and_then(|value| value.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub build_timestamp: String,
    pub light_driver: String,
}
