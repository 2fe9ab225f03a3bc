use crate::domain::light::{HardwareError, LightColor, LightDriver};
use async_trait::async_trait;
use tracing::info;

/// 実機を持たない表示灯。要求された色をログに残すだけ
pub struct PlaceholderLight;

impl Default for PlaceholderLight {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderLight {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LightDriver for PlaceholderLight {
    fn name(&self) -> &str {
        "placeholder"
    }

    async fn set_color(&self, color: LightColor) -> Result<(), HardwareError> {
        info!(color = %color, "Light switched to {}", color.as_str().to_uppercase());
        Ok(())
    }
}
