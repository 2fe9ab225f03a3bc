use crate::domain::light::{HardwareError, LightColor, LightDriver};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

/// 外部コマンドで表示灯を切り替えるドライバー
///
/// `LIGHT_COMMAND="/usr/local/bin/set-light --pin 17"` なら
/// `/usr/local/bin/set-light --pin 17 green` を実行する。
pub struct CommandLight {
    program: String,
    args: Vec<String>,
}

impl CommandLight {
    /// コマンドラインを空白で分割して作る
    pub fn from_command_line(command_line: &str) -> Result<Self, HardwareError> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(HardwareError::NotConfigured)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

#[async_trait]
impl LightDriver for CommandLight {
    fn name(&self) -> &str {
        "command"
    }

    async fn set_color(&self, color: LightColor) -> Result<(), HardwareError> {
        debug!(program = %self.program, color = %color, "Running light command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(color.as_str())
            .output()
            .await
            .map_err(|e| HardwareError::Unavailable(format!("Failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HardwareError::SystemCommandFailed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        info!(color = %color, "Light switched via {}", self.program);
        Ok(())
    }
}
