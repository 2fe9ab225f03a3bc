use thiserror::Error;

#[derive(Error, Debug)]
pub enum HardwareError {
    #[error("Light command is not configured")]
    NotConfigured,

    #[error("System command failed: {0}")]
    SystemCommandFailed(String),

    #[error("Light device unavailable: {0}")]
    Unavailable(String),
}

