use crate::domain::members::{MemberRepository, RepositoryError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// 起動時に `members` テーブルを用意する
///
/// DBコンテナの起動を待つため、一定間隔で決められた回数だけ試す。
pub struct InitializeDatabaseUseCase {
    repository: Arc<dyn MemberRepository>,
    attempts: u32,
    retry_delay: Duration,
}

impl InitializeDatabaseUseCase {
    pub fn new(repository: Arc<dyn MemberRepository>, attempts: u32, retry_delay: Duration) -> Self {
        Self {
            repository,
            attempts: attempts.max(1),
            retry_delay,
        }
    }

    /// すべて失敗したら最後のエラーを返す
    ///
    /// 接続エラーの間だけ待って再試行し、それ以外のエラーはそのまま返す。
    pub async fn execute(&self) -> Result<(), RepositoryError> {
        let mut attempt = 1;
        loop {
            match self.repository.initialize_schema().await {
                Ok(()) => {
                    info!(attempt, "Database initialized successfully");
                    return Ok(());
                }
                Err(e) if !e.is_transient() => {
                    error!(attempt, "Database initialization failed: {}", e);
                    return Err(e);
                }
                Err(e) if attempt < self.attempts => {
                    warn!("Waiting for database... ({}/{}): {}", attempt, self.attempts, e);
                    tokio::time::sleep(self.retry_delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    warn!("Waiting for database... ({}/{}): {}", attempt, self.attempts, e);
                    return Err(e);
                }
            }
        }
    }
}
