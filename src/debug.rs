//! デバッグとログ機能
//!
//! プロジェクト全体のログ初期化とエラー出力の補助を提供

use std::fs;
use std::path::PathBuf;
use tracing::{Level, debug, error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "camera-members-server.log";

/// デバッグ設定
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// ログレベル
    pub log_level: Level,
    /// 設定されていればファイルにJSONでログを出力する
    pub log_directory: Option<PathBuf>,
    /// スレッド情報をコンソールに出すか
    pub show_thread_info: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            log_directory: None,
            show_thread_info: false,
        }
    }
}

impl DebugConfig {
    /// 開発環境用の設定
    pub fn development() -> Self {
        Self {
            log_level: Level::DEBUG,
            log_directory: None,
            show_thread_info: true,
        }
    }

    /// 本番環境用の設定
    pub fn production(log_directory: impl Into<PathBuf>) -> Self {
        Self {
            log_level: Level::INFO,
            log_directory: Some(log_directory.into()),
            show_thread_info: false,
        }
    }

    /// RUST_LOG が無いときに使うフィルター
    pub fn default_filter(&self) -> String {
        format!(
            "camera_members_server={level},tower_http={level}",
            level = self.log_level
        )
    }
}

/// ログシステムを初期化
pub fn init_logging(config: &DebugConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // 環境変数からのフィルター設定
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.default_filter()))?;

    match &config.log_directory {
        Some(directory) => {
            fs::create_dir_all(directory)?;
            let file_appender = RollingFileAppender::new(Rotation::DAILY, directory, LOG_FILE_NAME);

            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(file_appender)
                .json()
                .try_init()?;
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .pretty()
                .with_target(true)
                .with_thread_ids(config.show_thread_info)
                .with_thread_names(config.show_thread_info)
                .try_init()?;
        }
    }

    info!("ログシステムが初期化されました");
    debug!("デバッグ設定: {:?}", config);

    Ok(())
}

/// エラーの詳細情報をログに出力
pub fn log_error_details(error: &dyn std::error::Error, context: &str) {
    error!(
        context = context,
        error = %error,
        "エラーが発生しました"
    );

    // エラーチェーンをログに出力
    let mut source = error.source();
    let mut level = 1;
    while let Some(err) = source {
        error!(
            context = context,
            level = level,
            source_error = %err,
            "エラーの原因"
        );
        source = err.source();
        level += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_default_filter_targets_crate_and_http() {
        let filter = DebugConfig::development().default_filter();
        assert_eq!(filter, "camera_members_server=DEBUG,tower_http=DEBUG");
    }

    #[test]
    fn test_production_logs_to_directory() {
        let config = DebugConfig::production("/var/log/camera-members-server");
        assert_eq!(
            config.log_directory,
            Some(PathBuf::from("/var/log/camera-members-server"))
        );
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    #[traced_test]
    fn test_error_chain_is_logged() {
        let inner = std::io::Error::other("disk full");
        let outer = anyhow::Error::new(inner).context("Failed to write snapshot");

        log_error_details(&*outer, "snapshot");

        assert!(logs_contain("Failed to write snapshot"));
        assert!(logs_contain("disk full"));
    }
}
