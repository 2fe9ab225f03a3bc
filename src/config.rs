//! アプリケーション設定
//!
//! 起動時に環境変数から一度だけ読み込み、以降は変更しない。

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// アプリケーション全体の設定
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub camera: CameraConfig,
    pub light: LightConfig,
    /// 設定されていればファイルにJSONログを出力する
    pub log_directory: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// 起動時のテーブル作成の試行回数
    pub init_attempts: u32,
    pub init_retry_delay: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "db".to_string(),
            port: 3306,
            user: "flaskuser".to_string(),
            password: "flaskpw".to_string(),
            name: "flaskdb".to_string(),
            init_attempts: 10,
            init_retry_delay: Duration::from_secs(3),
        }
    }
}

// パスワードはログに出さない
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"********")
            .field("name", &self.name)
            .field("init_attempts", &self.init_attempts)
            .field("init_retry_delay", &self.init_retry_delay)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// 静止画キャプチャのコマンド
    pub program: String,
    /// `-d` に渡すデバイス。未設定ならコマンドの既定値
    pub device: Option<String>,
    pub resolution: String,
    pub jpeg_quality: u8,
    /// 未設定ならキャプチャの完了を無期限に待つ
    pub capture_timeout: Option<Duration>,
    /// フレームが取れなかったときの再試行間隔
    pub retry_interval: Duration,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            program: "fswebcam".to_string(),
            device: None,
            resolution: "320x240".to_string(),
            jpeg_quality: 85,
            capture_timeout: None,
            retry_interval: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LightConfig {
    /// 色名を最後の引数として実行するコマンド。未設定ならプレースホルダー
    pub command: Option<String>,
}

impl AppConfig {
    /// プロセスの環境変数から読み込む
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から読み込む。空文字列は未設定として扱う
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let server = ServerConfig {
            host: get("HOST").unwrap_or(defaults.server.host),
            port: parse_or(get("PORT"), defaults.server.port),
        };

        let database = DatabaseConfig {
            host: get("DB_HOST").unwrap_or(defaults.database.host),
            port: parse_or(get("DB_PORT"), defaults.database.port),
            user: get("DB_USER").unwrap_or(defaults.database.user),
            password: get("DB_PASSWORD").unwrap_or(defaults.database.password),
            name: get("DB_NAME").unwrap_or(defaults.database.name),
            init_attempts: defaults.database.init_attempts,
            init_retry_delay: defaults.database.init_retry_delay,
        };

        let camera = CameraConfig {
            program: get("CAMERA_COMMAND").unwrap_or(defaults.camera.program),
            device: get("CAMERA_DEVICE"),
            resolution: get("CAMERA_RESOLUTION").unwrap_or(defaults.camera.resolution),
            jpeg_quality: parse_or(get("CAMERA_JPEG_QUALITY"), defaults.camera.jpeg_quality)
                .clamp(1, 100),
            capture_timeout: get("CAMERA_TIMEOUT_MS")
                .and_then(|ms| ms.trim().parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis),
            retry_interval: get("STREAM_RETRY_MS")
                .and_then(|ms| ms.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.camera.retry_interval),
        };

        let light = LightConfig {
            command: get("LIGHT_COMMAND"),
        };

        Self {
            server,
            database,
            camera,
            light,
            log_directory: get("LOG_DIR").map(PathBuf::from),
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
