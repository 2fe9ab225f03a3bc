//! # Camera Members Server
//!
//! USBカメラを接続したシングルボードコンピューター向けの小さなWebバックエンド
//!
//! - `members` テーブルのCRUD API（MySQL）
//! - `fswebcam` の静止画を連続して返すMJPEGストリーム
//! - 表示灯の操作（ドライバーは差し替え可能）
//!
//! このクレートは以下の層に分かれています：
//!
//! - **Domain Layer**: フレーム、表示灯、メンバーのモデルと能力インターフェース
//! - **Application Layer**: ユースケース
//! - **Infrastructure Layer**: 外部コマンドとデータベースとの統合
//! - **Interface Layer**: HTTP API

pub mod application;
pub mod config;
pub mod debug;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

// 公開API
pub use config::AppConfig;
pub use domain::*;
