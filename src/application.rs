//! アプリケーション層
//!
//! CLIの各サブコマンドに対応するユースケース

pub mod use_cases;
