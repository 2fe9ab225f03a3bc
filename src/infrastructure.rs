//! インフラストラクチャ層
//!
//! ドメイン層のトレイトを外部コマンドとMySQLで実装します。

pub mod camera;
pub mod light;
pub mod persistence;
