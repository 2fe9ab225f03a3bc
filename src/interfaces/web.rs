//! Web インターフェース
//!
//! メンバーのCRUD API、カメラのMJPEGストリーム、表示灯の操作、
//! 埋め込みHTMLページを提供します。

mod embedded_assets;
mod error_response;
mod handlers;
mod member_handlers;
mod models;

pub mod server;
pub mod state;

// 内部使用のため、必要な型のみを再エクスポート
pub(crate) use handlers::{control_light, get_health, video_feed};
pub(crate) use member_handlers::{create_member, delete_member, list_members, update_member};
pub use state::AppState;
