//! ドメイン層
//!
//! カメラ、表示灯、メンバーのモデルと、差し替え可能な能力インターフェース

pub mod camera;
pub mod light;
pub mod members;
