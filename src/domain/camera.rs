pub mod entities;
pub mod errors;
pub mod frame_source;
pub mod services;

pub use entities::*;
pub use errors::*;
pub use frame_source::*;
pub use services::*;
