pub mod command_light;
pub mod placeholder_light;

pub use command_light::CommandLight;
pub use placeholder_light::PlaceholderLight;
