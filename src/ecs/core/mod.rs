pub mod plugin;
pub mod resources;

pub use plugin::CorePlugin;
pub use resources::ServerConfig;
