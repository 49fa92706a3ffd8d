pub mod core;
pub mod loader;

pub use self::core::{HttpConfig, LoaderConfig};
pub use self::loader::{load_config_from, load_or_create_config};
