pub mod assets;
pub mod config;
pub mod utils;

// Re-export commonly used types
pub use assets::fetch::{load_obj, Fetcher};
pub use assets::models::{Model, Triangle, VertexRef};
pub use assets::parser::parse_obj;
pub use config::core::LoaderConfig;
pub use utils::error::{LoadError, ParseError, RetrievalError};
