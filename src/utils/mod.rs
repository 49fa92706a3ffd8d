pub mod error;

pub use error::{LoadError, ParseError, RetrievalError};
