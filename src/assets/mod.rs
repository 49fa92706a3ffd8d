pub mod builder;
pub mod fetch;
pub mod models;
pub mod parser;
pub mod tokenizer;

pub use builder::{ModelBuilder, ParseState, DEFAULT_GROUP};
pub use fetch::{load_obj, Fetcher};
pub use models::{Model, ModelSummary, Triangle, VertexRef};
pub use parser::parse_obj;
pub use tokenizer::{tokenize, Directive, Line, Tokenizer};
