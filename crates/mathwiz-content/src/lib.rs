//! mathwiz-content: Content packs and the in-memory content repository.
//!
//! Loads problems and quizzes from TOML content packs, validates them, and
//! serves them to the engine through `ContentRepository`.

pub mod config;
pub mod memory;
pub mod pack;
pub mod validate;

pub use config::{load_config, load_config_from, MathwizConfig};
pub use memory::InMemoryRepository;
pub use pack::{load_content, ContentPack};
