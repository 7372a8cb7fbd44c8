pub mod parser;
pub mod schema;
pub mod types;
pub mod credentials;
pub mod settings;

pub use types::*;
pub use parser::parse_config;
pub use settings::{Settings, FetchSettings, LlmSettings, PromptSettings, Overrides};
