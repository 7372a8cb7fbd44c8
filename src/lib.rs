pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fetch;
pub mod llm;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod repl;
pub mod reporting;
pub mod utils;
