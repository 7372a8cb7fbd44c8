pub mod commands;
pub mod completer;
pub mod progress;
pub mod renderer;
pub mod session;

pub use session::ReplSession;
