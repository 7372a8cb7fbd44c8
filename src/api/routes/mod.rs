pub mod health;
pub mod analyze;
pub mod generate;
