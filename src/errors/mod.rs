pub mod types;
pub mod classification;

pub use types::GitGradeError;
pub use classification::ErrorClassification;
