pub mod generator;
pub mod score;
pub mod chart;
pub mod formatter;

pub use generator::ReportGenerator;
pub use score::{extract_score, score_or_default, BadgeTier};
pub use chart::ExtensionBreakdown;
