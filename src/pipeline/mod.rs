pub mod events;
pub mod runner;

pub use events::PipelineEvent;
pub use runner::{AnalysisOutcome, ArtifactOutcome, Pipeline};
