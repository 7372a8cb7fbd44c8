use crate::models::GenerationMode;

/// Progress messages sent from the pipeline to whoever is displaying it.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    FetchStarted {
        url: String,
    },
    FetchCompleted {
        repo: String,
        entries: usize,
        files: usize,
        omitted: usize,
    },
    GenerationStarted {
        mode: GenerationMode,
        model: String,
    },
    GenerationCompleted {
        mode: GenerationMode,
        score: Option<u8>,
    },
    Failed {
        error: String,
    },
}
