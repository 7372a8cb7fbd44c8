use std::time::{Duration, Instant};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::pipeline::PipelineEvent;
use crate::repl::renderer;
use crate::utils::formatting::format_duration;

/// Spinner shown while a repository is fetched and the model is thinking.
pub struct RunProgress {
    bar: ProgressBar,
    start_time: Instant,
}

impl RunProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
        );
        bar.set_message("Starting...");
        bar.enable_steady_tick(Duration::from_millis(120));

        Self {
            bar,
            start_time: Instant::now(),
        }
    }

    /// Handle a pipeline event and update the spinner accordingly.
    pub fn handle_event(&mut self, event: &PipelineEvent) {
        match event {
            PipelineEvent::FetchStarted { url } => {
                self.println(&renderer::render_event(event));
                self.bar.set_message(format!("Fetching {}", url));
            }
            PipelineEvent::FetchCompleted { .. } => {
                self.println(&renderer::render_event(event));
                self.bar.set_message("Preparing prompt");
            }
            PipelineEvent::GenerationStarted { mode, .. } => {
                self.println(&renderer::render_event(event));
                self.bar.set_message(format!("Waiting for the model ({})", mode));
            }
            PipelineEvent::GenerationCompleted { .. } => {
                self.println(&renderer::render_event(event));
                self.bar.finish_and_clear();
                self.println(&renderer::render_info(&format!(
                    "  Done in {}",
                    format_duration(self.elapsed_ms())
                )));
            }
            PipelineEvent::Failed { .. } => {
                // The caller prints the error once the run returns.
                self.bar.finish_and_clear();
            }
        }
    }

    fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }

    /// Print a line above the spinner.
    pub fn println(&self, msg: &str) {
        self.bar.println(msg);
    }
}

impl Default for RunProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// Channel plus a task that renders pipeline events until every sender is
/// dropped. With `quiet` the events are drained without output.
pub fn spawn_progress(quiet: bool) -> (mpsc::UnboundedSender<PipelineEvent>, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::unbounded_channel::<PipelineEvent>();
    let handle = tokio::spawn(async move {
        let mut progress = if quiet { None } else { Some(RunProgress::new()) };
        while let Some(event) = rx.recv().await {
            if let Some(ref mut prog) = progress {
                prog.handle_event(&event);
            }
        }
        if let Some(prog) = progress {
            prog.bar.finish_and_clear();
        }
    });
    (tx, handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_clears_spinner_without_message() {
        let mut progress = RunProgress::new();
        progress.handle_event(&PipelineEvent::Failed { error: "HTTP 404 for demo".into() });
        assert!(progress.bar.is_finished());
        assert!(!progress.bar.message().contains("HTTP 404"));
    }
}
