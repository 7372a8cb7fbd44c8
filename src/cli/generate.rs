use tracing::info;
use crate::cli::commands::GenerateArgs;
use crate::errors::GitGradeError;
use crate::reporting::formatter;

pub async fn handle_generate(args: GenerateArgs, quiet: bool) -> Result<(), GitGradeError> {
    let settings = args.model.load_settings().await?;
    let outcome = super::generate_with_progress(&settings, &args.url, args.kind.into(), quiet).await?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &outcome.report.markdown).await?;
            info!(path = %path, mode = %outcome.report.mode, "Generated content written");
            if !outcome.snapshot.omitted.is_empty() {
                eprint!("{}", formatter::render_omissions(&outcome.snapshot.omitted));
            }
        }
        None => println!("{}", formatter::render_artifact(&outcome)),
    }
    Ok(())
}
