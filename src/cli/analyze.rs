use tracing::info;
use crate::api::models::AnalyzeResponse;
use crate::cli::commands::AnalyzeArgs;
use crate::errors::GitGradeError;
use crate::reporting::formatter;

pub async fn handle_analyze(args: AnalyzeArgs, quiet: bool) -> Result<(), GitGradeError> {
    let settings = args.model.load_settings().await?;
    // JSON goes to stdout untouched, so no spinner
    let outcome = super::analyze_with_progress(&settings, &args.url, quiet || args.json).await?;

    if let Some(path) = &args.output {
        tokio::fs::write(path, formatter::format_markdown_document(&outcome)).await?;
        info!(path = %path, "Report written");
    }

    if args.json {
        let view = AnalyzeResponse::from(outcome);
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", formatter::render_analysis(&outcome));
    }
    Ok(())
}
