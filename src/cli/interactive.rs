use crate::cli::commands::InteractiveArgs;
use crate::errors::GitGradeError;
use crate::repl::ReplSession;

pub async fn handle_interactive(args: InteractiveArgs) -> Result<(), GitGradeError> {
    let settings = args.model.load_settings().await?;
    ReplSession::new(settings).run().await
}
