use console::style;

use crate::pipeline::PipelineEvent;
use crate::repl::commands::{COMMAND_HELP, CommandHelp};
use crate::utils::formatting::format_count;

/// Render a pipeline event as styled terminal output, returning the formatted line.
pub fn render_event(event: &PipelineEvent) -> String {
    match event {
        PipelineEvent::FetchStarted { url } => {
            format!(
                "{} Fetching {}",
                style("▶").green().bold(),
                style(url).white().bold(),
            )
        }
        PipelineEvent::FetchCompleted { repo, entries, files, omitted } => {
            let skipped = if *omitted > 0 {
                format!(", {}", style(format!("{} skipped", omitted)).yellow())
            } else {
                String::new()
            };
            format!(
                "  {} {}: {} entries, {} key files{}",
                style("✓").green(),
                style(repo).cyan(),
                format_count(*entries as u64),
                files,
                skipped,
            )
        }
        PipelineEvent::GenerationStarted { mode, model } => {
            format!(
                "  {} Generating {} with {}",
                style("⏳").yellow(),
                style(mode).yellow(),
                style(model).dim(),
            )
        }
        PipelineEvent::GenerationCompleted { mode, score } => {
            let score_str = score
                .map(|s| format!(" (score {}/100)", s))
                .unwrap_or_default();
            format!("  {} {} ready{}", style("✓").green(), mode, score_str)
        }
        PipelineEvent::Failed { error } => render_error(error),
    }
}

/// Render the help listing for all commands.
pub fn render_help(specific_command: Option<&str>) -> String {
    if let Some(cmd_name) = specific_command {
        if let Some(cmd) = COMMAND_HELP.iter().find(|c| c.name == cmd_name) {
            return format_command_detail(cmd);
        } else {
            return format!("{} Unknown command: /{}", style("✗").red(), cmd_name);
        }
    }

    let mut out = String::new();
    out.push_str(&format!("\n{}\n\n", style("Available commands:").white().bold()));
    for cmd in COMMAND_HELP {
        out.push_str(&format!(
            "  {:<16} {}\n",
            style(format!("/{}", cmd.name)).cyan().bold(),
            style(cmd.description).dim(),
        ));
    }
    out
}

fn format_command_detail(cmd: &CommandHelp) -> String {
    format!(
        "\n{}\n  {}\n\n  {}\n",
        style(format!("/{}", cmd.name)).cyan().bold(),
        style(cmd.description).dim(),
        style(cmd.usage).white(),
    )
}

pub fn render_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("dev");
    let build_ts = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown");

    format!(
        "\n  {} {}\n  {} {}\n  {} {}\n",
        style("Version:").dim(),
        style(version).white().bold(),
        style("Commit:").dim(),
        style(git_hash).white(),
        style("Built:").dim(),
        style(build_ts).white(),
    )
}

/// Greeting shown when the session starts.
pub fn render_banner(provider: &str, has_key: bool) -> String {
    let key_line = if has_key {
        render_success(&format!("Model provider: {}", provider))
    } else {
        format!(
            "{} {}",
            style("!").yellow().bold(),
            style(format!(
                "No API key for '{}'. Please enter a key: set it in the environment or the config file.",
                provider
            )).yellow(),
        )
    };
    format!(
        "\n  {} {}\n  {}\n\n  {}\n  {}\n",
        style("GitGrade").cyan().bold(),
        style(format!("v{}", env!("CARGO_PKG_VERSION"))).dim(),
        style("AI repository auditor: score, summary and roadmap").dim(),
        key_line,
        render_info("Paste a GitHub URL to analyze it, or type /help."),
    )
}

pub fn render_error(msg: &str) -> String {
    format!("{} {}", style("✗").red(), style(msg).red())
}

pub fn render_success(msg: &str) -> String {
    format!("{} {}", style("✓").green(), msg)
}

pub fn render_info(msg: &str) -> String {
    format!("{}", style(msg).dim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenerationMode;

    #[test]
    fn test_render_help_specific() {
        console::set_colors_enabled(false);
        let text = render_help(Some("readme"));
        assert!(text.contains("/readme <github-url>"));
        assert!(render_help(Some("nope")).contains("Unknown command: /nope"));
    }

    #[test]
    fn test_render_fetch_completed() {
        console::set_colors_enabled(false);
        let line = render_event(&PipelineEvent::FetchCompleted {
            repo: "octo/demo".into(),
            entries: 42,
            files: 3,
            omitted: 1,
        });
        assert!(line.contains("octo/demo: 42 entries, 3 key files, 1 skipped"));
    }

    #[test]
    fn test_render_generation_completed() {
        console::set_colors_enabled(false);
        let line = render_event(&PipelineEvent::GenerationCompleted {
            mode: GenerationMode::Audit,
            score: Some(77),
        });
        assert!(line.contains("(score 77/100)"));
    }

    #[test]
    fn test_banner_without_key() {
        console::set_colors_enabled(false);
        assert!(render_banner("gemini", false).contains("Please enter a key"));
    }
}
