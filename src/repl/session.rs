use console::style;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

use crate::cli::{analyze_with_progress, generate_with_progress};
use crate::config::Settings;
use crate::errors::GitGradeError;
use crate::models::GenerationMode;
use crate::reporting::formatter;
use crate::repl::commands::{self, SlashCommand};
use crate::repl::completer::ReplHelper;
use crate::repl::renderer;

/// Line-oriented session: every URL runs a fresh, independent pipeline.
pub struct ReplSession {
    settings: Settings,
}

impl ReplSession {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(self) -> Result<(), GitGradeError> {
        println!(
            "{}",
            renderer::render_banner(&self.settings.llm.provider, self.settings.llm.api_key.is_some())
        );

        let config = Config::builder()
            .auto_add_history(true)
            .build();
        let mut editor = Editor::with_config(config)
            .map_err(|e| GitGradeError::Internal(format!("Failed to initialize REPL: {}", e)))?;
        editor.set_helper(Some(ReplHelper::default()));

        loop {
            let readline = {
                // rustyline is blocking, so use spawn_blocking
                let result = tokio::task::spawn_blocking({
                    move || {
                        let prompt = format!("{} ", style("gitgrade>").cyan().bold());
                        let result = editor.readline(&prompt);
                        (editor, result)
                    }
                })
                .await
                .map_err(|e| GitGradeError::Internal(format!("Readline task failed: {}", e)))?;

                editor = result.0;
                result.1
            };

            match readline {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    match commands::parse_command(trimmed) {
                        Ok(cmd) => {
                            if self.handle_command(cmd).await {
                                break;
                            }
                        }
                        Err(msg) => {
                            println!("{}", renderer::render_error(&msg));
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    println!("{}", renderer::render_error(&format!("Input error: {}", err)));
                    break;
                }
            }
        }

        println!("{}", renderer::render_info("Goodbye."));
        Ok(())
    }

    /// Returns true when the session should end.
    async fn handle_command(&self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Exit => return true,
            SlashCommand::Clear => {
                print!("\x1B[2J\x1B[1;1H");
            }
            SlashCommand::Version => {
                println!("{}", renderer::render_version());
            }
            SlashCommand::Help { command } => {
                println!("{}", renderer::render_help(command.as_deref()));
            }
            SlashCommand::Analyze { url } => {
                match analyze_with_progress(&self.settings, &url, false).await {
                    Ok(outcome) => println!("\n{}", formatter::render_analysis(&outcome)),
                    Err(e) => println!("{}", renderer::render_error(&e.to_string())),
                }
            }
            SlashCommand::Readme { url } => self.generate(&url, GenerationMode::Readme).await,
            SlashCommand::Tests { url } => self.generate(&url, GenerationMode::UnitTests).await,
        }
        false
    }

    async fn generate(&self, url: &str, mode: GenerationMode) {
        match generate_with_progress(&self.settings, url, mode, false).await {
            Ok(outcome) => println!("\n{}", formatter::render_artifact(&outcome)),
            Err(e) => println!("{}", renderer::render_error(&e.to_string())),
        }
    }
}
