use clap::{Parser, Subcommand, Args, ValueEnum};
use crate::models::GenerationMode;

#[derive(Parser)]
#[command(name = "gitgrade", version, about = "AI repository auditor: score, summary and roadmap for GitHub projects")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a repository and print a summary with an improvement roadmap
    Analyze(AnalyzeArgs),
    /// Generate a README or unit tests for a repository
    Generate(GenerateArgs),
    /// Start the HTTP REST API server
    Serve(ServeArgs),
    /// Interactive session: paste URLs, get reports
    Interactive(InteractiveArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Model and GitHub options shared by every command that runs the pipeline.
#[derive(Args, Clone, Default)]
pub struct ModelArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// LLM provider: gemini, openai, openai_compatible
    #[arg(long)]
    pub provider: Option<String>,

    /// LLM model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// LLM API key (or use env vars)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Model API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// GitHub token for higher rate limits (or GITHUB_TOKEN)
    #[arg(long)]
    pub github_token: Option<String>,

    /// Tree strategy: contents, git_tree
    #[arg(long)]
    pub strategy: Option<String>,
}

#[derive(Args, Clone)]
pub struct AnalyzeArgs {
    /// GitHub repository URL
    pub url: String,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write the report as a markdown file
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum ArtifactKind {
    Readme,
    Tests,
}

impl From<ArtifactKind> for GenerationMode {
    fn from(kind: ArtifactKind) -> Self {
        match kind {
            ArtifactKind::Readme => GenerationMode::Readme,
            ArtifactKind::Tests => GenerationMode::UnitTests,
        }
    }
}

#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// What to generate
    #[arg(value_enum)]
    pub kind: ArtifactKind,

    /// GitHub repository URL
    pub url: String,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Write the generated content to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port (default 8080)
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address (default 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    #[command(flatten)]
    pub model: ModelArgs,
}

#[derive(Args, Clone)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
