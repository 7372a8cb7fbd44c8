use console::style;
use crate::models::{Omission, RepoSnapshot};
use crate::pipeline::{AnalysisOutcome, ArtifactOutcome};
use crate::utils::formatting::format_count;
use super::score::BadgeTier;

const CHART_ROWS: usize = 8;

fn render_badge(tier: BadgeTier) -> String {
    let label = format!(" {} ", tier.label());
    match tier {
        BadgeTier::Gold => style(label).black().on_yellow().bold().to_string(),
        BadgeTier::Silver => style(label).black().on_white().bold().to_string(),
        BadgeTier::Bronze => style(label).white().on_red().bold().to_string(),
    }
}

fn render_header(snapshot: &RepoSnapshot) -> String {
    let stars = snapshot.stars.map(format_count).unwrap_or_else(|| "n/a".to_string());
    let mut out = format!(
        "{} {}  {} {}\n",
        style("Repository:").dim(),
        style(snapshot.full_name()).cyan().bold(),
        style("Stars:").dim(),
        style(stars).white().bold(),
    );
    if let Some(description) = snapshot.description.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("{}\n", style(description).dim()));
    }
    out
}

/// Diagnostics for files and directories that were skipped.
pub fn render_omissions(omitted: &[Omission]) -> String {
    if omitted.is_empty() {
        return String::new();
    }
    let mut out = format!("\n{}\n", style(format!("Skipped {} item(s):", omitted.len())).yellow());
    for item in omitted {
        out.push_str(&format!("  {} {} ({})\n", style("!").yellow(), item.path, style(&item.reason).dim()));
    }
    out
}

/// Terminal view of an audit: header, badge, the report as-is, chart, diagnostics.
pub fn render_analysis(outcome: &AnalysisOutcome) -> String {
    let mut out = render_header(&outcome.snapshot);
    let score = outcome.report.score
        .map(|s| format!("{}/100", s))
        .unwrap_or_else(|| "not found".to_string());
    out.push_str(&format!(
        "{} {}  {}\n",
        style("Score:").dim(),
        style(score).bold(),
        render_badge(outcome.badge),
    ));
    out.push_str(&format!("{}\n\n", style("─".repeat(60)).dim()));
    out.push_str(outcome.report.markdown.trim_end());
    out.push_str("\n\n");
    out.push_str(&format!("{}\n", style("File types").cyan().bold()));
    out.push_str(&outcome.extensions.render(CHART_ROWS));
    out.push_str(&render_omissions(&outcome.snapshot.omitted));
    out
}

pub fn render_artifact(outcome: &ArtifactOutcome) -> String {
    let mut out = render_header(&outcome.snapshot);
    out.push_str(&format!(
        "{} {} ({})\n",
        style("Generated:").dim(),
        style(outcome.report.mode).bold(),
        outcome.report.model,
    ));
    out.push_str(&format!("{}\n\n", style("─".repeat(60)).dim()));
    out.push_str(outcome.report.markdown.trim_end());
    out.push('\n');
    out.push_str(&render_omissions(&outcome.snapshot.omitted));
    out
}

/// Markdown written to `--output`: a short front section, then the report verbatim.
pub fn format_markdown_document(outcome: &AnalysisOutcome) -> String {
    let score = outcome.report.score
        .map(|s| s.to_string())
        .unwrap_or_else(|| "n/a".to_string());
    let mut doc = format!(
        "# GitGrade: {}\n\n- Score: {}\n- Badge: {}\n- Model: {}\n- Generated: {}\n\n---\n\n",
        outcome.snapshot.full_name(),
        score,
        outcome.badge,
        outcome.report.model,
        outcome.report.generated_at.to_rfc3339(),
    );
    doc.push_str(outcome.report.markdown.trim_end());
    doc.push_str("\n\n## File types\n\n| Extension | Files | Share |\n|---|---|---|\n");
    for count in &outcome.extensions.counts {
        doc.push_str(&format!(
            "| {} | {} | {:.1}% |\n",
            count.extension,
            count.count,
            outcome.extensions.percent(count.count)
        ));
    }
    if !outcome.snapshot.omitted.is_empty() {
        doc.push_str("\n## Skipped files\n\n");
        for item in &outcome.snapshot.omitted {
            doc.push_str(&format!("- `{}`: {}\n", item.path, item.reason));
        }
    }
    doc
}
