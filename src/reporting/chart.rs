use std::collections::HashMap;
use serde::Serialize;
use crate::models::RepoSnapshot;

const NO_EXTENSION: &str = "(none)";
const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionCount {
    pub extension: String,
    pub count: usize,
}

/// File extension counts over the file entries of a snapshot tree,
/// sorted by count descending then extension name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtensionBreakdown {
    pub total: usize,
    pub counts: Vec<ExtensionCount>,
}

impl ExtensionBreakdown {
    pub fn from_snapshot(snapshot: &RepoSnapshot) -> Self {
        Self::from_names(snapshot.file_entries().map(|e| e.name()))
    }

    pub fn from_names<'a>(names: impl Iterator<Item = &'a str>) -> Self {
        let mut map: HashMap<String, usize> = HashMap::new();
        let mut total = 0;
        for name in names {
            *map.entry(extension_of(name)).or_insert(0) += 1;
            total += 1;
        }

        let mut counts: Vec<ExtensionCount> = map
            .into_iter()
            .map(|(extension, count)| ExtensionCount { extension, count })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.extension.cmp(&b.extension)));

        Self { total, counts }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Share of the total as a percentage.
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 * 100.0 / self.total as f64
    }

    /// Plain-text pie: one line per extension with share and a proportional bar.
    /// Only the first `limit` extensions are listed; the rest are folded into `other`.
    pub fn render(&self, limit: usize) -> String {
        if self.is_empty() {
            return "No files to chart.\n".to_string();
        }

        let mut rows: Vec<(String, usize)> = self.counts.iter()
            .take(limit)
            .map(|c| (c.extension.clone(), c.count))
            .collect();
        let rest: usize = self.counts.iter().skip(limit).map(|c| c.count).sum();
        if rest > 0 {
            rows.push(("other".to_string(), rest));
        }

        let label_width = rows.iter().map(|(ext, _)| ext.len()).max().unwrap_or(0);
        let mut out = String::new();
        for (ext, count) in rows {
            let pct = self.percent(count);
            let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
            out.push_str(&format!(
                "{:<width$}  {:>5.1}%  {}{}  ({})\n",
                ext,
                pct,
                "█".repeat(filled),
                "░".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)),
                count,
                width = label_width,
            ));
        }
        out
    }
}

/// Lowercased extension with leading dot, or `(none)`.
/// Dotfiles such as `.gitignore` have no extension.
pub fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(0) | None => NO_EXTENSION.to_string(),
        Some(idx) if idx + 1 == name.len() => NO_EXTENSION.to_string(),
        Some(idx) => name[idx..].to_lowercase(),
    }
}
