use std::sync::LazyLock;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SCORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bscore\b[*_\s]*:[*_\s]*(\d+)").expect("score pattern is valid")
});

/// Extract the score from the first `Score: N` occurrence in `text`.
///
/// Markdown emphasis around the label is tolerated (`**Score:** 85/100`).
/// Returns `None` when there is no match or when the first match is not in 0..=100.
pub fn extract_score(text: &str) -> Option<u8> {
    let caps = SCORE_RE.captures(text)?;
    let value: u32 = caps[1].parse().ok()?;
    if value > 100 {
        return None;
    }
    Some(value as u8)
}

/// Score used for badge selection: the extracted score, or 0 when absent.
pub fn score_or_default(text: &str) -> u8 {
    extract_score(text).unwrap_or(0)
}

/// Cosmetic classification derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTier {
    Gold,
    Silver,
    Bronze,
}

impl BadgeTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            Self::Gold
        } else if score >= 75 {
            Self::Silver
        } else {
            Self::Bronze
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Gold => "Gold: production ready",
            Self::Silver => "Silver: solid, with gaps",
            Self::Bronze => "Bronze: needs work",
        }
    }
}

impl std::fmt::Display for BadgeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_score_with_denominator() {
        assert_eq!(extract_score("Score: 42/100"), Some(42));
    }

    #[test]
    fn test_extract_score_from_heading() {
        let text = "## 📊 Score: 87/100\n\n## 📝 Executive Summary\nSolid.";
        assert_eq!(extract_score(text), Some(87));
    }

    #[test]
    fn test_extract_score_with_emphasis() {
        assert_eq!(extract_score("**Score:** 91 / 100"), Some(91));
        assert_eq!(extract_score("overall score: 7"), Some(7));
    }

    #[test]
    fn test_first_match_wins() {
        let text = "Score: 60/100\nPrevious Score: 95/100";
        assert_eq!(extract_score(text), Some(60));
    }

    #[test]
    fn test_out_of_range_first_match_is_none() {
        assert_eq!(extract_score("Score: 250/100"), None);
    }

    #[test]
    fn test_no_score_defaults_to_zero() {
        assert_eq!(extract_score("The model forgot the template."), None);
        assert_eq!(score_or_default("The model forgot the template."), 0);
        assert_eq!(score_or_default(""), 0);
        assert_eq!(score_or_default("**Score:** 85/100"), 85);
    }

    #[test]
    fn test_scoreboard_is_not_a_score() {
        assert_eq!(extract_score("scoreboard: 99"), None);
    }

    #[test]
    fn test_badge_thresholds() {
        assert_eq!(BadgeTier::from_score(95), BadgeTier::Gold);
        assert_eq!(BadgeTier::from_score(90), BadgeTier::Gold);
        assert_eq!(BadgeTier::from_score(89), BadgeTier::Silver);
        assert_eq!(BadgeTier::from_score(80), BadgeTier::Silver);
        assert_eq!(BadgeTier::from_score(75), BadgeTier::Silver);
        assert_eq!(BadgeTier::from_score(74), BadgeTier::Bronze);
        assert_eq!(BadgeTier::from_score(50), BadgeTier::Bronze);
    }
}
