use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which fixed prompt template a generation request uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Score + summary + roadmap
    #[default]
    Audit,
    /// One-click README draft
    Readme,
    /// One-click unit test file
    UnitTests,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Audit => "audit",
            Self::Readme => "readme",
            Self::UnitTests => "unit_tests",
        }
    }

    /// Parse the short names accepted on the command line and in the REPL.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "audit" | "analyze" => Some(Self::Audit),
            "readme" => Some(Self::Readme),
            "tests" | "unit_tests" | "unit-tests" => Some(Self::UnitTests),
            _ => None,
        }
    }
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw model output for one request, plus the best-effort score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub mode: GenerationMode,
    pub markdown: String,
    /// Present only when the text carries a `Score: N` pattern.
    pub score: Option<u8>,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_name() {
        assert_eq!(GenerationMode::from_name("README"), Some(GenerationMode::Readme));
        assert_eq!(GenerationMode::from_name("tests"), Some(GenerationMode::UnitTests));
        assert_eq!(GenerationMode::from_name("analyze"), Some(GenerationMode::Audit));
        assert_eq!(GenerationMode::from_name("lint"), None);
    }

    #[test]
    fn test_mode_serialization() {
        let json = serde_json::to_string(&GenerationMode::UnitTests).unwrap();
        assert_eq!(json, "\"unit_tests\"");
        assert_eq!(GenerationMode::default(), GenerationMode::Audit);
    }
}
