use super::types::GitGradeError;

/// User-facing kind of an error plus the process exit code it maps to.
#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl GitGradeError {
    /// Classify this error into one of the user-facing kinds.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            GitGradeError::InvalidUrl(_) => ErrorClassification {
                error_type: "InvalidURL",
                exit_code: 5,
            },
            GitGradeError::Fetch(_) => ErrorClassification {
                error_type: "FetchError",
                exit_code: 3,
            },
            GitGradeError::Generation(_) => ErrorClassification {
                error_type: "GenerationError",
                exit_code: 4,
            },
            GitGradeError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: 2,
            },
            GitGradeError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: 1,
            },
            GitGradeError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: 1,
            },
            GitGradeError::Yaml(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: 2,
            },
            GitGradeError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                exit_code: 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_kind() {
        let err = GitGradeError::InvalidUrl("not a repo".into());
        let class = err.classify();
        assert_eq!(class.error_type, "InvalidURL");
        assert_eq!(class.exit_code, 5);
    }

    #[test]
    fn test_fetch_kind() {
        let err = GitGradeError::Fetch("HTTP 404".into());
        assert_eq!(err.classify().error_type, "FetchError");
    }

    #[test]
    fn test_generation_kind() {
        let err = GitGradeError::Generation("quota".into());
        assert_eq!(err.classify().error_type, "GenerationError");
    }

    #[test]
    fn test_yaml_reported_as_config() {
        let yaml_err = serde_yaml::from_str::<u32>("[not, a, number]").unwrap_err();
        let err = GitGradeError::from(yaml_err);
        assert_eq!(err.classify().error_type, "ConfigError");
        assert_eq!(err.classify().exit_code, 2);
    }

    #[test]
    fn test_display_keeps_raw_message() {
        let err = GitGradeError::Fetch("HTTP 403: rate limit exceeded".into());
        assert_eq!(err.to_string(), "Error fetching repo: HTTP 403: rate limit exceeded");
    }
}
