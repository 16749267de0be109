use crate::domain::model::ProjectSlug;
use crate::utils::error::{KickstartError, Result};
use regex::Regex;
use std::sync::OnceLock;

fn word_runs() -> &'static Regex {
    static WORD_RUNS: OnceLock<Regex> = OnceLock::new();
    WORD_RUNS.get_or_init(|| Regex::new(r"[A-Za-z0-9]+").unwrap())
}

/// 把任意輸入轉成 kebab-case slug：擷取所有 ASCII 英數字片段、轉小寫、以 `-` 串接。
///
/// 不做 Unicode 轉寫也不限制長度；非 ASCII 字元一律視為分隔符。
pub fn normalize(raw: &str) -> Result<ProjectSlug> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(KickstartError::validation(
            "project_name",
            "Project name cannot be empty",
        ));
    }

    let runs: Vec<String> = word_runs()
        .find_iter(trimmed)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect();

    if runs.is_empty() {
        return Err(KickstartError::validation(
            "project_name",
            format!("'{}' contains no letters or digits", trimmed),
        ));
    }

    let slug = runs.join("-");
    tracing::debug!("Normalized project name '{}' -> '{}'", raw, slug);
    Ok(ProjectSlug::from_normalized(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("My Cool App!!").unwrap().as_str(), "my-cool-app");
        assert_eq!(normalize("  spaced   out  ").unwrap().as_str(), "spaced-out");
        assert_eq!(normalize("camelCase2024").unwrap().as_str(), "camelcase2024");
        assert_eq!(normalize("--a__b..c--").unwrap().as_str(), "a-b-c");
    }

    #[test]
    fn test_normalize_non_ascii_is_separator() {
        assert_eq!(normalize("café über").unwrap().as_str(), "caf-ber");
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(matches!(
            normalize("   "),
            Err(KickstartError::ValidationError { .. })
        ));
        assert!(normalize("").is_err());
    }

    #[test]
    fn test_normalize_rejects_punctuation_only() {
        assert!(matches!(
            normalize("!!! ???"),
            Err(KickstartError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["My Cool App!!", "a", "Hello   World 42", "x-y-z", "ÀB-c d"] {
            let once = normalize(raw).unwrap();
            let twice = normalize(once.as_str()).unwrap();
            assert_eq!(once, twice, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_slug_shape() {
        let slug = normalize("  __Weird   -- Name 7__ ").unwrap();
        let s = slug.as_str();
        assert!(!s.is_empty());
        assert!(!s.starts_with('-') && !s.ends_with('-'));
        assert!(!s.contains("--"));
        assert!(!s.chars().any(char::is_whitespace));
        assert_eq!(s, s.to_ascii_lowercase());
    }
}
