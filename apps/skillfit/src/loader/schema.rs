use csv::StringRecord;

use crate::errors::AppError;

pub const CLASSIFICATION_COLUMN: &str = "Classification";
pub const REQUIREMENT_COLUMN: &str = "Requirement";
pub const SELF_SCORE_COLUMN: &str = "SelfScore";

/// Exact names accepted for the requirement text, in preference order.
const REQUIREMENT_ALIASES: &[&str] = &["requirement", "skill"];

/// Substrings that mark a header as requirement text when no exact alias exists.
const REQUIREMENT_HINTS: &[&str] = &["requirement", "skill", "description"];

/// Column positions of the three fields the engine needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixSchema {
    pub classification: usize,
    pub requirement: usize,
    pub self_score: usize,
}

fn position_of(normalized: &[String], name: &str) -> Option<usize> {
    normalized.iter().position(|h| h == name)
}

/// Resolves the schema from a header record.
///
/// Headers are trimmed and compared case-insensitively. The requirement column
/// may be named `Requirement` or `Skill`; failing that, the first header that
/// contains one of the hint words is used.
pub fn resolve_schema(headers: &StringRecord) -> Result<MatrixSchema, AppError> {
    let normalized: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();

    let classification = position_of(&normalized, &CLASSIFICATION_COLUMN.to_lowercase());
    let self_score = position_of(&normalized, &SELF_SCORE_COLUMN.to_lowercase());
    let requirement = REQUIREMENT_ALIASES
        .iter()
        .find_map(|alias| position_of(&normalized, alias))
        .or_else(|| {
            normalized
                .iter()
                .position(|h| REQUIREMENT_HINTS.iter().any(|hint| h.contains(hint)))
        });

    match (classification, requirement, self_score) {
        (Some(classification), Some(requirement), Some(self_score)) => {
            if !REQUIREMENT_ALIASES.contains(&normalized[requirement].as_str()) {
                tracing::debug!(
                    column = %normalized[requirement],
                    "Using fuzzy-matched requirement column"
                );
            }
            Ok(MatrixSchema {
                classification,
                requirement,
                self_score,
            })
        }
        (classification, requirement, self_score) => {
            let missing = [
                (classification, CLASSIFICATION_COLUMN),
                (requirement, REQUIREMENT_COLUMN),
                (self_score, SELF_SCORE_COLUMN),
            ]
            .into_iter()
            .filter(|(pos, _)| pos.is_none())
            .map(|(_, name)| name.to_string())
            .collect();
            Err(AppError::MissingColumns {
                missing,
                required: required_columns(),
            })
        }
    }
}

/// Required column names, sorted, as reported in diagnostics.
pub fn required_columns() -> Vec<String> {
    let mut required = vec![
        CLASSIFICATION_COLUMN.to_string(),
        REQUIREMENT_COLUMN.to_string(),
        SELF_SCORE_COLUMN.to_string(),
    ];
    required.sort();
    required
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> StringRecord {
        StringRecord::from(names.to_vec())
    }

    #[test]
    fn test_canonical_headers() {
        let schema = resolve_schema(&headers(&["Requirement", "Classification", "SelfScore"])).unwrap();
        assert_eq!(
            schema,
            MatrixSchema {
                classification: 1,
                requirement: 0,
                self_score: 2,
            }
        );
    }

    #[test]
    fn test_headers_are_trimmed_and_case_insensitive() {
        let schema =
            resolve_schema(&headers(&[" classification ", "REQUIREMENT", "selfscore "])).unwrap();
        assert_eq!(schema.classification, 0);
        assert_eq!(schema.requirement, 1);
        assert_eq!(schema.self_score, 2);
    }

    #[test]
    fn test_skill_alias() {
        let schema = resolve_schema(&headers(&["Skill", "Classification", "SelfScore"])).unwrap();
        assert_eq!(schema.requirement, 0);
    }

    #[test]
    fn test_exact_alias_beats_fuzzy_match() {
        let schema = resolve_schema(&headers(&[
            "Skill Description",
            "Requirement",
            "Classification",
            "SelfScore",
        ]))
        .unwrap();
        assert_eq!(schema.requirement, 1);
    }

    #[test]
    fn test_fuzzy_requirement_column() {
        let schema = resolve_schema(&headers(&[
            "Classification",
            "Job Description Item",
            "SelfScore",
        ]))
        .unwrap();
        assert_eq!(schema.requirement, 1);
    }

    #[test]
    fn test_missing_self_score() {
        let err = resolve_schema(&headers(&["Requirement", "Classification"])).unwrap_err();
        match err {
            AppError::MissingColumns { missing, required } => {
                assert_eq!(missing, vec!["SelfScore".to_string()]);
                assert_eq!(required, vec!["Classification", "Requirement", "SelfScore"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_every_column() {
        let err = resolve_schema(&headers(&["Name", "Score"])).unwrap_err();
        let AppError::MissingColumns { missing, .. } = err else {
            panic!("expected MissingColumns");
        };
        assert_eq!(missing.len(), 3);
    }
}
