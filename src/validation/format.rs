use crate::models::{FormatValidationResult, ValidationIssue, ValidationIssueType};

pub const ISIN_LENGTH: usize = 12;

pub struct FormatValidator;

impl FormatValidator {
    /// Runs the structural checks of ISO 6166 over a candidate string.
    /// The checks run in order and the first failure decides the reported
    /// issue: length, character set, country code, trailing check digit.
    pub fn validate(candidate: &str) -> FormatValidationResult {
        let mut issues = Vec::new();

        if candidate.chars().count() != ISIN_LENGTH {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Format,
                message: format!("ISIN must be exactly {} characters long", ISIN_LENGTH),
            });
        } else if !candidate.chars().all(|c| c.is_ascii_alphanumeric()) {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Format,
                message: "ISIN may only contain letters and digits".to_string(),
            });
        } else if !candidate.chars().take(2).all(|c| c.is_ascii_alphabetic()) {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Format,
                message: "ISIN must start with a two-letter country code".to_string(),
            });
        } else if !candidate.ends_with(|c: char| c.is_ascii_digit()) {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Format,
                message: "ISIN must end with a check digit".to_string(),
            });
        }

        let correct_format = issues.is_empty();

        FormatValidationResult {
            is_valid: correct_format,
            correct_format,
            issues,
        }
    }
}
