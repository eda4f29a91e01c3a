use crate::models::*;
use crate::validation::*;

pub struct ShareValidator;

impl ShareValidator {
    pub fn new() -> Self {
        ShareValidator
    }

    // Main validation function, run before a new share record is persisted
    pub fn validate(&self, candidate: &str) -> IsinValidationResult {
        // Step 1: Validate the structure
        let format_validation = FormatValidator::validate(candidate);

        if !format_validation.is_valid {
            let issues = format_validation.issues.clone();
            return IsinValidationResult {
                is_valid: false,
                classification: IsinClassification::Malformed,
                format_validation,
                checksum_validation: None,
                issues,
            };
        }

        // Step 2: Validate the check digit
        let checksum_validation = ChecksumValidator::validate(candidate);

        let classification = if checksum_validation.check_digit_valid {
            IsinClassification::Valid
        } else {
            IsinClassification::ChecksumInvalid
        };

        let issues = checksum_validation.issues.clone();

        IsinValidationResult {
            is_valid: classification == IsinClassification::Valid,
            classification,
            format_validation,
            checksum_validation: Some(checksum_validation),
            issues,
        }
    }
}

impl Default for ShareValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_candidate() {
        let validator = ShareValidator::new();
        let result = validator.validate("US0378331005");
        assert!(result.is_valid);
        assert_eq!(result.classification, IsinClassification::Valid);
        assert!(result.checksum_validation.is_some());
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_malformed_candidate_reports_format_issue() {
        let validator = ShareValidator::new();
        let result = validator.validate("US037833100");
        assert!(!result.is_valid);
        assert_eq!(result.classification, IsinClassification::Malformed);
        assert!(result.checksum_validation.is_none());
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].issue_type, ValidationIssueType::Format);
    }

    #[test]
    fn test_checksum_invalid_candidate_reports_checksum_issue() {
        let validator = ShareValidator::new();
        let result = validator.validate("US0378331006");
        assert!(!result.is_valid);
        assert_eq!(result.classification, IsinClassification::ChecksumInvalid);
        assert!(result.format_validation.is_valid);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].issue_type, ValidationIssueType::Checksum);
    }
}
