use serde::Serialize;

/// Outcome of classifying a candidate ISIN. The two failure variants map
/// to different user-facing error messages in the consuming application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IsinClassification {
    Malformed,
    ChecksumInvalid,
    Valid,
}

impl IsinClassification {
    // Label used in user-facing reports
    pub fn label(&self) -> &'static str {
        match self {
            IsinClassification::Malformed => "MALFORMED",
            IsinClassification::ChecksumInvalid => "CHECKSUM INVALID",
            IsinClassification::Valid => "VALID",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub issue_type: ValidationIssueType,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationIssueType {
    Format,
    Checksum,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormatValidationResult {
    pub is_valid: bool,
    pub correct_format: bool,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecksumValidationResult {
    pub is_valid: bool,
    pub check_digit_valid: bool,
    pub supplied_check_digit: u8,
    pub computed_check_digit: u8,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IsinValidationResult {
    pub is_valid: bool,
    pub classification: IsinClassification,
    pub format_validation: FormatValidationResult,
    pub checksum_validation: Option<ChecksumValidationResult>,
    pub issues: Vec<ValidationIssue>,
}
