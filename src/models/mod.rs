pub mod data;

pub use data::{
    ChecksumValidationResult, FormatValidationResult, IsinClassification, IsinValidationResult,
    ValidationIssue, ValidationIssueType,
};
