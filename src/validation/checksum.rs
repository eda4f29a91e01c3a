use crate::models::{ChecksumValidationResult, ValidationIssue, ValidationIssueType};
use crate::validation::format::ISIN_LENGTH;

// Each letter of the body expands to two digits, each digit to one.
const MAX_EXPANDED_LEN: usize = 2 * (ISIN_LENGTH - 1);

pub struct ChecksumValidator;

impl ChecksumValidator {
    /// Checks the trailing check digit of a candidate against the digit
    /// computed from its body. Candidates are expected to have passed
    /// format validation first.
    pub fn validate(candidate: &str) -> ChecksumValidationResult {
        let mut issues = Vec::new();

        let (body, supplied_check_digit) = match candidate.char_indices().last() {
            Some((index, ch)) if ch.is_ascii_digit() => (&candidate[..index], ch as u8 - b'0'),
            _ => {
                issues.push(ValidationIssue {
                    issue_type: ValidationIssueType::Checksum,
                    message: "Candidate does not end with a check digit".to_string(),
                });
                return ChecksumValidationResult {
                    is_valid: false,
                    check_digit_valid: false,
                    supplied_check_digit: 0,
                    computed_check_digit: 0,
                    issues,
                };
            }
        };

        let computed_check_digit = Self::check_digit(body);
        let check_digit_valid = supplied_check_digit == computed_check_digit;

        if !check_digit_valid {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Checksum,
                message: format!(
                    "Check digit {} does not match the computed check digit {}",
                    supplied_check_digit, computed_check_digit
                ),
            });
        }

        ChecksumValidationResult {
            is_valid: check_digit_valid,
            check_digit_valid,
            supplied_check_digit,
            computed_check_digit,
            issues,
        }
    }

    /// Computes the check digit for an 11-character ISIN body (country code
    /// plus national security identifier), case-insensitively.
    pub fn check_digit(body: &str) -> u8 {
        let (digits, len) = Self::expand(body);
        Self::mod10_double_add_double(&digits[..len])
    }

    // Expands the body into single digits: a digit stands for itself, a
    // letter for its alphabet position plus 10 (A -> 10, ..., Z -> 35).
    fn expand(body: &str) -> ([u8; MAX_EXPANDED_LEN], usize) {
        let mut digits = [0u8; MAX_EXPANDED_LEN];
        let mut len = 0;

        for ch in body.chars().take(ISIN_LENGTH - 1) {
            let ch = ch.to_ascii_uppercase();
            if let Some(digit) = ch.to_digit(10) {
                digits[len] = digit as u8;
                len += 1;
            } else if ch.is_ascii_uppercase() {
                let value = ch as u8 - b'A' + 10;
                digits[len] = value / 10;
                digits[len + 1] = value % 10;
                len += 2;
            }
        }

        (digits, len)
    }

    // The parity of the expanded length decides which group is doubled:
    // even positions when the length is odd, odd positions otherwise.
    // Doubled values of two digits contribute their digit sum.
    fn mod10_double_add_double(digits: &[u8]) -> u8 {
        let double_even_positions = digits.len() % 2 == 1;
        let mut total = 0u32;

        for (position, &digit) in digits.iter().enumerate() {
            let doubled = (position % 2 == 0) == double_even_positions;
            if doubled {
                let value = digit * 2;
                total += u32::from(value / 10 + value % 10);
            } else {
                total += u32::from(digit);
            }
        }

        ((10 - total % 10) % 10) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit_known_bodies() {
        assert_eq!(ChecksumValidator::check_digit("US037833100"), 5);
        assert_eq!(ChecksumValidator::check_digit("DE000BAY001"), 7);
        assert_eq!(ChecksumValidator::check_digit("AU0000XVGZA"), 3);
        assert_eq!(ChecksumValidator::check_digit("GB000263494"), 6);
    }

    #[test]
    fn test_check_digit_case_insensitive() {
        assert_eq!(ChecksumValidator::check_digit("us037833100"), 5);
        assert_eq!(ChecksumValidator::check_digit("de000bay001"), 7);
    }

    #[test]
    fn test_parity_follows_expanded_length() {
        // US037833100 expands to 13 digits, DE000BAY001 to 16. The group
        // selection depends on that length, not on the original positions.
        let (_, us_len) = ChecksumValidator::expand("US037833100");
        let (_, de_len) = ChecksumValidator::expand("DE000BAY001");
        assert_eq!(us_len, 13);
        assert_eq!(de_len, 16);
    }

    #[test]
    fn test_total_divisible_by_ten_gives_zero() {
        // The body AA000000003 sums to a multiple of ten, so the computed
        // check digit wraps to 0 rather than 10.
        assert_eq!(ChecksumValidator::check_digit("AA000000003"), 0);
        assert!(ChecksumValidator::validate("AA0000000030").check_digit_valid);
    }

    #[test]
    fn test_validate_matching_digit() {
        let result = ChecksumValidator::validate("US0378331005");
        assert!(result.is_valid);
        assert!(result.check_digit_valid);
        assert_eq!(result.supplied_check_digit, 5);
        assert_eq!(result.computed_check_digit, 5);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_validate_mismatching_digit() {
        let result = ChecksumValidator::validate("US0378331009");
        assert!(!result.is_valid);
        assert_eq!(result.supplied_check_digit, 9);
        assert_eq!(result.computed_check_digit, 5);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].issue_type, ValidationIssueType::Checksum);
    }
}
