//! Password strength evaluation for the registration form.

use shared::{PasswordChecks, PasswordSecurityReport, PasswordStrength};

/// Characters that satisfy the special-character rule.
const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Number of independent rules a password is scored against.
const TOTAL_CHECKS: u8 = 5;

/// Evaluates passwords against the five independent strength rules.
///
/// This is separate from the sign-in form's looser minimum-length gate in
/// the validation service: the registration screen shows this full report
/// while the user types.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordService;

impl PasswordService {
    pub fn new() -> Self {
        Self
    }

    /// Score a password. Total over every input, including the empty
    /// string (all rules fail, "Muy débil", 0%).
    pub fn evaluate(&self, password: &str) -> PasswordSecurityReport {
        let checks = PasswordChecks {
            min_length: password.chars().count() >= 8,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        };

        let passed_checks = checks.passed();
        let strength = Self::strength_for(passed_checks);

        PasswordSecurityReport {
            checks,
            strength,
            color: strength.color().to_string(),
            percentage: (u16::from(passed_checks) * 100 / u16::from(TOTAL_CHECKS)) as u8,
            passed_checks,
            total_checks: TOTAL_CHECKS,
        }
    }

    /// First matching threshold wins: ≥4 fuerte, ≥3 media, ≥2 débil,
    /// otherwise muy débil.
    fn strength_for(passed_checks: u8) -> PasswordStrength {
        if passed_checks >= 4 {
            PasswordStrength::Fuerte
        } else if passed_checks >= 3 {
            PasswordStrength::Media
        } else if passed_checks >= 2 {
            PasswordStrength::Debil
        } else {
            PasswordStrength::MuyDebil
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_is_muy_debil() {
        let report = PasswordService::new().evaluate("");

        assert_eq!(report.passed_checks, 0);
        assert_eq!(report.percentage, 0);
        assert_eq!(report.strength, PasswordStrength::MuyDebil);
        assert_eq!(report.strength.label(), "Muy débil");
    }

    #[test]
    fn test_all_rules_satisfied() {
        let report = PasswordService::new().evaluate("Segura#2024");

        assert!(report.checks.min_length);
        assert!(report.checks.uppercase);
        assert!(report.checks.lowercase);
        assert!(report.checks.digit);
        assert!(report.checks.special);
        assert_eq!(report.passed_checks, 5);
        assert_eq!(report.percentage, 100);
        assert_eq!(report.strength, PasswordStrength::Fuerte);
    }

    #[test]
    fn test_category_thresholds() {
        let service = PasswordService::new();

        // lowercase only -> 1 check
        assert_eq!(service.evaluate("abc").strength, PasswordStrength::MuyDebil);
        // lowercase + digit -> 2 checks
        assert_eq!(service.evaluate("abc1").strength, PasswordStrength::Debil);
        // lowercase + digit + length -> 3 checks
        assert_eq!(service.evaluate("abcdefg1").strength, PasswordStrength::Media);
        // + uppercase -> 4 checks
        assert_eq!(service.evaluate("Abcdefg1").strength, PasswordStrength::Fuerte);
    }

    #[test]
    fn test_passed_checks_matches_rule_count() {
        let service = PasswordService::new();

        for password in ["", "a", "A1", "abcdefgh", "Abc123!?", "Segura#2024", "ÑÉÍ", "12345678"] {
            let report = service.evaluate(password);
            assert_eq!(report.passed_checks, report.checks.passed());
            assert_eq!(report.total_checks, 5);
            assert_eq!(report.percentage, report.passed_checks * 20);
        }
    }

    #[test]
    fn test_category_is_monotonic_in_passed_checks() {
        // Strictly more satisfied rules never yields a weaker label.
        let ladder = ["", "ab", "ab1", "abcdefg1", "Abcdefg1", "Abcdef1!"];
        let service = PasswordService::new();

        let mut previous = PasswordStrength::MuyDebil;
        for password in ladder {
            let strength = service.evaluate(password).strength;
            assert!(strength >= previous, "weaker category for '{}'", password);
            previous = strength;
        }
    }

    #[test]
    fn test_accented_letters_do_not_count_as_ascii_rules() {
        let report = PasswordService::new().evaluate("ñÑñÑñÑñÑ");

        assert!(report.checks.min_length);
        assert!(!report.checks.uppercase);
        assert!(!report.checks.lowercase);
    }
}
