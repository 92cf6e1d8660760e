//! Field rules
//!
//! One pure function per form field. Text fields are trimmed before checks
//! except the two password inputs, which are compared verbatim.

use super::strength::{self, StrengthTier};
use super::ValidationOutcome::Valid;
use super::{ErrorKind, ValidationOutcome};
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("name regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("phone regex"));
static WEBSITE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://.+\..+").expect("website regex"));

/// Minimum characters in a trimmed full name
pub const MIN_NAME_LEN: usize = 2;
/// Minimum characters in a password
pub const MIN_PASSWORD_LEN: usize = 8;
/// Composition checks a password must pass
pub const MIN_PASSWORD_SCORE: u8 = 3;
/// Youngest accepted age
pub const MIN_AGE: i64 = 13;
/// Oldest accepted age
pub const MAX_AGE: i64 = 120;

pub fn full_name(value: &str) -> ValidationOutcome {
    let value = value.trim();

    if value.is_empty() {
        return ValidationOutcome::invalid(ErrorKind::Required, "Full name is required");
    }

    if value.chars().count() < MIN_NAME_LEN {
        return ValidationOutcome::invalid(
            ErrorKind::TooShort,
            "Full name must be at least 2 characters long",
        );
    }

    if !NAME_RE.is_match(value) {
        return ValidationOutcome::invalid(
            ErrorKind::InvalidCharacters,
            "Full name can only contain letters, spaces, hyphens, and apostrophes",
        );
    }

    Valid
}

pub fn email(value: &str) -> ValidationOutcome {
    let value = value.trim();

    if value.is_empty() {
        return ValidationOutcome::invalid(ErrorKind::Required, "Email address is required");
    }

    if !EMAIL_RE.is_match(value) {
        return ValidationOutcome::invalid(
            ErrorKind::InvalidFormat,
            "Please enter a valid email address",
        );
    }

    Valid
}

/// Optional; at least ten digits, spaces, dashes or parentheses with an
/// optional leading `+`.
pub fn phone(value: &str) -> ValidationOutcome {
    let value = value.trim();

    if !value.is_empty() && !PHONE_RE.is_match(value) {
        return ValidationOutcome::invalid(
            ErrorKind::InvalidFormat,
            "Please enter a valid phone number",
        );
    }

    Valid
}

/// Password rule output: the outcome plus the tier the strength meter shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCheck {
    pub outcome: ValidationOutcome,
    pub strength: StrengthTier,
}

/// Validate a password and grade it.
///
/// A too-short password always shows as "Very weak" regardless of its
/// composition.
pub fn password(value: &str) -> PasswordCheck {
    if value.is_empty() {
        return PasswordCheck {
            outcome: ValidationOutcome::invalid(ErrorKind::Required, "Password is required"),
            strength: StrengthTier::NoPassword,
        };
    }

    if value.chars().count() < MIN_PASSWORD_LEN {
        return PasswordCheck {
            outcome: ValidationOutcome::invalid(
                ErrorKind::TooShort,
                "Password must be at least 8 characters long",
            ),
            strength: StrengthTier::VeryWeak,
        };
    }

    let score = strength::score(value);
    let outcome = if score < MIN_PASSWORD_SCORE {
        ValidationOutcome::invalid(
            ErrorKind::TooWeak,
            "Password is too weak. Include uppercase, lowercase, numbers, and special characters.",
        )
    } else {
        Valid
    };

    PasswordCheck {
        outcome,
        strength: StrengthTier::from_score(score),
    }
}

pub fn confirm_password(value: &str, password: &str) -> ValidationOutcome {
    if value.is_empty() {
        return ValidationOutcome::invalid(ErrorKind::Required, "Please confirm your password");
    }

    if value != password {
        return ValidationOutcome::invalid(ErrorKind::Mismatch, "Passwords do not match");
    }

    Valid
}

/// Optional; must parse to an integer between 13 and 120 inclusive.
pub fn age(value: &str) -> ValidationOutcome {
    if value.is_empty() {
        return Valid;
    }

    match parse_leading_int(value) {
        Some(years) if (MIN_AGE..=MAX_AGE).contains(&years) => Valid,
        _ => ValidationOutcome::invalid(ErrorKind::OutOfRange, "Age must be between 13 and 120"),
    }
}

pub fn website(value: &str) -> ValidationOutcome {
    let value = value.trim();

    if !value.is_empty() && !WEBSITE_RE.is_match(value) {
        return ValidationOutcome::invalid(
            ErrorKind::InvalidFormat,
            "Please enter a valid website URL (include http:// or https://)",
        );
    }

    Valid
}

pub fn terms_accepted(checked: bool) -> ValidationOutcome {
    if !checked {
        return ValidationOutcome::invalid(
            ErrorKind::Required,
            "You must agree to the Terms and Conditions",
        );
    }

    Valid
}

/// Parse the integer prefix of a string the way browsers parse form numbers:
/// leading whitespace, an optional sign, then decimal digits up to the first
/// non-digit. Returns `None` when there are no digits or the value overflows.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let rest = value.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(outcome: ValidationOutcome) -> Option<ErrorKind> {
        outcome.kind()
    }

    #[test]
    fn full_name_rules() {
        assert!(full_name("Jo").is_valid());
        assert!(full_name("  Mary-Jane O'Neil ").is_valid());
        assert_eq!(kind(full_name("")), Some(ErrorKind::Required));
        assert_eq!(kind(full_name("   ")), Some(ErrorKind::Required));
        assert_eq!(kind(full_name("J")), Some(ErrorKind::TooShort));
        assert_eq!(kind(full_name(" J ")), Some(ErrorKind::TooShort));
        assert_eq!(kind(full_name("J0e")), Some(ErrorKind::InvalidCharacters));
        assert_eq!(kind(full_name("Ann.")), Some(ErrorKind::InvalidCharacters));
    }

    #[test]
    fn email_rules() {
        assert!(email("a@b.c").is_valid());
        assert!(email(" ann@example.com ").is_valid());
        assert!(email("first.last@mail.example.org").is_valid());
        assert_eq!(kind(email("")), Some(ErrorKind::Required));
        assert_eq!(kind(email("a@b")), Some(ErrorKind::InvalidFormat));
        assert_eq!(kind(email("a b@c.d")), Some(ErrorKind::InvalidFormat));
        assert_eq!(kind(email("a@@b.c")), Some(ErrorKind::InvalidFormat));
        assert_eq!(kind(email("@b.c")), Some(ErrorKind::InvalidFormat));
    }

    #[test]
    fn phone_rules() {
        assert!(phone("").is_valid());
        assert!(phone("   ").is_valid());
        assert!(phone("+1 (555) 123-4567").is_valid());
        assert!(phone("5551234567").is_valid());
        assert_eq!(kind(phone("123")), Some(ErrorKind::InvalidFormat));
        assert_eq!(kind(phone("555-123-456x")), Some(ErrorKind::InvalidFormat));
        assert_eq!(kind(phone("555+1234567")), Some(ErrorKind::InvalidFormat));
    }

    #[test]
    fn password_rules() {
        let empty = password("");
        assert_eq!(empty.outcome.kind(), Some(ErrorKind::Required));
        assert_eq!(empty.strength, StrengthTier::NoPassword);

        let short = password("Ab1!");
        assert_eq!(short.outcome.kind(), Some(ErrorKind::TooShort));
        assert_eq!(short.strength, StrengthTier::VeryWeak);

        let weak = password("abcdefgh");
        assert_eq!(weak.outcome.kind(), Some(ErrorKind::TooWeak));
        assert_eq!(weak.strength, StrengthTier::VeryWeak);

        let fair = password("Abcdefgh1");
        assert!(fair.outcome.is_valid());
        assert_eq!(fair.strength, StrengthTier::Fair);

        let strong = password("Abcdefgh1!");
        assert!(strong.outcome.is_valid());
        assert_eq!(strong.strength, StrengthTier::Strong);
    }

    #[test]
    fn password_is_not_trimmed() {
        // Seven characters plus surrounding spaces reach the minimum length
        let padded = password(" abcDEF1 ");
        assert!(padded.outcome.is_valid());
    }

    #[test]
    fn confirm_password_rules() {
        assert!(confirm_password("Str0ng!Pass", "Str0ng!Pass").is_valid());
        assert_eq!(kind(confirm_password("", "")), Some(ErrorKind::Required));
        assert_eq!(kind(confirm_password("", "x")), Some(ErrorKind::Required));
        assert_eq!(
            kind(confirm_password("different", "Str0ng!Pass")),
            Some(ErrorKind::Mismatch)
        );
        assert_eq!(kind(confirm_password("pass ", "pass")), Some(ErrorKind::Mismatch));
    }

    #[test]
    fn age_rules() {
        assert!(age("").is_valid());
        assert!(age("13").is_valid());
        assert!(age("120").is_valid());
        assert!(age("30").is_valid());
        assert_eq!(kind(age("12")), Some(ErrorKind::OutOfRange));
        assert_eq!(kind(age("121")), Some(ErrorKind::OutOfRange));
        assert_eq!(kind(age("abc")), Some(ErrorKind::OutOfRange));
        assert_eq!(kind(age("-20")), Some(ErrorKind::OutOfRange));
        assert_eq!(kind(age(" ")), Some(ErrorKind::OutOfRange));
    }

    #[test]
    fn age_uses_integer_prefix() {
        assert!(age("30 years").is_valid());
        assert!(age("  45").is_valid());
        assert!(age("13.9").is_valid());
        assert_eq!(kind(age("99999999999999999999")), Some(ErrorKind::OutOfRange));
    }

    #[test]
    fn website_rules() {
        assert!(website("").is_valid());
        assert!(website("https://example.com").is_valid());
        assert!(website("http://a.b").is_valid());
        assert_eq!(kind(website("example.com")), Some(ErrorKind::InvalidFormat));
        assert_eq!(kind(website("ftp://example.com")), Some(ErrorKind::InvalidFormat));
        assert_eq!(kind(website("https://localhost")), Some(ErrorKind::InvalidFormat));
    }

    #[test]
    fn terms_rules() {
        assert!(terms_accepted(true).is_valid());
        assert_eq!(kind(terms_accepted(false)), Some(ErrorKind::Required));
    }

    #[test]
    fn leading_int_parsing() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  -7abc"), Some(-7));
        assert_eq!(parse_leading_int("+5"), Some(5));
        assert_eq!(parse_leading_int("x1"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
    }
}
