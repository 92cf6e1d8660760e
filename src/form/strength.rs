//! Password strength scoring
//!
//! The score is the number of satisfied composition checks (0-5). Each score
//! maps to a presentation tier with a label, a gauge width and a tone.

/// Minimum length that earns the "long password" check
pub const LONG_PASSWORD_LEN: usize = 12;

/// Count the composition checks a password satisfies.
///
/// Checks: lowercase letter, uppercase letter, digit, non-alphanumeric
/// character, length of at least 12 characters.
///
/// ```
/// use interactive_page::form::strength::score;
///
/// assert_eq!(score(""), 0);
/// assert_eq!(score("abcdefgh"), 1);
/// assert_eq!(score("Abcdefgh1!"), 4);
/// assert_eq!(score("Abcdefgh1!xyz"), 5);
/// ```
pub fn score(password: &str) -> u8 {
    let checks = [
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
        password.chars().count() >= LONG_PASSWORD_LEN,
    ];
    checks.iter().filter(|&&passed| passed).count() as u8
}

/// Color family of a strength tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Danger,
    Warning,
    Success,
}

/// Discrete presentation level of a password score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum StrengthTier {
    #[default]
    NoPassword,
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Tier for a score; anything above 5 is treated as empty input
    pub fn from_score(score: u8) -> Self {
        match score {
            1 => Self::VeryWeak,
            2 => Self::Weak,
            3 => Self::Fair,
            4 => Self::Strong,
            5 => Self::VeryStrong,
            _ => Self::NoPassword,
        }
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoPassword => "No password",
            Self::VeryWeak => "Very weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very strong",
        }
    }

    /// Gauge fill in percent
    pub fn width_percent(&self) -> u16 {
        self.index() as u16 * 20
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::NoPassword | Self::VeryWeak => Tone::Danger,
            Self::Weak | Self::Fair => Tone::Warning,
            Self::Strong | Self::VeryStrong => Tone::Success,
        }
    }

    /// Caption shown under the gauge
    pub fn caption(&self) -> String {
        format!("Password strength: {}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_check_counts_once() {
        assert_eq!(score("a"), 1);
        assert_eq!(score("A"), 1);
        assert_eq!(score("1"), 1);
        assert_eq!(score("!"), 1);
        assert_eq!(score("aaaaaaaaaaaa"), 2);
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        assert_eq!(score("é"), 1);
    }

    #[test]
    fn score_is_monotonic_in_checks() {
        let ladder = ["", "abc", "abcD", "abcD1", "abcD1!", "abcD1!ghijkl"];
        let scores: Vec<u8> = ladder.iter().map(|p| score(p)).collect();
        assert_eq!(scores, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn tiers_cover_every_score() {
        let expected = [
            ("No password", 0, Tone::Danger),
            ("Very weak", 20, Tone::Danger),
            ("Weak", 40, Tone::Warning),
            ("Fair", 60, Tone::Warning),
            ("Strong", 80, Tone::Success),
            ("Very strong", 100, Tone::Success),
        ];
        for (s, (label, width, tone)) in expected.iter().enumerate() {
            let tier = StrengthTier::from_score(s as u8);
            assert_eq!(tier.index() as usize, s);
            assert_eq!(tier.label(), *label);
            assert_eq!(tier.width_percent(), *width);
            assert_eq!(tier.tone(), *tone);
        }
    }

    #[test]
    fn out_of_range_score_falls_back_to_empty() {
        assert_eq!(StrengthTier::from_score(9), StrengthTier::NoPassword);
    }

    #[test]
    fn caption_text() {
        assert_eq!(StrengthTier::Fair.caption(), "Password strength: Fair");
    }
}
