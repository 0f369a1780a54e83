use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Minimum acceptable password length
const MIN_LENGTH: usize = 12;
/// Length at which the long-password bonus applies
const LONG_LENGTH: usize = 16;
/// Accepted special characters
const SPECIAL_CHARS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;
/// Substrings that make a password trivially guessable
const COMMON_PATTERNS: [&str; 5] = ["123456", "password", "qwerty", "admin", "login"];
/// Minimum score for a password with no rule violations to be accepted
const SCORE_THRESHOLD: u8 = 70;

/// Outcome of a password strength check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordValidation {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    pub score: u8,
    pub errors: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Qualitative band for a password score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Map a password score to its presentation band
    pub fn from_score(score: u8) -> Self {
        if score < 30 {
            PasswordStrength::VeryWeak
        } else if score < 50 {
            PasswordStrength::Weak
        } else if score < 70 {
            PasswordStrength::Moderate
        } else if score < 85 {
            PasswordStrength::Strong
        } else {
            PasswordStrength::VeryStrong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very strong",
        }
    }
}

/// Score a candidate password against the registration rule set
///
/// Every rule is evaluated against the full password; there is no
/// short-circuiting, so all applicable errors and suggestions accumulate.
/// Each suggestion pairs with the error pushed alongside it.
///
/// A password is valid when no rule failed AND the score reaches 70. The
/// two conditions are independent; neither implies the other.
pub fn validate_password(password: &str) -> PasswordValidation {
    let mut errors = Vec::new();
    let mut suggestions = Vec::new();
    let mut score: i32 = 0;

    let length = password.chars().count();

    if length < MIN_LENGTH {
        errors.push(format!(
            "Password must be at least {} characters long",
            MIN_LENGTH
        ));
        suggestions.push("Use a longer password for better security".to_string());
    } else {
        score += 20;
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter".to_string());
        suggestions.push("Add uppercase letters to your password".to_string());
    } else {
        score += 15;
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter".to_string());
        suggestions.push("Add lowercase letters to your password".to_string());
    } else {
        score += 15;
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one number".to_string());
        suggestions.push("Add numbers to your password".to_string());
    } else {
        score += 15;
    }

    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        errors.push(format!(
            "Password must contain at least one special character ({})",
            SPECIAL_CHARS
        ));
        suggestions.push("Add special characters for better security".to_string());
    } else {
        score += 20;
    }

    // Bonus and penalty adjustments run regardless of the rule outcomes
    if length >= LONG_LENGTH {
        score += 10;
    }

    let lowered = password.to_lowercase();
    if COMMON_PATTERNS.iter().any(|p| lowered.contains(p)) {
        errors.push("Password contains common patterns that are easy to guess".to_string());
        suggestions.push("Avoid common sequences and words".to_string());
        score -= 15;
    }

    let unique_chars = password.chars().collect::<HashSet<_>>().len();
    if unique_chars as f64 >= length as f64 * 0.7 {
        score += 5;
    }

    let score = score.clamp(0, 100) as u8;

    PasswordValidation {
        is_valid: errors.is_empty() && score >= SCORE_THRESHOLD,
        score,
        errors,
        suggestions,
    }
}
