//! Partner Algo - matching and form-security core for the Connected
//! Partners B2B marketplace
//!
//! This library provides the partner compatibility scoring engine used by
//! the marketplace, together with the password-strength, input-sanitization
//! and rate-limiting utilities its registration and login flows rely on.
//! Storage, sessions and presentation live in the application shell, which
//! calls this crate in-process.

pub mod config;
pub mod core;
pub mod models;
pub mod security;

// Re-export commonly used types
pub use crate::core::{calculate_compatibility, MatchOutcome, Matcher};
pub use crate::models::{
    CompanyProfile, MatchStrength, PartnerMatch, RegistrationInput, ScoringPoints,
};
pub use crate::security::{
    sanitize_and_validate_text, sanitize_html, sanitize_input, validate_cnpj, validate_email,
    validate_password, PasswordStrength, PasswordValidation, RateLimiter, SanitizedText,
};
