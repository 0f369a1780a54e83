// Security and form-hardening exports
pub mod cnpj;
pub mod password;
pub mod rate_limit;
pub mod sanitize;

pub use cnpj::validate_cnpj;
pub use password::{validate_password, PasswordStrength, PasswordValidation};
pub use rate_limit::RateLimiter;
pub use sanitize::{
    sanitize_and_validate_text, sanitize_html, sanitize_input, validate_email, SanitizedText,
};
