// Model exports
pub mod domain;
pub mod requests;

pub use domain::{CompanyProfile, MatchStrength, PartnerMatch, ScoringPoints};
pub use requests::RegistrationInput;
