use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::security::cnpj::validate_cnpj;

/// Registration form payload, validated before the shell persists it
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegistrationInput {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(custom(function = cnpj_field))]
    pub cnpj: String,
    #[validate(email, length(max = 254))]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub sector: String,
    #[validate(length(min = 1, max = 100))]
    #[serde(rename = "desiredSector")]
    pub desired_sector: String,
    #[validate(length(min = 1, max = 100))]
    pub region: String,
    #[validate(length(min = 1, max = 100))]
    #[serde(rename = "establishmentType")]
    pub establishment_type: String,
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub description: Option<String>,
}

fn cnpj_field(cnpj: &str) -> Result<(), ValidationError> {
    if validate_cnpj(cnpj) {
        Ok(())
    } else {
        Err(ValidationError::new("cnpj"))
    }
}
