use serde::{Deserialize, Serialize};

/// Company profile with sector, region and establishment data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(rename = "companyId")]
    pub company_id: String,
    pub name: String,
    #[serde(default)]
    pub cnpj: Option<String>,
    pub sector: String,
    #[serde(rename = "desiredSector")]
    pub desired_sector: String,
    pub region: String,
    #[serde(rename = "establishmentType")]
    pub establishment_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "registeredAt", default)]
    pub registered_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl CompanyProfile {
    /// Helper to check whether this company declares national reach
    pub fn is_national(&self) -> bool {
        self.region.to_lowercase().contains("nacional")
    }
}

/// Qualitative band for a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrength {
    Excellent,
    Good,
    Moderate,
    Low,
}

impl MatchStrength {
    /// Map a final match score to its presentation band
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            MatchStrength::Excellent
        } else if score >= 60 {
            MatchStrength::Good
        } else if score >= 40 {
            MatchStrength::Moderate
        } else {
            MatchStrength::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchStrength::Excellent => "Excellent",
            MatchStrength::Good => "Good",
            MatchStrength::Moderate => "Moderate",
            MatchStrength::Low => "Low",
        }
    }
}

/// Scored partner match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerMatch {
    #[serde(rename = "companyId")]
    pub company_id: String,
    pub name: String,
    pub sector: String,
    #[serde(rename = "desiredSector")]
    pub desired_sector: String,
    pub region: String,
    #[serde(rename = "establishmentType")]
    pub establishment_type: String,
    pub description: Option<String>,
    pub score: u8,
    pub strength: MatchStrength,
    pub reasons: Vec<String>,
}

impl PartnerMatch {
    /// Reasons joined in rule-firing order, for the match card subtitle
    pub fn reason(&self) -> String {
        if self.reasons.is_empty() {
            "Potential partnership".to_string()
        } else {
            self.reasons.join(", ")
        }
    }
}

/// Points awarded by each compatibility rule
#[derive(Debug, Clone, Copy)]
pub struct ScoringPoints {
    pub perfect_sector: u8,
    pub wants_our_sector: u8,
    pub operates_in_desired: u8,
    pub same_region: u8,
    pub national_reach: u8,
    pub complementary_type: u8,
}

impl Default for ScoringPoints {
    fn default() -> Self {
        Self {
            perfect_sector: 90,
            wants_our_sector: 70,
            operates_in_desired: 60,
            same_region: 20,
            national_reach: 15,
            complementary_type: 10,
        }
    }
}
