use crate::models::{CompanyProfile, ScoringPoints};

/// Calculate a compatibility score (0-100) for a candidate company against
/// the requesting company's profile
///
/// Scoring rules:
///
/// ```text
/// sector tier (first match wins):
///     perfect reciprocal match            +90
///     candidate wants requester's sector  +70
///     candidate operates in desired one   +60
/// region tier (exact beats national):
///     same region (case-insensitive)      +20
///     either side has national reach      +15
/// establishment tier:
///     differing establishment types       +10
/// ```
///
/// The sector tier is mutually exclusive; region and establishment tiers add
/// on top of it. Each rule that fires appends one reason string, in firing
/// order. The sum is clamped to 100.
pub fn calculate_compatibility(
    candidate: &CompanyProfile,
    requester: &CompanyProfile,
    points: &ScoringPoints,
) -> (u8, Vec<String>) {
    let mut score: u32 = 0;
    let mut reasons = Vec::new();

    if let Some((value, reason)) = sector_affinity(candidate, requester, points) {
        score += value as u32;
        reasons.push(reason.to_string());
    }

    if let Some((value, reason)) = region_affinity(candidate, requester, points) {
        score += value as u32;
        reasons.push(reason.to_string());
    }

    if let Some((value, reason)) = establishment_affinity(candidate, requester, points) {
        score += value as u32;
        reasons.push(reason.to_string());
    }

    (score.min(100) as u8, reasons)
}

/// Sector complementarity tier, evaluated top-down with the first match winning
#[inline]
fn sector_affinity(
    candidate: &CompanyProfile,
    requester: &CompanyProfile,
    points: &ScoringPoints,
) -> Option<(u8, &'static str)> {
    if candidate.sector == requester.desired_sector
        && candidate.desired_sector == requester.sector
    {
        Some((points.perfect_sector, "Perfect sector match"))
    } else if candidate.desired_sector == requester.sector {
        Some((points.wants_our_sector, "Interested in your sector"))
    } else if candidate.sector == requester.desired_sector {
        Some((points.operates_in_desired, "Operates in your sector of interest"))
    } else {
        None
    }
}

/// Region tier: an exact (case-insensitive) match beats national reach
#[inline]
fn region_affinity(
    candidate: &CompanyProfile,
    requester: &CompanyProfile,
    points: &ScoringPoints,
) -> Option<(u8, &'static str)> {
    if candidate.region.to_lowercase() == requester.region.to_lowercase() {
        Some((points.same_region, "Same region"))
    } else if candidate.is_national() || requester.is_national() {
        Some((points.national_reach, "National reach"))
    } else {
        None
    }
}

/// Establishment tier: differing types complement each other
#[inline]
fn establishment_affinity(
    candidate: &CompanyProfile,
    requester: &CompanyProfile,
    points: &ScoringPoints,
) -> Option<(u8, &'static str)> {
    if candidate.establishment_type != requester.establishment_type {
        Some((points.complementary_type, "Complementary types"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_company(
        id: &str,
        sector: &str,
        desired_sector: &str,
        region: &str,
        establishment_type: &str,
    ) -> CompanyProfile {
        CompanyProfile {
            company_id: id.to_string(),
            name: format!("Company {}", id),
            cnpj: None,
            sector: sector.to_string(),
            desired_sector: desired_sector.to_string(),
            region: region.to_string(),
            establishment_type: establishment_type.to_string(),
            description: None,
            registered_at: None,
        }
    }

    #[test]
    fn test_perfect_match_scores_full() {
        let requester = create_company("a", "Tech", "Finance", "SP", "Matriz");
        let candidate = create_company("b", "Finance", "Tech", "SP", "Filial");

        let (score, reasons) =
            calculate_compatibility(&candidate, &requester, &ScoringPoints::default());

        // 90 (perfect) + 20 (same region) + 10 (differing types), clamped to 100
        assert_eq!(score, 100);
        assert_eq!(
            reasons,
            vec!["Perfect sector match", "Same region", "Complementary types"]
        );
    }

    #[test]
    fn test_sector_tier_is_first_match_wins() {
        // Reciprocal interest must not also award the one-directional tiers
        let requester = create_company("a", "Tech", "Finance", "SP", "Matriz");
        let candidate = create_company("b", "Finance", "Tech", "RJ", "Matriz");

        let (score, reasons) =
            calculate_compatibility(&candidate, &requester, &ScoringPoints::default());

        assert_eq!(score, 90);
        assert_eq!(reasons, vec!["Perfect sector match"]);
    }

    #[test]
    fn test_candidate_wants_our_sector() {
        let requester = create_company("a", "Tech", "Finance", "SP", "Matriz");
        let candidate = create_company("b", "Retail", "Tech", "RJ", "Matriz");

        let (score, reasons) =
            calculate_compatibility(&candidate, &requester, &ScoringPoints::default());

        assert_eq!(score, 70);
        assert_eq!(reasons, vec!["Interested in your sector"]);
    }

    #[test]
    fn test_candidate_operates_in_desired_sector() {
        let requester = create_company("a", "Tech", "Finance", "SP", "Matriz");
        let candidate = create_company("b", "Finance", "Retail", "RJ", "Matriz");

        let (score, reasons) =
            calculate_compatibility(&candidate, &requester, &ScoringPoints::default());

        assert_eq!(score, 60);
        assert_eq!(reasons, vec!["Operates in your sector of interest"]);
    }

    #[test]
    fn test_region_match_is_case_insensitive() {
        let requester = create_company("a", "Tech", "Finance", "São Paulo", "Matriz");
        let candidate = create_company("b", "Retail", "Food", "SÃO PAULO", "Matriz");

        let (score, reasons) =
            calculate_compatibility(&candidate, &requester, &ScoringPoints::default());

        assert_eq!(score, 20);
        assert_eq!(reasons, vec!["Same region"]);
    }

    #[test]
    fn test_national_reach_only() {
        // No sector overlap, same establishment type: only the national tier fires
        let requester = create_company("a", "Tech", "Finance", "Nacional", "Matriz");
        let candidate = create_company("b", "Retail", "Food", "SP", "Matriz");

        let (score, reasons) =
            calculate_compatibility(&candidate, &requester, &ScoringPoints::default());

        assert_eq!(score, 15);
        assert_eq!(reasons, vec!["National reach"]);
    }

    #[test]
    fn test_same_region_beats_national_reach() {
        let requester = create_company("a", "Tech", "Finance", "Nacional", "Matriz");
        let candidate = create_company("b", "Retail", "Food", "nacional", "Matriz");

        let (score, reasons) =
            calculate_compatibility(&candidate, &requester, &ScoringPoints::default());

        // Both are national, but the exact region match takes the tier
        assert_eq!(score, 20);
        assert_eq!(reasons, vec!["Same region"]);
    }

    #[test]
    fn test_no_rule_fires() {
        let requester = create_company("a", "Tech", "Finance", "SP", "Matriz");
        let candidate = create_company("b", "Retail", "Food", "RJ", "Matriz");

        let (score, reasons) =
            calculate_compatibility(&candidate, &requester, &ScoringPoints::default());

        assert_eq!(score, 0);
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_description_never_influences_score() {
        let requester = create_company("a", "Tech", "Finance", "SP", "Matriz");
        let mut candidate = create_company("b", "Finance", "Tech", "SP", "Filial");
        let (without, _) =
            calculate_compatibility(&candidate, &requester, &ScoringPoints::default());

        candidate.description = Some("Logistics leader since 1990".to_string());
        let (with, _) = calculate_compatibility(&candidate, &requester, &ScoringPoints::default());

        assert_eq!(without, with);
    }
}
