use crate::core::scoring::calculate_compatibility;
use crate::models::{CompanyProfile, MatchStrength, PartnerMatch, ScoringPoints};

/// Result of a matching run
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<PartnerMatch>,
    pub total_candidates: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Self-exclusion by company identifier
/// 2. Per-candidate compatibility scoring
/// 3. Zero-score filtering
/// 4. Ranking by score
#[derive(Debug, Clone)]
pub struct Matcher {
    points: ScoringPoints,
}

impl Matcher {
    pub fn new(points: ScoringPoints) -> Self {
        Self { points }
    }

    pub fn with_default_points() -> Self {
        Self {
            points: ScoringPoints::default(),
        }
    }

    /// Rank candidate companies by partnership compatibility with the requester
    ///
    /// Candidates are scored independently, so the result for any one company
    /// does not depend on who else is in the pool.
    ///
    /// # Arguments
    /// * `requester` - The company asking for partner suggestions
    /// * `candidates` - The full company pool from storage
    ///
    /// # Returns
    /// MatchOutcome with matches sorted by descending score. The sort is
    /// stable: equal scores keep their pool order, so identical inputs always
    /// rank identically.
    pub fn find_partners(
        &self,
        requester: &CompanyProfile,
        candidates: Vec<CompanyProfile>,
    ) -> MatchOutcome {
        let total_candidates = candidates.len();

        let mut matches: Vec<PartnerMatch> = candidates
            .into_iter()
            // Stage 1: a company never matches against itself
            .filter(|company| company.company_id != requester.company_id)
            // Stages 2 & 3: score and drop zero-score candidates
            .filter_map(|company| {
                let (score, reasons) =
                    calculate_compatibility(&company, requester, &self.points);

                if score > 0 {
                    Some(PartnerMatch {
                        company_id: company.company_id,
                        name: company.name,
                        sector: company.sector,
                        desired_sector: company.desired_sector,
                        region: company.region,
                        establishment_type: company.establishment_type,
                        description: company.description,
                        score,
                        strength: MatchStrength::from_score(score),
                        reasons,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stage 4: sort by score (descending); sort_by is stable
        matches.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            "scored {} candidates, {} potential partners",
            total_candidates,
            matches.len()
        );

        MatchOutcome {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_points()
    }
}
