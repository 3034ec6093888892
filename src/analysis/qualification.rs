use super::summary::find_root;
use crate::models::associate::AssociateRecord;
use crate::models::metrics::{
    LegContribution, QualificationStatus, QualifyingRank, RankQualification,
};

/// Senior/Executive Director qualification for the root. `None` without a root.
pub fn compute_qualification(associates: &[AssociateRecord]) -> Option<QualificationStatus> {
    let root = find_root(associates)?;
    let legs: Vec<&AssociateRecord> = associates.iter().filter(|a| a.is_leg()).collect();

    Some(QualificationStatus {
        senior_director: qualify(QualifyingRank::SeniorDirector, root, &legs),
        executive_director: qualify(QualifyingRank::ExecutiveDirector, root, &legs),
        leg_count: legs.len(),
    })
}

/// A leg's contribution toward `rank`: its org premium, capped.
pub fn capped_leg_premium(rank: QualifyingRank, org_premium_mtd: f64) -> f64 {
    org_premium_mtd.min(rank.leg_cap())
}

fn qualify(
    rank: QualifyingRank,
    root: &AssociateRecord,
    legs: &[&AssociateRecord],
) -> RankQualification {
    let legs: Vec<LegContribution> = legs
        .iter()
        .map(|leg| LegContribution {
            associate_id: leg.id.clone(),
            name: leg.name.clone(),
            org_premium_mtd: leg.org_premium_mtd,
            counted: capped_leg_premium(rank, leg.org_premium_mtd),
        })
        .collect();

    let effective_leg_premium: f64 = legs.iter().map(|leg| leg.counted).sum();
    let personal_premium = root.personal_premium_mtd;
    let countable_premium = effective_leg_premium + personal_premium;
    let qualified = countable_premium >= rank.threshold();

    RankQualification {
        rank,
        threshold: rank.threshold(),
        leg_cap: rank.leg_cap(),
        effective_leg_premium,
        personal_premium,
        countable_premium,
        qualified,
        shortfall: (!qualified).then(|| rank.threshold() - countable_premium),
        legs,
    }
}
