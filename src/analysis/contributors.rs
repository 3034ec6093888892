use crate::models::associate::AssociateRecord;
use crate::models::metrics::RankedContributors;

/// Producers this month, highest first. Ties keep snapshot order.
pub fn compute_ranked_contributors(associates: &[AssociateRecord]) -> RankedContributors {
    RankedContributors {
        premium_mtd: rank_by(associates, |a| a.personal_premium_mtd),
        recruits_mtd: rank_by(associates, |a| a.personal_recruits_mtd),
    }
}

fn rank_by<F>(associates: &[AssociateRecord], metric: F) -> Vec<AssociateRecord>
where
    F: Fn(&AssociateRecord) -> f64,
{
    let mut ranked: Vec<AssociateRecord> = associates
        .iter()
        .filter(|a| metric(*a) > 0.0)
        .cloned()
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| metric(b).total_cmp(&metric(a)));
    ranked
}
