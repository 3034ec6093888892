use crate::models::associate::{rank_title, AssociateRecord};
use crate::models::metrics::RankCount;

/// Head count per rank code, ascending by code.
pub fn compute_rank_breakdown(associates: &[AssociateRecord]) -> Vec<RankCount> {
    let mut counts: Vec<RankCount> = Vec::new();
    for associate in associates {
        match counts.iter_mut().find(|c| c.level == associate.level) {
            Some(existing) => existing.count += 1,
            None => counts.push(RankCount {
                level: associate.level,
                title: rank_title(associate.level),
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| a.level.total_cmp(&b.level));
    counts
}
