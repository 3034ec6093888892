use crate::models::associate::AssociateRecord;
use crate::models::metrics::OrgSummary;

/// The depth-0 row. With more than one, the first in input order wins.
pub fn find_root(associates: &[AssociateRecord]) -> Option<&AssociateRecord> {
    associates.iter().find(|a| a.is_root())
}

/// Organization rollup taken from the root row, plus PMTD producer counts
/// across every row. `None` when the snapshot has no root.
pub fn compute_org_summary(associates: &[AssociateRecord]) -> Option<OrgSummary> {
    let root = find_root(associates)?;

    Some(OrgSummary {
        root_id: root.id.clone(),
        root_name: root.name.clone(),
        org_premium_mtd: root.org_premium_mtd,
        org_premium_pmtd: root.org_premium_pmtd,
        org_recruits_mtd: root.org_recruits_mtd,
        org_recruits_pmtd: root.org_recruits_pmtd,
        premium_writers_pmtd: associates
            .iter()
            .filter(|a| a.personal_premium_pmtd > 0.0)
            .count(),
        recruiters_pmtd: associates
            .iter()
            .filter(|a| a.personal_recruits_pmtd > 0.0)
            .count(),
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::associate::AssociateRecord;

    pub fn associate(id: &str, depth_level: i64) -> AssociateRecord {
        AssociateRecord {
            id: id.to_string(),
            name: format!("Associate {id}"),
            level: 1.0,
            depth_level: depth_level as f64,
            status_code: String::new(),
            personal_premium_mtd: 0.0,
            personal_premium_pmtd: 0.0,
            personal_premium_ytd: 0.0,
            personal_recruits_mtd: 0.0,
            personal_recruits_pmtd: 0.0,
            personal_recruits_ytd: 0.0,
            org_premium_mtd: 0.0,
            org_premium_pmtd: 0.0,
            org_recruits_mtd: 0.0,
            org_recruits_pmtd: 0.0,
        }
    }
}
