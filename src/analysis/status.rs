use crate::models::associate::{AssociateRecord, AssociateStatus};
use crate::models::metrics::StatusSummary;

/// Bucket every row by status code. Unrecognised codes land in none of the
/// three buckets and are only tallied as `unclassified`.
pub fn compute_status_summary(associates: &[AssociateRecord]) -> StatusSummary {
    let mut summary = StatusSummary::default();

    for associate in associates {
        match associate.status() {
            AssociateStatus::Active => summary.active += 1,
            AssociateStatus::NotVested => summary.not_vested += 1,
            AssociateStatus::OnHold => {
                summary.on_hold += 1;
                summary.on_hold_associates.push(associate.clone());
            }
            AssociateStatus::Unrecognized(_) => summary.unclassified += 1,
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::super::summary::fixtures::associate;
    use super::*;

    fn with_status(id: &str, code: &str) -> AssociateRecord {
        let mut record = associate(id, 1);
        record.status_code = code.to_string();
        record
    }

    #[test]
    fn partitions_by_trimmed_status_code() {
        let associates = vec![
            with_status("1", ""),
            with_status("2", " "),
            with_status("3", "D"),
            with_status("4", "H "),
            with_status("5", "H"),
            with_status("6", "X"),
        ];
        let summary = compute_status_summary(&associates);

        assert_eq!(summary.active, 2);
        assert_eq!(summary.not_vested, 1);
        assert_eq!(summary.on_hold, 2);
        assert_eq!(summary.unclassified, 1);

        let held: Vec<_> = summary
            .on_hold_associates
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(held, vec!["4", "5"]);
    }

    #[test]
    fn unknown_codes_are_excluded_from_all_buckets() {
        let summary = compute_status_summary(&[with_status("1", "T"), with_status("2", "d")]);
        assert_eq!(summary.active + summary.not_vested + summary.on_hold, 0);
        assert_eq!(summary.unclassified, 2);
    }
}
