use crate::models::associate::AssociateRecord;

/// Case-insensitive substring match on name or id. An empty query matches everything.
pub fn filter_associates<'a>(
    associates: &'a [AssociateRecord],
    query: &str,
) -> Vec<&'a AssociateRecord> {
    if query.is_empty() {
        return associates.iter().collect();
    }
    let needle = query.to_lowercase();

    associates
        .iter()
        .filter(|a| {
            a.name.to_lowercase().contains(&needle) || a.id.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::summary::fixtures::associate;
    use super::*;

    fn named(id: &str, name: &str) -> AssociateRecord {
        let mut record = associate(id, 1);
        record.name = name.to_string();
        record
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let associates = vec![named("1", "Ana"), named("2", "Bo")];
        assert_eq!(filter_associates(&associates, "").len(), 2);
    }

    #[test]
    fn whitespace_in_the_query_is_matched_literally() {
        let associates = vec![named("1", "Jane Doe"), named("2", "Doe")];

        let hits: Vec<_> = filter_associates(&associates, " doe").iter().map(|a| a.id.as_str()).collect();
        assert_eq!(hits, vec!["1"]);
        assert!(filter_associates(&associates, "   ").is_empty());
    }

    #[test]
    fn matches_name_or_id_ignoring_case() {
        let associates = vec![
            named("A-100", "Jane Doe"),
            named("B-200", "John Smith"),
            named("C-300", "Maria"),
        ];

        let by_name: Vec<_> = filter_associates(&associates, "DOE").iter().map(|a| a.id.as_str()).collect();
        assert_eq!(by_name, vec!["A-100"]);

        let by_id: Vec<_> = filter_associates(&associates, "b-2").iter().map(|a| a.id.as_str()).collect();
        assert_eq!(by_id, vec!["B-200"]);

        let shared: Vec<_> = filter_associates(&associates, "j").iter().map(|a| a.id.as_str()).collect();
        assert_eq!(shared, vec!["A-100", "B-200"]);

        assert!(filter_associates(&associates, "zzz").is_empty());
    }
}
