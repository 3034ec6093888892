use std::collections::HashSet;

/// Hands out a unique identifier per row within a single parse.
///
/// The source value is kept unless it is empty, the literal `"0"`, or was
/// already handed out; those rows get a fresh UUID instead.
#[derive(Debug, Default)]
pub struct IdentityResolver {
    seen: HashSet<String>,
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, source_id: &str) -> String {
        let source_id = source_id.trim();
        let needs_replacement =
            source_id.is_empty() || source_id == "0" || self.seen.contains(source_id);

        let id = if needs_replacement {
            let generated = self.generate();
            log::debug!("Replacing associate id {source_id:?} with {generated}");
            generated
        } else {
            source_id.to_string()
        };

        self.seen.insert(id.clone());
        id
    }

    fn generate(&self) -> String {
        loop {
            let candidate = uuid::Uuid::new_v4().to_string();
            if !self.seen.contains(&candidate) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_unique_source_ids() {
        let mut resolver = IdentityResolver::new();
        assert_eq!(resolver.resolve("101"), "101");
        assert_eq!(resolver.resolve("102"), "102");
    }

    #[test]
    fn replaces_missing_zero_and_duplicate_ids() {
        let mut resolver = IdentityResolver::new();
        let first = resolver.resolve("5");
        let duplicate = resolver.resolve("5");
        let empty = resolver.resolve("");
        let zero = resolver.resolve("0");

        assert_eq!(first, "5");
        for generated in [&duplicate, &empty, &zero] {
            assert_ne!(generated, "5");
            assert_ne!(generated, "0");
            assert!(!generated.is_empty());
        }

        let all: HashSet<_> = [first, duplicate, empty, zero].into_iter().collect();
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn source_id_matching_an_earlier_generated_id_is_replaced() {
        let mut resolver = IdentityResolver::new();
        let generated = resolver.resolve("");
        let again = resolver.resolve(&generated);
        assert_ne!(again, generated);
    }
}
