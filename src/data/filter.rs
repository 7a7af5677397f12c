use super::model::{Catalog, CourseRecord};

// ---------------------------------------------------------------------------
// Lookup queries: linear scans over the catalog in iteration order
// ---------------------------------------------------------------------------

impl Catalog {
    /// Records whose subject equals `subject`, ignoring case.
    pub fn find_by_subject(&self, subject: &str) -> Vec<&CourseRecord> {
        let wanted = subject.trim().to_uppercase();
        self.matching(|r| r.subject.to_uppercase() == wanted)
    }

    /// Records matching `subject` (ignoring case) and exactly `catalog`.
    ///
    /// Catalog numbers compare as text, so `141` matches neither `0141`
    /// nor `141A`.
    pub fn find_by_subject_and_catalog(&self, subject: &str, catalog: &str) -> Vec<&CourseRecord> {
        let wanted_subject = subject.trim().to_uppercase();
        let wanted_catalog = catalog.trim();
        self.matching(|r| r.subject.to_uppercase() == wanted_subject && r.catalog == wanted_catalog)
    }

    /// Records whose instructor last name ends with `last_name`, ignoring case.
    ///
    /// The last name is everything before the first comma of the stored
    /// instructor. The match is a suffix match: `ith` finds `Smith`.
    pub fn find_by_instructor_last_name(&self, last_name: &str) -> Vec<&CourseRecord> {
        let wanted = last_name.trim().to_uppercase();
        self.matching(|r| {
            r.last_name_segment()
                .to_uppercase()
                .trim()
                .ends_with(&wanted)
        })
    }

    fn matching<F>(&self, predicate: F) -> Vec<&CourseRecord>
    where
        F: Fn(&CourseRecord) -> bool,
    {
        self.items().values().filter(|r| predicate(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;
    use pretty_assertions::assert_eq;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        for r in [
            record("BIO", "141", "001", "Smith,John"),
            record("BIO", "0141", "001", "Smithson,Jane"),
            record("BIO", "141A", "002", "Kent,Ann"),
            record("MTH", "141", "001", "Blacksmith,Lee"),
            record("bio", "141", "003", "Staff"),
            record("PHY", "150", "010", " Goldsmith , Ray"),
        ] {
            catalog.insert_or_replace(r);
        }
        catalog
    }

    fn keys(records: &[&CourseRecord]) -> Vec<String> {
        records.iter().map(|r| r.identity_key()).collect()
    }

    #[test]
    fn subject_match_ignores_case() {
        let catalog = sample();
        let lower = keys(&catalog.find_by_subject("bio"));
        let upper = keys(&catalog.find_by_subject(" BIO "));
        assert_eq!(lower, upper);
        assert_eq!(lower, vec!["BIO_141_001", "BIO_0141_001", "BIO_141A_002", "bio_141_003"]);
    }

    #[test]
    fn catalog_match_is_exact_text() {
        let catalog = sample();
        let found = keys(&catalog.find_by_subject_and_catalog("Bio", " 141 "));
        assert_eq!(found, vec!["BIO_141_001", "bio_141_003"]);
    }

    #[test]
    fn catalog_match_is_case_sensitive() {
        let catalog = sample();
        assert!(catalog.find_by_subject_and_catalog("BIO", "141a").is_empty());
    }

    #[test]
    fn instructor_match_is_suffix_of_last_name() {
        let catalog = sample();
        let found = keys(&catalog.find_by_instructor_last_name("ith"));
        assert_eq!(found, vec!["BIO_141_001", "MTH_141_001", "PHY_150_010"]);
    }

    #[test]
    fn instructor_match_ignores_first_name() {
        let catalog = sample();
        assert!(catalog.find_by_instructor_last_name("John").is_empty());
        assert!(catalog.find_by_instructor_last_name("Smit").is_empty());
    }

    #[test]
    fn instructor_without_comma_uses_whole_name() {
        let catalog = sample();
        assert_eq!(keys(&catalog.find_by_instructor_last_name("staff")), vec!["bio_141_003"]);
    }

    #[test]
    fn queries_on_empty_catalog_return_nothing() {
        let catalog = Catalog::new();
        assert!(catalog.find_by_subject("BIO").is_empty());
        assert!(catalog.find_by_subject_and_catalog("BIO", "141").is_empty());
        assert!(catalog.find_by_instructor_last_name("Smith").is_empty());
    }
}
