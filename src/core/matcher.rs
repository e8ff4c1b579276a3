/// Suggestion matcher
///
/// Pure functions over a slice of catalog entries. An entry matches when the
/// query is a case-insensitive substring of its name, country or category.
/// Results keep catalog order and are capped after filtering.

use crate::catalog::CatalogEntry;

/// Shorter (trimmed) queries don't open the suggestion panel
pub const MIN_QUERY_CHARS: usize = 2;

/// Most suggestions shown at once
pub const MAX_SUGGESTIONS: usize = 12;

/// Outcome of a suggestion lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestions<'c> {
    /// Query too short: the panel should be hidden
    Hidden,
    /// Query accepted; the set may still be empty
    Matches(MatchSet<'c>),
}

impl<'c> Suggestions<'c> {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Suggestions::Hidden)
    }

    /// Matched entries, empty when hidden
    pub fn entries(&self) -> &[&'c CatalogEntry] {
        match self {
            Suggestions::Hidden => &[],
            Suggestions::Matches(set) => &set.entries,
        }
    }
}

/// Matched entries together with the query that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSet<'c> {
    pub query: String,
    pub entries: Vec<&'c CatalogEntry>,
}

impl<'c> MatchSet<'c> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn grouped(&self) -> GroupedMatches<'c> {
        Matcher::group_by_category(&self.entries)
    }
}

/// Matches sharing one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'c> {
    pub category: &'c str,
    pub entries: Vec<&'c CatalogEntry>,
}

/// Category → matches, in first-seen category order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedMatches<'c> {
    groups: Vec<CategoryGroup<'c>>,
}

impl<'c> GroupedMatches<'c> {
    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup<'c>> {
        self.groups.iter()
    }

    pub fn get(&self, category: &str) -> Option<&[&'c CatalogEntry]> {
        self.groups
            .iter()
            .find(|group| group.category == category)
            .map(|group| group.entries.as_slice())
    }

    pub fn categories(&self) -> Vec<&'c str> {
        self.groups.iter().map(|group| group.category).collect()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Entries in display order (group by group)
    pub fn rows(&self) -> Vec<&'c CatalogEntry> {
        self.groups
            .iter()
            .flat_map(|group| group.entries.iter().copied())
            .collect()
    }
}

/// Suggestion matching
pub struct Matcher;

impl Matcher {
    /// Absent input is searched as the empty string
    pub fn normalize(query: Option<&str>) -> &str {
        query.unwrap_or_default()
    }

    /// Three-field substring predicate. `needle` must already be lowercase.
    pub fn entry_matches(entry: &CatalogEntry, needle: &str) -> bool {
        entry.name.to_lowercase().contains(needle)
            || entry.country.to_lowercase().contains(needle)
            || entry.category.to_lowercase().contains(needle)
    }

    /// Every matching entry, in catalog order, without the length gate or cap
    pub fn candidates<'c>(query: &str, entries: &'c [CatalogEntry]) -> Vec<&'c CatalogEntry> {
        let needle = query.trim().to_lowercase();

        entries
            .iter()
            .filter(|entry| Self::entry_matches(entry, &needle))
            .collect()
    }

    /// Suggestions for partial input
    ///
    /// # Returns
    /// * `Suggestions::Hidden` - trimmed query shorter than `MIN_QUERY_CHARS`
    /// * `Suggestions::Matches` - the first `MAX_SUGGESTIONS` matches in catalog order
    pub fn suggest<'c>(query: &str, entries: &'c [CatalogEntry]) -> Suggestions<'c> {
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return Suggestions::Hidden;
        }

        let mut matches = Self::candidates(trimmed, entries);
        matches.truncate(MAX_SUGGESTIONS);

        Suggestions::Matches(MatchSet {
            query: trimmed.to_string(),
            entries: matches,
        })
    }

    /// Partition matches by category, keeping first-seen order
    pub fn group_by_category<'c>(matches: &[&'c CatalogEntry]) -> GroupedMatches<'c> {
        let mut groups: Vec<CategoryGroup<'c>> = Vec::new();

        for &entry in matches {
            match groups
                .iter_mut()
                .find(|group| group.category == entry.category)
            {
                Some(group) => group.entries.push(entry),
                None => groups.push(CategoryGroup {
                    category: entry.category.as_str(),
                    entries: vec![entry],
                }),
            }
        }

        GroupedMatches { groups }
    }

    /// First entry whose name equals the whole query, ignoring case
    ///
    /// No length gate and no cap apply here.
    pub fn find_exact<'c>(query: &str, entries: &'c [CatalogEntry]) -> Option<&'c CatalogEntry> {
        let wanted = query.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }

        entries
            .iter()
            .find(|entry| entry.name.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, EntryType};

    fn names<'a>(entries: &[&'a CatalogEntry]) -> Vec<&'a str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_short_queries_are_hidden() {
        let catalog = Catalog::sample();

        for query in ["", " ", "t", "  t  ", "\tk\n"] {
            assert!(Matcher::suggest(query, catalog.entries()).is_hidden(), "{:?}", query);
        }

        // Even against an empty catalog
        assert!(Matcher::suggest("a", &[]).is_hidden());
    }

    #[test]
    fn test_absent_query_is_hidden() {
        let catalog = Catalog::sample();
        let query = Matcher::normalize(None);

        assert_eq!(query, "");
        assert!(Matcher::suggest(query, catalog.entries()).is_hidden());
    }

    #[test]
    fn test_tok_matches_names_only() {
        let catalog = Catalog::sample();

        let suggestions = Matcher::suggest("tok", catalog.entries());
        assert_eq!(
            names(suggestions.entries()),
            vec!["Tokyo, Japan", "Flight to Tokyo", "Hotel in Tokyo"]
        );
    }

    #[test]
    fn test_thailand_matches_country() {
        let catalog = Catalog::sample();

        let suggestions = Matcher::suggest("thailand", catalog.entries());
        assert_eq!(
            names(suggestions.entries()),
            vec![
                "Bangkok, Thailand",
                "Phuket, Thailand",
                "Chiang Mai, Thailand",
                "Flight to Bangkok",
                "Hotel in Bangkok",
            ]
        );
    }

    #[test]
    fn test_category_match_and_case() {
        let catalog = Catalog::sample();

        let suggestions = Matcher::suggest("ACCOMMODATION", catalog.entries());
        assert_eq!(suggestions.entries().len(), 5);
        assert!(suggestions
            .entries()
            .iter()
            .all(|e| e.entry_type == EntryType::Hotel));
    }

    #[test]
    fn test_results_are_capped_after_filtering() {
        let catalog = Catalog::sample();

        // "an" hits far more than 12 entries
        let all = Matcher::candidates("an", catalog.entries());
        assert!(all.len() > MAX_SUGGESTIONS);

        let suggestions = Matcher::suggest("an", catalog.entries());
        assert_eq!(suggestions.entries().len(), MAX_SUGGESTIONS);
        assert_eq!(suggestions.entries(), &all[..MAX_SUGGESTIONS]);
    }

    #[test]
    fn test_zero_matches_is_not_hidden() {
        let catalog = Catalog::sample();

        match Matcher::suggest("zzqx", catalog.entries()) {
            Suggestions::Matches(set) => {
                assert!(set.is_empty());
                assert_eq!(set.query, "zzqx");
            }
            Suggestions::Hidden => panic!("Expected an empty match set"),
        }
    }

    #[test]
    fn test_empty_catalog_never_matches() {
        let suggestions = Matcher::suggest("tokyo", &[]);
        assert!(!suggestions.is_hidden());
        assert!(suggestions.entries().is_empty());
        assert!(Matcher::find_exact("tokyo", &[]).is_none());
    }

    #[test]
    fn test_soundness_and_completeness() {
        let catalog = Catalog::sample();
        let queries = ["an", "japan", "flight", "ited", "global", "to", "ro", "asia", "  lon "];

        for query in queries {
            let needle = query.trim().to_lowercase();
            let suggestions = Matcher::suggest(query, catalog.entries());
            let candidates = Matcher::candidates(query, catalog.entries());

            assert!(suggestions.entries().len() <= MAX_SUGGESTIONS);
            for entry in suggestions.entries() {
                assert!(Matcher::entry_matches(entry, &needle), "{} / {}", query, entry.name);
            }

            for entry in catalog.entries() {
                if Matcher::entry_matches(entry, &needle) {
                    assert!(candidates.contains(&entry), "{} / {}", query, entry.name);
                }
            }
        }
    }

    #[test]
    fn test_group_by_category_keeps_first_seen_order() {
        let catalog = Catalog::sample();

        let suggestions = Matcher::suggest("japan", catalog.entries());
        let grouped = Matcher::group_by_category(suggestions.entries());

        assert_eq!(grouped.categories(), vec!["Asia", "Flights", "Accommodation"]);
        assert_eq!(grouped.get("Asia").map(|g| g.len()), Some(3));
        assert_eq!(
            names(grouped.get("Flights").unwrap()),
            vec!["Flight to Tokyo"]
        );
        assert_eq!(grouped.rows().len(), 5);
    }

    #[test]
    fn test_group_by_category_interleaved() {
        let a = CatalogEntry::new("A", EntryType::Destination, "Europe", "X", "a.html");
        let b = CatalogEntry::new("B", EntryType::Destination, "Asia", "X", "b.html");
        let c = CatalogEntry::new("C", EntryType::Destination, "Europe", "X", "c.html");

        let grouped = Matcher::group_by_category(&[&a, &b, &c]);
        assert_eq!(grouped.categories(), vec!["Europe", "Asia"]);
        assert_eq!(names(grouped.get("Europe").unwrap()), vec!["A", "C"]);
        assert_eq!(names(&grouped.rows()), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_find_exact() {
        let catalog = Catalog::sample();

        let hit = Matcher::find_exact("bangkok, THAILAND", catalog.entries()).unwrap();
        assert_eq!(hit.name, "Bangkok, Thailand");
        assert_eq!(hit.target.as_str(), "destinations/bangkok.html");

        // Substrings are not exact hits
        assert!(Matcher::find_exact("Bangkok", catalog.entries()).is_none());
        assert!(Matcher::find_exact("Nowhereland", catalog.entries()).is_none());
        assert!(Matcher::find_exact("   ", catalog.entries()).is_none());
    }

    #[test]
    fn test_find_exact_ignores_cap() {
        let catalog = Catalog::sample();

        let hit = Matcher::find_exact("FLIGHT BOOKING", catalog.entries()).unwrap();
        assert_eq!(hit.name, "Flight Booking");
        assert_eq!(hit.target.as_str(), "#book-flight");

        // Last in catalog order, so never within a single page of suggestions
        let position = catalog.entries().iter().position(|e| e.name == hit.name).unwrap();
        assert!(position >= MAX_SUGGESTIONS);
    }

    #[test]
    fn test_find_exact_ignores_length_gate() {
        let entries = vec![CatalogEntry::new("X", EntryType::Service, "S", "Global", "#x")];

        assert!(Matcher::suggest("x", &entries).is_hidden());
        assert_eq!(Matcher::find_exact("x", &entries).map(|e| e.name.as_str()), Some("X"));
    }
}
