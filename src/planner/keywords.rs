//! Ordered keyword lookups over free text.
//!
//! Every check against ingredient text or dish names goes through these two
//! types. Matching is a plain substring test on the lowercased text, so
//! `"dal"` also matches `"moong dal"`. Tables are scanned in declaration
//! order, which makes sums and "first match" results deterministic.

/// Keywords mapped to values, matched by substring.
#[derive(Debug)]
pub struct KeywordTable<T: 'static> {
    entries: &'static [(&'static str, T)],
}

impl<T: 'static> KeywordTable<T> {
    pub const fn new(entries: &'static [(&'static str, T)]) -> Self {
        Self { entries }
    }

    /// Every entry whose keyword occurs in `text`, in table order.
    pub fn matches(&self, text: &str) -> Vec<&'static (&'static str, T)> {
        let haystack = text.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| haystack.contains(entry.0))
            .collect()
    }
}

/// A plain list of keywords.
#[derive(Debug)]
pub struct KeywordSet {
    keywords: &'static [&'static str],
}

impl KeywordSet {
    pub const fn new(keywords: &'static [&'static str]) -> Self {
        Self { keywords }
    }

    /// Whether any keyword occurs in `text`.
    pub fn any_in(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();
        self.keywords.iter().any(|k| haystack.contains(k))
    }

    /// Name matching used for dish categories: a keyword inside the name,
    /// or the whole name inside a keyword ("Dosa" matches "Dosa Sambar").
    pub fn matches_name(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return false;
        }
        self.keywords.iter().any(|k| {
            let keyword = k.to_lowercase();
            name.contains(&keyword) || keyword.contains(&name)
        })
    }

    /// Case-insensitive exact membership.
    pub fn contains_exact(&self, value: &str) -> bool {
        let value = value.trim();
        self.keywords.iter().any(|k| k.eq_ignore_ascii_case(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: KeywordTable<u32> =
        KeywordTable::new(&[("dal", 1), ("moong dal", 2), ("rice", 3)]);

    static SET: KeywordSet = KeywordSet::new(&["Chole Bhature", "Thali", "Dosa Sambar"]);

    #[test]
    fn test_matches_in_table_order() {
        let found: Vec<u32> = TABLE
            .matches("Moong Dal, Rice")
            .iter()
            .map(|e| e.1)
            .collect();
        assert_eq!(found, vec![1, 2, 3]);
        assert!(TABLE.matches("paneer").is_empty());
    }

    #[test]
    fn test_matches_name_both_directions() {
        assert!(SET.matches_name("Punjabi Thali"));
        assert!(SET.matches_name("Dosa"));
        assert!(!SET.matches_name("Upma"));
        assert!(!SET.matches_name("  "));
    }

    #[test]
    fn test_any_in_ignores_case() {
        let set = KeywordSet::new(&["onion", "garlic"]);
        assert!(set.any_in("Tomato, Garlic"));
        assert!(!set.any_in("tomato"));
    }
}
