//! Case-insensitive substring search over a record's searchable fields.

/// A record that can be matched against a free-text query.
pub trait Searchable {
    /// The fields a query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether `needle` (already lowercased) occurs in any searchable field.
    ///
    /// An empty needle matches every record.
    fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .into_iter()
                .any(|field| field.to_lowercase().contains(needle))
    }

    /// Whether `query` occurs in any searchable field, ignoring case.
    fn matches_query(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }
}
