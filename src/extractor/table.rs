//! Section-size table type

use std::collections::BTreeMap;

/// Mapping from section name to size in bytes for one input file.
///
/// Iteration is always in lexicographic order of section name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionSizeTable {
    sizes: BTreeMap<String, u64>,
}

impl SectionSizeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a section size, replacing any earlier entry with the same name
    pub fn insert(&mut self, name: impl Into<String>, size: u64) {
        self.sizes.insert(name.into(), size);
    }

    /// Size of `name`, if present
    pub fn get(&self, name: &str) -> Option<u64> {
        self.sizes.get(name).copied()
    }

    /// Size of `name`, treating a missing section as zero bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use exesizecmp::extractor::SectionSizeTable;
    ///
    /// let table: SectionSizeTable = [(".text".to_string(), 1000)].into_iter().collect();
    /// assert_eq!(table.size_of(".text"), 1000);
    /// assert_eq!(table.size_of(".data"), 0);
    /// ```
    pub fn size_of(&self, name: &str) -> u64 {
        self.get(name).unwrap_or(0)
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the table has no sections
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// `(name, size)` pairs in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.sizes.iter().map(|(name, size)| (name.as_str(), *size))
    }
}

impl FromIterator<(String, u64)> for SectionSizeTable {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            sizes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_duplicate_name_keeps_last_size() {
        let mut table = SectionSizeTable::new();
        table.insert(".text", 10);
        table.insert(".text", 20);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(".text"), Some(20));
    }

    #[test]
    fn test_iter_is_sorted_by_name() {
        let table: SectionSizeTable = [
            (".text".to_string(), 1),
            (".bss".to_string(), 2),
            (".data".to_string(), 3),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec![".bss", ".data", ".text"]);
    }

    #[test]
    fn test_empty_table() {
        let table = SectionSizeTable::new();
        assert!(table.is_empty());
        assert_eq!(table.size_of(".text"), 0);
    }
}
