use crate::error::WheelError;

/// Separator accepted by [`Registry::add_many`]
pub const BATCH_DELIMITER: char = ',';

/// Result of a batch add. Nothing in a batch is fatal; rejected tokens are
/// reported back so the user can be told what was left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchAdd {
    pub added: Vec<String>,
    pub skipped: Vec<String>,
}

/// Ordered, duplicate-free list of names on the wheel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    names: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim and append a single name.
    pub fn add_one(&mut self, raw: &str) -> Result<&str, WheelError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(WheelError::InvalidInput);
        }
        if self.contains(name) {
            return Err(WheelError::DuplicateEntry(name.to_string()));
        }
        self.names.push(name.to_string());
        Ok(self.names[self.names.len() - 1].as_str())
    }

    /// Add every comma separated token of `raw`.
    ///
    /// Empty tokens and names already on the wheel (including ones added
    /// earlier in the same batch) are skipped.
    pub fn add_many(&mut self, raw: &str) -> BatchAdd {
        let mut batch = BatchAdd::default();
        for token in raw.split(BATCH_DELIMITER) {
            let name = token.trim();
            if name.is_empty() || self.contains(name) {
                batch.skipped.push(name.to_string());
            } else {
                self.names.push(name.to_string());
                batch.added.push(name.to_string());
            }
        }
        batch
    }

    pub fn remove_at(&mut self, index: usize) -> Result<String, WheelError> {
        if index >= self.names.len() {
            return Err(WheelError::IndexOutOfRange {
                index,
                len: self.names.len(),
            });
        }
        Ok(self.names.remove(index))
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        let name = name.trim();
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Owned copy of the names in wheel order
    pub fn snapshot(&self) -> Vec<String> {
        self.names.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_one_trims_and_appends() {
        let mut reg = Registry::new();
        assert_eq!(reg.add_one("  Ada ").unwrap(), "Ada");
        assert_eq!(reg.add_one("Grace").unwrap(), "Grace");
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.snapshot(), vec!["Ada", "Grace"]);
    }

    #[test]
    fn test_add_one_rejects_blank() {
        let mut reg = Registry::new();
        assert_eq!(reg.add_one(""), Err(WheelError::InvalidInput));
        assert_eq!(reg.add_one("   "), Err(WheelError::InvalidInput));
        assert_eq!(reg.add_one("\t\n"), Err(WheelError::InvalidInput));
        assert!(reg.is_empty());
    }

    #[test]
    fn test_add_one_rejects_duplicate_whitespace_variants() {
        let mut reg = Registry::new();
        reg.add_one("Ada").unwrap();
        assert_eq!(
            reg.add_one("  Ada  "),
            Err(WheelError::DuplicateEntry("Ada".into()))
        );
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_duplicates_are_case_sensitive() {
        let mut reg = Registry::new();
        reg.add_one("ada").unwrap();
        assert!(reg.add_one("Ada").is_ok());
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_add_many_skips_blank_and_repeats() {
        let mut reg = Registry::new();
        let batch = reg.add_many("a, b, a, ,c");
        assert_eq!(batch.added, vec!["a", "b", "c"]);
        assert_eq!(batch.skipped, vec!["a", ""]);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_add_many_checks_existing_names() {
        let mut reg = Registry::new();
        reg.add_one("b").unwrap();
        let batch = reg.add_many("a,b");
        assert_eq!(batch.added, vec!["a"]);
        assert_eq!(batch.skipped, vec!["b"]);
        assert_eq!(reg.snapshot(), vec!["b", "a"]);
    }

    #[test]
    fn test_add_many_all_skipped() {
        let mut reg = Registry::new();
        let batch = reg.add_many(" , ,");
        assert!(batch.added.is_empty());
        assert_eq!(batch.skipped.len(), 3);
        assert!(reg.is_empty());
    }

    #[test]
    fn test_remove_at() {
        let mut reg = Registry::new();
        reg.add_many("a,b,c");
        assert_eq!(reg.remove_at(1).unwrap(), "b");
        assert_eq!(reg.snapshot(), vec!["a", "c"]);
        assert_eq!(
            reg.remove_at(2),
            Err(WheelError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_snapshot_is_stable() {
        let mut reg = Registry::new();
        reg.add_many("x,y,z");
        assert_eq!(reg.snapshot(), reg.snapshot());
    }
}
