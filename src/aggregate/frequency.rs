use crate::imports::*;

/*
    Types:
    * FrequencyTable - distinct value -> occurrence count. Built per query and thrown away.
      Keys remember the order they were first seen in, which is what ranking ties fall back on.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, value: String) {
        match self.counts.get_mut(&value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.clone(), 1);
                self.order.push(value);
            }
        }
    }

    pub fn get(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.order
            .iter()
            .map(|value| (value.as_str(), self.get(value)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_follows_first_seen_order() {
        let mut table = FrequencyTable::new();
        for value in ["b", "a", "b", "c", "a", "b"] {
            table.increment(value.to_string());
        }

        let entries: Vec<(&str, usize)> = table.iter().collect();
        assert_eq!(entries, vec![("b", 3), ("a", 2), ("c", 1)]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn empty_table() {
        let table = FrequencyTable::new();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.get("anything"), 0);
    }
}
