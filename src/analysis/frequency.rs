use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts that remember the order items were first seen in.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {
    entries: Vec<(T, usize)>,
    index: HashMap<T, usize>,
}

impl<T: Eq + Hash + Clone> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        for item in iter {
            table.add(item);
        }
        table
    }
}

impl<T: Eq + Hash + Clone> FrequencyTable<T> {
    pub fn add(&mut self, item: T) {
        match self.index.get(&item) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(item.clone(), self.entries.len());
                self.entries.push((item, 1));
            }
        }
    }

    pub fn count(&self, item: &T) -> usize {
        self.index
            .get(item)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Sum of all counts, equal to the number of items tallied.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` highest counts. Ties keep first-encounter order.
    pub fn most_common(&self, n: usize) -> Vec<(T, usize)> {
        let mut sorted = self.entries.clone();
        // sort_by is stable, so equal counts stay in encounter order
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(n);
        sorted
    }

    pub fn in_encounter_order(&self) -> &[(T, usize)] {
        &self.entries
    }

    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }
}
