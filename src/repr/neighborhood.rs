use itertools::Itertools;

use super::*;

/// Ordered sequence of out-neighbors of a single vertex.
///
/// Neighbors are kept in insertion order and may contain the same vertex multiple times
/// (parallel edges). All removals preserve the relative order of the remaining entries.
#[derive(Clone, PartialEq, Eq)]
pub struct Neighborhood<V>(Vec<V>);

impl<V> Default for Neighborhood<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V: Debug> Debug for Neighborhood<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<V> From<Vec<V>> for Neighborhood<V> {
    fn from(value: Vec<V>) -> Self {
        Self(value)
    }
}

impl<V> FromIterator<V> for Neighborhood<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<V> Neighborhood<V> {
    /// Returns the number of entries, counting parallel entries individually
    pub fn num_of_neighbors(&self) -> NumNodes {
        self.0.len()
    }

    /// Returns *true* if there are no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all entries in insertion order
    pub fn neighbors(&self) -> std::slice::Iter<'_, V> {
        self.0.iter()
    }

    /// Returns a slice-reference of the entries
    pub fn as_slice(&self) -> &[V] {
        &self.0
    }

    /// Appends a neighbor without checking if it exists beforehand.
    pub fn add_neighbor(&mut self, u: V) {
        self.0.push(u);
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<V: PartialEq> Neighborhood<V> {
    /// Returns *true* if `u` is in the Neighborhood
    pub fn has_neighbor(&self, u: &V) -> bool {
        self.0.contains(u)
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before, in which case nothing is added.
    pub fn try_add_neighbor(&mut self, u: V) -> bool {
        if self.has_neighbor(&u) {
            true
        } else {
            self.add_neighbor(u);
            false
        }
    }

    /// Removes the first entry equal to `u`.
    /// Returns *true* if such an entry existed.
    pub fn try_remove_neighbor(&mut self, u: &V) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|&x| x == u) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    /// Removes all entries that fit a given predicate and returns the number of removed entries
    pub fn remove_neighbors_if<F>(&mut self, mut predicate: F) -> NumNodes
    where
        F: FnMut(&V) -> bool,
    {
        let size_before = self.0.len();
        self.0.retain(|x| !predicate(x));
        size_before - self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_keeps_order() {
        let mut nbs: Neighborhood<char> = "abcab".chars().collect();

        assert!(nbs.try_remove_neighbor(&'a'));
        assert_eq!(nbs.as_slice(), &['b', 'c', 'a', 'b']);

        assert!(!nbs.try_remove_neighbor(&'z'));
        assert_eq!(nbs.num_of_neighbors(), 4);

        assert_eq!(nbs.remove_neighbors_if(|&x| x == 'b'), 2);
        assert_eq!(nbs.as_slice(), &['c', 'a']);
    }

    #[test]
    fn try_add_skips_present() {
        let mut nbs = Neighborhood::default();
        assert!(!nbs.try_add_neighbor(1));
        assert!(nbs.try_add_neighbor(1));
        nbs.add_neighbor(1);
        assert_eq!(nbs.as_slice(), &[1, 1]);

        nbs.clear();
        assert!(nbs.is_empty());
    }
}
