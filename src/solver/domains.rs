use im::{HashMap, HashSet};

use crate::solver::{graph::VariableId, value::ValueEquality};

/// A partial assignment: the values chosen so far, one per variable.
///
/// Owned by a single search path; grown when descending into a branch and
/// shrunk again before control returns to the parent.
pub type Assignment<V> = HashMap<VariableId, V>;

/// The candidate values remaining for every variable.
///
/// Built over persistent collections, so cloning a `Domains` is cheap and
/// shares structure with the original. The search engine relies on this:
/// each branch prunes a branch-local clone, and sibling branches can never
/// observe that pruning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domains<V: ValueEquality> {
    inner: HashMap<VariableId, HashSet<V>>,
}

impl<V: ValueEquality> Domains<V> {
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Sets the full candidate set for a variable, replacing any previous one.
    pub fn seed(&mut self, var: VariableId, values: impl IntoIterator<Item = V>) {
        self.inner.insert(var, values.into_iter().collect());
    }

    /// The current domain of `var`.
    ///
    /// # Panics
    ///
    /// Panics if no domain was ever seeded for `var`.
    pub fn get(&self, var: VariableId) -> &HashSet<V> {
        self.inner
            .get(&var)
            .unwrap_or_else(|| panic!("no domain seeded for variable {var}"))
    }

    pub fn len_of(&self, var: VariableId) -> usize {
        self.get(var).len()
    }

    pub fn is_empty_at(&self, var: VariableId) -> bool {
        self.get(var).is_empty()
    }

    /// Collapses the domain of `var` to a single value.
    pub fn narrow_to(&mut self, var: VariableId, value: V) {
        self.inner.insert(var, HashSet::unit(value));
    }

    /// Keeps only the values satisfying `keep`, returning how many were
    /// removed.
    pub fn retain(&mut self, var: VariableId, keep: impl Fn(&V) -> bool) -> usize {
        let current = self.get(var);
        let kept: HashSet<V> = current.iter().filter(|v| keep(v)).cloned().collect();
        let removed = current.len() - kept.len();
        if removed > 0 {
            self.inner.insert(var, kept);
        }
        removed
    }

}

impl<V: ValueEquality> Default for Domains<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn seeded() -> Domains<String> {
        let mut domains = Domains::new();
        domains.seed(0, ["CAT".to_string(), "DOG".to_string(), "EMU".to_string()]);
        domains
    }

    #[test]
    fn retain_reports_removed_count() {
        let mut domains = seeded();
        let removed = domains.retain(0, |w| w.starts_with('C') || w.starts_with('D'));
        assert_eq!(removed, 1);
        assert_eq!(domains.len_of(0), 2);

        let removed = domains.retain(0, |_| true);
        assert_eq!(removed, 0);
    }

    #[test]
    fn narrow_to_collapses_to_singleton() {
        let mut domains = seeded();
        domains.narrow_to(0, "DOG".to_string());
        assert_eq!(domains.len_of(0), 1);
        assert!(domains.get(0).contains("DOG"));
    }

    #[test]
    fn clones_do_not_observe_later_pruning() {
        let mut domains = seeded();
        let snapshot = domains.clone();
        domains.retain(0, |w| w == "CAT");
        assert_eq!(domains.len_of(0), 1);
        assert_eq!(snapshot.len_of(0), 3);
        assert_ne!(domains, snapshot);
    }
}
