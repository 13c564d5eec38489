//! Defines a collection of standard heuristics for selecting which variable
//! to branch on next during the search process.

use std::cmp::Reverse;

use crate::solver::{
    domains::{Assignment, Domains},
    graph::{ConstraintGraph, VariableId},
    semantics::ProblemSemantics,
};

/// A trait for variable-selection heuristics.
///
/// Implementors of this trait define a strategy for choosing which
/// unassigned variable the solver should branch on next. A good heuristic
/// can dramatically improve solver performance.
pub trait VariableSelectionHeuristic<S: ProblemSemantics> {
    /// Selects the next variable to be assigned, or `None` when every
    /// variable already has a value.
    fn select_variable(
        &self,
        graph: &ConstraintGraph<S>,
        domains: &Domains<S::Value>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId>;
}

/// A simple heuristic that selects the unassigned variable with the lowest
/// id. Provides a basic, deterministic way to select variables.
pub struct SelectFirstHeuristic;

impl<S: ProblemSemantics> VariableSelectionHeuristic<S> for SelectFirstHeuristic {
    fn select_variable(
        &self,
        graph: &ConstraintGraph<S>,
        _domains: &Domains<S::Value>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId> {
        graph
            .variables()
            .find(|var| !assignment.contains_key(var))
    }
}

/// A heuristic that selects an unassigned variable at random.
pub struct RandomVariableHeuristic;

impl<S: ProblemSemantics> VariableSelectionHeuristic<S> for RandomVariableHeuristic {
    fn select_variable(
        &self,
        graph: &ConstraintGraph<S>,
        _domains: &Domains<S::Value>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId> {
        use rand::seq::IteratorRandom;

        graph
            .variables()
            .filter(|var| !assignment.contains_key(var))
            .choose(&mut rand::thread_rng())
    }
}

/// Minimum Remaining Values: selects the unassigned variable with the
/// fewest candidates left in its domain.
///
/// This is a "fail-first" strategy that prioritizes the most constrained
/// variable, so contradictions surface near the top of the tree. Ties are
/// broken by degree (the most unassigned neighbors), then by the lower id
/// for determinism. Callers must not rely on which of several equally
/// ranked variables wins.
pub struct MinimumRemainingValuesHeuristic;

impl<S: ProblemSemantics> VariableSelectionHeuristic<S> for MinimumRemainingValuesHeuristic {
    fn select_variable(
        &self,
        graph: &ConstraintGraph<S>,
        domains: &Domains<S::Value>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId> {
        graph
            .variables()
            .filter(|var| !assignment.contains_key(var))
            .min_by_key(|&var| {
                let unassigned_degree = graph
                    .neighbors(var)
                    .iter()
                    .filter(|&&neighbor| !assignment.contains_key(&neighbor))
                    .count();
                (domains.len_of(var), Reverse(unassigned_degree), var)
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{constraints::overlap::OverlapConstraint, graph::GraphBuilder};

    #[derive(Debug)]
    struct WordSemantics;

    impl ProblemSemantics for WordSemantics {
        type Value = String;
        type VariableTag = usize;

        fn admits(&self, length: &usize, value: &String) -> bool {
            value.len() == *length
        }
    }

    fn words(values: &[&str]) -> Vec<String> {
        values.iter().map(|w| w.to_string()).collect()
    }

    /// A chain a - b - c: b crosses both ends, a and c only cross b.
    fn chain_graph() -> ConstraintGraph<WordSemantics> {
        let mut builder = GraphBuilder::new(Arc::new(WordSemantics));
        let a = builder.add_variable(3);
        let b = builder.add_variable(3);
        let c = builder.add_variable(3);
        builder.add_constraint(a, b, Box::new(OverlapConstraint::new(2, 0)));
        builder.add_constraint(b, c, Box::new(OverlapConstraint::new(2, 0)));
        builder.build().unwrap()
    }

    #[test]
    fn mrv_prefers_the_smallest_domain() {
        let graph = chain_graph();
        let mut domains = Domains::new();
        domains.seed(0, words(&["CAT", "DOG", "EMU"]));
        domains.seed(1, words(&["TAR"]));
        domains.seed(2, words(&["RAT", "RIB"]));

        let selected = MinimumRemainingValuesHeuristic
            .select_variable(&graph, &domains, &Assignment::new());
        assert_eq!(selected, Some(1));
    }

    #[test]
    fn mrv_breaks_size_ties_by_unassigned_degree() {
        let graph = chain_graph();
        let mut domains = Domains::new();
        domains.seed(0, words(&["CAT", "DOG"]));
        domains.seed(1, words(&["TAR", "TOE"]));
        domains.seed(2, words(&["RAT", "RIB"]));

        // All domains tie at two values; b has two unassigned neighbors
        // while a and c have one each.
        let selected = MinimumRemainingValuesHeuristic
            .select_variable(&graph, &domains, &Assignment::new());
        assert_eq!(selected, Some(1));
    }

    #[test]
    fn assigned_variables_are_never_selected() {
        let graph = chain_graph();
        let mut domains = Domains::new();
        domains.seed(0, words(&["CAT"]));
        domains.seed(1, words(&["TAR"]));
        domains.seed(2, words(&["RAT"]));

        let mut assignment = Assignment::new();
        assignment.insert(1, "TAR".to_string());

        let selected = MinimumRemainingValuesHeuristic
            .select_variable(&graph, &domains, &assignment);
        assert!(matches!(selected, Some(0) | Some(2)));

        assignment.insert(0, "CAT".to_string());
        assignment.insert(2, "RAT".to_string());
        let selected = MinimumRemainingValuesHeuristic
            .select_variable(&graph, &domains, &assignment);
        assert_eq!(selected, None);
    }

    #[test]
    fn select_first_walks_ids_in_order() {
        let graph = chain_graph();
        let domains = Domains::new();

        let mut assignment = Assignment::new();
        assert_eq!(
            SelectFirstHeuristic.select_variable(&graph, &domains, &assignment),
            Some(0)
        );
        assignment.insert(0, "CAT".to_string());
        assert_eq!(
            SelectFirstHeuristic.select_variable(&graph, &domains, &assignment),
            Some(1)
        );
    }
}
