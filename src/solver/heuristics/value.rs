use crate::solver::{
    domains::{Assignment, Domains},
    graph::{ConstraintGraph, VariableId},
    semantics::ProblemSemantics,
};

/// A trait for strategies that determine the order of values to try for a
/// variable.
pub trait ValueOrderingHeuristic<S: ProblemSemantics> {
    /// Returns the candidate values for `var` in the order they should be
    /// tried. Ordering affects search efficiency only, never which
    /// solutions exist.
    fn order_values(
        &self,
        graph: &ConstraintGraph<S>,
        domains: &Domains<S::Value>,
        assignment: &Assignment<S::Value>,
        var: VariableId,
    ) -> Vec<S::Value>;
}

/// A simple heuristic that returns values in their natural iteration order.
pub struct IdentityValueHeuristic;

impl<S: ProblemSemantics> ValueOrderingHeuristic<S> for IdentityValueHeuristic {
    fn order_values(
        &self,
        _graph: &ConstraintGraph<S>,
        domains: &Domains<S::Value>,
        _assignment: &Assignment<S::Value>,
        var: VariableId,
    ) -> Vec<S::Value> {
        domains.get(var).iter().cloned().collect()
    }
}

/// Least-constraining-value ordering: values that rule out the fewest
/// candidates across unassigned neighbors' domains come first.
///
/// A neighbor's candidate is ruled out when the arc between the two
/// variables rejects the pairing. The sort is stable; equally constraining
/// values keep their domain iteration order, which carries no guarantee.
pub struct LeastConstrainingValueHeuristic;

impl<S: ProblemSemantics> ValueOrderingHeuristic<S> for LeastConstrainingValueHeuristic {
    fn order_values(
        &self,
        graph: &ConstraintGraph<S>,
        domains: &Domains<S::Value>,
        assignment: &Assignment<S::Value>,
        var: VariableId,
    ) -> Vec<S::Value> {
        let unassigned_neighbors: Vec<VariableId> = graph
            .neighbors(var)
            .iter()
            .copied()
            .filter(|neighbor| !assignment.contains_key(neighbor))
            .collect();

        let mut scored: Vec<(S::Value, usize)> = domains
            .get(var)
            .iter()
            .map(|value| {
                let ruled_out = unassigned_neighbors
                    .iter()
                    .map(|&neighbor| match graph.constraint(var, neighbor) {
                        Some(constraint) => domains
                            .get(neighbor)
                            .iter()
                            .filter(|candidate| !constraint.compatible(value, candidate))
                            .count(),
                        None => 0,
                    })
                    .sum();
                (value.clone(), ruled_out)
            })
            .collect();

        scored.sort_by_key(|entry| entry.1);
        scored.into_iter().map(|entry| entry.0).collect()
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

    fn crossing_graph() -> ConstraintGraph<WordSemantics> {
        let mut builder = GraphBuilder::new(Arc::new(WordSemantics));
        let x = builder.add_variable(3);
        let y = builder.add_variable(3);
        builder.add_constraint(x, y, Box::new(OverlapConstraint::new(2, 0)));
        builder.build().unwrap()
    }

    #[test]
    fn least_constraining_value_comes_first() {
        let graph = crossing_graph();
        let mut domains = Domains::new();
        domains.seed(0, words(&["CAT", "DOG"]));
        // First letters: T, T, G. "CAT" (ending T) rules out one neighbor
        // candidate, "DOG" (ending G) rules out two.
        domains.seed(1, words(&["TAR", "TIP", "GEM"]));

        let ordered = LeastConstrainingValueHeuristic.order_values(
            &graph,
            &domains,
            &Assignment::new(),
            0,
        );
        assert_eq!(ordered, words(&["CAT", "DOG"]));
    }

    #[test]
    fn assigned_neighbors_do_not_influence_the_order() {
        let graph = crossing_graph();
        let mut domains = Domains::new();
        domains.seed(0, words(&["CAT", "DOG"]));
        domains.seed(1, words(&["TAR", "TIP", "GEM"]));

        let mut assignment = Assignment::new();
        assignment.insert(1, "GEM".to_string());

        // With y assigned, every candidate for x rules out zero values, so
        // both words must come back in some order.
        let ordered = LeastConstrainingValueHeuristic.order_values(
            &graph,
            &domains,
            &assignment,
            0,
        );
        let mut sorted = ordered.clone();
        sorted.sort();
        assert_eq!(sorted, words(&["CAT", "DOG"]));
    }

    #[test]
    fn identity_returns_the_whole_domain() {
        let graph = crossing_graph();
        let mut domains = Domains::new();
        domains.seed(0, words(&["CAT", "DOG"]));
        domains.seed(1, words(&["TAR"]));

        let mut ordered =
            IdentityValueHeuristic.order_values(&graph, &domains, &Assignment::new(), 0);
        ordered.sort();
        assert_eq!(ordered, words(&["CAT", "DOG"]));
    }
}
