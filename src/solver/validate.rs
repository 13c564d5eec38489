//! Assignment validation, used both as a search-time pruning check and as a
//! final sanity check on solutions.

use crate::solver::{
    domains::Assignment,
    graph::ConstraintGraph,
    semantics::ProblemSemantics,
};

/// Returns whether every variable in the graph has been assigned a value.
pub fn is_complete<S: ProblemSemantics>(
    graph: &ConstraintGraph<S>,
    assignment: &Assignment<S::Value>,
) -> bool {
    graph.variables().all(|var| assignment.contains_key(&var))
}

/// Returns whether an assignment (partial or complete) is internally
/// consistent.
///
/// Checks, for every assigned variable, its unary constraint, and for every
/// assigned pair: value distinctness when the graph requires it, and the
/// binary constraint wherever one is defined. Unconstrained pairs impose
/// nothing on each other.
pub fn is_consistent<S: ProblemSemantics>(
    graph: &ConstraintGraph<S>,
    assignment: &Assignment<S::Value>,
) -> bool {
    let semantics = graph.semantics();

    for (&x, x_value) in assignment.iter() {
        if !semantics.admits(graph.tag(x), x_value) {
            return false;
        }

        for (&y, y_value) in assignment.iter() {
            if x == y {
                continue;
            }
            if graph.requires_distinct_values() && x_value == y_value {
                return false;
            }
            if let Some(constraint) = graph.constraint(x, y) {
                if !constraint.compatible(x_value, y_value) {
                    return false;
                }
            }
        }
    }

    true
}
