use tracing::debug;

use crate::solver::{
    budget::SearchBudget,
    domains::{Assignment, Domains},
    graph::ConstraintGraph,
    heuristics::{
        value::{LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
        variable::{MinimumRemainingValuesHeuristic, VariableSelectionHeuristic},
    },
    propagate::{ac3, enforce_node_consistency},
    semantics::ProblemSemantics,
    stats::SearchStats,
    validate::{is_complete, is_consistent},
};

/// The main engine for solving binary constraint satisfaction problems.
///
/// The engine takes a problem definition, a [`ConstraintGraph`] plus the
/// initial [`Domains`], and finds an assignment satisfying every
/// constraint, or proves that none exists. It first prunes domains with
/// node consistency and the AC-3 algorithm, then runs a heuristic
/// backtracking search that maintains arc consistency while descending.
///
/// Domains are persistent maps: every branch works on a branch-local clone,
/// so a failed branch leaves its parent's state untouched and sibling
/// branches never observe each other's pruning.
pub struct SolverEngine<S: ProblemSemantics> {
    variable_heuristic: Box<dyn VariableSelectionHeuristic<S>>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<S>>,
    budget: SearchBudget,
}

impl<S: ProblemSemantics> SolverEngine<S> {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic<S>>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<S>>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
            budget: SearchBudget::UNLIMITED,
        }
    }

    /// Imposes an external cutoff on the search; see [`SearchBudget`].
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Attempts to solve the problem.
    ///
    /// Returns the complete assignment and the accumulated search counters,
    /// or `None` when the instance is unsatisfiable (or the budget ran
    /// out). An unsatisfiable instance is an expected outcome, not an
    /// error: every construction-time validation already happened in
    /// [`GraphBuilder::build`](crate::solver::graph::GraphBuilder::build).
    pub fn solve(
        &self,
        graph: &ConstraintGraph<S>,
        mut domains: Domains<S::Value>,
    ) -> (Option<Assignment<S::Value>>, SearchStats) {
        let mut stats = SearchStats::default();

        enforce_node_consistency(graph, &mut domains);
        if !ac3(graph, &mut domains, None, &mut stats) {
            debug!("propagation proved the instance unsatisfiable");
            return (None, stats);
        }

        let mut assignment = Assignment::new();
        let solution = self.backtrack(graph, &domains, &mut assignment, &mut stats);
        debug!(
            nodes = stats.nodes_visited,
            backtracks = stats.backtracks,
            solved = solution.is_some(),
            "search finished"
        );
        (solution, stats)
    }

    /// Depth-first search over partial assignments.
    ///
    /// On return the assignment is exactly as the caller passed it in: every
    /// tentative extension made below this frame has been removed, and the
    /// caller's domains were never mutated (pruning happens on a clone).
    fn backtrack(
        &self,
        graph: &ConstraintGraph<S>,
        domains: &Domains<S::Value>,
        assignment: &mut Assignment<S::Value>,
        stats: &mut SearchStats,
    ) -> Option<Assignment<S::Value>> {
        if self.budget.exceeded(stats) {
            stats.budget_exhausted = true;
            return None;
        }
        stats.nodes_visited += 1;

        if is_complete(graph, assignment) {
            return Some(assignment.clone());
        }

        let var = self
            .variable_heuristic
            .select_variable(graph, domains, assignment)?;

        for value in self
            .value_heuristic
            .order_values(graph, domains, assignment, var)
        {
            if self.budget.exceeded(stats) {
                stats.budget_exhausted = true;
                break;
            }

            assignment.insert(var, value.clone());
            if is_consistent(graph, assignment) {
                // Maintain arc consistency: narrow the chosen variable on a
                // branch-local copy and propagate to unassigned neighbors.
                let mut child = domains.clone();
                child.narrow_to(var, value);
                let arcs = graph
                    .neighbors(var)
                    .iter()
                    .copied()
                    .filter(|neighbor| !assignment.contains_key(neighbor))
                    .map(|neighbor| (neighbor, var))
                    .collect();

                if ac3(graph, &mut child, Some(arcs), stats) {
                    if let Some(solution) = self.backtrack(graph, &child, assignment, stats) {
                        return Some(solution);
                    }
                }
            }
            assignment.remove(&var);
            stats.backtracks += 1;
        }

        None
    }
}

impl<S: ProblemSemantics> Default for SolverEngine<S> {
    /// MRV with degree tie-breaking for variable selection and
    /// least-constraining-value ordering, the standard pairing for word
    /// puzzles.
    fn default() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }
}
