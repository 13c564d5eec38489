//! Node consistency and the AC-3 arc-consistency engine.

use tracing::debug;

use crate::solver::{
    domains::Domains,
    graph::{ConstraintGraph, VariableId},
    semantics::ProblemSemantics,
    stats::SearchStats,
    work_list::WorkList,
};

/// Removes from every domain the values failing their variable's unary
/// constraint.
///
/// Idempotent. May leave a domain empty; that is a valid, checkable state
/// rather than an error, and AC-3 or the search will report it as
/// unsatisfiable.
pub fn enforce_node_consistency<S: ProblemSemantics>(
    graph: &ConstraintGraph<S>,
    domains: &mut Domains<S::Value>,
) {
    let semantics = graph.semantics();
    for var in graph.variables() {
        let tag = graph.tag(var);
        domains.retain(var, |value| semantics.admits(tag, value));
    }
}

/// Makes `x` arc-consistent with `y`.
///
/// Removes from domain(x) every value with no compatible partner left in
/// domain(y). Mutates domain(x) only. Returns whether anything was removed;
/// returns `false` immediately when no constraint links the pair (they
/// impose nothing on each other).
pub fn revise<S: ProblemSemantics>(
    graph: &ConstraintGraph<S>,
    domains: &mut Domains<S::Value>,
    x: VariableId,
    y: VariableId,
) -> bool {
    let Some(constraint) = graph.constraint(x, y) else {
        return false;
    };

    let y_domain = domains.get(y).clone();
    let removed = domains.retain(x, |ours| {
        y_domain
            .iter()
            .any(|theirs| constraint.compatible(ours, theirs))
    });
    removed > 0
}

/// Enforces arc consistency over the whole graph, or over `initial_arcs`
/// when given.
///
/// Returns `false` as soon as any domain becomes (or already is) empty,
/// signalling that the current state is unsatisfiable; `true` once the
/// worklist drains with every domain non-empty. When a revision prunes
/// domain(x), every arc (z, x) for z in neighbors(x) except y is
/// re-scheduled, since z's support may have lived in the removed values.
pub fn ac3<S: ProblemSemantics>(
    graph: &ConstraintGraph<S>,
    domains: &mut Domains<S::Value>,
    initial_arcs: Option<Vec<(VariableId, VariableId)>>,
    stats: &mut SearchStats,
) -> bool {
    for var in graph.variables() {
        if domains.is_empty_at(var) {
            return false;
        }
    }

    let mut worklist = WorkList::new();
    match initial_arcs {
        Some(arcs) => {
            for (x, y) in arcs {
                worklist.push_back(x, y);
            }
        }
        None => {
            for x in graph.variables() {
                for &y in graph.neighbors(x) {
                    worklist.push_back(x, y);
                }
            }
        }
    }

    while let Some((x, y)) = worklist.pop_front() {
        stats.revisions += 1;
        if revise(graph, domains, x, y) {
            stats.prunings += 1;
            if domains.is_empty_at(x) {
                debug!(variable = x, "domain emptied during propagation");
                return false;
            }
            for &z in graph.neighbors(x) {
                if z != y {
                    worklist.push_back(z, x);
                }
            }
        }
    }

    true
}
