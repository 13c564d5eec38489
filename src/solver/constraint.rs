use crate::solver::semantics::ProblemSemantics;

/// A human-readable description of a constraint, used in logs and stats.
#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A binary constraint over an ordered pair of variables, expressed as a
/// compatibility predicate on candidate values.
///
/// An `ArcConstraint` registered for the arc `(x, y)` answers one question:
/// given a candidate value for `x` (`ours`) and one for `y` (`theirs`), can
/// the two coexist in a solution? Propagation and search never need anything
/// richer than this predicate, which is what lets the same engine serve any
/// binary-CSP instance rather than just letter-overlap puzzles.
///
/// Constraints are direction-specific: the predicate for `(y, x)` is
/// obtained from [`ArcConstraint::reversed`], and the graph builder installs
/// both directions from a single registration.
pub trait ArcConstraint<S: ProblemSemantics>: std::fmt::Debug {
    /// Returns whether `ours` (a value for this arc's source variable) is
    /// compatible with `theirs` (a value for its target variable).
    fn compatible(&self, ours: &S::Value, theirs: &S::Value) -> bool;

    /// Returns the same constraint viewed from the opposite direction.
    fn reversed(&self) -> Box<dyn ArcConstraint<S>>;

    fn descriptor(&self) -> ConstraintDescriptor;
}
