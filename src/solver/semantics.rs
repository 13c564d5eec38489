use crate::solver::value::ValueEquality;

/// A trait that defines the "frontend" for a specific problem domain.
///
/// This is the primary interface for connecting a concrete problem (like
/// crossword filling or map colouring) to the generic solver engine. By
/// implementing this trait, you provide the solver with your problem's value
/// type, the per-variable tag carrying its identity and unary constraints,
/// and the admissibility test that node consistency enforces.
pub trait ProblemSemantics: std::fmt::Debug + 'static {
    /// The concrete type for a value in a variable's domain.
    ///
    /// For crossword filling this is a candidate word. For map colouring it
    /// could be an enum of colours like `Red`, `Green`, `Blue`.
    type Value: ValueEquality;

    /// The identity-rich datum attached to each variable.
    ///
    /// For crossword filling this is the slot (position, direction, length).
    /// Heuristics and the validator reach it through
    /// [`ConstraintGraph::tag`](crate::solver::graph::ConstraintGraph::tag).
    type VariableTag: Clone + std::fmt::Debug + 'static;

    /// The unary admissibility test enforced by node consistency.
    ///
    /// A value failing this test for a variable can never be part of a
    /// solution and is removed from the variable's domain before any binary
    /// propagation.
    fn admits(&self, tag: &Self::VariableTag, value: &Self::Value) -> bool;

    /// Validates a variable at graph construction time.
    ///
    /// Returning `Err` with a reason makes
    /// [`GraphBuilder::build`](crate::solver::graph::GraphBuilder::build)
    /// fail fast instead of running the solver on a malformed instance.
    fn check_variable(&self, _tag: &Self::VariableTag) -> Result<(), String> {
        Ok(())
    }
}
