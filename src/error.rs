use crate::solver::graph::VariableId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while constructing a problem instance.
///
/// All of these indicate malformed input and are reported before any solving
/// starts. Solver-time outcomes (an unsatisfiable instance) are not errors;
/// they surface as a `None` solution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("constraint references unknown variable {0}")]
    UnknownVariable(VariableId),

    #[error("constraint links variable {0} to itself")]
    SelfReferentialConstraint(VariableId),

    #[error("more than one constraint registered for variable pair ({0}, {1})")]
    DuplicateConstraint(VariableId, VariableId),

    #[error("variable {id} is malformed: {reason}")]
    InvalidVariable { id: VariableId, reason: String },

    #[error("structure grid contains no cells")]
    EmptyStructure,
}
