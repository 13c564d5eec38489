use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    error::{Error, Result},
    solver::{constraint::ArcConstraint, semantics::ProblemSemantics},
};

pub type VariableId = u32;

/// Collects variables and constraints, then validates them into a
/// [`ConstraintGraph`].
///
/// Registering a constraint for the pair `(x, y)` installs the reversed
/// predicate for `(y, x)` as well, so callers declare each relation once.
pub struct GraphBuilder<S: ProblemSemantics> {
    semantics: Arc<S>,
    tags: Vec<S::VariableTag>,
    constraints: Vec<(VariableId, VariableId, Box<dyn ArcConstraint<S>>)>,
    distinct_values: bool,
}

impl<S: ProblemSemantics> GraphBuilder<S> {
    pub fn new(semantics: Arc<S>) -> Self {
        Self {
            semantics,
            tags: Vec::new(),
            constraints: Vec::new(),
            distinct_values: false,
        }
    }

    /// Adds a variable and returns its id.
    pub fn add_variable(&mut self, tag: S::VariableTag) -> VariableId {
        self.tags.push(tag);
        (self.tags.len() - 1) as VariableId
    }

    /// Registers a binary constraint between `x` and `y`.
    ///
    /// Validation happens in [`GraphBuilder::build`], so constraints may be
    /// registered before all variables exist.
    pub fn add_constraint(
        &mut self,
        x: VariableId,
        y: VariableId,
        constraint: Box<dyn ArcConstraint<S>>,
    ) {
        self.constraints.push((x, y, constraint));
    }

    /// Forbids any two variables from taking the same value.
    ///
    /// This is the crossword rule that no word appears twice in a grid. It
    /// is enforced by the assignment validator, not by arc propagation.
    pub fn require_distinct_values(&mut self) {
        self.distinct_values = true;
    }

    /// Validates the instance and freezes it into a read-only graph.
    pub fn build(self) -> Result<ConstraintGraph<S>> {
        let variable_count = self.tags.len() as VariableId;

        for (id, tag) in self.tags.iter().enumerate() {
            self.semantics
                .check_variable(tag)
                .map_err(|reason| Error::InvalidVariable {
                    id: id as VariableId,
                    reason,
                })?;
        }

        let mut arcs: HashMap<(VariableId, VariableId), Box<dyn ArcConstraint<S>>> =
            HashMap::new();
        for (x, y, constraint) in self.constraints {
            if x == y {
                return Err(Error::SelfReferentialConstraint(x));
            }
            for var in [x, y] {
                if var >= variable_count {
                    return Err(Error::UnknownVariable(var));
                }
            }
            let reversed = constraint.reversed();
            if arcs.insert((x, y), constraint).is_some() {
                return Err(Error::DuplicateConstraint(x, y));
            }
            if arcs.insert((y, x), reversed).is_some() {
                return Err(Error::DuplicateConstraint(y, x));
            }
        }

        let mut neighbors: Vec<Vec<VariableId>> = vec![Vec::new(); self.tags.len()];
        for &(x, y) in arcs.keys() {
            if x != y {
                neighbors[x as usize].push(y);
            }
        }
        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }

        Ok(ConstraintGraph {
            semantics: self.semantics,
            tags: self.tags,
            arcs,
            neighbors,
            distinct_values: self.distinct_values,
        })
    }
}

/// The static description of a problem instance: variables, their tags, and
/// the binary-constraint relation between them.
///
/// Read-only after construction. The mutable search state (domains and
/// assignments) lives elsewhere and only ever references variables by id.
#[derive(Debug)]
pub struct ConstraintGraph<S: ProblemSemantics> {
    semantics: Arc<S>,
    tags: Vec<S::VariableTag>,
    arcs: HashMap<(VariableId, VariableId), Box<dyn ArcConstraint<S>>>,
    neighbors: Vec<Vec<VariableId>>,
    distinct_values: bool,
}

impl<S: ProblemSemantics> ConstraintGraph<S> {
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates over every variable id in the graph.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        0..self.tags.len() as VariableId
    }

    /// The tag attached to a variable.
    ///
    /// # Panics
    ///
    /// Panics if `var` is not a variable of this graph.
    pub fn tag(&self, var: VariableId) -> &S::VariableTag {
        &self.tags[var as usize]
    }

    pub fn semantics(&self) -> &S {
        &self.semantics
    }

    /// All variables sharing a constraint with `var`, sorted by id.
    ///
    /// Never contains `var` itself.
    pub fn neighbors(&self, var: VariableId) -> &[VariableId] {
        &self.neighbors[var as usize]
    }

    /// The constraint on the ordered arc `(x, y)`, if any.
    ///
    /// O(1). Returns `None` when the pair is unconstrained, including when
    /// `x == y`.
    pub fn constraint(&self, x: VariableId, y: VariableId) -> Option<&dyn ArcConstraint<S>> {
        self.arcs.get(&(x, y)).map(|c| c.as_ref())
    }

    pub fn requires_distinct_values(&self) -> bool {
        self.distinct_values
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::constraints::overlap::OverlapConstraint;

    #[derive(Debug)]
    struct WordSemantics;

    impl ProblemSemantics for WordSemantics {
        type Value = String;
        type VariableTag = usize;

        fn admits(&self, length: &usize, value: &String) -> bool {
            value.len() == *length
        }

        fn check_variable(&self, length: &usize) -> Result<(), String> {
            if *length == 0 {
                return Err("length must be positive".to_string());
            }
            Ok(())
        }
    }

    fn two_variable_graph() -> ConstraintGraph<WordSemantics> {
        let mut builder = GraphBuilder::new(Arc::new(WordSemantics));
        let x = builder.add_variable(3);
        let y = builder.add_variable(3);
        builder.add_constraint(x, y, Box::new(OverlapConstraint::new(2, 0)));
        builder.build().unwrap()
    }

    #[test]
    fn registering_one_arc_installs_both_directions() {
        let graph = two_variable_graph();

        let forward = graph.constraint(0, 1).unwrap();
        assert!(forward.compatible(&"CAT".to_string(), &"TAR".to_string()));

        let backward = graph.constraint(1, 0).unwrap();
        assert!(backward.compatible(&"TAR".to_string(), &"CAT".to_string()));
        assert!(!backward.compatible(&"CAT".to_string(), &"TAR".to_string()));
    }

    #[test]
    fn unrelated_pairs_have_no_constraint() {
        let mut builder = GraphBuilder::new(Arc::new(WordSemantics));
        let x = builder.add_variable(3);
        let y = builder.add_variable(3);
        let z = builder.add_variable(3);
        builder.add_constraint(x, y, Box::new(OverlapConstraint::new(0, 0)));
        let graph = builder.build().unwrap();

        assert!(graph.constraint(x, z).is_none());
        assert!(graph.constraint(x, x).is_none());
    }

    #[test]
    fn neighbors_exclude_the_variable_itself() {
        let graph = two_variable_graph();
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.neighbors(1), &[0]);
    }

    #[test]
    fn unknown_variable_is_rejected() {
        let mut builder = GraphBuilder::new(Arc::new(WordSemantics));
        let x = builder.add_variable(3);
        builder.add_constraint(x, 7, Box::new(OverlapConstraint::new(0, 0)));
        assert!(matches!(
            builder.build(),
            Err(Error::UnknownVariable(7))
        ));
    }

    #[test]
    fn self_referential_constraint_is_rejected() {
        let mut builder = GraphBuilder::new(Arc::new(WordSemantics));
        let x = builder.add_variable(3);
        builder.add_constraint(x, x, Box::new(OverlapConstraint::new(0, 2)));
        assert!(matches!(
            builder.build(),
            Err(Error::SelfReferentialConstraint(0))
        ));
    }

    #[test]
    fn duplicate_arcs_are_rejected() {
        let mut builder = GraphBuilder::new(Arc::new(WordSemantics));
        let x = builder.add_variable(3);
        let y = builder.add_variable(3);
        builder.add_constraint(x, y, Box::new(OverlapConstraint::new(2, 0)));
        builder.add_constraint(y, x, Box::new(OverlapConstraint::new(0, 2)));
        assert!(matches!(
            builder.build(),
            Err(Error::DuplicateConstraint(_, _))
        ));
    }

    #[test]
    fn zero_length_variable_is_rejected() {
        let mut builder = GraphBuilder::new(Arc::new(WordSemantics));
        builder.add_variable(0);
        assert!(matches!(
            builder.build(),
            Err(Error::InvalidVariable { id: 0, .. })
        ));
    }
}
