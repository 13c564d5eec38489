use std::marker::PhantomData;

use crate::solver::{
    constraint::{ArcConstraint, ConstraintDescriptor},
    semantics::ProblemSemantics,
};

/// A constraint requiring two variables to take different values.
///
/// The workhorse of map-colouring style instances. Symmetric, so its
/// reversed form is itself.
#[derive(Debug)]
pub struct NotEqualConstraint<S: ProblemSemantics> {
    _phantom: PhantomData<S>,
}

impl<S: ProblemSemantics> NotEqualConstraint<S> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<S: ProblemSemantics> Default for NotEqualConstraint<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ProblemSemantics> ArcConstraint<S> for NotEqualConstraint<S> {
    fn compatible(&self, ours: &S::Value, theirs: &S::Value) -> bool {
        ours != theirs
    }

    fn reversed(&self) -> Box<dyn ArcConstraint<S>> {
        Box::new(Self::new())
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "NotEqualConstraint".to_string(),
            description: "ours != theirs".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestSemantics;

    impl ProblemSemantics for TestSemantics {
        type Value = u8;
        type VariableTag = ();

        fn admits(&self, _tag: &(), _value: &u8) -> bool {
            true
        }
    }

    #[test]
    fn only_equal_values_are_incompatible() {
        let constraint = NotEqualConstraint::<TestSemantics>::new();
        assert!(constraint.compatible(&1, &2));
        assert!(!constraint.compatible(&1, &1));

        let reversed = constraint.reversed();
        assert!(reversed.compatible(&2, &1));
        assert_eq!(reversed.descriptor().name, "NotEqualConstraint");
    }
}
