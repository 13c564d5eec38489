use std::marker::PhantomData;

use crate::solver::{
    constraint::{ArcConstraint, ConstraintDescriptor},
    semantics::ProblemSemantics,
};

/// A shared-cell constraint between two string-valued variables.
///
/// The byte at position `ours` of the source variable's word must equal the
/// byte at position `theirs` of the target variable's word. This is the
/// crossword crossing: an across slot and a down slot meeting in one cell
/// must place the same letter there.
///
/// Offsets are byte offsets; word lists are expected to be ASCII. An offset
/// falling outside a candidate word never matches (node consistency removes
/// wrong-length words before propagation, so this only matters for raw,
/// unfiltered domains).
#[derive(Debug)]
pub struct OverlapConstraint<S: ProblemSemantics> {
    ours: usize,
    theirs: usize,
    _phantom: PhantomData<S>,
}

impl<S: ProblemSemantics> OverlapConstraint<S> {
    /// Creates a constraint requiring `source[ours] == target[theirs]`.
    pub fn new(ours: usize, theirs: usize) -> Self {
        Self {
            ours,
            theirs,
            _phantom: PhantomData,
        }
    }
}

impl<S> ArcConstraint<S> for OverlapConstraint<S>
where
    S: ProblemSemantics,
    S::Value: AsRef<str>,
{
    fn compatible(&self, ours: &S::Value, theirs: &S::Value) -> bool {
        match (
            ours.as_ref().as_bytes().get(self.ours),
            theirs.as_ref().as_bytes().get(self.theirs),
        ) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    fn reversed(&self) -> Box<dyn ArcConstraint<S>> {
        Box::new(Self::new(self.theirs, self.ours))
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "OverlapConstraint".to_string(),
            description: format!("ours[{}] == theirs[{}]", self.ours, self.theirs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestSemantics;

    impl ProblemSemantics for TestSemantics {
        type Value = String;
        type VariableTag = usize;

        fn admits(&self, length: &usize, value: &String) -> bool {
            value.len() == *length
        }
    }

    #[test]
    fn matching_bytes_are_compatible() {
        let crossing = OverlapConstraint::<TestSemantics>::new(2, 0);
        assert!(crossing.compatible(&"CAT".to_string(), &"TAR".to_string()));
    }

    #[test]
    fn mismatching_bytes_are_incompatible() {
        let crossing = OverlapConstraint::<TestSemantics>::new(2, 0);
        assert!(!crossing.compatible(&"DOG".to_string(), &"TAR".to_string()));
    }

    #[test]
    fn out_of_range_offset_never_matches() {
        let crossing = OverlapConstraint::<TestSemantics>::new(5, 0);
        assert!(!crossing.compatible(&"CAT".to_string(), &"TAR".to_string()));
    }

    #[test]
    fn reversed_swaps_offsets() {
        let crossing = OverlapConstraint::<TestSemantics>::new(2, 0);
        let reversed = crossing.reversed();
        assert!(reversed.compatible(&"TAR".to_string(), &"CAT".to_string()));
        assert!(!reversed.compatible(&"CAT".to_string(), &"CAT".to_string()));
    }

    #[test]
    fn descriptor_names_the_offsets() {
        let crossing = OverlapConstraint::<TestSemantics>::new(2, 0);
        let descriptor = crossing.descriptor();
        assert_eq!(descriptor.name, "OverlapConstraint");
        assert_eq!(descriptor.description, "ours[2] == theirs[0]");
    }
}
