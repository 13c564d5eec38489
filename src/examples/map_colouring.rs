//! Map colouring on the same engine: regions are variables, colours are
//! values, and every border is a not-equal constraint. Nothing here knows
//! about words or overlaps, which keeps the solver honest about being a
//! general binary-CSP engine.

use std::sync::Arc;

use crate::{
    error::Result,
    solver::{
        constraints::not_equal::NotEqualConstraint,
        domains::Domains,
        graph::{ConstraintGraph, GraphBuilder, VariableId},
        semantics::ProblemSemantics,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Colour {
    Red,
    Green,
    Blue,
    Yellow,
}

#[derive(Debug)]
pub struct MapColouringSemantics;

impl ProblemSemantics for MapColouringSemantics {
    type Value = Colour;
    type VariableTag = String;

    fn admits(&self, _region: &String, _colour: &Colour) -> bool {
        true
    }
}

/// Builds a colouring problem from region names, borders (as index pairs
/// into `regions`), and the available palette.
///
/// Colours may repeat across non-bordering regions, so the graph does not
/// require distinct values.
pub fn build_problem(
    regions: &[&str],
    borders: &[(VariableId, VariableId)],
    palette: &[Colour],
) -> Result<(ConstraintGraph<MapColouringSemantics>, Domains<Colour>)> {
    let mut builder = GraphBuilder::new(Arc::new(MapColouringSemantics));
    let ids: Vec<VariableId> = regions
        .iter()
        .map(|region| builder.add_variable(region.to_string()))
        .collect();
    for &(a, b) in borders {
        builder.add_constraint(a, b, Box::new(NotEqualConstraint::new()));
    }
    let graph = builder.build()?;

    let mut domains = Domains::new();
    for &id in &ids {
        domains.seed(id, palette.iter().copied());
    }
    Ok((graph, domains))
}
