//! Crossfill is a crossword-filling engine built on a generic, reusable
//! binary constraint satisfaction problem (CSP) solver.
//!
//! The crate is split into two layers: a problem-agnostic solver backend
//! and problem-specific frontends. The backend combines constraint
//! propagation (the AC-3 algorithm) with heuristic backtracking search that
//! maintains arc consistency while descending; the frontends map a concrete
//! puzzle onto variables, domains, and binary constraints.
//!
//! # Core Concepts
//!
//! - **[`ProblemSemantics`]**: a trait you implement to define your
//!   problem's value type, its per-variable tag, and the unary
//!   admissibility test that node consistency enforces.
//! - **[`ArcConstraint`]**: a binary compatibility predicate between two
//!   variables' candidate values. The crate ships [`OverlapConstraint`]
//!   (crossword crossings) and [`NotEqualConstraint`].
//! - **[`GraphBuilder`]** / **[`ConstraintGraph`]**: the validated, static
//!   description of an instance.
//! - **[`SolverEngine`]**: the engine that prunes domains and searches for
//!   a complete assignment.
//!
//! [`ProblemSemantics`]: solver::semantics::ProblemSemantics
//! [`ArcConstraint`]: solver::constraint::ArcConstraint
//! [`OverlapConstraint`]: solver::constraints::overlap::OverlapConstraint
//! [`NotEqualConstraint`]: solver::constraints::not_equal::NotEqualConstraint
//! [`GraphBuilder`]: solver::graph::GraphBuilder
//! [`ConstraintGraph`]: solver::graph::ConstraintGraph
//! [`SolverEngine`]: solver::engine::SolverEngine
//!
//! # Example: filling a crossword
//!
//! ```
//! use crossfill::examples::crossword::Crossword;
//!
//! let structure = "___\n#_#\n#_#";
//! let crossword = Crossword::parse(structure, ["DOG", "OAT"])?;
//!
//! let (fill, _stats) = crossword.fill()?;
//! let fill = fill.expect("this word list fills the grid");
//! assert_eq!(crossword.render(&fill), "DOG\n█A█\n█T█\n");
//! # Ok::<(), crossfill::error::Error>(())
//! ```
//!
//! # Example: a bare two-variable instance
//!
//! Here the engine is used directly: two length-3 variables where the
//! third letter of `x` must equal the first letter of `y`. Only the
//! `CAT`/`TAR` pairing survives.
//!
//! ```
//! use std::sync::Arc;
//!
//! use crossfill::solver::{
//!     constraints::overlap::OverlapConstraint,
//!     domains::Domains,
//!     engine::SolverEngine,
//!     graph::GraphBuilder,
//!     semantics::ProblemSemantics,
//! };
//!
//! // Variables are tagged with their required word length.
//! #[derive(Debug)]
//! struct LengthSemantics;
//!
//! impl ProblemSemantics for LengthSemantics {
//!     type Value = String;
//!     type VariableTag = usize;
//!
//!     fn admits(&self, length: &usize, word: &String) -> bool {
//!         word.len() == *length
//!     }
//! }
//!
//! let mut builder = GraphBuilder::new(Arc::new(LengthSemantics));
//! let x = builder.add_variable(3);
//! let y = builder.add_variable(3);
//! builder.add_constraint(x, y, Box::new(OverlapConstraint::new(2, 0)));
//! let graph = builder.build()?;
//!
//! let mut domains = Domains::new();
//! domains.seed(x, ["CAT".to_string(), "DOG".to_string()]);
//! domains.seed(y, ["TAR".to_string(), "CAR".to_string()]);
//!
//! let (solution, _stats) = SolverEngine::default().solve(&graph, domains);
//! let solution = solution.expect("CAT/TAR is the only compatible pair");
//! assert_eq!(solution.get(&x), Some(&"CAT".to_string()));
//! assert_eq!(solution.get(&y), Some(&"TAR".to_string()));
//! # Ok::<(), crossfill::error::Error>(())
//! ```

pub mod error;
pub mod examples;
pub mod solver;
