//! Constraint Programming (CP) framework.
//!
//! Provides a domain-agnostic model for expressing constraint satisfaction
//! problems over integer variables.
//!
//! # Key Components
//!
//! - **Variables**: [`IntVar`] — bounded, fixed or unbounded integer decision variables
//! - **Constraints**: [`Constraint`] — Fixed, AnyOf, Count, NotEqual
//! - **Model**: [`CpModel`] — container for variables and constraints
//! - **Solver**: [`CpSolver`] trait — interface for solver implementations
//!
//! # Design
//!
//! The model is a plain conjunction of constraints; there is no objective.
//! The [`CpSolver`] trait is the oracle seam: [`BacktrackingSolver`] is the
//! bundled implementation, and external solvers can be plugged in behind
//! the same trait.
//!
//! # References
//!
//! Rossi, van Beek & Walsh (2006), "Handbook of Constraint Programming"

mod model;
mod solver;
mod variables;

pub use model::{Constraint, CpModel};
pub use solver::{
    BacktrackingSolver, CpSolution, CpSolver, SearchConfig, SolverStatus, ENUMERATION_LIMIT,
};
pub use variables::IntVar;
