//! Secret santa pair assignment with forbidden pairings.
//!
//! Splits an even-sized group of participants into disjoint pairs so that
//! no pair contains two participants a rule keeps apart:
//!
//! - **Configuration**: [`SantaConfig`] — participant names and forbidden
//!   pairs ([`Rule`]), loaded from JSON and validated up front.
//! - **Pairing**: [`PairingSolver`] — encodes the problem as a constraint
//!   model, hands it to a solver, and decodes the result into [`Pair`]s.
//!   An empty result means no valid pairing exists.
//! - **CP (Constraint Programming)**: [`cp`] — integer variables,
//!   membership, cardinality and inequality constraints, and the
//!   [`cp::CpSolver`] oracle trait with a backtracking implementation.
//! - **Matching**: an alternative strategy searching for a perfect
//!   matching on the graph of allowed pairs directly.
//!
//! # Examples
//!
//! ```
//! use secret_santa::{PairingSolver, SantaConfig};
//!
//! let config = SantaConfig::from_json_str(r#"{
//!     "participants": ["ann", "bob", "cat", "dan", "eve", "fay"],
//!     "rules": [["ann", "bob"], ["cat", "dan"]]
//! }"#).unwrap();
//!
//! let pairs = PairingSolver::new(config).solve().unwrap();
//! assert_eq!(pairs.len(), 3);
//! ```

pub mod config;
pub mod cp;
pub mod error;
pub mod matching;
pub mod pairing;

pub use config::{Rule, SantaConfig};
pub use error::{ConfigError, SolveError};
pub use pairing::{Pair, PairingSolver, Strategy};
