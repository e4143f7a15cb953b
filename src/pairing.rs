//! Pair assignment.
//!
//! # Encoding
//!
//! With `N` participants and `G = N / 2` pair slots:
//!
//! 1. `G` group variables `group_g`, each fixed to `g`
//! 2. `N` unbounded participant variables `participant_i`
//! 3. Membership: every participant variable equals some group variable
//! 4. Cardinality: exactly two participant variables equal each group variable
//! 5. Rules: the two participants of a rule take different values
//!
//! A model of this conjunction is decoded by collecting, slot by slot,
//! the participants whose value equals the slot's label.

use crate::config::SantaConfig;
use crate::cp::{
    BacktrackingSolver, CpModel, CpSolution, CpSolver, IntVar, SearchConfig, SolverStatus,
};
use crate::error::{ConfigError, SolveError};
use crate::matching;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Two participants assigned to the same slot, in configuration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair(pub String, pub String);

impl Pair {
    /// Whether `name` is one of the two members.
    pub fn contains(&self, name: &str) -> bool {
        self.0 == name || self.1 == name
    }
}

/// How the pairing is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Encode as a constraint model and hand it to a [`CpSolver`].
    #[default]
    Constraint,

    /// Search for a perfect matching on the graph of allowed pairs.
    Matching,
}

/// Solves the pairing problem for one configuration.
///
/// Every call to [`solve`](Self::solve) builds a fresh model; nothing is
/// cached between calls.
///
/// # Examples
///
/// ```
/// use secret_santa::{PairingSolver, Rule, SantaConfig};
///
/// let config = SantaConfig::new(
///     vec!["ann".into(), "bob".into(), "cat".into(), "dan".into()],
///     vec![Rule::new("ann", "bob"), Rule::new("ann", "cat")],
/// ).unwrap();
///
/// let pairs = PairingSolver::new(config).solve().unwrap();
/// assert_eq!(pairs.len(), 2);
/// assert!(pairs.iter().any(|p| p.contains("ann") && p.contains("dan")));
/// ```
#[derive(Debug, Clone)]
pub struct PairingSolver {
    config: SantaConfig,
    search: SearchConfig,
    strategy: Strategy,
}

impl PairingSolver {
    /// Creates a solver with default search settings.
    pub fn new(config: SantaConfig) -> Self {
        Self {
            config,
            search: SearchConfig::default(),
            strategy: Strategy::default(),
        }
    }

    /// Loads a configuration file and creates a solver for it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::new(SantaConfig::from_path(path)?))
    }

    /// Sets the search settings.
    pub fn with_config(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The configuration being solved.
    pub fn config(&self) -> &SantaConfig {
        &self.config
    }

    /// Computes a pairing with the bundled solver.
    ///
    /// Returns one [`Pair`] per slot, or an empty vector when the rules
    /// leave no valid pairing.
    pub fn solve(&self) -> Result<Vec<Pair>, SolveError> {
        match self.strategy {
            Strategy::Constraint => self.solve_with(&BacktrackingSolver::new()),
            Strategy::Matching => {
                let pairs = matching::perfect_matching(&self.config, self.search.seed);
                if pairs.is_empty() && self.config.group_count() > 0 {
                    tracing::info!("no valid pairing exists");
                } else {
                    tracing::info!(pairs = pairs.len(), "pairing found");
                }
                Ok(pairs)
            }
        }
    }

    /// Computes a pairing through the constraint encoding with the given oracle.
    pub fn solve_with<S: CpSolver>(&self, oracle: &S) -> Result<Vec<Pair>, SolveError> {
        let model = self.build_model();
        let solution = oracle.solve(&model, &self.search);

        match solution.status {
            SolverStatus::Feasible => {
                let pairs = self.decode(&solution)?;
                tracing::info!(
                    pairs = pairs.len(),
                    nodes = solution.nodes,
                    elapsed_ms = solution.solve_time_ms,
                    "pairing found"
                );
                Ok(pairs)
            }
            SolverStatus::Infeasible => {
                tracing::info!(nodes = solution.nodes, "no valid pairing exists");
                Ok(Vec::new())
            }
            SolverStatus::ModelInvalid => Err(SolveError::ModelInvalid(
                solution.reason.unwrap_or_else(|| "unspecified".into()),
            )),
        }
    }

    /// Builds the constraint model for the configuration.
    pub fn build_model(&self) -> CpModel {
        let n = self.config.participant_count();
        let g = self.config.group_count();
        let mut model = CpModel::new("secret-santa");

        let groups: Vec<String> = (0..g).map(group_var).collect();
        for (slot, name) in groups.iter().enumerate() {
            model.add_int_var(IntVar::unbounded(name.clone()));
            model.add_fixed(name.clone(), slot as i64);
        }

        let people: Vec<String> = (0..n).map(participant_var).collect();
        for name in &people {
            model.add_int_var(IntVar::unbounded(name.clone()));
            model.add_any_of(name.clone(), groups.clone());
        }

        for group in &groups {
            model.add_count(people.clone(), group.clone(), 2);
        }

        for rule in self.config.rules() {
            // Names were checked against the participant list at load time
            let a = self.config.index_of(&rule.0);
            let b = self.config.index_of(&rule.1);
            if let (Some(a), Some(b)) = (a, b) {
                model.add_not_equal(people[a].clone(), people[b].clone());
            }
        }

        tracing::debug!(
            vars = model.var_count(),
            constraints = model.constraint_count(),
            "built pairing model"
        );
        model
    }

    fn decode(&self, solution: &CpSolution) -> Result<Vec<Pair>, SolveError> {
        let participants = self.config.participants();
        let values = (0..participants.len())
            .map(|i| {
                let var = participant_var(i);
                solution
                    .value(&var)
                    .ok_or_else(|| SolveError::MalformedModel(format!("{var} is unassigned")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut pairs = Vec::with_capacity(self.config.group_count());
        for slot in 0..self.config.group_count() {
            let var = group_var(slot);
            let label = solution
                .value(&var)
                .ok_or_else(|| SolveError::MalformedModel(format!("{var} is unassigned")))?;

            let members: Vec<&String> = participants
                .iter()
                .zip(&values)
                .filter(|(_, value)| **value == label)
                .map(|(name, _)| name)
                .collect();

            match members[..] {
                [a, b] => pairs.push(Pair(a.clone(), b.clone())),
                _ => {
                    return Err(SolveError::MalformedModel(format!(
                        "slot {slot} holds {} participants",
                        members.len()
                    )))
                }
            }
        }
        Ok(pairs)
    }
}

fn group_var(slot: usize) -> String {
    format!("group_{slot}")
}

fn participant_var(index: usize) -> String {
    format!("participant_{index}")
}
