//! CP solver interface and a backtracking implementation.

use super::model::{Constraint, CpModel};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Status of the solver after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// A satisfying assignment was found.
    Feasible,
    /// No satisfying assignment exists.
    Infeasible,
    /// Model is invalid or malformed.
    ModelInvalid,
}

/// Solution from a CP solver.
#[derive(Debug, Clone)]
pub struct CpSolution {
    /// Solver status.
    pub status: SolverStatus,
    /// Integer variable assignments. Empty unless a solution was found.
    pub int_vars: HashMap<String, i64>,
    /// Why the model was rejected, for [`SolverStatus::ModelInvalid`].
    pub reason: Option<String>,
    /// Search nodes visited.
    pub nodes: u64,
    /// Solve time in milliseconds.
    pub solve_time_ms: i64,
}

impl CpSolution {
    /// Creates an empty solution with the given status.
    pub fn empty(status: SolverStatus) -> Self {
        Self {
            status,
            int_vars: HashMap::new(),
            reason: None,
            nodes: 0,
            solve_time_ms: 0,
        }
    }

    /// Creates a [`SolverStatus::ModelInvalid`] solution carrying a reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            ..Self::empty(SolverStatus::ModelInvalid)
        }
    }

    /// Whether a feasible solution was found.
    pub fn is_solution_found(&self) -> bool {
        self.status == SolverStatus::Feasible
    }

    /// Value assigned to a variable.
    pub fn value(&self, name: &str) -> Option<i64> {
        self.int_vars.get(name).copied()
    }
}

/// Hard cap on the number of values enumerated for a single variable.
pub const ENUMERATION_LIMIT: u64 = 1 << 24;

/// Search configuration.
///
/// # Examples
///
/// ```
/// use secret_santa::cp::SearchConfig;
///
/// let config = SearchConfig::default().with_seed(7);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Random seed for value ordering. `None` explores values in
    /// ascending order, which makes the search deterministic.
    pub seed: Option<u64>,
    /// Largest domain the solver will enumerate. Variables whose
    /// domain stays larger after constraint narrowing make the model
    /// invalid. Never exceeds [`ENUMERATION_LIMIT`].
    pub max_domain_size: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_domain_size: 1 << 16,
        }
    }
}

impl SearchConfig {
    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the maximum enumerable domain size, clamped to [`ENUMERATION_LIMIT`].
    pub fn with_max_domain_size(mut self, size: u64) -> Self {
        self.max_domain_size = size.min(ENUMERATION_LIMIT);
        self
    }
}

/// Trait for CP solver implementations.
///
/// Implementors provide the actual constraint solving logic: given the
/// conjunction of constraints in a [`CpModel`], either return a
/// satisfying valuation or report that none exists.
pub trait CpSolver {
    /// Solves the model and returns a solution.
    fn solve(&self, model: &CpModel, config: &SearchConfig) -> CpSolution;
}

/// Constraint over variable indices.
#[derive(Debug)]
enum Compiled {
    Fixed(usize, i64),
    AnyOf(usize, Vec<usize>),
    Count(Vec<usize>, usize, usize),
    NotEqual(usize, usize),
}

/// Depth-first finite-domain solver.
///
/// Domains come from variable bounds, `Fixed` constraints and `AnyOf`
/// constraints over already-finite candidates. The search branches on
/// the variable with the smallest domain and runs forward checking to a
/// fixpoint after every decision.
///
/// Values that are interchangeable at a node (same domains, same
/// membership candidates, counted by `Count` constraints over the same
/// variables) are tried only once. For models whose `Count` targets label
/// otherwise identical buckets this removes the factorial blowup of
/// relabelling the buckets when proving infeasibility.
///
/// # Limitations
///
/// - Every variable must end up with a finite domain of at most
///   [`SearchConfig::max_domain_size`] values
/// - No learning or restarts: exhaustive infeasibility proofs are
///   exponential in the worst case
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BacktrackingSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CpSolver for BacktrackingSolver {
    fn solve(&self, model: &CpModel, config: &SearchConfig) -> CpSolution {
        if let Err(reason) = model.validate() {
            return CpSolution::invalid(reason);
        }

        let start_time = std::time::Instant::now();

        // Sorted names give every variable a stable index
        let mut names: Vec<&str> = model.int_vars.keys().map(String::as_str).collect();
        names.sort_unstable();
        let index: HashMap<&str, usize> = names.iter().enumerate().map(|(i, n)| (*n, i)).collect();

        let compiled: Vec<Compiled> = model
            .constraints
            .iter()
            .map(|c| compile(c, &index))
            .collect();

        let max_domain_size = config.max_domain_size.min(ENUMERATION_LIMIT);
        let domains = match initial_domains(model, &names, &compiled, max_domain_size) {
            Ok(Some(domains)) => domains,
            Ok(None) => {
                let mut solution = CpSolution::empty(SolverStatus::Infeasible);
                solution.solve_time_ms = start_time.elapsed().as_millis() as i64;
                return solution;
            }
            Err(reason) => return CpSolution::invalid(reason),
        };

        let mut search = Search::new(&compiled, names.len(), config.seed);
        let found = search.run(domains);

        let mut solution = match found {
            Some(values) => CpSolution {
                status: SolverStatus::Feasible,
                int_vars: names
                    .iter()
                    .zip(values)
                    .map(|(name, value)| (name.to_string(), value))
                    .collect(),
                ..CpSolution::empty(SolverStatus::Feasible)
            },
            None => CpSolution::empty(SolverStatus::Infeasible),
        };
        solution.nodes = search.nodes;
        solution.solve_time_ms = start_time.elapsed().as_millis() as i64;

        tracing::trace!(
            model = %model.name,
            status = ?solution.status,
            nodes = solution.nodes,
            "search finished"
        );

        solution
    }
}

fn compile(constraint: &Constraint, index: &HashMap<&str, usize>) -> Compiled {
    // validate() guarantees every name is present
    let ix = |name: &String| index[name.as_str()];
    match constraint {
        Constraint::Fixed { var, value } => Compiled::Fixed(ix(var), *value),
        Constraint::AnyOf { var, candidates } => {
            Compiled::AnyOf(ix(var), candidates.iter().map(ix).collect())
        }
        Constraint::Count {
            vars,
            target,
            count,
        } => Compiled::Count(vars.iter().map(ix).collect(), ix(target), *count),
        Constraint::NotEqual { left, right } => Compiled::NotEqual(ix(left), ix(right)),
    }
}

/// Derives a finite domain for every variable.
///
/// Returns `Ok(None)` when some domain is already empty, and `Err` when
/// a variable cannot be given an enumerable domain.
fn initial_domains(
    model: &CpModel,
    names: &[&str],
    compiled: &[Compiled],
    max_domain_size: u64,
) -> Result<Option<Vec<Vec<i64>>>, String> {
    let mut domains: Vec<Option<BTreeSet<i64>>> = names
        .iter()
        .map(|name| {
            let var = &model.int_vars[*name];
            if let Some(value) = var.fixed {
                Some(BTreeSet::from([value]))
            } else if var.is_bounded() && var.domain_size() <= max_domain_size {
                Some((var.min..=var.max).collect())
            } else {
                None
            }
        })
        .collect();

    for c in compiled {
        if let Compiled::Fixed(var, value) = *c {
            domains[var] = Some(match domains[var].take() {
                Some(d) if d.contains(&value) => BTreeSet::from([value]),
                Some(_) => BTreeSet::new(),
                None => BTreeSet::from([value]),
            });
        }
    }

    // AnyOf can chain through other AnyOf targets, so iterate to a fixpoint
    let mut changed = true;
    while changed {
        changed = false;
        for c in compiled {
            let Compiled::AnyOf(var, candidates) = c else {
                continue;
            };
            let mut allowed = BTreeSet::new();
            let mut all_known = true;
            for &cand in candidates {
                match &domains[cand] {
                    Some(d) => allowed.extend(d.iter().copied()),
                    None => all_known = false,
                }
            }
            if !all_known {
                continue;
            }
            let narrowed = match &domains[*var] {
                Some(d) => d.intersection(&allowed).copied().collect(),
                None => allowed,
            };
            if domains[*var].as_ref() != Some(&narrowed) {
                domains[*var] = Some(narrowed);
                changed = true;
            }
        }
    }

    let mut finite = Vec::with_capacity(domains.len());
    for (name, domain) in names.iter().zip(domains) {
        match domain {
            Some(d) if d.len() as u64 > max_domain_size => {
                return Err(format!("domain of {name} exceeds {max_domain_size} values"));
            }
            Some(d) => finite.push(d.into_iter().collect::<Vec<_>>()),
            None if !model.int_vars[*name].is_bounded() => {
                return Err(format!("variable {name} is unbounded and nothing narrows it"));
            }
            None => return Err(format!("variable {name} has no finite domain")),
        }
    }

    if finite.iter().any(Vec::is_empty) {
        return Ok(None);
    }
    Ok(Some(finite))
}

struct Search<'a> {
    constraints: &'a [Compiled],
    /// Variables used only as `Count` targets, `AnyOf` candidates or in `Fixed`.
    pure_targets: Vec<bool>,
    /// `(target, sorted vars, count)` for every `Count` over a pure target.
    counted: Vec<(usize, Vec<usize>, usize)>,
    rng: Option<StdRng>,
    nodes: u64,
}

impl<'a> Search<'a> {
    fn new(constraints: &'a [Compiled], var_count: usize, seed: Option<u64>) -> Self {
        let mut pure_targets = vec![false; var_count];
        for c in constraints {
            if let Compiled::Count(_, target, _) = c {
                pure_targets[*target] = true;
            }
        }
        for c in constraints {
            match c {
                Compiled::Count(vars, _, _) => {
                    for &v in vars {
                        pure_targets[v] = false;
                    }
                }
                Compiled::NotEqual(left, right) => {
                    pure_targets[*left] = false;
                    pure_targets[*right] = false;
                }
                Compiled::AnyOf(var, _) => pure_targets[*var] = false,
                Compiled::Fixed(..) => {}
            }
        }

        let counted = constraints
            .iter()
            .filter_map(|c| match c {
                Compiled::Count(vars, target, count) if pure_targets[*target] => {
                    let mut vars = vars.clone();
                    vars.sort_unstable();
                    Some((*target, vars, *count))
                }
                _ => None,
            })
            .collect();

        Self {
            constraints,
            pure_targets,
            counted,
            rng: seed.map(StdRng::seed_from_u64),
            nodes: 0,
        }
    }

    fn run(&mut self, mut domains: Vec<Vec<i64>>) -> Option<Vec<i64>> {
        if !self.propagate(&mut domains) {
            return None;
        }
        self.branch(domains)
    }

    fn branch(&mut self, domains: Vec<Vec<i64>>) -> Option<Vec<i64>> {
        self.nodes += 1;

        // Smallest undecided domain first; ties go to the lowest index
        let pick = domains
            .iter()
            .enumerate()
            .filter(|(_, d)| d.len() > 1)
            .min_by_key(|(i, d)| (d.len(), *i))
            .map(|(i, _)| i);

        let Some(var) = pick else {
            return Some(domains.into_iter().map(|d| d[0]).collect());
        };

        let mut values = domains[var].clone();
        if let Some(rng) = self.rng.as_mut() {
            values.shuffle(rng);
        }
        let values = self.distinct_values(&domains, values);

        for value in values {
            let mut next = domains.clone();
            next[var] = vec![value];
            if self.propagate(&mut next) {
                if let Some(found) = self.branch(next) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Keeps the first value of every interchangeable class, in order.
    ///
    /// Swapping two values everywhere except in the pure targets maps
    /// solutions to solutions when both values lie in exactly the same
    /// domains, in the same `AnyOf` candidate sets, and are the targets of
    /// `Count` constraints with the same variables and counts.
    fn distinct_values(&self, domains: &[Vec<i64>], values: Vec<i64>) -> Vec<i64> {
        if values.len() < 2 {
            return values;
        }
        let targets_decided = self
            .pure_targets
            .iter()
            .zip(domains)
            .all(|(pure, d)| !pure || d.len() == 1);
        let candidates_decided = self.constraints.iter().all(|c| match c {
            Compiled::AnyOf(_, candidates) => candidates.iter().all(|&c| domains[c].len() == 1),
            _ => true,
        });
        if !targets_decided || !candidates_decided {
            return values;
        }

        let mut seen = HashSet::new();
        values
            .into_iter()
            .filter(|&value| seen.insert(self.value_key(domains, value)))
            .collect()
    }

    fn value_key(&self, domains: &[Vec<i64>], value: i64) -> (Vec<(&[usize], usize)>, Vec<bool>) {
        let mut counts: Vec<(&[usize], usize)> = self
            .counted
            .iter()
            .filter(|(target, _, _)| domains[*target][0] == value)
            .map(|(_, vars, count)| (vars.as_slice(), *count))
            .collect();
        counts.sort_unstable();

        let mut membership: Vec<bool> = domains
            .iter()
            .zip(&self.pure_targets)
            .filter(|(_, pure)| !**pure)
            .map(|(d, _)| d.contains(&value))
            .collect();
        membership.extend(self.constraints.iter().filter_map(|c| match c {
            Compiled::AnyOf(_, candidates) => {
                Some(candidates.iter().any(|&c| domains[c][0] == value))
            }
            _ => None,
        }));

        (counts, membership)
    }

    /// Forward checking to a fixpoint. Returns `false` on a domain wipeout.
    fn propagate(&self, domains: &mut [Vec<i64>]) -> bool {
        let mut changed = true;
        while changed {
            changed = false;
            for c in self.constraints {
                match c {
                    Compiled::Fixed(var, value) => {
                        if domains[*var].len() > 1 || domains[*var][0] != *value {
                            let before = domains[*var].len();
                            domains[*var].retain(|v| v == value);
                            changed |= domains[*var].len() != before;
                        }
                    }
                    Compiled::AnyOf(var, candidates) => {
                        let allowed: BTreeSet<i64> = candidates
                            .iter()
                            .flat_map(|&c| domains[c].iter().copied())
                            .collect();
                        let before = domains[*var].len();
                        domains[*var].retain(|v| allowed.contains(v));
                        changed |= domains[*var].len() != before;
                    }
                    Compiled::Count(vars, target, count) => {
                        if domains[*target].len() != 1 {
                            continue;
                        }
                        let t = domains[*target][0];
                        let mut sure = 0;
                        let mut possible = 0;
                        for &v in vars {
                            if domains[v].len() == 1 {
                                if domains[v][0] == t {
                                    sure += 1;
                                }
                            } else if domains[v].contains(&t) {
                                possible += 1;
                            }
                        }
                        if sure > *count || sure + possible < *count {
                            return false;
                        }
                        if possible > 0 && sure == *count {
                            for &v in vars {
                                if domains[v].len() > 1 && domains[v].contains(&t) {
                                    domains[v].retain(|x| *x != t);
                                    changed = true;
                                }
                            }
                        } else if possible > 0 && sure + possible == *count {
                            for &v in vars {
                                if domains[v].len() > 1 && domains[v].contains(&t) {
                                    domains[v] = vec![t];
                                    changed = true;
                                }
                            }
                        }
                    }
                    Compiled::NotEqual(left, right) => {
                        if left == right {
                            return false;
                        }
                        for (a, b) in [(*left, *right), (*right, *left)] {
                            if domains[a].len() == 1 {
                                let value = domains[a][0];
                                if domains[b].contains(&value) {
                                    domains[b].retain(|x| *x != value);
                                    changed = true;
                                }
                            }
                        }
                    }
                }
                if domains.iter().any(Vec::is_empty) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cp::IntVar;

    fn solve(model: &CpModel) -> CpSolution {
        BacktrackingSolver::new().solve(model, &SearchConfig::default())
    }

    #[test]
    fn test_fixed_and_any_of() {
        let mut model = CpModel::new("test");
        model.add_int_var(IntVar::unbounded("g0"));
        model.add_int_var(IntVar::unbounded("g1"));
        model.add_fixed("g0", 0);
        model.add_fixed("g1", 1);
        model.add_int_var(IntVar::unbounded("x"));
        model.add_any_of("x", vec!["g0".into(), "g1".into()]);

        let solution = solve(&model);
        assert!(solution.is_solution_found());
        assert_eq!(solution.value("g0"), Some(0));
        assert_eq!(solution.value("g1"), Some(1));
        assert!(matches!(solution.value("x"), Some(0 | 1)));
    }

    #[test]
    fn test_not_equal() {
        let mut model = CpModel::new("test");
        model.add_int_var(IntVar::new("a", 0, 1));
        model.add_int_var(IntVar::new("b", 0, 1));
        model.add_not_equal("a", "b");

        let solution = solve(&model);
        assert!(solution.is_solution_found());
        assert_ne!(solution.value("a"), solution.value("b"));
    }

    #[test]
    fn test_pigeonhole_infeasible() {
        let mut model = CpModel::new("test");
        for name in ["a", "b", "c"] {
            model.add_int_var(IntVar::new(name, 0, 1));
        }
        model.add_not_equal("a", "b");
        model.add_not_equal("b", "c");
        model.add_not_equal("a", "c");

        let solution = solve(&model);
        assert_eq!(solution.status, SolverStatus::Infeasible);
        assert!(solution.int_vars.is_empty());
    }

    #[test]
    fn test_count_exact() {
        let mut model = CpModel::new("test");
        model.add_int_var(IntVar::fixed("t", 2));
        let vars: Vec<String> = (0..5).map(|i| format!("v{i}")).collect();
        for v in &vars {
            model.add_int_var(IntVar::new(v.clone(), 0, 3));
        }
        model.add_count(vars.clone(), "t", 3);

        let solution = solve(&model);
        assert!(solution.is_solution_found());
        let hits = vars
            .iter()
            .filter(|v| solution.value(v) == Some(2))
            .count();
        assert_eq!(hits, 3);
    }

    #[test]
    fn test_count_too_large() {
        let mut model = CpModel::new("test");
        model.add_int_var(IntVar::fixed("t", 0));
        model.add_int_var(IntVar::new("a", 0, 1));
        model.add_count(vec!["a".into()], "t", 2);

        assert_eq!(solve(&model).status, SolverStatus::Infeasible);
    }

    #[test]
    fn test_self_inequality_infeasible() {
        let mut model = CpModel::new("test");
        model.add_int_var(IntVar::new("a", 0, 5));
        model.add_not_equal("a", "a");

        assert_eq!(solve(&model).status, SolverStatus::Infeasible);
    }

    #[test]
    fn test_conflicting_fixed() {
        let mut model = CpModel::new("test");
        model.add_int_var(IntVar::fixed("a", 1));
        model.add_fixed("a", 2);

        assert_eq!(solve(&model).status, SolverStatus::Infeasible);
    }

    #[test]
    fn test_invalid_model() {
        let mut model = CpModel::new("test");
        model.add_not_equal("nonexistent", "other");

        let solution = solve(&model);
        assert_eq!(solution.status, SolverStatus::ModelInvalid);
        assert!(solution.reason.is_some());
    }

    #[test]
    fn test_unbounded_variable_invalid() {
        let mut model = CpModel::new("test");
        model.add_int_var(IntVar::unbounded("free"));

        let solution = solve(&model);
        assert_eq!(solution.status, SolverStatus::ModelInvalid);
        assert!(solution.reason.unwrap().contains("free"));
    }

    #[test]
    fn test_domain_size_limit() {
        let mut model = CpModel::new("test");
        model.add_int_var(IntVar::new("wide", 0, 1000));

        let config = SearchConfig::default().with_max_domain_size(10);
        let solution = BacktrackingSolver::new().solve(&model, &config);
        assert_eq!(solution.status, SolverStatus::ModelInvalid);
    }

    #[test]
    fn test_unbounded_rejected_at_any_limit() {
        let mut model = CpModel::new("test");
        model.add_int_var(IntVar::unbounded("free"));

        let config = SearchConfig::default().with_max_domain_size(u64::MAX);
        assert_eq!(config.max_domain_size, ENUMERATION_LIMIT);

        let solution = BacktrackingSolver::new().solve(&model, &config);
        assert_eq!(solution.status, SolverStatus::ModelInvalid);
        assert!(solution.reason.unwrap().contains("unbounded"));
    }

    #[test]
    fn test_limit_clamped_in_struct_literal() {
        let mut model = CpModel::new("test");
        model.add_int_var(IntVar::new("huge", 0, 1 << 40));

        let config = SearchConfig {
            seed: None,
            max_domain_size: u64::MAX,
        };
        let solution = BacktrackingSolver::new().solve(&model, &config);
        assert_eq!(solution.status, SolverStatus::ModelInvalid);
    }

    /// Slots `0..slots` each take exactly two of `vars` members; the first
    /// `vars - 3` members must not share a slot with the last three.
    fn odd_blocks(slots: usize) -> CpModel {
        let n = slots * 2;
        let mut model = CpModel::new("odd_blocks");
        let groups: Vec<String> = (0..slots).map(|g| format!("g{g}")).collect();
        let vars: Vec<String> = (0..n).map(|i| format!("x{i:02}")).collect();
        for (g, name) in groups.iter().enumerate() {
            model.add_int_var(IntVar::unbounded(name.clone()));
            model.add_fixed(name.clone(), g as i64);
        }
        for v in &vars {
            model.add_int_var(IntVar::unbounded(v.clone()));
            model.add_any_of(v.clone(), groups.clone());
        }
        for g in &groups {
            model.add_count(vars.clone(), g.clone(), 2);
        }
        for a in &vars[..n - 3] {
            for b in &vars[n - 3..] {
                model.add_not_equal(a.clone(), b.clone());
            }
        }
        model
    }

    #[test]
    fn test_interchangeable_values_tried_once() {
        let model = odd_blocks(10);
        let start = std::time::Instant::now();
        let solution = solve(&model);
        assert_eq!(solution.status, SolverStatus::Infeasible);
        assert!(solution.nodes < 1_000, "explored {} nodes", solution.nodes);
        assert!(start.elapsed() < std::time::Duration::from_secs(2));

        let seeded = BacktrackingSolver::new().solve(&model, &SearchConfig::default().with_seed(3));
        assert_eq!(seeded.status, SolverStatus::Infeasible);
        assert!(seeded.nodes < 1_000, "explored {} nodes", seeded.nodes);
    }

    #[test]
    fn test_symmetry_keeps_solutions() {
        // One block of four and one of two: feasible, and values stay distinct per slot
        let mut model = CpModel::new("blocks");
        let groups: Vec<String> = (0..3).map(|g| format!("g{g}")).collect();
        for (g, name) in groups.iter().enumerate() {
            model.add_int_var(IntVar::fixed(name.clone(), g as i64));
        }
        let vars: Vec<String> = (0..6).map(|i| format!("x{i}")).collect();
        for v in &vars {
            model.add_int_var(IntVar::unbounded(v.clone()));
            model.add_any_of(v.clone(), groups.clone());
        }
        for g in &groups {
            model.add_count(vars.clone(), g.clone(), 2);
        }
        for a in &vars[..4] {
            for b in &vars[4..] {
                model.add_not_equal(a.clone(), b.clone());
            }
        }

        let solution = solve(&model);
        assert!(solution.is_solution_found());
        assert_eq!(solution.value("x4"), solution.value("x5"));
        for g in 0..3 {
            let hits = vars
                .iter()
                .filter(|v| solution.value(v) == Some(g))
                .count();
            assert_eq!(hits, 2);
        }
    }

    #[test]
    fn test_seeded_search_reproducible() {
        let mut model = CpModel::new("test");
        let vars: Vec<String> = (0..6).map(|i| format!("v{i}")).collect();
        for v in &vars {
            model.add_int_var(IntVar::new(v.clone(), 0, 5));
        }
        for i in 0..vars.len() {
            for j in i + 1..vars.len() {
                model.add_not_equal(vars[i].clone(), vars[j].clone());
            }
        }

        let config = SearchConfig::default().with_seed(11);
        let first = BacktrackingSolver::new().solve(&model, &config);
        let second = BacktrackingSolver::new().solve(&model, &config);
        assert!(first.is_solution_found());
        assert_eq!(first.int_vars, second.int_vars);
    }

    #[test]
    fn test_search_config_default() {
        let config = SearchConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.max_domain_size, 1 << 16);
    }
}
