//! Perfect matching on the graph of allowed pairs.
//!
//! Participants are nodes; two participants are adjacent unless a rule
//! forbids them. A valid assignment is a perfect matching of this graph.
//! The search always matches the lowest-index free participant next, so
//! every matching is explored at most once.

use crate::config::SantaConfig;
use crate::pairing::Pair;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Finds a perfect matching, or returns an empty vector if none exists.
///
/// Pairs come out in the order their lower-index member appears in the
/// configuration. With a seed, partners are tried in shuffled order.
pub fn perfect_matching(config: &SantaConfig, seed: Option<u64>) -> Vec<Pair> {
    let n = config.participant_count();
    let mut allowed = vec![vec![true; n]; n];
    for (i, row) in allowed.iter_mut().enumerate() {
        row[i] = false;
    }
    for rule in config.rules() {
        if let (Some(a), Some(b)) = (config.index_of(&rule.0), config.index_of(&rule.1)) {
            allowed[a][b] = false;
            allowed[b][a] = false;
        }
    }

    let mut search = MatchSearch {
        allowed: &allowed,
        partner: vec![None; n],
        rng: seed.map(StdRng::seed_from_u64),
    };
    if !search.extend() {
        return Vec::new();
    }

    let names = config.participants();
    search
        .partner
        .iter()
        .enumerate()
        .filter_map(|(i, p)| match p {
            Some(j) if *j > i => Some(Pair(names[i].clone(), names[*j].clone())),
            _ => None,
        })
        .collect()
}

struct MatchSearch<'a> {
    allowed: &'a [Vec<bool>],
    partner: Vec<Option<usize>>,
    rng: Option<StdRng>,
}

impl MatchSearch<'_> {
    fn extend(&mut self) -> bool {
        let Some(first) = self.partner.iter().position(Option::is_none) else {
            return true;
        };

        // Free participants can only pair within their component of the
        // allowed graph, so every component needs an even size
        if self.has_odd_component() {
            return false;
        }

        let mut candidates: Vec<usize> = (first + 1..self.partner.len())
            .filter(|&j| self.partner[j].is_none() && self.allowed[first][j])
            .collect();
        if let Some(rng) = self.rng.as_mut() {
            candidates.shuffle(rng);
        }

        for j in candidates {
            self.partner[first] = Some(j);
            self.partner[j] = Some(first);
            if self.extend() {
                return true;
            }
            self.partner[first] = None;
            self.partner[j] = None;
        }
        false
    }

    fn has_odd_component(&self) -> bool {
        let n = self.partner.len();
        let mut visited: Vec<bool> = self.partner.iter().map(Option::is_some).collect();
        let mut stack = Vec::new();
        for start in 0..n {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            stack.push(start);
            let mut size = 0;
            while let Some(i) = stack.pop() {
                size += 1;
                for j in 0..n {
                    if !visited[j] && self.allowed[i][j] {
                        visited[j] = true;
                        stack.push(j);
                    }
                }
            }
            if size % 2 == 1 {
                return true;
            }
        }
        false
    }
}
