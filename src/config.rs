//! Participant list and forbidden-pair rules.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Two participants who must not end up in the same pair.
///
/// Stored in the order given, enforced in both directions. Serialized as a
/// two-element array: `["alice", "bob"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule(pub String, pub String);

impl Rule {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self(a.into(), b.into())
    }

    /// Whether both names of this rule are in `group`.
    pub fn forbids<S: AsRef<str>>(&self, group: &[S]) -> bool {
        let has = |name: &str| group.iter().any(|g| g.as_ref() == name);
        has(&self.0) && has(&self.1)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    participants: Vec<String>,
    rules: Vec<Rule>,
}

/// A validated secret santa configuration.
///
/// Construction enforces:
///
/// - an even number of participants
/// - unique participant names
/// - rules that only name participants
/// - rules that name two different participants
///
/// # Examples
///
/// ```
/// use secret_santa::SantaConfig;
///
/// let config = SantaConfig::from_json_str(
///     r#"{"participants": ["ann", "bob", "cat", "dan"], "rules": [["ann", "bob"]]}"#,
/// ).unwrap();
/// assert_eq!(config.group_count(), 2);
/// assert!(SantaConfig::from_json_str(r#"{"participants": ["ann"], "rules": []}"#).is_err());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct SantaConfig {
    participants: Vec<String>,
    rules: Vec<Rule>,
}

impl SantaConfig {
    /// Builds a configuration from names and rules, validating both.
    pub fn new(participants: Vec<String>, rules: Vec<Rule>) -> Result<Self, ConfigError> {
        if participants.len() % 2 != 0 {
            return Err(ConfigError::OddParticipantCount(participants.len()));
        }

        let mut seen = HashSet::with_capacity(participants.len());
        for name in &participants {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateParticipant(name.clone()));
            }
        }

        for Rule(a, b) in &rules {
            for name in [a, b] {
                if !seen.contains(name.as_str()) {
                    return Err(ConfigError::UnknownParticipant(name.clone()));
                }
            }
            if a == b {
                return Err(ConfigError::SelfRule(a.clone()));
            }
        }

        tracing::debug!(
            participants = participants.len(),
            rules = rules.len(),
            "configuration loaded"
        );

        Ok(Self {
            participants,
            rules,
        })
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::new(raw.participants, raw.rules)
    }

    /// Parses and validates a JSON configuration from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_reader(reader)?;
        Self::new(raw.participants, raw.rules)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading configuration");
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Participant names in configuration order.
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Forbidden-pair rules.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of participants.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Number of pairs a complete assignment has.
    pub fn group_count(&self) -> usize {
        self.participants.len() / 2
    }

    /// Position of a participant in the configuration.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.participants.iter().position(|p| p == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("P{i}")).collect()
    }

    #[test]
    fn test_load_counts() {
        let config = SantaConfig::new(
            names(12),
            vec![Rule::new("P0", "P1"), Rule::new("P2", "P3")],
        )
        .unwrap();
        assert_eq!(config.participant_count(), 12);
        assert_eq!(config.rules().len(), 2);
        assert_eq!(config.group_count(), 6);
        assert_eq!(config.index_of("P5"), Some(5));
        assert_eq!(config.index_of("nobody"), None);
    }

    #[test]
    fn test_odd_count_rejected() {
        let err = SantaConfig::new(names(5), vec![]).unwrap_err();
        assert!(matches!(err, ConfigError::OddParticipantCount(5)));
    }

    #[test]
    fn test_empty_config() {
        let config = SantaConfig::new(vec![], vec![]).unwrap();
        assert_eq!(config.group_count(), 0);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut participants = names(3);
        participants.push("P1".into());
        let err = SantaConfig::new(participants, vec![]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateParticipant(ref n) if n == "P1"));
    }

    #[test]
    fn test_unknown_rule_name_rejected() {
        let err = SantaConfig::new(names(4), vec![Rule::new("P0", "Q")]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownParticipant(ref n) if n == "Q"));
    }

    #[test]
    fn test_self_rule_rejected() {
        let err = SantaConfig::new(names(4), vec![Rule::new("P2", "P2")]).unwrap_err();
        assert!(matches!(err, ConfigError::SelfRule(_)));
    }

    #[test]
    fn test_from_json() {
        let config = SantaConfig::from_json_str(
            r#"{
                "participants": ["a", "b", "c", "d"],
                "rules": [["a", "b"], ["c", "a"]]
            }"#,
        )
        .unwrap();
        assert_eq!(config.participants(), ["a", "b", "c", "d"]);
        assert_eq!(config.rules()[1], Rule::new("c", "a"));
    }

    #[test]
    fn test_json_odd_count() {
        let err = SantaConfig::from_json_str(r#"{"participants": ["a", "b", "c"], "rules": []}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::OddParticipantCount(3)));
    }

    #[test]
    fn test_json_malformed_rule() {
        let err = SantaConfig::from_json_str(
            r#"{"participants": ["a", "b"], "rules": [["a", "b", "c"]]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_unknown_field() {
        let err = SantaConfig::from_json_str(
            r#"{"participants": ["a", "b"], "rules": [], "budget": 20}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_fixture_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/example.json");
        let config = SantaConfig::from_path(path).unwrap();
        assert_eq!(config.participant_count(), 12);
        assert_eq!(config.rules().len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = SantaConfig::from_path("/nonexistent/santa.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_rule_forbids() {
        let rule = Rule::new("a", "b");
        assert!(rule.forbids(&["b", "a"]));
        assert!(!rule.forbids(&["a", "c"]));
    }
}
