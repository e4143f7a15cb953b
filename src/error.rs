//! Error types.

use thiserror::Error;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Participants cannot be split into pairs.
    #[error("number of participants must be even, got {0}")]
    OddParticipantCount(usize),

    /// The same name appears twice in the participant list.
    #[error("duplicate participant: {0}")]
    DuplicateParticipant(String),

    /// A rule names someone who is not a participant.
    #[error("rule references unknown participant: {0}")]
    UnknownParticipant(String),

    /// A rule pairs a participant with themselves.
    #[error("rule pairs participant with itself: {0}")]
    SelfRule(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by a solve that could not be carried out.
///
/// An infeasible pairing is not an error; it is reported as an empty
/// result.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The oracle rejected the constraint model.
    #[error("constraint model rejected: {0}")]
    ModelInvalid(String),

    /// The oracle's valuation does not decode into pairs.
    #[error("solution does not decode into pairs: {0}")]
    MalformedModel(String),
}
