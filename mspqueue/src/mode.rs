//! Play mode and explicit-content filter settings.

use crate::errors::QueueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order in which the queue is walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlayMode {
    /// Insertion order.
    #[default]
    Normal,
    /// A random permutation, drawn again on every mutation of the queue.
    Shuffle,
}

impl PlayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayMode::Normal => "NORMAL",
            PlayMode::Shuffle => "SHUFFLE",
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayMode {
    type Err = QueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NORMAL" => Ok(PlayMode::Normal),
            "SHUFFLE" => Ok(PlayMode::Shuffle),
            _ => Err(QueueError::UnknownPlayMode(s.to_string())),
        }
    }
}

/// Whether records flagged explicit may enter the queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExplicitFilter {
    Allow,
    #[default]
    Disallow,
}

impl ExplicitFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExplicitFilter::Allow => "ALLOW",
            ExplicitFilter::Disallow => "DISALLOW",
        }
    }

    pub fn admits(&self, explicit: bool) -> bool {
        match self {
            ExplicitFilter::Allow => true,
            ExplicitFilter::Disallow => !explicit,
        }
    }
}

impl fmt::Display for ExplicitFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExplicitFilter {
    type Err = QueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALLOW" => Ok(ExplicitFilter::Allow),
            "DISALLOW" => Ok(ExplicitFilter::Disallow),
            _ => Err(QueueError::UnknownFilter(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("shuffle".parse::<PlayMode>().unwrap(), PlayMode::Shuffle);
        assert_eq!(" NORMAL ".parse::<PlayMode>().unwrap(), PlayMode::Normal);
        assert_eq!("Allow".parse::<ExplicitFilter>().unwrap(), ExplicitFilter::Allow);
        assert!(matches!(
            "random".parse::<PlayMode>(),
            Err(QueueError::UnknownPlayMode(name)) if name == "random"
        ));
        assert!("maybe".parse::<ExplicitFilter>().is_err());
    }

    #[test]
    fn defaults() {
        assert_eq!(PlayMode::default(), PlayMode::Normal);
        assert_eq!(ExplicitFilter::default(), ExplicitFilter::Disallow);
        assert!(!ExplicitFilter::Disallow.admits(true));
        assert!(ExplicitFilter::Allow.admits(true));
    }
}
