//! Lock domain types shared between the registry and transport adapters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use pathlock_common::{EVENT_TYPE_LOCK, EVENT_TYPE_UNLOCK, PathlockError};

/// Outcome of an acquire request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LockOutcome {
    Acquired,
    AlreadyLocked,
}

impl LockOutcome {
    pub fn is_acquired(self) -> bool {
        matches!(self, LockOutcome::Acquired)
    }

    /// Label used for metrics and logs
    pub fn as_str(self) -> &'static str {
        match self {
            LockOutcome::Acquired => "acquired",
            LockOutcome::AlreadyLocked => "already_locked",
        }
    }
}

impl fmt::Display for LockOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation requested against the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOperation {
    Lock,
    Unlock,
}

impl LockOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            LockOperation::Lock => EVENT_TYPE_LOCK,
            LockOperation::Unlock => EVENT_TYPE_UNLOCK,
        }
    }
}

impl fmt::Display for LockOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LockOperation {
    type Err = PathlockError;

    /// Event types match exactly; `"lock"` is not `"LOCK"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            EVENT_TYPE_LOCK => Ok(LockOperation::Lock),
            EVENT_TYPE_UNLOCK => Ok(LockOperation::Unlock),
            other => Err(PathlockError::UnrecognizedOperation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operation() {
        assert_eq!("LOCK".parse::<LockOperation>(), Ok(LockOperation::Lock));
        assert_eq!("UNLOCK".parse::<LockOperation>(), Ok(LockOperation::Unlock));
        assert_eq!(
            "lock".parse::<LockOperation>(),
            Err(PathlockError::UnrecognizedOperation("lock".to_string()))
        );
        assert_eq!(
            "".parse::<LockOperation>(),
            Err(PathlockError::UnrecognizedOperation(String::new()))
        );
    }

    #[test]
    fn test_outcome_labels() {
        assert!(LockOutcome::Acquired.is_acquired());
        assert!(!LockOutcome::AlreadyLocked.is_acquired());
        assert_eq!(LockOutcome::AlreadyLocked.to_string(), "already_locked");
        assert_eq!(
            serde_json::to_string(&LockOutcome::AlreadyLocked).unwrap(),
            "\"ALREADY_LOCKED\""
        );
    }
}
