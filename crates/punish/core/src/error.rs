//! Error types for punish calculations.
//!
//! The formula functions never fail. Errors only arise when input records
//! carry numeric values that cannot be reasoned about (NaN or infinite),
//! which are rejected instead of being coerced to a default.
//!
//! Every error exposes a stable [`error_code`](PunishError::error_code) and an
//! [`ErrorSeverity`] so callers can decide between skipping a record and
//! stopping altogether.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same request may succeed with other options
/// - **Validation**: malformed input that must be fixed before retrying
/// - **Internal**: an engine bug
/// - **Fatal**: the caller cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,

    /// Invalid input, should not retry without changes.
    ///
    /// Examples: NaN damage, infinite kill percent
    Validation,

    Internal,

    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an engine bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Failure while computing one defender's punish result.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PunishError {
    #[error("attacking move `{move_id}` has non-finite damage {value}")]
    NonFiniteAttackDamage { move_id: String, value: f64 },

    #[error("move `{move_id}` of `{fighter}` has non-finite damage {value}")]
    NonFiniteDamage {
        fighter: String,
        move_id: String,
        value: f64,
    },

    #[error("move `{move_id}` of `{fighter}` has non-finite kill percent {value}")]
    NonFiniteKillPercent {
        fighter: String,
        move_id: String,
        value: f64,
    },
}

impl PunishError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NonFiniteAttackDamage { .. }
            | Self::NonFiniteDamage { .. }
            | Self::NonFiniteKillPercent { .. } => ErrorSeverity::Validation,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NonFiniteAttackDamage { .. } => "non_finite_attack_damage",
            Self::NonFiniteDamage { .. } => "non_finite_damage",
            Self::NonFiniteKillPercent { .. } => "non_finite_kill_percent",
        }
    }
}

/// Failure of a batch calculation across several defenders.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CalculationError {
    /// Processing stopped at the first defender that failed.
    #[error("punish calculation failed for defender `{defender}`")]
    CalculationFailed {
        defender: String,
        #[source]
        source: PunishError,
    },
}

impl CalculationError {
    /// Severity of the wrapped per-defender error.
    pub fn severity(&self) -> ErrorSeverity {
        self.punish_error().severity()
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::CalculationFailed { .. } => "calculation_failed",
        }
    }

    /// The per-defender error that aborted the batch.
    pub fn punish_error(&self) -> &PunishError {
        match self {
            Self::CalculationFailed { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn batch_error_exposes_source() {
        let inner = PunishError::NonFiniteDamage {
            fighter: "mario".into(),
            move_id: "jab1".into(),
            value: f64::INFINITY,
        };
        let err = CalculationError::CalculationFailed {
            defender: "mario".into(),
            source: inner.clone(),
        };

        assert_eq!(err.to_string(), "punish calculation failed for defender `mario`");
        assert_eq!(err.punish_error(), &inner);
        assert!(err.source().is_some());
        assert_eq!(err.error_code(), "calculation_failed");
        assert_eq!(err.punish_error().error_code(), "non_finite_damage");
    }

    #[test]
    fn non_finite_input_is_a_validation_error() {
        let inner = PunishError::NonFiniteKillPercent {
            fighter: "luigi".into(),
            move_id: "upb".into(),
            value: f64::NAN,
        };
        assert_eq!(inner.severity(), ErrorSeverity::Validation);

        let err = CalculationError::CalculationFailed {
            defender: "luigi".into(),
            source: inner,
        };
        let severity = err.severity();
        assert_eq!(severity, ErrorSeverity::Validation);
        assert_eq!(severity.as_str(), "validation");
        assert!(!severity.is_recoverable());
        assert!(!severity.is_internal());
    }

    #[test]
    fn severity_classes() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
