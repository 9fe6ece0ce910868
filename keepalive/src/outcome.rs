//! Structured cycle outcomes for the caller to log

use fsapi_session::SessionError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Successful result of one keep-alive cycle
///
/// Skipping is a defined success, not a failure: a device that is actively
/// streaming stays awake on its own, and a cycle gated off by a down host
/// is working as configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CycleOutcome {
    /// Pause was written; the device stays awake without audible output
    Paused {
        /// Whether the input mode had to be corrected first
        mode_corrected: bool,
    },

    /// Device is actively streaming with known duration; touching it would
    /// interrupt playback, and playback itself keeps it awake
    SkippedActivelyStreaming,

    /// Companion host is down; the device was not contacted
    SkippedHostDown,
}

impl fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleOutcome::Paused {
                mode_corrected: true,
            } => write!(f, "corrected input mode to Bluetooth/Aux and sent pause"),
            CycleOutcome::Paused {
                mode_corrected: false,
            } => write!(f, "sent pause to keep the device awake"),
            CycleOutcome::SkippedActivelyStreaming => {
                write!(f, "device is actively streaming, no action needed")
            }
            CycleOutcome::SkippedHostDown => {
                write!(f, "companion host is down, cycle skipped")
            }
        }
    }
}

/// Failure of one keep-alive cycle
#[derive(Debug, Error)]
pub enum CycleError {
    /// Switching to Bluetooth/Aux failed; the cycle aborted before pausing
    #[error("Mode correction failed: {0}")]
    ModeCorrectionFailed(#[source] SessionError),

    /// The pause write failed
    #[error("Pause failed: {0}")]
    PauseFailed(#[source] SessionError),

    /// A state read failed
    #[error(transparent)]
    Device(#[from] SessionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_rationale() {
        let outcome = CycleOutcome::Paused {
            mode_corrected: true,
        };
        assert!(format!("{}", outcome).contains("Bluetooth/Aux"));

        let outcome = CycleOutcome::SkippedActivelyStreaming;
        assert!(format!("{}", outcome).contains("actively streaming"));
    }
}
