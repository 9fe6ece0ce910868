//! The two-phase keep-alive controller

use tracing::{debug, info};

use crate::outcome::{CycleError, CycleOutcome};
use crate::probe::HostProbe;
use crate::speaker::SpeakerControl;
use crate::state::{DeviceState, MODE_BLUETOOTH_AUX, PLAY_CONTROL_PAUSE};

/// Decides and applies the single command that keeps a device awake
///
/// One call to [`maintain`](KeepAliveController::maintain) is one cycle:
/// read the device state, apply the two-phase correction, return a typed
/// outcome. Cycles must be strictly serialized by the caller's timer; the
/// controller provides no internal locking and no scheduling.
pub struct KeepAliveController<S> {
    speaker: S,
    gate: Option<HostGate>,
}

struct HostGate {
    probe: Box<dyn HostProbe + Send>,
    address: String,
}

impl<S: SpeakerControl> KeepAliveController<S> {
    /// Controller without a host gate: every cycle proceeds
    pub fn new(speaker: S) -> Self {
        Self {
            speaker,
            gate: None,
        }
    }

    /// Controller gated on a companion host being reachable
    pub fn with_host_gate(
        speaker: S,
        probe: Box<dyn HostProbe + Send>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            speaker,
            gate: Some(HostGate {
                probe,
                address: address.into(),
            }),
        }
    }

    /// Access the underlying speaker, e.g. to close its session on shutdown
    pub fn speaker_mut(&mut self) -> &mut S {
        &mut self.speaker
    }

    /// Run one keep-alive cycle
    ///
    /// Phase 1 corrects the input mode when the device is outputting audio
    /// in a mode where a pause write would start playback. Phase 2 pauses
    /// only when that is known not to toggle into play. An actively
    /// streaming device is left alone and reported as a skip, which is a
    /// success.
    pub fn maintain(&mut self) -> Result<CycleOutcome, CycleError> {
        if let Some(gate) = &self.gate {
            if !gate.probe.is_up(&gate.address) {
                debug!(host = %gate.address, "companion host down, skipping cycle");
                return Ok(CycleOutcome::SkippedHostDown);
            }
        }

        let mut state = self.snapshot()?;
        debug!(?state, "cycle state");

        let mut mode_corrected = false;
        if state.needs_mode_correction() {
            self.speaker
                .set_mode(MODE_BLUETOOTH_AUX)
                .map_err(CycleError::ModeCorrectionFailed)?;
            info!("input mode corrected to Bluetooth/Aux");
            mode_corrected = true;
            // The write changed device state; re-derive before pausing.
            state = self.snapshot()?;
        }

        if state.safe_to_pause() {
            self.speaker
                .set_play_control(PLAY_CONTROL_PAUSE)
                .map_err(CycleError::PauseFailed)?;
            Ok(CycleOutcome::Paused { mode_corrected })
        } else {
            Ok(CycleOutcome::SkippedActivelyStreaming)
        }
    }

    fn snapshot(&mut self) -> Result<DeviceState, CycleError> {
        Ok(DeviceState {
            mode: self.speaker.mode()?,
            play_status: self.speaker.play_status()?,
            play_duration: self.speaker.play_duration()?,
        })
    }
}
