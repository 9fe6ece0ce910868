//! Per-cycle device state snapshot and the decision predicates

use serde::Serialize;

/// Input mode under which a pause write is known to pause rather than
/// toggle into playback
pub const MODE_BLUETOOTH_AUX: u32 = 1;

/// Play status: stopped or buffering-idle
pub const PLAY_STATUS_STOPPED: u8 = 0;

/// Play status: paused
pub const PLAY_STATUS_PAUSED: u8 = 2;

/// Play-control value that requests a pause
pub const PLAY_CONTROL_PAUSE: u8 = 2;

/// Power value that puts the device into standby
pub const POWER_STANDBY: u8 = 0;

/// Snapshot of the three readings a keep-alive cycle decides on
///
/// Re-fetched every cycle via three independent reads; never cached across
/// cycles. The snapshot is not transactional: the device may change between
/// reads, which at worst costs one extra or missed correction that the next
/// cycle heals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceState {
    /// Input mode (0 = network/wireless streaming, 1 = Bluetooth/Aux)
    pub mode: u32,
    /// Playback status as the device enumerates it
    pub play_status: u8,
    /// Track length; 0 means no addressable media
    pub play_duration: u32,
}

impl DeviceState {
    /// Phase 1: the device is in a non-Bluetooth mode yet outputting audio
    /// with known duration (e.g. wired line-in). Pausing in that state would
    /// start playback, so the mode must be corrected first.
    pub fn needs_mode_correction(&self) -> bool {
        self.mode != MODE_BLUETOOTH_AUX
            && self.play_status == PLAY_STATUS_STOPPED
            && self.play_duration != 0
    }

    /// Phase 2: pausing is safe only when the device is paused in
    /// Bluetooth/Aux mode, or when there is no track metadata at all.
    pub fn safe_to_pause(&self) -> bool {
        (self.mode == MODE_BLUETOOTH_AUX && self.play_status == PLAY_STATUS_PAUSED)
            || self.play_duration == 0
    }
}
