//! Keep-alive decision core for FSAPI audio receivers
//!
//! Some network receivers drop into standby after a period without playback
//! activity. The [`KeepAliveController`] prevents that by reading the
//! device's input mode, play status, and track duration once per cycle and
//! issuing at most one corrective command, chosen so that an actively
//! playing wireless stream is never interrupted and a pause command never
//! toggles into playback.
//!
//! The controller talks to the device through the [`SpeakerControl`] seam
//! (implemented by `fsapi_session::RemoteSession`), returns structured
//! [`CycleOutcome`]/[`CycleError`] values for the caller to log, and leaves
//! scheduling, logging setup, and host probing to the caller.

pub mod controller;
pub mod outcome;
pub mod probe;
pub mod speaker;
pub mod state;

pub use controller::KeepAliveController;
pub use outcome::{CycleError, CycleOutcome};
pub use probe::HostProbe;
pub use speaker::SpeakerControl;
pub use state::{
    DeviceState, MODE_BLUETOOTH_AUX, PLAY_CONTROL_PAUSE, PLAY_STATUS_PAUSED, PLAY_STATUS_STOPPED,
    POWER_STANDBY,
};
