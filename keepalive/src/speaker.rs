//! The seam between the controller and the device session

use fsapi_session::{RemoteSession, SessionError};

/// Device operations the keep-alive controller needs
///
/// Methods take `&mut self` because the session layer may renew its session
/// id as a side effect of any call, reads included.
pub trait SpeakerControl {
    fn mode(&mut self) -> Result<u32, SessionError>;
    fn play_status(&mut self) -> Result<u8, SessionError>;
    fn play_duration(&mut self) -> Result<u32, SessionError>;
    fn set_mode(&mut self, mode: u32) -> Result<(), SessionError>;
    fn set_play_control(&mut self, state: u8) -> Result<(), SessionError>;
    fn set_power(&mut self, state: u8) -> Result<(), SessionError>;
}

impl SpeakerControl for RemoteSession {
    fn mode(&mut self) -> Result<u32, SessionError> {
        RemoteSession::mode(self)
    }

    fn play_status(&mut self) -> Result<u8, SessionError> {
        RemoteSession::play_status(self)
    }

    fn play_duration(&mut self) -> Result<u32, SessionError> {
        RemoteSession::play_duration(self)
    }

    fn set_mode(&mut self, mode: u32) -> Result<(), SessionError> {
        RemoteSession::set_mode(self, mode)
    }

    fn set_play_control(&mut self, state: u8) -> Result<(), SessionError> {
        RemoteSession::set_play_control(self, state)
    }

    fn set_power(&mut self, state: u8) -> Result<(), SessionError> {
        RemoteSession::set_power(self, state)
    }
}
