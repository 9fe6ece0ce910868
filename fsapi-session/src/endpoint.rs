use serde::{Deserialize, Serialize};

/// Identity of a device's remote-control endpoint
///
/// Immutable after construction; the PIN authorizes session creation and is
/// attached to every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    host: String,
    port: u16,
    pin: String,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16, pin: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            pin: pin.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn pin(&self) -> &str {
        &self.pin
    }

    /// Base URL of the FSAPI surface on this device
    pub fn base_url(&self) -> String {
        format!("http://{}:{}/fsapi", self.host, self.port)
    }
}
