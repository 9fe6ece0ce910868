//! Ping-based reachability probe

use keepalive::HostProbe;
use std::process::{Command, Stdio};

/// Checks host reachability with a single ICMP echo via the system `ping`
#[derive(Debug, Default)]
pub struct PingProbe;

impl PingProbe {
    pub fn new() -> Self {
        Self
    }
}

impl HostProbe for PingProbe {
    fn is_up(&self, address: &str) -> bool {
        let count_flag = if cfg!(target_os = "windows") { "-n" } else { "-c" };

        Command::new("ping")
            .args([count_flag, "1", address])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}
