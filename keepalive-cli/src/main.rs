use anyhow::{Context, Result};
use clap::Parser;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod probe;

use fsapi_session::{Endpoint, RemoteSession};
use keepalive::{CycleOutcome, HostProbe, KeepAliveController, POWER_STANDBY};
use probe::PingProbe;

/// FSAPI keep-alive service
///
/// Periodically nudges a network audio receiver so it does not drop into
/// standby, optionally only while a companion PC is reachable.
#[derive(Parser, Debug)]
#[command(name = "fsapi-keepalive")]
#[command(about = "Keep an FSAPI audio receiver awake while a companion host is up")]
#[command(version)]
pub struct Args {
    /// IP address or hostname of the receiver
    #[arg(long)]
    pub speaker_address: String,

    /// Port of the receiver's remote-control endpoint
    #[arg(long, default_value = "80")]
    pub speaker_port: u16,

    /// PIN of the receiver
    #[arg(long, default_value = "1234")]
    pub pin: String,

    /// IP address of the companion PC; omit to run unconditionally
    #[arg(long)]
    pub pc_address: Option<String>,

    /// Seconds between keep-alive cycles
    #[arg(long, default_value = "60")]
    pub interval: u64,

    /// Put the receiver into standby while the companion PC is down,
    /// instead of just skipping cycles
    #[arg(long)]
    pub power_off_when_host_down: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Validate command line arguments
    pub fn validate(&self) -> Result<()> {
        if self.speaker_port == 0 {
            return Err(anyhow::anyhow!("Speaker port must not be 0"));
        }

        if self.interval == 0 {
            return Err(anyhow::anyhow!("Interval must be positive"));
        }

        if self.pin.is_empty() {
            return Err(anyhow::anyhow!("PIN must not be empty"));
        }

        if self.power_off_when_host_down && self.pc_address.is_none() {
            return Err(anyhow::anyhow!(
                "--power-off-when-host-down requires --pc-address"
            ));
        }

        match self.log_level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "Invalid log level '{}'. Valid levels: error, warn, info, debug, trace",
                    self.log_level
                ));
            }
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let running = Arc::new(AtomicBool::new(true));
    let shutdown_flag = running.clone();
    ctrlc::set_handler(move || {
        shutdown_flag.store(false, Ordering::SeqCst);
    })
    .context("failed to install shutdown handler")?;

    let endpoint = Endpoint::new(
        args.speaker_address.clone(),
        args.speaker_port,
        args.pin.clone(),
    );
    let session = RemoteSession::new(endpoint);

    // With the power-off policy the loop owns the probe so it can react to a
    // down host; otherwise the controller's host gate handles skipping.
    let mut controller = match (&args.pc_address, args.power_off_when_host_down) {
        (Some(address), false) => KeepAliveController::with_host_gate(
            session,
            Box::new(PingProbe::new()),
            address.clone(),
        ),
        _ => KeepAliveController::new(session),
    };
    let policy_probe = PingProbe::new();
    let mut powered_off = false;

    info!(
        speaker = %args.speaker_address,
        interval = args.interval,
        "starting keep-alive loop"
    );

    while running.load(Ordering::SeqCst) {
        if args.power_off_when_host_down {
            if let Some(address) = &args.pc_address {
                if !policy_probe.is_up(address) {
                    if powered_off {
                        debug!(host = %address, "companion host still down");
                    } else {
                        info!(host = %address, "companion host down, putting receiver into standby");
                        match controller.speaker_mut().set_power(POWER_STANDBY) {
                            Ok(()) => powered_off = true,
                            Err(e) => warn!(error = %e, "standby request failed"),
                        }
                    }
                    sleep_interruptibly(&running, args.interval);
                    continue;
                }
                powered_off = false;
            }
        }

        match controller.maintain() {
            Ok(CycleOutcome::SkippedHostDown) => {
                debug!("companion host down, cycle skipped");
            }
            Ok(outcome) => info!(%outcome, "cycle complete"),
            Err(e) => warn!(error = %e, "cycle failed"),
        }

        sleep_interruptibly(&running, args.interval);
    }

    info!("shutting down, releasing device session");
    controller.speaker_mut().close_session();
    Ok(())
}

/// Sleep for `seconds`, waking early on shutdown
fn sleep_interruptibly(running: &AtomicBool, seconds: u64) {
    for _ in 0..seconds {
        if !running.load(Ordering::SeqCst) {
            return;
        }
        thread::sleep(Duration::from_secs(1));
    }
}
