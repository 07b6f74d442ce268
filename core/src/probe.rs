//! Liveness probes.
//!
//! A [`Prober`] turns one address into a boolean reachability verdict. The
//! stock implementation shells out to the platform ping utility. Anything
//! that cannot produce a clean "reachable" answer counts as dead, including
//! a probe that fails to launch.

use std::net::IpAddr;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Slack on top of ping's own wait before the process is killed outright.
const KILL_GRACE: Duration = Duration::from_secs(2);

#[async_trait]
pub trait Prober: Send + Sync {
    /// Probes a single host, bounded by the prober's timeout.
    async fn probe(&self, addr: IpAddr) -> bool;
}

/// Probes by running the system `ping` with a single echo request and a
/// bounded wait, reading liveness off the exit status.
pub struct PingProber {
    timeout: Duration,
}

impl PingProber {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn command(&self, addr: IpAddr) -> Command {
        let wait_secs = self.timeout.as_secs().max(1);
        let mut cmd = Command::new("ping");

        #[cfg(target_os = "windows")]
        cmd.args(["-n", "1", "-w", &(wait_secs * 1000).to_string()]);

        #[cfg(not(target_os = "windows"))]
        cmd.args(["-c", "1", "-W", &wait_secs.to_string()]);

        cmd.arg(addr.to_string())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        cmd
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn probe(&self, addr: IpAddr) -> bool {
        let deadline = self.timeout + KILL_GRACE;
        let status = tokio::time::timeout(deadline, self.command(addr).status()).await;

        match status {
            Ok(Ok(exit)) => exit.success(),
            Ok(Err(e)) => {
                debug!("could not launch ping for {addr}: {e}");
                false
            }
            Err(_) => {
                debug!("ping for {addr} overran its deadline");
                false
            }
        }
    }
}
