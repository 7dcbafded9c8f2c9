use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::Result;

use super::metrics::SystemSnapshot;
use super::probe::Probe;

/// Cooperative cancellation flag, checked between capture iterations.
///
/// Clone the token into a ctrl-c handler; the sampler returns the snapshots
/// collected so far once the flag is raised.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Drives a probe on a fixed interval for a fixed duration.
///
/// Each run returns a fresh, caller-owned snapshot sequence; nothing is
/// retained across runs.
pub struct Sampler<P: Probe> {
    probe: P,
}

impl<P: Probe> Sampler<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Capture snapshots for `duration`, one every `interval`.
    ///
    /// The first capture happens immediately; capture k is scheduled at
    /// absolute offset `k * interval` from the start and is only taken while
    /// `k * interval <= duration`. A zero `interval` captures back-to-back
    /// until the elapsed time reaches `duration`.
    ///
    /// A probe failure aborts the whole run. `on_snapshot` observes each
    /// snapshot as it is recorded (progress reporting in the command layer).
    pub fn run(
        &mut self,
        duration: Duration,
        interval: Duration,
        cancel: Option<&CancelToken>,
        mut on_snapshot: impl FnMut(&SystemSnapshot),
    ) -> Result<Vec<SystemSnapshot>> {
        let start = Instant::now();
        let mut snapshots = Vec::new();

        loop {
            let snapshot = self.probe.capture()?;
            on_snapshot(&snapshot);
            snapshots.push(snapshot);

            if cancel.is_some_and(CancelToken::is_cancelled) {
                log::info!("sampling cancelled after {} snapshots", snapshots.len());
                break;
            }

            if interval.is_zero() {
                if start.elapsed() >= duration {
                    break;
                }
                continue;
            }

            // Absolute scheduling: a slow capture delays the next one but
            // never skips it, so the snapshot count stays deterministic.
            let Some(next) = interval.checked_mul(snapshots.len() as u32) else {
                break;
            };
            if next > duration {
                break;
            }

            let elapsed = start.elapsed();
            if next > elapsed {
                thread::sleep(next - elapsed);
            }
        }

        Ok(snapshots)
    }
}
