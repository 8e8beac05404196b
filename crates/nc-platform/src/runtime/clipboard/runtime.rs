//! Polling clipboard runtime.
//!
//! Responsible for lifecycle management (start/stop) and for driving the
//! [`ClipboardSampler`] from a background task on a fixed interval.

use anyhow::Result;
use async_trait::async_trait;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::{info, trace};

use crate::ports::ClipboardRuntimePort;
use nc_app::{ClipboardSampler, PollOutcome};

const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

pub struct PollingClipboardRuntime {
    // Cycles from a stopped-then-restarted loop never interleave.
    sampler: Arc<Mutex<ClipboardSampler>>,
    period: Duration,
    running: AtomicBool,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl PollingClipboardRuntime {
    pub fn new(sampler: ClipboardSampler, period: Duration) -> Self {
        Self {
            sampler: Arc::new(Mutex::new(sampler)),
            period: period.max(MIN_POLL_INTERVAL),
            running: AtomicBool::new(false),
            handle: Mutex::new(None),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Run one poll cycle right now, outside the ticker.
    ///
    /// Serialized with the background loop through the sampler lock.
    pub async fn poll_now(&self) -> PollOutcome {
        self.sampler.lock().await.poll_once().await
    }
}

#[async_trait]
impl ClipboardRuntimePort for PollingClipboardRuntime {
    async fn start(&self) -> Result<()> {
        // Held until the task handle is stored, so a concurrent stop either
        // runs first or finds the handle.
        let mut handle = self.handle.lock().await;
        if handle.is_some() {
            return Ok(());
        }

        let sampler = self.sampler.clone();
        let period = self.period;

        *handle = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                let outcome = sampler.lock().await.poll_once().await;
                if outcome.changed() {
                    trace!(?outcome, "clipboard poll cycle recorded changes");
                }
            }
        }));
        self.running.store(true, Ordering::Release);
        info!(period_ms = period.as_millis() as u64, "clipboard polling started");

        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        let mut handle = self.handle.lock().await;
        let Some(task) = handle.take() else {
            return Ok(());
        };

        // Upsert and publish never straddle an await, so aborting
        // mid-cycle cannot leave the store half-updated.
        task.abort();
        self.running.store(false, Ordering::Release);
        info!("clipboard polling stopped");

        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}
