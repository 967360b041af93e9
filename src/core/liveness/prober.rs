//! Periodic backend ping
//!
//! Every tick starts one request to the ping endpoint on its own task, so a
//! slow ping neither delays the next tick nor blocks shutdown. There is no
//! backoff and no de-duplication. Pings still in flight at shutdown are
//! aborted.

use super::status::Liveness;
use crate::adapters::api::HealthCheck;
use crate::config::LivenessConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{interval, MissedTickBehavior};

/// Pings the backend on a fixed interval
#[derive(Clone)]
pub struct LivenessProber {
    check: Arc<dyn HealthCheck>,
    endpoint: String,
    interval: Duration,
}

impl LivenessProber {
    pub fn new(check: Arc<dyn HealthCheck>, config: &LivenessConfig) -> Self {
        Self {
            check,
            endpoint: config.endpoint.clone(),
            interval: Duration::from_secs(config.interval_seconds),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ping once
    pub async fn probe(&self) -> Liveness {
        let response = self.check.check(&self.endpoint).await;
        let liveness = Liveness::from_response(&response);
        tracing::debug!(
            endpoint = %self.endpoint,
            code = response.code,
            liveness = %liveness,
            "Liveness probe"
        );
        liveness
    }

    /// Ping on every tick until `shutdown` turns true
    ///
    /// The first ping happens immediately. `on_probe` receives each result
    /// in completion order.
    pub async fn run<F>(&self, mut shutdown: watch::Receiver<bool>, mut on_probe: F)
    where
        F: FnMut(Liveness),
    {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut in_flight = JoinSet::new();
        let mut previous: Option<Liveness> = None;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let prober = self.clone();
                    in_flight.spawn(async move { prober.probe().await });
                }
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                    let liveness = match joined {
                        Ok(liveness) => liveness,
                        Err(e) => {
                            tracing::warn!(error = %e, "Liveness ping task failed");
                            continue;
                        }
                    };
                    if let Some(before) = previous.filter(|before| *before != liveness) {
                        crate::log_liveness_change!(before, liveness);
                    }
                    previous = Some(liveness);
                    on_probe(liveness);
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::info!(in_flight = in_flight.len(), "Liveness prober stopped");
                        in_flight.abort_all();
                        break;
                    }
                }
            }
        }
    }

    /// Run the prober on a background task
    ///
    /// The task stops when `shutdown` turns true or its sender is dropped.
    pub fn spawn<F>(self, shutdown: watch::Receiver<bool>, on_probe: F) -> JoinHandle<()>
    where
        F: FnMut(Liveness) + Send + 'static,
    {
        tokio::spawn(async move { self.run(shutdown, on_probe).await })
    }
}

impl std::fmt::Debug for LivenessProber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LivenessProber")
            .field("endpoint", &self.endpoint)
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}
