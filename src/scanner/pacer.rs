use async_trait::async_trait;
use std::time::Duration;

use crate::config::SimulationConfig;
use crate::models::Result;

/// Pacing hook the scanner calls between attempts. Models per-candidate
/// lookup latency; correctness never depends on it.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self) -> Result<()>;
}

/// Sleeps a jittered interval within the configured bounds.
pub struct JitterPacer {
    min_ms: u64,
    max_ms: u64,
}

impl JitterPacer {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.min_delay_ms, config.max_delay_ms)
    }
}

#[async_trait]
impl Pacer for JitterPacer {
    async fn pause(&self) -> Result<()> {
        let delay_ms = if self.max_ms > self.min_ms {
            fastrand::u64(self.min_ms..self.max_ms)
        } else {
            self.min_ms
        };
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        Ok(())
    }
}

/// Zero-wait pacer for tests.
pub struct NoopPacer;

#[async_trait]
impl Pacer for NoopPacer {
    async fn pause(&self) -> Result<()> {
        Ok(())
    }
}
