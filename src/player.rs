//! Periodic caption sampling for playback.
//!
//! The viewer polls the playback position once a second to highlight the
//! current caption. That loop is an owned task here: the ticker samples an
//! elapsed-time clock, resolves the active caption, and pushes updates over
//! a channel. Dropping the ticker aborts the task; no timer outlives its
//! owner.

use crate::captions::{caption_at, Caption};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant};

/// One playback position sample.
#[derive(Debug, Clone)]
pub struct CaptionTick {
    /// Elapsed playback time, in seconds.
    pub position: f64,
    /// Caption active at this position, if any.
    pub caption: Option<Caption>,
}

/// Owned handle to the sampling task.
pub struct CaptionTicker {
    handle: JoinHandle<()>,
}

impl CaptionTicker {
    /// Spawn a sampling task over `captions`, emitting one tick per period.
    ///
    /// The first tick fires immediately. The receiver closes when the ticker
    /// is stopped or dropped.
    pub fn spawn(
        captions: Vec<Caption>,
        period: Duration,
    ) -> (Self, mpsc::Receiver<CaptionTick>) {
        let (tx, rx) = mpsc::channel(16);

        let handle = tokio::spawn(async move {
            let started = Instant::now();
            let mut ticker = interval(period);
            loop {
                ticker.tick().await;
                let position = started.elapsed().as_secs_f64();
                let caption = caption_at(&captions, position).cloned();
                if tx.send(CaptionTick { position, caption }).await.is_err() {
                    break;
                }
            }
        });

        (Self { handle }, rx)
    }

    /// Stop sampling immediately.
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for CaptionTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
