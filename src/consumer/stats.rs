// Read-loop counters. Purely diagnostic: nothing here feeds back into what
// the consumer delivers.
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct ConsumerStats {
    frames_read: AtomicU64,
    heartbeats: AtomicU64,
    decode_failures: AtomicU64,
    delivered: AtomicU64,
    read_errors: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Reads that returned data, heartbeats included.
    pub frames_read: u64,
    pub heartbeats: u64,
    /// Frames dropped because they were not valid base64 or JSON.
    pub decode_failures: u64,
    /// Messages handed to the output channel.
    pub delivered: u64,
    pub read_errors: u64,
}

impl ConsumerStats {
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            frames_read: self.frames_read.load(Ordering::Relaxed),
            heartbeats: self.heartbeats.load(Ordering::Relaxed),
            decode_failures: self.decode_failures.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            read_errors: self.read_errors.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn record_frame(&self) {
        self.frames_read.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_heartbeat(&self) {
        self.heartbeats.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_decode_failure(&self) {
        self.decode_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_read_error(&self) {
        self.read_errors.fetch_add(1, Ordering::Relaxed);
    }
}
