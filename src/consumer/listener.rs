//! The consumer's background read loop.
//!
//! Each iteration first waits for the caller to take the previous message,
//! then checks the cancellation token, then waits on one read. At most one
//! decoded message exists at a time, and nothing is read while the caller
//! still holds one back.
//!
//! Cancellation is only seen between reads: if the broker goes quiet and
//! sends no heartbeats, the loop will not notice the token until the next
//! read returns.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use crate::connection::{Connection, ReadOutcome};
use crate::consumer::stats::ConsumerStats;
use crate::protocol::{Message, decode, is_heartbeat};

pub(crate) struct Listener {
    pub(crate) conn: Connection,
    pub(crate) sender: mpsc::Sender<Message>,
    pub(crate) cancel: CancellationToken,
    pub(crate) buffer_size: usize,
    pub(crate) stats: Arc<ConsumerStats>,
}

impl Listener {
    /// Runs until the token is cancelled or the receiver is dropped.
    /// The output channel closes when `self.sender` drops on return.
    pub(crate) async fn run(mut self) {
        let peer = self.conn.peer_addr();
        let mut buffer = vec![0u8; self.buffer_size];

        loop {
            // The channel holds one message; a permit means the caller has
            // taken the last one.
            let permit = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    debug!("consumer for {peer} cancelled, closing channel");
                    break;
                }
                permit = self.sender.reserve() => match permit {
                    Ok(permit) => permit,
                    Err(_) => {
                        debug!("receiver for {peer} dropped, stopping consumer");
                        break;
                    }
                },
            };

            let n = match self.conn.read(&mut buffer).await {
                Ok(ReadOutcome::Data(n)) => n,
                Ok(ReadOutcome::Closed) => {
                    // Every later read would report the same thing, so wait
                    // for the token (or the caller going away) instead of
                    // spinning on it.
                    debug!("broker {peer} closed the stream");
                    drop(permit);
                    tokio::select! {
                        _ = self.cancel.cancelled() => {}
                        _ = self.sender.closed() => {}
                    }
                    continue;
                }
                Err(e) => {
                    self.stats.record_read_error();
                    warn!("read error from {peer}: {e}");
                    drop(permit);
                    tokio::task::yield_now().await;
                    continue;
                }
            };

            self.stats.record_frame();

            if is_heartbeat(n) {
                self.stats.record_heartbeat();
                continue;
            }

            match decode::<Message>(&buffer[..n]) {
                Ok(message) => {
                    permit.send(message);
                    self.stats.record_delivered();
                }
                Err(e) => {
                    self.stats.record_decode_failure();
                    trace!("dropping {n}-byte frame from {peer}: {e}");
                }
            }
        }
    }
}
