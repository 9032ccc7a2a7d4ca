//! The `connection` module owns the TCP stream to the broker.
//!
//! A [`Connection`] is opened once per producer call or consumer session and
//! is never shared. There are no timeouts and no retries: connect, write and
//! read can each wait indefinitely, and any failure goes straight back to the
//! caller.

use std::io;
use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, lookup_host};
use tracing::debug;

use crate::utils::{Error, Result};

/// What a single read produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// `n` bytes were read into the start of the buffer.
    Data(usize),
    /// The broker closed its side of the stream.
    Closed,
}

#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
}

impl Connection {
    /// Resolves `address:port` and connects to the first address found.
    pub async fn open(address: &str, port: u16) -> Result<Self> {
        let addr = format!("{address}:{port}");

        let peer = lookup_host(addr.as_str())
            .await
            .map_err(|source| Error::Resolution {
                addr: addr.clone(),
                source,
            })?
            .next()
            .ok_or_else(|| Error::Resolution {
                addr: addr.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "no addresses found"),
            })?;

        let stream = TcpStream::connect(peer)
            .await
            .map_err(|source| Error::Connection { addr, source })?;

        debug!("connected to broker at {peer}");

        Ok(Self { stream, peer })
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    /// Writes the whole frame.
    pub async fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.stream.write_all(bytes).await.map_err(Error::Write)
    }

    /// Reads into `buf` starting at offset 0.
    ///
    /// Only `buf[..n]` of a `ReadOutcome::Data(n)` is fresh; anything past it
    /// is left over from earlier reads.
    pub async fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome> {
        match self.stream.read(buf).await {
            Ok(0) if !buf.is_empty() => Ok(ReadOutcome::Closed),
            Ok(n) => Ok(ReadOutcome::Data(n)),
            Err(e) => Err(Error::Read(e)),
        }
    }
}
