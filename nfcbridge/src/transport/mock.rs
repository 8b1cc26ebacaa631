// nfc-bridge-rs/nfcbridge/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written frames and plays back
/// scripted device chunks.
///
/// Chunks are grouped into *exchanges*: one exchange is released into the
/// readable buffer per `write`, which models the real bus where the PN532
/// only raises its ready bit after a command reaches it. An exchange usually
/// holds the ACK chunk and, when the command has a reply, the response frame
/// chunk. Chunks pushed with `push_pending` are readable immediately
/// (unsolicited data, flush-path tests).
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every buffer passed to `write`, in order.
    pub written: Vec<Vec<u8>>,
    /// Chunks currently readable.
    pending: VecDeque<Vec<u8>>,
    /// Scripted exchanges, released one per write.
    exchanges: VecDeque<Vec<Vec<u8>>>,
    /// Testing hook: number of subsequent `write` calls that should fail.
    pub write_failures: usize,
    /// Testing hook: number of subsequent `read` calls that should fail.
    pub read_failures: usize,
    /// Number of `reset` calls observed.
    pub resets: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script one exchange: the chunks the device makes readable after the
    /// next unscripted `write`.
    pub fn push_exchange(&mut self, chunks: Vec<Vec<u8>>) {
        self.exchanges.push_back(chunks);
    }

    /// Make a chunk readable immediately, without waiting for a write.
    pub fn push_pending(&mut self, chunk: Vec<u8>) {
        self.pending.push_back(chunk);
    }

    /// Set how many subsequent write calls should fail (for tests).
    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    pub fn last_written(&self) -> Option<&Vec<u8>> {
        self.written.last()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Error::Transport("mock write failure".into()));
        }
        self.written.push(data.to_vec());
        if let Some(chunks) = self.exchanges.pop_front() {
            self.pending.extend(chunks);
        }
        Ok(())
    }

    fn read(&mut self, n: usize) -> Result<Vec<u8>> {
        if self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(Error::Transport("mock read failure".into()));
        }
        match self.pending.pop_front() {
            Some(mut chunk) => {
                if chunk.len() > n {
                    // Short read: hand back the first n bytes, keep the rest.
                    let rest = chunk.split_off(n);
                    self.pending.push_front(rest);
                }
                Ok(chunk)
            }
            None => Ok(Vec::new()),
        }
    }

    fn is_ready(&mut self) -> Result<bool> {
        Ok(!self.pending.is_empty())
    }

    fn reset(&mut self) -> Result<()> {
        // Reset clears the log and anything readable but preserves scripted
        // exchanges so tests can pre-seed replies for the post-reset
        // initialization sequence.
        self.resets += 1;
        self.written.clear();
        self.pending.clear();
        Ok(())
    }
}
