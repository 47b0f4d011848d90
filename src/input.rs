//! Non-blocking byte input for the `i` instruction.

use std::collections::VecDeque;
use std::io::{ErrorKind, Read};
use std::sync::mpsc::{sync_channel, Receiver, TryRecvError};
use std::thread;

use tracing::{debug, warn};

/// Capacity of the pending-byte queue; the reader blocks when it is full.
pub const QUEUE_DEPTH: usize = 1024;
const CHUNK: usize = 1024;

/// A source of pending input bytes. Polling never blocks.
pub trait Input {
    fn poll_byte(&mut self) -> Option<u8>;
}

/// Never has anything to read.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl Input for NoInput {
    fn poll_byte(&mut self) -> Option<u8> {
        None
    }
}

impl Input for VecDeque<u8> {
    fn poll_byte(&mut self) -> Option<u8> {
        self.pop_front()
    }
}

/// Bytes drained from a reader by a background thread into a bounded queue.
#[derive(Debug)]
pub struct InputQueue {
    rx: Receiver<u8>,
}

impl InputQueue {
    pub fn spawn<R: Read + Send + 'static>(mut reader: R) -> Self {
        let (tx, rx) = sync_channel(QUEUE_DEPTH);
        thread::spawn(move || {
            let mut buf = [0u8; CHUNK];
            loop {
                let n = match reader.read(&mut buf) {
                    Ok(0) => {
                        debug!("input reached end of stream");
                        return;
                    }
                    Ok(n) => n,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => {
                        warn!(error = %e, "input reader stopped");
                        return;
                    }
                };
                for &byte in &buf[..n] {
                    // The interpreter hung up; nobody is left to read.
                    if tx.send(byte).is_err() {
                        return;
                    }
                }
            }
        });
        InputQueue { rx }
    }
}

impl Input for InputQueue {
    fn poll_byte(&mut self) -> Option<u8> {
        match self.rx.try_recv() {
            Ok(byte) => Some(byte),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}
