// libsci/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::transport::traits::ByteTransport;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockLine {
    queued: VecDeque<Result<u8>>,
    timeouts: Vec<u32>,
}

/// Mock serial line for unit tests. It replays queued characters (or
/// failures) and records the timeout of every read. Clones share the same
/// line so a test can keep a handle after moving one into a reader.
#[derive(Debug, Clone, Default)]
pub struct MockByteTransport {
    line: Rc<RefCell<MockLine>>,
}

impl MockByteTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes(bytes: &[u8]) -> Self {
        let m = Self::new();
        m.push_bytes(bytes);
        m
    }

    pub fn push_byte(&self, b: u8) {
        self.line.borrow_mut().queued.push_back(Ok(b));
    }

    pub fn push_bytes(&self, bytes: &[u8]) {
        for &b in bytes {
            self.push_byte(b);
        }
    }

    /// Queue a failure; the read that reaches it returns `err`.
    pub fn push_error(&self, err: Error) {
        self.line.borrow_mut().queued.push_back(Err(err));
    }

    /// Characters (or failures) not yet consumed
    pub fn remaining(&self) -> usize {
        self.line.borrow().queued.len()
    }

    /// Timeouts passed to every `read_byte` call so far
    pub fn timeouts(&self) -> Vec<u32> {
        self.line.borrow().timeouts.clone()
    }
}

impl ByteTransport for MockByteTransport {
    fn read_byte(&mut self, timeout: u32) -> Result<u8> {
        let mut line = self.line.borrow_mut();
        line.timeouts.push(timeout);
        // An exhausted queue behaves like a silent card.
        line.queued.pop_front().unwrap_or(Err(Error::Timeout))
    }
}
