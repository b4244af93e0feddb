//! Bookkeeping for one-shot browser callbacks (timeouts and animation frames)
//! that must be cancelled on teardown.
//!
//! A callback reserves a key before it is handed to the browser, the handle
//! the browser returns is armed under that key, and the callback claims its
//! key when it fires. Draining on teardown yields every handle still armed;
//! a callback whose key is gone must not run.

use std::collections::HashMap;

#[derive(Debug)]
pub struct PendingSet<H> {
    next_key: u64,
    armed: HashMap<u64, H>,
}

impl<H> Default for PendingSet<H> {
    fn default() -> Self {
        Self {
            next_key: 0,
            armed: HashMap::new(),
        }
    }
}

impl<H> PendingSet<H> {
    #[inline]
    pub fn reserve(&mut self) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        key
    }

    #[inline]
    pub fn arm(&mut self, key: u64, handle: H) {
        self.armed.insert(key, handle);
    }

    /// Called from the firing callback. `false` means the callback was
    /// cancelled (or never armed) and must do nothing.
    #[inline]
    pub fn claim(&mut self, key: u64) -> bool {
        self.armed.remove(&key).is_some()
    }

    /// Every handle still waiting to fire; the set is left empty.
    pub fn drain(&mut self) -> Vec<H> {
        self.armed.drain().map(|(_, h)| h).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.armed.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.armed.is_empty()
    }
}
