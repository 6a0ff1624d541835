//! Random Source Adapters

use crate::ports::RandomSource;
use parking_lot::Mutex;
use rand::Rng;
use std::collections::VecDeque;

/// Production random source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn random_usize(&self, max: usize) -> usize {
        if max == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..max)
        }
    }
}

/// Fixed random source for deterministic testing.
///
/// # Example
///
/// ```rust
/// use ark_net::adapters::FixedRandomSource;
/// use ark_net::RandomSource;
///
/// let rng = FixedRandomSource::new(7);
/// assert_eq!(rng.random_usize(5), 2);
/// assert_eq!(rng.random_usize(5), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedRandomSource {
    value: usize,
}

impl FixedRandomSource {
    /// Always draw `value` (modulo the range).
    pub fn new(value: usize) -> Self {
        Self { value }
    }

    /// Always draw the first element.
    pub fn first() -> Self {
        Self::new(0)
    }
}

impl RandomSource for FixedRandomSource {
    fn random_usize(&self, max: usize) -> usize {
        if max == 0 {
            0
        } else {
            self.value % max
        }
    }
}

/// Replays a script of draws, then keeps repeating the last one.
///
/// Lets tests dictate exactly which seed or broadcast peer is picked on
/// each attempt.
#[derive(Debug)]
pub struct ScriptedRandomSource {
    script: Mutex<VecDeque<usize>>,
    last: Mutex<usize>,
}

impl ScriptedRandomSource {
    /// Draw the values of `script` in order.
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            last: Mutex::new(0),
        }
    }
}

impl RandomSource for ScriptedRandomSource {
    fn random_usize(&self, max: usize) -> usize {
        let mut last = self.last.lock();
        if let Some(next) = self.script.lock().pop_front() {
            *last = next;
        }
        if max == 0 {
            0
        } else {
            *last % max
        }
    }
}
