use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

/// Time between two revealed characters unless configured otherwise.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(50);

/// Something that can wait out the pause between two frames of a reveal.
pub trait Ticker {
    fn wait(&mut self, interval: Duration);
}

/// Blocks the current thread for every interval.
pub struct SleepTicker;

impl Ticker for SleepTicker {
    fn wait(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}

/// Stops a running reveal, for instance when the password it shows gets replaced.
#[derive(Clone, Debug, Default)]
pub struct RevealHandle {
    cancelled: Arc<AtomicBool>,
}

impl RevealHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// The growing prefixes of a string, one more character each step.
///
/// The sequence is consumed as it is read and can't be restarted, build a new `Reveal` to
/// show a password again. Cancelling or dropping it midway has no other effect.
pub struct Reveal<'a> {
    source: &'a str,
    shown: usize,
    handle: RevealHandle,
}

impl<'a> Reveal<'a> {
    pub fn new(source: &'a str) -> Reveal<'a> {
        Reveal {
            source,
            shown: 0,
            handle: RevealHandle::default(),
        }
    }

    pub fn handle(&self) -> RevealHandle {
        self.handle.clone()
    }

    fn is_done(&self) -> bool {
        self.shown >= self.source.len() || self.handle.is_cancelled()
    }

    /// Feeds every prefix to `sink`, waiting `interval` on `ticker` before each one.
    ///
    /// Returns true if the whole string ended up shown, false if the reveal was cancelled
    /// before that.
    pub fn play<T, F>(mut self, ticker: &mut T, interval: Duration, mut sink: F) -> bool
    where
        T: Ticker + ?Sized,
        F: FnMut(&str),
    {
        while !self.is_done() {
            ticker.wait(interval);
            match self.next() {
                Some(prefix) => sink(prefix),
                None => break,
            }
        }
        self.shown == self.source.len()
    }
}

impl<'a> Iterator for Reveal<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.is_done() {
            return None;
        }
        let next = self.source[self.shown..].chars().next()?;
        self.shown += next.len_utf8();
        Some(&self.source[..self.shown])
    }
}

#[cfg(test)]
#[path = "tests/reveal.rs"]
mod reveal;
