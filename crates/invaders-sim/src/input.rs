//! Player input hand-off.
//!
//! Taps are queued by whatever thread polls the touch source and drained
//! once per frame by the simulation thread. Steering is a single value the
//! producer overwrites; the frame reads whatever is current.

use std::collections::vec_deque;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One discrete tap report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapEvent {
    pub tap_count: u32,
}

impl TapEvent {
    /// Only single taps fire.
    pub fn is_single(&self) -> bool {
        self.tap_count == 1
    }
}

#[derive(Debug, Default)]
struct InputState {
    taps: VecDeque<TapEvent>,
    steering: f64,
}

/// Thread-safe input queue. Clones share the same queue, so producers keep
/// a clone and the engine drains its own.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    shared: Arc<Mutex<InputState>>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tap report.
    pub fn push_tap(&self, tap_count: u32) {
        self.lock().taps.push_back(TapEvent { tap_count });
    }

    /// Replace the current steering value (normalized, roughly -1.0..=1.0).
    pub fn set_steering(&self, value: f64) {
        self.lock().steering = value;
    }

    pub fn steering(&self) -> f64 {
        self.lock().steering
    }

    /// Number of taps waiting for the next drain.
    pub fn pending(&self) -> usize {
        self.lock().taps.len()
    }

    /// Take every tap present right now. Taps pushed after this call wait
    /// for the next drain.
    pub fn drain(&self) -> TapDrain {
        let taps = std::mem::take(&mut self.lock().taps);
        TapDrain {
            inner: taps.into_iter(),
        }
    }

    // Queue contents are plain data, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, InputState> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Taps taken by one drain, yielded in arrival order, each exactly once.
#[derive(Debug)]
pub struct TapDrain {
    inner: vec_deque::IntoIter<TapEvent>,
}

impl Iterator for TapDrain {
    type Item = TapEvent;

    fn next(&mut self) -> Option<TapEvent> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for TapDrain {}

/// Lateral force for a steering value. Values whose magnitude is at or
/// below the deadzone produce no force.
pub fn steering_force(value: f64, deadzone: f64, scale: f64) -> Option<f64> {
    if value.abs() > deadzone {
        Some(scale * value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empty_queue() {
        let queue = InputQueue::new();
        assert_eq!(queue.drain().count(), 0);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_drain_yields_each_tap_once_in_order() {
        let queue = InputQueue::new();
        for count in [1, 2, 1, 3] {
            queue.push_tap(count);
        }
        let drained: Vec<u32> = queue.drain().map(|t| t.tap_count).collect();
        assert_eq!(drained, vec![1, 2, 1, 3]);
        assert_eq!(queue.drain().count(), 0);
    }

    #[test]
    fn test_taps_after_drain_wait_for_next_frame() {
        let queue = InputQueue::new();
        queue.push_tap(1);
        let mut drain = queue.drain();
        queue.push_tap(1);
        assert_eq!(drain.len(), 1);
        assert!(drain.next().is_some());
        assert!(drain.next().is_none());
        assert_eq!(queue.pending(), 1);
    }

    #[test]
    fn test_clones_share_queue() {
        let engine_side = InputQueue::new();
        let producer = engine_side.clone();
        let handle = std::thread::spawn(move || {
            for _ in 0..10 {
                producer.push_tap(1);
            }
            producer.set_steering(-0.5);
        });
        handle.join().unwrap();
        assert_eq!(engine_side.drain().count(), 10);
        assert_eq!(engine_side.steering(), -0.5);
    }

    #[test]
    fn test_steering_deadzone() {
        assert_eq!(steering_force(0.2, 0.2, 40.0), None);
        assert_eq!(steering_force(-0.2, 0.2, 40.0), None);
        assert_eq!(steering_force(0.0, 0.2, 40.0), None);
        assert!(steering_force(0.21, 0.2, 40.0).is_some());
        let left = steering_force(-0.5, 0.2, 40.0).unwrap();
        assert_eq!(left, -20.0);
    }

    #[test]
    fn test_nan_steering_applies_no_force() {
        assert_eq!(steering_force(f64::NAN, 0.2, 40.0), None);
    }
}
