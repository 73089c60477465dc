//! Fixed-cadence movement scheduling and follow movement

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::MOVE_INTERVAL;

/// Accumulates frame time and fires one movement tick per elapsed interval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementScheduler {
    /// Time gathered since the last tick
    pub accumulator: f64,
    /// Timestamp of the previous frame
    pub previous_time: f64,
    /// Threshold the accumulator must strictly exceed
    pub interval: f64,
}

impl Default for MovementScheduler {
    fn default() -> Self {
        Self::new(MOVE_INTERVAL)
    }
}

impl MovementScheduler {
    pub fn new(interval: f64) -> Self {
        Self {
            accumulator: 0.0,
            previous_time: 0.0,
            interval,
        }
    }

    /// Feed the current frame timestamp; returns true when a tick is due.
    ///
    /// At most one tick fires per frame and the accumulator is cleared rather
    /// than carried over.
    pub fn advance(&mut self, now: f64) -> bool {
        self.accumulator += now - self.previous_time;
        self.previous_time = now;
        if self.accumulator > self.interval {
            self.accumulator = 0.0;
            true
        } else {
            false
        }
    }
}

/// Move a chain one step: the head translates by `step`, every other segment
/// takes its predecessor's pre-tick position.
pub fn follow(segments: &mut [IVec2], step: IVec2) {
    let Some((head, tail)) = segments.split_first_mut() else {
        return;
    };
    let mut prev = *head;
    *head += step;
    for pos in tail {
        prev = std::mem::replace(pos, prev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_no_tick_at_threshold() {
        let mut sched = MovementScheduler::new(0.25);
        assert!(!sched.advance(0.125));
        assert!(!sched.advance(0.25)); // exactly the interval, not exceeded
        assert!(sched.advance(0.375));
        assert_eq!(sched.accumulator, 0.0);
        assert!(!sched.advance(0.5));
    }

    #[test]
    fn test_first_frame_counts_from_zero() {
        let mut sched = MovementScheduler::default();
        // Host clocks rarely start at zero; the first frame sees the full gap
        assert!(sched.advance(12.0));
        assert!(!sched.advance(12.1));
    }

    #[test]
    fn test_one_tick_per_frame() {
        let mut sched = MovementScheduler::new(0.2);
        assert!(sched.advance(1.0));
        // Leftover time is discarded, not replayed
        assert!(!sched.advance(1.1));
    }

    #[test]
    fn test_follow_three_segments() {
        let mut chain = vec![IVec2::new(50, 50), IVec2::new(40, 50), IVec2::new(30, 50)];
        follow(&mut chain, IVec2::new(0, 10));
        assert_eq!(chain, vec![IVec2::new(50, 60), IVec2::new(50, 50), IVec2::new(40, 50)]);
    }

    #[test]
    fn test_follow_empty() {
        let mut chain: Vec<IVec2> = Vec::new();
        follow(&mut chain, IVec2::new(10, 0));
        assert!(chain.is_empty());
    }

    fn step_strategy() -> impl Strategy<Value = IVec2> {
        prop_oneof![
            Just(IVec2::new(10, 0)),
            Just(IVec2::new(-10, 0)),
            Just(IVec2::new(0, 10)),
            Just(IVec2::new(0, -10)),
        ]
    }

    proptest! {
        #[test]
        fn prop_follow_shifts_chain(
            coords in prop::collection::vec((-500i32..500, -500i32..500), 1..40),
            step in step_strategy(),
        ) {
            let before: Vec<IVec2> = coords.iter().map(|&(x, y)| IVec2::new(x, y)).collect();
            let mut after = before.clone();
            follow(&mut after, step);

            prop_assert_eq!(after.len(), before.len());
            prop_assert_eq!(after[0], before[0] + step);
            for i in 1..after.len() {
                prop_assert_eq!(after[i], before[i - 1]);
            }
        }
    }
}
