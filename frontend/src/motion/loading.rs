use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{LOADING_GRACE_MS, LOADING_MAX_INCREMENT, LOADING_TICK_MS};

/// Cosmetic startup progress. Not tied to real asset loading.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadingProgress {
    percent: f64,
}

impl LoadingProgress {
    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn display_percent(&self) -> u32 {
        self.percent.round() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }

    /// Adds `increment`, clamped to 100. Returns `true` only on the step
    /// that reaches 100.
    pub fn step(&mut self, increment: f64) -> bool {
        if self.is_complete() {
            return false;
        }
        self.percent = (self.percent + increment.max(0.0)).min(100.0);
        self.is_complete()
    }
}

pub trait IncrementSource {
    fn next_increment(&mut self) -> f64;
}

pub struct RandomIncrements<R: Rng> {
    rng: R,
    max: f64,
}

impl RandomIncrements<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomIncrements<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max: LOADING_MAX_INCREMENT,
        }
    }
}

impl<R: Rng> IncrementSource for RandomIncrements<R> {
    fn next_increment(&mut self) -> f64 {
        self.rng.gen_range(0.0..self.max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadingEvent {
    Progress(f64),
    /// 100 reached on this tick; the tick timer should stop.
    Finished,
    Idle,
}

/// Drives [`LoadingProgress`] from a fixed-interval tick and tracks the
/// grace period before completion is announced.
pub struct LoadingSequence<S: IncrementSource> {
    progress: LoadingProgress,
    source: S,
    tick_ms: u32,
    grace_ms: u32,
    elapsed_ms: u32,
    finished_at_ms: Option<u32>,
    completed: bool,
}

impl<S: IncrementSource> LoadingSequence<S> {
    pub fn new(source: S) -> Self {
        Self::with_timing(source, LOADING_TICK_MS, LOADING_GRACE_MS)
    }

    pub fn with_timing(source: S, tick_ms: u32, grace_ms: u32) -> Self {
        Self {
            progress: LoadingProgress::default(),
            source,
            tick_ms,
            grace_ms,
            elapsed_ms: 0,
            finished_at_ms: None,
            completed: false,
        }
    }

    pub fn progress(&self) -> LoadingProgress {
        self.progress
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn tick(&mut self) -> LoadingEvent {
        if self.progress.is_complete() {
            return LoadingEvent::Idle;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(self.tick_ms);
        let increment = self.source.next_increment();
        if self.progress.step(increment) {
            self.finished_at_ms = Some(self.elapsed_ms);
            LoadingEvent::Finished
        } else {
            LoadingEvent::Progress(self.progress.percent())
        }
    }

    pub fn completion_due_ms(&self) -> Option<u32> {
        self.finished_at_ms
            .map(|at| at.saturating_add(self.grace_ms))
    }

    /// Delay from the current tick until completion is due. `None` while
    /// progress is still running.
    pub fn grace_remaining_ms(&self) -> Option<u32> {
        self.completion_due_ms()
            .map(|due| due.saturating_sub(self.elapsed_ms))
    }

    /// Marks the grace period as elapsed. `true` exactly once, and only
    /// after the progress has finished.
    pub fn complete(&mut self) -> bool {
        if self.finished_at_ms.is_none() || self.completed {
            return false;
        }
        self.completed = true;
        true
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<f64>);

    impl IncrementSource for Fixed {
        fn next_increment(&mut self) -> f64 {
            if self.0.len() > 1 {
                self.0.remove(0)
            } else {
                self.0[0]
            }
        }
    }

    #[test]
    fn step_clamps_and_reports_once() {
        let mut progress = LoadingProgress::default();
        assert!(!progress.step(60.0));
        assert!(progress.step(60.0));
        assert_eq!(progress.percent(), 100.0);
        assert!(!progress.step(10.0));
        assert_eq!(progress.percent(), 100.0);
    }

    #[test]
    fn negative_increments_never_decrease() {
        let mut progress = LoadingProgress::default();
        progress.step(10.0);
        progress.step(-5.0);
        assert_eq!(progress.percent(), 10.0);
    }

    #[test]
    fn random_increments_stay_in_range() {
        let mut source = RandomIncrements::new(StdRng::seed_from_u64(7));
        for _ in 0..1_000 {
            let inc = source.next_increment();
            assert!((0.0..LOADING_MAX_INCREMENT).contains(&inc));
        }
    }

    #[test]
    fn random_run_reaches_exactly_100_and_completes_once() {
        let mut sequence = LoadingSequence::new(RandomIncrements::new(StdRng::seed_from_u64(42)));
        let mut finished = 0;
        let mut last = 0.0;
        for _ in 0..10_000 {
            match sequence.tick() {
                LoadingEvent::Progress(p) => {
                    assert!(p >= last && p < 100.0);
                    last = p;
                }
                LoadingEvent::Finished => finished += 1,
                LoadingEvent::Idle => break,
            }
        }
        assert_eq!(finished, 1);
        assert_eq!(sequence.progress().percent(), 100.0);

        let due = sequence.completion_due_ms().unwrap();
        assert_eq!(due, sequence.elapsed_ms() + 500);

        assert!(sequence.complete());
        assert!(!sequence.complete());
        assert!(sequence.is_completed());
    }

    #[test]
    fn completion_scheduled_grace_after_finish() {
        let mut sequence = LoadingSequence::new(Fixed(vec![25.0]));
        let events: Vec<LoadingEvent> = (0..5).map(|_| sequence.tick()).collect();
        assert_eq!(
            events,
            vec![
                LoadingEvent::Progress(25.0),
                LoadingEvent::Progress(50.0),
                LoadingEvent::Progress(75.0),
                LoadingEvent::Finished,
                LoadingEvent::Idle,
            ]
        );
        assert_eq!(sequence.elapsed_ms(), 400);
        assert_eq!(sequence.completion_due_ms(), Some(900));
    }

    #[test]
    fn remaining_grace_counts_from_finishing_tick() {
        let mut sequence = LoadingSequence::with_timing(Fixed(vec![50.0]), 100, 500);
        sequence.tick();
        assert_eq!(sequence.grace_remaining_ms(), None);
        assert_eq!(sequence.tick(), LoadingEvent::Finished);
        assert_eq!(sequence.completion_due_ms(), Some(700));
        assert_eq!(sequence.grace_remaining_ms(), Some(500));
        assert!(!sequence.is_completed());
    }

    #[test]
    fn cannot_complete_before_finishing() {
        let mut sequence = LoadingSequence::new(Fixed(vec![10.0]));
        sequence.tick();
        assert!(!sequence.complete());
        assert_eq!(sequence.completion_due_ms(), None);
    }

    #[test]
    fn display_percent_rounds() {
        let mut progress = LoadingProgress::default();
        progress.step(12.6);
        assert_eq!(progress.display_percent(), 13);
    }
}
