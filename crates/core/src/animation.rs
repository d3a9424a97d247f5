//! Tweens driven by display frames
//!
//! The browser calls [`Animations::tick`] once per animation frame with the
//! frame timestamp. Each target (a text display or a progress bar) holds at
//! most one running tween: starting a new one on the same target cancels
//! the old one, which then never writes again and never completes.

use crate::surface::TextSlot;

/// Progress curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// `1 - (1 - p)^3`
    EaseOutCubic,
}

impl Easing {
    pub fn apply(self, progress: f64) -> f64 {
        match self {
            Self::Linear => progress,
            Self::EaseOutCubic => 1.0 - (1.0 - progress).powi(3),
        }
    }
}

/// One interpolation from `from` to `to`, timed in milliseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Tween {
    pub const fn new(from: f64, to: f64, start: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing: Easing::Linear,
        }
    }

    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in `[0, 1]`. Frames stamped before `start` count as 0.
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now: f64) -> f64 {
        let eased = self.easing.apply(self.progress(now));
        (self.to - self.from).mul_add(eased, self.from)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Element a tween writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTarget {
    Text(TextSlot),
    /// Progress bar by position on the page
    Bar(usize),
}

/// Follow-up work once a tween reaches its end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    RecomputePercent,
}

/// Value to write for one target on one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub target: AnimationTarget,
    pub value: f64,
    pub finished: bool,
    /// Set only on the finishing frame
    pub completion: Option<Completion>,
}

/// Identifies one started tween
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

#[derive(Debug, Clone)]
struct Running {
    handle: AnimationHandle,
    target: AnimationTarget,
    tween: Tween,
    completion: Option<Completion>,
}

/// Running tweens, at most one per target, in start order
#[derive(Debug, Default)]
pub struct Animations {
    running: Vec<Running>,
    next_handle: u64,
}

impl Animations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `tween` on `target`, cancelling whatever was running there
    pub fn start(
        &mut self,
        target: AnimationTarget,
        tween: Tween,
        completion: Option<Completion>,
    ) -> AnimationHandle {
        self.cancel(target);
        let handle = AnimationHandle(self.next_handle);
        self.next_handle += 1;
        self.running.push(Running {
            handle,
            target,
            tween,
            completion,
        });
        handle
    }

    /// Drop the tween on `target`, if any. Its completion is discarded.
    pub fn cancel(&mut self, target: AnimationTarget) -> bool {
        let before = self.running.len();
        self.running.retain(|r| r.target != target);
        self.running.len() != before
    }

    pub fn is_running(&self, handle: AnimationHandle) -> bool {
        self.running.iter().any(|r| r.handle == handle)
    }

    pub fn is_active(&self) -> bool {
        !self.running.is_empty()
    }

    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    /// Sample every running tween at `now`; finished tweens are removed
    pub fn tick(&mut self, now: f64) -> Vec<Frame> {
        let frames: Vec<Frame> = self
            .running
            .iter()
            .map(|r| {
                let finished = r.tween.is_finished(now);
                Frame {
                    target: r.target,
                    value: r.tween.sample(now),
                    finished,
                    completion: if finished { r.completion } else { None },
                }
            })
            .collect();
        self.running.retain(|r| !r.tween.is_finished(now));
        frames
    }
}
