//! Frame timing
//!
//! The browser hands every animation frame a monotonic timestamp; natively a
//! `TimeSource` plays that role. `FrameClock` turns timestamps into per-frame
//! deltas, and `run_frames` is the scheduling contract: call the frame
//! callback repeatedly until it asks to stop.

/// Converts monotonic frame timestamps into elapsed milliseconds
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Milliseconds since the previous call. The first call yields 0 so a
    /// late first frame does not produce a startup spike.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last = Some(now_ms);
        dt as f32
    }

    /// Forget the previous timestamp
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Source of monotonic frame timestamps (ms)
pub trait TimeSource {
    fn now_ms(&mut self) -> f64;
}

/// Deterministic clock advancing a fixed step per read
#[derive(Debug, Clone)]
pub struct FixedStepTime {
    now: f64,
    step: f64,
}

impl FixedStepTime {
    pub fn new(start_ms: f64, step_ms: f64) -> Self {
        Self {
            now: start_ms,
            step: step_ms,
        }
    }
}

impl TimeSource for FixedStepTime {
    fn now_ms(&mut self) -> f64 {
        let now = self.now;
        self.now += self.step;
        now
    }
}

/// Returned by a frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Run `frame` with successive timestamps until it returns `Stop`.
/// Returns the number of frames run.
pub fn run_frames<T, F>(time: &mut T, mut frame: F) -> u64
where
    T: TimeSource,
    F: FnMut(f64) -> LoopControl,
{
    let mut frames = 0;
    loop {
        frames += 1;
        if frame(time.now_ms()) == LoopControl::Stop {
            return frames;
        }
    }
}
