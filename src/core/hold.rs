use std::time::{Duration, Instant};

/** Measures how long a pointer was held down on a square. */
pub trait HoldTimer {
    fn start(&mut self);
    /** Elapsed time since `start`, zero when the timer is not running. */
    fn stop(&mut self) -> Duration;
    fn cancel(&mut self);
}

#[derive(Debug, Default)]
pub struct Hold {
    started_at: Option<Instant>,
}

impl HoldTimer for Hold {
    fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    fn stop(&mut self) -> Duration {
        self.started_at
            .take()
            .map(|started_at| started_at.elapsed())
            .unwrap_or_default()
    }

    fn cancel(&mut self) {
        self.started_at = None;
    }
}
