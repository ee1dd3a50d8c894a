use std::time::{Duration, Instant};

/// How long one named stage of the pipeline took
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StageTiming {
    pub label: String,
    pub duration: Duration,
}

impl StageTiming {
    pub fn seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}

/// Runs `f` and measures how long it took.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> (T, StageTiming) {
    let before = Instant::now();
    let res = f();
    let timing = StageTiming {
        label: label.to_owned(),
        duration: before.elapsed(),
    };
    log::debug!(
        "Stage '{label}' took {}",
        humantime::Duration::from(timing.duration)
    );
    (res, timing)
}

/// Rate limits something, like progress logs.
pub struct Every {
    every: Duration,
    last: Instant,
}

impl Every {
    pub fn new(every: Duration) -> Self {
        Self {
            every,
            last: Instant::now(),
        }
    }

    pub fn perform(&mut self, f: impl FnOnce()) {
        let now = Instant::now();
        if now - self.last >= self.every {
            self.last = now;
            f()
        }
    }
}
