use std::time::{Duration, Instant};

/// Wall-clock timer.
pub struct Timer(Instant);

impl Timer {
    #[inline]
    pub fn start() -> Self {
        Self(Instant::now())
    }

    #[inline]
    pub fn reset(&mut self) {
        self.0 = Instant::now();
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

/// Formats the mean time of one repeat out of `total`.
pub fn human_time(repeats: usize, total: Duration) -> String {
    let nanos = total.as_nanos() as f64 / repeats.max(1) as f64;
    if nanos >= 1e9 {
        return format!("{:.3}s", nanos / 1e9);
    }
    let (scaled, unit) = scale(nanos, 1000.0, &["ns", "us", "ms"]);
    format!("{:.1}{}", scaled, unit)
}

pub fn human_size(bytes: usize) -> String {
    if bytes < 1024 {
        return format!("{}B", bytes);
    }
    let (scaled, unit) = scale(bytes as f64 / 1024.0, 1024.0, &["KiB", "MiB", "GiB"]);
    format!("{:.1}{}", scaled, unit)
}

/// Divides `value` by `step` until it drops below `step` or the units run out.
fn scale(mut value: f64, step: f64, units: &[&'static str]) -> (f64, &'static str) {
    let mut unit = 0;
    while value >= step && unit + 1 < units.len() {
        value /= step;
        unit += 1;
    }
    (value, units[unit])
}
