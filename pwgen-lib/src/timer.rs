use std::time::Duration;
use std::time::Instant;

/// Runs `task` exactly once and returns its result together with the
/// elapsed wall-clock time.
pub fn measure<T, F: FnOnce() -> T>(task: F) -> (T, Duration) {
    let start = Instant::now();
    let result = task();
    let elapsed = start.elapsed();

    (result, elapsed)
}
