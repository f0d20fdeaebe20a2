use std::time::Instant;

/// Runs a phase body and returns its result alongside elapsed wall-clock
/// milliseconds, rounded to two decimal places.
///
/// The clock starts immediately before the body's first operation and stops
/// immediately after its last. State reset is timed by the caller's run
/// brackets, never by this wrapper.
pub fn time_phase<T, E>(
    name: &str,
    body: impl FnOnce() -> Result<T, E>,
) -> Result<(T, f64), E> {
    tracing::info!("Benchmarking {name}...");
    let start = Instant::now();
    let out = body()?;
    let elapsed_ms = round2(start.elapsed().as_secs_f64() * 1000.0);
    Ok((out, elapsed_ms))
}

fn round2(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}
