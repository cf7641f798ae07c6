use std::time::Instant;

/// Emit a diagnostic message to stderr when verbose mode is on. Stdout
/// stays reserved for the outcome line.
pub fn emit(verbose: bool, msg: &str) {
    if verbose {
        eprintln!("[check-postgres-query] {}", msg);
    }
}

/// Wall-clock timer for diagnostics around connect and query.
pub struct Timer {
    started: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.started.elapsed().as_millis()
    }
}
