use perf_event::events::Hardware;
use perf_event::{Builder, Counter};

/// CPU cycle counter; silently inert where perf events are unavailable
/// (containers, non-Linux, restricted `perf_event_paranoid`).
pub struct PerfCounter {
    counter: Option<Counter>,
}

impl PerfCounter {
    pub fn new() -> Self {
        let counter = Builder::new()
            .kind(Hardware::CPU_CYCLES)
            .build()
            .map_err(|e| {
                tracing::warn!(error = %e, "perf counter unavailable, reporting wall time only");
                e
            })
            .ok();

        PerfCounter { counter }
    }

    pub fn start(&mut self) {
        if let Some(ref mut counter) = self.counter {
            let _ = counter.reset();
            let _ = counter.enable();
        }
    }

    pub fn stop(&mut self) {
        if let Some(ref mut counter) = self.counter {
            let _ = counter.disable();
        }
    }

    /// Cycles counted so far, or `None` without a working counter.
    pub fn read(&mut self) -> Option<u64> {
        let counter = self.counter.as_mut()?;
        match counter.read() {
            Ok(val) => Some(val),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read perf counter");
                None
            }
        }
    }
}

impl Default for PerfCounter {
    fn default() -> Self {
        Self::new()
    }
}
