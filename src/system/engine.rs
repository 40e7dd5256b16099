use super::error::TickResult;
use super::report::{Rates, Report};
use super::sampler::MetricSampler;
use super::scan::scan_processes;
use super::snapshot::{Counters, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Uninitialized,
    Primed,
}

/// Last seen value of each cumulative counter. `None` means no value has
/// been recorded yet, which is distinct from a counter that reads zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviousCounters {
    pub disk_bytes_read: Option<u64>,
    pub disk_bytes_written: Option<u64>,
    pub net_bytes_recv: Option<u64>,
    pub net_bytes_sent: Option<u64>,
}

impl PreviousCounters {
    /// Compute per-second rates against the stored values, then store
    /// `current` for the next call.
    pub fn advance(&mut self, current: &Counters, elapsed_seconds: Option<f64>) -> Rates {
        Rates {
            disk_read_per_sec: advance_one(
                &mut self.disk_bytes_read,
                current.disk_bytes_read,
                elapsed_seconds,
                "disk_bytes_read",
            ),
            disk_write_per_sec: advance_one(
                &mut self.disk_bytes_written,
                current.disk_bytes_written,
                elapsed_seconds,
                "disk_bytes_written",
            ),
            net_recv_per_sec: advance_one(
                &mut self.net_bytes_recv,
                current.net_bytes_recv,
                elapsed_seconds,
                "net_bytes_recv",
            ),
            net_sent_per_sec: advance_one(
                &mut self.net_bytes_sent,
                current.net_bytes_sent,
                elapsed_seconds,
                "net_bytes_sent",
            ),
        }
    }
}

fn advance_one(
    previous: &mut Option<u64>,
    current: u64,
    elapsed_seconds: Option<f64>,
    counter: &'static str,
) -> f64 {
    let rate = match (*previous, elapsed_seconds) {
        (Some(prev), Some(secs)) => {
            if current < prev {
                tracing::debug!(counter, prev, current, "counter went backwards, clamping rate to zero");
            }
            current.saturating_sub(prev) as f64 / secs
        }
        _ => 0.0,
    };
    *previous = Some(current);
    rate
}

/// Turns successive samples into rate-bearing [`Report`]s.
///
/// The engine has no timer of its own: a driver calls [`RateEngine::tick`]
/// once per interval with the seconds elapsed since the previous call.
pub struct RateEngine<S> {
    sampler: S,
    previous: PreviousCounters,
    state: EngineState,
}

impl<S: MetricSampler> RateEngine<S> {
    pub fn new(sampler: S) -> Self {
        RateEngine {
            sampler,
            previous: PreviousCounters::default(),
            state: EngineState::Uninitialized,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn previous(&self) -> &PreviousCounters {
        &self.previous
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Sample once and build a report. On error nothing is stored, so the
    /// next tick computes its deltas against the last successful one.
    pub fn tick(&mut self, elapsed_seconds: f64) -> TickResult<Report> {
        let _span = tracing::debug_span!("engine.tick", elapsed_seconds).entered();

        let sample = self.sampler.sample()?;
        let scan = scan_processes(&sample.processes)?;

        let elapsed = if elapsed_seconds.is_finite() && elapsed_seconds > 0.0 {
            Some(elapsed_seconds)
        } else {
            tracing::warn!(elapsed_seconds, "invalid elapsed time, reporting zero rates");
            None
        };
        let rates = self.previous.advance(&sample.counters, elapsed);

        if self.state == EngineState::Uninitialized {
            tracing::debug!("first sample recorded");
            self.state = EngineState::Primed;
        }
        if scan.skipped > 0 {
            tracing::debug!(
                skipped = scan.skipped,
                enumerated = scan.process_count,
                "processes skipped during scan"
            );
        }

        let snapshot = Snapshot {
            cpu_percent: sample.cpu_percent,
            memory_percent: sample.memory_percent,
            memory_available_bytes: sample.memory_available_bytes,
            memory_used_bytes: sample.memory_used_bytes,
            counters: sample.counters,
            process_count: scan.process_count,
            top_cpu_process: scan.top_cpu,
            top_mem_process: scan.top_mem,
        };
        Ok(Report::new(snapshot, rates))
    }
}
