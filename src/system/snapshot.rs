use super::error::ProbeError;

/// The four cumulative OS counters tracked between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub disk_bytes_read: u64,
    pub disk_bytes_written: u64,
    pub net_bytes_recv: u64,
    pub net_bytes_sent: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSample {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
    pub memory_percent: f32,
}

/// Outcome of inspecting one enumerated process.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessProbe {
    Ok(ProcessSample),
    Skipped(ProbeError),
}

/// Raw readings from one call to a [`MetricSampler`](super::sampler::MetricSampler).
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSample {
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub memory_available_bytes: u64,
    pub memory_used_bytes: u64,
    pub counters: Counters,
    pub processes: Vec<ProcessProbe>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopProcess {
    pub name: String,
    pub percent: f32,
}

/// Everything observed at one tick, with the process table reduced to its
/// top consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub memory_available_bytes: u64,
    pub memory_used_bytes: u64,
    pub counters: Counters,
    pub process_count: usize,
    pub top_cpu_process: TopProcess,
    pub top_mem_process: TopProcess,
}
