#![allow(dead_code)]

use std::collections::VecDeque;

use simon::system::error::{ProbeError, SampleError};
use simon::system::sampler::MetricSampler;
use simon::system::snapshot::{Counters, ProcessProbe, ProcessSample, SystemSample};

/// Replays scripted samples in order; panics if the script runs dry.
#[derive(Default)]
pub struct ScriptedSampler {
    script: VecDeque<Result<SystemSample, SampleError>>,
}

impl ScriptedSampler {
    pub fn new(script: impl IntoIterator<Item = Result<SystemSample, SampleError>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl MetricSampler for ScriptedSampler {
    fn sample(&mut self) -> Result<SystemSample, SampleError> {
        self.script
            .pop_front()
            .expect("scripted sampler exhausted")
    }
}

pub fn process(pid: u32, name: &str, cpu: f32, mem: f32) -> ProcessProbe {
    ProcessProbe::Ok(ProcessSample {
        pid,
        name: name.to_string(),
        cpu_percent: cpu,
        memory_percent: mem,
    })
}

pub fn denied(pid: u32) -> ProcessProbe {
    ProcessProbe::Skipped(ProbeError::AccessDenied(pid))
}

pub fn exited(pid: u32) -> ProcessProbe {
    ProcessProbe::Skipped(ProbeError::Exited(pid))
}

pub fn sample_with(counters: Counters, processes: Vec<ProcessProbe>) -> SystemSample {
    SystemSample {
        cpu_percent: 23.4,
        memory_percent: 61.5,
        memory_available_bytes: 6 * 1024 * 1024 * 1024,
        memory_used_bytes: 10 * 1024 * 1024 * 1024,
        counters,
        processes,
    }
}

pub fn sample(read: u64, written: u64, recv: u64, sent: u64) -> SystemSample {
    sample_with(
        Counters {
            disk_bytes_read: read,
            disk_bytes_written: written,
            net_bytes_recv: recv,
            net_bytes_sent: sent,
        },
        vec![
            process(1, "launchd", 0.4, 0.1),
            process(88, "WindowServer", 12.0, 2.5),
            process(412, "Safari", 4.0, 9.7),
        ],
    )
}
